//! Benchmarks for the helix geometry pipeline.
#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use helixtube::{
    animation::{advance, AnimationMode, AnimationState},
    geometry::{sample, segment, tube, HelixParameters, CHUNK_SIZE},
    options::Options,
    scene::HelixScene,
    util::FrameTick,
};

fn sample_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample");
    for length in [100u32, 1000, 2000] {
        let params = HelixParameters {
            length,
            ..HelixParameters::default()
        };
        group.bench_function(format!("{length}_steps"), |b| {
            b.iter(|| black_box(sample(black_box(&params))));
        });
    }
    group.finish();
}

fn tube_benchmark(c: &mut Criterion) {
    let curve = sample(&HelixParameters::default());
    let runs = segment(&curve, CHUNK_SIZE);
    let run = runs[0].points;
    c.bench_function("single_tube_build", |b| {
        b.iter(|| black_box(tube::build(black_box(run), 0.1, 8)));
    });
}

fn frame_benchmark(c: &mut Criterion) {
    let mut scene = HelixScene::new(&Options::default()).unwrap();
    let mut elapsed = 0.0f32;
    c.bench_function("cached_frame", |b| {
        b.iter(|| {
            elapsed += 1.0 / 60.0;
            let out = scene
                .frame(FrameTick {
                    elapsed,
                    delta: 1.0 / 60.0,
                })
                .unwrap();
            black_box(out.segments.len())
        });
    });

    c.bench_function("advance", |b| {
        b.iter(|| {
            black_box(advance(
                black_box(AnimationState::default()),
                AnimationMode::Rotate,
                1.0,
                1.0 / 60.0,
                std::f32::consts::TAU,
            ))
        });
    });
}

criterion_group!(benches, sample_benchmark, tube_benchmark, frame_benchmark);
criterion_main!(benches);
