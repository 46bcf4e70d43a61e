use web_time::{Duration, Instant};

/// Timing values for one frame of the render loop.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameTick {
    /// Seconds since the clock started (monotonically increasing).
    pub elapsed: f32,
    /// Seconds since the previous tick (never negative).
    pub delta: f32,
}

/// Frame clock producing `elapsed`/`delta` pairs, with smoothed FPS.
#[derive(Debug)]
pub struct FrameClock {
    /// Clock start
    start: Instant,
    /// Last frame timestamp
    last_frame: Instant,
    /// Longest delta reported; guards against huge jumps after a stall
    max_delta: Duration,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    /// Start a clock now.
    #[must_use]
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    /// Start a clock at a given instant.
    #[must_use]
    pub fn starting_at(start: Instant) -> Self {
        Self {
            start,
            last_frame: start,
            max_delta: Duration::from_millis(250),
            smoothed_fps: 60.0, // Start with reasonable default
            smoothing: 0.05,    // 5% new value, 95% old value
        }
    }

    /// Cap on the reported delta (e.g. after the window was hidden).
    #[must_use]
    pub fn with_max_delta(mut self, max_delta: Duration) -> Self {
        self.max_delta = max_delta;
        self
    }

    /// Advance to the current instant.
    pub fn tick(&mut self) -> FrameTick {
        self.tick_at(Instant::now())
    }

    /// Advance to `now`. Instants earlier than the previous tick count as a
    /// zero-length frame.
    pub fn tick_at(&mut self, now: Instant) -> FrameTick {
        let now = now.max(self.last_frame);
        let frame = now.duration_since(self.last_frame);
        self.last_frame = now;

        let frame_time = frame.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }

        FrameTick {
            elapsed: now.duration_since(self.start).as_secs_f32(),
            delta: frame.min(self.max_delta).as_secs_f32(),
        }
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}
