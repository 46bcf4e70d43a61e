//! Cyclic segment coloring.

/// Opaque color identity of a tube segment.
///
/// The renderer resolves an identity to RGB through
/// [`ColorOptions`](crate::options::ColorOptions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorId {
    /// First palette entry.
    Orange,
    /// Second palette entry.
    DarkOrange,
    /// Third palette entry.
    Gold,
    /// Fourth palette entry.
    Coral,
    /// Fifth palette entry.
    Crimson,
}

/// Fixed, ordered segment palette.
pub const PALETTE: [ColorId; 5] = [
    ColorId::Orange,
    ColorId::DarkOrange,
    ColorId::Gold,
    ColorId::Coral,
    ColorId::Crimson,
];

/// Color identity for the segment at `segment_index`, cycling through
/// [`PALETTE`].
#[must_use]
pub const fn color_for(segment_index: usize) -> ColorId {
    PALETTE[segment_index % PALETTE.len()]
}
