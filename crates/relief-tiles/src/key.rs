//! Stable identifier for one map tile.

use std::fmt;

/// Identifies one tile of the host map engine's tiling scheme.
///
/// Unique across concurrently active tiles; correlates a tile's ground
/// accumulator, feature accumulator, and terrain artifact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileKey {
    /// Zoom level.
    pub zoom: u8,
    /// Column within the zoom level.
    pub x: u32,
    /// Row within the zoom level.
    pub y: u32,
}

impl TileKey {
    /// Create a key from zoom/column/row.
    pub fn new(zoom: u8, x: u32, y: u32) -> Self {
        Self { zoom, x, y }
    }
}

impl fmt::Display for TileKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.zoom, self.x, self.y)
    }
}
