//! Horizontal tile footprint derived from the ground mesh bounds.

use glam::{Vec2, Vec3};

/// X/Z bounding rectangle of a tile's ground mesh, in the tile's local
/// space. Frames the overhead capture and positions the terrain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileFootprint {
    /// Minimum X/Z corner.
    pub min: Vec2,
    /// Maximum X/Z corner.
    pub max: Vec2,
}

impl TileFootprint {
    /// Compute the footprint of a set of local-space positions.
    ///
    /// Returns `None` for an empty set; a well-formed tile always has at
    /// least one ground vertex.
    pub fn from_positions<'a>(positions: impl IntoIterator<Item = &'a Vec3>) -> Option<Self> {
        let mut iter = positions.into_iter();
        let first = iter.next()?;
        let mut min = Vec2::new(first.x, first.z);
        let mut max = min;
        for p in iter {
            min = min.min(Vec2::new(p.x, p.z));
            max = max.max(Vec2::new(p.x, p.z));
        }
        Some(Self { min, max })
    }

    /// Horizontal center.
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Horizontal size (X/Z edge lengths).
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Half of [`TileFootprint::size`].
    pub fn half_extents(&self) -> Vec2 {
        self.size() * 0.5
    }
}
