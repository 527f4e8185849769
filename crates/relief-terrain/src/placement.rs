//! Terrain placement derived from the tile footprint and height extent.

use glam::Vec3;
use relief_mesh::{TileFootprint, VerticalExtent};

/// Where one tile's terrain sits and how large it is.
///
/// The origin is the terrain's minimum corner: the footprint center minus
/// its half-extents horizontally, and the lowest observed elevation
/// vertically, so the terrain's horizontal center coincides with the tile
/// mesh bounding-box center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TerrainPlacement {
    /// Minimum corner, tile-local X/Z, absolute world Y.
    pub origin: Vec3,
    /// Edge lengths, Y being the height span.
    pub size: Vec3,
}

impl TerrainPlacement {
    /// Compute the placement for a tile.
    pub fn from_footprint(footprint: TileFootprint, extent: VerticalExtent) -> Self {
        let center = footprint.center();
        let half = footprint.half_extents();
        let size = footprint.size();
        Self {
            origin: Vec3::new(center.x - half.x, extent.min, center.y - half.y),
            size: Vec3::new(size.x, extent.height(), size.y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_placement_centers_on_footprint() {
        let footprint = TileFootprint {
            min: Vec2::new(10.0, -30.0),
            max: Vec2::new(50.0, 10.0),
        };
        let extent = VerticalExtent {
            min: 120.0,
            max: 180.0,
        };

        let placement = TerrainPlacement::from_footprint(footprint, extent);
        assert_eq!(placement.origin, Vec3::new(10.0, 120.0, -30.0));
        assert_eq!(placement.size, Vec3::new(40.0, 60.0, 40.0));

        // The horizontal center must line up with the footprint center.
        let center_x = placement.origin.x + placement.size.x * 0.5;
        let center_z = placement.origin.z + placement.size.z * 0.5;
        assert_eq!(Vec2::new(center_x, center_z), footprint.center());
    }

    #[test]
    fn test_flat_tile_has_zero_vertical_size() {
        let footprint = TileFootprint {
            min: Vec2::ZERO,
            max: Vec2::new(8.0, 8.0),
        };
        let extent = VerticalExtent { min: 0.0, max: 0.0 };
        let placement = TerrainPlacement::from_footprint(footprint, extent);
        assert_eq!(placement.origin.y, 0.0);
        assert_eq!(placement.size.y, 0.0);
    }
}
