//! Fixed top-down orthographic camera used for height captures.

use glam::{Vec2, Vec3};
use relief_mesh::{TileFootprint, VerticalExtent};

/// Margin added above the highest merged vertex so every triangle sits
/// below the camera plane. Anything at or above any plausible geometry
/// epsilon works; 10 units matches the original capture setup.
pub const DEFAULT_CAMERA_MARGIN: f32 = 10.0;

/// Orthographic camera looking straight down the Y axis, horizontally
/// framed on one tile's footprint.
#[derive(Clone, Copy, Debug)]
pub struct OverheadCamera {
    footprint: TileFootprint,
    margin: f32,
    eye_height: f32,
}

impl OverheadCamera {
    /// Frame the camera on a tile footprint. The vertical position is set
    /// per capture via [`OverheadCamera::raise_above`].
    pub fn framing(footprint: TileFootprint, margin: f32) -> Self {
        Self {
            footprint,
            margin,
            eye_height: margin,
        }
    }

    /// Reposition the camera to `extent.max + margin`, guaranteeing all
    /// captured geometry lies below the camera plane.
    pub fn raise_above(&mut self, extent: VerticalExtent) {
        self.eye_height = if extent.is_empty() {
            self.margin
        } else {
            extent.max + self.margin
        };
    }

    /// Current camera elevation.
    pub fn eye_height(&self) -> f32 {
        self.eye_height
    }

    /// Project a tile-local position onto the capture image plane in
    /// continuous pixel coordinates, X mapping to image rows and Z to
    /// image columns.
    pub fn project(&self, position: Vec3, resolution: usize) -> Vec2 {
        let size = self.footprint.size().max(Vec2::splat(f32::EPSILON));
        let u = (position.x - self.footprint.min.x) / size.x;
        let v = (position.z - self.footprint.min.y) / size.y;
        Vec2::new(u, v) * resolution as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn footprint() -> TileFootprint {
        TileFootprint {
            min: Vec2::new(-10.0, -10.0),
            max: Vec2::new(10.0, 10.0),
        }
    }

    #[test]
    fn test_raise_above_clears_geometry() {
        let mut camera = OverheadCamera::framing(footprint(), DEFAULT_CAMERA_MARGIN);
        let extent = VerticalExtent {
            min: -5.0,
            max: 42.0,
        };
        camera.raise_above(extent);
        assert_eq!(camera.eye_height(), 52.0);
        assert!(camera.eye_height() > extent.max);
    }

    #[test]
    fn test_projection_spans_image() {
        let camera = OverheadCamera::framing(footprint(), DEFAULT_CAMERA_MARGIN);
        let resolution = 16;

        let corner = camera.project(Vec3::new(-10.0, 0.0, -10.0), resolution);
        assert_eq!(corner, Vec2::ZERO);

        let opposite = camera.project(Vec3::new(10.0, 0.0, 10.0), resolution);
        assert_eq!(opposite, Vec2::new(16.0, 16.0));

        let center = camera.project(Vec3::ZERO, resolution);
        assert_eq!(center, Vec2::new(8.0, 8.0));
    }

    #[test]
    fn test_projection_ignores_elevation() {
        let camera = OverheadCamera::framing(footprint(), DEFAULT_CAMERA_MARGIN);
        let low = camera.project(Vec3::new(3.0, -100.0, 3.0), 8);
        let high = camera.project(Vec3::new(3.0, 100.0, 3.0), 8);
        assert_eq!(low, high, "orthographic top-down drops Y");
    }
}
