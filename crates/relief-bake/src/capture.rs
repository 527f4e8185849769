//! Off-screen overhead capture of one merged mesh.

use relief_mesh::{MergedMesh, TileFootprint, VerticalExtent};
use thiserror::Error;
use tracing::trace;

use crate::camera::OverheadCamera;
use crate::raster::fill_triangle;
use crate::texel::Texel;

/// Errors raised while capturing or decoding an overhead render.
#[derive(Debug, Error)]
pub enum BakeError {
    /// The read-back texel count does not match `resolution * resolution`.
    /// The capture is invalid and must not be truncated or padded.
    #[error("readback returned {actual} texels, expected {expected}")]
    ReadbackFailure {
        /// `resolution * resolution`.
        expected: usize,
        /// Texels actually read back.
        actual: usize,
    },
}

/// One completed overhead capture.
///
/// Carries the extent that was in effect when the mesh was encoded, so
/// the decoder maps heights back through exactly the values used at
/// encode time even if the accumulator's extent grows afterwards.
#[derive(Clone, Debug)]
pub struct CaptureImage {
    /// Read-back texels, x-major, `resolution * resolution` entries.
    pub texels: Vec<Texel>,
    /// Cells per side.
    pub resolution: usize,
    /// Extent used by the encode pass for this capture.
    pub extent: VerticalExtent,
}

/// Renders one merged mesh at a time from directly above into an
/// off-screen buffer and reads the buffer back.
///
/// One renderer (one camera/buffer pair) is shared by the ground and
/// feature passes of a tile; captures are blocking and never overlap.
#[derive(Debug)]
pub struct OverheadRenderer {
    camera: OverheadCamera,
    resolution: usize,
    buffer: Vec<Texel>,
}

impl OverheadRenderer {
    /// Allocate a `resolution * resolution` buffer framed on the tile
    /// footprint.
    pub fn configure(resolution: usize, footprint: TileFootprint, margin: f32) -> Self {
        Self {
            camera: OverheadCamera::framing(footprint, margin),
            resolution,
            buffer: vec![Texel::CLEAR; resolution * resolution],
        }
    }

    /// Cells per side of the capture buffer.
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Synchronously render `mesh` top-down and read the buffer back.
    ///
    /// The camera is repositioned to `extent.max + margin` first, so all
    /// geometry sits below the camera plane. Only the given mesh is
    /// visible for the capture; ground and features are never captured
    /// in the same pass.
    pub fn capture(
        &mut self,
        mesh: &MergedMesh,
        extent: VerticalExtent,
    ) -> Result<CaptureImage, BakeError> {
        self.camera.raise_above(extent);
        debug_assert!(extent.is_empty() || self.camera.eye_height() > extent.max);
        self.buffer.fill(Texel::CLEAR);

        for triangle in mesh.triangles.chunks_exact(3) {
            let [i0, i1, i2] = [
                triangle[0] as usize,
                triangle[1] as usize,
                triangle[2] as usize,
            ];
            let corners = [
                self.camera.project(mesh.positions[i0], self.resolution),
                self.camera.project(mesh.positions[i1], self.resolution),
                self.camera.project(mesh.positions[i2], self.resolution),
            ];
            let channels = [mesh.channel[i0], mesh.channel[i1], mesh.channel[i2]];
            fill_triangle(&mut self.buffer, self.resolution, corners, channels);
        }

        let texels = self.buffer.clone();
        let expected = self.resolution * self.resolution;
        if texels.len() != expected {
            return Err(BakeError::ReadbackFailure {
                expected,
                actual: texels.len(),
            });
        }
        trace!(
            resolution = self.resolution,
            triangles = mesh.triangle_count(),
            covered = texels.iter().filter(|t| !t.is_clear()).count(),
            "overhead capture complete"
        );

        Ok(CaptureImage {
            texels,
            resolution: self.resolution,
            extent,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::DEFAULT_CAMERA_MARGIN;
    use crate::encode::encode_heights;
    use glam::{Affine3A, Vec2, Vec3};
    use relief_mesh::{MeshAccumulator, SourceMesh};

    fn footprint() -> TileFootprint {
        TileFootprint {
            min: Vec2::new(0.0, 0.0),
            max: Vec2::new(8.0, 8.0),
        }
    }

    fn ground_quad(elevation: f32) -> SourceMesh {
        SourceMesh::new(
            vec![
                Vec3::new(0.0, elevation, 0.0),
                Vec3::new(8.0, elevation, 0.0),
                Vec3::new(8.0, elevation, 8.0),
                Vec3::new(0.0, elevation, 8.0),
            ],
            vec![0, 1, 2, 0, 2, 3],
        )
    }

    #[test]
    fn test_capture_reads_back_resolution_squared_texels() {
        let mut accumulator = MeshAccumulator::new();
        let identity = Affine3A::IDENTITY;
        accumulator
            .append(&ground_quad(5.0), &identity, &identity)
            .unwrap();
        let extent = accumulator.extent();
        encode_heights(accumulator.merged_mut(), &identity, extent);

        let mut renderer = OverheadRenderer::configure(8, footprint(), DEFAULT_CAMERA_MARGIN);
        let image = renderer.capture(accumulator.merged(), extent).unwrap();
        assert_eq!(image.texels.len(), 64);
        assert_eq!(image.resolution, 8);
        assert_eq!(image.extent, extent);
    }

    #[test]
    fn test_capture_covers_footprint_spanning_quad() {
        let mut accumulator = MeshAccumulator::new();
        let identity = Affine3A::IDENTITY;
        accumulator
            .append(&ground_quad(0.0), &identity, &identity)
            .unwrap();
        let extent = accumulator.extent();
        encode_heights(accumulator.merged_mut(), &identity, extent);

        let mut renderer = OverheadRenderer::configure(8, footprint(), DEFAULT_CAMERA_MARGIN);
        let image = renderer.capture(accumulator.merged(), extent).unwrap();
        assert!(
            image.texels.iter().all(|t| !t.is_clear()),
            "footprint-spanning ground must cover every texel"
        );
    }

    #[test]
    fn test_empty_mesh_captures_all_clear() {
        let accumulator = MeshAccumulator::new();
        let mut renderer = OverheadRenderer::configure(4, footprint(), DEFAULT_CAMERA_MARGIN);
        let image = renderer
            .capture(accumulator.merged(), accumulator.extent())
            .unwrap();
        assert!(image.texels.iter().all(Texel::is_clear));
    }

    #[test]
    fn test_consecutive_captures_reuse_buffer_cleanly() {
        let mut ground = MeshAccumulator::new();
        let identity = Affine3A::IDENTITY;
        ground
            .append(&ground_quad(0.0), &identity, &identity)
            .unwrap();
        let extent = ground.extent();
        encode_heights(ground.merged_mut(), &identity, extent);

        let empty = MeshAccumulator::new();

        let mut renderer = OverheadRenderer::configure(4, footprint(), DEFAULT_CAMERA_MARGIN);
        let first = renderer.capture(ground.merged(), extent).unwrap();
        assert!(first.texels.iter().any(|t| !t.is_clear()));

        // The second capture must not see the first capture's texels.
        let second = renderer.capture(empty.merged(), empty.extent()).unwrap();
        assert!(second.texels.iter().all(Texel::is_clear));
    }
}
