//! Mesh containers shared across the baking pipeline.

use glam::Vec3;

/// Per-vertex auxiliary channel carrying the baked height signal.
///
/// `normalized` holds the [0, 1] height written by the encoder and
/// `validity` is 1.0 once encoded. Vertices appended by the accumulator
/// start at the invalid sentinel, so texels rasterized before encoding
/// read back as "no coverage".
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeightChannel {
    /// Height normalized against the capture extent.
    pub normalized: f32,
    /// 0.0 until the encoder has written this vertex, 1.0 afterwards.
    pub validity: f32,
}

impl HeightChannel {
    /// Sentinel appended for every vertex at accumulation time.
    pub const INVALID: Self = Self {
        normalized: 0.0,
        validity: 0.0,
    };
}

/// Host-provided geometry in the local space of its own scene transform.
///
/// `triangles` indexes into `positions` three entries per triangle.
#[derive(Clone, Debug, Default)]
pub struct SourceMesh {
    /// Vertex positions, local space.
    pub positions: Vec<Vec3>,
    /// Triangle index list.
    pub triangles: Vec<u32>,
}

impl SourceMesh {
    /// Create a mesh from raw vertex and index data.
    pub fn new(positions: Vec<Vec3>, triangles: Vec<u32>) -> Self {
        Self {
            positions,
            triangles,
        }
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }
}

/// Combined local-space mesh owned by exactly one [`MeshAccumulator`].
///
/// Invariant: `positions` and `channel` are always the same length, and
/// every entry of `triangles` is a valid index into `positions`.
#[derive(Clone, Debug, Default)]
pub struct MergedMesh {
    /// Vertex positions in the accumulation target's local space.
    pub positions: Vec<Vec3>,
    /// One auxiliary height channel per vertex.
    pub channel: Vec<HeightChannel>,
    /// Triangle index list over `positions`.
    pub triangles: Vec<u32>,
}

impl MergedMesh {
    /// Create an empty merged mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of merged vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of merged triangles.
    pub fn triangle_count(&self) -> usize {
        self.triangles.len() / 3
    }

    /// Drop all vertices, channels, and triangles.
    pub fn clear(&mut self) {
        self.positions.clear();
        self.channel.clear();
        self.triangles.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_sentinel_has_zero_validity() {
        assert_eq!(HeightChannel::INVALID.validity, 0.0);
        assert_eq!(HeightChannel::INVALID.normalized, 0.0);
    }

    #[test]
    fn test_merged_mesh_counts() {
        let mut mesh = MergedMesh::new();
        mesh.positions.push(Vec3::ZERO);
        mesh.positions.push(Vec3::X);
        mesh.positions.push(Vec3::Z);
        mesh.channel.resize(3, HeightChannel::INVALID);
        mesh.triangles.extend_from_slice(&[0, 1, 2]);

        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.triangle_count(), 1);

        mesh.clear();
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.triangle_count(), 0);
    }
}
