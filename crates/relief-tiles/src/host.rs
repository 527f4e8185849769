//! Types the host map engine hands across the collaborator boundary.

use glam::Affine3A;
use relief_mesh::SourceMesh;

use crate::key::TileKey;

/// Everything the host provides for one finished tile.
#[derive(Clone, Debug)]
pub struct HostTile {
    /// The tile's stable identifier.
    pub key: TileKey,
    /// The tile's ground mesh, in the tile node's local space.
    pub ground_mesh: SourceMesh,
    /// The tile node's local-to-world transform. Accumulation target for
    /// both the ground and the feature meshes of this tile.
    pub transform: Affine3A,
    /// Sample count of the tile's native elevation grid. The capture
    /// resolution is `ceil(sqrt(height_sample_count))`.
    pub height_sample_count: usize,
}

/// One vector feature's geometry (e.g. a single building) within a tile.
#[derive(Clone, Debug)]
pub struct FeatureMesh {
    /// The feature's mesh in its own local space.
    pub mesh: SourceMesh,
    /// The feature node's local-to-world transform.
    pub transform: Affine3A,
}

/// Capture resolution for a tile's native elevation sample count.
pub(crate) fn derive_resolution(height_sample_count: usize) -> usize {
    (height_sample_count as f64).sqrt().ceil() as usize
}
