//! Height encoding pass: write normalized elevation into the per-vertex
//! channel read by the overhead rasterizer.

use glam::Affine3A;
use relief_mesh::{HeightChannel, MergedMesh, VerticalExtent};

/// Rewrite every vertex's auxiliary channel to `(normalized, 1.0)` where
/// `normalized = clamp01((world_y - extent.min) / extent.height())`.
///
/// Must be re-run before every capture: the extent may have grown since
/// the last encode, and the rasterizer reads whatever the channel holds.
/// A degenerate extent (`max == min`, single-elevation mesh) encodes 0
/// for every vertex.
pub fn encode_heights(merged: &mut MergedMesh, target: &Affine3A, extent: VerticalExtent) {
    let height = extent.height();
    for (position, channel) in merged.positions.iter().zip(merged.channel.iter_mut()) {
        let world_y = target.transform_point3(*position).y;
        let normalized = if height > 0.0 {
            ((world_y - extent.min) / height).clamp(0.0, 1.0)
        } else {
            0.0
        };
        *channel = HeightChannel {
            normalized,
            validity: 1.0,
        };
    }
}
