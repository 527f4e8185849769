//! Append-only merging of host meshes into one combined tile mesh.

use glam::Affine3A;
use thiserror::Error;

use crate::{HeightChannel, MergedMesh, SourceMesh, VerticalExtent};

/// Errors raised while merging a source mesh.
#[derive(Debug, Error)]
pub enum MeshError {
    /// A source triangle references a vertex the mesh does not have.
    #[error("triangle index {index} out of range for {vertex_count} source vertices")]
    IndexOutOfRange {
        /// The offending index.
        index: u32,
        /// Vertex count of the source mesh.
        vertex_count: usize,
    },
}

/// Merges any number of world-space-transformed source meshes into one
/// combined local-space mesh, tracking the vertical extent of everything
/// merged so far.
///
/// Each tile owns two accumulators, one for the ground mesh and one for
/// the per-feature building meshes. The tracked extent is world-space
/// elevation, taken before vertices are brought into the target's local
/// space for storage.
#[derive(Debug, Default)]
pub struct MeshAccumulator {
    merged: MergedMesh,
    extent: VerticalExtent,
}

impl MeshAccumulator {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self {
            merged: MergedMesh::new(),
            extent: VerticalExtent::EMPTY,
        }
    }

    /// Reset to zero vertices, zero triangles, and the empty extent.
    pub fn reset(&mut self) {
        self.merged.clear();
        self.extent = VerticalExtent::EMPTY;
    }

    /// Append `mesh`, transforming every vertex from `source`'s local
    /// space through world space into `target`'s local space.
    ///
    /// Triangle indices are offset by the vertex count at the time of the
    /// append, and one invalid channel sentinel is pushed per vertex for
    /// the encoder to overwrite later. The extent is updated from the
    /// world-space Y of each vertex, so it tracks true elevation rather
    /// than target-local coordinates.
    ///
    /// A malformed source (triangle index out of range) is rejected
    /// before anything is appended.
    pub fn append(
        &mut self,
        mesh: &SourceMesh,
        source: &Affine3A,
        target: &Affine3A,
    ) -> Result<(), MeshError> {
        let vertex_count = mesh.positions.len();
        for &index in &mesh.triangles {
            if index as usize >= vertex_count {
                return Err(MeshError::IndexOutOfRange {
                    index,
                    vertex_count,
                });
            }
        }

        let base = self.merged.positions.len() as u32;
        let target_inv = target.inverse();
        for &position in &mesh.positions {
            let world = source.transform_point3(position);
            self.extent.include(world.y);
            self.merged.positions.push(target_inv.transform_point3(world));
            self.merged.channel.push(HeightChannel::INVALID);
        }
        self.merged
            .triangles
            .extend(mesh.triangles.iter().map(|&index| index + base));

        Ok(())
    }

    /// The combined mesh merged so far.
    pub fn merged(&self) -> &MergedMesh {
        &self.merged
    }

    /// Mutable access for the encoder pass.
    pub fn merged_mut(&mut self) -> &mut MergedMesh {
        &mut self.merged
    }

    /// World-space elevation extent of all merged vertices.
    pub fn extent(&self) -> VerticalExtent {
        self.extent
    }

    /// True while nothing has been appended.
    pub fn is_empty(&self) -> bool {
        self.merged.positions.is_empty()
    }
}
