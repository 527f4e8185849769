//! Mesh accumulation for the tile terrain pipeline: merging host-provided
//! geometry into per-tile combined meshes while tracking the vertical extent
//! of everything merged so far.

mod accumulator;
mod extent;
mod footprint;
mod mesh;

pub use accumulator::{MeshAccumulator, MeshError};
pub use extent::VerticalExtent;
pub use footprint::TileFootprint;
pub use mesh::{HeightChannel, MergedMesh, SourceMesh};
