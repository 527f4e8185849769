//! Terrain synthesis: combine a ground height grid and a feature height
//! grid into one heightmap plus a two-channel splat map, compute the
//! terrain's placement from the tile footprint and height extent, and run
//! the post-composition smoothing pass.

mod artifact;
mod compose;
mod placement;
mod smooth;
mod splat;

pub use artifact::TerrainArtifact;
pub use compose::{ComposedTerrain, TerrainError, compose};
pub use placement::TerrainPlacement;
pub use smooth::smooth_heightmap;
pub use splat::{SplatMap, SplatWeights};
