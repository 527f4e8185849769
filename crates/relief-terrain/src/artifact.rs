//! The finished terrain output for one tile.

use relief_bake::HeightGrid;

use crate::placement::TerrainPlacement;
use crate::splat::SplatMap;

/// Heightmap, splat map, and placement for one tile's terrain.
///
/// Owned by the tile's state record and dropped when the host disposes
/// the tile; a tile never recomposes once its artifact exists.
#[derive(Clone, Debug)]
pub struct TerrainArtifact {
    /// Combined absolute heights, smoothed.
    pub heightmap: HeightGrid,
    /// One-hot ground/feature weights.
    pub splat: SplatMap,
    /// Where the terrain sits and how large it is.
    pub placement: TerrainPlacement,
}
