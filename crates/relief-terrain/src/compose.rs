//! Per-cell composition of ground and feature height grids.

use relief_bake::HeightGrid;
use thiserror::Error;
use tracing::debug;

use crate::splat::{SplatMap, SplatWeights};

/// Errors raised during terrain composition.
#[derive(Debug, Error)]
pub enum TerrainError {
    /// Ground and feature grids differ in size. A data-integrity fault,
    /// fatal for this tile's composition.
    #[error("height grid dimensions differ: ground {ground}x{ground}, features {features}x{features}")]
    DimensionMismatch {
        /// Ground grid resolution.
        ground: usize,
        /// Feature grid resolution.
        features: usize,
    },
}

/// Heightmap and splat map produced by [`compose`].
#[derive(Clone, Debug)]
pub struct ComposedTerrain {
    /// Combined absolute heights.
    pub heightmap: HeightGrid,
    /// One-hot ground/feature weights.
    pub splat: SplatMap,
}

/// Combine a ground grid and a feature grid into one heightmap and splat
/// map.
///
/// Per cell: a feature strictly above the ground claims the cell with its
/// height and the feature splat channel; otherwise the cell is ground.
/// The tie break favors ground, so a building exactly level with the
/// ground reads as ground.
pub fn compose(ground: &HeightGrid, features: &HeightGrid) -> Result<ComposedTerrain, TerrainError> {
    let resolution = ground.resolution();
    if features.resolution() != resolution {
        return Err(TerrainError::DimensionMismatch {
            ground: resolution,
            features: features.resolution(),
        });
    }

    let mut heightmap = ground.clone();
    let mut splat = SplatMap::new(resolution);
    let mut feature_cells = 0_usize;
    for x in 0..resolution {
        for y in 0..resolution {
            let feature_height = features.get(x, y);
            if feature_height > ground.get(x, y) {
                heightmap.set(x, y, feature_height);
                splat.set(x, y, SplatWeights::FEATURE);
                feature_cells += 1;
            }
        }
    }
    debug!(
        resolution,
        feature_cells,
        total_cells = resolution * resolution,
        "terrain composed"
    );

    Ok(ComposedTerrain { heightmap, splat })
}
