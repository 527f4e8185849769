//! Per-tile error taxonomy.
//!
//! Every failure is local to one tile: the tile is left without a terrain
//! artifact (mesh display remains available) and no other tile's
//! processing is affected.

use relief_bake::BakeError;
use relief_mesh::MeshError;
use relief_terrain::TerrainError;
use thiserror::Error;

use crate::key::TileKey;

/// Errors raised while building one tile's terrain.
#[derive(Debug, Error)]
pub enum TileError {
    /// A resource required to set the tile up is absent. Fatal for this
    /// tile only.
    #[error("missing resource for tile {key}: {what}")]
    MissingResource {
        /// The affected tile.
        key: TileKey,
        /// What was missing.
        what: &'static str,
    },

    /// The tile was processed again after composing, without disposal:
    /// a second finish for the same id, or a feature arriving late. A
    /// logic error; the existing state is left untouched.
    #[error("tile {0} already has a composed terrain")]
    DuplicateTile(TileKey),

    /// A source mesh was malformed.
    #[error("mesh error: {0}")]
    Mesh(#[from] MeshError),

    /// A capture or its readback failed.
    #[error("bake error: {0}")]
    Bake(#[from] BakeError),

    /// Composition failed.
    #[error("terrain error: {0}")]
    Terrain(#[from] TerrainError),
}
