//! Tile lifecycle: an explicit [`TileKey`] to [`TileState`] mapping owned
//! by [`TileManager`], driven by the host map engine's per-tile callbacks
//! (starting, finished, disposing) and the per-feature mesh entry point.
//!
//! The manager runs the full bake for each finished tile that accumulated
//! building geometry: encode and capture the ground mesh, then the feature
//! mesh on the same renderer, decode both grids, compose, smooth, and hold
//! the resulting terrain artifact until the host disposes the tile.

mod error;
mod host;
mod key;
mod manager;
mod state;

pub use error::TileError;
pub use host::{FeatureMesh, HostTile};
pub use key::TileKey;
pub use manager::{TileManager, compose_captures};
pub use state::{TileDisplay, TilePhase, TileState};
