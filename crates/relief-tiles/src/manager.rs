//! Top-level tile manager: owns the key-to-state map, the display-mode
//! flag, and drives the bake for finished tiles.

use hashbrown::HashMap;
use relief_bake::{CaptureImage, OverheadRenderer, decode_heights, encode_heights};
use relief_config::{Config, SmoothingConfig};
use relief_mesh::{TileFootprint, VerticalExtent};
use relief_terrain::{TerrainArtifact, TerrainPlacement, compose, smooth_heightmap};
use tracing::{debug, info, warn};

use crate::error::TileError;
use crate::host::{FeatureMesh, HostTile};
use crate::key::TileKey;
use crate::state::{TileDisplay, TilePhase, TileState};

/// Decode a ground and a feature capture, compose them, smooth the
/// result, and wrap it with its placement.
///
/// Both images carry the extent their mesh was encoded with, so the
/// decode cannot drift even if an accumulator kept growing after the
/// capture. `placement_extent` spans both meshes and anchors the terrain
/// vertically at the lowest ground point.
pub fn compose_captures(
    ground_image: &CaptureImage,
    feature_image: &CaptureImage,
    footprint: TileFootprint,
    placement_extent: VerticalExtent,
    smoothing: &SmoothingConfig,
) -> Result<TerrainArtifact, TileError> {
    let ground = decode_heights(ground_image)?;
    let features = decode_heights(feature_image)?;
    let composed = compose(&ground, &features)?;

    let mut heightmap = composed.heightmap;
    smooth_heightmap(&mut heightmap, smoothing.iterations, smoothing.strength);

    Ok(TerrainArtifact {
        heightmap,
        splat: composed.splat,
        placement: TerrainPlacement::from_footprint(footprint, placement_extent),
    })
}

/// Owns every active tile's state and the process-wide display-mode
/// flag, and reacts to the host map engine's lifecycle callbacks.
///
/// Tiles are processed one at a time; each bake configures a fresh
/// renderer whose single camera/buffer pair serves the tile's ground
/// capture and then its feature capture, in that order.
#[derive(Debug)]
pub struct TileManager {
    tiles: HashMap<TileKey, TileState>,
    display: TileDisplay,
    camera_margin: f32,
    smoothing: SmoothingConfig,
}

impl TileManager {
    /// Create a manager from the pipeline configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            tiles: HashMap::new(),
            display: if config.display.start_with_mesh {
                TileDisplay::Mesh
            } else {
                TileDisplay::Terrain
            },
            camera_margin: config.bake.camera_margin,
            smoothing: config.smoothing.clone(),
        }
    }

    /// Host callback: tiles are about to be fetched. Informational only.
    pub fn on_tiles_starting(&self, keys: &[TileKey]) {
        info!(count = keys.len(), "tiles starting");
        for key in keys {
            debug!(%key, "tile starting");
        }
    }

    /// Per-feature entry point, invoked once per vector feature by the
    /// host's feature processing pass.
    ///
    /// The first feature to arrive for a tile creates the tile's state
    /// (merging the ground mesh as it does); later features only merge
    /// their own geometry.
    pub fn add_feature_mesh(
        &mut self,
        tile: &HostTile,
        feature: &FeatureMesh,
    ) -> Result<(), TileError> {
        let state = match self.tiles.entry(tile.key) {
            hashbrown::hash_map::Entry::Occupied(entry) => entry.into_mut(),
            hashbrown::hash_map::Entry::Vacant(entry) => entry.insert(TileState::create(tile)?),
        };
        state.add_feature(feature)
    }

    /// Host callback: a tile finished processing. Runs the bake when the
    /// tile accumulated building geometry.
    ///
    /// Returns `Ok(false)` for a tile with no features; such tiles keep
    /// their mesh display and get no terrain. Finishing an already
    /// composed tile is [`TileError::DuplicateTile`] and leaves the
    /// existing state untouched.
    pub fn on_tile_finished(&mut self, tile: &HostTile) -> Result<bool, TileError> {
        info!(key = %tile.key, "tile finished");

        let Some(state) = self.tiles.get_mut(&tile.key) else {
            debug!(key = %tile.key, "no feature geometry, skipping terrain synthesis");
            return Ok(false);
        };
        if state.phase() == TilePhase::Composed {
            return Err(TileError::DuplicateTile(tile.key));
        }

        let artifact = Self::bake(state, self.camera_margin, &self.smoothing)
            .inspect_err(|error| {
                warn!(key = %tile.key, %error, "terrain bake failed, tile keeps mesh display");
            })?;
        state.finalize(artifact);
        state.apply_display(self.display);
        Ok(true)
    }

    /// Host callback: tiles are being disposed. Drops each listed tile's
    /// accumulators and artifact immediately; the only destruction
    /// trigger.
    pub fn on_tiles_disposing(&mut self, keys: &[TileKey]) {
        info!(count = keys.len(), "tiles disposing");
        for key in keys {
            if self.tiles.remove(key).is_some() {
                debug!(%key, "tile state released");
            }
        }
    }

    /// Flip the process-wide mesh/terrain flag and re-apply visibility
    /// to every active tile. Returns the new mode.
    pub fn toggle_display_mode(&mut self) -> TileDisplay {
        self.display = match self.display {
            TileDisplay::Mesh => TileDisplay::Terrain,
            TileDisplay::Terrain => TileDisplay::Mesh,
        };
        info!(mode = ?self.display, "display mode toggled");
        for state in self.tiles.values_mut() {
            state.apply_display(self.display);
        }
        self.display
    }

    /// Current process-wide display mode.
    pub fn display_mode(&self) -> TileDisplay {
        self.display
    }

    /// Number of active tiles with state.
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Look up one tile's state.
    pub fn tile(&self, key: &TileKey) -> Option<&TileState> {
        self.tiles.get(key)
    }

    /// Look up one tile's terrain artifact.
    pub fn artifact(&self, key: &TileKey) -> Option<&TerrainArtifact> {
        self.tiles.get(key).and_then(TileState::artifact)
    }

    /// Full bake for one tile: ground capture completes and decodes
    /// before the feature capture reuses the same camera and buffer.
    fn bake(
        state: &mut TileState,
        camera_margin: f32,
        smoothing: &SmoothingConfig,
    ) -> Result<TerrainArtifact, TileError> {
        let transform = state.transform();
        let footprint = state.footprint();
        let mut renderer =
            OverheadRenderer::configure(state.resolution(), footprint, camera_margin);

        let ground_extent = state.ground().extent();
        encode_heights(state.ground_mut().merged_mut(), &transform, ground_extent);
        let ground_image = renderer.capture(state.ground().merged(), ground_extent)?;

        let feature_extent = state.features().extent();
        encode_heights(state.features_mut().merged_mut(), &transform, feature_extent);
        let feature_image = renderer.capture(state.features().merged(), feature_extent)?;

        compose_captures(
            &ground_image,
            &feature_image,
            footprint,
            ground_extent.union(&feature_extent),
            smoothing,
        )
    }
}
