//! Per-tile pipeline state.

use glam::Affine3A;
use relief_mesh::{MeshAccumulator, TileFootprint};
use relief_terrain::TerrainArtifact;
use tracing::debug;

use crate::error::TileError;
use crate::host::{FeatureMesh, HostTile, derive_resolution};
use crate::key::TileKey;

/// Where a tile stands in the bake pipeline.
///
/// There is no pre-ground phase: [`TileState::create`] merges the ground
/// mesh before the state exists, so a state starts at `GroundCaptured`.
/// `Composed` is terminal: a tile never recomposes once finalized.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TilePhase {
    /// The ground mesh has been merged.
    GroundCaptured,
    /// At least one feature mesh has been merged on top of the ground.
    FeaturesAccumulating,
    /// The terrain artifact exists.
    Composed,
}

/// Which representation of a tile is currently shown. Mutually
/// exclusive: source meshes XOR the baked terrain, never both.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TileDisplay {
    /// Ground and feature meshes visible, terrain hidden.
    Mesh,
    /// Terrain visible, meshes hidden.
    Terrain,
}

/// All state the pipeline keeps for one active tile: both accumulators,
/// capture parameters, and the terrain artifact once composed.
///
/// Created when the tile's first feature mesh arrives and destroyed when
/// the host disposes the tile; nothing persists beyond a tile's active
/// lifetime.
#[derive(Debug)]
pub struct TileState {
    key: TileKey,
    transform: Affine3A,
    footprint: TileFootprint,
    resolution: usize,
    ground: MeshAccumulator,
    features: MeshAccumulator,
    feature_count: usize,
    phase: TilePhase,
    display: TileDisplay,
    artifact: Option<TerrainArtifact>,
}

impl TileState {
    /// Set a tile up: derive the capture resolution from the native
    /// elevation grid and merge the ground mesh.
    ///
    /// Fails with [`TileError::MissingResource`] when the host tile has
    /// no elevation data or no ground geometry to work with.
    pub fn create(tile: &HostTile) -> Result<Self, TileError> {
        let resolution = derive_resolution(tile.height_sample_count);
        if resolution == 0 {
            return Err(TileError::MissingResource {
                key: tile.key,
                what: "elevation sample grid",
            });
        }

        let mut ground = MeshAccumulator::new();
        ground.append(&tile.ground_mesh, &tile.transform, &tile.transform)?;

        let Some(footprint) = TileFootprint::from_positions(&ground.merged().positions) else {
            return Err(TileError::MissingResource {
                key: tile.key,
                what: "ground mesh",
            });
        };
        debug!(key = %tile.key, resolution, "tile state created");

        Ok(Self {
            key: tile.key,
            transform: tile.transform,
            footprint,
            resolution,
            ground,
            features: MeshAccumulator::new(),
            feature_count: 0,
            phase: TilePhase::GroundCaptured,
            display: TileDisplay::Mesh,
            artifact: None,
        })
    }

    /// Merge one feature mesh into the feature accumulator.
    ///
    /// Composed tiles are final: a feature arriving after
    /// [`TileState::finalize`] is rejected so the tile cannot re-enter
    /// accumulation and get recomposed.
    pub fn add_feature(&mut self, feature: &FeatureMesh) -> Result<(), TileError> {
        if self.phase == TilePhase::Composed {
            return Err(TileError::DuplicateTile(self.key));
        }
        self.features
            .append(&feature.mesh, &feature.transform, &self.transform)?;
        self.feature_count += 1;
        self.phase = TilePhase::FeaturesAccumulating;
        Ok(())
    }

    /// Attach the composed artifact. The tile is final from here on.
    pub fn finalize(&mut self, artifact: TerrainArtifact) {
        self.artifact = Some(artifact);
        self.phase = TilePhase::Composed;
    }

    /// Show either the source meshes or the baked terrain. Only composed
    /// tiles can show terrain; everything else stays in mesh display.
    pub fn apply_display(&mut self, display: TileDisplay) {
        self.display = if self.artifact.is_some() {
            display
        } else {
            TileDisplay::Mesh
        };
    }

    /// The tile's key.
    pub fn key(&self) -> TileKey {
        self.key
    }

    /// Accumulation target transform (the tile node's local-to-world).
    pub fn transform(&self) -> Affine3A {
        self.transform
    }

    /// Ground-mesh X/Z bounds in tile-local space.
    pub fn footprint(&self) -> TileFootprint {
        self.footprint
    }

    /// Capture resolution.
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Current pipeline phase.
    pub fn phase(&self) -> TilePhase {
        self.phase
    }

    /// Current display selection.
    pub fn display(&self) -> TileDisplay {
        self.display
    }

    /// Features merged so far.
    pub fn feature_count(&self) -> usize {
        self.feature_count
    }

    /// The terrain artifact, once composed.
    pub fn artifact(&self) -> Option<&TerrainArtifact> {
        self.artifact.as_ref()
    }

    /// Ground accumulator.
    pub fn ground(&self) -> &MeshAccumulator {
        &self.ground
    }

    /// Mutable ground accumulator for the encode pass.
    pub fn ground_mut(&mut self) -> &mut MeshAccumulator {
        &mut self.ground
    }

    /// Feature accumulator.
    pub fn features(&self) -> &MeshAccumulator {
        &self.features
    }

    /// Mutable feature accumulator for the encode pass.
    pub fn features_mut(&mut self) -> &mut MeshAccumulator {
        &mut self.features
    }
}
