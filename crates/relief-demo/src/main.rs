//! Demo binary that drives the terrain baking pipeline on synthetic tiles.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI
//! flags. Run with `cargo run -p relief-demo` for the default walkthrough,
//! or `cargo run -p relief-demo -- --smooth-iterations 3` to tune passes.

use std::path::Path;

use clap::Parser;
use glam::{Affine3A, Vec3};
use relief_config::{CliArgs, Config};
use relief_mesh::SourceMesh;
use relief_tiles::{FeatureMesh, HostTile, TileKey, TileManager};
use tracing::{info, warn};

/// Flat ground quad spanning `size`×`size` around the tile origin, with
/// enough elevation samples for a 16×16 capture.
fn synthetic_tile(key: TileKey, size: f32, elevation: f32) -> HostTile {
    let half = size * 0.5;
    HostTile {
        key,
        ground_mesh: SourceMesh::new(
            vec![
                Vec3::new(-half, elevation, -half),
                Vec3::new(half, elevation, -half),
                Vec3::new(half, elevation, half),
                Vec3::new(-half, elevation, half),
            ],
            vec![0, 1, 2, 0, 2, 3],
        ),
        transform: Affine3A::IDENTITY,
        height_sample_count: 256,
    }
}

/// Closed box of the given footprint and height, sitting on the ground.
fn building(center: Vec3, footprint: f32, height: f32) -> FeatureMesh {
    let half = footprint * 0.5;
    let base = center.y;
    let top = base + height;
    let corners = [
        Vec3::new(-half, 0.0, -half),
        Vec3::new(half, 0.0, -half),
        Vec3::new(half, 0.0, half),
        Vec3::new(-half, 0.0, half),
    ];
    let mut positions = Vec::with_capacity(8);
    for c in corners {
        positions.push(Vec3::new(c.x, base, c.z));
    }
    for c in corners {
        positions.push(Vec3::new(c.x, top, c.z));
    }
    let triangles = vec![
        // Roof.
        4, 5, 6, 4, 6, 7, // Walls.
        0, 1, 5, 0, 5, 4, 1, 2, 6, 1, 6, 5, 2, 3, 7, 2, 7, 6, 3, 0, 4, 3, 4, 7,
    ];
    FeatureMesh {
        mesh: SourceMesh::new(positions, triangles),
        transform: Affine3A::from_translation(Vec3::new(center.x, 0.0, center.z)),
    }
}

fn main() {
    let args = CliArgs::parse();

    let config_dir = args
        .config
        .clone()
        .unwrap_or_else(|| Path::new("config").to_path_buf());
    let mut config = match Config::load_or_create(&config_dir) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("failed to load config, using defaults: {error}");
            Config::default()
        }
    };
    config.apply_cli_overrides(&args);

    relief_log::init_logging(Some(Path::new("logs")), cfg!(debug_assertions), Some(&config));
    info!(?config, "relief demo starting");

    let mut manager = TileManager::new(&config);

    let town = TileKey::new(14, 14553, 6451);
    let fields = TileKey::new(14, 14554, 6451);
    manager.on_tiles_starting(&[town, fields]);

    // One tile with a few buildings, one with bare ground.
    let town_tile = synthetic_tile(town, 100.0, 32.0);
    let fields_tile = synthetic_tile(fields, 100.0, 30.0);

    for (center, footprint, height) in [
        (Vec3::new(-20.0, 32.0, -20.0), 18.0, 24.0),
        (Vec3::new(15.0, 32.0, 10.0), 12.0, 40.0),
        (Vec3::new(30.0, 32.0, -25.0), 8.0, 9.0),
    ] {
        if let Err(error) = manager.add_feature_mesh(&town_tile, &building(center, footprint, height))
        {
            warn!(%error, "feature rejected");
        }
    }

    match manager.on_tile_finished(&town_tile) {
        Ok(true) => {
            let artifact = manager
                .artifact(&town)
                .expect("composed tile must have an artifact");
            info!(
                key = %town,
                resolution = artifact.heightmap.resolution(),
                origin = ?artifact.placement.origin,
                size = ?artifact.placement.size,
                "terrain composed"
            );
        }
        Ok(false) => info!(key = %town, "tile skipped, no building geometry"),
        Err(error) => warn!(key = %town, %error, "terrain bake failed"),
    }

    // A tile with no vector features never synthesizes terrain.
    match manager.on_tile_finished(&fields_tile) {
        Ok(composed) => info!(key = %fields, composed, "ground-only tile finished"),
        Err(error) => warn!(key = %fields, %error, "unexpected failure"),
    }

    let mode = manager.toggle_display_mode();
    info!(?mode, "display toggled for {} active tiles", manager.tile_count());

    manager.on_tiles_disposing(&[town, fields]);
    info!(tiles = manager.tile_count(), "demo done");
}
