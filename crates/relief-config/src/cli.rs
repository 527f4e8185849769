//! Command-line argument parsing for the relief pipeline.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Relief pipeline command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "relief", about = "Tile mesh to terrain baking pipeline")]
pub struct CliArgs {
    /// Overhead capture camera margin above the highest vertex.
    #[arg(long)]
    pub camera_margin: Option<f32>,

    /// Smoothing iterations applied after composition.
    #[arg(long)]
    pub smooth_iterations: Option<u32>,

    /// Smoothing blend strength (0.0 - 1.0).
    #[arg(long)]
    pub smooth_strength: Option<f32>,

    /// Start in terrain display instead of mesh display.
    #[arg(long)]
    pub show_terrain: bool,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(margin) = args.camera_margin {
            self.bake.camera_margin = margin;
        }
        if let Some(iterations) = args.smooth_iterations {
            self.smoothing.iterations = iterations;
        }
        if let Some(strength) = args.smooth_strength {
            self.smoothing.strength = strength;
        }
        if args.show_terrain {
            self.display.start_with_mesh = false;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_apply_only_when_present() {
        let mut config = Config::default();
        let args = CliArgs {
            camera_margin: Some(42.0),
            smooth_strength: Some(0.9),
            ..Default::default()
        };
        config.apply_cli_overrides(&args);

        assert_eq!(config.bake.camera_margin, 42.0);
        assert_eq!(config.smoothing.strength, 0.9);
        assert_eq!(config.smoothing.iterations, 1, "untouched fields keep defaults");
        assert!(config.display.start_with_mesh);
    }

    #[test]
    fn test_show_terrain_flag_flips_display_default() {
        let mut config = Config::default();
        let args = CliArgs {
            show_terrain: true,
            ..Default::default()
        };
        config.apply_cli_overrides(&args);
        assert!(!config.display.start_with_mesh);
    }
}
