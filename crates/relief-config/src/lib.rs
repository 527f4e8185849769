//! Configuration for the relief terrain pipeline.
//!
//! Runtime-tunable settings persisted to disk as RON files, with CLI
//! overrides via clap and change detection for reload.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{BakeConfig, Config, DebugConfig, DisplayConfig, SmoothingConfig};
pub use error::ConfigError;
