//! Configuration for Orbis.
//!
//! The full set of planet and atmosphere parameters, plus scene and debug
//! settings, persisted to disk as a RON file. Supports CLI overrides via clap,
//! hot-reload detection, and validation of every numeric parameter.

mod cli;
mod config;
mod error;
mod params;

pub use cli::CliArgs;
pub use config::{CONFIG_FILE_NAME, Config, DebugConfig, SceneConfig, default_config_dir};
pub use error::ConfigError;
pub use params::ParameterSet;
