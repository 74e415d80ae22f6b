//! Command-line argument parsing for Orbis.

use std::path::PathBuf;

use clap::Parser;
use orbis_terrain::TerrainType;

use crate::Config;

/// Orbis command-line arguments.
///
/// CLI values override settings loaded from `orbis.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "orbis", about = "Procedural planet generator")]
pub struct CliArgs {
    /// Terrain type code (1 = simplex, 2 = ridged, 3 = billowed).
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=3))]
    pub terrain: Option<u8>,

    /// Number of fractal octaves.
    #[arg(long)]
    pub octaves: Option<u32>,

    /// Number of atmosphere particles.
    #[arg(long)]
    pub particles: Option<u32>,

    /// Seed for particle and star placement.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Planet mesh segments.
    #[arg(long)]
    pub segments: Option<u32>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Number of frames to simulate before exiting.
    #[arg(long, default_value_t = 600)]
    pub frames: u32,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(terrain_type) = args.terrain.and_then(|c| TerrainType::try_from(c).ok()) {
            self.params.planet.terrain.terrain_type = terrain_type;
        }
        if let Some(octaves) = args.octaves {
            self.params.planet.terrain.octaves = octaves;
        }
        if let Some(particles) = args.particles {
            self.params.atmosphere.particles = particles;
        }
        if let Some(seed) = args.seed {
            self.scene.seed = seed;
        }
        if let Some(segments) = args.segments {
            self.scene.mesh_segments = segments;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
