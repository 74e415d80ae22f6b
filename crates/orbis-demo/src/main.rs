//! Headless Orbis driver.
//!
//! Loads `orbis.ron` (creating it on first run), builds the planet scene and
//! ticks it for a fixed number of frames, logging what a renderer would
//! upload. Edits to the config file are picked up while it runs.
//!
//! Run with `cargo run -p orbis-demo -- --terrain 3 --frames 120`.

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use glam::DVec3;
use orbis_config::{CliArgs, Config, default_config_dir};
use orbis_scene::{FrameClock, Scene};
use tracing::{info, warn};

const FRAME_DT: f64 = 1.0 / 60.0;
const STATS_INTERVAL: u64 = 60;
const RELOAD_INTERVAL: u64 = 120;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config_dir = args.config.clone().unwrap_or_else(default_config_dir);

    let mut file_config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    let mut config = file_config.clone();
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    orbis_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    let mut scene = match Scene::build(&config) {
        Ok(scene) => scene,
        Err(e) => {
            tracing::error!("cannot build scene: {e}");
            return ExitCode::FAILURE;
        }
    };

    let (lowest, highest) = scene.planet().height_range();
    info!(
        terrain = ?config.params.planet.terrain.terrain_type,
        lowest,
        highest,
        "planet ready"
    );

    let camera = DVec3::new(0.0, 0.0, config.scene.camera_distance);
    let mut clock = FrameClock::new();

    for _ in 0..args.frames {
        clock = clock.advance(FRAME_DT);
        let frame = scene.frame(&clock, camera);

        if clock.frame % STATS_INTERVAL == 0 {
            info!(
                frame = clock.frame,
                elapsed = frame.elapsed,
                rotation = frame.atmosphere_rotation,
                mean_alpha = frame.mean_alpha(),
                "atmosphere"
            );
        }

        if clock.frame % RELOAD_INTERVAL == 0 {
            reload(&mut file_config, &config_dir, &args, &mut scene);
        }
    }

    info!(frames = clock.frame, elapsed = clock.elapsed, "done");
    ExitCode::SUCCESS
}

/// Apply on-disk config edits to the running scene. CLI overrides keep
/// precedence over the file.
fn reload(file_config: &mut Config, config_dir: &Path, args: &CliArgs, scene: &mut Scene) {
    match file_config.reload(config_dir) {
        Ok(Some(new_config)) => {
            let mut effective = new_config.clone();
            effective.apply_cli_overrides(args);
            match scene.update_params(effective.params) {
                Ok(update) => {
                    info!(
                        planet_rebuilt = update.planet_rebuilt,
                        particles_regenerated = update.particles_regenerated,
                        "applied config changes"
                    );
                    *file_config = new_config;
                }
                Err(e) => warn!("ignoring config change: {e}"),
            }
        }
        Ok(None) => {}
        Err(e) => warn!("config reload failed: {e}"),
    }
}
