//! Procedural terrain: gradient noise, multi-octave fractal sampling, and terrain height shaping.

mod fractal;
mod noise_field;
mod terrain_height;

pub use fractal::{FractalParams, FractalSampler, fractal3};
pub use noise_field::{NoiseField, noise3};
pub use terrain_height::{
    TerrainHeightModel, TerrainParams, TerrainType, UnknownTerrainType, terrain_height,
};
