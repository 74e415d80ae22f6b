//! Terrain elevation on the unit sphere.
//!
//! Maps a noise signal sampled at a sphere direction to a non-negative
//! elevation. Three shaping modes are supported; see [`TerrainType`].
//! Heights below zero are clamped away, which turns every depression into a
//! flat sea-level plain.

use glam::DVec3;
use noise::NoiseFn;
use serde::{Deserialize, Serialize};

use crate::fractal::{FractalParams, fractal3};
use crate::noise_field::{NoiseField, noise3};

/// How the noise signal is turned into elevation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerrainType {
    /// Single octave of raw noise. Octave parameters are ignored.
    Simplex,
    /// Fractal signal remapped to `((f + 1) / 2)^sharpness`: smooth rolling ridges.
    #[default]
    Ridged,
    /// Fractal signal remapped to `(1 - |f|)^sharpness`: sharp peaked ridgelines.
    Billowed,
}

/// Returned when converting an unknown integer terrain code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown terrain type code {0} (expected 1, 2 or 3)")]
pub struct UnknownTerrainType(pub u8);

impl TryFrom<u8> for TerrainType {
    type Error = UnknownTerrainType;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(TerrainType::Simplex),
            2 => Ok(TerrainType::Ridged),
            3 => Ok(TerrainType::Billowed),
            other => Err(UnknownTerrainType(other)),
        }
    }
}

impl From<TerrainType> for u8 {
    fn from(t: TerrainType) -> Self {
        match t {
            TerrainType::Simplex => 1,
            TerrainType::Ridged => 2,
            TerrainType::Billowed => 3,
        }
    }
}

/// Shape parameters for [`terrain_height`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainParams {
    pub terrain_type: TerrainType,
    /// Peak elevation scale.
    pub amplitude: f64,
    /// Remap exponent for ridged/billowed terrain.
    pub sharpness: f64,
    /// Added after shaping; negative values raise the sea level.
    pub offset: f64,
    pub period: f64,
    pub persistence: f64,
    pub lacunarity: f64,
    pub octaves: u32,
}

impl Default for TerrainParams {
    fn default() -> Self {
        Self {
            terrain_type: TerrainType::Ridged,
            amplitude: 1.19,
            sharpness: 2.6,
            offset: -0.016,
            period: 0.6,
            persistence: 0.484,
            lacunarity: 1.6,
            octaves: 10,
        }
    }
}

impl TerrainParams {
    /// The octave subset of these parameters.
    pub fn fractal(&self) -> FractalParams {
        FractalParams {
            sharpness: self.sharpness,
            period: self.period,
            persistence: self.persistence,
            lacunarity: self.lacunarity,
            octaves: self.octaves,
        }
    }
}

/// Elevation at `v` for the given shape parameters. Always `>= 0`.
pub fn terrain_height<N: NoiseFn<f64, 3> + ?Sized>(
    noise: &N,
    v: DVec3,
    params: &TerrainParams,
) -> f64 {
    let h = match params.terrain_type {
        TerrainType::Simplex => {
            if params.period > 0.0 {
                params.amplitude * noise3(noise, v / params.period)
            } else {
                0.0
            }
        }
        TerrainType::Ridged => {
            let f = fractal3(noise, v, &params.fractal());
            params.amplitude * ((f + 1.0) * 0.5).clamp(0.0, 1.0).powf(params.sharpness)
        }
        TerrainType::Billowed => {
            let f = fractal3(noise, v, &params.fractal());
            params.amplitude * (1.0 - f.abs()).clamp(0.0, 1.0).powf(params.sharpness)
        }
    };

    (h + params.offset).max(0.0)
}

/// Terrain elevation model bound to a noise source and shape parameters.
#[derive(Clone, Debug)]
pub struct TerrainHeightModel<N = NoiseField> {
    noise: N,
    params: TerrainParams,
}

impl TerrainHeightModel<NoiseField> {
    /// Model over the default [`NoiseField`].
    pub fn new(params: TerrainParams) -> Self {
        Self::with_noise(NoiseField::new(), params)
    }
}

impl<N: NoiseFn<f64, 3>> TerrainHeightModel<N> {
    pub fn with_noise(noise: N, params: TerrainParams) -> Self {
        Self { noise, params }
    }

    /// Elevation at the (not necessarily normalized) direction `v`.
    #[inline]
    pub fn height(&self, v: DVec3) -> f64 {
        terrain_height(&self.noise, v, &self.params)
    }

    pub fn params(&self) -> &TerrainParams {
        &self.params
    }

    pub fn noise(&self) -> &N {
        &self.noise
    }
}
