//! Multi-octave fractal sampling.
//!
//! Composites several octaves of a noise field, each at a shorter period and a
//! smaller amplitude than the last, and normalizes by the summed amplitude so
//! the result stays in the same range as a single octave.

use glam::DVec3;
use noise::NoiseFn;
use serde::{Deserialize, Serialize};

use crate::noise_field::{NoiseField, noise3};

/// Octave configuration for [`fractal3`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FractalParams {
    /// Exponent applied by the ridged and billowed terrain remaps.
    /// Not used by the fractal sum itself.
    pub sharpness: f64,
    /// Sampling period of the first octave. Must be positive.
    pub period: f64,
    /// Amplitude multiplier between successive octaves, in `(0, 1]`.
    pub persistence: f64,
    /// Period divisor between successive octaves. Must be positive.
    pub lacunarity: f64,
    /// Number of octaves to accumulate.
    pub octaves: u32,
}

impl Default for FractalParams {
    fn default() -> Self {
        Self {
            sharpness: 2.6,
            period: 0.6,
            persistence: 0.484,
            lacunarity: 1.6,
            octaves: 10,
        }
    }
}

/// Sample a normalized multi-octave signal at `v`.
///
/// Octave `i` contributes `persistence^i * noise(v / (period / lacunarity^i))`.
/// Accumulation stops early if the effective period is no longer finite and
/// positive. Returns 0 when no octave was accumulated.
pub fn fractal3<N: NoiseFn<f64, 3> + ?Sized>(noise: &N, v: DVec3, params: &FractalParams) -> f64 {
    let mut signal = 0.0;
    let mut amplitude = 1.0;
    let mut amplitude_sum = 0.0;
    let mut period = params.period;

    for _ in 0..params.octaves {
        if !(period.is_finite() && period > 0.0) {
            break;
        }
        signal += amplitude * noise3(noise, v / period);
        amplitude_sum += amplitude;

        amplitude *= params.persistence;
        period /= params.lacunarity;
    }

    if amplitude_sum > 0.0 {
        signal / amplitude_sum
    } else {
        0.0
    }
}

/// A noise source bound to a fixed set of octave parameters.
#[derive(Clone, Debug)]
pub struct FractalSampler<N = NoiseField> {
    noise: N,
    params: FractalParams,
}

impl FractalSampler<NoiseField> {
    /// Sampler over the default [`NoiseField`].
    pub fn new(params: FractalParams) -> Self {
        Self::with_noise(NoiseField::new(), params)
    }
}

impl<N: NoiseFn<f64, 3>> FractalSampler<N> {
    /// Sampler over an arbitrary noise source.
    pub fn with_noise(noise: N, params: FractalParams) -> Self {
        Self { noise, params }
    }

    /// Sample the fractal signal at `v`.
    pub fn sample(&self, v: DVec3) -> f64 {
        fractal3(&self.noise, v, &self.params)
    }

    pub fn params(&self) -> &FractalParams {
        &self.params
    }

    pub fn noise(&self) -> &N {
        &self.noise
    }
}
