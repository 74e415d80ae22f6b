//! Per-particle, per-frame atmosphere shading.
//!
//! Alpha is driven by the same noise field as the terrain, scrolled through
//! time so the clouds drift. Lighting is a clamped Lambert term with a small
//! floor so the night side never goes fully black.

use glam::{DVec2, DVec3};
use noise::NoiseFn;
use orbis_math::{clamp01, smoothstep};
use orbis_terrain::{NoiseField, noise3};
use rayon::prelude::*;

use crate::AtmosphereParams;

/// Lower bound of the particle light term.
pub const MIN_PARTICLE_LIGHT: f64 = 0.05;

/// Shades atmosphere particles for a given light direction.
#[derive(Clone, Debug)]
pub struct AtmosphereShader<N = NoiseField> {
    noise: N,
    params: AtmosphereParams,
    light_direction: DVec3,
}

impl AtmosphereShader<NoiseField> {
    pub fn new(params: AtmosphereParams, light_direction: DVec3) -> Self {
        Self::with_noise(NoiseField::new(), params, light_direction)
    }
}

impl<N: NoiseFn<f64, 3>> AtmosphereShader<N> {
    /// `light_direction` may be un-normalized; a zero vector leaves only the
    /// light floor.
    pub fn with_noise(noise: N, params: AtmosphereParams, light_direction: DVec3) -> Self {
        Self {
            noise,
            params,
            light_direction: light_direction.normalize_or_zero(),
        }
    }

    pub fn params(&self) -> &AtmosphereParams {
        &self.params
    }

    /// `opacity * clamp(noise(time * speed + position / scale) + density, 0, 1)`.
    pub fn alpha(&self, position: DVec3, time: f64) -> f64 {
        let p = &self.params;
        let drift = DVec3::splat(time * p.speed);
        let scaled = if p.scale > 0.0 {
            position / p.scale
        } else {
            DVec3::ZERO
        };
        let n = noise3(&self.noise, drift + scaled);
        p.opacity * clamp01(n + p.density)
    }

    /// `max(0.05, dot(normalize(position), light))`.
    pub fn light(&self, position: DVec3) -> f64 {
        position
            .normalize_or_zero()
            .dot(self.light_direction)
            .max(MIN_PARTICLE_LIGHT)
    }

    /// RGBA of the particle at `position` at `time` seconds.
    pub fn shade(&self, position: DVec3, time: f64) -> [f64; 4] {
        let rgb = self.light(position) * DVec3::from(self.params.color);
        [rgb.x, rgb.y, rgb.z, self.alpha(position, time)]
    }
}

impl<N: NoiseFn<f64, 3> + Sync> AtmosphereShader<N> {
    /// Shade a whole particle buffer in parallel, narrowed to `f32` RGBA.
    pub fn shade_all(&self, positions: &[DVec3], time: f64) -> Vec<[f32; 4]> {
        positions
            .par_iter()
            .map(|p| self.shade(*p, time).map(|c| c as f32))
            .collect()
    }
}

/// Soft circular sprite falloff at point-sprite coordinate `uv` in `[0, 1]^2`:
/// 1 at the center, easing to 0 at the inscribed circle and beyond.
pub fn sprite_mask(uv: DVec2) -> f64 {
    let d = (uv - DVec2::splat(0.5)).length() * 2.0;
    1.0 - smoothstep(0.0, 1.0, d)
}

/// Apply the sprite mask to a particle color at fragment coordinate `uv`.
pub fn shade_fragment(particle_rgba: [f64; 4], uv: DVec2) -> [f64; 4] {
    let m = sprite_mask(uv);
    particle_rgba.map(|c| c * m)
}
