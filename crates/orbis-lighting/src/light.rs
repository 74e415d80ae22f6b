//! Directional light: the single sun-like light source shared by the planet
//! surface and the atmosphere.
//!
//! [`LightingParams`] is the CPU-side description. [`LightUniform`] is the
//! packed representation a renderer can upload as-is.

use bytemuck::{Pod, Zeroable};
use glam::DVec3;
use orbis_math::Color3;
use serde::{Deserialize, Serialize};

/// Phong lighting configuration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightingParams {
    pub ambient_intensity: f64,
    pub diffuse_intensity: f64,
    pub specular_intensity: f64,
    /// Specular exponent.
    pub shininess: f64,
    /// Direction from the surface toward the light. Stored as configured; use
    /// [`LightingParams::direction`] for the normalized value.
    pub light_direction: DVec3,
    pub light_color: Color3,
}

impl Default for LightingParams {
    fn default() -> Self {
        Self {
            ambient_intensity: 0.15,
            diffuse_intensity: 1.0,
            specular_intensity: 2.0,
            shininess: 10.0,
            light_direction: DVec3::new(1.0, 1.0, 1.0),
            light_color: Color3::WHITE,
        }
    }
}

impl LightingParams {
    /// Normalized light direction, or zero if the configured vector is degenerate.
    pub fn direction(&self) -> DVec3 {
        self.light_direction.normalize_or_zero()
    }

    /// Pack into the GPU-side layout.
    pub fn to_uniform(&self) -> LightUniform {
        let d = self.direction();
        LightUniform {
            direction_shininess: [d.x as f32, d.y as f32, d.z as f32, self.shininess as f32],
            color_ambient: [
                self.light_color.r as f32,
                self.light_color.g as f32,
                self.light_color.b as f32,
                self.ambient_intensity as f32,
            ],
            diffuse_specular: [
                self.diffuse_intensity as f32,
                self.specular_intensity as f32,
                0.0,
                0.0,
            ],
        }
    }
}

/// GPU-side light block, 48 bytes, std140-compatible.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct LightUniform {
    /// xyz = normalized direction, w = shininess.
    pub direction_shininess: [f32; 4],
    /// xyz = light color, w = ambient intensity.
    pub color_ambient: [f32; 4],
    /// x = diffuse intensity, y = specular intensity, zw = padding.
    pub diffuse_specular: [f32; 4],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_is_normalized_on_use() {
        let light = LightingParams::default();
        assert_eq!(light.light_direction, DVec3::new(1.0, 1.0, 1.0));
        let len = light.direction().length();
        assert!((len - 1.0).abs() < 1e-12, "direction must be unit length, got {len}");
    }

    #[test]
    fn test_zero_direction_stays_zero() {
        let light = LightingParams {
            light_direction: DVec3::ZERO,
            ..Default::default()
        };
        assert_eq!(light.direction(), DVec3::ZERO);
    }

    #[test]
    fn test_uniform_layout() {
        assert_eq!(std::mem::size_of::<LightUniform>(), 48);
        let u = LightingParams::default().to_uniform();
        assert_eq!(u.direction_shininess[3], 10.0);
        assert_eq!(u.color_ambient[3], 0.15);
        let bytes: &[u8] = bytemuck::bytes_of(&u);
        assert_eq!(bytes.len(), 48);
    }
}
