//! Per-vertex / per-fragment surface evaluation.
//!
//! For a direction on the unit sphere the shader:
//!
//! 1. displaces the point to `p * (radius + h)`,
//! 2. samples two neighbors along the tangent and bitangent and builds a bump
//!    normal from the displaced neighbor positions,
//! 3. blends that with the geometric normal by the bump strength,
//! 4. lights the result with Phong, gating the specular highlight by height so
//!    only low terrain (water) glints,
//! 5. tints the lit intensity with the height-banded surface color.

use glam::DVec3;
use noise::NoiseFn;
use orbis_lighting::phong;
use orbis_math::{clamp01, mix_vec, normalize_or_zero};
use orbis_terrain::{NoiseField, TerrainHeightModel};

use crate::PlanetParams;

/// Output of one surface evaluation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceSample {
    /// Terrain elevation above the base radius.
    pub height: f64,
    /// Displaced position in planet space.
    pub position: DVec3,
    /// Shading normal after bump blending. Unit length unless degenerate.
    pub normal: DVec3,
    /// Linear RGBA; alpha is always 1.
    pub color: [f64; 4],
}

/// Bitangent for a vertex with the given normal and tangent.
#[inline]
pub fn bitangent(normal: DVec3, tangent: DVec3) -> DVec3 {
    normal.cross(tangent)
}

/// Height-dependent specular gate: 1 at sea level, falling linearly to 0 at
/// `transition3` and staying 0 above it. A non-positive `transition3` disables
/// the highlight entirely.
#[inline]
pub fn specular_falloff(height: f64, transition3: f64) -> f64 {
    if transition3 <= 0.0 {
        return 0.0;
    }
    clamp01((transition3 - height) / transition3)
}

/// Evaluates displaced geometry and shaded color for the planet surface.
#[derive(Clone, Debug)]
pub struct SurfaceShader<N = NoiseField> {
    terrain: TerrainHeightModel<N>,
    params: PlanetParams,
}

impl SurfaceShader<NoiseField> {
    pub fn new(params: PlanetParams) -> Self {
        Self::with_noise(NoiseField::new(), params)
    }
}

impl<N: NoiseFn<f64, 3>> SurfaceShader<N> {
    pub fn with_noise(noise: N, params: PlanetParams) -> Self {
        Self {
            terrain: TerrainHeightModel::with_noise(noise, params.terrain),
            params,
        }
    }

    pub fn params(&self) -> &PlanetParams {
        &self.params
    }

    /// Terrain elevation at `direction`.
    #[inline]
    pub fn height(&self, direction: DVec3) -> f64 {
        self.terrain.height(direction)
    }

    /// Displaced position for `direction`: `direction * (radius + height)`.
    #[inline]
    pub fn displace(&self, direction: DVec3) -> DVec3 {
        direction * (self.params.radius + self.height(direction))
    }

    /// Bump-corrected shading normal at `direction`.
    ///
    /// `geometric_normal` is the undisplaced sphere normal; `tangent` and
    /// `bitangent` span the local surface.
    pub fn normal(
        &self,
        direction: DVec3,
        geometric_normal: DVec3,
        tangent: DVec3,
        bitangent: DVec3,
    ) -> DVec3 {
        let height = self.height(direction);
        self.normal_with_height(direction, height, geometric_normal, tangent, bitangent)
    }

    fn normal_with_height(
        &self,
        direction: DVec3,
        height: f64,
        geometric_normal: DVec3,
        tangent: DVec3,
        bitangent: DVec3,
    ) -> DVec3 {
        let radius = self.params.radius;
        let bump = &self.params.bump;

        let pos = direction * (radius + height);
        let p_t = direction + bump.offset * tangent;
        let p_b = direction + bump.offset * bitangent;
        let pos_t = p_t * (radius + self.height(p_t));
        let pos_b = p_b * (radius + self.height(p_b));

        let bump_normal = normalize_or_zero((pos_t - pos).cross(pos_b - pos));
        normalize_or_zero(mix_vec(geometric_normal, bump_normal, bump.strength))
    }

    /// Full surface evaluation at one vertex or fragment.
    pub fn shade(
        &self,
        direction: DVec3,
        tangent: DVec3,
        bitangent: DVec3,
        camera_position: DVec3,
    ) -> SurfaceSample {
        let height = self.height(direction);
        let position = direction * (self.params.radius + height);
        let geometric_normal = normalize_or_zero(direction);
        let normal =
            self.normal_with_height(direction, height, geometric_normal, tangent, bitangent);

        let colors = &self.params.colors;
        let lighting = &self.params.lighting;
        let falloff = specular_falloff(height, colors.transition3);
        let light = phong(lighting, normal, position, camera_position, falloff).total();

        let base = DVec3::from(colors.blend(height));
        let tint = DVec3::from(lighting.light_color);
        let rgb = light * base * tint;

        SurfaceSample {
            height,
            position,
            normal,
            color: [rgb.x, rgb.y, rgb.z, 1.0],
        }
    }
}
