//! Stateless evaluation entry points.
//!
//! Each call builds its shader from the [`ParameterSet`], so these are pure
//! functions of their arguments. Use [`crate::Scene`] to evaluate many
//! vertices or particles against the same parameters.

use glam::DVec3;
use orbis_atmosphere::{AtmosphereShader, ParticleBuffers, sample_shell};
use orbis_config::ParameterSet;
use orbis_planet::{SurfaceSample, SurfaceShader};
use rand::Rng;

/// Displace and shade one point of the unit sphere.
///
/// `direction` is the undisplaced vertex on the unit sphere; `tangent` and
/// `bitangent` span its tangent plane.
pub fn evaluate_vertex(
    direction: DVec3,
    tangent: DVec3,
    bitangent: DVec3,
    params: &ParameterSet,
    camera_position: DVec3,
) -> SurfaceSample {
    SurfaceShader::new(params.planet).shade(direction, tangent, bitangent, camera_position)
}

/// Sample a fresh atmosphere particle cloud.
pub fn generate_particles<R: Rng>(params: &ParameterSet, rng: &mut R) -> ParticleBuffers {
    sample_shell(&params.atmosphere, rng)
}

/// RGBA of the atmosphere particle at `position` after `elapsed` seconds.
///
/// Lit by the planet's light direction.
pub fn shade_particle(position: DVec3, elapsed: f64, params: &ParameterSet) -> [f64; 4] {
    AtmosphereShader::new(params.atmosphere, params.planet.lighting.light_direction)
        .shade(position, elapsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use orbis_planet::bitangent;
    use orbis_terrain::{NoiseField, TerrainHeightModel, TerrainParams, TerrainType, terrain_height};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn ridged_params() -> ParameterSet {
        let mut params = ParameterSet::default();
        params.planet.terrain = TerrainParams {
            terrain_type: TerrainType::Ridged,
            amplitude: 1.19,
            sharpness: 2.6,
            offset: -0.016,
            period: 0.6,
            persistence: 0.484,
            lacunarity: 1.6,
            octaves: 10,
        };
        params
    }

    #[test]
    fn test_ridged_height_at_north_pole_cross_checks() {
        let params = ridged_params();
        let pole = DVec3::Y;

        let model = TerrainHeightModel::new(params.planet.terrain);
        let via_model = model.height(pole);

        let tangent = DVec3::X;
        let sample = evaluate_vertex(
            pole,
            tangent,
            bitangent(pole, tangent),
            &params,
            DVec3::new(0.0, 0.0, 90.0),
        );

        let independent = terrain_height(&NoiseField::new(), pole, &params.planet.terrain);

        assert_eq!(via_model, sample.height, "surface path disagrees with height model");
        assert_eq!(via_model, independent, "independent model disagrees");
        assert_eq!(
            via_model.to_bits(),
            0x3fc3_1d53_105c_4cfc,
            "north pole height drifted from 0.14933241175513234, got {via_model}"
        );
        assert!(
            (0.0..=params.planet.terrain.amplitude).contains(&via_model),
            "height {via_model} outside [0, amplitude]"
        );
        let expected_position = pole * (params.planet.radius + via_model);
        assert!((sample.position - expected_position).length() < 1e-12);
    }

    #[test]
    fn test_evaluate_vertex_is_deterministic() {
        let params = ParameterSet::default();
        let d = DVec3::new(0.3, -0.4, 0.866).normalize();
        let t = DVec3::Y.cross(d).normalize();
        let b = bitangent(d, t);
        let camera = DVec3::Z * 90.0;
        assert_eq!(
            evaluate_vertex(d, t, b, &params, camera),
            evaluate_vertex(d, t, b, &params, camera)
        );
    }

    #[test]
    fn test_vertex_color_is_opaque_and_bounded() {
        let params = ParameterSet::default();
        for i in 0..64 {
            let a = i as f64 * 0.7;
            let d = DVec3::new(a.cos(), (a * 0.3).sin(), a.sin()).normalize();
            let t = DVec3::Y.cross(d).try_normalize().unwrap_or(DVec3::X);
            let sample = evaluate_vertex(d, t, bitangent(d, t), &params, DVec3::Z * 90.0);
            assert_eq!(sample.color[3], 1.0);
            assert!(sample.color[..3].iter().all(|c| c.is_finite() && *c >= 0.0));
        }
    }

    #[test]
    fn test_generate_particles_uses_atmosphere_params() {
        let mut params = ParameterSet::default();
        params.atmosphere.particles = 400;
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let buffers = generate_particles(&params, &mut rng);
        assert_eq!(buffers.len(), 400);
        let outer = params.atmosphere.radius + params.atmosphere.thickness;
        for p in &buffers.positions {
            let d = p.length();
            assert!(d >= params.atmosphere.radius - 1e-9 && d <= outer + 1e-9);
        }
    }

    #[test]
    fn test_shade_particle_uses_planet_light() {
        let mut params = ParameterSet::default();
        params.planet.lighting.light_direction = DVec3::new(0.0, 0.0, 2.0);
        params.atmosphere.color.r = 0.5;

        let lit = shade_particle(DVec3::Z * 21.0, 4.0, &params);
        let dark = shade_particle(-DVec3::Z * 21.0, 4.0, &params);

        let color = params.atmosphere.color;
        assert!((lit[0] - color.r).abs() < 1e-12);
        assert!((dark[0] - 0.05 * color.r).abs() < 1e-12);
        assert!((0.0..=params.atmosphere.opacity).contains(&lit[3]));
    }
}
