use orbis_math::Color3;
use serde::{Deserialize, Serialize};

/// Atmosphere shell and shading configuration.
///
/// The light direction is not stored here; it is shared with the planet
/// lighting and passed to [`crate::AtmosphereShader`] separately.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AtmosphereParams {
    /// Number of particles in the shell.
    pub particles: u32,
    pub min_particle_size: f64,
    pub max_particle_size: f64,
    /// Inner radius of the shell. Should exceed the planet radius.
    pub radius: f64,
    /// Radial depth of the shell.
    pub thickness: f64,
    /// Bias added to the noise before clamping; higher is cloudier.
    pub density: f64,
    /// Peak particle alpha, in `[0, 1]`.
    pub opacity: f64,
    /// Spatial scale of the cloud noise.
    pub scale: f64,
    /// Tint color.
    pub color: Color3,
    /// Noise animation rate.
    pub speed: f64,
}

impl Default for AtmosphereParams {
    fn default() -> Self {
        Self {
            particles: 5000,
            min_particle_size: 50.0,
            max_particle_size: 50.0,
            radius: 20.7,
            thickness: 0.6,
            density: 0.5,
            opacity: 0.1,
            scale: 15.0,
            color: Color3::WHITE,
            speed: 0.03,
        }
    }
}
