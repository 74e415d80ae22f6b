//! Particle atmosphere: shell sampling, regeneration on parameter change, and
//! time-animated per-particle shading driven by the terrain noise field.

mod params;
mod sampler;
mod shading;

pub use params::AtmosphereParams;
pub use sampler::{AtmosphereCloud, ParticleBuffers, ParticleVertex, ShellSignature, sample_shell};
pub use shading::{AtmosphereShader, MIN_PARTICLE_LIGHT, shade_fragment, sprite_mask};
