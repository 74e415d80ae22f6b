//! Particle placement within the atmosphere shell.
//!
//! Each particle direction is drawn uniformly from the cube `[-1, 1]^3` and
//! projected onto the sphere. Unlike sampling latitude/longitude uniformly,
//! this does not bunch particles at the poles.

use bytemuck::{Pod, Zeroable};
use glam::{DVec2, DVec3};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::AtmosphereParams;

/// Per-particle attribute arrays, index-aligned.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParticleBuffers {
    pub positions: Vec<DVec3>,
    pub sizes: Vec<f64>,
    /// Sprite anchor; always the sprite center `(0.5, 0.5)`.
    pub uvs: Vec<DVec2>,
}

impl ParticleBuffers {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Interleaved `f32` vertices for GPU upload.
    pub fn vertices(&self) -> Vec<ParticleVertex> {
        self.positions
            .iter()
            .zip(&self.sizes)
            .zip(&self.uvs)
            .map(|((p, size), uv)| ParticleVertex {
                position: p.as_vec3().to_array(),
                size: *size as f32,
                uv: uv.as_vec2().to_array(),
            })
            .collect()
    }
}

/// Packed particle vertex: 24 bytes.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct ParticleVertex {
    pub position: [f32; 3],
    pub size: f32,
    pub uv: [f32; 2],
}

/// Draw `params.particles` positions in the shell
/// `[radius, radius + thickness]` with sizes in `[min, max]`.
pub fn sample_shell<R: Rng>(params: &AtmosphereParams, rng: &mut R) -> ParticleBuffers {
    let count = params.particles as usize;
    let mut buffers = ParticleBuffers {
        positions: Vec::with_capacity(count),
        sizes: Vec::with_capacity(count),
        uvs: Vec::with_capacity(count),
    };

    for _ in 0..count {
        let r = rng.random::<f64>() * params.thickness + params.radius;

        let cube = DVec3::new(
            2.0 * rng.random::<f64>() - 1.0,
            2.0 * rng.random::<f64>() - 1.0,
            2.0 * rng.random::<f64>() - 1.0,
        );
        // The origin has no direction; park it at the north pole.
        let direction = cube.try_normalize().unwrap_or(DVec3::Y);

        let size = rng.random::<f64>() * (params.max_particle_size - params.min_particle_size)
            + params.min_particle_size;

        buffers.positions.push(direction * r);
        buffers.sizes.push(size);
        buffers.uvs.push(DVec2::splat(0.5));
    }

    buffers
}

/// The atmosphere parameters that determine particle placement. Any change
/// forces a full regeneration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShellSignature {
    pub particles: u32,
    pub radius: f64,
    pub thickness: f64,
    pub min_particle_size: f64,
    pub max_particle_size: f64,
}

impl ShellSignature {
    pub fn of(params: &AtmosphereParams) -> Self {
        Self {
            particles: params.particles,
            radius: params.radius,
            thickness: params.thickness,
            min_particle_size: params.min_particle_size,
            max_particle_size: params.max_particle_size,
        }
    }
}

/// Owns the current particle buffers and regenerates them wholesale when the
/// shell changes.
#[derive(Debug)]
pub struct AtmosphereCloud {
    rng: ChaCha8Rng,
    signature: ShellSignature,
    buffers: ParticleBuffers,
    generation: u64,
}

impl AtmosphereCloud {
    /// Sample an initial cloud. Deterministic for a given seed.
    pub fn new(params: &AtmosphereParams, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let buffers = sample_shell(params, &mut rng);
        tracing::debug!(particles = buffers.len(), "sampled atmosphere shell");
        Self {
            rng,
            signature: ShellSignature::of(params),
            buffers,
            generation: 0,
        }
    }

    /// Regenerate if the shell parameters differ from the ones the current
    /// buffers were built with. Returns whether a regeneration happened.
    ///
    /// Shading-only parameters (density, opacity, color, ...) never trigger a
    /// regeneration.
    pub fn sync(&mut self, params: &AtmosphereParams) -> bool {
        let signature = ShellSignature::of(params);
        if signature == self.signature {
            return false;
        }

        // Drop the old buffers before sampling the replacement.
        self.buffers = ParticleBuffers::default();
        self.buffers = sample_shell(params, &mut self.rng);
        self.signature = signature;
        self.generation += 1;

        tracing::info!(
            particles = self.buffers.len(),
            radius = params.radius,
            thickness = params.thickness,
            generation = self.generation,
            "regenerated atmosphere particles"
        );
        true
    }

    pub fn buffers(&self) -> &ParticleBuffers {
        &self.buffers
    }

    pub fn signature(&self) -> &ShellSignature {
        &self.signature
    }

    /// Number of regenerations since construction.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
