//! Procedural starfield: deterministic star placement on a large sphere
//! centered on the camera.
//!
//! Stars are mostly dimmed white with a quarter picked from a small palette
//! of desaturated tints. The field never moves relative to the camera, so the
//! renderer only needs [`StarfieldGenerator::offset_for_camera`] each frame.

use glam::DVec3;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Distance of every star from the field center.
pub const STARFIELD_RADIUS: f64 = 200.0;

/// Global alpha applied to the whole field.
pub const STAR_OPACITY: f32 = 0.3;

const WHITE_STAR: [f32; 4] = [0.9, 0.9, 0.9, 1.0];
const TINTED_STARS: [[f32; 4]; 3] = [
    [0.8, 0.2, 0.2, 1.0], // red
    [0.9, 0.6, 0.3, 1.0], // orange
    [0.3, 0.3, 0.8, 1.0], // blue
];
const WHITE_FRACTION: f64 = 0.75;

/// All colors a star can take, white first.
pub fn star_palette() -> [[f32; 4]; 4] {
    [WHITE_STAR, TINTED_STARS[0], TINTED_STARS[1], TINTED_STARS[2]]
}

/// A single star.
#[derive(Clone, Debug, PartialEq)]
pub struct StarPoint {
    /// Position relative to the field center, at [`STARFIELD_RADIUS`].
    pub position: DVec3,
    /// RGBA.
    pub color: [f32; 4],
    /// Point size in pixels, in `[2, 7)`.
    pub size: f32,
}

/// Packed star vertex: 32 bytes. Alpha already includes [`STAR_OPACITY`].
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct StarVertex {
    pub position: [f32; 3],
    pub size: f32,
    pub color: [f32; 4],
}

impl From<&StarPoint> for StarVertex {
    fn from(star: &StarPoint) -> Self {
        let [r, g, b, a] = star.color;
        Self {
            position: star.position.as_vec3().to_array(),
            size: star.size,
            color: [r, g, b, a * STAR_OPACITY],
        }
    }
}

/// Generates a deterministic star catalog from a seed.
pub struct StarfieldGenerator {
    seed: u64,
    star_count: u32,
}

impl StarfieldGenerator {
    pub fn new(seed: u64, star_count: u32) -> Self {
        Self { seed, star_count }
    }

    /// Generate the star catalog. Deterministic for a given seed.
    pub fn generate(&self) -> Vec<StarPoint> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let mut stars = Vec::with_capacity(self.star_count as usize);

        for _ in 0..self.star_count {
            let theta = rng.random::<f64>() * std::f64::consts::TAU;
            let phi = (rng.random::<f64>() * 2.0 - 1.0).acos();

            let position = STARFIELD_RADIUS
                * DVec3::new(phi.sin() * theta.cos(), phi.sin() * theta.sin(), phi.cos());

            let color = if rng.random::<f64>() < WHITE_FRACTION {
                WHITE_STAR
            } else {
                TINTED_STARS[rng.random_range(0..TINTED_STARS.len())]
            };

            let size = 5.0 * rng.random::<f32>() + 2.0;

            stars.push(StarPoint {
                position,
                color,
                size,
            });
        }

        log::debug!("generated {} stars (seed {})", stars.len(), self.seed);
        stars
    }

    /// Translation that keeps the field centered on the camera.
    pub fn offset_for_camera(camera_position: DVec3) -> DVec3 {
        camera_position
    }
}
