//! Deterministic 3D gradient noise.
//!
//! [`NoiseField`] is a thin wrapper over the `noise` crate's simplex
//! implementation. The permutation table is built once at construction and is
//! only ever read afterwards, so a single field can be shared across threads.

use glam::DVec3;
use noise::{NoiseFn, Seedable, Simplex};

/// Simplex gradient noise over 3D space, output approximately in `[-1, 1]`.
#[derive(Clone, Copy, Debug)]
pub struct NoiseField {
    simplex: Simplex,
}

impl NoiseField {
    /// Noise field on the default lattice.
    pub fn new() -> Self {
        Self::with_seed(Simplex::DEFAULT_SEED)
    }

    /// Noise field on a lattice shuffled by `seed`.
    pub fn with_seed(seed: u32) -> Self {
        Self {
            simplex: Simplex::new(seed),
        }
    }

    /// The seed used to build the permutation table.
    pub fn seed(&self) -> u32 {
        self.simplex.seed()
    }

    /// Sample the field at `v`.
    #[inline]
    pub fn noise3(&self, v: DVec3) -> f64 {
        self.simplex.get(v.to_array())
    }
}

impl Default for NoiseField {
    fn default() -> Self {
        Self::new()
    }
}

impl NoiseFn<f64, 3> for NoiseField {
    #[inline]
    fn get(&self, point: [f64; 3]) -> f64 {
        self.simplex.get(point)
    }
}

/// Sample any 3D noise source at a vector position.
#[inline]
pub fn noise3<N: NoiseFn<f64, 3> + ?Sized>(noise: &N, v: DVec3) -> f64 {
    noise.get(v.to_array())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noise_is_reproducible() {
        let a = NoiseField::new();
        let b = NoiseField::new();
        for i in 0..200 {
            let v = DVec3::new(i as f64 * 0.37, -(i as f64) * 0.11, i as f64 * 0.05 + 3.0);
            assert_eq!(
                a.noise3(v).to_bits(),
                b.noise3(v).to_bits(),
                "noise must be bit-identical for identical input at {v}"
            );
        }
    }

    #[test]
    fn test_noise_roughly_normalized() {
        let field = NoiseField::new();
        let mut min = f64::MAX;
        let mut max = f64::MIN;
        for x in 0..40 {
            for y in 0..40 {
                for z in 0..10 {
                    let v = DVec3::new(x as f64 * 0.173, y as f64 * 0.219, z as f64 * 0.311);
                    let n = field.noise3(v);
                    min = min.min(n);
                    max = max.max(n);
                }
            }
        }
        assert!(
            min >= -1.5 && max <= 1.5,
            "noise range [{min}, {max}] should stay close to [-1, 1]"
        );
        assert!(
            max - min > 0.5,
            "noise should actually vary, got range [{min}, {max}]"
        );
    }

    #[test]
    fn test_noise_is_continuous() {
        let field = NoiseField::new();
        let step = 1e-4;
        for i in 0..2_000 {
            let v = DVec3::new(i as f64 * 0.01, 0.5, -0.25);
            let delta = (field.noise3(v + DVec3::X * step) - field.noise3(v)).abs();
            assert!(delta < 0.01, "jump of {delta} at {v} for step {step}");
        }
    }

    #[test]
    fn test_free_function_matches_method() {
        let field = NoiseField::with_seed(7);
        assert_eq!(field.seed(), 7);
        let v = DVec3::new(0.3, 0.6, 0.9);
        assert_eq!(noise3(&field, v), field.noise3(v));
    }

    #[test]
    fn test_field_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<NoiseField>();
    }
}
