//! CPU ports of the GLSL built-ins used by the planet and atmosphere shaders.
//!
//! Each function follows the GLSL definition exactly, with two deliberate
//! differences for degenerate input: [`smoothstep`] with coincident edges
//! behaves like [`step`], and [`normalize_or_zero`] maps a zero-length vector
//! to zero instead of producing NaN.

use glam::DVec3;

/// Linear interpolation `x * (1 - a) + y * a`.
#[inline]
pub fn mix(x: f64, y: f64, a: f64) -> f64 {
    x * (1.0 - a) + y * a
}

/// Component-wise [`mix`] on vectors.
#[inline]
pub fn mix_vec(x: DVec3, y: DVec3, a: f64) -> DVec3 {
    x * (1.0 - a) + y * a
}

/// Hermite interpolation between `edge0` and `edge1`.
///
/// Returns 0 for `x <= edge0`, 1 for `x >= edge1`, and `t * t * (3 - 2t)` in
/// between. If the window is empty (`edge1 <= edge0`) the result is
/// `step(edge0, x)`.
#[inline]
pub fn smoothstep(edge0: f64, edge1: f64, x: f64) -> f64 {
    if edge1 <= edge0 {
        return step(edge0, x);
    }
    let t = clamp01((x - edge0) / (edge1 - edge0));
    t * t * (3.0 - 2.0 * t)
}

/// 0 if `x < edge`, otherwise 1.
#[inline]
pub fn step(edge: f64, x: f64) -> f64 {
    if x < edge { 0.0 } else { 1.0 }
}

/// Clamp to `[0, 1]`.
#[inline]
pub fn clamp01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

/// Reflect incident vector `i` about the normal `n`: `i - 2 * dot(n, i) * n`.
#[inline]
pub fn reflect(i: DVec3, n: DVec3) -> DVec3 {
    i - 2.0 * n.dot(i) * n
}

/// Normalize, mapping zero-length and non-finite results to `DVec3::ZERO`.
#[inline]
pub fn normalize_or_zero(v: DVec3) -> DVec3 {
    v.normalize_or_zero()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_mix_endpoints() {
        assert_eq!(mix(2.0, 6.0, 0.0), 2.0);
        assert_eq!(mix(2.0, 6.0, 1.0), 6.0);
        assert!((mix(2.0, 6.0, 0.25) - 3.0).abs() < EPSILON);
    }

    #[test]
    fn test_mix_vec_matches_scalar_mix() {
        let a = DVec3::new(0.0, 1.0, -2.0);
        let b = DVec3::new(4.0, 3.0, 2.0);
        let m = mix_vec(a, b, 0.5);
        assert!((m - DVec3::new(2.0, 2.0, 0.0)).length() < EPSILON);
    }

    #[test]
    fn test_smoothstep_matches_hermite_polynomial() {
        assert_eq!(smoothstep(0.0, 1.0, -0.5), 0.0);
        assert_eq!(smoothstep(0.0, 1.0, 1.5), 1.0);
        assert!((smoothstep(0.0, 1.0, 0.5) - 0.5).abs() < EPSILON);
        // t = 0.25 -> 0.0625 * 2.5
        assert!((smoothstep(0.0, 1.0, 0.25) - 0.156_25).abs() < EPSILON);
        // Shifted window
        assert!((smoothstep(2.0, 4.0, 3.0) - 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_smoothstep_empty_window_is_step() {
        assert_eq!(smoothstep(0.3, 0.3, 0.29), 0.0);
        assert_eq!(smoothstep(0.3, 0.3, 0.3), 1.0);
        assert_eq!(smoothstep(0.5, 0.1, 0.4), 0.0);
    }

    #[test]
    fn test_step() {
        assert_eq!(step(1.0, 0.999), 0.0);
        assert_eq!(step(1.0, 1.0), 1.0);
        assert_eq!(step(1.0, 7.0), 1.0);
    }

    #[test]
    fn test_reflect_flips_normal_component() {
        let r = reflect(DVec3::new(1.0, -1.0, 0.0), DVec3::Y);
        assert!((r - DVec3::new(1.0, 1.0, 0.0)).length() < EPSILON);
    }

    #[test]
    fn test_normalize_zero_stays_zero() {
        assert_eq!(normalize_or_zero(DVec3::ZERO), DVec3::ZERO);
        let n = normalize_or_zero(DVec3::new(0.0, 3.0, 4.0));
        assert!((n.length() - 1.0).abs() < EPSILON);
    }
}
