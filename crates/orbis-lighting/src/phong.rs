//! Phong reflection for a single directional light.

use glam::DVec3;
use orbis_math::{normalize_or_zero, reflect};

use crate::LightingParams;

/// The three Phong contributions at one surface point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhongTerms {
    pub ambient: f64,
    pub diffuse: f64,
    pub specular: f64,
}

impl PhongTerms {
    /// Scalar light intensity: `ambient + diffuse + specular`.
    pub fn total(&self) -> f64 {
        self.ambient + self.diffuse + self.specular
    }
}

/// Evaluate Phong lighting at `position` with shading normal `normal`.
///
/// `specular_falloff` scales the specular highlight and is expected in
/// `[0, 1]`. A negative `dot(V, R)` contributes no highlight.
pub fn phong(
    params: &LightingParams,
    normal: DVec3,
    position: DVec3,
    camera_position: DVec3,
    specular_falloff: f64,
) -> PhongTerms {
    let l = normalize_or_zero(-params.light_direction);
    let v = normalize_or_zero(camera_position - position);
    let r = normalize_or_zero(reflect(l, normal));

    let diffuse = params.diffuse_intensity * normal.dot(-l).max(0.0);
    let highlight = v.dot(r).max(0.0).powf(params.shininess);
    let specular = (specular_falloff * params.specular_intensity * highlight).max(0.0);

    PhongTerms {
        ambient: params.ambient_intensity,
        diffuse,
        specular,
    }
}
