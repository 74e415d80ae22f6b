//! Directional light parameters and Phong shading terms for the planet surface.

mod light;
mod phong;

pub use light::{LightUniform, LightingParams};
pub use phong::{PhongTerms, phong};
