//! Shader-style numeric helpers and color types shared by every Orbis crate.

mod color;
mod glsl;

pub use color::Color3;
pub use glsl::{clamp01, mix, mix_vec, normalize_or_zero, reflect, smoothstep, step};

pub use glam::{DVec2, DVec3};
