//! Linear RGB color triple.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// An RGB color with components conventionally in `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Color3 {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color3 {
    pub const WHITE: Color3 = Color3::new(1.0, 1.0, 1.0);
    pub const BLACK: Color3 = Color3::new(0.0, 0.0, 0.0);

    /// Create a color from its components.
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a packed `0xRRGGBB` value.
    pub fn from_hex(hex: u32) -> Self {
        let channel = |shift: u32| ((hex >> shift) & 0xff) as f64 / 255.0;
        Self::new(channel(16), channel(8), channel(0))
    }

    /// Linear blend towards `other`; `t = 0` returns `self`.
    pub fn lerp(self, other: Color3, t: f64) -> Self {
        Self::from(DVec3::from(self).lerp(DVec3::from(other), t))
    }

    /// Pack into RGBA with the given alpha.
    pub fn with_alpha(self, alpha: f64) -> [f64; 4] {
        [self.r, self.g, self.b, alpha]
    }

    /// Narrow to `f32` RGBA for GPU buffers.
    pub fn to_rgba_f32(self, alpha: f64) -> [f32; 4] {
        [self.r as f32, self.g as f32, self.b as f32, alpha as f32]
    }
}

impl From<DVec3> for Color3 {
    fn from(v: DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Color3> for DVec3 {
    fn from(c: Color3) -> Self {
        DVec3::new(c.r, c.g, c.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_white_and_channels() {
        assert_eq!(Color3::from_hex(0xffffff), Color3::WHITE);
        let c = Color3::from_hex(0xff0080);
        assert_eq!(c.r, 1.0);
        assert_eq!(c.g, 0.0);
        assert!((c.b - 128.0 / 255.0).abs() < 1e-12);
    }

    #[test]
    fn test_lerp_midpoint() {
        let mid = Color3::BLACK.lerp(Color3::WHITE, 0.5);
        assert_eq!(mid, Color3::new(0.5, 0.5, 0.5));
    }

    #[test]
    fn test_color_ron_roundtrip() {
        let c = Color3::new(0.014, 0.117, 0.279);
        let text = ron::to_string(&c).unwrap();
        let back: Color3 = ron::from_str(&text).unwrap();
        assert_eq!(c, back);
    }
}
