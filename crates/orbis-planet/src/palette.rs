//! Height-keyed color banding.
//!
//! Five colors are chained by four smoothstep blends. Each blend is applied on
//! top of the previous result, so the output is one continuous gradient over
//! height instead of a palette lookup.

use orbis_math::{Color3, smoothstep};
use serde::{Deserialize, Serialize};

/// Five ordered surface colors and the height transitions between them.
///
/// `transitionN` is the height at which color `N` takes over from color
/// `N - 1`; `blendMN` is the half-width of that transition. Transitions are
/// expected to increase but this is not enforced.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorLayers {
    pub color1: Color3,
    pub color2: Color3,
    pub color3: Color3,
    pub color4: Color3,
    pub color5: Color3,
    pub transition2: f64,
    pub transition3: f64,
    pub transition4: f64,
    pub transition5: f64,
    pub blend12: f64,
    pub blend23: f64,
    pub blend34: f64,
    pub blend45: f64,
}

impl Default for ColorLayers {
    fn default() -> Self {
        Self {
            color1: Color3::new(0.014, 0.117, 0.279),
            color2: Color3::new(0.080, 0.527, 0.351),
            color3: Color3::new(0.620, 0.516, 0.372),
            color4: Color3::new(0.149, 0.254, 0.084),
            color5: Color3::new(0.150, 0.150, 0.150),
            transition2: 0.071,
            transition3: 0.215,
            transition4: 0.372,
            transition5: 1.2,
            blend12: 0.152,
            blend23: 0.152,
            blend34: 0.104,
            blend45: 0.168,
        }
    }
}

impl ColorLayers {
    /// Blended surface color at height `h`.
    pub fn blend(&self, h: f64) -> Color3 {
        let layer = |color: Color3, transition: f64, blend: f64, base: Color3| {
            base.lerp(color, smoothstep(transition - blend, transition + blend, h))
        };

        let c12 = layer(self.color2, self.transition2, self.blend12, self.color1);
        let c123 = layer(self.color3, self.transition3, self.blend23, c12);
        let c1234 = layer(self.color4, self.transition4, self.blend34, c123);
        layer(self.color5, self.transition5, self.blend45, c1234)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    /// Primary-ish colors and well separated windows so each transition can be
    /// checked in isolation.
    fn separated() -> ColorLayers {
        ColorLayers {
            color1: Color3::new(0.0, 0.0, 1.0),
            color2: Color3::new(0.0, 1.0, 0.0),
            color3: Color3::new(1.0, 1.0, 0.0),
            color4: Color3::new(1.0, 0.0, 0.0),
            color5: Color3::new(1.0, 1.0, 1.0),
            transition2: 1.0,
            transition3: 2.0,
            transition4: 3.0,
            transition5: 4.0,
            blend12: 0.2,
            blend23: 0.3,
            blend34: 0.1,
            blend45: 0.25,
        }
    }

    fn windows(l: &ColorLayers) -> [(f64, f64, Color3, Color3); 4] {
        [
            (l.transition2, l.blend12, l.color1, l.color2),
            (l.transition3, l.blend23, l.color2, l.color3),
            (l.transition4, l.blend34, l.color3, l.color4),
            (l.transition5, l.blend45, l.color4, l.color5),
        ]
    }

    fn close(a: Color3, b: Color3) -> bool {
        (a.r - b.r).abs() < EPSILON && (a.g - b.g).abs() < EPSILON && (a.b - b.b).abs() < EPSILON
    }

    #[test]
    fn test_window_edges_hit_layer_colors_exactly() {
        let layers = separated();
        for (t, b, from, to) in windows(&layers) {
            assert!(close(layers.blend(t - b), from), "lower edge of window at {t}");
            assert!(close(layers.blend(t + b), to), "upper edge of window at {t}");
        }
        assert!(close(layers.blend(-10.0), layers.color1));
        assert!(close(layers.blend(10.0), layers.color5));
    }

    #[test]
    fn test_blend_is_monotonic_inside_each_window() {
        let layers = separated();
        let steps = 200;
        for (t, b, from, to) in windows(&layers) {
            let mut prev = layers.blend(t - b);
            for i in 1..=steps {
                let h = t - b + 2.0 * b * i as f64 / steps as f64;
                let c = layers.blend(h);
                for (p, n, a, z) in [
                    (prev.r, c.r, from.r, to.r),
                    (prev.g, c.g, from.g, to.g),
                    (prev.b, c.b, from.b, to.b),
                ] {
                    let direction = (z - a).signum();
                    assert!(
                        (n - p) * direction >= -EPSILON,
                        "channel moved backwards at h={h} in window {t}: {p} -> {n}"
                    );
                }
                prev = c;
            }
        }
    }

    #[test]
    fn test_blend_has_no_jumps() {
        let layers = ColorLayers::default();
        let step = 1e-4;
        let mut h = -0.5;
        let mut prev = layers.blend(h);
        while h < 2.0 {
            h += step;
            let c = layers.blend(h);
            let jump = (c.r - prev.r).abs().max((c.g - prev.g).abs()).max((c.b - prev.b).abs());
            assert!(jump < 0.01, "color jumped by {jump} at h={h}");
            prev = c;
        }
    }

    #[test]
    fn test_zero_blend_width_is_hard_edge() {
        let layers = ColorLayers {
            blend12: 0.0,
            ..separated()
        };
        assert!(close(layers.blend(0.999), layers.color1));
        assert!(close(layers.blend(1.0), layers.color2));
    }

    #[test]
    fn test_default_palette_matches_reference_colors() {
        let layers = ColorLayers::default();
        assert_eq!(layers.color1, Color3::new(0.014, 0.117, 0.279));
        assert_eq!(layers.transition3, 0.215);
        assert_eq!(layers.blend45, 0.168);
    }
}
