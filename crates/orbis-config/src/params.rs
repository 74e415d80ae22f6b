//! The aggregate of every planet and atmosphere parameter, and its validation.

use orbis_atmosphere::AtmosphereParams;
use orbis_planet::PlanetParams;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Complete parameter surface of the planet and its atmosphere.
///
/// Built once at scene setup and passed by reference into every evaluation.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ParameterSet {
    pub planet: PlanetParams,
    pub atmosphere: AtmosphereParams,
}

impl ParameterSet {
    /// Check every parameter against its domain. Returns the first violation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.check_finite()?;

        let planet = &self.planet;
        let terrain = &planet.terrain;
        let colors = &planet.colors;
        let lighting = &planet.lighting;
        let atmosphere = &self.atmosphere;

        positive("planet.radius", planet.radius)?;

        non_negative("planet.terrain.amplitude", terrain.amplitude)?;
        non_negative("planet.terrain.sharpness", terrain.sharpness)?;
        positive("planet.terrain.period", terrain.period)?;
        positive("planet.terrain.lacunarity", terrain.lacunarity)?;
        if terrain.persistence <= 0.0 || terrain.persistence > 1.0 {
            return Err(ConfigError::invalid(
                "planet.terrain.persistence",
                format!("{} is outside (0, 1]", terrain.persistence),
            ));
        }
        if terrain.octaves == 0 {
            return Err(ConfigError::invalid(
                "planet.terrain.octaves",
                "at least one octave is required",
            ));
        }

        for (field, width) in [
            ("planet.colors.blend12", colors.blend12),
            ("planet.colors.blend23", colors.blend23),
            ("planet.colors.blend34", colors.blend34),
            ("planet.colors.blend45", colors.blend45),
        ] {
            non_negative(field, width)?;
        }

        unit_interval("planet.bump.strength", planet.bump.strength)?;
        positive("planet.bump.offset", planet.bump.offset)?;

        non_negative("planet.lighting.shininess", lighting.shininess)?;
        if lighting.light_direction.length_squared() == 0.0 {
            return Err(ConfigError::invalid(
                "planet.lighting.light_direction",
                "direction must be non-zero",
            ));
        }

        if atmosphere.min_particle_size > atmosphere.max_particle_size {
            return Err(ConfigError::invalid(
                "atmosphere.min_particle_size",
                format!(
                    "{} exceeds max_particle_size {}",
                    atmosphere.min_particle_size, atmosphere.max_particle_size
                ),
            ));
        }
        non_negative("atmosphere.thickness", atmosphere.thickness)?;
        if atmosphere.radius <= planet.radius {
            return Err(ConfigError::invalid(
                "atmosphere.radius",
                format!(
                    "{} must exceed the planet radius {}",
                    atmosphere.radius, planet.radius
                ),
            ));
        }
        unit_interval("atmosphere.opacity", atmosphere.opacity)?;
        positive("atmosphere.scale", atmosphere.scale)?;

        Ok(())
    }

    fn check_finite(&self) -> Result<(), ConfigError> {
        let p = &self.planet;
        let t = &p.terrain;
        let c = &p.colors;
        let l = &p.lighting;
        let a = &self.atmosphere;

        let scalars = [
            ("planet.radius", p.radius),
            ("planet.terrain.amplitude", t.amplitude),
            ("planet.terrain.sharpness", t.sharpness),
            ("planet.terrain.offset", t.offset),
            ("planet.terrain.period", t.period),
            ("planet.terrain.persistence", t.persistence),
            ("planet.terrain.lacunarity", t.lacunarity),
            ("planet.colors.transition2", c.transition2),
            ("planet.colors.transition3", c.transition3),
            ("planet.colors.transition4", c.transition4),
            ("planet.colors.transition5", c.transition5),
            ("planet.colors.blend12", c.blend12),
            ("planet.colors.blend23", c.blend23),
            ("planet.colors.blend34", c.blend34),
            ("planet.colors.blend45", c.blend45),
            ("planet.lighting.ambient_intensity", l.ambient_intensity),
            ("planet.lighting.diffuse_intensity", l.diffuse_intensity),
            ("planet.lighting.specular_intensity", l.specular_intensity),
            ("planet.lighting.shininess", l.shininess),
            ("planet.bump.strength", p.bump.strength),
            ("planet.bump.offset", p.bump.offset),
            ("atmosphere.min_particle_size", a.min_particle_size),
            ("atmosphere.max_particle_size", a.max_particle_size),
            ("atmosphere.radius", a.radius),
            ("atmosphere.thickness", a.thickness),
            ("atmosphere.density", a.density),
            ("atmosphere.opacity", a.opacity),
            ("atmosphere.scale", a.scale),
            ("atmosphere.speed", a.speed),
        ];
        for (field, value) in scalars {
            finite(field, value)?;
        }

        let colors = [
            ("planet.colors.color1", c.color1),
            ("planet.colors.color2", c.color2),
            ("planet.colors.color3", c.color3),
            ("planet.colors.color4", c.color4),
            ("planet.colors.color5", c.color5),
            ("planet.lighting.light_color", l.light_color),
            ("atmosphere.color", a.color),
        ];
        for (field, color) in colors {
            if ![color.r, color.g, color.b].iter().all(|v| v.is_finite()) {
                return Err(ConfigError::invalid(field, "color components must be finite"));
            }
        }

        if !l.light_direction.is_finite() {
            return Err(ConfigError::invalid(
                "planet.lighting.light_direction",
                "components must be finite",
            ));
        }
        Ok(())
    }
}

fn finite(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("{value} is not finite")))
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("{value} must be > 0")))
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("{value} must be >= 0")))
    }
}

fn unit_interval(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("{value} is outside [0, 1]")))
    }
}
