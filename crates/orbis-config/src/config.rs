//! Top-level configuration with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use orbis_planet::SphereMesh;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::params::ParameterSet;

/// File name of the persisted configuration inside the config directory.
pub const CONFIG_FILE_NAME: &str = "orbis.ron";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Planet and atmosphere parameters.
    pub params: ParameterSet,
    /// Scene assembly settings.
    pub scene: SceneConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// How the scene around the planet is assembled.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SceneConfig {
    /// Seed for the atmosphere particle sampler and the starfield.
    pub seed: u64,
    /// Number of background stars.
    pub star_count: u32,
    /// Segments around the equator and from pole to pole of the planet mesh.
    /// At most [`SphereMesh::MAX_SEGMENTS`].
    pub mesh_segments: u32,
    /// Initial camera distance from the planet center, along +Z.
    pub camera_distance: f64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            star_count: 2000,
            mesh_segments: 128,
            camera_distance: 90.0,
        }
    }
}

impl SceneConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.mesh_segments > SphereMesh::MAX_SEGMENTS {
            return Err(ConfigError::invalid(
                "scene.mesh_segments",
                format!(
                    "{} exceeds the limit of {}",
                    self.mesh_segments,
                    SphereMesh::MAX_SEGMENTS
                ),
            ));
        }
        if !self.camera_distance.is_finite() {
            return Err(ConfigError::invalid(
                "scene.camera_distance",
                format!("{} is not finite", self.camera_distance),
            ));
        }
        Ok(())
    }
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Platform config directory for Orbis, falling back to the working directory.
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join("orbis"))
        .unwrap_or_else(|| PathBuf::from("."))
}

// --- Load / Save / Reload ---

impl Config {
    /// Check the parameters and scene settings. Returns the first violation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.params.validate()?;
        self.scene.validate()
    }

    /// Load config from the given directory, or create a default config file.
    ///
    /// Loaded parameters are validated before they are returned.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if config_path.exists() {
            let config = Self::read(&config_path)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `orbis.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(4)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    ///
    /// A file that no longer validates is reported as an error and the caller
    /// keeps its current config.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let new_config = Self::read(&config_dir.join(CONFIG_FILE_NAME))?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }

    fn read(config_path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(config_path).map_err(ConfigError::ReadError)?;
        let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orbis_terrain::TerrainType;

    #[test]
    fn test_default_config_serializes() {
        let config = Config::default();
        let ron_str =
            ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::new()).unwrap();
        assert!(ron_str.contains("star_count: 2000"));
        assert!(ron_str.contains("mesh_segments: 128"));
        assert!(ron_str.contains("Ridged"));
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = Config::default();
        config.params.planet.terrain.terrain_type = TerrainType::Billowed;
        config.params.atmosphere.particles = 1234;
        let ron_str = ron::to_string(&config).unwrap();
        let deserialized: Config = ron::from_str(&ron_str).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_missing_field_uses_default() {
        let ron_str = "(params: (planet: (radius: 12.0)), debug: ())";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config.params.planet.radius, 12.0);
        assert_eq!(config.params.atmosphere, Default::default());
        assert_eq!(config.scene, SceneConfig::default());
    }

    #[test]
    fn test_extra_field_ignored() {
        let result: Result<Config, _> = ron::from_str("(bloom_strength: 0.5)");
        assert!(result.is_ok());
    }

    #[test]
    fn test_load_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, Config::default());
        assert!(dir.path().join(CONFIG_FILE_NAME).exists());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.scene.seed = 7;
        config.params.planet.terrain.octaves = 4;
        config.params.atmosphere.opacity = 0.35;

        config.save(dir.path()).unwrap();
        let loaded = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_load_rejects_invalid_parameters() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "(params: (planet: (terrain: (octaves: 0))))",
        )
        .unwrap();

        let err = Config::load_or_create(dir.path()).unwrap_err();
        assert!(
            matches!(
                err,
                ConfigError::InvalidParameter {
                    field: "planet.terrain.octaves",
                    ..
                }
            ),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn test_mesh_segments_bounded() {
        let mut config = Config::default();
        config.scene.mesh_segments = SphereMesh::MAX_SEGMENTS;
        config.validate().unwrap();

        config.scene.mesh_segments = 65536;
        let err = config.validate().unwrap_err();
        assert!(
            matches!(
                err,
                ConfigError::InvalidParameter {
                    field: "scene.mesh_segments",
                    ..
                }
            ),
            "unexpected error: {err}"
        );
        assert!(err.to_string().contains("65536"), "message was: {err}");
    }

    #[test]
    fn test_load_rejects_oversized_mesh() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "(scene: (mesh_segments: 65536))",
        )
        .unwrap();

        let err = Config::load_or_create(dir.path()).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidParameter {
                field: "scene.mesh_segments",
                ..
            }
        ));
    }

    #[test]
    fn test_reload_detects_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();

        let mut modified = config.clone();
        modified.params.atmosphere.thickness = 1.5;
        modified.save(dir.path()).unwrap();

        let result = config.reload(dir.path()).unwrap();
        assert_eq!(result.unwrap().params.atmosphere.thickness, 1.5);
    }

    #[test]
    fn test_reload_no_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();

        assert!(config.reload(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_reload_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::default().reload(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError(_)));
    }

    #[test]
    fn test_invalid_ron_produces_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "{{not valid}}").unwrap();
        let err = Config::load_or_create(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_ron_comments_accepted() {
        let ron_str = "// planet preset\n(\n  // nothing overridden\n)";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_default_config_dir_ends_with_orbis() {
        let dir = default_config_dir();
        assert!(dir == Path::new(".") || dir.ends_with("orbis"));
    }
}
