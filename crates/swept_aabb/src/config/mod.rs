//! Stage configuration
//!
//! Describes the static geometry a simulation steps an actor through:
//! solid rectangles, the actor's starting rectangle, and its per-step
//! displacement. Files may be TOML or RON, chosen by extension. The
//! collision core itself takes plain values and never touches files.

use serde::{Deserialize, Serialize};

use crate::foundation::math::Vec2;
use crate::physics::Rect;

/// Configuration trait for loadable/savable settings
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        let config = if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        log::debug!("loaded config from {path}");
        Ok(config)
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, Default::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// A stage: static solids plus the actor that moves through them
///
/// This is consumer-side data. One step of the actor means sweeping its
/// previous and displaced rectangles against each solid with
/// [`crate::physics::sweep_rect`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageConfig {
    /// Static solid rectangles
    pub solids: Vec<Rect>,

    /// Actor starting rectangle
    pub actor: Rect,

    /// Actor displacement per step
    pub velocity: Vec2,

    /// Number of steps to simulate
    pub steps: u32,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            solids: vec![
                Rect::new(0.0, 0.0, 10.0, 40.0),
                Rect::new(10.0, 30.0, 60.0, 10.0),
            ],
            actor: Rect::new(50.0, 2.0, 5.0, 5.0),
            velocity: Vec2::new(-4.0, 3.0),
            steps: 12,
        }
    }
}

impl Config for StageConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> String {
        std::env::temp_dir()
            .join(name)
            .to_string_lossy()
            .into_owned()
    }

    #[test]
    fn test_stage_round_trips_through_toml() {
        let path = temp_path("swept_aabb_stage_test.toml");
        let stage = StageConfig::default();

        stage.save_to_file(&path).unwrap();
        let loaded = StageConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded, stage);
    }

    #[test]
    fn test_stage_round_trips_through_ron() {
        let path = temp_path("swept_aabb_stage_test.ron");
        let stage = StageConfig {
            solids: vec![Rect::new(0.0, 0.0, 10.0, 10.0)],
            actor: Rect::new(20.0, 0.0, 5.0, 5.0),
            velocity: Vec2::new(-4.0, 0.0),
            steps: 5,
        };

        stage.save_to_file(&path).unwrap();
        let loaded = StageConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded, stage);
    }

    #[test]
    fn test_unknown_extension_is_rejected() {
        let stage = StageConfig::default();

        let err = stage
            .save_to_file(&temp_path("swept_aabb_stage_test.yaml"))
            .unwrap_err();

        assert!(matches!(err, ConfigError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_malformed_file_is_a_parse_error() {
        let path = temp_path("swept_aabb_stage_broken.toml");
        std::fs::write(&path, "solids = \"not a table\"").unwrap();

        let err = StageConfig::load_from_file(&path).unwrap_err();
        std::fs::remove_file(&path).ok();

        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
