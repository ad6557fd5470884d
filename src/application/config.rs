use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::{Algorithm, ScaleUnit};

/// Settings for a simulation session, read from a JSON file.
/// Missing fields take their default values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub updates_per_second: f32,
    /// World units per screen unit
    pub scale: u32,
    /// Cells panned per arrow press while playing
    pub play_pan_step: i64,
    /// Pixels per screen cell
    pub cell_size: f32,
    pub patterns_dir: PathBuf,
    pub algorithm: Algorithm,
    pub soup_size: i64,
    pub soup_density: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            updates_per_second: 10.0,
            scale: 1,
            play_pan_step: 2,
            cell_size: 10.0,
            patterns_dir: PathBuf::from("patterns"),
            algorithm: Algorithm::default(),
            soup_size: 16,
            soup_density: 0.3,
        }
    }
}

/// Errors that can occur while loading a session config
#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Json(serde_json::Error),
    InvalidScale(u32),
    InvalidSpeed(f32),
    InvalidDensity(f64),
    InvalidCellSize(f32),
}

impl From<io::Error> for ConfigError {
    fn from(e: io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json(e)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Json(e) => write!(f, "Config syntax error: {}", e),
            ConfigError::InvalidScale(s) => write!(f, "Scale must be at least 1, got {}", s),
            ConfigError::InvalidSpeed(s) => {
                write!(f, "Updates per second must be positive, got {}", s)
            }
            ConfigError::InvalidDensity(d) => {
                write!(f, "Soup density must be within 0..=1, got {}", d)
            }
            ConfigError::InvalidCellSize(s) => {
                write!(f, "Cell size must be at least 1 pixel, got {}", s)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl SessionConfig {
    /// Parse and validate a JSON config
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: SessionConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Load `path`, or fall back to defaults if it does not exist
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("no config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            other => other,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scale == 0 {
            return Err(ConfigError::InvalidScale(self.scale));
        }
        if !(self.updates_per_second > 0.0 && self.updates_per_second.is_finite()) {
            return Err(ConfigError::InvalidSpeed(self.updates_per_second));
        }
        if !(0.0..=1.0).contains(&self.soup_density) {
            return Err(ConfigError::InvalidDensity(self.soup_density));
        }
        if !(self.cell_size >= 1.0 && self.cell_size.is_finite()) {
            return Err(ConfigError::InvalidCellSize(self.cell_size));
        }
        Ok(())
    }

    /// The configured scale; a zero in an unvalidated config falls back to 1
    pub fn scale_unit(&self) -> ScaleUnit {
        ScaleUnit::new(self.scale).unwrap_or_default()
    }
}
