use crate::error::GardenError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub garden: GardenSettings,
    #[serde(default)]
    pub log: LogSettings,
}

#[derive(Debug, Default, Deserialize)]
pub struct GardenSettings {
    pub tick: Option<f32>,          // Seconds per animation tick
    pub side_margin: Option<i32>,   // Columns between screen edge and box wall
    pub bottom_margin: Option<i32>, // Rows between screen bottom and box floor
}

#[derive(Debug, Default, Deserialize)]
pub struct LogSettings {
    pub file: Option<PathBuf>,
    pub level: Option<String>, // tracing filter directive, e.g. "debug"
}

impl Settings {
    pub fn load() -> Result<Self, GardenError> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self, GardenError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| GardenError::Settings {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::parse(&content).map_err(|reason| GardenError::Settings {
            path: path.to_path_buf(),
            reason,
        })
    }

    fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("flowerbox")
            .join("config.toml")
    }
}
