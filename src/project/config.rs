//! Project configuration (leila.yaml).
//!
//! Every field is optional; a project without the file uses the standard
//! Xcode layout.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{LeilaError, Result};

/// Filename of the optional project configuration.
pub const CONFIG_FILENAME: &str = "leila.yaml";

/// Project configuration loaded from leila.yaml.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    /// Asset catalog directory, relative to the project root.
    pub asset_catalog: PathBuf,

    /// Property list that registers fonts, relative to the project root.
    pub info_plist: PathBuf,

    /// Directory fonts are copied into, relative to the project root.
    pub fonts_dir: PathBuf,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            asset_catalog: PathBuf::from("Assets.xcassets"),
            info_plist: PathBuf::from("Info.plist"),
            fonts_dir: PathBuf::from("Fonts"),
        }
    }
}

impl ProjectConfig {
    /// Load configuration from a leila.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| LeilaError::Config {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
            help: None,
        })?;

        Self::parse(&content).map_err(|message| LeilaError::Config {
            path: path.to_path_buf(),
            message,
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })
    }

    /// Parse configuration from a YAML string.
    pub fn parse(content: &str) -> std::result::Result<Self, String> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| e.to_string())
    }
}
