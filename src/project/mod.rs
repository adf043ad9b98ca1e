//! Xcode project layout.
//!
//! A [`Project`] is an explicit root directory plus its configuration. All
//! paths the pipelines touch are resolved through it.

mod config;
mod fonts;

pub use config::{ProjectConfig, CONFIG_FILENAME};
pub use fonts::{register_font, RegisteredFont, APP_FONTS_KEY};

use std::path::{Path, PathBuf};

use crate::error::Result;

#[derive(Debug, Clone)]
pub struct Project {
    root: PathBuf,
    config: ProjectConfig,
}

impl Project {
    /// Project at `root` with the default layout.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_config(root, ProjectConfig::default())
    }

    pub fn with_config(root: impl Into<PathBuf>, config: ProjectConfig) -> Self {
        Self {
            root: root.into(),
            config,
        }
    }

    /// Open the project at `root`, reading leila.yaml when present.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let config_path = root.join(CONFIG_FILENAME);

        let config = if config_path.is_file() {
            ProjectConfig::load(&config_path)?
        } else {
            ProjectConfig::default()
        };

        Ok(Self { root, config })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &ProjectConfig {
        &self.config
    }

    pub fn asset_catalog(&self) -> PathBuf {
        self.root.join(&self.config.asset_catalog)
    }

    pub fn info_plist(&self) -> PathBuf {
        self.root.join(&self.config.info_plist)
    }

    pub fn fonts_dir(&self) -> PathBuf {
        self.root.join(&self.config.fonts_dir)
    }
}
