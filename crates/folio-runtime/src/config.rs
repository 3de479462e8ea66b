use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Storage quota applied to the file store, roughly what browsers grant local storage.
pub const DEFAULT_QUOTA_BYTES: u64 = 5 * 1024 * 1024;

/// Upper bound for a single uploaded image.
pub const DEFAULT_MAX_IMAGE_BYTES: u64 = 2 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_quota")]
    pub quota_bytes: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            quota_bytes: DEFAULT_QUOTA_BYTES,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageConfig {
    #[serde(default = "default_max_image")]
    pub max_bytes: u64,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_IMAGE_BYTES,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Page opened when `folio open` gets no route.
    #[serde(default = "default_page")]
    pub default_page: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            default_page: default_page(),
        }
    }
}

fn default_quota() -> u64 {
    DEFAULT_QUOTA_BYTES
}

fn default_max_image() -> u64 {
    DEFAULT_MAX_IMAGE_BYTES
}

fn default_page() -> String {
    "home".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub images: ImageConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

impl Config {
    /// `config.toml` inside the data dir.
    pub fn default_path(data_dir: &Path) -> PathBuf {
        folio_core::config_path(data_dir)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
