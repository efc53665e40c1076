use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Window and picker settings, read from an optional JSON file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window_title: String,
    pub width: u32,
    pub height: u32,
    /// Height of the toolbar strip above the page, in logical pixels
    pub toolbar_height: u32,
    /// Starting directory for the site picker; the platform downloads
    /// folder when unset
    pub downloads_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            window_title: "Offline Browser".to_string(),
            width: 1200,
            height: 800,
            toolbar_height: 44,
            downloads_dir: None,
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.to_path_buf(), e))?;
        serde_json::from_str(&content)
            .map_err(|e| ConfigError::ParseError(path.to_path_buf(), e))
    }

    /// Toolbar height as GTK wants it, saturating instead of wrapping.
    pub fn toolbar_pixels(&self) -> i32 {
        i32::try_from(self.toolbar_height).unwrap_or(i32::MAX)
    }

    pub fn downloads_dir(&self) -> Option<PathBuf> {
        self.downloads_dir.clone().or_else(dirs::download_dir)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    ReadError(PathBuf, std::io::Error),
    #[error("Failed to parse config file {0}: {1}")]
    ParseError(PathBuf, serde_json::Error),
}
