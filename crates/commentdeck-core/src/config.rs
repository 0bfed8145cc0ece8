//! Configuration and data directory management.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Base URL of the live comment API.
pub const DEFAULT_API_BASE_URL: &str = "https://fotf.my.site.com/aio/services/apexrest/v1";

/// Paths to CommentDeck data files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataPaths {
    /// Root data directory (e.g., `data/`).
    pub root: PathBuf,
    /// Captured credential record (`data/credentials.json`).
    pub credentials_file: PathBuf,
}

impl DataPaths {
    /// Create data paths from a root directory. Creates the directory if needed.
    pub fn new(root: impl AsRef<Path>) -> std::io::Result<Self> {
        let root = root.as_ref().to_path_buf();
        let paths = Self {
            credentials_file: root.join("credentials.json"),
            root,
        };
        std::fs::create_dir_all(&paths.root)?;
        Ok(paths)
    }
}

/// Top-level CommentDeck configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentDeckConfig {
    /// Local relay server port.
    pub port: u16,
    /// Data directory paths.
    pub data_paths: DataPaths,
    /// Comment API base URL.
    pub api_base_url: String,
}

impl CommentDeckConfig {
    /// Create configuration from environment and defaults.
    pub fn from_env(data_dir: impl AsRef<Path>) -> std::io::Result<Self> {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3004);

        let api_base_url = std::env::var("COMMENTDECK_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());

        let data_paths = DataPaths::new(data_dir)?;

        Ok(Self {
            port,
            data_paths,
            api_base_url,
        })
    }
}
