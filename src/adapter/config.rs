//! Configuration
//!
//! JSON設定ファイルの読み込み

use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default config file location
pub const DEFAULT_CONFIG_PATH: &str = "./.user-registry/config.json";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// JSON user store path. In-memory store when absent.
    #[serde(default)]
    pub store_path: Option<String>,
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path))?;
        Ok(config)
    }

    /// Load the config file, falling back to defaults when it does not exist
    pub fn load_or_default(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            debug!("Config file {} not found, using defaults", path);
            return Ok(Self::default());
        }

        Self::load(path)
    }

    /// Override the store path (e.g. from a command-line flag)
    pub fn with_store_path(mut self, store_path: Option<String>) -> Self {
        if store_path.is_some() {
            self.store_path = store_path;
        }
        self
    }
}
