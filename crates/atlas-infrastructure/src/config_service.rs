//! Configuration service implementation.
//!
//! Loads the root configuration from `~/.config/atlas/config.toml` (or an
//! explicit path). A missing file is not an error: defaults apply.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::RwLock;

use atlas_core::config::RootConfig;
use atlas_core::error::{AtlasError, Result};

use crate::paths::AtlasPaths;

/// Configuration service that loads and caches the root configuration.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
    /// Cached configuration loaded from file.
    config: Arc<RwLock<Option<RootConfig>>>,
}

impl ConfigService {
    /// Creates a service reading the default config file location.
    pub fn new() -> Result<Self> {
        let path = AtlasPaths::config_file().map_err(|e| AtlasError::config(e.to_string()))?;
        Ok(Self::with_path(path))
    }

    /// Creates a service reading `path` (for `--config` and tests).
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            config: Arc::new(RwLock::new(None)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Gets the root configuration, loading from file if not cached.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub async fn get_config(&self) -> Result<RootConfig> {
        if let Some(cached) = self.config.read().await.as_ref() {
            return Ok(cached.clone());
        }

        let loaded = Self::load_config(&self.path).await?;

        let mut write_lock = self.config.write().await;
        *write_lock = Some(loaded.clone());
        Ok(loaded)
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub async fn invalidate_cache(&self) {
        let mut write_lock = self.config.write().await;
        *write_lock = None;
    }

    async fn load_config(path: &Path) -> Result<RootConfig> {
        if !tokio::fs::try_exists(path).await? {
            tracing::debug!(path = %path.display(), "Config file not found, using defaults");
            return Ok(RootConfig::default());
        }

        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            AtlasError::io(format!("Failed to read config '{}': {}", path.display(), e))
        })?;
        let config: RootConfig = toml::from_str(&content)?;

        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }
}
