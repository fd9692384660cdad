//! Path management for the catalog service

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Filesystem locations used by the service
#[derive(Debug, Clone)]
pub struct Paths {
    /// Config directory path
    config_dir: PathBuf,
}

impl Paths {
    /// Resolve and create the config directory
    ///
    /// Uses `config_override` when given, otherwise a `hahu-lyrics` directory
    /// next to the executable, otherwise the platform config directory.
    pub fn new(config_override: Option<PathBuf>) -> Result<Self> {
        let config_dir = match config_override {
            Some(path) => path,
            None => default_config_dir(),
        };

        std::fs::create_dir_all(&config_dir).with_context(|| {
            format!("Failed to create config directory {}", config_dir.display())
        })?;

        Ok(Self { config_dir })
    }

    // ========== Getters ==========

    /// Get the config directory
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Get the settings file path
    pub fn settings_path(&self) -> PathBuf {
        self.config_dir.join("settings.json")
    }

    /// Get the default catalog database path
    pub fn catalog_db_path(&self) -> PathBuf {
        self.config_dir.join("catalog.db")
    }
}

fn default_config_dir() -> PathBuf {
    if let Ok(exe) = std::env::current_exe() {
        if let Some(parent) = exe.parent() {
            return parent.join("hahu-lyrics");
        }
    }

    directories::ProjectDirs::from("", "", "hahu-lyrics")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("hahu-lyrics"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_paths_creation() {
        let temp_dir = TempDir::new().unwrap();
        let config = temp_dir.path().join("nested").join("config");

        let paths = Paths::new(Some(config.clone())).unwrap();

        assert!(paths.config_dir().exists());
        assert_eq!(paths.settings_path(), config.join("settings.json"));
        assert_eq!(paths.catalog_db_path(), config.join("catalog.db"));
    }
}
