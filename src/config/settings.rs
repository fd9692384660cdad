//! Service settings
//!
//! Stored in settings.json inside the config directory. Every field has a
//! default, so a partial or missing file is fine.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use super::Paths;
use crate::core::routes::DEFAULT_SLUG_PAGE_SIZE;
use crate::db::StoreOptions;

/// Settings structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Catalog database file; defaults to catalog.db in the config directory
    #[serde(default)]
    pub database_path: Option<PathBuf>,

    /// Connection pool size
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Seconds to wait for a pooled connection
    #[serde(default = "default_acquire_timeout_secs")]
    pub acquire_timeout_secs: u64,

    /// Seconds a single HTTP request may spend on store reads
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Create the catalog tables if they are missing
    #[serde(default)]
    pub create_schema: bool,

    /// Slugs fetched per page when enumerating routes
    #[serde(default = "default_slug_page_size")]
    pub slug_page_size: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database_path: None,
            max_connections: default_max_connections(),
            acquire_timeout_secs: default_acquire_timeout_secs(),
            request_timeout_secs: default_request_timeout_secs(),
            create_schema: false,
            slug_page_size: default_slug_page_size(),
        }
    }
}

impl Settings {
    /// Load settings from file, writing the defaults when none exist
    pub fn load(paths: &Paths) -> Result<Self> {
        let settings_path = paths.settings_path();

        if settings_path.exists() {
            let content =
                std::fs::read_to_string(&settings_path).context("Failed to read settings file")?;
            let settings: Settings =
                serde_json::from_str(&content).context("Failed to parse settings file")?;
            Ok(settings)
        } else {
            let settings = Self::default();
            settings.save(paths)?;
            Ok(settings)
        }
    }

    /// Save settings to file
    pub fn save(&self, paths: &Paths) -> Result<()> {
        let content = serde_json::to_string_pretty(self).context("Failed to serialize settings")?;
        std::fs::write(paths.settings_path(), content).context("Failed to write settings file")?;

        Ok(())
    }

    /// Store connection options, resolving the database path against `paths`
    pub fn store_options(&self, paths: &Paths) -> StoreOptions {
        StoreOptions {
            database_path: self
                .database_path
                .clone()
                .unwrap_or_else(|| paths.catalog_db_path()),
            max_connections: self.max_connections,
            acquire_timeout: Duration::from_secs(self.acquire_timeout_secs),
            create_schema: self.create_schema,
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

// Default value functions for serde

fn default_max_connections() -> u32 {
    5
}

fn default_acquire_timeout_secs() -> u64 {
    30
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_slug_page_size() -> u32 {
    DEFAULT_SLUG_PAGE_SIZE
}
