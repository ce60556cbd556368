//! Configuration types for the PetCam viewer

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::bucket::DisplayZone;

/// Environment variable that overrides the configured API base URL
pub const API_BASE_ENV: &str = "PETCAM_API_BASE";

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default = "default_per_page")]
    pub per_page: u32,
    #[serde(default)]
    pub page: Option<u32>,
    /// Restrict the list to a single day, `YYYY-MM-DD`
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub display_zone: DisplayZone,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            per_page: default_per_page(),
            page: None,
            date: None,
            display_zone: DisplayZone::default(),
        }
    }
}

/// Values that take precedence over the config file, in increasing priority:
/// the `PETCAM_API_BASE` environment variable, then command-line flags
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub env_api_base: Option<String>,
    pub api_base: Option<String>,
    pub per_page: Option<u32>,
    pub date: Option<String>,
    pub utc: bool,
}

impl Config {
    /// Layer environment and command-line overrides on top of this config and
    /// validate the result
    pub fn apply_overrides(mut self, overrides: ConfigOverrides) -> crate::Result<Self> {
        self.override_api_base(overrides.env_api_base);
        self.override_api_base(overrides.api_base);
        if let Some(per_page) = overrides.per_page {
            self.per_page = per_page;
        }
        if overrides.date.is_some() {
            self.date = overrides.date;
        }
        if overrides.utc {
            self.display_zone = DisplayZone::Utc;
        }
        self.resolve()?;
        Ok(self)
    }

    /// Replace the API base with a non-empty override (typically `PETCAM_API_BASE`)
    pub fn override_api_base(&mut self, value: Option<String>) {
        if let Some(value) = value {
            if !value.trim().is_empty() {
                tracing::debug!("API base overridden to {}", value);
                self.api_base = value.trim().to_string();
            }
        }
    }

    /// Normalize and validate the configuration.
    ///
    /// Strips trailing slashes from the API base and rejects values the
    /// backend would misinterpret.
    pub fn resolve(&mut self) -> crate::Result<()> {
        let trimmed = self.api_base.trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(crate::ViewerError::Config(
                "api_base must not be empty".to_string(),
            ));
        }
        self.api_base = trimmed.to_string();

        if self.per_page == 0 {
            return Err(crate::ViewerError::Config(
                "per_page must be at least 1".to_string(),
            ));
        }

        if self.page == Some(0) {
            return Err(crate::ViewerError::Config(
                "page numbers start at 1".to_string(),
            ));
        }

        if let Some(date) = &self.date {
            NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|e| {
                crate::ViewerError::Config(format!(
                    "invalid date {:?}, use YYYY-MM-DD: {}",
                    date, e
                ))
            })?;
        }

        Ok(())
    }
}

fn default_api_base() -> String {
    "http://localhost:5000/api".to_string()
}

fn default_per_page() -> u32 {
    50
}

/// Load configuration from a JSON file
pub fn load_config(path: &Path) -> crate::Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        crate::ViewerError::Config(format!("Failed to read config file {:?}: {}", path, e))
    })?;
    let config: Config = serde_json::from_str(&content)?;
    Ok(config)
}
