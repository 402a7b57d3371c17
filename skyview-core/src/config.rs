use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    dashboard::DashboardLimits,
    daily::DEFAULT_DAILY_LIMIT,
    hourly::DEFAULT_HOURLY_LIMIT,
    model::Location,
};

/// Data endpoint URLs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub forecast_url: String,
    pub air_quality_url: String,
    pub geocoding_url: String,
    /// Coordinates to place name; used for `--lat/--lon` lookups.
    pub reverse_geocoding_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            forecast_url: "https://api.open-meteo.com/v1/forecast".to_string(),
            air_quality_url: "https://air-quality-api.open-meteo.com/v1/air-quality".to_string(),
            geocoding_url: "https://geocoding-api.open-meteo.com/v1/search".to_string(),
            reverse_geocoding_url: "https://api.bigdatacloud.net/data/reverse-geocode-client"
                .to_string(),
        }
    }
}

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// timeout_secs = 30
///
/// [default_location]
/// name = "Berlin"
/// country = "Germany"
/// latitude = 52.52
/// longitude = 13.41
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP timeout for each provider request.
    pub timeout_secs: u64,
    /// Hourly samples shown from "now" onward.
    pub hourly_hours: usize,
    /// Forecast days shown, today first.
    pub daily_days: usize,
    /// Maximum city-search matches.
    pub search_limit: usize,
    /// Location used when none is given on the command line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_location: Option<Location>,
    pub endpoints: Endpoints,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            hourly_hours: DEFAULT_HOURLY_LIMIT,
            daily_days: DEFAULT_DAILY_LIMIT,
            search_limit: 10,
            default_location: None,
            endpoints: Endpoints::default(),
        }
    }
}

impl Config {
    /// Load config from disk, or return defaults if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, use defaults.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "skyview", "skyview")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn set_default_location(&mut self, location: Location) {
        self.default_location = Some(location);
    }

    /// The configured default location, or the built-in fallback.
    pub fn location_or_fallback(&self) -> Location {
        self.default_location
            .clone()
            .unwrap_or_else(Location::fallback)
    }

    pub fn limits(&self) -> DashboardLimits {
        DashboardLimits {
            hourly: self.hourly_hours,
            daily: self.daily_days,
        }
    }
}
