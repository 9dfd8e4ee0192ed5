//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the office,
//! server, leave policy and seed holiday configuration from YAML files.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{Holiday, HolidayCalendar};

use super::types::{AppConfig, AppConfigFile, HolidayFile, LeavePolicy, OfficeConfig};

/// Loads and provides access to application configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── app.yaml           # Office, server and leave policy
/// └── holidays/
///     └── 2026.yaml      # Seed holidays, one file per year
/// ```
///
/// # Example
///
/// ```no_run
/// use leave_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Office: {}", loader.office().name);
/// println!("Seed holidays: {}", loader.holidays().len());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AppConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/default")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `app.yaml` or the `holidays/` directory is missing
    /// - Any file contains invalid YAML
    /// - Two holiday files list the same date
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let app_path = path.join("app.yaml");
        let file = Self::load_yaml::<AppConfigFile>(&app_path)?;

        let holidays_dir = path.join("holidays");
        let holidays = Self::load_holidays(&holidays_dir)?;

        debug!(
            config_dir = %path.display(),
            holidays = holidays.len(),
            "Configuration loaded"
        );

        Ok(Self {
            config: AppConfig::new(file, holidays),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads every holiday file in the holidays directory.
    ///
    /// An empty directory is valid and yields no holidays.
    fn load_holidays(holidays_dir: &Path) -> EngineResult<Vec<Holiday>> {
        let dir_str = holidays_dir.display().to_string();

        if !holidays_dir.is_dir() {
            return Err(EngineError::ConfigNotFound { path: dir_str });
        }

        let entries = fs::read_dir(holidays_dir).map_err(|_| EngineError::ConfigNotFound {
            path: dir_str.clone(),
        })?;

        let mut by_date: BTreeMap<_, Holiday> = BTreeMap::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: dir_str.clone(),
            })?;

            let path = entry.path();
            if !path.extension().is_some_and(|ext| ext == "yaml") {
                continue;
            }

            let file = Self::load_yaml::<HolidayFile>(&path)?;
            for holiday in file.holidays {
                if let Some(existing) = by_date.get(&holiday.date) {
                    return Err(EngineError::ConfigParseError {
                        path: path.display().to_string(),
                        message: format!(
                            "{} is already listed as '{}'",
                            holiday.date, existing.name
                        ),
                    });
                }
                by_date.insert(holiday.date, holiday);
            }
        }

        Ok(by_date.into_values().collect())
    }

    /// Returns the underlying application configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Returns the issuing office metadata.
    pub fn office(&self) -> &OfficeConfig {
        self.config.office()
    }

    /// Returns the leave policy.
    pub fn leave_policy(&self) -> &LeavePolicy {
        self.config.leave_policy()
    }

    /// Returns the address the HTTP server binds to.
    pub fn bind_address(&self) -> &str {
        &self.config.server().bind_address
    }

    /// Returns the seed holidays in date order.
    pub fn holidays(&self) -> &[Holiday] {
        self.config.holidays()
    }

    /// Builds a holiday calendar from the seed holidays.
    pub fn holiday_calendar(&self) -> HolidayCalendar {
        HolidayCalendar::from_holidays(self.holidays())
    }
}
