//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading subsidy
//! schedules from YAML files.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::provider::ScheduleProvider;
use super::types::{SchemeMetadata, SubsidyConfig, SubsidySchedule};

/// Loads and provides access to subsidy schedules.
///
/// The `ConfigLoader` reads YAML configuration files from a directory,
/// validates every schedule, and serves them by year.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/
/// ├── scheme.yaml          # Scheme metadata
/// └── schedules/
///     ├── 2024.yaml        # One subsidy schedule per year
///     └── 2025.yaml
/// ```
///
/// # Example
///
/// ```no_run
/// use subsidy_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config").unwrap();
/// let schedule = loader.get_schedule(2025).unwrap();
/// println!("Brackets in 2025: {}", schedule.income_brackets.len());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: SubsidyConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Two schedule files declare the same year
    /// - A schedule fails validation
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let scheme_path = path.join("scheme.yaml");
        let metadata = Self::load_yaml::<SchemeMetadata>(&scheme_path)?;

        let schedules_dir = path.join("schedules");
        let schedules = Self::load_schedules(&schedules_dir)?;

        debug!(
            scheme = %metadata.code,
            years = ?schedules.keys().collect::<Vec<_>>(),
            "Loaded subsidy configuration"
        );

        Ok(Self {
            config: SubsidyConfig::new(metadata, schedules),
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

    /// Loads and validates all schedule files from the schedules directory.
    fn load_schedules(schedules_dir: &Path) -> EngineResult<BTreeMap<i32, SubsidySchedule>> {
        let dir_str = schedules_dir.display().to_string();

        let entries = fs::read_dir(schedules_dir).map_err(|_| EngineError::ConfigNotFound {
            path: dir_str.clone(),
        })?;

        let mut schedules = BTreeMap::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: dir_str.clone(),
            })?;

            let path = entry.path();
            if !path.extension().is_some_and(|ext| ext == "yaml") {
                continue;
            }

            let schedule = Self::load_yaml::<SubsidySchedule>(&path)?;
            schedule.validate()?;

            let year = schedule.year;
            if schedules.insert(year, schedule).is_some() {
                return Err(EngineError::ConfigParseError {
                    path: path.display().to_string(),
                    message: format!("duplicate schedule for year {}", year),
                });
            }
        }

        if schedules.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no schedule files found)", dir_str),
            });
        }

        Ok(schedules)
    }

    /// Returns the underlying subsidy configuration.
    pub fn config(&self) -> &SubsidyConfig {
        &self.config
    }

    /// Returns the scheme metadata.
    pub fn scheme(&self) -> &SchemeMetadata {
        self.config.scheme()
    }

    /// Returns the years with a loaded schedule, oldest first.
    pub fn years(&self) -> Vec<i32> {
        self.config.schedules().keys().copied().collect()
    }

    /// Gets the schedule for a year.
    ///
    /// # Returns
    ///
    /// Returns the schedule if found, or `ScheduleNotFound` error.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use subsidy_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config")?;
    /// let schedule = loader.get_schedule(2025)?;
    /// # Ok::<(), subsidy_engine::error::EngineError>(())
    /// ```
    pub fn get_schedule(&self, year: i32) -> EngineResult<&SubsidySchedule> {
        self.lookup_schedule(year)
            .ok_or(EngineError::ScheduleNotFound { year })
    }
}

impl ScheduleProvider for ConfigLoader {
    fn lookup_schedule(&self, year: i32) -> Option<&SubsidySchedule> {
        self.config.schedules().get(&year)
    }
}
