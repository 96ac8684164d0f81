//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use serde::de::DeserializeOwned;

use crate::error::{EngineError, EngineResult};
use crate::models::RateRecord;

use super::types::{AllocationsConfig, CpfLimits, EngineConfig, RateScheduleFile};

/// Loads and provides access to the engine configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// validates them before handing out an [`EngineConfig`].
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/cpf/
/// ├── limits.yaml       # Statutory wage ceilings and thresholds
/// ├── allocations.yaml  # Account allocation ratios by age band
/// └── rates/
///     └── 2024-01-01.yaml  # Rate records effective from this date
/// ```
///
/// # Example
///
/// ```no_run
/// use cpf_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/cpf").unwrap();
/// let limits = loader.config().limits();
/// println!("Ordinary wage ceiling: ${}", limits.ordinary_wage_ceiling);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/cpf")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The allocation ratios are out of range or sum to 1 or more
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let limits_path = path.join("limits.yaml");
        let limits = Self::load_yaml::<CpfLimits>(&limits_path)?;
        Self::validate_limits(&limits, &limits_path)?;

        let allocations_path = path.join("allocations.yaml");
        let allocations_config = Self::load_yaml::<AllocationsConfig>(&allocations_path)?;
        Self::validate_allocations(&allocations_config, &allocations_path)?;

        let rates_dir = path.join("rates");
        let rates = Self::load_rates(&rates_dir)?;

        let config = EngineConfig::new(limits, allocations_config.allocations, rates);
        Ok(Self { config })
    }

    /// Returns the loaded engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Loads and deserializes a single YAML file.
    fn load_yaml<T: DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let contents = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path.display().to_string(),
        })?;

        serde_yaml::from_str(&contents).map_err(|e| EngineError::ConfigParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Loads all rate schedule files from the rates directory.
    fn load_rates(rates_dir: &Path) -> EngineResult<Vec<RateRecord>> {
        let entries = fs::read_dir(rates_dir).map_err(|_| EngineError::ConfigNotFound {
            path: rates_dir.display().to_string(),
        })?;

        let mut records = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| EngineError::ConfigParseError {
                path: rates_dir.display().to_string(),
                message: e.to_string(),
            })?;
            let file_path = entry.path();

            let is_yaml = file_path
                .extension()
                .is_some_and(|ext| ext == "yaml" || ext == "yml");
            if !is_yaml {
                continue;
            }

            let schedule = Self::load_yaml::<RateScheduleFile>(&file_path)?;
            records.extend(schedule.into_records());
        }

        if records.is_empty() {
            return Err(EngineError::ConfigParseError {
                path: rates_dir.display().to_string(),
                message: "no rate schedule files found".to_string(),
            });
        }

        Ok(records)
    }

    fn validate_limits(limits: &CpfLimits, path: &Path) -> EngineResult<()> {
        if limits.ordinary_wage_ceiling <= Decimal::ZERO
            || limits.additional_wage_ceiling <= Decimal::ZERO
        {
            return Err(EngineError::ConfigParseError {
                path: path.display().to_string(),
                message: "wage ceilings must be positive".to_string(),
            });
        }
        if limits.minimum_wage_threshold < Decimal::ZERO {
            return Err(EngineError::ConfigParseError {
                path: path.display().to_string(),
                message: "minimum wage threshold must not be negative".to_string(),
            });
        }
        Ok(())
    }

    fn validate_allocations(config: &AllocationsConfig, path: &Path) -> EngineResult<()> {
        for (age_band, rates) in &config.allocations {
            let in_range = |r: Decimal| r >= Decimal::ZERO && r <= Decimal::ONE;
            if !in_range(rates.special) || !in_range(rates.medisave) {
                return Err(EngineError::ConfigParseError {
                    path: path.display().to_string(),
                    message: format!("allocation ratios for {} must be within [0, 1]", age_band),
                });
            }
            // The Ordinary Account share is the remainder, so the stored
            // ratios must leave room for it.
            if rates.special + rates.medisave >= Decimal::ONE {
                return Err(EngineError::ConfigParseError {
                    path: path.display().to_string(),
                    message: format!(
                        "allocation ratios for {} must sum to less than 1",
                        age_band
                    ),
                });
            }
        }
        Ok(())
    }
}
