//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading statutory
//! rate configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::StatutoryRates;

/// Loads and provides access to statutory rate configuration.
///
/// The `ConfigLoader` reads a YAML configuration file and exposes the
/// resulting [`StatutoryRates`]. A file only needs to list the rates it
/// changes; unlisted rates keep their statutory defaults.
///
/// # File format
///
/// ```yaml
/// pf_rate: 0.12
/// pf_cap: 1800
/// professional_tax_amount: 200
/// professional_tax_threshold: 15000
/// tds_rate: 0.10
/// tds_threshold: 40000
/// standard_hours_per_day: 8
/// words_format: indian
/// ```
///
/// # Example
///
/// ```no_run
/// use payslip_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/statutory.yaml").unwrap();
/// println!("PF cap: {}", loader.rates().pf_cap);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    rates: StatutoryRates,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration file (e.g., "./config/statutory.yaml")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML or an invalid rate value
    ///   (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let rates = Self::parse(&content, &path_str)?;
        Ok(Self { rates })
    }

    /// Parses statutory rates from a YAML string.
    ///
    /// The `source` is only used to label parse errors.
    pub fn parse(content: &str, source: &str) -> EngineResult<StatutoryRates> {
        serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
            path: source.to_string(),
            message: e.to_string(),
        })
    }

    /// Returns the loaded statutory rates.
    pub fn rates(&self) -> &StatutoryRates {
        &self.rates
    }
}
