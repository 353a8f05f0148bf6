//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the payroll
//! configuration from a YAML file and validating it.

use chrono::NaiveTime;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{PayrollConfig, PenaltyTiers};

/// Loads and provides access to the payroll configuration.
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/payroll.yaml").unwrap();
/// println!("Default rate: {}/hour", loader.config().default_hourly_rate);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayrollConfig,
    shift_start: NaiveTime,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration file (e.g., "./config/payroll.yaml")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML (`ConfigParseError`)
    /// - The shift start is not a real time of day, or a penalty rate is
    ///   negative (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config: PayrollConfig =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        Self::from_config(config).map_err(|e| match e {
            EngineError::ConfigParseError { message, .. } => EngineError::ConfigParseError {
                path: path_str,
                message,
            },
            other => other,
        })
    }

    /// Builds a loader from an already-constructed configuration.
    ///
    /// Used by callers that want the built-in defaults without touching the
    /// filesystem, and by tests.
    pub fn from_config(config: PayrollConfig) -> EngineResult<Self> {
        let shift_start =
            NaiveTime::from_hms_opt(config.shift.start_hour, config.shift.start_minute, 0)
                .ok_or_else(|| EngineError::ConfigParseError {
                    path: String::new(),
                    message: format!(
                        "shift start {:02}:{:02} is not a valid time of day",
                        config.shift.start_hour, config.shift.start_minute
                    ),
                })?;

        let PenaltyTiers {
            tier1_per_minute,
            tier2_per_minute,
            ..
        } = config.penalty;
        if tier1_per_minute.is_sign_negative() || tier2_per_minute.is_sign_negative() {
            return Err(EngineError::ConfigParseError {
                path: String::new(),
                message: "penalty rates must be non-negative".to_string(),
            });
        }

        Ok(Self {
            config,
            shift_start,
        })
    }

    /// Returns the underlying payroll configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Returns the configured shift start as a time of day.
    pub fn shift_start(&self) -> NaiveTime {
        self.shift_start
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        // The built-in defaults always validate.
        Self::from_config(PayrollConfig::default()).expect("default config is valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ShiftConfig;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_load_shipped_configuration() {
        let result = ConfigLoader::load("./config/payroll.yaml");
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.shift_start(), NaiveTime::from_hms_opt(14, 0, 0).unwrap());
        assert_eq!(loader.config().penalty.threshold_minutes, 30);
        assert_eq!(loader.config().default_hourly_rate, dec("50"));
    }

    #[test]
    fn test_load_missing_file_returns_error() {
        let result = ConfigLoader::load("/nonexistent/payroll.yaml");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("payroll.yaml"));
            }
            other => panic!("Expected ConfigNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_default_loader_uses_builtin_policy() {
        let loader = ConfigLoader::default();

        assert_eq!(loader.shift_start(), NaiveTime::from_hms_opt(14, 0, 0).unwrap());
        assert_eq!(loader.config().penalty.tier1_per_minute, dec("5"));
        assert_eq!(loader.config().penalty.tier2_per_minute, dec("10"));
    }

    #[test]
    fn test_invalid_shift_start_rejected() {
        let config = PayrollConfig {
            shift: ShiftConfig {
                start_hour: 25,
                start_minute: 0,
            },
            ..PayrollConfig::default()
        };

        let result = ConfigLoader::from_config(config);
        match result {
            Err(EngineError::ConfigParseError { message, .. }) => {
                assert!(message.contains("25:00"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_penalty_rate_rejected() {
        let mut config = PayrollConfig::default();
        config.penalty.tier1_per_minute = dec("-1");

        let result = ConfigLoader::from_config(config);
        match result {
            Err(EngineError::ConfigParseError { message, .. }) => {
                assert!(message.contains("non-negative"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }
}
