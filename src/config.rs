//! Runtime configuration
//!
//! Read once at start-up from environment variables. Missing variables fall
//! back to defaults; present but unreadable ones are an error.

use thiserror::Error;

use crate::alerts::AlertGate;
use crate::health::BmiMode;

pub const BMI_MODE_VAR: &str = "WELLCHECK_BMI_MODE";
pub const GATE_LOW_BMI_VAR: &str = "WELLCHECK_ALERT_GATE_LOW_BMI";
pub const GATE_HIGH_BMI_VAR: &str = "WELLCHECK_ALERT_GATE_HIGH_BMI";

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{var}: unknown BMI mode '{value}' (expected as_entered or metric)")]
    InvalidBmiMode { var: &'static str, value: String },

    #[error("{var}: '{value}' is not a positive number")]
    InvalidThreshold { var: &'static str, value: String },

    #[error("Alert gate thresholds out of order: low {low} must be below high {high}")]
    GateOutOfOrder { low: String, high: String },
}

/// Service configuration
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Config {
    pub bmi_mode: BmiMode,
    pub alert_gate: AlertGate,
}

impl Config {
    /// Load from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load from any variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let bmi_mode = match lookup(BMI_MODE_VAR) {
            Some(value) => BmiMode::from_str(&value).ok_or(ConfigError::InvalidBmiMode {
                var: BMI_MODE_VAR,
                value,
            })?,
            None => defaults.bmi_mode,
        };

        let low_bmi = threshold(&lookup, GATE_LOW_BMI_VAR, defaults.alert_gate.low_bmi)?;
        let high_bmi = threshold(&lookup, GATE_HIGH_BMI_VAR, defaults.alert_gate.high_bmi)?;
        if low_bmi >= high_bmi {
            return Err(ConfigError::GateOutOfOrder {
                low: low_bmi.to_string(),
                high: high_bmi.to_string(),
            });
        }

        Ok(Self {
            bmi_mode,
            alert_gate: AlertGate::new(low_bmi, high_bmi),
        })
    }
}

fn threshold<F>(lookup: &F, var: &'static str, default: f64) -> Result<f64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        Some(value) => match value.trim().parse::<f64>() {
            Ok(n) if n.is_finite() && n > 0.0 => Ok(n),
            _ => Err(ConfigError::InvalidThreshold { var, value }),
        },
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| map.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.bmi_mode, BmiMode::AsEntered);
        assert_eq!(config.alert_gate.low_bmi, 16.0);
        assert_eq!(config.alert_gate.high_bmi, 35.0);
    }

    #[test]
    fn test_overrides() {
        let config = load(&[(BMI_MODE_VAR, "metric"), (GATE_HIGH_BMI_VAR, "40")]).unwrap();
        assert_eq!(config.bmi_mode, BmiMode::Metric);
        assert_eq!(config.alert_gate.high_bmi, 40.0);
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            load(&[(BMI_MODE_VAR, "imperial")]),
            Err(ConfigError::InvalidBmiMode { .. })
        ));
        assert!(matches!(
            load(&[(GATE_LOW_BMI_VAR, "low")]),
            Err(ConfigError::InvalidThreshold { .. })
        ));
        assert!(matches!(
            load(&[(GATE_LOW_BMI_VAR, "36")]),
            Err(ConfigError::GateOutOfOrder { .. })
        ));
    }
}
