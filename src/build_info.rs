//! Build and runtime identity
//!
//! Joins the metadata embedded by build.rs with the configuration the service
//! runs under. The startup banner and the status tool both read it.

use serde::Serialize;

use crate::alerts::AlertGate;
use crate::config::Config;
use crate::health::BmiMode;

/// Package version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const RAW_BUILD_NUMBER: Option<&str> = option_env!("WELLCHECK_BUILD_NUMBER");
const RAW_BUILD_TIMESTAMP: Option<&str> = option_env!("WELLCHECK_BUILD_TIMESTAMP");

/// What is running: the build plus the settings that change results
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BuildInfo {
    pub version: &'static str,
    pub build_number: u64,
    /// ISO 8601, or "unknown" outside a cargo build
    pub build_timestamp: &'static str,
    pub bmi_mode: BmiMode,
    pub alert_gate: AlertGate,
}

impl BuildInfo {
    pub fn for_config(config: &Config) -> Self {
        Self {
            version: VERSION,
            build_number: read_build_number(RAW_BUILD_NUMBER),
            build_timestamp: RAW_BUILD_TIMESTAMP.unwrap_or("unknown"),
            bmi_mode: config.bmi_mode,
            alert_gate: config.alert_gate,
        }
    }

    /// Multi-line banner for stderr
    pub fn banner(&self) -> String {
        let rule = "=".repeat(47);
        format!(
            "{rule}\n  Wellcheck Health Check v{} (build {})\n  Compiled: {}\n  BMI mode: {}\n  Alert gate: BMI < {} or > {}\n{rule}",
            self.version,
            self.build_number,
            self.build_timestamp,
            self.bmi_mode.as_str(),
            self.alert_gate.low_bmi,
            self.alert_gate.high_bmi,
        )
    }
}

fn read_build_number(raw: Option<&str>) -> u64 {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_build_number() {
        assert_eq!(read_build_number(Some("42")), 42);
        assert_eq!(read_build_number(Some("4x2")), 0);
        assert_eq!(read_build_number(None), 0);
    }

    #[test]
    fn test_banner_shows_active_configuration() {
        let config = Config {
            bmi_mode: BmiMode::Metric,
            alert_gate: AlertGate::new(17.5, 40.0),
        };
        let info = BuildInfo::for_config(&config);
        assert_eq!(info.bmi_mode, BmiMode::Metric);

        let banner = info.banner();
        assert!(banner.contains("BMI mode: metric"));
        assert!(banner.contains("Alert gate: BMI < 17.5 or > 40"));
        assert!(banner.contains(VERSION));
    }

    #[test]
    fn test_default_banner_shows_default_gate() {
        let banner = BuildInfo::for_config(&Config::default()).banner();
        assert!(banner.contains("BMI mode: as_entered"));
        assert!(banner.contains("or > 35"));
    }
}
