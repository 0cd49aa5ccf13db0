//! # Hub Settings
//!
//! Presentation preferences shared by the front ends. Settings never
//! change a formula; they only affect how results are displayed and
//! which defaults a form starts with.
//!
//! Settings live in an optional TOML file:
//!
//! ```toml
//! currency_symbol = "$"
//! default_tolerance = "±5"
//! dark_mode = true
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::calculations::resistor::Tolerance;
use crate::errors::{CalcError, CalcResult};

/// File name the GUI looks for in the working directory
pub const DEFAULT_SETTINGS_FILE: &str = "elec_hub.toml";

/// Display settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HubSettings {
    /// Prefix for money values (bill estimator)
    pub currency_symbol: String,

    /// Tolerance band preselected in resistor forms
    pub default_tolerance: Tolerance,

    /// GUI theme preference
    pub dark_mode: bool,
}

impl Default for HubSettings {
    fn default() -> Self {
        HubSettings {
            currency_symbol: "₹".to_string(),
            default_tolerance: Tolerance::Five,
            dark_mode: false,
        }
    }
}

impl HubSettings {
    /// Parse settings from TOML text. Missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> CalcResult<Self> {
        toml::from_str(content).map_err(|e| CalcError::settings_error("<inline>", e.to_string()))
    }

    /// Load settings from a file. A missing file yields the defaults;
    /// an unreadable or malformed file is an error.
    pub fn load(path: &Path) -> CalcResult<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "settings file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| CalcError::settings_error(path.display().to_string(), e.to_string()))?;

        let settings: HubSettings = toml::from_str(&content)
            .map_err(|e| CalcError::settings_error(path.display().to_string(), e.to_string()))?;

        tracing::info!(path = %path.display(), "loaded settings");
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = HubSettings::default();
        assert_eq!(settings.currency_symbol, "₹");
        assert_eq!(settings.default_tolerance, Tolerance::Five);
        assert!(!settings.dark_mode);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let settings = HubSettings::from_toml_str("currency_symbol = \"$\"").unwrap();
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.default_tolerance, Tolerance::Five);
    }

    #[test]
    fn test_tolerance_label_in_toml() {
        let settings = HubSettings::from_toml_str("default_tolerance = \"±10\"").unwrap();
        assert_eq!(settings.default_tolerance, Tolerance::Ten);
    }

    #[test]
    fn test_malformed_toml() {
        let err = HubSettings::from_toml_str("dark_mode = \"maybe\"").unwrap_err();
        assert_eq!(err.error_code(), "SETTINGS_ERROR");
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let settings = HubSettings::load(Path::new("/nonexistent/elec_hub.toml")).unwrap();
        assert_eq!(settings, HubSettings::default());
    }

    #[test]
    fn test_toml_roundtrip() {
        let settings = HubSettings {
            currency_symbol: "€".to_string(),
            default_tolerance: Tolerance::One,
            dark_mode: true,
        };
        let text = toml::to_string_pretty(&settings).unwrap();
        assert_eq!(HubSettings::from_toml_str(&text).unwrap(), settings);
    }
}
