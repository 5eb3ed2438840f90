//! User settings for Pocketbook
//!
//! Manages limit-alert thresholds, credential hashing cost and display
//! preferences. Every field has a default so older or partial config files
//! keep loading.

use serde::{Deserialize, Serialize};

use super::paths::PocketbookPaths;
use crate::crypto::CredentialParams;
use crate::error::LedgerError;

/// Percent-of-limit thresholds for budget alerts
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlertThresholds {
    /// Spending at or above this share of the limit raises an "approaching" alert
    pub approaching_percent: f64,
    /// Spending at or above this share of the limit raises an "exceeded" alert
    pub exceeded_percent: f64,
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self {
            approaching_percent: 80.0,
            exceeded_percent: 100.0,
        }
    }
}

/// User settings for Pocketbook
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Budget alert thresholds
    #[serde(default)]
    pub alerts: AlertThresholds,

    /// Argon2 cost for newly registered credentials
    #[serde(default)]
    pub credential: CredentialParams,

    /// Unit label shown next to amounts in command output
    #[serde(default = "default_currency_label")]
    pub currency_label: String,

    /// Date format preference (strftime format) for command output
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency_label() -> String {
    "units".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            alerts: AlertThresholds::default(),
            credential: CredentialParams::default(),
            currency_label: default_currency_label(),
            date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &PocketbookPaths) -> Result<Self, LedgerError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| LedgerError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| LedgerError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &PocketbookPaths) -> Result<(), LedgerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| LedgerError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| LedgerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Check that the alert thresholds are usable
    pub fn validate(&self) -> Result<(), LedgerError> {
        let alerts = &self.alerts;
        if !(alerts.approaching_percent > 0.0) {
            return Err(LedgerError::Config(
                "alerts.approaching_percent must be greater than zero".into(),
            ));
        }
        if !(alerts.approaching_percent <= alerts.exceeded_percent) {
            return Err(LedgerError::Config(format!(
                "alerts.approaching_percent ({}) must not exceed alerts.exceeded_percent ({})",
                alerts.approaching_percent, alerts.exceeded_percent
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.alerts.approaching_percent, 80.0);
        assert_eq!(settings.alerts.exceeded_percent, 100.0);
        assert_eq!(settings.currency_label, "units");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PocketbookPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.alerts.approaching_percent = 75.0;
        settings.currency_label = "EUR".into();
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.alerts.approaching_percent, 75.0);
        assert_eq!(loaded.currency_label, "EUR");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PocketbookPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"currency_label": "RUB"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_label, "RUB");
        assert_eq!(loaded.alerts, AlertThresholds::default());
        assert_eq!(loaded.credential, CredentialParams::default());
    }

    #[test]
    fn test_inverted_thresholds_rejected() {
        let mut settings = Settings::default();
        settings.alerts.approaching_percent = 120.0;
        assert!(matches!(settings.validate(), Err(LedgerError::Config(_))));

        settings.alerts.approaching_percent = 0.0;
        assert!(settings.validate().is_err());
    }
}
