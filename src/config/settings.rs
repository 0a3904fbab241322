//! User settings for Tally
//!
//! Manages display preferences and the defaults used by the list and report
//! commands.

use serde::{Deserialize, Serialize};

use super::paths::TallyPaths;
use crate::error::TallyError;
use crate::models::TransactionType;
use crate::services::filter::FilterMode;
use crate::storage::file_io::{read_json, write_json_atomic};

/// User settings for Tally
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol shown next to amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Temporal mode used when none is given on the command line
    #[serde(default)]
    pub default_mode: FilterMode,

    /// Transaction type listed when none is given on the command line
    #[serde(default = "default_type")]
    pub default_type: TransactionType,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "€".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_type() -> TransactionType {
    TransactionType::Expense
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            default_mode: FilterMode::default(),
            default_type: default_type(),
        }
    }
}

impl Settings {
    /// Read `config.json`, or fall back to defaults when it is absent
    ///
    /// Nothing is written here; `tally init` persists the file.
    pub fn load_or_create(paths: &TallyPaths) -> Result<Self, TallyError> {
        let path = paths.settings_file();
        read_json::<Settings, _>(&path)
            .map(Option::unwrap_or_default)
            .map_err(|e| TallyError::Config(format!("Unusable settings file: {}", e)))
    }

    /// Persist settings atomically
    pub fn save(&self, paths: &TallyPaths) -> Result<(), TallyError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }

    /// Format an amount with the configured currency symbol
    pub fn format_amount(&self, amount: f64) -> String {
        format!("{}{:.2}", self.currency_symbol, amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "€");
        assert_eq!(settings.default_mode, FilterMode::All);
        assert_eq!(settings.default_type, TransactionType::Expense);
    }

    #[test]
    fn test_absent_file_gives_defaults_without_writing() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TallyPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.currency_symbol, "€");
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TallyPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.currency_symbol = "$".into();
        settings.default_mode = FilterMode::Past;
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "$");
        assert_eq!(loaded.default_mode, FilterMode::Past);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"currency_symbol": "£"}"#).unwrap();
        assert_eq!(settings.currency_symbol, "£");
        assert_eq!(settings.date_format, "%Y-%m-%d");
        assert_eq!(settings.schema_version, 1);
    }

    #[test]
    fn test_corrupt_settings_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TallyPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{ not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, TallyError::Config(_)));
    }

    #[test]
    fn test_format_amount() {
        let settings = Settings::default();
        assert_eq!(settings.format_amount(12.5), "€12.50");
    }
}
