//! User settings for the expense tracker
//!
//! Manages presentation preferences: currency symbol, suggested categories
//! and how charts are displayed.

use serde::{Deserialize, Serialize};

use super::paths::ExpensePaths;
use crate::error::ExpenseError;

/// How category charts are displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ChartMode {
    /// Full-screen charts on a terminal, text charts otherwise
    #[default]
    Auto,
    /// Always use the full-screen terminal charts
    Terminal,
    /// Plain text charts written to the output
    Text,
    /// No charts
    Off,
}

/// User settings for the expense tracker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version of the settings file
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol shown in front of amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Categories offered when adding an expense
    ///
    /// These are hints only; any category text is accepted.
    #[serde(default = "default_suggested_categories")]
    pub suggested_categories: Vec<String>,

    /// Chart display mode
    #[serde(default)]
    pub chart_mode: ChartMode,

    /// Width in characters of the longest bar in text charts
    #[serde(default = "default_chart_width")]
    pub chart_width: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "₹".to_string()
}

fn default_suggested_categories() -> Vec<String> {
    ["Food", "Travel", "Bills", "Shopping", "Other"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_chart_width() -> usize {
    40
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            suggested_categories: default_suggested_categories(),
            chart_mode: ChartMode::default(),
            chart_width: default_chart_width(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &ExpensePaths) -> Result<Self, ExpenseError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                ExpenseError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                ExpenseError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ExpensePaths) -> Result<(), ExpenseError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            ExpenseError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            ExpenseError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// Prompt hint listing the suggested categories, e.g. `Food/Travel/Other`
    pub fn category_hint(&self) -> String {
        self.suggested_categories.join("/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "₹");
        assert_eq!(settings.chart_mode, ChartMode::Auto);
        assert_eq!(settings.category_hint(), "Food/Travel/Bills/Shopping/Other");
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.currency_symbol = "$".into();
        settings.chart_mode = ChartMode::Text;
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "$");
        assert_eq!(loaded.chart_mode, ChartMode::Text);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"chart_mode": "off"}"#).unwrap();
        assert_eq!(settings.chart_mode, ChartMode::Off);
        assert_eq!(settings.chart_width, 40);
        assert_eq!(settings.suggested_categories.len(), 5);
    }

    #[test]
    fn test_invalid_settings_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, ExpenseError::Config(_)));
    }
}
