//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a default so the application works with no config file.

use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub journal: JournalConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Dark color mode. Toggled at runtime with F4 and written back here.
    #[serde(default)]
    pub dark_mode: bool,
    /// strftime format for the creation time shown under each entry.
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            dark_mode: false,
            timestamp_format: default_timestamp_format(),
        }
    }
}

fn default_timestamp_format() -> String {
    "%I:%M:%S %p".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalConfig {
    #[serde(default = "default_journal_enabled")]
    pub enabled: bool,
    #[serde(default = "default_journal_dir")]
    pub dir: String,
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            enabled: default_journal_enabled(),
            dir: default_journal_dir(),
        }
    }
}

fn default_journal_enabled() -> bool {
    true
}

fn default_journal_dir() -> String {
    "~/.local/share/expenselog/journal".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert!(!config.ui.dark_mode);
        assert_eq!(config.ui.timestamp_format, "%I:%M:%S %p");
        assert!(config.journal.enabled);
    }

    #[test]
    fn test_partial_config_fills_missing_fields() {
        let config: AppConfig = toml::from_str("[ui]\ndark_mode = true\n").unwrap();
        assert!(config.ui.dark_mode);
        assert_eq!(config.ui.timestamp_format, "%I:%M:%S %p");
    }
}
