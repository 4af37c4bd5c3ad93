use super::models::AppConfig;
use super::tables::ConfigTables;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Load configuration from `path`, falling back to defaults when the file is
/// missing or unreadable. Invalid entries never abort startup.
pub fn load_config(path: &Path) -> AppConfig {
    match fs::read_to_string(path) {
        Ok(data) => match parse_config(&data) {
            Ok(config) => {
                info!(path = %path.display(), "Loaded configuration");
                config
            }
            Err(err) => {
                warn!(path = %path.display(), "Invalid configuration, using defaults: {err}");
                AppConfig::default()
            }
        },
        Err(err) => {
            warn!(path = %path.display(), "No configuration file, using defaults: {err}");
            AppConfig::default()
        }
    }
}

pub fn parse_config(data: &str) -> Result<AppConfig> {
    let tables: ConfigTables = toml::from_str(data).context("Failed to parse TOML config")?;
    Ok(tables.into())
}

pub fn serialize_config(config: &AppConfig) -> Result<String> {
    let tables = ConfigTables::from(config);
    toml::to_string_pretty(&tables).context("Failed to serialize config")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ChapterStyle, LogLevel, ThemeMode};

    #[test]
    fn empty_input_yields_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.min_item_width, 220.0);
        assert_eq!(config.resize_settle_ms, 300);
        assert_eq!(config.chapter_style, ChapterStyle::Horizontal);
        assert_eq!(config.theme, ThemeMode::Night);
    }

    #[test]
    fn partial_tables_keep_per_field_defaults() {
        let config = parse_config(
            r#"
            [navigation]
            chapter_style = "dropdown"

            [logging]
            log_level = "warn"
            "#,
        )
        .unwrap();
        assert_eq!(config.chapter_style, ChapterStyle::Dropdown);
        assert_eq!(config.log_level, LogLevel::Warn);
        // Untouched fields fall back to their defaults.
        assert_eq!(config.min_item_width, 220.0);
        assert_eq!(config.tick_ms, 250);
    }

    #[test]
    fn serialization_round_trips() {
        let mut config = AppConfig::default();
        config.chapter_style = ChapterStyle::ProgressBar;
        config.min_item_width = 180.0;
        config.playback_rate = 2.0;

        let rendered = serialize_config(&config).unwrap();
        let parsed = parse_config(&rendered).unwrap();
        assert_eq!(parsed.chapter_style, ChapterStyle::ProgressBar);
        assert_eq!(parsed.min_item_width, 180.0);
        assert_eq!(parsed.playback_rate, 2.0);
    }

    #[test]
    fn garbage_input_is_an_error() {
        assert!(parse_config("not = [valid").is_err());
    }
}
