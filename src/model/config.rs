use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Configuration from todo.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub screen: ScreenConfig,
    #[serde(default)]
    pub ids: IdConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenConfig {
    /// Title shown in the header
    #[serde(default = "default_title")]
    pub title: String,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        ScreenConfig {
            title: default_title(),
        }
    }
}

fn default_title() -> String {
    "todo".to_string()
}

/// How new task ids are derived from the clock
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// Clock millis, bumped past the last issued id so ids never collide
    #[default]
    Monotonic,
    /// Raw clock millis. Two tasks added in the same millisecond share an id.
    Timestamp,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IdConfig {
    #[serde(default)]
    pub strategy: IdStrategy,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiConfig {
    /// Hex color overrides keyed by theme slot (e.g. `highlight = "#8257E5"`)
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Filter directive used when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file. The TUI only logs when this (or --log-file) is set.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            level: default_log_level(),
            file: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.screen.title, "todo");
        assert_eq!(config.ids.strategy, IdStrategy::Monotonic);
        assert!(config.ui.colors.is_empty());
        assert_eq!(config.log.level, "info");
        assert!(config.log.file.is_none());
    }

    #[test]
    fn parses_all_sections() {
        let text = r##"
[screen]
title = "groceries"

[ids]
strategy = "timestamp"

[ui.colors]
highlight = "#8257E5"

[log]
level = "debug"
file = "/tmp/todo.log"
"##;
        let config: Config = toml::from_str(text).unwrap();
        assert_eq!(config.screen.title, "groceries");
        assert_eq!(config.ids.strategy, IdStrategy::Timestamp);
        assert_eq!(config.ui.colors.get("highlight").unwrap(), "#8257E5");
        assert_eq!(config.log.level, "debug");
        assert_eq!(config.log.file, Some(PathBuf::from("/tmp/todo.log")));
    }

    #[test]
    fn unknown_strategy_is_rejected() {
        let err = toml::from_str::<Config>("[ids]\nstrategy = \"random\"\n");
        assert!(err.is_err());
    }
}
