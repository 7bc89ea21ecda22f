// Configuration validation module

use crate::config::{convert_tab_bar_config, load_config, AppConfig};
use crate::core::{StylePreference, TabBarConfig};
use std::path::PathBuf;

/// Everything a host needs from the configuration, already validated
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub app: AppConfig,
    pub tab_bar: TabBarConfig,
    pub style: StylePreference,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            app: AppConfig::default(),
            tab_bar: TabBarConfig::default(),
            style: StylePreference::default(),
        }
    }
}

/// Load and validate configuration with error recovery
///
/// A missing or unreadable file, bad YAML, or an invalid colour all fall back
/// to the compiled defaults with a warning.
pub fn load_and_validate_config(config_path: Option<PathBuf>) -> ResolvedConfig {
    let app = match load_config(config_path) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Failed to load configuration: {}", e);
            log::warn!("Using default configuration");
            return ResolvedConfig::default();
        }
    };

    let tab_bar = match convert_tab_bar_config(&app.tab_bar) {
        Ok(tab_bar) => tab_bar,
        Err(e) => {
            log::warn!("Invalid tab bar configuration: {}; using defaults", e);
            TabBarConfig::default()
        }
    };

    ResolvedConfig {
        style: app.tab_bar.style,
        tab_bar,
        app,
    }
}
