// Configuration loading module

use ratatui::style::Color;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::{StylePreference, TabBarConfig};
use crate::utilities::hex_color;

/// Errors raised while loading a YAML configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML in {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid colour '{value}' for {field}")]
    InvalidColor { field: &'static str, value: String },
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub application: ApplicationConfig,
    #[serde(default)]
    pub tab_bar: TabBarConfigYaml,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub status_text: String,
}

fn default_title() -> String {
    "Glass Tabs".to_string()
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            status_text: String::new(),
        }
    }
}

/// Tab bar section; anything left out keeps its compiled default
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TabBarConfigYaml {
    pub active_tint: Option<String>,
    pub inactive_tint: Option<String>,
    pub bar_tint: Option<String>,
    pub item_width: Option<u16>,
    pub item_height: Option<u16>,
    pub bar_height: Option<u16>,
    #[serde(default)]
    pub style: StylePreference,
}

/// Default config file location (next to the sources)
pub fn default_config_path() -> PathBuf {
    let mut default_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    default_path.push("src");
    default_path.push("config.yaml");
    default_path
}

pub fn load_config(config_path: Option<PathBuf>) -> Result<AppConfig, ConfigError> {
    let path = config_path.unwrap_or_else(default_config_path);

    let contents = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;
    parse_config(&contents, &path)
}

fn parse_config(contents: &str, path: &Path) -> Result<AppConfig, ConfigError> {
    serde_yaml::from_str(contents).map_err(|source| ConfigError::Yaml {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse a colour name or `#rrggbb`
pub fn parse_color(color: &str) -> Option<Color> {
    let color = color.trim();
    if let Some(hex) = color.strip_prefix('#') {
        if hex.len() != 6 {
            return None;
        }
        return u32::from_str_radix(hex, 16).ok().map(hex_color);
    }

    let parsed = match color.to_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "white" => Color::White,
        "gray" | "grey" => Color::Gray,
        // Dark colors using RGB values (ratatui doesn't have Dark* variants)
        "dark_red" | "darkred" => Color::Rgb(139, 0, 0),
        "dark_green" | "darkgreen" => Color::Rgb(0, 100, 0),
        "dark_yellow" | "darkyellow" => Color::Rgb(184, 134, 11),
        "dark_blue" | "darkblue" => Color::Rgb(0, 0, 139),
        "dark_magenta" | "darkmagenta" => Color::Rgb(139, 0, 139),
        "dark_cyan" | "darkcyan" => Color::Rgb(0, 139, 139),
        "dark_gray" | "darkgray" | "dark_grey" | "darkgrey" => Color::DarkGray,
        _ => return None,
    };
    Some(parsed)
}

fn color_field(field: &'static str, value: &Option<String>, fallback: Color) -> Result<Color, ConfigError> {
    match value {
        None => Ok(fallback),
        Some(value) => parse_color(value).ok_or_else(|| ConfigError::InvalidColor {
            field,
            value: value.clone(),
        }),
    }
}

/// Turn the YAML section into a `TabBarConfig`, filling gaps from the compiled defaults
pub fn convert_tab_bar_config(yaml: &TabBarConfigYaml) -> Result<TabBarConfig, ConfigError> {
    let defaults = TabBarConfig::default();
    Ok(TabBarConfig {
        active_tint: color_field("active_tint", &yaml.active_tint, defaults.active_tint)?,
        inactive_tint: color_field("inactive_tint", &yaml.inactive_tint, defaults.inactive_tint)?,
        bar_tint: color_field("bar_tint", &yaml.bar_tint, defaults.bar_tint)?,
        item_width: yaml.item_width.unwrap_or(defaults.item_width),
        item_height: yaml.item_height.unwrap_or(defaults.item_height),
        bar_height: yaml.bar_height.unwrap_or(defaults.bar_height),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(yaml: &str) -> Result<AppConfig, ConfigError> {
        parse_config(yaml, Path::new("test.yaml"))
    }

    #[test]
    fn test_parse_color_names_and_hex() {
        assert_eq!(parse_color("Blue"), Some(Color::Blue));
        assert_eq!(parse_color("darkcyan"), Some(Color::Rgb(0, 139, 139)));
        assert_eq!(parse_color("#0a84ff"), Some(Color::Rgb(10, 132, 255)));
        assert_eq!(parse_color("#0a84f"), None);
        assert_eq!(parse_color("chartreuse"), None);
    }

    #[test]
    fn test_full_tab_bar_section() {
        let config = parse(
            r##"
application:
  title: "Demo"
tab_bar:
  active_tint: "#ff0000"
  inactive_tint: gray
  bar_tint: "#202020"
  item_width: 12
  item_height: 1
  bar_height: 3
  style: legacy
"##,
        )
        .unwrap();

        assert_eq!(config.application.title, "Demo");
        assert_eq!(config.tab_bar.style, StylePreference::Legacy);

        let bar = convert_tab_bar_config(&config.tab_bar).unwrap();
        assert_eq!(bar.active_tint, Color::Rgb(255, 0, 0));
        assert_eq!(bar.inactive_tint, Color::Gray);
        assert_eq!(bar.bar_tint, Color::Rgb(32, 32, 32));
        assert_eq!((bar.item_width, bar.item_height, bar.bar_height), (12, 1, 3));
    }

    #[test]
    fn test_missing_fields_use_compiled_defaults() {
        let config = parse("tab_bar:\n  item_width: 9\n").unwrap();
        let bar = convert_tab_bar_config(&config.tab_bar).unwrap();
        let defaults = TabBarConfig::default();

        assert_eq!(bar.item_width, 9);
        assert_eq!(bar.active_tint, defaults.active_tint);
        assert_eq!(bar.bar_height, defaults.bar_height);
        assert_eq!(config.tab_bar.style, StylePreference::Auto);
        assert_eq!(config.application.title, "Glass Tabs");
    }

    #[test]
    fn test_invalid_color_is_reported() {
        let config = parse("tab_bar:\n  bar_tint: mauve\n").unwrap();
        match convert_tab_bar_config(&config.tab_bar) {
            Err(ConfigError::InvalidColor { field, value }) => {
                assert_eq!(field, "bar_tint");
                assert_eq!(value, "mauve");
            }
            other => panic!("expected InvalidColor, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_yaml_and_missing_file() {
        assert!(matches!(parse("tab_bar: [1, 2"), Err(ConfigError::Yaml { .. })));
        assert!(matches!(
            load_config(Some(PathBuf::from("/nonexistent/glass-tabs.yaml"))),
            Err(ConfigError::Io { .. })
        ));
    }

    #[test]
    fn test_shipped_config_loads() {
        let config = load_config(None).unwrap();
        assert!(convert_tab_bar_config(&config.tab_bar).is_ok());
    }
}
