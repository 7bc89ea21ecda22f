// Build script - reads config.yaml at compile time and generates tab bar defaults
// This allows changing defaults during development without editing source code

use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Tell Cargo to rerun if config.yaml changes
    println!("cargo:rerun-if-changed=src/config.yaml");

    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("compiled_config.rs");

    // Try to read config.yaml from src/, fall back to hardcoded defaults if not found
    let config = if Path::new("src/config.yaml").exists() {
        let content = fs::read_to_string("src/config.yaml")
            .expect("Failed to read src/config.yaml");
        parse_config(&content)
    } else {
        CompiledConfig::default()
    };

    let generated = format!(
        r#"// Auto-generated from config.yaml at compile time
// Do not edit - modify config.yaml and rebuild instead

pub const ACTIVE_TINT: (u8, u8, u8) = {active_tint};
pub const INACTIVE_TINT: (u8, u8, u8) = {inactive_tint};
pub const BAR_TINT: (u8, u8, u8) = {bar_tint};

pub const ITEM_WIDTH: u16 = {item_width};
pub const ITEM_HEIGHT: u16 = {item_height};
pub const BAR_HEIGHT: u16 = {bar_height};

pub const STYLE: &str = "{style}";
"#,
        active_tint = rgb_tuple(config.active_tint),
        inactive_tint = rgb_tuple(config.inactive_tint),
        bar_tint = rgb_tuple(config.bar_tint),
        item_width = config.item_width,
        item_height = config.item_height,
        bar_height = config.bar_height,
        style = config.style,
    );

    fs::write(&dest_path, generated).expect("Failed to write compiled config");
}

struct CompiledConfig {
    active_tint: (u8, u8, u8),
    inactive_tint: (u8, u8, u8),
    bar_tint: (u8, u8, u8),
    item_width: u16,
    item_height: u16,
    bar_height: u16,
    style: String,
}

impl Default for CompiledConfig {
    fn default() -> Self {
        Self {
            active_tint: (10, 132, 255),    // #0a84ff
            inactive_tint: (142, 142, 147), // #8e8e93
            bar_tint: (58, 58, 60),         // #3a3a3c
            item_width: 16,
            item_height: 2,
            bar_height: 4,
            style: "auto".to_string(),
        }
    }
}

fn rgb_tuple(rgb: (u8, u8, u8)) -> String {
    format!("({}, {}, {})", rgb.0, rgb.1, rgb.2)
}

fn parse_config(content: &str) -> CompiledConfig {
    let mut config = CompiledConfig::default();

    // Simple YAML parsing (avoiding external dependencies in build script)
    let mut in_tab_bar = false;

    for line in content.lines() {
        let trimmed = line.trim();

        // Only top-level `tab_bar:` is read; any other unindented key ends the section
        if !line.starts_with(' ') && !line.starts_with('\t') && !trimmed.is_empty() && !trimmed.starts_with('#') {
            in_tab_bar = trimmed.starts_with("tab_bar:");
            continue;
        }

        if !in_tab_bar {
            continue;
        }

        if let Some((key, value)) = parse_kv(trimmed) {
            match key {
                "active_tint" => config.active_tint = parse_hex_color(value).unwrap_or(config.active_tint),
                "inactive_tint" => config.inactive_tint = parse_hex_color(value).unwrap_or(config.inactive_tint),
                "bar_tint" => config.bar_tint = parse_hex_color(value).unwrap_or(config.bar_tint),
                "item_width" => config.item_width = value.parse().unwrap_or(config.item_width),
                "item_height" => config.item_height = value.parse().unwrap_or(config.item_height),
                "bar_height" => config.bar_height = value.parse().unwrap_or(config.bar_height),
                "style" => config.style = value.trim_matches('"').to_string(),
                _ => {}
            }
        }
    }

    config
}

fn parse_kv(line: &str) -> Option<(&str, &str)> {
    if line.starts_with('#') || line.is_empty() {
        return None;
    }

    let colon_pos = line.find(':')?;
    let key = line[..colon_pos].trim();
    let mut value = line[colon_pos + 1..].trim();

    // Remove inline comments, but keep a leading # (hex color)
    if let Some(comment_pos) = value.find(" #") {
        value = value[..comment_pos].trim();
    }

    if value.is_empty() {
        return None;
    }

    Some((key, value))
}

fn parse_hex_color(s: &str) -> Option<(u8, u8, u8)> {
    let s = s.trim().trim_matches('"').trim_matches('\'');
    let s = s.strip_prefix('#')?;

    if s.len() != 6 {
        return None;
    }

    match (
        u8::from_str_radix(&s[0..2], 16),
        u8::from_str_radix(&s[2..4], 16),
        u8::from_str_radix(&s[4..6], 16),
    ) {
        (Ok(r), Ok(g), Ok(b)) => Some((r, g, b)),
        _ => None,
    }
}
