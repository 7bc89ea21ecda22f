// Tab Bar Configuration
// Defaults compiled from config.yaml at build time
// Modify config.yaml and rebuild to change these values

use ratatui::style::Color;

// Include the auto-generated config from build.rs
pub mod compiled {
    include!(concat!(env!("OUT_DIR"), "/compiled_config.rs"));
}

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}

/// Appearance of one tab bar instance
///
/// Immutable once handed to a bar; to change appearance, build the bar again
/// with a new value on the next render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabBarConfig {
    /// Foreground of the selected item's icon and label
    pub active_tint: Color,

    /// Foreground of unselected items
    pub inactive_tint: Color,

    /// Fill of the sliding highlight
    pub bar_tint: Color,

    /// Columns per tab
    pub item_width: u16,

    /// Rows per tab
    pub item_height: u16,

    /// Rows reserved at the bottom of tab content while the glass bar floats over it
    pub bar_height: u16,
}

impl Default for TabBarConfig {
    fn default() -> Self {
        Self {
            active_tint: rgb(compiled::ACTIVE_TINT),
            inactive_tint: rgb(compiled::INACTIVE_TINT),
            bar_tint: rgb(compiled::BAR_TINT),
            item_width: compiled::ITEM_WIDTH,
            item_height: compiled::ITEM_HEIGHT,
            bar_height: compiled::BAR_HEIGHT,
        }
    }
}

impl TabBarConfig {
    pub fn with_active_tint(mut self, color: Color) -> Self {
        self.active_tint = color;
        self
    }

    pub fn with_inactive_tint(mut self, color: Color) -> Self {
        self.inactive_tint = color;
        self
    }

    pub fn with_bar_tint(mut self, color: Color) -> Self {
        self.bar_tint = color;
        self
    }

    pub fn with_item_size(mut self, width: u16, height: u16) -> Self {
        self.item_width = width;
        self.item_height = height;
        self
    }

    pub fn with_bar_height(mut self, height: u16) -> Self {
        self.bar_height = height;
        self
    }

    /// Tint for an item in the given selection state
    pub fn tint(&self, is_selected: bool) -> Color {
        if is_selected {
            self.active_tint
        } else {
            self.inactive_tint
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_overrides() {
        let config = TabBarConfig::default()
            .with_active_tint(Color::Cyan)
            .with_item_size(8, 1)
            .with_bar_height(3);

        assert_eq!(config.active_tint, Color::Cyan);
        assert_eq!(config.item_width, 8);
        assert_eq!(config.item_height, 1);
        assert_eq!(config.bar_height, 3);
        assert_eq!(config.inactive_tint, TabBarConfig::default().inactive_tint);
    }

    #[test]
    fn test_tint_by_selection() {
        let config = TabBarConfig::default()
            .with_active_tint(Color::Yellow)
            .with_inactive_tint(Color::Gray);
        assert_eq!(config.tint(true), Color::Yellow);
        assert_eq!(config.tint(false), Color::Gray);
    }
}
