// Tab Item View
// Default icon-above-label rendering for a single tab

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

use crate::core::{TabBarConfig, TabItem};
use crate::utilities::{center_text, glyph_for, SymbolResolver};

/// Visual description of one tab item
///
/// Only foreground attributes are drawn, so the sliding highlight (or any
/// other background) underneath stays visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabItemView {
    pub icon: String,
    pub label: String,
    pub tint: Color,
    pub bold: bool,
}

impl TabItemView {
    fn style(&self) -> Style {
        let style = Style::default().fg(self.tint);
        if self.bold {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }

    /// Lines to draw for the given number of rows
    /// With a single row the icon and label share it
    fn lines(&self, rows: u16) -> Vec<String> {
        let parts: Vec<&str> = [self.icon.as_str(), self.label.as_str()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect();

        if rows as usize >= parts.len() {
            parts.into_iter().map(str::to_string).collect()
        } else {
            vec![parts.join(" ")]
        }
    }
}

impl Widget for TabItemView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        if area.width == 0 || area.height == 0 {
            return;
        }

        let lines = self.lines(area.height);
        // Vertically center the block of lines
        let top = area.y + area.height.saturating_sub(lines.len() as u16) / 2;
        let style = self.style();

        for (offset, line) in lines.iter().enumerate() {
            let y = top + offset as u16;
            if y >= area.bottom() {
                break;
            }
            let (pad, text) = center_text(line, area.width);
            buf.set_stringn(area.x + pad, y, &text, area.width as usize, style);
        }
    }
}

/// Default renderer: icon (filled when selected) above the tab's label
pub fn default_tab_item<T: TabItem>(
    tab: T,
    is_selected: bool,
    config: &TabBarConfig,
    resolver: &dyn SymbolResolver,
) -> TabItemView {
    TabItemView {
        icon: glyph_for(resolver, tab.symbol(is_selected)).to_string(),
        label: tab.raw_value().to_string(),
        tint: config.tint(is_selected),
        bold: is_selected,
    }
}

/// Icon-only renderer used by the compact variants
pub fn icon_tab_item<T: TabItem>(
    tab: T,
    is_selected: bool,
    config: &TabBarConfig,
    resolver: &dyn SymbolResolver,
) -> TabItemView {
    TabItemView {
        icon: glyph_for(resolver, tab.symbol(is_selected)).to_string(),
        label: String::new(),
        tint: config.tint(is_selected),
        bold: is_selected,
    }
}
