// Header and status line rendering

use glass_tabs::{FloatingIndicator, FloatingIndicatorState, TabBarConfig};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Paragraph, StatefulWidget, Widget},
};
use std::time::Instant;

use crate::DemoTab;

/// Rows taken by the header (matches the floating badge)
pub const HEADER_HEIGHT: u16 = 3;

/// Title on the left, floating indicator badge on the right
pub fn render_header(
    area: Rect,
    buf: &mut Buffer,
    title: &str,
    config: TabBarConfig,
    badge: &mut FloatingIndicatorState<DemoTab>,
    now: Instant,
) {
    if area.height == 0 {
        return;
    }

    let title_row = Rect {
        y: area.y + area.height / 2,
        height: 1,
        ..area
    };
    Paragraph::new(format!("  {}", title))
        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        .render(title_row, buf);

    let badge_width = 7.min(area.width);
    let badge_area = Rect {
        x: area.right() - badge_width,
        width: badge_width,
        ..area
    };
    FloatingIndicator::new(config)
        .at(now)
        .render(badge_area, buf, badge);
}

/// One-line key hint at the bottom of the screen
pub fn render_status(area: Rect, buf: &mut Buffer, text: &str) {
    Paragraph::new(text.to_string())
        .style(Style::default().fg(Color::DarkGray))
        .render(area, buf);
}
