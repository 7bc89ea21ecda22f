// Content rendering

use glass_tabs::{TabBarPadding, TabItem};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, BorderType, Paragraph, Widget, Wrap},
};

use crate::DemoTab;

fn body(tab: DemoTab) -> Vec<Line<'static>> {
    match tab {
        DemoTab::Home => vec![
            Line::from("Welcome home."),
            Line::from(""),
            Line::from("The bar below floats over this box. Its bottom rows are"),
            Line::from("reserved so nothing here is hidden behind the glass."),
        ],
        DemoTab::Notifications => vec![
            Line::from("No new notifications."),
            Line::from(""),
            Line::from("The badge in the header cross-fades whenever the"),
            Line::from("selection changes, whatever changed it."),
        ],
        DemoTab::Settings => vec![
            Line::from("Style is chosen from COLORTERM and TERM."),
            Line::from(""),
            Line::from("Set `style: legacy` in config.yaml to force the"),
            Line::from("built-in tabs, or `style: glass` to force the bar."),
        ],
    }
}

/// Render one tab's page inside the padded content area
pub fn render_tab_content(tab: DemoTab, area: Rect, buf: &mut Buffer, padding: &TabBarPadding) {
    let area = padding.apply(area);
    if area.width == 0 || area.height == 0 {
        return;
    }

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(format!(" {} ", tab.raw_value()));

    Paragraph::new(body(tab))
        .block(block)
        .wrap(Wrap { trim: false })
        .render(area, buf);
}
