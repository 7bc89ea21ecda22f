// Glass Tab Bar
// One item per tab variant, overlaid on the sliding indicator, inside a translucent capsule

use ratatui::{
    buffer::Buffer,
    layout::{Rect, Size},
    style::Style,
    widgets::{Block, BorderType, StatefulWidget, Widget},
};
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use std::marker::PhantomData;
use std::time::Instant;

use crate::constants::{CAPSULE_PADDING, GLASS_OPACITY, GLASS_TINT};
use crate::core::{Binding, TabBarConfig, TabItem};
use crate::managers::sliding_indicator::{SlidingIndicator, SyncAction};
use crate::utilities::{blend, glass_fill};

/// Bounding box for a tab (for click detection)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabBounds {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl TabBounds {
    /// Check if a coordinate (x, y) is within this tab's bounds
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

impl From<Rect> for TabBounds {
    fn from(rect: Rect) -> Self {
        Self {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
        }
    }
}

/// Frame-to-frame state of a glass tab bar
///
/// Holds the sliding indicator (and through it the selection binding) plus
/// the bounds of the last render, used for hit-testing.
#[derive(Debug, Clone)]
pub struct GlassTabBarState<T: TabItem> {
    indicator: SlidingIndicator<T>,
    capsule: Option<Rect>,
    row: Option<Rect>,
    last_sync: SyncAction,
}

impl<T: TabItem> GlassTabBarState<T> {
    pub fn new(binding: Binding<T>) -> Self {
        let config = TabBarConfig::default();
        Self {
            indicator: SlidingIndicator::new(Size::new(0, 0), config.bar_tint, binding),
            capsule: None,
            row: None,
            last_sync: SyncAction::None,
        }
    }

    pub fn binding(&self) -> &Binding<T> {
        self.indicator.binding()
    }

    pub fn selected(&self) -> T {
        self.binding().get()
    }

    pub fn indicator(&self) -> &SlidingIndicator<T> {
        &self.indicator
    }

    /// Segment the highlight is resting on (or sliding toward)
    pub fn highlighted_segment(&self) -> usize {
        self.indicator.control().selected_segment()
    }

    /// Capsule drawn by the last render
    pub fn bounds(&self) -> Option<Rect> {
        self.capsule
    }

    /// Item row drawn by the last render
    pub fn row(&self) -> Option<Rect> {
        self.row
    }

    /// Sync action taken by the last render
    pub fn last_sync(&self) -> SyncAction {
        self.last_sync
    }

    /// Forget the last render's geometry; the bar is not on screen
    pub fn clear_bounds(&mut self) {
        self.capsule = None;
        self.row = None;
    }

    /// Per-tab bounds from the last render
    pub fn calculate_tab_bounds(&self) -> Vec<TabBounds> {
        let row = match self.row {
            Some(row) if row.width > 0 && row.height > 0 => row,
            _ => return Vec::new(),
        };
        (0..T::count())
            .map(|segment| {
                let (x, width) = self.indicator.control().segment_bounds(row, segment);
                TabBounds {
                    x,
                    y: row.y,
                    width,
                    height: row.height,
                }
            })
            .collect()
    }

    /// Index of the tab at the given coordinates, if any
    pub fn get_tab_at(&self, x: u16, y: u16) -> Option<usize> {
        self.calculate_tab_bounds()
            .iter()
            .position(|bounds| bounds.contains(x, y))
    }

    /// Route a click anywhere on the capsule to the indicator
    ///
    /// Items drawn over the indicator never take the click; the capsule is a
    /// single tap target and clicks on its border or padding land on the
    /// nearest segment. Returns whether the binding was written.
    pub fn handle_click(&mut self, column: u16, row: u16, now: Instant) -> bool {
        let (capsule, item_row) = match (self.capsule, self.row) {
            (Some(capsule), Some(item_row)) => (capsule, item_row),
            _ => return false,
        };
        if item_row.width == 0 || item_row.height == 0 {
            return false;
        }
        if !TabBounds::from(capsule).contains(column, row) {
            return false;
        }

        let column = column.clamp(item_row.left(), item_row.right() - 1);
        let row = row.clamp(item_row.top(), item_row.bottom() - 1);
        self.indicator.tap(item_row, column, row, now)
    }

    /// Mouse entry point; only left-button presses count
    pub fn handle_mouse(&mut self, event: MouseEvent, now: Instant) -> bool {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => self.handle_click(event.column, event.row, now),
            _ => false,
        }
    }
}

/// Horizontal row of tab items over a sliding highlight, in a glass capsule
///
/// `content` draws one item given the tab and whether it is selected; it
/// should only set foreground attributes so the highlight shows through.
pub struct GlassTabBar<T, F> {
    config: TabBarConfig,
    content: F,
    now: Option<Instant>,
    _marker: PhantomData<T>,
}

impl<T, F, W> GlassTabBar<T, F>
where
    T: TabItem,
    F: Fn(T, bool) -> W,
    W: Widget,
{
    pub fn new(config: TabBarConfig, content: F) -> Self {
        Self {
            config,
            content,
            now: None,
            _marker: PhantomData,
        }
    }

    /// Render as of `now` instead of the wall clock
    pub fn at(mut self, now: Instant) -> Self {
        self.now = Some(now);
        self
    }

    /// Capsule size for `T::count()` items: border + padding around the row
    pub fn capsule_size(config: &TabBarConfig) -> Size {
        let row_width = config.item_width.saturating_mul(T::count() as u16);
        Size {
            width: row_width.saturating_add(2 * (CAPSULE_PADDING + 1)),
            height: config.item_height.saturating_add(2),
        }
    }

    /// Capsule rect centered in `area`
    pub fn capsule_area(config: &TabBarConfig, area: Rect) -> Rect {
        let size = Self::capsule_size(config);
        let width = size.width.min(area.width);
        let height = size.height.min(area.height);
        Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + (area.height - height) / 2,
            width,
            height,
        }
    }
}

impl<T, F, W> StatefulWidget for GlassTabBar<T, F>
where
    T: TabItem,
    F: Fn(T, bool) -> W,
    W: Widget,
{
    type State = GlassTabBarState<T>;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let now = self.now.unwrap_or_else(Instant::now);
        let area = area.intersection(buf.area);
        if area.width == 0 || area.height == 0 || T::count() == 0 {
            state.clear_bounds();
            return;
        }

        // Glass capsule: translucent fill, rounded border
        let capsule = Self::capsule_area(&self.config, area);
        glass_fill(buf, capsule, GLASS_TINT, GLASS_OPACITY);
        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(blend(self.config.bar_tint, GLASS_TINT, 0.5)))
            .render(capsule, buf);

        let inner = Rect {
            x: capsule.x + 1 + CAPSULE_PADDING,
            y: capsule.y + 1,
            width: capsule.width.saturating_sub(2 * (CAPSULE_PADDING + 1)),
            height: capsule.height.saturating_sub(2),
        };
        let row = Rect {
            width: inner
                .width
                .min(self.config.item_width.saturating_mul(T::count() as u16)),
            height: inner.height.min(self.config.item_height),
            ..inner
        };

        // Lower layer: the indicator, sized exactly to the row
        state.indicator.resize(Size::new(row.width, row.height));
        state.indicator.set_tint(self.config.bar_tint);
        state.last_sync = state.indicator.update(now);
        state.indicator.render(row, buf, now);

        // Upper layer: item content
        let selected = state.selected();
        for (position, &tab) in T::all().iter().enumerate() {
            let (x, width) = state.indicator.control().segment_bounds(row, position);
            let slot = Rect {
                x,
                y: row.y,
                width,
                height: row.height,
            };
            (self.content)(tab, tab == selected).render(slot, buf);
        }

        state.capsule = Some(capsule);
        state.row = Some(row);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SLIDE_DURATION;
    use crate::elements::tab_item_view::default_tab_item;
    use crate::utilities::SymbolTable;
    use ratatui::style::Color;

    crate::tab_items! {
        enum Tab {
            Home => ("Home", "house.fill", "house"),
            Notifications => ("Notifications", "bell.fill", "bell"),
            Settings => ("Settings", "gearshape.fill", "gearshape"),
        }
    }

    fn config() -> TabBarConfig {
        TabBarConfig::default()
            .with_active_tint(Color::Rgb(10, 132, 255))
            .with_inactive_tint(Color::Rgb(142, 142, 147))
            .with_bar_tint(Color::Rgb(58, 58, 60))
            .with_item_size(8, 2)
    }

    fn render(state: &mut GlassTabBarState<Tab>, now: Instant) -> Buffer {
        let area = Rect::new(0, 0, 40, 4);
        let mut buf = Buffer::empty(area);
        let cfg = config();
        GlassTabBar::new(cfg, move |tab: Tab, selected: bool| {
            default_tab_item(tab, selected, &cfg, SymbolTable::shared())
        })
        .at(now)
        .render(area, &mut buf, state);
        buf
    }

    /// Columns of the item row carrying the bar tint
    fn highlighted_columns(buf: &Buffer, row: Rect) -> Vec<u16> {
        (row.left()..row.right())
            .filter(|&x| buf[(x, row.y)].bg == config().bar_tint)
            .collect()
    }

    #[test]
    fn test_layout_centers_capsule() {
        let mut state = GlassTabBarState::new(Binding::new(Tab::Home));
        render(&mut state, Instant::now());

        // 3 items x 8 columns + 2 border + 2 padding = 28 wide, 4 high
        assert_eq!(state.bounds(), Some(Rect::new(6, 0, 28, 4)));
        assert_eq!(state.row(), Some(Rect::new(8, 1, 24, 2)));
    }

    #[test]
    fn test_capsule_border_is_rounded() {
        let mut state = GlassTabBarState::new(Binding::new(Tab::Home));
        let buf = render(&mut state, Instant::now());
        assert_eq!(buf[(6, 0)].symbol(), "╭");
        assert_eq!(buf[(33, 3)].symbol(), "╯");
    }

    #[test]
    fn test_items_render_over_highlight() {
        let mut state = GlassTabBarState::new(Binding::new(Tab::Notifications));
        let buf = render(&mut state, Instant::now());
        let row = state.row().unwrap();

        assert_eq!(highlighted_columns(&buf, row), (16..24).collect::<Vec<_>>());
        // Selected icon sits on the highlight in the active tint
        assert_eq!(buf[(19, 1)].symbol(), "♦");
        assert_eq!(buf[(19, 1)].fg, config().active_tint);
        assert_eq!(buf[(19, 1)].bg, config().bar_tint);
        // Unselected icon in the inactive tint
        assert_eq!(buf[(11, 1)].symbol(), "⌂");
        assert_eq!(buf[(11, 1)].fg, config().inactive_tint);
    }

    #[test]
    fn test_click_on_item_selects_it() {
        let binding = Binding::new(Tab::Home);
        let mut state = GlassTabBarState::new(binding.clone());
        let now = Instant::now();
        render(&mut state, now);

        // Click lands on the "Settings" label drawn over the third segment
        assert!(state.handle_click(28, 2, now));
        assert_eq!(binding.get(), Tab::Settings);
        assert_eq!(state.highlighted_segment(), 2);
    }

    #[test]
    fn test_click_on_capsule_padding_maps_to_nearest() {
        let binding = Binding::new(Tab::Settings);
        let mut state = GlassTabBarState::new(binding.clone());
        let now = Instant::now();
        render(&mut state, now);

        // Left border column
        assert!(state.handle_click(6, 0, now));
        assert_eq!(binding.get(), Tab::Home);
    }

    #[test]
    fn test_click_outside_capsule_ignored() {
        let binding = Binding::new(Tab::Home);
        let mut state = GlassTabBarState::new(binding.clone());
        let now = Instant::now();
        render(&mut state, now);

        assert!(!state.handle_click(2, 1, now));
        assert_eq!(binding.get(), Tab::Home);
    }

    #[test]
    fn test_sequential_reports_move_highlight() {
        let binding = Binding::new(Tab::Home);
        let mut state = GlassTabBarState::new(binding.clone());
        let start = Instant::now();
        render(&mut state, start);

        for position in 0..Tab::count() {
            let bounds = state.calculate_tab_bounds()[position];
            assert!(state.handle_click(bounds.x, bounds.y, start));
            assert_eq!(binding.get(), Tab::at(position).unwrap());

            let buf = render(&mut state, start + SLIDE_DURATION);
            assert_eq!(state.highlighted_segment(), position);
            let row = state.row().unwrap();
            let expected: Vec<u16> = (bounds.x..bounds.x + bounds.width).collect();
            assert_eq!(highlighted_columns(&buf, row), expected);
        }
    }

    #[test]
    fn test_host_selection_resyncs_on_render() {
        let binding = Binding::new(Tab::Home);
        let mut state = GlassTabBarState::new(binding.clone());
        let now = Instant::now();
        render(&mut state, now);
        assert_eq!(state.last_sync(), SyncAction::None);

        binding.set(Tab::Settings);
        render(&mut state, now);
        assert_eq!(state.last_sync(), SyncAction::Resynced { from: 0, to: 2 });

        // Same value again: nothing to do
        binding.set(Tab::Settings);
        render(&mut state, now);
        assert_eq!(state.last_sync(), SyncAction::None);
    }

    #[test]
    fn test_get_tab_at() {
        let mut state = GlassTabBarState::new(Binding::new(Tab::Home));
        render(&mut state, Instant::now());

        assert_eq!(state.get_tab_at(8, 1), Some(0));
        assert_eq!(state.get_tab_at(23, 2), Some(1));
        assert_eq!(state.get_tab_at(7, 1), None);
    }

    #[test]
    fn test_zero_area_clears_bounds() {
        let mut state = GlassTabBarState::new(Binding::new(Tab::Home));
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 1));
        let cfg = config();
        GlassTabBar::new(cfg, move |tab: Tab, selected: bool| {
            default_tab_item(tab, selected, &cfg, SymbolTable::shared())
        })
        .render(Rect::new(0, 0, 0, 0), &mut buf, &mut state);

        assert_eq!(state.bounds(), None);
        assert!(!state.handle_click(0, 0, Instant::now()));
    }
}
