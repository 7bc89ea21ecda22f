// Adaptive Tab View
// Picks the glass bar or the built-in tabs per render pass and keeps the selection in one binding

use crossterm::event::Event;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{StatefulWidget, Tabs, Widget},
};
use std::time::Instant;

use crate::constants::HORIZONTAL_INSET;
use crate::core::{
    Binding, CapabilityProbe, EventHandler, RenderStrategy, TabBarConfig, TabEvent, TabItem,
};
use crate::elements::{default_tab_item, GlassTabBar, GlassTabBarState, TabBounds, TabItemView};
use crate::utilities::{SymbolResolver, SymbolTable};

const LEGACY_DIVIDER: &str = "│";

/// Frame-to-frame state of an adaptive tab view
#[derive(Debug, Clone)]
pub struct AdaptiveTabState<T: TabItem> {
    bar: GlassTabBarState<T>,
    strategy: Option<RenderStrategy>,
    legacy_tabs: Vec<TabBounds>,
}

impl<T: TabItem> AdaptiveTabState<T> {
    pub fn new(binding: Binding<T>) -> Self {
        Self {
            bar: GlassTabBarState::new(binding),
            strategy: None,
            legacy_tabs: Vec::new(),
        }
    }

    pub fn binding(&self) -> &Binding<T> {
        self.bar.binding()
    }

    pub fn selected(&self) -> T {
        self.bar.selected()
    }

    /// Glass bar state (meaningful while the strategy is `Modern`)
    pub fn bar(&self) -> &GlassTabBarState<T> {
        &self.bar
    }

    /// Strategy used by the last render, if any
    pub fn strategy(&self) -> Option<RenderStrategy> {
        self.strategy
    }

    /// Title bounds of the built-in tabs from the last `Legacy` render
    pub fn legacy_tab_bounds(&self) -> &[TabBounds] {
        &self.legacy_tabs
    }

    fn select(&mut self, tab: T) -> bool {
        if self.binding().get() == tab {
            return false;
        }
        self.binding().set(tab);
        true
    }

    fn step(&mut self, forward: bool) -> bool {
        let count = T::count();
        if count == 0 {
            return false;
        }
        let current = self.selected().index();
        let next = if forward {
            (current + 1) % count
        } else {
            (current + count - 1) % count
        };
        match T::at(next) {
            Some(tab) => self.select(tab),
            None => false,
        }
    }

    fn click(&mut self, column: u16, row: u16, now: Instant) -> bool {
        match self.strategy {
            Some(RenderStrategy::Modern) => self.bar.handle_click(column, row, now),
            Some(RenderStrategy::Legacy) => {
                let position = self
                    .legacy_tabs
                    .iter()
                    .position(|bounds| bounds.contains(column, row));
                match position.and_then(T::at) {
                    Some(tab) => self.select(tab),
                    None => false,
                }
            }
            None => false,
        }
    }

    /// Apply a navigation event; returns whether the binding was written
    ///
    /// Keys behave the same under both strategies. Clicks go to whatever was
    /// drawn last: the glass capsule or the built-in tab titles.
    pub fn apply(&mut self, event: TabEvent, now: Instant) -> bool {
        match event {
            TabEvent::Previous => self.step(false),
            TabEvent::Next => self.step(true),
            TabEvent::Jump(position) => match T::at(position) {
                Some(tab) => self.select(tab),
                None => {
                    log::debug!("no tab at position {}", position);
                    false
                }
            },
            TabEvent::Click { column, row } => self.click(column, row, now),
            TabEvent::Quit | TabEvent::None => false,
        }
    }

    /// Convert a terminal event, apply it, and hand the tab event back to the caller
    pub fn handle_event(&mut self, event: &Event, now: Instant) -> TabEvent {
        let tab_event = EventHandler::handle(event);
        self.apply(tab_event, now);
        tab_event
    }
}

type ItemView<'a, T> = Box<dyn Fn(T, bool) -> TabItemView + 'a>;

/// Tab container that adapts to what the terminal can draw
///
/// `Modern`: `content` fills the whole area and the glass bar floats over its
/// bottom rows. `Legacy`: ratatui's `Tabs` sit on the top row and `content`
/// gets the rest. The host should pad its content with [`TabBarPadding`].
pub struct AdaptiveTabView<'a, T, C> {
    config: TabBarConfig,
    probe: &'a dyn CapabilityProbe,
    content: C,
    item_view: Option<ItemView<'a, T>>,
    resolver: &'a dyn SymbolResolver,
    now: Option<Instant>,
}

impl<'a, T, C> AdaptiveTabView<'a, T, C>
where
    T: TabItem,
    C: Fn(T, Rect, &mut Buffer),
{
    pub fn new(probe: &'a dyn CapabilityProbe, content: C) -> Self {
        Self {
            config: TabBarConfig::default(),
            probe,
            content,
            item_view: None,
            resolver: SymbolTable::shared(),
            now: None,
        }
    }

    pub fn config(mut self, config: TabBarConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the default icon-above-label item
    pub fn item_view(mut self, view: impl Fn(T, bool) -> TabItemView + 'a) -> Self {
        self.item_view = Some(Box::new(view));
        self
    }

    pub fn resolver(mut self, resolver: &'a dyn SymbolResolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// Render as of `now` instead of the wall clock
    pub fn at(mut self, now: Instant) -> Self {
        self.now = Some(now);
        self
    }

    /// Where the glass bar floats: bottom rows, inset from the sides
    pub fn bar_area(config: &TabBarConfig, area: Rect) -> Rect {
        let height = config.bar_height.min(area.height);
        let inset = HORIZONTAL_INSET.min(area.width / 2);
        Rect {
            x: area.x + inset,
            y: area.bottom() - height,
            width: area.width - 2 * inset,
            height,
        }
    }

    fn render_modern(self, area: Rect, buf: &mut Buffer, state: &mut AdaptiveTabState<T>, now: Instant) {
        let selected = state.selected();
        (self.content)(selected, area, buf);

        let config = self.config;
        let resolver = self.resolver;
        let item_view = self.item_view;
        let bar = GlassTabBar::new(config, |tab: T, is_selected: bool| match &item_view {
            Some(view) => view(tab, is_selected),
            None => default_tab_item(tab, is_selected, &config, resolver),
        });
        bar.at(now)
            .render(Self::bar_area(&config, area), buf, &mut state.bar);
        state.legacy_tabs.clear();
    }

    fn render_legacy(self, area: Rect, buf: &mut Buffer, state: &mut AdaptiveTabState<T>) {
        let selected = state.selected();
        let titles_area = Rect { height: area.height.min(1), ..area };
        let content_area = Rect {
            y: area.y + titles_area.height,
            height: area.height - titles_area.height,
            ..area
        };

        let titles: Vec<Line> = T::all().iter().map(|tab| Line::from(tab.raw_value())).collect();
        Tabs::new(titles)
            .select(selected.index())
            .style(Style::default().fg(self.config.inactive_tint))
            .highlight_style(
                Style::default()
                    .fg(self.config.active_tint)
                    .add_modifier(Modifier::BOLD),
            )
            .divider(LEGACY_DIVIDER)
            .render(titles_area, buf);

        state.legacy_tabs = legacy_tab_bounds::<T>(titles_area);
        state.bar.clear_bounds();

        (self.content)(selected, content_area, buf);
    }
}

/// Title bounds as `Tabs` lays them out: one column of padding either side,
/// a one-column divider between titles
fn legacy_tab_bounds<T: TabItem>(area: Rect) -> Vec<TabBounds> {
    if area.width == 0 || area.height == 0 {
        return Vec::new();
    }

    let mut bounds = Vec::new();
    let mut current_x = area.x;
    for tab in T::all() {
        if current_x >= area.right() {
            break;
        }
        let tab_width = (Line::from(tab.raw_value()).width() as u16 + 2).min(area.right() - current_x);
        bounds.push(TabBounds {
            x: current_x,
            y: area.y,
            width: tab_width,
            height: 1,
        });
        current_x = current_x.saturating_add(tab_width + Line::from(LEGACY_DIVIDER).width() as u16);
    }
    bounds
}

impl<'a, T, C> StatefulWidget for AdaptiveTabView<'a, T, C>
where
    T: TabItem,
    C: Fn(T, Rect, &mut Buffer),
{
    type State = AdaptiveTabState<T>;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let now = self.now.unwrap_or_else(Instant::now);
        let area = area.intersection(buf.area);

        let strategy = RenderStrategy::select(self.probe);
        if state.strategy != Some(strategy) {
            log::debug!("adaptive tab view strategy: {:?}", strategy);
            state.strategy = Some(strategy);
        }

        match strategy {
            RenderStrategy::Modern => self.render_modern(area, buf, state, now),
            RenderStrategy::Legacy => self.render_legacy(area, buf, state),
        }
    }
}

/// Content-padding helper
///
/// Reserves `bar_height` rows at the bottom of an area so content is not
/// hidden under the floating glass bar. A no-op when the glass bar is not
/// drawn.
#[derive(Clone, Copy)]
pub struct TabBarPadding<'a> {
    pub bar_height: u16,
    pub probe: &'a dyn CapabilityProbe,
}

impl<'a> TabBarPadding<'a> {
    pub fn new(bar_height: u16, probe: &'a dyn CapabilityProbe) -> Self {
        Self { bar_height, probe }
    }

    pub fn apply(&self, area: Rect) -> Rect {
        if !self.probe.supports_glass() {
            return area;
        }
        Rect {
            height: area.height.saturating_sub(self.bar_height),
            ..area
        }
    }
}

/// Pad `area` for a bar drawn with `config`
pub fn tab_bar_padding(area: Rect, config: &TabBarConfig, probe: &dyn CapabilityProbe) -> Rect {
    TabBarPadding::new(config.bar_height, probe).apply(area)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FixedProbe;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
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
            .with_bar_height(4)
    }

    fn write_name(tab: Tab, area: Rect, buf: &mut Buffer) {
        if area.height > 0 {
            buf.set_string(area.x, area.y, tab.raw_value(), Style::default());
        }
    }

    fn render(probe: &dyn CapabilityProbe, state: &mut AdaptiveTabState<Tab>, now: Instant) -> Buffer {
        let area = Rect::new(0, 0, 40, 10);
        let mut buf = Buffer::empty(area);
        AdaptiveTabView::new(probe, write_name)
            .config(config())
            .at(now)
            .render(area, &mut buf, state);
        buf
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
    }

    #[test]
    fn test_modern_floats_bar_over_content() {
        let probe = FixedProbe(true);
        let mut state = AdaptiveTabState::new(Binding::new(Tab::Home));
        let buf = render(&probe, &mut state, Instant::now());

        assert_eq!(state.strategy(), Some(RenderStrategy::Modern));
        assert!(row_text(&buf, 0).starts_with("Home"));
        // Bar area is the bottom 4 rows inset by 2 columns; capsule centered in it
        assert_eq!(state.bar().bounds(), Some(Rect::new(6, 6, 28, 4)));
        assert!(state.legacy_tab_bounds().is_empty());
    }

    #[test]
    fn test_legacy_uses_builtin_tabs() {
        let probe = FixedProbe(false);
        let mut state = AdaptiveTabState::new(Binding::new(Tab::Notifications));
        let buf = render(&probe, &mut state, Instant::now());

        assert_eq!(state.strategy(), Some(RenderStrategy::Legacy));
        assert_eq!(row_text(&buf, 0).trim_end(), " Home │ Notifications │ Settings");
        assert_eq!(buf[(8, 0)].fg, config().active_tint);
        assert_eq!(buf[(1, 0)].fg, config().inactive_tint);
        // Content starts below the titles; no glass capsule anywhere
        assert!(row_text(&buf, 1).starts_with("Notifications"));
        assert_eq!(state.bar().bounds(), None);
    }

    #[test]
    fn test_padding_only_when_glass_available() {
        let area = Rect::new(0, 0, 40, 10);
        assert_eq!(
            tab_bar_padding(area, &config(), &FixedProbe(true)),
            Rect::new(0, 0, 40, 6)
        );
        // Capability unavailable: no-op
        assert_eq!(tab_bar_padding(area, &config(), &FixedProbe(false)), area);
        assert_eq!(TabBarPadding::new(20, &FixedProbe(true)).apply(area).height, 0);
    }

    #[test]
    fn test_keys_wrap_around() {
        let binding = Binding::new(Tab::Home);
        let mut state = AdaptiveTabState::new(binding.clone());
        let now = Instant::now();

        assert!(state.apply(TabEvent::Previous, now));
        assert_eq!(binding.get(), Tab::Settings);
        assert!(state.apply(TabEvent::Next, now));
        assert_eq!(binding.get(), Tab::Home);
        assert!(state.apply(TabEvent::Jump(1), now));
        assert_eq!(binding.get(), Tab::Notifications);
        assert!(!state.apply(TabEvent::Jump(1), now));
        assert!(!state.apply(TabEvent::Jump(7), now));
        assert_eq!(binding.get(), Tab::Notifications);
    }

    #[test]
    fn test_key_selection_slides_glass_highlight() {
        let probe = FixedProbe(true);
        let binding = Binding::new(Tab::Home);
        let mut state = AdaptiveTabState::new(binding.clone());
        let now = Instant::now();
        render(&probe, &mut state, now);

        let key = Event::Key(KeyEvent::new(KeyCode::Right, KeyModifiers::NONE));
        assert_eq!(state.handle_event(&key, now), TabEvent::Next);
        render(&probe, &mut state, now);
        assert_eq!(state.bar().highlighted_segment(), 1);
    }

    #[test]
    fn test_modern_click_goes_to_bar() {
        let probe = FixedProbe(true);
        let binding = Binding::new(Tab::Home);
        let mut state = AdaptiveTabState::new(binding.clone());
        let now = Instant::now();
        render(&probe, &mut state, now);

        let settings = state.bar().calculate_tab_bounds()[2];
        let click = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: settings.x,
            row: settings.y,
            modifiers: KeyModifiers::NONE,
        });
        state.handle_event(&click, now);
        assert_eq!(binding.get(), Tab::Settings);
    }

    #[test]
    fn test_legacy_click_on_title() {
        let probe = FixedProbe(false);
        let binding = Binding::new(Tab::Home);
        let mut state = AdaptiveTabState::new(binding.clone());
        let now = Instant::now();
        render(&probe, &mut state, now);

        // " Home │ Notifications │ Settings "
        assert_eq!(state.legacy_tab_bounds()[1], TabBounds { x: 7, y: 0, width: 15, height: 1 });
        assert!(state.apply(TabEvent::Click { column: 25, row: 0 }, now));
        assert_eq!(binding.get(), Tab::Settings);
        // Clicks on content or where the glass bar would be do nothing
        assert!(!state.apply(TabEvent::Click { column: 20, row: 8 }, now));
        assert_eq!(binding.get(), Tab::Settings);
    }

    #[test]
    fn test_custom_item_view() {
        let probe = FixedProbe(true);
        let mut state = AdaptiveTabState::new(Binding::new(Tab::Home));
        let area = Rect::new(0, 0, 40, 10);
        let mut buf = Buffer::empty(area);
        AdaptiveTabView::new(&probe, write_name)
            .config(config())
            .item_view(|tab: Tab, selected: bool| TabItemView {
                icon: String::new(),
                label: tab.raw_value()[..1].to_string(),
                tint: if selected { Color::Yellow } else { Color::White },
                bold: false,
            })
            .at(Instant::now())
            .render(area, &mut buf, &mut state);

        let row = state.bar().row().unwrap();
        let labels = row_text(&buf, row.y);
        assert!(labels.contains('H'));
        assert!(labels.contains('N'));
        assert!(!labels.contains("Home"));
    }
}
