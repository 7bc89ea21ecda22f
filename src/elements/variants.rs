// Tab Bar Variants
// Ready-made bars: icon + label, icon only, and the compact badge + icons layout

use ratatui::{
    buffer::Buffer,
    layout::{Rect, Size},
    widgets::StatefulWidget,
};
use std::marker::PhantomData;
use std::time::Instant;

use crate::constants::{BADGE_SIZE, ICON_ONLY_ITEM_SIZE};
use crate::core::{Binding, TabBarConfig, TabItem};
use crate::elements::floating_indicator::{FloatingIndicator, FloatingIndicatorState};
use crate::elements::glass_tab_bar::{GlassTabBar, GlassTabBarState};
use crate::elements::tab_item_view::{default_tab_item, icon_tab_item, TabItemView};
use crate::utilities::{SymbolResolver, SymbolTable};

/// Glass bar with the default icon-above-label items
pub struct IconLabelTabBar<'r, T> {
    config: TabBarConfig,
    resolver: &'r dyn SymbolResolver,
    now: Option<Instant>,
    _marker: PhantomData<T>,
}

impl<'r, T: TabItem> IconLabelTabBar<'r, T> {
    pub fn new(config: TabBarConfig) -> Self {
        Self {
            config,
            resolver: SymbolTable::shared(),
            now: None,
            _marker: PhantomData,
        }
    }

    pub fn resolver(mut self, resolver: &'r dyn SymbolResolver) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn at(mut self, now: Instant) -> Self {
        self.now = Some(now);
        self
    }
}

impl<'r, T: TabItem> StatefulWidget for IconLabelTabBar<'r, T> {
    type State = GlassTabBarState<T>;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let config = self.config;
        let resolver = self.resolver;
        let bar = GlassTabBar::new(config, move |tab: T, selected: bool| {
            default_tab_item(tab, selected, &config, resolver)
        });
        match self.now {
            Some(now) => bar.at(now).render(area, buf, state),
            None => bar.render(area, buf, state),
        }
    }
}

/// Glass bar showing icons only, in narrow slots
pub struct IconOnlyTabBar<'r, T> {
    config: TabBarConfig,
    resolver: &'r dyn SymbolResolver,
    now: Option<Instant>,
    _marker: PhantomData<T>,
}

impl<'r, T: TabItem> IconOnlyTabBar<'r, T> {
    /// Uses the icon-only item footprint regardless of the config's item size
    pub fn new(config: TabBarConfig) -> Self {
        let (width, height) = ICON_ONLY_ITEM_SIZE;
        Self {
            config: config.with_item_size(width, height),
            resolver: SymbolTable::shared(),
            now: None,
            _marker: PhantomData,
        }
    }

    pub fn resolver(mut self, resolver: &'r dyn SymbolResolver) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn at(mut self, now: Instant) -> Self {
        self.now = Some(now);
        self
    }

    pub fn config(&self) -> &TabBarConfig {
        &self.config
    }
}

impl<'r, T: TabItem> StatefulWidget for IconOnlyTabBar<'r, T> {
    type State = GlassTabBarState<T>;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let config = self.config;
        let resolver = self.resolver;
        let bar = GlassTabBar::new(config, move |tab: T, selected: bool| {
            icon_tab_item(tab, selected, &config, resolver)
        });
        match self.now {
            Some(now) => bar.at(now).render(area, buf, state),
            None => bar.render(area, buf, state),
        }
    }
}

/// State for the compact layout: the badge and the icon bar share one binding
#[derive(Debug, Clone)]
pub struct CompactTabBarState<T: TabItem> {
    pub floating: FloatingIndicatorState<T>,
    pub bar: GlassTabBarState<T>,
}

impl<T: TabItem> CompactTabBarState<T> {
    pub fn new(binding: Binding<T>) -> Self {
        Self {
            floating: FloatingIndicatorState::new(binding.clone()),
            bar: GlassTabBarState::new(binding),
        }
    }

    pub fn binding(&self) -> &Binding<T> {
        self.bar.binding()
    }
}

/// Floating badge on the left, one column gap, icon-only bar on the right
pub struct CompactTabBar<'r, T> {
    config: TabBarConfig,
    resolver: &'r dyn SymbolResolver,
    now: Option<Instant>,
    _marker: PhantomData<T>,
}

impl<'r, T: TabItem> CompactTabBar<'r, T> {
    pub fn new(config: TabBarConfig) -> Self {
        Self {
            config,
            resolver: SymbolTable::shared(),
            now: None,
            _marker: PhantomData,
        }
    }

    pub fn resolver(mut self, resolver: &'r dyn SymbolResolver) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn at(mut self, now: Instant) -> Self {
        self.now = Some(now);
        self
    }

    /// Total footprint: badge + gap + icon-only capsule
    pub fn size(config: &TabBarConfig) -> Size {
        let (item_width, item_height) = ICON_ONLY_ITEM_SIZE;
        let icon_config = config.with_item_size(item_width, item_height);
        let bar = GlassTabBar::<T, fn(T, bool) -> TabItemView>::capsule_size(&icon_config);
        Size::new(
            BADGE_SIZE.0.saturating_add(1).saturating_add(bar.width),
            BADGE_SIZE.1.max(bar.height),
        )
    }
}

impl<'r, T: TabItem> StatefulWidget for CompactTabBar<'r, T> {
    type State = CompactTabBarState<T>;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let now = self.now.unwrap_or_else(Instant::now);
        let area = area.intersection(buf.area);

        let size = Self::size(&self.config);
        let width = size.width.min(area.width);
        let height = size.height.min(area.height);
        let group = Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + (area.height - height) / 2,
            width,
            height,
        };

        let badge_width = BADGE_SIZE.0.min(group.width);
        let badge = Rect {
            width: badge_width,
            ..group
        };
        let gap = 1.min(group.width - badge_width);
        let bar = Rect {
            x: group.x + badge_width + gap,
            width: group.width - badge_width - gap,
            ..group
        };

        FloatingIndicator::new(self.config)
            .resolver(self.resolver)
            .at(now)
            .render(badge, buf, &mut state.floating);
        IconOnlyTabBar::new(self.config)
            .resolver(self.resolver)
            .at(now)
            .render(bar, buf, &mut state.bar);
    }
}
