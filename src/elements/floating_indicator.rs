// Floating Indicator
// Circular badge showing only the active tab's icon, cross-fading on change

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, BorderType, StatefulWidget, Widget},
};
use std::marker::PhantomData;
use std::time::Instant;

use crate::constants::{BADGE_SIZE, CROSSFADE_DURATION, GLASS_OPACITY, GLASS_TINT};
use crate::core::{Binding, TabBarConfig, TabItem};
use crate::utilities::{blend, glass_fill, glyph_for, SymbolResolver, SymbolTable, BACKDROP};

/// Icon visible at one instant of the cross-fade
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeFrame<T> {
    pub tab: T,
    /// 0 = invisible, 1 = fully drawn
    pub opacity: f32,
    /// Whether this is the icon being faded out
    pub outgoing: bool,
}

/// Frame-to-frame state of a floating indicator
#[derive(Debug, Clone)]
pub struct FloatingIndicatorState<T: TabItem> {
    binding: Binding<T>,
    shown: T,
    outgoing: Option<T>,
    changed_at: Option<Instant>,
    badge: Option<Rect>,
}

impl<T: TabItem> FloatingIndicatorState<T> {
    pub fn new(binding: Binding<T>) -> Self {
        let shown = binding.get();
        Self {
            binding,
            shown,
            outgoing: None,
            changed_at: None,
            badge: None,
        }
    }

    pub fn binding(&self) -> &Binding<T> {
        &self.binding
    }

    /// Badge drawn by the last render
    pub fn bounds(&self) -> Option<Rect> {
        self.badge
    }

    /// Pick up a selection change; the icon on screen becomes the outgoing one
    ///
    /// Returns whether a new cross-fade started.
    pub fn update(&mut self, now: Instant) -> bool {
        let current = self.binding.get();
        if current == self.shown {
            return false;
        }
        self.outgoing = Some(self.shown);
        self.shown = current;
        self.changed_at = Some(now);
        true
    }

    /// Icon and opacity at `now`
    ///
    /// The first half of the fade shows the outgoing icon fading out, the
    /// second half the incoming icon fading in.
    pub fn frame(&self, now: Instant) -> FadeFrame<T> {
        let settled = FadeFrame {
            tab: self.shown,
            opacity: 1.0,
            outgoing: false,
        };
        let (outgoing, started) = match (self.outgoing, self.changed_at) {
            (Some(outgoing), Some(started)) => (outgoing, started),
            _ => return settled,
        };

        let elapsed = now.saturating_duration_since(started);
        if elapsed >= CROSSFADE_DURATION {
            return settled;
        }

        let t = elapsed.as_secs_f32() / CROSSFADE_DURATION.as_secs_f32();
        if t < 0.5 {
            FadeFrame {
                tab: outgoing,
                opacity: 1.0 - t * 2.0,
                outgoing: true,
            }
        } else {
            FadeFrame {
                tab: self.shown,
                opacity: (t - 0.5) * 2.0,
                outgoing: false,
            }
        }
    }
}

/// Circular badge with the active tab's icon
pub struct FloatingIndicator<'r, T> {
    config: TabBarConfig,
    resolver: &'r dyn SymbolResolver,
    now: Option<Instant>,
    _marker: PhantomData<T>,
}

impl<'r, T: TabItem> FloatingIndicator<'r, T> {
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

    /// Render as of `now` instead of the wall clock
    pub fn at(mut self, now: Instant) -> Self {
        self.now = Some(now);
        self
    }

    /// Badge rect centered in `area`
    pub fn badge_area(area: Rect) -> Rect {
        let (width, height) = BADGE_SIZE;
        let width = width.min(area.width);
        let height = height.min(area.height);
        Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + (area.height - height) / 2,
            width,
            height,
        }
    }
}

impl<'r, T: TabItem> StatefulWidget for FloatingIndicator<'r, T> {
    type State = FloatingIndicatorState<T>;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let now = self.now.unwrap_or_else(Instant::now);
        state.update(now);

        let area = area.intersection(buf.area);
        if area.width == 0 || area.height == 0 {
            state.badge = None;
            return;
        }

        let badge = Self::badge_area(area);
        glass_fill(buf, badge, GLASS_TINT, GLASS_OPACITY);
        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(blend(self.config.bar_tint, GLASS_TINT, 0.5)))
            .render(badge, buf);
        state.badge = Some(badge);

        let frame = state.frame(now);
        let mut style = Style::default()
            .fg(blend(BACKDROP, self.config.active_tint, frame.opacity))
            .add_modifier(Modifier::BOLD);
        // Mid-fade the icon is softened
        if frame.opacity < 1.0 {
            style = style.add_modifier(Modifier::DIM);
        }

        let glyph = glyph_for(self.resolver, frame.tab.selected_symbol());
        let center_x = badge.x + badge.width / 2;
        let center_y = badge.y + badge.height / 2;
        buf.set_stringn(center_x, center_y, glyph, 1, style);
    }
}
