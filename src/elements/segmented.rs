// Segmented Control
// N equal segments with a highlight that slides to the selected one

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
};
use std::time::{Duration, Instant};

use crate::constants::SLIDE_DURATION;
use crate::utilities::{center_text, ease_in_out};

/// In-flight highlight movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Slide {
    from: usize,
    started: Instant,
}

/// Segmented selector with a built-in sliding highlight
///
/// Selecting a segment with a timestamp starts a slide from the previous
/// segment; without one the highlight jumps. Titles are drawn only while
/// segment glyphs are shown.
#[derive(Debug, Clone)]
pub struct SegmentedControl {
    titles: Vec<String>,
    selected: usize,
    highlight_tint: Color,
    background: Color,
    show_segment_glyphs: bool,
    slide: Option<Slide>,
    duration: Duration,
}

impl SegmentedControl {
    /// Control with `segments` untitled segments, first one selected
    pub fn new(segments: usize) -> Self {
        Self {
            titles: vec![String::new(); segments],
            selected: 0,
            highlight_tint: Color::Gray,
            background: Color::Reset,
            show_segment_glyphs: true,
            slide: None,
            duration: SLIDE_DURATION,
        }
    }

    pub fn segment_count(&self) -> usize {
        self.titles.len()
    }

    pub fn selected_segment(&self) -> usize {
        self.selected
    }

    pub fn highlight_tint(&self) -> Color {
        self.highlight_tint
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn shows_segment_glyphs(&self) -> bool {
        self.show_segment_glyphs
    }

    pub fn set_title(&mut self, segment: usize, title: &str) {
        if let Some(slot) = self.titles.get_mut(segment) {
            *slot = title.to_string();
        }
    }

    pub fn set_highlight_tint(&mut self, color: Color) {
        self.highlight_tint = color;
    }

    /// `Color::Reset` leaves whatever is underneath visible
    pub fn set_background(&mut self, color: Color) {
        self.background = color;
    }

    pub fn set_show_segment_glyphs(&mut self, show: bool) {
        self.show_segment_glyphs = show;
    }

    pub fn set_slide_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }

    /// Select a segment; ignored when out of range
    ///
    /// `animate_from` starts a slide at that instant.
    pub fn set_selected_segment(&mut self, segment: usize, animate_from: Option<Instant>) {
        if segment >= self.segment_count() || segment == self.selected {
            return;
        }
        self.slide = animate_from.map(|started| Slide {
            from: self.selected,
            started,
        });
        self.selected = segment;
    }

    /// Whether a slide is still running at `now`
    pub fn is_animating(&self, now: Instant) -> bool {
        self.slide
            .map(|slide| now.saturating_duration_since(slide.started) < self.duration)
            .unwrap_or(false)
    }

    /// Left edge of `segment` within `area`
    fn segment_start(&self, area: Rect, segment: usize) -> u16 {
        let count = self.segment_count().max(1) as u32;
        area.x + (segment as u32 * area.width as u32 / count) as u16
    }

    /// Column span `[x, x + width)` of a segment
    pub fn segment_bounds(&self, area: Rect, segment: usize) -> (u16, u16) {
        let start = self.segment_start(area, segment);
        let end = self.segment_start(area, segment + 1);
        (start, end.saturating_sub(start))
    }

    /// Raw segment index under `column`
    ///
    /// Columns left of the control give `-1`, columns right of it give
    /// `segment_count()`; callers decide what to do with those.
    pub fn segment_at(&self, area: Rect, column: u16) -> isize {
        if column < area.x {
            return -1;
        }
        (0..self.segment_count())
            .find(|&segment| {
                let (start, width) = self.segment_bounds(area, segment);
                column >= start && column < start + width
            })
            .map(|segment| segment as isize)
            .unwrap_or(self.segment_count() as isize)
    }

    /// User tap: select the segment under the click (animated) and report its
    /// raw index
    ///
    /// Returns `None` when the row is outside the control.
    pub fn tap(&mut self, area: Rect, column: u16, row: u16, now: Instant) -> Option<isize> {
        if row < area.y || row >= area.bottom() {
            return None;
        }
        let index = self.segment_at(area, column);
        if index >= 0 {
            self.set_selected_segment(index as usize, Some(now));
        }
        Some(index)
    }

    /// Highlight column span at `now`, interpolated while sliding
    pub fn highlight_span(&self, area: Rect, now: Instant) -> (u16, u16) {
        let (to_x, to_width) = self.segment_bounds(area, self.selected);

        let slide = match self.slide {
            Some(slide) if self.is_animating(now) => slide,
            _ => return (to_x, to_width),
        };

        let elapsed = now.saturating_duration_since(slide.started).as_secs_f32();
        let progress = ease_in_out(elapsed / self.duration.as_secs_f32().max(f32::EPSILON));
        let (from_x, from_width) = self.segment_bounds(area, slide.from);

        let lerp = |a: u16, b: u16| (a as f32 + (b as f32 - a as f32) * progress).round() as u16;
        (lerp(from_x, to_x), lerp(from_width, to_width))
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, now: Instant) {
        let area = area.intersection(buf.area);
        if area.width == 0 || area.height == 0 || self.segment_count() == 0 {
            return;
        }

        if self.background != Color::Reset {
            buf.set_style(area, Style::default().bg(self.background));
        }

        let (x, width) = self.highlight_span(area, now);
        let highlight = Rect {
            x,
            y: area.y,
            width,
            height: area.height,
        }
        .intersection(area);
        buf.set_style(highlight, Style::default().bg(self.highlight_tint));

        if self.show_segment_glyphs {
            let title_row = area.y + area.height / 2;
            for (segment, title) in self.titles.iter().enumerate() {
                let (start, width) = self.segment_bounds(area, segment);
                let (pad, text) = center_text(title, width);
                buf.set_stringn(start + pad, title_row, &text, width as usize, Style::default());
            }
        }
    }
}
