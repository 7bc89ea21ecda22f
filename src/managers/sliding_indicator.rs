// Sliding Indicator Adapter
// Borrows the segmented control's highlight animation and relays taps into the selection binding

use ratatui::{
    buffer::Buffer,
    layout::{Rect, Size},
    style::Color,
};
use std::time::Instant;

use crate::core::{Binding, TabItem};
use crate::elements::SegmentedControl;

/// Outcome of a sync check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncAction {
    /// Control already matched the binding
    None,
    /// Control was moved to match the binding
    Resynced { from: usize, to: usize },
}

/// Adapter between a `Binding<T>` and a `SegmentedControl`
///
/// The control is used only for its highlight: titles are empty, glyphs are
/// hidden, and its background is cleared. The adapter never owns the
/// selection; it mirrors the binding into the control and relays taps back.
#[derive(Debug, Clone)]
pub struct SlidingIndicator<T: TabItem> {
    control: SegmentedControl,
    binding: Binding<T>,
    size: Size,
}

impl<T: TabItem> SlidingIndicator<T> {
    pub fn new(size: Size, bar_tint: Color, binding: Binding<T>) -> Self {
        let mut control = SegmentedControl::new(T::count());
        control.set_selected_segment(binding.get().index(), None);
        control.set_show_segment_glyphs(false);
        control.set_highlight_tint(bar_tint);
        control.set_background(Color::Reset);

        Self {
            control,
            binding,
            size,
        }
    }

    pub fn control(&self) -> &SegmentedControl {
        &self.control
    }

    pub fn binding(&self) -> &Binding<T> {
        &self.binding
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn resize(&mut self, size: Size) {
        self.size = size;
    }

    pub fn set_tint(&mut self, bar_tint: Color) {
        self.control.set_highlight_tint(bar_tint);
    }

    /// Bring the control in line with the binding
    ///
    /// Called once per render pass; a selection made elsewhere (host code,
    /// keyboard) slides the highlight exactly like a tap does.
    pub fn update(&mut self, now: Instant) -> SyncAction {
        let from = self.control.selected_segment();
        let to = self.binding.get().index();
        if from == to {
            return SyncAction::None;
        }

        log::debug!("sliding indicator resync: segment {} -> {}", from, to);
        self.control.set_selected_segment(to, Some(now));
        SyncAction::Resynced { from, to }
    }

    /// Relay a selection reported by the control into the binding
    ///
    /// Out-of-range indices leave the binding untouched. Returns whether the
    /// binding was written.
    pub fn value_changed(&mut self, index: isize) -> bool {
        let tab = usize::try_from(index).ok().and_then(T::at);
        match tab {
            Some(tab) => {
                self.binding.set(tab);
                true
            }
            None => {
                log::warn!(
                    "ignoring segment index {} outside 0..{}",
                    index,
                    T::count()
                );
                false
            }
        }
    }

    /// Deliver a click to the control; `area` is where the control was drawn
    pub fn tap(&mut self, area: Rect, column: u16, row: u16, now: Instant) -> bool {
        match self.control.tap(area, column, row, now) {
            Some(index) => self.value_changed(index),
            None => false,
        }
    }

    /// Draw the highlight into `area` (clipped to the adapter's size)
    pub fn render(&self, area: Rect, buf: &mut Buffer, now: Instant) {
        let area = Rect {
            width: area.width.min(self.size.width),
            height: area.height.min(self.size.height),
            ..area
        };
        self.control.render(area, buf, now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::tab_items! {
        enum Tab {
            Home => ("Home", "house.fill", "house"),
            Notifications => ("Notifications", "bell.fill", "bell"),
            Settings => ("Settings", "gearshape.fill", "gearshape"),
        }
    }

    fn indicator(binding: &Binding<Tab>) -> SlidingIndicator<Tab> {
        SlidingIndicator::new(Size::new(30, 2), Color::Blue, binding.clone())
    }

    #[test]
    fn test_creation_mirrors_binding() {
        let binding = Binding::new(Tab::Notifications);
        let indicator = indicator(&binding);
        let control = indicator.control();

        assert_eq!(control.segment_count(), 3);
        assert_eq!(control.selected_segment(), 1);
        assert_eq!(control.highlight_tint(), Color::Blue);
        assert_eq!(control.background(), Color::Reset);
        assert!(!control.shows_segment_glyphs());
    }

    #[test]
    fn test_setting_current_value_is_noop() {
        let binding = Binding::new(Tab::Home);
        let mut indicator = indicator(&binding);

        binding.set(Tab::Home);
        assert_eq!(indicator.update(Instant::now()), SyncAction::None);
    }

    #[test]
    fn test_reported_indices_write_binding() {
        let binding = Binding::new(Tab::Home);
        let mut indicator = indicator(&binding);

        for (position, &tab) in Tab::all().iter().enumerate() {
            assert!(indicator.value_changed(position as isize));
            assert_eq!(binding.get(), tab);
        }
    }

    #[test]
    fn test_out_of_range_leaves_binding() {
        let binding = Binding::new(Tab::Notifications);
        let mut indicator = indicator(&binding);

        assert!(!indicator.value_changed(3));
        assert!(!indicator.value_changed(-1));
        assert!(!indicator.value_changed(isize::MAX));
        assert_eq!(binding.get(), Tab::Notifications);
    }

    #[test]
    fn test_home_notifications_settings_scenario() {
        let binding = Binding::new(Tab::Home);
        let mut indicator = indicator(&binding);
        let area = Rect::new(0, 0, 30, 2);
        let now = Instant::now();

        // User taps the third segment
        assert!(indicator.tap(area, 25, 0, now));
        assert_eq!(binding.get(), Tab::Settings);
        assert_eq!(Tab::Settings.index(), 2);
        assert_eq!(indicator.control().selected_segment(), 2);
        assert_eq!(indicator.update(now), SyncAction::None);

        // Host sets the binding directly
        binding.set(Tab::Notifications);
        assert_eq!(indicator.update(now), SyncAction::Resynced { from: 2, to: 1 });
        assert_eq!(indicator.control().selected_segment(), 1);
    }

    #[test]
    fn test_render_clips_to_size() {
        let binding = Binding::new(Tab::Settings);
        let mut indicator = indicator(&binding);
        indicator.resize(Size::new(9, 1));

        let mut buf = Buffer::empty(Rect::new(0, 0, 30, 2));
        indicator.render(Rect::new(0, 0, 30, 2), &mut buf, Instant::now());

        // Three segments of 3 columns in a 9x1 control
        assert_eq!(buf[(6, 0)].bg, Color::Blue);
        assert_eq!(buf[(8, 0)].bg, Color::Blue);
        assert_eq!(buf[(9, 0)].bg, Color::Reset);
        assert_eq!(buf[(6, 1)].bg, Color::Reset);
    }

    crate::tab_items! {
        enum Solo {
            Only => ("Only", "star.fill", "star"),
        }
    }

    crate::tab_items! {
        enum Wide {
            Inbox => ("Inbox", "tray.fill", "tray"),
            Drafts => ("Drafts", "doc.fill", "doc"),
            Sent => ("Sent", "paperplane.fill", "paperplane"),
            Archive => ("Archive", "archivebox.fill", "archivebox"),
            Trash => ("Trash", "trash.fill", "trash"),
        }
    }

    #[test]
    fn test_single_variant_enum() {
        let binding = Binding::new(Solo::Only);
        let mut indicator = SlidingIndicator::new(Size::new(30, 2), Color::Blue, binding.clone());
        let area = Rect::new(0, 0, 30, 2);
        let now = Instant::now();

        assert_eq!(indicator.control().segment_count(), 1);
        assert_eq!(indicator.control().selected_segment(), 0);
        assert!(indicator.value_changed(0));
        assert!(!indicator.value_changed(1));
        assert!(!indicator.value_changed(-1));
        assert_eq!(binding.get(), Solo::Only);

        // The lone segment spans the whole width; one past it is rejected
        assert!(indicator.tap(area, 29, 1, now));
        assert!(!indicator.tap(area, 30, 1, now));
        assert_eq!(indicator.update(now), SyncAction::None);
    }

    #[test]
    fn test_five_variant_enum() {
        let binding = Binding::new(Wide::Inbox);
        let mut indicator = SlidingIndicator::new(Size::new(30, 2), Color::Blue, binding.clone());
        let now = Instant::now();

        assert_eq!(indicator.control().segment_count(), 5);
        for (position, &tab) in Wide::all().iter().enumerate() {
            assert!(indicator.value_changed(position as isize));
            assert_eq!(binding.get(), tab);
            assert_eq!(tab.index(), position);
        }
        assert!(!indicator.value_changed(5));
        assert!(!indicator.value_changed(-1));
        assert_eq!(binding.get(), Wide::Trash);

        assert_eq!(indicator.update(now), SyncAction::Resynced { from: 0, to: 4 });

        // Six-column segments: column 14 is the third one
        assert!(indicator.tap(Rect::new(0, 0, 30, 2), 14, 0, now));
        assert_eq!(binding.get(), Wide::Sent);
        assert_eq!(indicator.control().selected_segment(), 2);
    }
}
