// Application constants

use std::time::Duration;

/// Time for the highlight to slide from one segment to another
pub const SLIDE_DURATION: Duration = Duration::from_millis(240);

/// Time for the floating indicator's cross-fade
pub const CROSSFADE_DURATION: Duration = Duration::from_millis(300);

/// Columns between the screen edge and the floating glass bar
pub const HORIZONTAL_INSET: u16 = 2;

/// How strongly the glass tint covers what is underneath (0 = clear, 1 = opaque)
pub const GLASS_OPACITY: f32 = 0.22;

/// Glass tint colour for the capsule fill
pub const GLASS_TINT: ratatui::style::Color = ratatui::style::Color::Rgb(235, 235, 245);

/// Columns of padding between the capsule border and the item row
pub const CAPSULE_PADDING: u16 = 1;

/// Icon-only item footprint (columns, rows)
pub const ICON_ONLY_ITEM_SIZE: (u16, u16) = (5, 1);

/// Floating indicator badge footprint (columns, rows)
pub const BADGE_SIZE: (u16, u16) = (5, 3);

/// Environment variable naming the log file for the demo binary
pub const LOG_FILE_ENV: &str = "GLASS_TABS_LOG";

/// Frame poll interval for the demo event loop (keeps animations moving)
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);
