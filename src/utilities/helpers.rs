// Helper utilities for tab bar components
use ratatui::{buffer::Buffer, layout::Rect, style::Color};
use unicode_width::UnicodeWidthChar;

/// Backdrop assumed under cells whose background is `Color::Reset`
pub const BACKDROP: Color = Color::Rgb(18, 18, 20);

/// `0xRRGGBB` as a ratatui colour
pub fn hex_color(rgb: u32) -> Color {
    Color::Rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
}

/// Approximate RGB components of a color
/// Indexed colors have no fixed RGB value and return `None`
pub fn to_rgb(color: Color) -> Option<(u8, u8, u8)> {
    let rgb = match color {
        Color::Rgb(r, g, b) => (r, g, b),
        Color::Reset => return to_rgb(BACKDROP),
        Color::Black => (0, 0, 0),
        Color::Red => (205, 49, 49),
        Color::Green => (13, 188, 121),
        Color::Yellow => (229, 229, 16),
        Color::Blue => (36, 114, 200),
        Color::Magenta => (188, 63, 188),
        Color::Cyan => (17, 168, 205),
        Color::Gray => (204, 204, 204),
        Color::DarkGray => (118, 118, 118),
        Color::LightRed => (241, 76, 76),
        Color::LightGreen => (35, 209, 139),
        Color::LightYellow => (245, 245, 67),
        Color::LightBlue => (59, 142, 234),
        Color::LightMagenta => (214, 112, 214),
        Color::LightCyan => (41, 184, 219),
        Color::White => (255, 255, 255),
        Color::Indexed(_) => return None,
    };
    Some(rgb)
}

/// Linear blend from `from` (t = 0) to `to` (t = 1)
/// Colors without RGB values snap at the midpoint instead
pub fn blend(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (to_rgb(from), to_rgb(to)) {
        (Some((r1, g1, b1)), Some((r2, g2, b2))) => {
            let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ => {
            if t < 0.5 {
                from
            } else {
                to
            }
        }
    }
}

/// Cubic ease-in-out over [0, 1]
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Tint every cell background in `area` toward `tint`, keeping what is underneath
/// partly visible
pub fn glass_fill(buf: &mut Buffer, area: Rect, tint: Color, opacity: f32) {
    let area = area.intersection(buf.area);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                let under = cell.bg;
                cell.set_bg(blend(under, tint, opacity));
            }
        }
    }
}

/// Center `text` inside `width` columns by display width, truncating if needed
///
/// Wide characters (CJK, most emoji) count as two columns; one that would
/// straddle the right edge is dropped.
pub fn center_text(text: &str, width: u16) -> (u16, String) {
    let width = width as usize;
    let mut used = 0;
    let mut fitted = String::new();
    for c in text.chars() {
        let char_width = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + char_width > width {
            break;
        }
        used += char_width;
        fitted.push(c);
    }
    (((width - used) / 2) as u16, fitted)
}
