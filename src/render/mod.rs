// Render module - demo screen rendering functions

pub mod content;
pub mod header;

pub use content::render_tab_content;
pub use header::{render_header, render_status, HEADER_HEIGHT};
