// Utilities module
// Color math, glass fill, and symbol resolution

pub mod helpers;
pub mod symbols;

pub use helpers::*;
pub use symbols::{glyph_for, SymbolResolver, SymbolTable, FALLBACK_GLYPH};
