// Symbol Resolution
// Maps opaque icon identifiers to terminal glyphs

use std::collections::HashMap;
use std::sync::OnceLock;

/// Glyph drawn when a symbol identifier is unknown
pub const FALLBACK_GLYPH: &str = "•";

/// Resolves icon identifiers (e.g. `"house.fill"`) to renderable glyphs
pub trait SymbolResolver {
    fn resolve(&self, id: &str) -> Option<&str>;
}

/// Resolve `id`, falling back to `FALLBACK_GLYPH`
pub fn glyph_for<'r>(resolver: &'r dyn SymbolResolver, id: &str) -> &'r str {
    resolver.resolve(id).unwrap_or(FALLBACK_GLYPH)
}

/// Built-in identifier → glyph pairs
/// Outline/filled pairs use hollow and solid glyphs where Unicode has both
const BUILTIN_SYMBOLS: &[(&str, &str)] = &[
    ("house", "⌂"),
    ("house.fill", "⌂"),
    ("bell", "♢"),
    ("bell.fill", "♦"),
    ("gearshape", "⚙"),
    ("gearshape.fill", "⚙"),
    ("gear", "⚙"),
    ("person", "☺"),
    ("person.fill", "☻"),
    ("magnifyingglass", "⌕"),
    ("star", "☆"),
    ("star.fill", "★"),
    ("heart", "♡"),
    ("heart.fill", "♥"),
    ("circle", "○"),
    ("circle.fill", "●"),
    ("square", "□"),
    ("square.fill", "■"),
    ("envelope", "✉"),
    ("envelope.fill", "✉"),
    ("folder", "▭"),
    ("folder.fill", "▬"),
    ("flag", "⚐"),
    ("flag.fill", "⚑"),
    ("music.note", "♪"),
    ("bookmark", "▯"),
    ("bookmark.fill", "▮"),
    ("clock", "◷"),
    ("clock.fill", "◷"),
    ("sun.max", "☼"),
    ("sun.max.fill", "☀"),
    ("cloud", "☁"),
    ("cloud.fill", "☁"),
    ("trash", "⌫"),
    ("plus", "+"),
    ("checkmark", "✓"),
    ("xmark", "✗"),
];

/// Table-backed resolver
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    glyphs: HashMap<String, String>,
}

impl SymbolTable {
    /// Empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Table pre-filled with the built-in symbols
    pub fn builtin() -> Self {
        let mut table = Self::new();
        for (id, glyph) in BUILTIN_SYMBOLS {
            table.insert(id, glyph);
        }
        table
    }

    /// Shared built-in table
    pub fn shared() -> &'static SymbolTable {
        static SHARED: OnceLock<SymbolTable> = OnceLock::new();
        SHARED.get_or_init(SymbolTable::builtin)
    }

    /// Add or replace a glyph
    pub fn insert(&mut self, id: &str, glyph: &str) {
        self.glyphs.insert(id.to_string(), glyph.to_string());
    }

    pub fn with(mut self, id: &str, glyph: &str) -> Self {
        self.insert(id, glyph);
        self
    }
}

impl SymbolResolver for SymbolTable {
    fn resolve(&self, id: &str) -> Option<&str> {
        self.glyphs.get(id).map(|glyph| glyph.as_str())
    }
}
