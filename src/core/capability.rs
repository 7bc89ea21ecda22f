// Platform Capability
// Decides whether the glass tab bar can be drawn on this terminal

use serde::Deserialize;

/// Answers whether the modern glass style is available
pub trait CapabilityProbe {
    fn supports_glass(&self) -> bool;
}

/// Probe that always returns the same answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedProbe(pub bool);

impl CapabilityProbe for FixedProbe {
    fn supports_glass(&self) -> bool {
        self.0
    }
}

/// Probe backed by the terminal's advertised capabilities
///
/// The environment is read once, at construction, so the answer stays the
/// same for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalProbe {
    glass: bool,
}

impl TerminalProbe {
    /// Read `COLORTERM` and `TERM` from the process environment
    pub fn from_env() -> Self {
        let colorterm = std::env::var("COLORTERM").ok();
        let term = std::env::var("TERM").ok();
        let glass = Self::detect(colorterm.as_deref(), term.as_deref());
        log::debug!(
            "terminal probe: COLORTERM={:?} TERM={:?} -> glass={}",
            colorterm,
            term,
            glass
        );
        Self { glass }
    }

    /// Glass needs 24-bit colour (for the translucent fill) and a terminal
    /// that draws box-drawing glyphs
    pub fn detect(colorterm: Option<&str>, term: Option<&str>) -> bool {
        let truecolor = colorterm
            .map(|value| {
                let value = value.to_lowercase();
                value == "truecolor" || value == "24bit"
            })
            .unwrap_or(false);

        let capable_term = match term {
            Some(value) => !matches!(value, "dumb" | "linux" | "vt100" | ""),
            None => false,
        };

        truecolor && capable_term
    }
}

impl CapabilityProbe for TerminalProbe {
    fn supports_glass(&self) -> bool {
        self.glass
    }
}

/// Style requested by configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum StylePreference {
    /// Ask the terminal
    Auto,
    /// Always draw the glass bar
    Glass,
    /// Always use the built-in tabs
    Legacy,
}

impl From<String> for StylePreference {
    fn from(style: String) -> Self {
        Self::from_str(&style)
    }
}

impl Default for StylePreference {
    /// Style compiled in from config.yaml
    fn default() -> Self {
        Self::from_str(crate::core::bar_config::compiled::STYLE)
    }
}

impl StylePreference {
    /// Parse style from string (unknown values mean `Auto`)
    pub fn from_str(style: &str) -> Self {
        match style.to_lowercase().as_str() {
            "glass" | "modern" => StylePreference::Glass,
            "legacy" | "native" => StylePreference::Legacy,
            _ => StylePreference::Auto,
        }
    }

    /// Fold the preference and a detected capability into a fixed answer
    pub fn resolve(self, detected: &dyn CapabilityProbe) -> FixedProbe {
        match self {
            StylePreference::Auto => FixedProbe(detected.supports_glass()),
            StylePreference::Glass => FixedProbe(true),
            StylePreference::Legacy => FixedProbe(false),
        }
    }
}

/// How the adaptive container draws its tabs for one render pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStrategy {
    /// Floating glass bar over the content
    Modern,
    /// ratatui's built-in `Tabs` above the content
    Legacy,
}

impl RenderStrategy {
    pub fn select(probe: &dyn CapabilityProbe) -> Self {
        if probe.supports_glass() {
            RenderStrategy::Modern
        } else {
            RenderStrategy::Legacy
        }
    }
}
