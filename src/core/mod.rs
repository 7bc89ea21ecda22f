// Core infrastructure module
// Provides foundational systems that other modules depend on

pub mod bar_config;
pub mod binding;
pub mod capability;
pub mod events;
pub mod tab_item;

pub use bar_config::TabBarConfig;
pub use binding::Binding;
pub use capability::{CapabilityProbe, FixedProbe, RenderStrategy, StylePreference, TerminalProbe};
pub use events::{EventHandler, TabEvent};
pub use tab_item::TabItem;
