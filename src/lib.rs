// Glass Tabs Library
// Adaptive, animated tab bar components for ratatui terminal interfaces

// Core infrastructure - tab descriptors, selection binding, capability probing
pub mod core;

// Elements - drawable items, segmented control, bars
pub mod elements;

// Managers - sliding indicator adapter and the adaptive container
pub mod managers;

// Utilities - colour math, glass fill, symbol resolution
pub mod utilities;

// Runtime configuration (YAML)
pub mod config;
pub mod config_validation;

// Application constants
pub mod constants;

// Re-export commonly used items for convenience
pub use core::{
    Binding, CapabilityProbe, EventHandler, FixedProbe, RenderStrategy, StylePreference,
    TabBarConfig, TabEvent, TabItem, TerminalProbe,
};
pub use elements::{
    default_tab_item, icon_tab_item, CompactTabBar, CompactTabBarState, FloatingIndicator,
    FloatingIndicatorState, GlassTabBar, GlassTabBarState, IconLabelTabBar, IconOnlyTabBar,
    SegmentedControl, TabItemView,
};
pub use managers::{tab_bar_padding, AdaptiveTabState, AdaptiveTabView, SlidingIndicator, SyncAction, TabBarPadding};
pub use utilities::{glyph_for, SymbolResolver, SymbolTable};
