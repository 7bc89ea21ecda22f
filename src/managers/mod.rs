// Managers module
// Stateful coordination between the selection binding and what is drawn

pub mod adaptive;
pub mod sliding_indicator;

pub use adaptive::{tab_bar_padding, AdaptiveTabState, AdaptiveTabView, TabBarPadding};
pub use sliding_indicator::{SlidingIndicator, SyncAction};
