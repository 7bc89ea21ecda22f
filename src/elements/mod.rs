// Elements module
// Drawable building blocks: items, the segmented control, and the bars built from them

pub mod floating_indicator;
pub mod glass_tab_bar;
pub mod segmented;
pub mod tab_item_view;
pub mod variants;

pub use floating_indicator::{FadeFrame, FloatingIndicator, FloatingIndicatorState};
pub use glass_tab_bar::{GlassTabBar, GlassTabBarState, TabBounds};
pub use segmented::SegmentedControl;
pub use tab_item_view::{default_tab_item, icon_tab_item, TabItemView};
pub use variants::{CompactTabBar, CompactTabBarState, IconLabelTabBar, IconOnlyTabBar};
