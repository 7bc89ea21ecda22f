// Tab Item Contract
// The capability set every tab enumeration implements

use std::fmt::Debug;
use std::hash::Hash;

/// A fixed, finite set of selectable tab identities supplied by the host
///
/// Implementors are usually fieldless enums. `all()` must return the same
/// variants in the same order on every call: positions are recomputed from
/// that order on each lookup, and the segmented indicator and the overlay
/// both lay themselves out by position.
///
/// ```rust
/// use glass_tabs::TabItem;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum Tab { Home, Settings }
///
/// impl TabItem for Tab {
///     fn all() -> &'static [Self] { &[Tab::Home, Tab::Settings] }
///     fn raw_value(&self) -> &str {
///         match self { Tab::Home => "Home", Tab::Settings => "Settings" }
///     }
///     fn selected_symbol(&self) -> &str {
///         match self { Tab::Home => "house.fill", Tab::Settings => "gearshape.fill" }
///     }
///     fn unselected_symbol(&self) -> &str {
///         match self { Tab::Home => "house", Tab::Settings => "gearshape" }
///     }
/// }
///
/// assert_eq!(Tab::Settings.index(), 1);
/// ```
pub trait TabItem: Copy + Eq + Hash + Debug + 'static {
    /// Every variant, in declared order
    fn all() -> &'static [Self];

    /// Stable label, unique within the enumeration
    fn raw_value(&self) -> &str;

    /// Symbol identifier shown while this tab is active (filled variant)
    fn selected_symbol(&self) -> &str;

    /// Symbol identifier shown while this tab is inactive (outline variant)
    fn unselected_symbol(&self) -> &str;

    /// Zero-based position of this value within `all()`
    ///
    /// Falls back to `0` when the value is not found.
    fn index(&self) -> usize {
        Self::all()
            .iter()
            .position(|candidate| candidate == self)
            .unwrap_or(0)
    }

    /// Number of variants
    fn count() -> usize {
        Self::all().len()
    }

    /// Variant at `index`, if in range
    fn at(index: usize) -> Option<Self> {
        Self::all().get(index).copied()
    }

    /// Symbol for the given selection state
    fn symbol(&self, is_selected: bool) -> &str {
        if is_selected {
            self.selected_symbol()
        } else {
            self.unselected_symbol()
        }
    }
}

/// Declare a tab enumeration and its `TabItem` implementation in one place
///
/// The generated enum derives `Debug, Clone, Copy, PartialEq, Eq, Hash`;
/// variant order in the macro is the order of `all()`.
///
/// ```rust
/// glass_tabs::tab_items! {
///     pub enum Tab {
///         Home => ("Home", "house.fill", "house"),
///         Settings => ("Settings", "gearshape.fill", "gearshape"),
///     }
/// }
///
/// use glass_tabs::TabItem;
/// assert_eq!(Tab::all(), &[Tab::Home, Tab::Settings]);
/// assert_eq!(Tab::Settings.raw_value(), "Settings");
/// ```
#[macro_export]
macro_rules! tab_items {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($variant:ident => ($raw:expr, $selected:expr, $unselected:expr)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($variant),+
        }

        impl $crate::TabItem for $name {
            fn all() -> &'static [Self] {
                &[$($name::$variant),+]
            }

            fn raw_value(&self) -> &str {
                match self {
                    $($name::$variant => $raw),+
                }
            }

            fn selected_symbol(&self) -> &str {
                match self {
                    $($name::$variant => $selected),+
                }
            }

            fn unselected_symbol(&self) -> &str {
                match self {
                    $($name::$variant => $unselected),+
                }
            }
        }
    };
}
