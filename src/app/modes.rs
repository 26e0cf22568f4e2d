//! View mode and viewport tier state types.
//!
//! These enums drive the two layout decisions the block makes: whether the
//! filtered records are shown as a full list or a paged grid, and whether the
//! viewport is narrow enough to switch to the mobile layout.
//!
//! # State Machine
//!
//! - **List**: every filtered record, no pagination
//! - **Grid**: one page of `page_size` records at a time
//!
//! The viewport tier decides the page size and whether the pagination and
//! toggle controls are shown at all. On mobile the block is pinned to grid.
//!
//! # Example
//!
//! ```rust
//! use doctor_locator::app::modes::{PageSizes, ViewMode, ViewportTier};
//!
//! let sizes = PageSizes::default();
//! assert_eq!(sizes.for_tier(ViewportTier::Mobile), 5);
//! assert_eq!(ViewMode::default(), ViewMode::List);
//! ```

use std::fmt;

/// How the filtered records are laid out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ViewMode {
    /// Full filtered set, one row per record. Ignores the page index.
    #[default]
    List,

    /// Card grid showing one page of the filtered set.
    Grid,
}

impl ViewMode {
    /// Parses the value carried by a toggle button (`"list"` / `"grid"`).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "list" => Some(Self::List),
            "grid" => Some(Self::Grid),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Grid => "grid",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse viewport classification derived from a single width breakpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ViewportTier {
    /// Narrower than the breakpoint. Controls hidden, grid forced.
    Mobile,

    /// At or above the breakpoint.
    #[default]
    Desktop,
}

impl ViewportTier {
    /// Whether pagination and view toggle controls are shown in this tier.
    #[must_use]
    pub const fn controls_visible(self) -> bool {
        matches!(self, Self::Desktop)
    }
}

/// Grid page size for each viewport tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSizes {
    pub desktop: usize,
    pub mobile: usize,
}

impl PageSizes {
    pub const DEFAULT_DESKTOP: usize = 6;
    pub const DEFAULT_MOBILE: usize = 5;

    /// Builds page sizes, replacing zero with the tier default.
    #[must_use]
    pub const fn new(desktop: usize, mobile: usize) -> Self {
        Self {
            desktop: if desktop == 0 { Self::DEFAULT_DESKTOP } else { desktop },
            mobile: if mobile == 0 { Self::DEFAULT_MOBILE } else { mobile },
        }
    }

    #[must_use]
    pub const fn for_tier(self, tier: ViewportTier) -> usize {
        match tier {
            ViewportTier::Mobile => self.mobile,
            ViewportTier::Desktop => self.desktop,
        }
    }
}

impl Default for PageSizes {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DESKTOP, Self::DEFAULT_MOBILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_page_sizes_fall_back_to_defaults() {
        let sizes = PageSizes::new(0, 0);
        assert_eq!(sizes, PageSizes::default());
    }

    #[test]
    fn view_mode_parses_toggle_values() {
        assert_eq!(ViewMode::parse("GRID"), Some(ViewMode::Grid));
        assert_eq!(ViewMode::parse(" list "), Some(ViewMode::List));
        assert_eq!(ViewMode::parse("table"), None);
    }

    #[test]
    fn controls_only_visible_on_desktop() {
        assert!(ViewportTier::Desktop.controls_visible());
        assert!(!ViewportTier::Mobile.controls_visible());
    }
}
