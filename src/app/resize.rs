//! Viewport evaluation and the mobile/desktop layout policy.
//!
//! The adapter is the only caller of [`LocatorState::resize`]. It classifies
//! the viewport, lets the state re-derive page size and control visibility,
//! then applies the mobile rule on top: narrow viewports always show the grid.

use super::modes::{ViewMode, ViewportTier};
use super::state::LocatorState;
use std::cell::Cell;
use std::rc::Rc;

/// Width below which the viewport counts as mobile.
pub const DEFAULT_BREAKPOINT: u32 = 1024;

/// Source of the "is this a narrow screen" answer.
pub trait Viewport {
    fn is_narrow(&self) -> bool;

    fn tier(&self) -> ViewportTier {
        if self.is_narrow() {
            ViewportTier::Mobile
        } else {
            ViewportTier::Desktop
        }
    }
}

impl<V: Viewport + ?Sized> Viewport for Rc<V> {
    fn is_narrow(&self) -> bool {
        (**self).is_narrow()
    }
}

/// Viewport described by its current width in CSS pixels.
///
/// The width lives in a [`Cell`] so the embedder can keep an `Rc` to it and
/// update it from resize callbacks while the block holds another.
#[derive(Debug, Clone)]
pub struct ViewportWidth {
    width: Cell<u32>,
    breakpoint: u32,
}

impl ViewportWidth {
    #[must_use]
    pub const fn new(width: u32) -> Self {
        Self::with_breakpoint(width, DEFAULT_BREAKPOINT)
    }

    #[must_use]
    pub const fn with_breakpoint(width: u32, breakpoint: u32) -> Self {
        Self {
            width: Cell::new(width),
            breakpoint,
        }
    }

    pub fn set_width(&self, width: u32) {
        self.width.set(width);
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width.get()
    }

    #[must_use]
    pub const fn breakpoint(&self) -> u32 {
        self.breakpoint
    }
}

impl Viewport for ViewportWidth {
    fn is_narrow(&self) -> bool {
        self.width.get() < self.breakpoint
    }
}

/// Applies viewport changes to a state.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResizeAdapter;

impl ResizeAdapter {
    /// Re-evaluates `viewport` and updates `state` to match.
    ///
    /// Page size and control visibility follow the tier. On mobile the view
    /// mode is forced to grid, which only notifies when the mode actually
    /// changes. Returning to desktop keeps whatever mode was active.
    pub fn on_resize<V>(&self, viewport: &V, state: &mut LocatorState)
    where
        V: Viewport + ?Sized,
    {
        let tier = viewport.tier();
        let _span = tracing::debug_span!("on_resize", ?tier).entered();

        state.resize(tier);

        if tier == ViewportTier::Mobile && state.view_mode() != ViewMode::Grid {
            tracing::debug!("forcing grid on mobile");
            state.set_view_mode(ViewMode::Grid);
        }
    }
}
