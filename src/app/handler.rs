//! User event handling.
//!
//! The page forwards control interactions to [`handle_event`], which turns
//! them into state mutations on the block. Views re-render through their
//! subscriptions, so the handler never touches markup.
//!
//! # Event Types
//!
//! - **Filtering**: `SelectFilter`
//! - **Paging**: `NextPage`, `PreviousPage`, `GoToPage`
//! - **Layout**: `SetViewMode`, `ViewportChanged`
//!
//! # Example
//!
//! ```rust
//! use doctor_locator::app::{handle_event, Event, LocatorBlock, ViewportWidth};
//! use doctor_locator::search::DirectorySearch;
//! use doctor_locator::{Config, Doctor};
//!
//! let search = DirectorySearch::new(vec![Doctor::new("A", "X"), Doctor::new("B", "Y")]);
//! let mut block = LocatorBlock::new(&Config::default(), search, ViewportWidth::new(1280));
//! futures::executor::block_on(block.initialize(&Default::default()));
//!
//! assert!(handle_event(&mut block, &Event::SelectFilter("Y".to_string())));
//! assert_eq!(block.state().total_count(), 1);
//! ```

use super::controller::LocatorBlock;
use super::modes::{ViewMode, ViewportTier};
use crate::domain::CategoryFilter;

/// Interactions coming from the block's controls or the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A specialty was picked in the dropdown. `"All"` clears the filter.
    SelectFilter(String),
    /// The "next" pagination button.
    NextPage,
    /// The "previous" pagination button.
    PreviousPage,
    /// Jump to a zero-based page, clamped to the pages that exist.
    GoToPage(usize),
    /// A list/grid toggle button.
    SetViewMode(ViewMode),
    /// The window was resized; re-read the viewport.
    ViewportChanged,
}

/// Applies an event to the block.
///
/// # Returns
///
/// `true` if the state was mutated. Events that cannot apply (next on the
/// last page, list mode on mobile, a page when there are no results) are
/// ignored and return `false`.
pub fn handle_event(block: &mut LocatorBlock, event: &Event) -> bool {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::SelectFilter(value) => {
            let filter = CategoryFilter::parse(value);
            tracing::debug!(filter = %filter, "filter selected");
            block.state_mut().set_filter(filter);
            true
        }
        Event::NextPage => {
            let Some(page) = block.state().next_page_target() else {
                tracing::debug!("already on last page");
                return false;
            };
            block.state_mut().set_page_index(page);
            true
        }
        Event::PreviousPage => {
            let Some(page) = block.state().previous_page_target() else {
                tracing::debug!("already on first page");
                return false;
            };
            block.state_mut().set_page_index(page);
            true
        }
        Event::GoToPage(requested) => {
            let Some(page) = block.state().clamp_page(*requested) else {
                tracing::debug!("no pages to navigate");
                return false;
            };
            if page == block.state().page_index() {
                return false;
            }
            block.state_mut().set_page_index(page);
            true
        }
        Event::SetViewMode(mode) => {
            let state = block.state();
            if state.view_mode() == *mode {
                return false;
            }
            if state.tier() == ViewportTier::Mobile && *mode == ViewMode::List {
                tracing::debug!("list mode unavailable on mobile");
                return false;
            }
            block.state_mut().set_view_mode(*mode);
            true
        }
        Event::ViewportChanged => block.on_viewport_changed(),
    }
}
