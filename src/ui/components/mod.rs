//! Derived views, one per part of the block.
//!
//! Each view owns one markup subtree and re-renders it (full replace, never a
//! patch) when the state announces a change it depends on. Views are shared
//! between the controller, which reads their markup, and the state listener
//! that re-renders them, through `Rc<RefCell<_>>`.
//!
//! # Components
//!
//! - [`list`]: Doctor cards for the visible slice (grid or list layout)
//! - [`pagination`]: Page indicator with previous/next controls
//! - [`filter`]: Specialty dropdown
//! - [`toggle`]: List/grid switch
//! - [`summary`]: Result count header
//! - [`empty`]: Empty state fragment used by the card template
//!
//! # Example
//!
//! ```rust
//! use doctor_locator::app::{LocatorState, PageSizes, ViewportTier};
//! use doctor_locator::ui::components::{attach, SummaryView, View};
//! use doctor_locator::ui::Labels;
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let mut state = LocatorState::new(PageSizes::default(), ViewportTier::Desktop);
//! let summary = Rc::new(RefCell::new(SummaryView::new(Rc::new(Labels::default()))));
//! attach(&mut state, &summary);
//!
//! state.set_items(vec![doctor_locator::Doctor::new("A", "X")]);
//! assert!(summary.borrow().subtree().html().contains("1 doctors found"));
//! ```

pub mod empty;
pub mod filter;
pub mod list;
pub mod pagination;
pub mod summary;
pub mod toggle;

pub use empty::render_empty_state;
pub use filter::FilterView;
pub use list::ListView;
pub use pagination::PaginationView;
pub use summary::SummaryView;
pub use toggle::ToggleView;

use crate::app::events::{StateEvent, SubscriberId};
use crate::app::state::LocatorState;
use std::cell::RefCell;
use std::rc::Rc;

/// A view that renders part of the block from the state.
pub trait View {
    /// Whether this view depends on `event`.
    fn wants(&self, event: StateEvent) -> bool;

    /// Rebuilds the owned subtree from the current state.
    fn render(&mut self, state: &LocatorState);

    fn subtree(&self) -> &Subtree;
}

/// Markup owned by one view, plus how often it has been replaced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Subtree {
    html: String,
    renders: usize,
}

impl Subtree {
    /// Replaces the whole subtree.
    pub fn replace(&mut self, html: String) {
        self.html = html;
        self.renders += 1;
    }

    #[must_use]
    pub fn html(&self) -> &str {
        &self.html
    }

    #[must_use]
    pub const fn renders(&self) -> usize {
        self.renders
    }
}

/// Renders `view` once and subscribes it to the state's change notifications.
pub fn attach<V>(state: &mut LocatorState, view: &Rc<RefCell<V>>) -> SubscriberId
where
    V: View + 'static,
{
    view.borrow_mut().render(state);

    let handle = Rc::clone(view);
    state.subscribe(move |event, state, _| {
        let mut view = handle.borrow_mut();
        if view.wants(event) {
            view.render(state);
        }
    })
}
