//! Doctor card list component.
//!
//! Renders the visible slice through the block's [`TemplateRenderer`],
//! wrapped in a results container tagged with the current view mode.

use super::{Subtree, View};
use crate::app::events::StateEvent;
use crate::app::state::LocatorState;
use crate::ui::labels::Labels;
use crate::ui::renderer::{CardContext, TemplateRenderer};
use crate::ui::viewmodel::TruncationLimits;
use std::rc::Rc;

/// Cards for the records currently visible.
///
/// Re-renders on [`StateEvent::ItemsChanged`], [`StateEvent::PageChanged`]
/// and [`StateEvent::ViewModeChanged`]. Control visibility does not affect it.
pub struct ListView {
    renderer: Rc<dyn TemplateRenderer>,
    labels: Rc<Labels>,
    limits: TruncationLimits,
    subtree: Subtree,
}

impl ListView {
    #[must_use]
    pub fn new(
        renderer: Rc<dyn TemplateRenderer>,
        labels: Rc<Labels>,
        limits: TruncationLimits,
    ) -> Self {
        Self {
            renderer,
            labels,
            limits,
            subtree: Subtree::default(),
        }
    }
}

impl View for ListView {
    fn wants(&self, event: StateEvent) -> bool {
        matches!(
            event,
            StateEvent::ItemsChanged | StateEvent::PageChanged | StateEvent::ViewModeChanged
        )
    }

    fn render(&mut self, state: &LocatorState) {
        let cards = state.compute_cards(&self.limits);
        let ctx = CardContext {
            view_mode: state.view_mode(),
            empty: cards.is_empty(),
            labels: &self.labels,
        };

        tracing::trace!(cards = cards.len(), view_mode = %ctx.view_mode, "rendering card list");

        let body = self.renderer.render(&cards, &ctx);
        self.subtree.replace(format!(
            r#"<div class="find-a-doctor-results" data-view="{}">{body}</div>"#,
            ctx.view_mode
        ));
    }

    fn subtree(&self) -> &Subtree {
        &self.subtree
    }
}

impl std::fmt::Debug for ListView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListView")
            .field("limits", &self.limits)
            .field("subtree", &self.subtree)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::modes::{PageSizes, ViewMode, ViewportTier};
    use crate::ui::components::attach;
    use crate::ui::renderer::HtmlCards;
    use crate::Doctor;
    use std::cell::RefCell;

    fn setup() -> (LocatorState, Rc<RefCell<ListView>>) {
        let mut state = LocatorState::new(PageSizes::new(2, 2), ViewportTier::Desktop);
        let view = Rc::new(RefCell::new(ListView::new(
            Rc::new(HtmlCards),
            Rc::new(Labels::default()),
            TruncationLimits::default(),
        )));
        attach(&mut state, &view);
        (state, view)
    }

    #[test]
    fn starts_with_empty_state() {
        let (_state, view) = setup();
        assert!(view.borrow().subtree().html().contains("No results found"));
    }

    #[test]
    fn no_stale_markup_after_each_event() {
        let (mut state, view) = setup();
        state.set_items(vec![
            Doctor::new("Alpha", "X"),
            Doctor::new("Bravo", "Y"),
            Doctor::new("Charlie", "X"),
        ]);
        assert!(view.borrow().subtree().html().contains("Bravo"));

        state.set_filter("X");
        let html = view.borrow().subtree().html().to_string();
        assert!(html.contains("Alpha") && html.contains("Charlie") && !html.contains("Bravo"));

        state.set_view_mode(ViewMode::Grid);
        state.set_page_index(1);
        let html = view.borrow().subtree().html().to_string();
        assert!(html.contains(r#"data-view="grid""#));
        assert!(html.contains("Charlie") && !html.contains("Alpha"));

        state.set_page_index(5);
        assert!(view.borrow().subtree().html().contains("No results found"));
    }

    #[test]
    fn ignores_control_visibility_changes() {
        let (mut state, view) = setup();
        let before = view.borrow().subtree().renders();
        state.resize(ViewportTier::Mobile);
        assert_eq!(view.borrow().subtree().renders(), before);
    }
}
