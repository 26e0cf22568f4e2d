//! List/grid toggle component.

use super::{Subtree, View};
use crate::app::events::StateEvent;
use crate::app::modes::ViewMode;
use crate::app::state::LocatorState;
use crate::ui::helpers::escape_html;
use crate::ui::labels::Labels;
use std::rc::Rc;

/// Two buttons switching between list and grid, the active one pressed.
#[derive(Debug)]
pub struct ToggleView {
    labels: Rc<Labels>,
    subtree: Subtree,
}

impl ToggleView {
    #[must_use]
    pub fn new(labels: Rc<Labels>) -> Self {
        Self {
            labels,
            subtree: Subtree::default(),
        }
    }
}

impl View for ToggleView {
    fn wants(&self, event: StateEvent) -> bool {
        matches!(event, StateEvent::ViewModeChanged | StateEvent::ControlsChanged)
    }

    fn render(&mut self, state: &LocatorState) {
        let info = state.compute_toggle();

        if !info.visible {
            self.subtree
                .replace(r#"<div class="find-a-doctor-toggle" hidden></div>"#.to_string());
            return;
        }

        let mut html = String::from(r#"<div class="find-a-doctor-toggle">"#);
        for (mode, label) in [
            (ViewMode::List, &self.labels.list_view),
            (ViewMode::Grid, &self.labels.grid_view),
        ] {
            html.push_str(&format!(
                r#"<button type="button" data-view="{mode}" aria-pressed="{}">{}</button>"#,
                mode == info.active,
                escape_html(label)
            ));
        }
        html.push_str("</div>");

        self.subtree.replace(html);
    }

    fn subtree(&self) -> &Subtree {
        &self.subtree
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::modes::{PageSizes, ViewportTier};
    use crate::ui::components::attach;
    use std::cell::RefCell;

    #[test]
    fn presses_active_mode_and_hides_on_mobile() {
        let mut state = LocatorState::new(PageSizes::default(), ViewportTier::Desktop);
        let view = Rc::new(RefCell::new(ToggleView::new(Rc::new(Labels::default()))));
        attach(&mut state, &view);
        assert!(view
            .borrow()
            .subtree()
            .html()
            .contains(r#"data-view="list" aria-pressed="true""#));

        state.set_view_mode(ViewMode::Grid);
        assert!(view
            .borrow()
            .subtree()
            .html()
            .contains(r#"data-view="grid" aria-pressed="true""#));

        state.resize(ViewportTier::Mobile);
        assert!(view.borrow().subtree().html().contains("hidden"));

        state.resize(ViewportTier::Desktop);
        assert!(!view.borrow().subtree().html().contains("hidden"));
    }
}
