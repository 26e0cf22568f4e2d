//! Results summary header component.
//!
//! This module renders the header line reporting how many doctors pass the
//! current filter.

use super::{Subtree, View};
use crate::app::events::StateEvent;
use crate::app::state::LocatorState;
use crate::ui::helpers::{escape_html, fill_template};
use crate::ui::labels::Labels;
use std::rc::Rc;

/// Header with the filtered result count.
#[derive(Debug)]
pub struct SummaryView {
    labels: Rc<Labels>,
    subtree: Subtree,
}

impl SummaryView {
    #[must_use]
    pub fn new(labels: Rc<Labels>) -> Self {
        Self {
            labels,
            subtree: Subtree::default(),
        }
    }
}

impl View for SummaryView {
    fn wants(&self, event: StateEvent) -> bool {
        event == StateEvent::ItemsChanged
    }

    fn render(&mut self, state: &LocatorState) {
        let count = state.compute_summary().total_count.to_string();
        let text = fill_template(&self.labels.results_summary, &[("count", count.as_str())]);
        self.subtree.replace(format!(
            r#"<p class="find-a-doctor-summary" aria-live="polite">{}</p>"#,
            escape_html(&text)
        ));
    }

    fn subtree(&self) -> &Subtree {
        &self.subtree
    }
}
