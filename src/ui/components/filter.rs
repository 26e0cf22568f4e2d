//! Specialty filter dropdown component.

use super::{Subtree, View};
use crate::app::events::StateEvent;
use crate::app::state::LocatorState;
use crate::ui::helpers::escape_html;
use crate::ui::labels::Labels;
use std::rc::Rc;

/// `<select>` listing "All" plus the state's specialties.
///
/// Filter changes are announced as [`StateEvent::ItemsChanged`], which is
/// also when the derived specialty list can change, so that is the only event
/// it follows.
#[derive(Debug)]
pub struct FilterView {
    labels: Rc<Labels>,
    subtree: Subtree,
}

impl FilterView {
    #[must_use]
    pub fn new(labels: Rc<Labels>) -> Self {
        Self {
            labels,
            subtree: Subtree::default(),
        }
    }
}

impl View for FilterView {
    fn wants(&self, event: StateEvent) -> bool {
        event == StateEvent::ItemsChanged
    }

    fn render(&mut self, state: &LocatorState) {
        let info = state.compute_filter();

        let mut html = format!(
            r#"<div class="find-a-doctor-filter"><label for="find-a-doctor-specialty">{}</label><select id="find-a-doctor-specialty" name="specialty">"#,
            escape_html(&self.labels.filter_label)
        );

        for option in &info.options {
            let label = if option.is_all { &self.labels.all } else { &option.value };
            let selected = if option.selected { " selected" } else { "" };
            html.push_str(&format!(
                r#"<option value="{}"{selected}>{}</option>"#,
                escape_html(&option.value),
                escape_html(label)
            ));
        }

        html.push_str("</select></div>");
        self.subtree.replace(html);
    }

    fn subtree(&self) -> &Subtree {
        &self.subtree
    }
}
