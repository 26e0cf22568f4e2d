//! Pagination component.
//!
//! Page indicator plus previous/next buttons for grid mode. Buttons carry the
//! zero-based page they lead to in `data-page`; the controller feeds that
//! value back through [`Event::GoToPage`](crate::app::Event::GoToPage).

use super::{Subtree, View};
use crate::app::events::StateEvent;
use crate::app::state::LocatorState;
use crate::ui::helpers::{escape_html, fill_template};
use crate::ui::labels::Labels;
use std::rc::Rc;

/// Grid page controls.
///
/// Hidden in list mode, when the viewport hides controls, and when there
/// are no results. "Previous" is disabled on the first page and "next" on
/// the last.
#[derive(Debug)]
pub struct PaginationView {
    labels: Rc<Labels>,
    subtree: Subtree,
}

impl PaginationView {
    #[must_use]
    pub fn new(labels: Rc<Labels>) -> Self {
        Self {
            labels,
            subtree: Subtree::default(),
        }
    }
}

impl View for PaginationView {
    fn wants(&self, _event: StateEvent) -> bool {
        true
    }

    fn render(&mut self, state: &LocatorState) {
        let info = state.compute_pagination();

        if !info.visible {
            self.subtree
                .replace(r#"<nav class="find-a-doctor-pagination" hidden></nav>"#.to_string());
            return;
        }

        let current = info.current_page.to_string();
        let total = info.total_pages.to_string();
        let indicator = fill_template(
            &self.labels.page_indicator,
            &[("current", current.as_str()), ("total", total.as_str())],
        );

        let mut html = String::from(r#"<nav class="find-a-doctor-pagination">"#);
        render_button(&mut html, "previous", &self.labels.previous, info.previous);
        html.push_str(&format!(
            r#"<span class="find-a-doctor-pagination-indicator">{}</span>"#,
            escape_html(&indicator)
        ));
        render_button(&mut html, "next", &self.labels.next, info.next);
        html.push_str("</nav>");

        self.subtree.replace(html);
    }

    fn subtree(&self) -> &Subtree {
        &self.subtree
    }
}

fn render_button(html: &mut String, action: &str, label: &str, target: Option<usize>) {
    match target {
        Some(page) => {
            html.push_str(&format!(
                r#"<button type="button" class="find-a-doctor-pagination-{action}" data-page="{page}">{}</button>"#,
                escape_html(label)
            ));
        }
        None => {
            html.push_str(&format!(
                r#"<button type="button" class="find-a-doctor-pagination-{action}" disabled>{}</button>"#,
                escape_html(label)
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::modes::{PageSizes, ViewMode, ViewportTier};
    use crate::ui::components::attach;
    use crate::Doctor;
    use std::cell::RefCell;

    fn grid_state(count: usize) -> (LocatorState, Rc<RefCell<PaginationView>>) {
        let mut state = LocatorState::new(PageSizes::new(2, 2), ViewportTier::Desktop);
        let view = Rc::new(RefCell::new(PaginationView::new(Rc::new(Labels::default()))));
        attach(&mut state, &view);
        state.set_items((0..count).map(|i| Doctor::new(format!("D{i}"), "X")).collect());
        state.set_view_mode(ViewMode::Grid);
        (state, view)
    }

    #[test]
    fn first_page_disables_previous() {
        let (_state, view) = grid_state(5);
        let html = view.borrow().subtree().html().to_string();
        assert!(html.contains("Page 1 of 3"));
        assert!(html.contains(r#"find-a-doctor-pagination-previous" disabled"#));
        assert!(html.contains(r#"find-a-doctor-pagination-next" data-page="1""#));
    }

    #[test]
    fn last_page_disables_next() {
        let (mut state, view) = grid_state(5);
        state.set_page_index(2);
        let html = view.borrow().subtree().html().to_string();
        assert!(html.contains("Page 3 of 3"));
        assert!(html.contains(r#"find-a-doctor-pagination-next" disabled"#));
        assert!(html.contains(r#"find-a-doctor-pagination-previous" data-page="1""#));
    }

    #[test]
    fn hidden_in_list_mode_and_on_mobile() {
        let (mut state, view) = grid_state(5);
        state.set_view_mode(ViewMode::List);
        assert!(view.borrow().subtree().html().contains("hidden"));

        state.set_view_mode(ViewMode::Grid);
        state.resize(ViewportTier::Mobile);
        assert!(view.borrow().subtree().html().contains("hidden"));
    }

    #[test]
    fn page_index_far_past_the_end_still_renders() {
        let (mut state, view) = grid_state(1);
        state.set_page_index(usize::MAX);

        let html = view.borrow().subtree().html().to_string();
        assert!(html.contains(&format!("Page {} of 1", usize::MAX)));
        assert!(html.contains(r#"find-a-doctor-pagination-previous" data-page="0""#));

        state.set_page_index(0);
        assert!(view.borrow().subtree().html().contains("Page 1 of 1"));
    }

    #[test]
    fn hidden_without_results() {
        let (_state, view) = grid_state(0);
        assert!(view.borrow().subtree().html().contains("hidden"));
    }
}
