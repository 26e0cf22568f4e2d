//! Empty state component renderer.
//!
//! Markup shown in place of the cards when the filtered set (or the current
//! grid page) has no records.

use crate::ui::helpers::escape_html;
use crate::ui::viewmodel::EmptyState;

/// Renders the empty state message.
///
/// The subtitle paragraph is left out when the label set has none.
///
/// # Example
///
/// ```rust
/// use doctor_locator::ui::components::render_empty_state;
/// use doctor_locator::ui::viewmodel::EmptyState;
///
/// let html = render_empty_state(&EmptyState {
///     message: "No results found".to_string(),
///     subtitle: String::new(),
/// });
/// assert!(!html.contains("subtitle"));
/// ```
#[must_use]
pub fn render_empty_state(empty: &EmptyState) -> String {
    let mut html = format!(
        r#"<div class="find-a-doctor-empty"><p class="find-a-doctor-empty-message">{}</p>"#,
        escape_html(&empty.message)
    );

    if !empty.subtitle.is_empty() {
        html.push_str(&format!(
            r#"<p class="find-a-doctor-empty-subtitle">{}</p>"#,
            escape_html(&empty.subtitle)
        ));
    }

    html.push_str("</div>");
    html
}
