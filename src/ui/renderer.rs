//! Card template rendering.
//!
//! The list view treats card markup as an opaque function of the visible
//! cards and a small context: [`TemplateRenderer`]. [`HtmlCards`] is the
//! stock implementation. Blocks that need different markup plug in their own.
//!
//! The layout is chosen from the explicit `view_mode` flag in
//! [`CardContext`]: grid and list markup are separate templates, so the
//! output never carries both layouts with one of them hidden.
//!
//! # Example
//!
//! ```rust
//! use doctor_locator::app::ViewMode;
//! use doctor_locator::ui::renderer::{CardContext, HtmlCards, TemplateRenderer};
//! use doctor_locator::ui::Labels;
//!
//! let labels = Labels::default();
//! let ctx = CardContext { view_mode: ViewMode::Grid, empty: true, labels: &labels };
//! let html = HtmlCards.render(&[], &ctx);
//! assert!(html.contains("No results found"));
//! ```

use crate::app::modes::ViewMode;
use crate::ui::components::render_empty_state;
use crate::ui::helpers::escape_html;
use crate::ui::labels::Labels;
use crate::ui::viewmodel::{DoctorCard, EmptyState};

/// Everything a card template needs besides the cards themselves.
#[derive(Debug, Clone, Copy)]
pub struct CardContext<'a> {
    pub view_mode: ViewMode,
    /// No record is visible; render the empty state instead of cards.
    pub empty: bool,
    pub labels: &'a Labels,
}

/// Turns visible cards into an HTML fragment.
pub trait TemplateRenderer {
    fn render(&self, cards: &[DoctorCard], ctx: &CardContext<'_>) -> String;
}

impl<F> TemplateRenderer for F
where
    F: Fn(&[DoctorCard], &CardContext<'_>) -> String,
{
    fn render(&self, cards: &[DoctorCard], ctx: &CardContext<'_>) -> String {
        self(cards, ctx)
    }
}

/// Stock card markup.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlCards;

impl TemplateRenderer for HtmlCards {
    fn render(&self, cards: &[DoctorCard], ctx: &CardContext<'_>) -> String {
        if ctx.empty {
            return render_empty_state(&EmptyState {
                message: ctx.labels.empty_message.clone(),
                subtitle: ctx.labels.empty_subtitle.clone(),
            });
        }

        let mut html = String::new();
        match ctx.view_mode {
            ViewMode::Grid => {
                html.push_str(r#"<ul class="find-a-doctor-grid">"#);
                for card in cards {
                    render_grid_card(&mut html, card);
                }
            }
            ViewMode::List => {
                html.push_str(r#"<ul class="find-a-doctor-list">"#);
                for card in cards {
                    render_list_row(&mut html, card);
                }
            }
        }
        html.push_str("</ul>");
        html
    }
}

/// Grid card: portrait, name, specialty, address, phone.
///
/// Each optional part is skipped on its own when the record lacks it.
fn render_grid_card(html: &mut String, card: &DoctorCard) {
    html.push_str(r#"<li class="find-a-doctor-card">"#);

    if let Some(image) = &card.image {
        html.push_str(&format!(
            r#"<img class="find-a-doctor-card-image" src="{}" alt="{}" loading="lazy">"#,
            escape_html(image),
            escape_html(&card.name)
        ));
    }

    html.push_str(&format!(
        r#"<h3 class="find-a-doctor-card-name">{}</h3><p class="find-a-doctor-card-specialty">{}</p>"#,
        escape_html(&card.name),
        escape_html(&card.specialty)
    ));

    if let Some(address) = &card.address {
        html.push_str(&format!(
            r#"<p class="find-a-doctor-card-address">{}</p>"#,
            escape_html(address)
        ));
    }

    if let Some(phone) = &card.phone {
        render_phone(html, card, phone);
    }

    html.push_str("</li>");
}

/// List row: text columns only, no portrait.
fn render_list_row(html: &mut String, card: &DoctorCard) {
    html.push_str(&format!(
        r#"<li class="find-a-doctor-row"><span class="find-a-doctor-card-name">{}</span><span class="find-a-doctor-card-specialty">{}</span>"#,
        escape_html(&card.name),
        escape_html(&card.specialty)
    ));

    if let Some(address) = &card.address {
        html.push_str(&format!(
            r#"<span class="find-a-doctor-card-address">{}</span>"#,
            escape_html(address)
        ));
    }

    if let Some(phone) = &card.phone {
        render_phone(html, card, phone);
    }

    html.push_str("</li>");
}

fn render_phone(html: &mut String, card: &DoctorCard, phone: &str) {
    match &card.dial {
        Some(dial) => html.push_str(&format!(
            r#"<a class="find-a-doctor-card-phone" href="tel:{}">{}</a>"#,
            escape_html(dial),
            escape_html(phone)
        )),
        None => html.push_str(&format!(
            r#"<span class="find-a-doctor-card-phone">{}</span>"#,
            escape_html(phone)
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::viewmodel::TruncationLimits;
    use crate::Doctor;

    fn card(name: &str) -> DoctorCard {
        DoctorCard {
            name: name.to_string(),
            specialty: "Cardiology".to_string(),
            address: None,
            phone: None,
            dial: None,
            image: None,
        }
    }

    #[test]
    fn grid_and_list_use_separate_markup() {
        let labels = Labels::default();
        let cards = [card("A")];

        let grid = HtmlCards.render(
            &cards,
            &CardContext { view_mode: ViewMode::Grid, empty: false, labels: &labels },
        );
        let list = HtmlCards.render(
            &cards,
            &CardContext { view_mode: ViewMode::List, empty: false, labels: &labels },
        );

        assert!(grid.contains("find-a-doctor-grid") && !grid.contains("find-a-doctor-list"));
        assert!(list.contains("find-a-doctor-list") && !list.contains("find-a-doctor-grid"));
        assert!(!grid.contains("hidden") && !list.contains("hidden"));
    }

    #[test]
    fn missing_fields_skip_their_fragment() {
        let labels = Labels::default();
        let mut with_phone = card("B");
        with_phone.phone = Some("(555) 010-0199".to_string());
        with_phone.dial = Some("5550100199".to_string());

        let html = HtmlCards.render(
            &[card("A"), with_phone],
            &CardContext { view_mode: ViewMode::Grid, empty: false, labels: &labels },
        );

        assert_eq!(html.matches("find-a-doctor-card-address").count(), 0);
        assert_eq!(html.matches("find-a-doctor-card-phone").count(), 1);
        assert!(html.contains(r#"href="tel:5550100199""#));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn long_phone_dials_the_full_number() {
        let labels = Labels::default();
        let limits = TruncationLimits::default();
        let doctor = Doctor::new("Dr. Okafor", "Cardiology").with_phone("+1 (555) 010-0199");
        assert!(doctor.phone.as_deref().unwrap().chars().count() > limits.phone);

        let html = HtmlCards.render(
            &[DoctorCard::from_doctor(&doctor, &limits)],
            &CardContext { view_mode: ViewMode::List, empty: false, labels: &labels },
        );

        assert!(html.contains(r#"href="tel:+15550100199""#));
        assert!(html.contains(">+1 (555) 010-019...</a>"));
    }

    #[test]
    fn values_are_escaped() {
        let labels = Labels::default();
        let html = HtmlCards.render(
            &[card("<script>")],
            &CardContext { view_mode: ViewMode::List, empty: false, labels: &labels },
        );
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    fn count_cards(cards: &[DoctorCard], ctx: &CardContext<'_>) -> String {
        format!("{}:{}", ctx.view_mode, cards.len())
    }

    #[test]
    fn functions_are_renderers() {
        let labels = Labels::default();
        let out = count_cards.render(
            &[card("A"), card("B")],
            &CardContext { view_mode: ViewMode::Grid, empty: false, labels: &labels },
        );
        assert_eq!(out, "grid:2");
    }
}
