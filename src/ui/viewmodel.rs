//! View model types representing renderable block state.
//!
//! View models are computed from [`LocatorState`](crate::app::LocatorState)
//! by its `compute_*` methods and consumed by the view components. They carry
//! display-ready data only: truncated text, 1-based page numbers, selection
//! flags.
//!
//! # Example
//!
//! ```rust
//! use doctor_locator::ui::viewmodel::{DoctorCard, TruncationLimits};
//! use doctor_locator::Doctor;
//!
//! let limits = TruncationLimits { name: 5, ..TruncationLimits::default() };
//! let card = DoctorCard::from_doctor(&Doctor::new("Dr. Josephine", "ENT"), &limits);
//! assert_eq!(card.name, "Dr. J...");
//! ```

use crate::app::modes::ViewMode;
use crate::domain::Doctor;
use crate::ui::helpers::truncate;
use serde::{Deserialize, Serialize};

/// Character budget for each truncated card field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TruncationLimits {
    pub name: usize,
    /// Budget for the specialty label shown as the card title.
    pub specialty: usize,
    pub phone: usize,
    pub address: usize,
}

impl Default for TruncationLimits {
    fn default() -> Self {
        Self {
            name: 32,
            specialty: 28,
            phone: 16,
            address: 60,
        }
    }
}

/// Display information for a single doctor card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoctorCard {
    pub name: String,
    pub specialty: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    /// `tel:` target built from the full number, never the truncated text.
    pub dial: Option<String>,
    pub image: Option<String>,
}

impl DoctorCard {
    /// Builds a card, truncating every text field to its budget.
    #[must_use]
    pub fn from_doctor(doctor: &Doctor, limits: &TruncationLimits) -> Self {
        Self {
            name: truncate(&doctor.name, limits.name),
            specialty: truncate(&doctor.specialty, limits.specialty),
            address: doctor.address.as_deref().map(|a| truncate(a, limits.address)),
            phone: doctor.phone.as_deref().map(|p| truncate(p, limits.phone)),
            dial: doctor.phone.as_deref().and_then(dial_target),
            image: doctor.image.clone(),
        }
    }
}

/// Digits and `+` of a phone number, `None` when nothing is dialable.
fn dial_target(phone: &str) -> Option<String> {
    let dial: String = phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    (!dial.is_empty()).then_some(dial)
}

/// Pagination control state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationInfo {
    /// 1-based page shown in the indicator.
    pub current_page: usize,
    pub total_pages: usize,
    /// Zero-based target of the "previous" control, `None` when disabled.
    pub previous: Option<usize>,
    /// Zero-based target of the "next" control, `None` when disabled.
    pub next: Option<usize>,
    /// Shown only in grid mode with controls visible and at least one page.
    pub visible: bool,
}

/// Specialty dropdown state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterInfo {
    pub options: Vec<FilterOption>,
}

/// One `<option>` of the specialty dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    pub value: String,
    /// The "All" sentinel, whose label comes from the label set.
    pub is_all: bool,
    pub selected: bool,
}

/// List/grid toggle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleInfo {
    pub active: ViewMode,
    pub visible: bool,
}

/// Results summary header state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryInfo {
    pub total_count: usize,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g., "No results found").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_keeps_short_fields_and_skips_missing_ones() {
        let doctor = Doctor::new("Dr. Ng", "ENT").with_phone("555-0101");
        let card = DoctorCard::from_doctor(&doctor, &TruncationLimits::default());

        assert_eq!(card.name, "Dr. Ng");
        assert_eq!(card.phone.as_deref(), Some("555-0101"));
        assert!(card.address.is_none());
        assert_eq!(card.dial.as_deref(), Some("5550101"));
    }

    #[test]
    fn phone_without_digits_has_no_dial_target() {
        let doctor = Doctor::new("Dr. Ng", "ENT").with_phone("ask reception");
        let card = DoctorCard::from_doctor(&doctor, &TruncationLimits::default());

        assert!(card.phone.is_some());
        assert!(card.dial.is_none());
    }

    #[test]
    fn card_truncates_each_field_to_its_own_budget() {
        let limits = TruncationLimits {
            name: 4,
            specialty: 3,
            phone: 5,
            address: 6,
        };
        let doctor = Doctor::new("Dr. Ramirez", "Neurology")
            .with_phone("+1 555 0100")
            .with_address("12 Harbour Road");
        let card = DoctorCard::from_doctor(&doctor, &limits);

        assert_eq!(card.name, "Dr. ...");
        assert_eq!(card.specialty, "Neu...");
        assert_eq!(card.phone.as_deref(), Some("+1 55..."));
        assert_eq!(card.dial.as_deref(), Some("+15550100"));
        assert_eq!(card.address.as_deref(), Some("12 Har..."));
    }
}
