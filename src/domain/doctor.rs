//! Doctor records and the specialty filter.
//!
//! A [`Doctor`] is the record rendered by every card in the block. Records are
//! immutable once a search completes and have no persisted identity: the
//! position in the result list is all that matters for rendering.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Label of the sentinel filter value that matches every specialty.
pub const ALL_SPECIALTIES: &str = "All";

/// A single doctor returned by the search provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    pub name: String,
    /// Category tag the filter dropdown matches against.
    pub specialty: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    /// Image URL for the card portrait.
    pub image: Option<String>,
    /// City or region used by location searches.
    pub location: Option<String>,
}

impl Doctor {
    /// Creates a doctor with only the required fields set.
    ///
    /// # Examples
    ///
    /// ```
    /// use doctor_locator::Doctor;
    ///
    /// let doctor = Doctor::new("Dr. Ada Byron", "Cardiology");
    /// assert_eq!(doctor.specialty, "Cardiology");
    /// assert!(doctor.phone.is_none());
    /// ```
    #[must_use]
    pub fn new(name: impl Into<String>, specialty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            specialty: specialty.into(),
            address: None,
            phone: None,
            image: None,
            location: None,
        }
    }

    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

/// Current value of the specialty dropdown.
///
/// Any string is accepted. A specialty no record carries is not an error, it
/// simply matches nothing, so the list falls through to its empty state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    /// Sentinel matching every record.
    #[default]
    All,
    /// Matches records whose specialty is exactly this value.
    Specialty(String),
}

impl CategoryFilter {
    /// Parses a dropdown value. `"All"` (any case) and blank input map to
    /// [`CategoryFilter::All`].
    ///
    /// # Examples
    ///
    /// ```
    /// use doctor_locator::CategoryFilter;
    ///
    /// assert_eq!(CategoryFilter::parse("all"), CategoryFilter::All);
    /// assert_eq!(
    ///     CategoryFilter::parse("Dermatology"),
    ///     CategoryFilter::Specialty("Dermatology".to_string())
    /// );
    /// ```
    #[must_use]
    pub fn parse(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ALL_SPECIALTIES) {
            Self::All
        } else {
            Self::Specialty(trimmed.to_string())
        }
    }

    #[must_use]
    pub fn matches(&self, doctor: &Doctor) -> bool {
        match self {
            Self::All => true,
            Self::Specialty(specialty) => doctor.specialty == *specialty,
        }
    }

    /// Value submitted by the dropdown option for this filter.
    #[must_use]
    pub fn as_value(&self) -> &str {
        match self {
            Self::All => ALL_SPECIALTIES,
            Self::Specialty(specialty) => specialty,
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<String> for CategoryFilter {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_matches_every_record() {
        let doctor = Doctor::new("A", "X");
        assert!(CategoryFilter::All.matches(&doctor));
        assert!(CategoryFilter::parse("").matches(&doctor));
    }

    #[test]
    fn specialty_match_is_exact() {
        let doctor = Doctor::new("A", "Cardiology");
        assert!(CategoryFilter::parse("Cardiology").matches(&doctor));
        assert!(!CategoryFilter::parse("cardiology").matches(&doctor));
        assert!(!CategoryFilter::parse("Podiatry").matches(&doctor));
    }

    #[test]
    fn display_round_trips_dropdown_value() {
        assert_eq!(CategoryFilter::All.to_string(), "All");
        assert_eq!(CategoryFilter::from("  Oncology ").to_string(), "Oncology");
    }
}
