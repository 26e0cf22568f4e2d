//! Search criteria.

use serde::{Deserialize, Serialize};

/// What the visitor searched for. Every criterion is optional.
///
/// Blank strings are treated the same as absent criteria.
///
/// # Examples
///
/// ```
/// use doctor_locator::search::SearchQuery;
///
/// let query = SearchQuery::default().with_specialty("Cardiology").with_name("  ");
/// assert_eq!(query.specialty(), Some("Cardiology"));
/// assert_eq!(query.name(), None);
/// assert!(!query.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub specialty: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

impl SearchQuery {
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_specialty(mut self, specialty: impl Into<String>) -> Self {
        self.specialty = Some(specialty.into());
        self
    }

    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        criterion(self.name.as_deref())
    }

    #[must_use]
    pub fn specialty(&self) -> Option<&str> {
        criterion(self.specialty.as_deref())
    }

    #[must_use]
    pub fn location(&self) -> Option<&str> {
        criterion(self.location.as_deref())
    }

    /// True when no criterion was supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name().is_none() && self.specialty().is_none() && self.location().is_none()
    }
}

fn criterion(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
