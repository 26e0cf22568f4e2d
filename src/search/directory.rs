//! In-memory search over a loaded doctor directory.
//!
//! A search runs four independent queries (by name, by specialty, by
//! location, and the full directory) concurrently, then merges them. With
//! no criteria the result is the whole directory; otherwise it is the set of
//! records every supplied criterion matched, in directory order.

use crate::domain::error::Result;
use crate::domain::Doctor;
use crate::search::provider::SearchProvider;
use crate::search::query::SearchQuery;
use crate::storage::DirectorySource;
use futures_util::future::{join4, BoxFuture, FutureExt};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use std::collections::HashSet;
use tracing::Instrument;

/// Indices of the records one criterion matched. `None` when the criterion
/// was not part of the query.
type Hits = Option<HashSet<usize>>;

/// Search provider backed by a directory held in memory.
///
/// # Examples
///
/// ```
/// use doctor_locator::search::{DirectorySearch, SearchProvider, SearchQuery};
/// use doctor_locator::Doctor;
///
/// let search = DirectorySearch::new(vec![
///     Doctor::new("Dr. Ada Byron", "Cardiology"),
///     Doctor::new("Dr. Bea Curie", "Oncology"),
/// ]);
/// let query = SearchQuery::default().with_specialty("cardiology");
/// let found = futures::executor::block_on(search.search(&query))?;
/// assert_eq!(found.len(), 1);
/// # Ok::<(), doctor_locator::LocatorError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct DirectorySearch {
    doctors: Vec<Doctor>,
}

impl DirectorySearch {
    #[must_use]
    pub const fn new(doctors: Vec<Doctor>) -> Self {
        Self { doctors }
    }

    /// Loads every record from `source`.
    ///
    /// # Errors
    ///
    /// Returns the source's error if it cannot be read.
    pub fn from_source<S: DirectorySource + ?Sized>(source: &S) -> Result<Self> {
        let doctors = source.load_doctors()?;
        tracing::debug!(doctors = doctors.len(), "directory search loaded");
        Ok(Self::new(doctors))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.doctors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.doctors.is_empty()
    }

    async fn by_name(&self, name: Option<&str>) -> Hits {
        let name = name?;
        let tokens: Vec<String> = name.split_whitespace().map(str::to_lowercase).collect();
        let matcher = SkimMatcherV2::default();

        Some(
            self.doctors
                .iter()
                .enumerate()
                .filter(|(_, doctor)| {
                    let name_lower = doctor.name.to_lowercase();
                    tokens
                        .iter()
                        .all(|token| matcher.fuzzy_match(&name_lower, token).is_some())
                })
                .map(|(index, _)| index)
                .collect(),
        )
    }

    async fn by_specialty(&self, specialty: Option<&str>) -> Hits {
        let specialty = specialty?;
        Some(
            self.doctors
                .iter()
                .enumerate()
                .filter(|(_, doctor)| doctor.specialty.trim().eq_ignore_ascii_case(specialty))
                .map(|(index, _)| index)
                .collect(),
        )
    }

    async fn by_location(&self, location: Option<&str>) -> Hits {
        let needle = location?.to_lowercase();
        let contains = |field: &Option<String>| {
            field
                .as_deref()
                .is_some_and(|value| value.to_lowercase().contains(&needle))
        };

        Some(
            self.doctors
                .iter()
                .enumerate()
                .filter(|(_, doctor)| contains(&doctor.location) || contains(&doctor.address))
                .map(|(index, _)| index)
                .collect(),
        )
    }

    async fn all(&self) -> Vec<usize> {
        (0..self.doctors.len()).collect()
    }

    async fn run(&self, query: &SearchQuery) -> Vec<Doctor> {
        let (names, specialties, locations, all) = join4(
            self.by_name(query.name()),
            self.by_specialty(query.specialty()),
            self.by_location(query.location()),
            self.all(),
        )
        .await;

        let criteria: Vec<HashSet<usize>> = [names, specialties, locations]
            .into_iter()
            .flatten()
            .collect();

        let doctors: Vec<Doctor> = all
            .into_iter()
            .filter(|index| criteria.iter().all(|hits| hits.contains(index)))
            .map(|index| self.doctors[index].clone())
            .collect();

        tracing::debug!(
            criteria = criteria.len(),
            matched = doctors.len(),
            "directory search finished"
        );

        doctors
    }
}

impl SearchProvider for DirectorySearch {
    fn search<'a>(&'a self, query: &'a SearchQuery) -> BoxFuture<'a, Result<Vec<Doctor>>> {
        let span = tracing::debug_span!("directory_search", ?query);
        async move { Ok(self.run(query).await) }.instrument(span).boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    fn directory() -> DirectorySearch {
        DirectorySearch::new(vec![
            Doctor::new("Dr. Ada Byron", "Cardiology").with_location("Springfield"),
            Doctor::new("Dr. Bea Curie", "Oncology").with_address("4 Elm St, Shelbyville"),
            Doctor::new("Dr. Cal Darwin", "Cardiology").with_address("9 Oak Ave, Springfield"),
            Doctor::new("Dr. Dee Euler", "Dermatology"),
        ])
    }

    fn names(doctors: &[Doctor]) -> Vec<&str> {
        doctors.iter().map(|d| d.name.as_str()).collect()
    }

    #[test]
    fn empty_query_returns_everything_in_order() {
        let found = block_on(directory().search(&SearchQuery::default())).unwrap();
        assert_eq!(
            names(&found),
            ["Dr. Ada Byron", "Dr. Bea Curie", "Dr. Cal Darwin", "Dr. Dee Euler"]
        );
    }

    #[test]
    fn specialty_is_case_insensitive() {
        let query = SearchQuery::default().with_specialty("CARDIOLOGY");
        let found = block_on(directory().search(&query)).unwrap();
        assert_eq!(names(&found), ["Dr. Ada Byron", "Dr. Cal Darwin"]);
    }

    #[test]
    fn location_checks_location_and_address() {
        let query = SearchQuery::default().with_location("springfield");
        let found = block_on(directory().search(&query)).unwrap();
        assert_eq!(names(&found), ["Dr. Ada Byron", "Dr. Cal Darwin"]);
    }

    #[test]
    fn name_is_fuzzy() {
        let query = SearchQuery::default().with_name("bea cur");
        let found = block_on(directory().search(&query)).unwrap();
        assert_eq!(names(&found), ["Dr. Bea Curie"]);
    }

    #[test]
    fn criteria_intersect() {
        let query = SearchQuery::default()
            .with_specialty("Cardiology")
            .with_location("Oak Ave");
        let found = block_on(directory().search(&query)).unwrap();
        assert_eq!(names(&found), ["Dr. Cal Darwin"]);

        let none = SearchQuery::default()
            .with_specialty("Oncology")
            .with_location("Springfield");
        assert!(block_on(directory().search(&none)).unwrap().is_empty());
    }

    #[test]
    fn loads_from_source() {
        let source = vec![Doctor::new("A", "X")];
        let search = DirectorySearch::from_source(&source).unwrap();
        assert_eq!(search.len(), 1);
    }
}
