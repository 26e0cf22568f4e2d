//! Search provider abstraction.

use crate::domain::error::Result;
use crate::domain::Doctor;
use crate::search::query::SearchQuery;
use futures_util::future::BoxFuture;

/// Asynchronous source of search results.
///
/// The block awaits exactly one search per lifetime. A rejected search is
/// not fatal: the block logs it and shows the empty state.
pub trait SearchProvider {
    /// Runs `query`, resolving to the matching doctors in display order.
    fn search<'a>(&'a self, query: &'a SearchQuery) -> BoxFuture<'a, Result<Vec<Doctor>>>;
}
