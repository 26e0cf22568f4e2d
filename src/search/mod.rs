//! Search collaborator feeding the block its records.
//!
//! The block never knows where doctors come from: it awaits one
//! [`SearchProvider::search`] call during initialization. [`DirectorySearch`]
//! is the in-memory provider over a loaded directory.
//!
//! # Modules
//!
//! - `query`: Search criteria taken from the page
//! - `provider`: The async provider trait
//! - `directory`: In-memory provider running its queries concurrently

pub mod directory;
pub mod provider;
pub mod query;

pub use directory::DirectorySearch;
pub use provider::SearchProvider;
pub use query::SearchQuery;
