//! Storage layer for the doctor directory.
//!
//! The block itself only ever sees search results, but a directory has to
//! come from somewhere. This module persists the records the in-memory
//! search runs against as one versioned JSON file.
//!
//! # Modules
//!
//! - `backend`: [`DirectorySource`] trait over record sources
//! - `json`: JSON file-backed directory with atomic saves
//! - `models`: On-disk record types, separate from domain models

pub mod backend;
pub mod json;
pub mod models;

pub use backend::DirectorySource;
pub use json::JsonDirectory;
pub use models::DoctorRecord;
