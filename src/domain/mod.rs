//! Domain layer for the doctor locator.
//!
//! Core record and filter types plus the crate error, independent of how
//! records are fetched or rendered.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`doctor`]: Doctor record and the specialty filter
//!
//! # Examples
//!
//! ```
//! use doctor_locator::domain::{CategoryFilter, Doctor};
//!
//! let doctor = Doctor::new("Dr. Lin", "Pediatrics").with_phone("555-0100");
//! assert!(CategoryFilter::parse("Pediatrics").matches(&doctor));
//! ```

pub mod doctor;
pub mod error;

pub use doctor::{CategoryFilter, Doctor, ALL_SPECIALTIES};
pub use error::{LocatorError, Result};
