//! Localisable UI copy for the block.
//!
//! Every user-visible string the views render comes from a [`Labels`] set.
//! Sets are either built in (embedded TOML) or loaded from a TOML file named in
//! the block configuration.
//!
//! # Built-in Sets
//!
//! - `en`: English (default)
//! - `es`: Spanish
//!
//! # TOML Format
//!
//! ```toml
//! name = "en"
//! all = "All"
//! filter_label = "Specialty"
//! list_view = "List"
//! grid_view = "Grid"
//! previous = "Previous"
//! next = "Next"
//! page_indicator = "Page {current} of {total}"
//! results_summary = "{count} doctors found"
//! empty_message = "No results found"
//! empty_subtitle = "Try another specialty or broaden your search."
//! ```
//!
//! # Example
//!
//! ```rust
//! use doctor_locator::ui::Labels;
//!
//! let labels = Labels::from_name("es").unwrap();
//! assert_eq!(labels.next, "Siguiente");
//! ```

use crate::domain::{LocatorError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A complete set of UI strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Labels {
    pub name: String,
    /// Label of the "All" dropdown option.
    pub all: String,
    pub filter_label: String,
    pub list_view: String,
    pub grid_view: String,
    pub previous: String,
    pub next: String,
    /// Template with `{current}` and `{total}` placeholders.
    pub page_indicator: String,
    /// Template with a `{count}` placeholder.
    pub results_summary: String,
    pub empty_message: String,
    #[serde(default)]
    pub empty_subtitle: String,
}

impl Labels {
    /// Loads a built-in label set by name. Returns `None` for unknown names.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "en" => include_str!("../../labels/en.toml"),
            "es" => include_str!("../../labels/es.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a label set from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`LocatorError::Labels`] if the file cannot be read or is not a
    /// complete label set.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| LocatorError::Labels(format!("failed to read labels file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| LocatorError::Labels(format!("failed to parse labels TOML: {e}")))
    }
}

impl Default for Labels {
    /// Returns the English label set.
    ///
    /// # Panics
    ///
    /// Panics if the embedded `en` set fails to parse, which the tests rule out.
    fn default() -> Self {
        Self::from_name("en").expect("built-in en labels should always parse")
    }
}
