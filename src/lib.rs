//! Doctor Locator: reactive state and views for a "find a doctor" page block.
//!
//! The block shows the results of one doctor search and lets visitors:
//! - Filter by specialty through a dropdown
//! - Switch between a full list and a paged card grid
//! - Page through the grid
//!
//! The layout follows the viewport: narrow screens get a smaller grid page,
//! no pagination or toggle controls, and are pinned to the grid.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Block Controller (app/controller)                  │  ← Entry point
//! │  - Initial search                                   │
//! │  - Event handling (app/handler)                     │
//! │  - Resize policy (app/resize)                       │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observable State (app/state)                       │  ← Single source of truth
//! │  - Typed change events + deferred mutations         │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Search        │   │ Storage       │
//! │ (ui/)         │   │ (search/)     │   │ (storage/)    │
//! │ - Views       │   │ - Provider    │   │ - JSON file   │
//! │ - Labels      │   │ - Directory   │   │ - Atomic save │
//! │ - Card markup │   │   queries     │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Infrastructure                            │
//! │  - Doctor, CategoryFilter, errors (domain/)         │
//! │  - Path expansion (infrastructure/)                 │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - tracing subscriber, OpenTelemetry file export    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! Blocks are configured by the key/value rows authored on the page:
//!
//! ```text
//! | Find a Doctor     |              |
//! | Page Size Desktop | 6            |
//! | Page Size Mobile  | 5            |
//! | Specialties       | Cardiology, Dermatology, Oncology |
//! | Labels            | es           |
//! ```
//!
//! # Example
//!
//! ```rust
//! use doctor_locator::app::{handle_event, Event, ViewMode, ViewportWidth};
//! use doctor_locator::search::{DirectorySearch, SearchQuery};
//! use doctor_locator::{initialize, Config, Doctor};
//!
//! let search = DirectorySearch::new(vec![
//!     Doctor::new("Dr. Ada Byron", "Cardiology"),
//!     Doctor::new("Dr. Bea Curie", "Oncology"),
//! ]);
//!
//! let mut block = initialize(&Config::default(), search, ViewportWidth::new(1280));
//! futures::executor::block_on(block.initialize(&SearchQuery::default()));
//!
//! handle_event(&mut block, &Event::SetViewMode(ViewMode::Grid));
//! assert!(block.html().contains("Page 1 of 1"));
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod search;
pub mod storage;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Event, LocatorBlock, LocatorState, ViewMode, ViewportTier};
pub use domain::{CategoryFilter, Doctor, LocatorError, Result};
pub use ui::{Labels, TruncationLimits};

use app::modes::PageSizes;
use app::resize::{Viewport, DEFAULT_BREAKPOINT};
use infrastructure::resolve_path;
use search::SearchProvider;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Block configuration.
///
/// Built from the block's key/value rows with [`Config::from_block`] or from
/// a TOML file with [`Config::from_file`]. Both accept the same keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Grid page size at or above the breakpoint. Default: 6
    pub page_size_desktop: usize,

    /// Grid page size below the breakpoint. Default: 5
    pub page_size_mobile: usize,

    /// Viewport width in pixels below which the mobile layout applies.
    /// Default: 1024
    ///
    /// The tier comes from the [`Viewport`](app::Viewport) handed to the
    /// block, so this only applies to viewports built with
    /// [`Config::viewport`].
    pub breakpoint: u32,

    /// Specialties offered by the dropdown. Empty means "derive from results".
    pub specialties: Vec<String>,

    /// Built-in label set name (`en`, `es`). Ignored if `labels_file` loads.
    pub labels_name: Option<String>,

    /// Path to a TOML label set. See [`ui::labels`] for format.
    pub labels_file: Option<PathBuf>,

    /// Tracing filter directive, e.g. `debug`. Default: `"info"`
    pub trace_level: Option<String>,

    /// When set, spans are exported as JSON lines to this file.
    pub trace_file: Option<PathBuf>,

    /// Character budgets for truncated card fields.
    pub truncation: TruncationLimits,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size_desktop: PageSizes::DEFAULT_DESKTOP,
            page_size_mobile: PageSizes::DEFAULT_MOBILE,
            breakpoint: DEFAULT_BREAKPOINT,
            specialties: Vec::new(),
            labels_name: None,
            labels_file: None,
            trace_level: None,
            trace_file: None,
            truncation: TruncationLimits::default(),
        }
    }
}

impl Config {
    /// Parses configuration from a block's key/value rows.
    ///
    /// # Parsing Rules
    ///
    /// - Keys are trimmed, lowercased, and spaces or underscores become dashes,
    ///   so `Page Size Desktop` and `page_size_desktop` both work
    /// - `page-size-desktop`, `page-size-mobile`: positive integer, default on
    ///   parse error or zero
    /// - `breakpoint`: positive integer, default 1024
    /// - `specialties`: comma-separated, blanks dropped
    /// - `labels`: built-in set name; `labels-file`: path (`~` expanded)
    /// - `trace-level`; `trace-file`: path (`~` expanded)
    /// - `max-name`, `max-specialty`, `max-phone`, `max-address`: positive
    ///   integers overriding the truncation budgets
    /// - Unknown keys are ignored
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use doctor_locator::Config;
    ///
    /// let mut rows = BTreeMap::new();
    /// rows.insert("Page Size Desktop".to_string(), "9".to_string());
    /// rows.insert("Specialties".to_string(), "Cardiology, Oncology".to_string());
    ///
    /// let config = Config::from_block(&rows);
    /// assert_eq!(config.page_size_desktop, 9);
    /// assert_eq!(config.page_size_mobile, 5);
    /// assert_eq!(config.specialties, vec!["Cardiology", "Oncology"]);
    /// ```
    #[must_use]
    pub fn from_block(rows: &BTreeMap<String, String>) -> Self {
        let rows: BTreeMap<String, &str> = rows
            .iter()
            .map(|(key, value)| (normalize_key(key), value.trim()))
            .collect();
        let get = |key: &str| rows.get(key).copied().filter(|v| !v.is_empty());

        let defaults = Self::default();
        let positive = |key: &str, fallback: usize| {
            get(key)
                .and_then(|v| v.parse::<usize>().ok())
                .filter(|n| *n > 0)
                .unwrap_or(fallback)
        };

        let truncation = TruncationLimits {
            name: positive("max-name", defaults.truncation.name),
            specialty: positive("max-specialty", defaults.truncation.specialty),
            phone: positive("max-phone", defaults.truncation.phone),
            address: positive("max-address", defaults.truncation.address),
        };

        Self {
            page_size_desktop: positive("page-size-desktop", defaults.page_size_desktop),
            page_size_mobile: positive("page-size-mobile", defaults.page_size_mobile),
            breakpoint: get("breakpoint")
                .and_then(|v| v.parse::<u32>().ok())
                .filter(|n| *n > 0)
                .unwrap_or(defaults.breakpoint),
            specialties: get("specialties")
                .map(|v| {
                    v.split(',')
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .map(String::from)
                        .collect()
                })
                .unwrap_or_default(),
            labels_name: get("labels").map(String::from),
            labels_file: get("labels-file").and_then(resolve_path),
            trace_level: get("trace-level").map(String::from),
            trace_file: get("trace-file").and_then(resolve_path),
            truncation,
        }
    }

    /// Reads configuration from a TOML file with the same keys as
    /// [`from_block`](Self::from_block).
    ///
    /// Values may be strings or integers; `specialties` may also be an array.
    ///
    /// # Errors
    ///
    /// Returns [`LocatorError::Config`] if the file cannot be read or is not a
    /// TOML table.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            LocatorError::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        let table: toml::Table = contents
            .parse()
            .map_err(|e| LocatorError::Config(format!("failed to parse config TOML: {e}")))?;

        let rows: BTreeMap<String, String> = table
            .into_iter()
            .filter_map(|(key, value)| toml_scalar(value).map(|v| (key, v)))
            .collect();

        tracing::debug!(path = %path.display(), keys = rows.len(), "config file loaded");
        Ok(Self::from_block(&rows))
    }

    /// Resolves the label set: file, then named built-in, then English.
    #[must_use]
    pub fn labels(&self) -> Labels {
        if let Some(file) = &self.labels_file {
            match Labels::from_file(file) {
                Ok(labels) => return labels,
                Err(e) => {
                    tracing::debug!(labels_file = %file.display(), error = %e, "failed to load labels from file, trying built-in");
                }
            }
        }

        self.labels_name.as_ref().map_or_else(Labels::default, |name| {
            Labels::from_name(name).unwrap_or_else(|| {
                tracing::debug!(labels = %name, "unknown label set, using default");
                Labels::default()
            })
        })
    }

    /// A width-based viewport using this configuration's breakpoint.
    #[must_use]
    pub const fn viewport(&self, width: u32) -> app::ViewportWidth {
        app::ViewportWidth::with_breakpoint(width, self.breakpoint)
    }
}

fn normalize_key(key: &str) -> String {
    key.trim()
        .to_lowercase()
        .split(|c: char| c.is_whitespace() || c == '_' || c == '-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

fn toml_scalar(value: toml::Value) -> Option<String> {
    match value {
        toml::Value::String(s) => Some(s),
        toml::Value::Integer(i) => Some(i.to_string()),
        toml::Value::Boolean(b) => Some(b.to_string()),
        toml::Value::Array(items) => Some(
            items
                .into_iter()
                .filter_map(toml_scalar)
                .collect::<Vec<_>>()
                .join(","),
        ),
        _ => None,
    }
}

/// Builds a block from configuration.
///
/// # Parameters
///
/// * `config` - Block configuration
/// * `provider` - Search the block will run on [`LocatorBlock::initialize`]
/// * `viewport` - Viewport the layout follows
///
/// # Returns
///
/// A block rendered in its empty state, ready for `initialize`.
pub fn initialize<P, V>(config: &Config, provider: P, viewport: V) -> LocatorBlock
where
    P: SearchProvider + 'static,
    V: Viewport + 'static,
{
    tracing::debug!("initializing doctor locator block");
    LocatorBlock::new(config, provider, viewport)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ViewportWidth;
    use crate::search::DirectorySearch;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn rows(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn block_rows_fall_back_on_bad_values() {
        let config = Config::from_block(&rows(&[
            ("page-size-desktop", "0"),
            ("Page Size Mobile", "many"),
            ("breakpoint", "-3"),
            ("specialties", " , "),
        ]));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn block_rows_override_defaults() {
        let config = Config::from_block(&rows(&[
            ("PAGE_SIZE_MOBILE", "3"),
            ("Breakpoint", "768"),
            ("Max Name", "10"),
            ("labels", "es"),
            ("trace-level", "debug"),
        ]));
        assert_eq!(config.page_size_mobile, 3);
        assert_eq!(config.breakpoint, 768);
        assert_eq!(config.truncation.name, 10);
        assert_eq!(config.truncation.address, 60);
        assert_eq!(config.labels().next, "Siguiente");
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn file_accepts_integers_and_arrays() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "page-size-desktop = 8\nspecialties = [\"Cardiology\", \"Oncology\"]\nlabels = \"es\""
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.page_size_desktop, 8);
        assert_eq!(config.specialties, ["Cardiology", "Oncology"]);
        assert_eq!(config.labels_name.as_deref(), Some("es"));
    }

    #[test]
    fn missing_or_invalid_file_is_config_error() {
        assert!(matches!(
            Config::from_file("/nonexistent/locator.toml"),
            Err(LocatorError::Config(_))
        ));

        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "page-size-desktop = = 3").unwrap();
        assert!(matches!(
            Config::from_file(file.path()),
            Err(LocatorError::Config(_))
        ));
    }

    #[test]
    fn broken_labels_file_falls_back_to_named_set() {
        let config = Config {
            labels_file: Some(PathBuf::from("/nonexistent/labels.toml")),
            labels_name: Some("es".to_string()),
            ..Config::default()
        };
        assert_eq!(config.labels().all, "Todas");

        let unknown = Config {
            labels_name: Some("fr".to_string()),
            ..Config::default()
        };
        assert_eq!(unknown.labels(), Labels::default());
    }

    #[test]
    fn viewport_uses_configured_breakpoint() {
        let config = Config {
            breakpoint: 600,
            ..Config::default()
        };
        assert!(!config.viewport(700).is_narrow());
        assert!(config.viewport(599).is_narrow());
    }

    #[test]
    fn configured_breakpoint_reaches_the_block() {
        let config = Config {
            breakpoint: 600,
            ..Config::default()
        };
        let block = initialize(&config, DirectorySearch::default(), config.viewport(700));
        assert_eq!(block.state().tier(), ViewportTier::Desktop);

        let block = initialize(&Config::default(), DirectorySearch::default(), ViewportWidth::new(700));
        assert_eq!(block.state().tier(), ViewportTier::Mobile);
    }
}
