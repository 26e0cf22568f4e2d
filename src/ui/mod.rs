//! Markup rendering layer with component-based architecture.
//!
//! This module turns [`LocatorState`](crate::app::LocatorState) into HTML
//! fragments. Each component owns one subtree of the block and replaces it
//! wholesale when the state announces a change it cares about.
//!
//! # Architecture
//!
//! ```text
//! LocatorState → compute_* → view model → component render → Subtree (HTML)
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Plain data the components render from
//! - [`renderer`]: Card template seam and the default HTML cards
//! - [`components`]: Subscribed views (list, pagination, filter, toggle, summary)
//! - [`helpers`]: Truncation, escaping and placeholder substitution
//! - [`labels`]: Localisable copy loaded from TOML

pub mod components;
pub mod helpers;
pub mod labels;
pub mod renderer;
pub mod viewmodel;

pub use components::{attach, Subtree, View};
pub use labels::Labels;
pub use renderer::{CardContext, HtmlCards, TemplateRenderer};
pub use viewmodel::{DoctorCard, EmptyState, TruncationLimits};
