//! Application layer coordinating state, events and the block controller.
//!
//! This module sits between the page (which forwards control interactions
//! and viewport changes) and the UI layer (which renders markup from state).
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! Page Input → Event → handle_event → LocatorState setters → StateEvent
//!                                            ↑                    ↓
//!                              Deferred mutations ◄──── subscribed views re-render
//! ```
//!
//! # Modules
//!
//! - [`controller`]: The block owning state, views, search and viewport
//! - [`events`]: Change notifications, subscriber registry, deferred mutations
//! - [`handler`]: Control interactions mapped to state mutations
//! - [`modes`]: View mode, viewport tier and page size types
//! - [`resize`]: Viewport evaluation and the mobile layout policy
//! - [`state`]: Observable state and view model computation
//!
//! # Example
//!
//! ```rust
//! use doctor_locator::app::{handle_event, Event, LocatorBlock, ViewMode, ViewportWidth};
//! use doctor_locator::search::DirectorySearch;
//! use doctor_locator::Config;
//!
//! let mut block = LocatorBlock::new(&Config::default(), DirectorySearch::default(), ViewportWidth::new(1280));
//! assert!(handle_event(&mut block, &Event::SetViewMode(ViewMode::Grid)));
//! ```

pub mod controller;
pub mod events;
pub mod handler;
pub mod modes;
pub mod resize;
pub mod state;

pub use controller::LocatorBlock;
pub use events::{Deferred, Mutation, StateEvent, SubscriberId};
pub use handler::{handle_event, Event};
pub use modes::{PageSizes, ViewMode, ViewportTier};
pub use resize::{ResizeAdapter, Viewport, ViewportWidth};
pub use state::LocatorState;
