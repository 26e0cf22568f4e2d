//! Tracing setup with optional OpenTelemetry file export.
//!
//! Library code only emits `tracing` spans and events. This module is what an
//! embedder calls once to decide where they go.
//!
//! # Architecture
//!
//! ```text
//! tracing macros → EnvFilter ─┬→ fmt layer → stderr              (no trace file)
//!                             └→ tracing-opentelemetry → SDK
//!                                  → SpanLineExporter → RotatingFile (trace file set)
//! ```
//!
//! # Configuration
//!
//! The level is resolved in this order:
//! 1. `RUST_LOG` environment variable
//! 2. `trace-level` block option ([`Config::trace_level`](crate::Config::trace_level))
//! 3. Default: `"info"`
//!
//! # Modules
//!
//! - `init`: Subscriber assembly
//! - `exporter`: OpenTelemetry span exporter writing one JSON line per span
//! - `file_writer`: Size-rotated append-only file

mod exporter;
mod file_writer;
mod init;

pub use init::init_tracing;
