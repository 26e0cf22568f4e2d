//! OpenTelemetry span exporter writing one JSON document per span.
//!
//! Each finished span becomes a single line in the trace file, so the file
//! can be tailed and grepped while a page is being exercised.

use super::file_writer::RotatingFile;
use chrono::{DateTime, SecondsFormat, Utc};
use futures_util::future::BoxFuture;
use opentelemetry::trace::{SpanId, Status, TraceError};
use opentelemetry::KeyValue;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use serde_json::{json, Map, Value as JsonValue};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::SystemTime;

/// Span exporter appending JSON lines to a [`RotatingFile`].
pub struct SpanLineExporter {
    writer: RotatingFile,
    service: String,
    is_shutdown: AtomicBool,
}

impl SpanLineExporter {
    pub fn new(writer: RotatingFile, service: impl Into<String>) -> Self {
        Self {
            writer,
            service: service.into(),
            is_shutdown: AtomicBool::new(false),
        }
    }

    fn format_span(&self, span: &SpanData) -> JsonValue {
        let parent = (span.parent_span_id != SpanId::INVALID)
            .then(|| format!("{:016x}", span.parent_span_id));
        let duration_us = span
            .end_time
            .duration_since(span.start_time)
            .map_or(0, |d| u64::try_from(d.as_micros()).unwrap_or(u64::MAX));

        let events: Vec<JsonValue> = span
            .events
            .iter()
            .map(|event| {
                json!({
                    "name": event.name,
                    "time": timestamp(event.timestamp),
                    "attributes": attributes(&event.attributes),
                })
            })
            .collect();

        json!({
            "service": self.service,
            "name": span.name,
            "trace_id": format!("{:032x}", span.span_context.trace_id()),
            "span_id": format!("{:016x}", span.span_context.span_id()),
            "parent_span_id": parent,
            "start": timestamp(span.start_time),
            "end": timestamp(span.end_time),
            "duration_us": duration_us,
            "status": status(&span.status),
            "attributes": attributes(&span.attributes),
            "events": events,
        })
    }
}

fn timestamp(time: SystemTime) -> String {
    DateTime::<Utc>::from(time).to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn attributes(attributes: &[KeyValue]) -> JsonValue {
    let map: Map<String, JsonValue> = attributes
        .iter()
        .map(|kv| (kv.key.to_string(), JsonValue::String(kv.value.to_string())))
        .collect();
    JsonValue::Object(map)
}

fn status(status: &Status) -> JsonValue {
    match status {
        Status::Unset => json!("unset"),
        Status::Ok => json!("ok"),
        Status::Error { description } => json!({ "error": description }),
    }
}

impl SpanExporter for SpanLineExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        if self.is_shutdown.load(Ordering::SeqCst) {
            return Box::pin(std::future::ready(Err(TraceError::from(
                "exporter is shut down",
            ))));
        }

        let result = batch
            .iter()
            .try_for_each(|span| self.writer.write_line(&self.format_span(span).to_string()))
            .map_err(|e| TraceError::from(e.to_string()));

        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.is_shutdown.store(true, Ordering::SeqCst);
    }

    fn set_resource(&mut self, _res: &Resource) {}
}

impl std::fmt::Debug for SpanLineExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpanLineExporter")
            .field("writer", &self.writer)
            .field("service", &self.service)
            .field("is_shutdown", &self.is_shutdown)
            .finish()
    }
}

/// Builds a tracer provider exporting every span to `file_path` as it ends.
pub fn create_tracer_provider(file_path: PathBuf, resource: Resource, service: &str) -> TracerProvider {
    let exporter = SpanLineExporter::new(RotatingFile::new(file_path), service);

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use opentelemetry::trace::{Span as _, Tracer as _, TracerProvider as _};
    use tempfile::TempDir;

    #[test]
    fn writes_one_line_per_span() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("spans.jsonl");
        let provider = create_tracer_provider(path.clone(), Resource::empty(), "doctor-locator");
        let tracer = provider.tracer("test");

        tracer.in_span("initialize", |_| {
            let mut child = tracer.start("mutate");
            child.set_attribute(KeyValue::new("items", 3_i64));
            child.end();
        });

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<JsonValue> = contents
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["name"], "mutate");
        assert_eq!(lines[0]["service"], "doctor-locator");
        assert_eq!(lines[0]["attributes"]["items"], "3");
        assert_eq!(lines[0]["parent_span_id"], lines[1]["span_id"]);
        assert!(lines[1]["parent_span_id"].is_null());
    }

    #[test]
    fn refuses_after_shutdown() {
        let dir = TempDir::new().unwrap();
        let mut exporter =
            SpanLineExporter::new(RotatingFile::new(dir.path().join("spans.jsonl")), "doctor-locator");
        exporter.shutdown();
        assert!(futures::executor::block_on(exporter.export(Vec::new())).is_err());
    }
}
