//! Tracing initialization and subscriber setup.

use super::exporter;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service name attached to exported spans.
const SERVICE_NAME: &str = "doctor-locator";

/// Installs the global tracing subscriber.
///
/// # Parameters
///
/// * `config` - Block configuration; `trace_level` and `trace_file` are read
///
/// # Initialization Behavior
///
/// - With `trace_file` set, spans are exported as JSON lines to that file
///   (parent directories are created; rotation at 10 MiB, 3 backups)
/// - Without it, events are formatted to stderr
/// - If the trace file's directory cannot be created, falls back to stderr
/// - Idempotent: only the first call in a process installs a subscriber
///
/// # Example
///
/// ```rust
/// use doctor_locator::observability::init_tracing;
/// use doctor_locator::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// init_tracing(&config);
///
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&level));

    let trace_file = config.trace_file.as_ref().filter(|path| {
        path.parent()
            .map_or(true, |dir| dir.as_os_str().is_empty() || std::fs::create_dir_all(dir).is_ok())
    });

    let otel_layer = trace_file.map(|path| {
        let resource = Resource::new(vec![opentelemetry::KeyValue::new(
            "service.name",
            SERVICE_NAME,
        )]);
        let provider = exporter::create_tracer_provider(path.clone(), resource, SERVICE_NAME);
        let tracer = provider.tracer(SERVICE_NAME);
        let _ = opentelemetry::global::set_tracer_provider(provider);
        OpenTelemetryLayer::new(tracer)
    });

    let fmt_layer = otel_layer.is_none().then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
    });

    let result = tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .with(fmt_layer)
        .try_init();

    if result.is_ok() {
        tracing::debug!(level = %level, trace_file = ?trace_file, "tracing initialized");
    }
}
