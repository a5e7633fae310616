//! Subscriber installation.

use super::tracer;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Name of the trace file inside the data directory.
pub const TRACE_FILE: &str = "lumina-otlp.json";

const SERVICE_NAME: &str = "Lumina";

/// Installs the global subscriber exporting spans to
/// `<data_dir>/lumina-otlp.json`.
///
/// The filter comes from `config.trace_level` and defaults to `info`.
/// Tracing is optional: if the data directory cannot be created, nothing is
/// installed. Calling this more than once keeps the first subscriber.
///
/// # Example
///
/// ```no_run
/// use lumina::observability::init_tracing;
/// use lumina::Config;
///
/// let config = Config {
///     trace_level: Some("lumina=debug".to_string()),
///     ..Config::default()
/// };
/// init_tracing(&config);
/// tracing::debug!("tracing is active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or("info");

    if std::fs::create_dir_all(&config.data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![KeyValue::new("service.name", SERVICE_NAME)]);
    let provider = tracer::create_tracer_provider(config.data_dir.join(TRACE_FILE), resource);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(otel_layer)
        .try_init();
}
