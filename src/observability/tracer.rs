//! Tracer provider backed by the rotating trace file.

use super::file_writer::{RotatingFile, RotationPolicy};
use super::span_formatter::SpanFormatter;
use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

/// Span exporter that appends one OTLP JSON document per batch to a file.
///
/// Export is synchronous; the returned future is always ready.
struct FileSpanExporter {
    file: RotatingFile,
    formatter: SpanFormatter,
    stopped: AtomicBool,
}

impl FileSpanExporter {
    fn new(path: PathBuf, resource: Resource) -> Self {
        Self {
            file: RotatingFile::new(path, RotationPolicy::default()),
            formatter: SpanFormatter::new(resource),
            stopped: AtomicBool::new(false),
        }
    }

    fn write_batch(&self, batch: &[SpanData]) -> ExportResult {
        if self.stopped.load(Ordering::SeqCst) {
            return Err(TraceError::from("trace exporter already shut down"));
        }
        let line = self
            .formatter
            .format_batch(batch)
            .map_err(|e| TraceError::from(e.to_string()))?;
        self.file
            .append_line(&line)
            .map_err(|e| TraceError::from(e.to_string()))
    }
}

impl SpanExporter for FileSpanExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = self.write_batch(&batch);
        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    // The resource is fixed at construction.
    fn set_resource(&mut self, _res: &Resource) {}
}

impl std::fmt::Debug for FileSpanExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileSpanExporter")
            .field("file", &self.file)
            .field("stopped", &self.stopped)
            .finish_non_exhaustive()
    }
}

/// Builds a provider whose spans are exported, unbatched, to `path`.
pub fn create_tracer_provider(path: PathBuf, resource: Resource) -> TracerProvider {
    let exporter = FileSpanExporter::new(path, resource.clone());

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}
