//! OpenTelemetry tracing with file-based export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK provider → FileSpanExporter → lumina-otlp.json
//! ```
//!
//! Spans are written as OTLP JSON lines into the configured data directory.
//! The file rotates at 10 MB and keeps three backups. The level is taken from
//! the `trace_level` setting and falls back to `info`.
//!
//! - [`init`]: subscriber setup
//! - `tracer`: provider and exporter
//! - `span_formatter`: OTLP JSON encoding
//! - `file_writer`: rotating line file

mod file_writer;
pub mod init;
mod span_formatter;
mod tracer;

pub use init::{init_tracing, TRACE_FILE};
