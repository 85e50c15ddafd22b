//! OpenTelemetry-based observability with file-based trace export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK provider → FileSpanExporter → JSON lines
//! ```
//!
//! Spans land in `~/.local/share/zellij/shoplist/shoplist-otlp.json` (seen as
//! `/host/...` from inside the sandbox), one OTLP document per line. The file
//! rotates at 5 MB and keeps two backups.
//!
//! The filter is the plugin's `trace_level` option, `info` by default.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - `tracer`: Tracer provider with the file exporter
//! - `span_formatter`: OTLP JSON serialization
//! - `file_writer`: Rotating line writer

mod file_writer;
pub mod init;
mod span_formatter;
mod tracer;

pub use init::init_tracing;
