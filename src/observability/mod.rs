//! OpenTelemetry-based observability with file-based trace export.
//!
//! ```text
//! tracing → tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → OTLP JSON lines
//! ```
//!
//! Traces land in `~/.local/share/zellij/bookworld/bookworld-otlp.json`
//! (or `trace_dir`), rotated by size into numbered backups. The filter comes
//! from the `trace_level` option, default `"info"`.
//!
//! Catalog requests carry the issuing span's ids (see [`TraceContext`]) so the
//! span handling a response is parented to the span that sent it.
//!
//! # Usage
//!
//! ```rust,no_run
//! use bookworld::observability::init_tracing;
//! use bookworld::Config;
//!
//! init_tracing(&Config::default())?;
//! tracing::debug!("plugin initialized");
//! # Ok::<(), bookworld::BookworldError>(())
//! ```

pub mod context;
mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use context::TraceContext;
pub use file_writer::RotationPolicy;
pub use init::{init_tracing, trace_dir, SERVICE_NAME, TRACE_FILE};
