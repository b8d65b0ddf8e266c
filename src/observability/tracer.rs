//! Tracer provider whose exporter appends OTLP JSON lines to a file.
//!
//! Zellij plugins run in a WASI sandbox without sockets of their own, so
//! spans go to the plugin data directory instead of a collector.

use std::path::PathBuf;

use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::{Config as TraceConfig, TracerProvider};

use super::file_writer::{RotatingWriter, RotationPolicy};
use super::span_formatter::otlp_document;

/// Exports each batch as one OTLP JSON line.
struct FileSpanExporter {
    writer: RotatingWriter,
    resource: Resource,
    scope: &'static str,
    shut_down: bool,
}

impl FileSpanExporter {
    const fn new(writer: RotatingWriter, resource: Resource, scope: &'static str) -> Self {
        Self {
            writer,
            resource,
            scope,
            shut_down: false,
        }
    }

    fn write_batch(&self, batch: &[SpanData]) -> ExportResult {
        if self.shut_down {
            return Err(TraceError::from("trace exporter is shut down"));
        }
        if batch.is_empty() {
            return Ok(());
        }

        let line = otlp_document(&self.resource, self.scope, batch).to_string();
        self.writer
            .write_line(&line)
            .map_err(|e| TraceError::from(format!("writing {}: {e}", self.writer.path().display())))
    }
}

impl SpanExporter for FileSpanExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = self.write_batch(&batch);
        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.shut_down = true;
    }

    fn set_resource(&mut self, resource: &Resource) {
        self.resource = resource.clone();
    }
}

impl std::fmt::Debug for FileSpanExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileSpanExporter")
            .field("writer", &self.writer)
            .field("scope", &self.scope)
            .field("shut_down", &self.shut_down)
            .finish_non_exhaustive()
    }
}

/// Builds a provider that exports every finished span synchronously to
/// `file_path`.
pub fn create_tracer_provider(
    file_path: PathBuf,
    policy: RotationPolicy,
    resource: Resource,
    scope: &'static str,
) -> TracerProvider {
    let writer = RotatingWriter::new(file_path, policy);
    let exporter = FileSpanExporter::new(writer, resource.clone(), scope);

    TracerProvider::builder()
        .with_config(TraceConfig::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use opentelemetry::trace::{Tracer as _, TracerProvider as _};
    use opentelemetry::KeyValue;
    use tempfile::TempDir;

    #[test]
    fn finished_spans_are_written_as_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bookworld-otlp.json");
        let provider = create_tracer_provider(
            path.clone(),
            RotationPolicy::default(),
            Resource::new(vec![KeyValue::new("service.name", "bookworld")]),
            "bookworld",
        );

        provider.tracer("bookworld").in_span("fetch_results", |_cx| {});

        let contents = std::fs::read_to_string(&path).unwrap();
        let line: serde_json::Value = serde_json::from_str(contents.lines().next().unwrap()).unwrap();
        assert_eq!(
            line["resourceSpans"][0]["scopeSpans"][0]["spans"][0]["name"],
            "fetch_results"
        );
    }

    #[test]
    fn shut_down_exporter_rejects_batches() {
        let dir = TempDir::new().unwrap();
        let writer = RotatingWriter::new(dir.path().join("t.json"), RotationPolicy::default());
        let mut exporter = FileSpanExporter::new(writer, Resource::empty(), "bookworld");

        assert!(exporter.write_batch(&[]).is_ok());
        exporter.shutdown();
        assert!(exporter.write_batch(&[]).is_err());
    }
}
