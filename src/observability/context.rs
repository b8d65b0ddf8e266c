//! Trace context propagation across the `web_request` round-trip.
//!
//! Zellij answers a web request with a separate `WebRequestResult` event, so
//! the span that issued the request is long gone when the response arrives.
//! The issuing span's ids travel in the request's context map and are attached
//! as the remote parent of the span that handles the response.

use serde::{Deserialize, Serialize};

/// OpenTelemetry ids of the span that issued a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    /// OpenTelemetry trace ID as a hex string.
    pub trace_id: String,

    /// Span ID of the issuing span.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Captures the ids of the current tracing span.
    ///
    /// Returns `None` when no OpenTelemetry layer is installed or the span
    /// context is invalid.
    #[must_use]
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let otel_context = tracing::Span::current().context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if !span_context.is_valid() {
            return None;
        }

        Some(Self {
            trace_id: format!("{:032x}", span_context.trace_id()),
            parent_span_id: format!("{:016x}", span_context.span_id()),
        })
    }

    /// Attaches these ids as the remote parent for the current thread.
    ///
    /// The returned guard must be held while the response is handled.
    #[must_use]
    pub fn attach(&self) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{
            SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState,
        };

        let trace_id = TraceId::from_hex(&self.trace_id).ok()?;
        let span_id = SpanId::from_hex(&self.parent_span_id).ok()?;

        let span_context = SpanContext::new(
            trace_id,
            span_id,
            TraceFlags::SAMPLED,
            true,
            TraceState::default(),
        );

        Some(
            opentelemetry::Context::current()
                .with_remote_span_context(span_context)
                .attach(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_context_without_otel_layer() {
        assert_eq!(TraceContext::from_current(), None);
    }

    #[test]
    fn invalid_ids_do_not_attach() {
        let context = TraceContext {
            trace_id: "not-hex".to_string(),
            parent_span_id: "00f067aa0ba902b7".to_string(),
        };
        assert!(context.attach().is_none());
    }

    #[test]
    fn valid_ids_attach() {
        let context = TraceContext {
            trace_id: "4bf92f3577b34da6a3ce929d0e0e4736".to_string(),
            parent_span_id: "00f067aa0ba902b7".to_string(),
        };
        assert!(context.attach().is_some());
    }
}
