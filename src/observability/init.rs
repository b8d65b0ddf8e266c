//! Tracing initialization and subscriber setup.

use std::path::PathBuf;

use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::file_writer::RotationPolicy;
use super::tracer;
use crate::domain::{BookworldError, Result};
use crate::infrastructure::{expand_tilde, get_data_dir};
use crate::Config;

/// Service and instrumentation scope name.
pub const SERVICE_NAME: &str = "bookworld";

/// Name of the live trace file in the trace directory.
pub const TRACE_FILE: &str = "bookworld-otlp.json";

const DEFAULT_LEVEL: &str = "info";

/// Directory the trace file is written to.
#[must_use]
pub fn trace_dir(config: &Config) -> PathBuf {
    config
        .trace_dir
        .as_deref()
        .map_or_else(get_data_dir, |dir| PathBuf::from(expand_tilde(dir)))
}

/// Installs the global subscriber: an `EnvFilter` built from
/// `config.trace_level` feeding an OpenTelemetry layer that exports to
/// [`TRACE_FILE`].
///
/// Calling this again after a subscriber is installed has no effect.
///
/// # Errors
///
/// Nothing is installed, and the plugin runs untraced, when:
/// - `trace_level` is not a valid filter directive ([`BookworldError::Config`])
/// - the trace directory cannot be created ([`BookworldError::Io`])
pub fn init_tracing(config: &Config) -> Result<()> {
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);
    let filter = EnvFilter::try_new(level)
        .map_err(|e| BookworldError::Config(format!("invalid trace_level {level:?}: {e}")))?;

    let dir = trace_dir(config);
    std::fs::create_dir_all(&dir)?;

    let resource = Resource::new(vec![
        KeyValue::new("service.name", SERVICE_NAME),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);
    let provider = tracer::create_tracer_provider(
        dir.join(TRACE_FILE),
        RotationPolicy::default(),
        resource,
        SERVICE_NAME,
    );

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME)));

    let _ = subscriber.try_init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trace_dir_defaults_to_data_dir() {
        assert_eq!(trace_dir(&Config::default()), get_data_dir());
    }

    #[test]
    fn invalid_level_is_a_config_error() {
        let config = Config {
            trace_level: Some("bookworld=loud".to_string()),
            ..Config::default()
        };
        assert!(matches!(init_tracing(&config), Err(BookworldError::Config(_))));
    }

    #[test]
    fn trace_dir_expands_tilde() {
        let config = Config {
            trace_dir: Some("~/traces".to_string()),
            ..Config::default()
        };
        assert_eq!(trace_dir(&config), PathBuf::from("/host/traces"));
    }
}
