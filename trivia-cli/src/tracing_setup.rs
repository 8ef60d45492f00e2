//! Logging for the trivia CLI
//!
//! Logs go to stderr so `config show` and `completions` output stays clean.
//! Without `RUST_LOG` the filter covers the CLI, the server library and the
//! HTTP trace layer; `--debug` raises all three and adds sqlx.
//!
//! With the `telemetry` feature, `--otel` also ships spans over OTLP
//! (`OTEL_EXPORTER_OTLP_ENDPOINT`, default http://localhost:4317).

use anyhow::{anyhow, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "trivia=info,trivia_server=info,tower_http=info";
const DEBUG_FILTER: &str = "trivia=debug,trivia_server=debug,tower_http=debug,sqlx=info";

/// Flags that shape logging
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    pub debug: bool,
    pub otel: bool,
}

fn default_directives(config: &TracingConfig) -> &'static str {
    if config.debug {
        DEBUG_FILTER
    } else {
        DEFAULT_FILTER
    }
}

fn env_filter(config: &TracingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(config)))
}

/// Install the global subscriber.
pub fn init(config: &TracingConfig) -> Result<()> {
    let console = fmt::layer()
        .with_target(config.debug)
        .with_writer(std::io::stderr)
        .compact();

    let registry = tracing_subscriber::registry()
        .with(env_filter(config))
        .with(console);

    #[cfg(feature = "telemetry")]
    let registry = registry.with(if config.otel {
        Some(otlp::layer()?)
    } else {
        None
    });

    #[cfg(not(feature = "telemetry"))]
    if config.otel {
        eprintln!("--otel ignored: built without the `telemetry` feature");
    }

    registry.try_init().map_err(|err| anyhow!(err))
}

#[cfg(feature = "telemetry")]
mod otlp {
    use anyhow::{anyhow, Result};
    use opentelemetry::trace::TracerProvider as _;
    use opentelemetry::KeyValue;
    use opentelemetry_otlp::WithExportConfig;
    use opentelemetry_sdk::trace::{Tracer, TracerProvider};
    use tracing::Subscriber;
    use tracing_opentelemetry::OpenTelemetryLayer;
    use tracing_subscriber::registry::LookupSpan;

    pub fn layer<S>() -> Result<OpenTelemetryLayer<S, Tracer>>
    where
        S: Subscriber + for<'span> LookupSpan<'span>,
    {
        let endpoint = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
            .unwrap_or_else(|_| "http://localhost:4317".to_owned());

        let exporter = opentelemetry_otlp::SpanExporter::builder()
            .with_tonic()
            .with_endpoint(&endpoint)
            .build()
            .map_err(|e| anyhow!("OTLP exporter for {}: {}", endpoint, e))?;

        let provider = TracerProvider::builder()
            .with_batch_exporter(exporter, opentelemetry_sdk::runtime::Tokio)
            .with_resource(opentelemetry_sdk::Resource::new(vec![KeyValue::new(
                "service.name",
                "trivia",
            )]))
            .build();

        let tracer = provider.tracer("trivia");
        // Export stops if the provider is dropped
        let _ = opentelemetry::global::set_tracer_provider(provider);

        Ok(tracing_opentelemetry::layer().with_tracer(tracer))
    }
}

/// Flush pending spans
#[cfg(feature = "telemetry")]
pub fn shutdown_otel() {
    opentelemetry::global::shutdown_tracer_provider();
}

#[cfg(not(feature = "telemetry"))]
pub fn shutdown_otel() {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_names_trivia_crates() {
        let directives = default_directives(&TracingConfig::default());
        assert!(directives.contains("trivia_server=info"));
        assert!(directives.contains("tower_http=info"));
    }

    #[test]
    fn debug_raises_trivia_crates() {
        let directives = default_directives(&TracingConfig {
            debug: true,
            otel: false,
        });
        assert!(directives.contains("trivia_server=debug"));
        assert!(directives.parse::<EnvFilter>().is_ok());
    }
}
