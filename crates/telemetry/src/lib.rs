//! Tracing subscriber bootstrap for the library binaries.
//!
//! Events always go to stderr so they never interleave with the menu drawn
//! on stdout.

use anyhow::anyhow;
use library_kernel::settings::{LogFormat, TelemetrySettings};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

/// Build the filter: `RUST_LOG` wins over the configured directive.
fn build_env_filter(directive: &str) -> anyhow::Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(directive)
        .map_err(|e| anyhow!("invalid tracing filter '{}': {}", directive, e))
}

/// Initialize the tracing pipeline.
///
/// A subscriber installed earlier (tests, embedding) is left in place.
pub fn init(settings: &TelemetrySettings) -> anyhow::Result<()> {
    let filter = build_env_filter(&settings.filter)?;

    let layer: Box<dyn Layer<Registry> + Send + Sync> = match settings.log_format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .boxed(),
    };

    if tracing_subscriber::registry()
        .with(layer.with_filter(filter))
        .try_init()
        .is_err()
    {
        tracing::debug!(target: "library-telemetry", "subscriber already installed");
        return Ok(());
    }

    tracing::debug!(
        target: "library-telemetry",
        format = %settings.log_format,
        filter = %settings.filter,
        "telemetry initialized"
    );
    Ok(())
}
