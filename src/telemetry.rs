//! Tracing subscriber initialization.
//!
//! `RUST_LOG` takes precedence; otherwise the configured `server.log_level`
//! directive is used. Production emits one JSON object per event, every other
//! environment gets the human-readable formatter.

use tracing_subscriber::filter::ParseError;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;

/// Install the global tracing subscriber.
///
/// # Errors
///
/// Returns an error if the log directive cannot be parsed or a global
/// subscriber has already been set.
pub fn init_tracing(config: &ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| configured_filter(&config.log_level))?;

    let registry = tracing_subscriber::registry().with(env_filter);

    if config.is_production() {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_target(true),
            )
            .try_init()?;
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init()?;
    }

    Ok(())
}

fn configured_filter(directive: &str) -> Result<EnvFilter, ParseError> {
    EnvFilter::try_new(directive)
}
