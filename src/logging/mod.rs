//! Logging bootstrap and masking
//!
//! The subscriber is built from resolved settings: `log.level` seeds the
//! filter (an explicit `RUST_LOG` still wins), `log.format` picks between
//! the colorized console format and line-delimited JSON. Both formats mask
//! sensitive field names, see [`mask`].

pub mod format;
pub mod mask;

pub use format::{JsonFormat, MaskFields};
pub use mask::{REDACTION_MARKER, is_sensitive};

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::config::{Environment, LogFormat, Settings};

/// Errors from logging setup
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("invalid log filter '{filter}': {source}")]
    InvalidFilter {
        filter: String,
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("failed to install global subscriber: {0}")]
    Subscriber(#[from] tracing_subscriber::util::TryInitError),
}

/// Install the global subscriber described by resolved settings
pub fn init(settings: &Settings) -> Result<(), LoggingError> {
    init_with(&settings.log.level, settings.log.format, settings.environment)
}

/// Install the global subscriber from explicit level, format and environment.
/// Fails if a subscriber is already installed.
pub fn init_with(
    level: &str,
    format: LogFormat,
    environment: Environment,
) -> Result<(), LoggingError> {
    let filter = build_filter(level, std::env::var("RUST_LOG").ok().as_deref())?;

    let layer = match format {
        LogFormat::Pretty => tracing_subscriber::fmt::layer()
            .compact()
            .with_ansi(true)
            .fmt_fields(MaskFields)
            .boxed(),
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .event_format(JsonFormat::new(environment))
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()?;
    Ok(())
}

fn build_filter(level: &str, rust_log: Option<&str>) -> Result<EnvFilter, LoggingError> {
    let directives = rust_log.unwrap_or(level);
    EnvFilter::try_new(directives).map_err(|source| LoggingError::InvalidFilter {
        filter: directives.to_string(),
        source,
    })
}
