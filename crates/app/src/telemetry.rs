//! Process-wide tracing subscriber.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{EnvFilter, filter::ParseError, fmt};

use crate::settings::Settings;

#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("invalid log filter directive")]
    InvalidFilter(#[from] ParseError),

    #[error("a global subscriber is already installed")]
    Init(#[from] TryInitError),
}

/// Install a formatting subscriber filtered by `filter` (`RUST_LOG` syntax).
///
/// # Errors
///
/// Returns [`TelemetryError::InvalidFilter`] for a malformed directive and
/// [`TelemetryError::Init`] when called more than once per process.
pub fn init(filter: &str) -> Result<(), TelemetryError> {
    let filter = EnvFilter::try_new(filter)?;
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .try_init()?;
    tracing::debug!("telemetry initialised");
    Ok(())
}

/// Same as [`init`], reading the directive from `settings`.
///
/// # Errors
///
/// See [`init`].
pub fn init_from(settings: &Settings) -> Result<(), TelemetryError> {
    init(&settings.logging.filter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_reject_malformed_filter() {
        let result = init("smarthome=loudest");
        assert!(matches!(result, Err(TelemetryError::InvalidFilter(_))));
    }

    #[test]
    fn should_refuse_second_initialisation() {
        let _ = init_from(&Settings::default());
        let result = init("smarthome=debug");
        assert!(matches!(result, Err(TelemetryError::Init(_))));
    }
}
