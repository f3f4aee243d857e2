//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`SmartHomeError`] via `#[from]`.

/// Top-level error for domain and application operations.
#[derive(Debug, thiserror::Error)]
pub enum SmartHomeError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("entity not found")]
    NotFound(#[from] NotFoundError),

    /// Failure reported by a repository adapter.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// A domain invariant was violated.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} must not be blank")]
    Empty { field: &'static str },

    #[error("{field} out of range: {value}")]
    OutOfRange { field: &'static str, value: String },

    #[error("{field} is not a valid number: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("unsupported country: {0}")]
    UnsupportedCountry(String),

    #[error("invalid zip code {code:?} for {country}")]
    InvalidZipCode { country: String, code: String },

    #[error("a device must be active when created")]
    InactiveDevice,

    #[error("unknown sensor model: {0}")]
    UnknownSensorModel(String),

    #[error("unknown actuator model: {0}")]
    UnknownActuatorModel(String),

    #[error("value for model {found} does not fit model {expected}")]
    ValueModelMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("expected ON or OFF, got {0:?}")]
    InvalidOnOff(String),

    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("period end is before its start")]
    InvalidPeriod,

    #[error("interval must be strictly positive, got {0} minutes")]
    InvalidInterval(i64),

    #[error("instrument belongs to a different device")]
    DeviceMismatch,

    #[error("expected model {expected}, got {found}")]
    IncompatibleModel { expected: &'static str, found: String },

    #[error("no readings match the request")]
    NoReadings,
}

/// A referenced aggregate does not exist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

impl NotFoundError {
    #[must_use]
    pub fn new(entity: &'static str, id: impl std::fmt::Display) -> Self {
        Self {
            entity,
            id: id.to_string(),
        }
    }
}
