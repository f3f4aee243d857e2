//! Values an actuator can be driven to, one shape per catalog model.

use std::fmt;

use super::kind::ActuatorKind;
use crate::error::ValidationError;
use crate::measure::{OnOff, Percent};

/// Decimal set point in `0..=100`, kept to three decimal places.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct DecimalSetPoint(f64);

impl DecimalSetPoint {
    /// # Errors
    ///
    /// Returns [`ValidationError::OutOfRange`] outside `0..=100`.
    pub fn new(value: f64) -> Result<Self, ValidationError> {
        if !(0.0..=100.0).contains(&value) {
            return Err(ValidationError::OutOfRange {
                field: "set point",
                value: value.to_string(),
            });
        }
        Ok(Self((value * 1000.0).round() / 1000.0))
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

/// Whole set point in `-50..=50`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IntegerSetPoint(i32);

impl IntegerSetPoint {
    /// # Errors
    ///
    /// Returns [`ValidationError::OutOfRange`] outside `-50..=50`.
    pub fn new(value: i32) -> Result<Self, ValidationError> {
        if !(-50..=50).contains(&value) {
            return Err(ValidationError::OutOfRange {
                field: "set point",
                value: value.to_string(),
            });
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn value(self) -> i32 {
        self.0
    }
}

/// Command accepted by an actuator, tagged by the model that accepts it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActuatorValue {
    Switch(OnOff),
    DecimalSetting(DecimalSetPoint),
    IntegerSetting(IntegerSetPoint),
    /// How far the blind is open.
    BlindPosition(Percent),
}

impl ActuatorValue {
    #[must_use]
    pub fn kind(&self) -> ActuatorKind {
        match self {
            Self::Switch(_) => ActuatorKind::Switch,
            Self::DecimalSetting(_) => ActuatorKind::DecimalSetting,
            Self::IntegerSetting(_) => ActuatorKind::IntegerSetting,
            Self::BlindPosition(_) => ActuatorKind::BlindRoller,
        }
    }
}

impl fmt::Display for ActuatorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Switch(state) => fmt::Display::fmt(state, f),
            Self::DecimalSetting(v) => fmt::Display::fmt(&v.value(), f),
            Self::IntegerSetting(v) => fmt::Display::fmt(&v.value(), f),
            Self::BlindPosition(p) => fmt::Display::fmt(p, f),
        }
    }
}
