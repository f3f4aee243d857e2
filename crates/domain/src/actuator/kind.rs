//! Closed catalog of supported actuator models.

use std::fmt;
use std::str::FromStr;

use super::value::{ActuatorValue, DecimalSetPoint, IntegerSetPoint};
use crate::error::ValidationError;
use crate::measure::{OnOff, Percent, parse_number};

/// Actuator hardware the system knows how to drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActuatorKind {
    /// `ONF01A`
    Switch,
    /// `SPV300`
    DecimalSetting,
    /// `SIV280`
    IntegerSetting,
    /// `OPNCL0100`
    BlindRoller,
}

impl ActuatorKind {
    pub const ALL: [Self; 4] = [
        Self::Switch,
        Self::DecimalSetting,
        Self::IntegerSetting,
        Self::BlindRoller,
    ];

    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Switch => "ONF01A",
            Self::DecimalSetting => "SPV300",
            Self::IntegerSetting => "SIV280",
            Self::BlindRoller => "OPNCL0100",
        }
    }

    /// Parse a textual command for this model.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when `raw` is malformed or out of the
    /// model's range.
    pub fn parse_value(self, raw: &str) -> Result<ActuatorValue, ValidationError> {
        let value = match self {
            Self::Switch => ActuatorValue::Switch(raw.parse::<OnOff>()?),
            Self::DecimalSetting => {
                ActuatorValue::DecimalSetting(DecimalSetPoint::new(parse_number("set point", raw)?)?)
            }
            Self::IntegerSetting => {
                ActuatorValue::IntegerSetting(IntegerSetPoint::new(parse_number("set point", raw)?)?)
            }
            Self::BlindRoller => {
                ActuatorValue::BlindPosition(Percent::new(parse_number("blind position", raw)?)?)
            }
        };
        Ok(value)
    }
}

impl fmt::Display for ActuatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for ActuatorKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.code() == s)
            .ok_or_else(|| ValidationError::UnknownActuatorModel(s.to_string()))
    }
}
