//! Closed catalog of supported sensor models.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveTime;

use super::value::{DewPoint, NonNegative, SensorValue, Wind};
use crate::error::ValidationError;
use crate::measure::{OnOff, Percent, parse_number};

/// Sensor hardware the system knows how to interpret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SensorKind {
    /// `TSY01`
    Humidity,
    /// `CAP200`
    Capacity,
    /// `DP22C`
    DewPoint,
    /// `SR001`
    SolarIrradiance,
    /// `GA100K`
    Temperature,
    /// `ONF01S`
    OnOff,
    /// `PC500W`
    PowerConsumption,
    /// `AVPC500W`
    AveragePowerConsumption,
    /// `ECA300K`
    EnergyConsumption,
    /// `WS8600`
    Wind,
    /// `SUNRISE407`
    Sunrise,
    /// `SUNSET567`
    Sunset,
}

impl SensorKind {
    pub const ALL: [Self; 12] = [
        Self::Humidity,
        Self::Capacity,
        Self::DewPoint,
        Self::SolarIrradiance,
        Self::Temperature,
        Self::OnOff,
        Self::PowerConsumption,
        Self::AveragePowerConsumption,
        Self::EnergyConsumption,
        Self::Wind,
        Self::Sunrise,
        Self::Sunset,
    ];

    /// Model code as printed on the hardware.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Humidity => "TSY01",
            Self::Capacity => "CAP200",
            Self::DewPoint => "DP22C",
            Self::SolarIrradiance => "SR001",
            Self::Temperature => "GA100K",
            Self::OnOff => "ONF01S",
            Self::PowerConsumption => "PC500W",
            Self::AveragePowerConsumption => "AVPC500W",
            Self::EnergyConsumption => "ECA300K",
            Self::Wind => "WS8600",
            Self::Sunrise => "SUNRISE407",
            Self::Sunset => "SUNSET567",
        }
    }

    /// Parse the textual form of a value produced by this model.
    ///
    /// Wind values are written `speed;direction`, times `HH:MM[:SS]`.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when `raw` is malformed or out of the
    /// model's range.
    pub fn parse_value(self, raw: &str) -> Result<SensorValue, ValidationError> {
        let value = match self {
            Self::Humidity => SensorValue::Humidity(Percent::new(parse_number("humidity", raw)?)?),
            Self::Capacity => SensorValue::Capacity(Percent::new(parse_number("capacity", raw)?)?),
            Self::DewPoint => SensorValue::DewPoint(DewPoint::new(parse_number("dew point", raw)?)?),
            Self::SolarIrradiance => {
                SensorValue::SolarIrradiance(NonNegative::new(parse_number("irradiance", raw)?)?)
            }
            Self::Temperature => SensorValue::Temperature(parse_number("temperature", raw)?),
            Self::OnOff => SensorValue::OnOff(raw.parse::<OnOff>()?),
            Self::PowerConsumption => {
                SensorValue::PowerConsumption(NonNegative::new(parse_number("power", raw)?)?)
            }
            Self::AveragePowerConsumption => SensorValue::AveragePowerConsumption(
                NonNegative::new(parse_number("average power", raw)?)?,
            ),
            Self::EnergyConsumption => {
                SensorValue::EnergyConsumption(NonNegative::new(parse_number("energy", raw)?)?)
            }
            Self::Wind => {
                let (speed, direction) =
                    raw.split_once(';').ok_or_else(|| ValidationError::InvalidNumber {
                        field: "wind",
                        value: raw.to_string(),
                    })?;
                SensorValue::Wind(Wind::new(
                    parse_number("wind speed", speed)?,
                    parse_number("wind direction", direction)?,
                )?)
            }
            Self::Sunrise => SensorValue::Sunrise(parse_time(raw)?),
            Self::Sunset => SensorValue::Sunset(parse_time(raw)?),
        };
        Ok(value)
    }
}

fn parse_time(raw: &str) -> Result<NaiveTime, ValidationError> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .map_err(|_| ValidationError::InvalidTimestamp(raw.to_string()))
}

impl fmt::Display for SensorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for SensorKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.code() == s)
            .ok_or_else(|| ValidationError::UnknownSensorModel(s.to_string()))
    }
}
