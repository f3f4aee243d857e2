//! Values a sensor can report, one shape per catalog model.

use std::f64::consts::PI;
use std::fmt;

use chrono::NaiveTime;

use super::kind::SensorKind;
use crate::error::ValidationError;
use crate::measure::{OnOff, Percent};

/// Dew point in degrees Celsius, strictly between -273 and 300.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct DewPoint(f64);

impl DewPoint {
    /// # Errors
    ///
    /// Returns [`ValidationError::OutOfRange`] outside `(-273, 300)`.
    pub fn new(celsius: f64) -> Result<Self, ValidationError> {
        if celsius > -273.0 && celsius < 300.0 {
            Ok(Self(celsius))
        } else {
            Err(ValidationError::OutOfRange {
                field: "dew point",
                value: celsius.to_string(),
            })
        }
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

/// Non-negative magnitude such as watts or W/m².
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct NonNegative(f64);

impl NonNegative {
    /// # Errors
    ///
    /// Returns [`ValidationError::OutOfRange`] for negative or non-finite input.
    pub fn new(value: f64) -> Result<Self, ValidationError> {
        if value.is_finite() && value >= 0.0 {
            Ok(Self(value))
        } else {
            Err(ValidationError::OutOfRange {
                field: "measurement",
                value: value.to_string(),
            })
        }
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

/// Compass point derived from a wind direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cardinal {
    East,
    NorthEast,
    North,
    NorthWest,
    West,
    SouthWest,
    South,
    SouthEast,
}

impl fmt::Display for Cardinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::East => "East",
            Self::NorthEast => "North East",
            Self::North => "North",
            Self::NorthWest => "North West",
            Self::West => "West",
            Self::SouthWest => "South West",
            Self::South => "South",
            Self::SouthEast => "South East",
        })
    }
}

/// Wind speed (km/h) and direction (radians, counter-clockwise from east).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wind {
    speed: f64,
    direction: f64,
}

impl Wind {
    /// # Errors
    ///
    /// Returns [`ValidationError::OutOfRange`] for a negative speed or a
    /// direction outside `[0, 2π]`.
    pub fn new(speed: f64, direction: f64) -> Result<Self, ValidationError> {
        if !(speed.is_finite() && speed >= 0.0) {
            return Err(ValidationError::OutOfRange {
                field: "wind speed",
                value: speed.to_string(),
            });
        }
        if !(0.0..=2.0 * PI).contains(&direction) {
            return Err(ValidationError::OutOfRange {
                field: "wind direction",
                value: direction.to_string(),
            });
        }
        Ok(Self { speed, direction })
    }

    #[must_use]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    #[must_use]
    pub fn direction(&self) -> f64 {
        self.direction
    }

    #[must_use]
    pub fn cardinal(&self) -> Cardinal {
        let sector = self.direction / PI;
        match sector {
            s if s < 0.125 => Cardinal::East,
            s if s < 0.375 => Cardinal::NorthEast,
            s if s < 0.625 => Cardinal::North,
            s if s < 0.875 => Cardinal::NorthWest,
            s if s < 1.125 => Cardinal::West,
            s if s < 1.375 => Cardinal::SouthWest,
            s if s < 1.625 => Cardinal::South,
            _ => Cardinal::SouthEast,
        }
    }
}

/// Reading produced by a sensor, tagged by the model that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SensorValue {
    Humidity(Percent),
    Capacity(Percent),
    DewPoint(DewPoint),
    SolarIrradiance(NonNegative),
    Temperature(i32),
    OnOff(OnOff),
    PowerConsumption(NonNegative),
    AveragePowerConsumption(NonNegative),
    EnergyConsumption(NonNegative),
    Wind(Wind),
    Sunrise(NaiveTime),
    Sunset(NaiveTime),
}

impl SensorValue {
    /// Catalog model able to produce this value.
    #[must_use]
    pub fn kind(&self) -> SensorKind {
        match self {
            Self::Humidity(_) => SensorKind::Humidity,
            Self::Capacity(_) => SensorKind::Capacity,
            Self::DewPoint(_) => SensorKind::DewPoint,
            Self::SolarIrradiance(_) => SensorKind::SolarIrradiance,
            Self::Temperature(_) => SensorKind::Temperature,
            Self::OnOff(_) => SensorKind::OnOff,
            Self::PowerConsumption(_) => SensorKind::PowerConsumption,
            Self::AveragePowerConsumption(_) => SensorKind::AveragePowerConsumption,
            Self::EnergyConsumption(_) => SensorKind::EnergyConsumption,
            Self::Wind(_) => SensorKind::Wind,
            Self::Sunrise(_) => SensorKind::Sunrise,
            Self::Sunset(_) => SensorKind::Sunset,
        }
    }
}

/// Text form stored in readings. [`SensorKind::parse_value`] reads it back.
impl fmt::Display for SensorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Humidity(p) | Self::Capacity(p) => fmt::Display::fmt(p, f),
            Self::DewPoint(d) => fmt::Display::fmt(&d.value(), f),
            Self::SolarIrradiance(v)
            | Self::PowerConsumption(v)
            | Self::AveragePowerConsumption(v)
            | Self::EnergyConsumption(v) => fmt::Display::fmt(&v.value(), f),
            Self::Temperature(t) => fmt::Display::fmt(t, f),
            Self::OnOff(s) => fmt::Display::fmt(s, f),
            Self::Wind(w) => write!(f, "{};{}", w.speed, w.direction),
            Self::Sunrise(t) | Self::Sunset(t) => write!(f, "{}", t.format("%H:%M:%S")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_reject_dew_point_at_absolute_zero_bound() {
        assert!(DewPoint::new(-273.0).is_err());
        assert!(DewPoint::new(300.0).is_err());
        assert!(DewPoint::new(-272.9).is_ok());
    }

    #[test]
    fn should_reject_negative_power() {
        assert!(NonNegative::new(-0.1).is_err());
        assert!(NonNegative::new(0.0).is_ok());
    }

    #[test]
    fn should_reject_wind_direction_beyond_full_turn() {
        assert!(Wind::new(10.0, 2.0 * PI + 0.01).is_err());
        assert!(Wind::new(-1.0, 0.0).is_err());
    }

    #[test]
    fn should_map_direction_to_cardinal_point() {
        let cases = [
            (0.0, Cardinal::East),
            (0.25 * PI, Cardinal::NorthEast),
            (0.5 * PI, Cardinal::North),
            (0.75 * PI, Cardinal::NorthWest),
            (PI, Cardinal::West),
            (1.25 * PI, Cardinal::SouthWest),
            (1.5 * PI, Cardinal::South),
            (1.75 * PI, Cardinal::SouthEast),
            (2.0 * PI, Cardinal::SouthEast),
        ];
        for (direction, expected) in cases {
            let wind = Wind::new(5.0, direction).unwrap();
            assert_eq!(wind.cardinal(), expected, "direction {direction}");
        }
    }

    #[test]
    fn should_name_cardinal_points_with_spaces() {
        assert_eq!(Cardinal::NorthEast.to_string(), "North East");
    }

    #[test]
    fn should_render_time_values_with_seconds() {
        let value = SensorValue::Sunrise(NaiveTime::from_hms_opt(7, 0, 5).unwrap());
        assert_eq!(value.to_string(), "07:00:05");
        assert_eq!(value.kind(), SensorKind::Sunrise);
    }
}
