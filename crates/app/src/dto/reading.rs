use serde::{Deserialize, Serialize};
use smarthome_domain::error::ValidationError;
use smarthome_domain::id::{DeviceId, SensorId};
use smarthome_domain::sensor_reading::SensorReading;
use smarthome_domain::text::Reading;
use smarthome_domain::time::{Period, Timestamp, parse_timestamp};

fn period(start: &str, end: &str) -> Result<Period, ValidationError> {
    Period::new(parse_timestamp(start)?, parse_timestamp(end)?)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorReadingDto {
    pub id: String,
    pub device_id: String,
    pub sensor_id: String,
    pub reading: String,
    /// RFC 3339, always in UTC.
    pub timestamp: String,
}

impl From<&SensorReading> for SensorReadingDto {
    fn from(reading: &SensorReading) -> Self {
        Self {
            id: reading.id().to_string(),
            device_id: reading.device_id().to_string(),
            sensor_id: reading.sensor_id().to_string(),
            reading: reading.reading().to_string(),
            timestamp: reading.timestamp().to_rfc3339(),
        }
    }
}

/// Request body for recording a reading.
#[derive(Debug, Clone, Deserialize)]
pub struct NewSensorReadingDto {
    pub device_id: String,
    pub sensor_id: String,
    pub reading: String,
    pub timestamp: String,
}

impl NewSensorReadingDto {
    /// # Errors
    ///
    /// Returns [`ValidationError::Empty`] for a blank field and
    /// [`ValidationError::InvalidTimestamp`] for a malformed timestamp.
    pub fn parse(&self) -> Result<(Reading, DeviceId, SensorId, Timestamp), ValidationError> {
        Ok((
            Reading::new(self.reading.as_str())?,
            DeviceId::new(self.device_id.as_str())?,
            SensorId::new(self.sensor_id.as_str())?,
            parse_timestamp(&self.timestamp)?,
        ))
    }
}

/// Readings of one device between two instants.
#[derive(Debug, Clone, Deserialize)]
pub struct ReadingsWithinPeriodDto {
    pub device_id: String,
    pub start: String,
    pub end: String,
}

impl ReadingsWithinPeriodDto {
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidTimestamp`] for malformed bounds and
    /// [`ValidationError::InvalidPeriod`] when `end` precedes `start`.
    pub fn parse(&self) -> Result<(DeviceId, Period), ValidationError> {
        Ok((
            DeviceId::new(self.device_id.as_str())?,
            period(&self.start, &self.end)?,
        ))
    }
}

/// Parsed form of [`MaxTemperatureDifferenceDto`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemperatureGapQuery {
    pub inside: DeviceId,
    pub outside: DeviceId,
    pub period: Period,
    pub delta_minutes: i64,
}

/// Request for the largest inside/outside temperature gap.
#[derive(Debug, Clone, Deserialize)]
pub struct MaxTemperatureDifferenceDto {
    pub inside_device_id: String,
    pub outside_device_id: String,
    pub start: String,
    pub end: String,
    /// Maximum distance in minutes between two paired readings.
    pub delta_minutes: i64,
}

impl TryFrom<&MaxTemperatureDifferenceDto> for TemperatureGapQuery {
    type Error = ValidationError;

    fn try_from(dto: &MaxTemperatureDifferenceDto) -> Result<Self, Self::Error> {
        if dto.delta_minutes < 0 {
            return Err(ValidationError::InvalidInterval(dto.delta_minutes));
        }
        Ok(Self {
            inside: DeviceId::new(dto.inside_device_id.as_str())?,
            outside: DeviceId::new(dto.outside_device_id.as_str())?,
            period: period(&dto.start, &dto.end)?,
            delta_minutes: dto.delta_minutes,
        })
    }
}

/// Query for the house peak power consumption.
#[derive(Debug, Clone, Deserialize)]
pub struct PeakPowerQueryDto {
    pub start: String,
    pub end: String,
    pub interval_minutes: i64,
}

impl PeakPowerQueryDto {
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidTimestamp`] for malformed bounds and
    /// [`ValidationError::InvalidPeriod`] when `end` precedes `start`.
    pub fn parse(&self) -> Result<(Period, i64), ValidationError> {
        Ok((period(&self.start, &self.end)?, self.interval_minutes))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeakPowerConsumptionDto {
    pub peak_power_consumption: f64,
}

impl From<f64> for PeakPowerConsumptionDto {
    fn from(peak_power_consumption: f64) -> Self {
        Self {
            peak_power_consumption,
        }
    }
}
