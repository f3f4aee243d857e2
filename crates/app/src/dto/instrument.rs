use serde::{Deserialize, Serialize};
use smarthome_domain::actuator::{Actuator, ActuatorKind, ActuatorValue};
use smarthome_domain::error::ValidationError;
use smarthome_domain::id::{ActuatorModelId, DeviceId, SensorId, SensorModelId};
use smarthome_domain::sensor::Sensor;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorDto {
    pub id: String,
    pub device_id: String,
    pub model_id: String,
    /// Last recorded value in its textual form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl From<&Sensor> for SensorDto {
    fn from(sensor: &Sensor) -> Self {
        Self {
            id: sensor.id().to_string(),
            device_id: sensor.device_id().to_string(),
            model_id: sensor.model_id().to_string(),
            value: sensor.value().map(ToString::to_string),
        }
    }
}

/// Request body for installing a sensor.
#[derive(Debug, Clone, Deserialize)]
pub struct NewSensorDto {
    pub device_id: String,
    pub model_id: String,
}

impl NewSensorDto {
    /// # Errors
    ///
    /// Returns [`ValidationError::Empty`] for a blank id.
    pub fn parse(&self) -> Result<(DeviceId, SensorModelId), ValidationError> {
        Ok((
            DeviceId::new(self.device_id.as_str())?,
            SensorModelId::new(self.model_id.as_str())?,
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActuatorDto {
    pub id: String,
    pub device_id: String,
    pub model_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl From<&Actuator> for ActuatorDto {
    fn from(actuator: &Actuator) -> Self {
        Self {
            id: actuator.id().to_string(),
            device_id: actuator.device_id().to_string(),
            model_id: actuator.model_id().to_string(),
            value: actuator.value().map(ToString::to_string),
        }
    }
}

/// Request body for installing an actuator.
#[derive(Debug, Clone, Deserialize)]
pub struct NewActuatorDto {
    pub device_id: String,
    pub model_id: String,
}

impl NewActuatorDto {
    /// # Errors
    ///
    /// Returns [`ValidationError::Empty`] for a blank id.
    pub fn parse(&self) -> Result<(DeviceId, ActuatorModelId), ValidationError> {
        Ok((
            DeviceId::new(self.device_id.as_str())?,
            ActuatorModelId::new(self.model_id.as_str())?,
        ))
    }
}

/// New setting for an actuator, e.g. `"ON"`, `"21.5"` or `"-3"`.
#[derive(Debug, Clone, Deserialize)]
pub struct ActuatorValueDto {
    pub value: String,
}

impl ActuatorValueDto {
    /// Interpret the value for an actuator of `kind`.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when the value is malformed or out of
    /// the model's range.
    pub fn parse_for(&self, kind: ActuatorKind) -> Result<ActuatorValue, ValidationError> {
        kind.parse_value(&self.value)
    }
}

/// Request body for moving a roller blind.
#[derive(Debug, Clone, Deserialize)]
pub struct BlindPositionDto {
    /// Capacity sensor installed next to the blind.
    pub sensor_id: String,
    /// Opening percentage, `0` to `100`.
    pub value: String,
}

impl BlindPositionDto {
    /// # Errors
    ///
    /// Returns [`ValidationError::Empty`] for a blank sensor id.
    pub fn sensor_id(&self) -> Result<SensorId, ValidationError> {
        SensorId::new(self.sensor_id.as_str())
    }
}
