//! Sensor: a measuring element fitted to a device.
//!
//! The model id is resolved against the [`SensorKind`] catalog when the
//! sensor is built, so a sensor only ever holds values its hardware can
//! produce.

pub mod kind;
pub mod value;

pub use kind::SensorKind;
pub use value::SensorValue;

use crate::aggregate::{AggregateRoot, identity_equality};
use crate::error::ValidationError;
use crate::id::{DeviceId, SensorId, SensorModelId};

#[derive(Debug, Clone)]
pub struct Sensor {
    id: SensorId,
    device_id: DeviceId,
    model_id: SensorModelId,
    kind: SensorKind,
    value: Option<SensorValue>,
}

impl Sensor {
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownSensorModel`] when `model_id` is not
    /// a catalog code.
    pub fn new(
        id: SensorId,
        device_id: DeviceId,
        model_id: SensorModelId,
    ) -> Result<Self, ValidationError> {
        let kind = model_id.as_str().parse()?;
        Ok(Self {
            id,
            device_id,
            model_id,
            kind,
            value: None,
        })
    }

    #[must_use]
    pub fn id(&self) -> &SensorId {
        &self.id
    }

    #[must_use]
    pub fn device_id(&self) -> &DeviceId {
        &self.device_id
    }

    #[must_use]
    pub fn model_id(&self) -> &SensorModelId {
        &self.model_id
    }

    #[must_use]
    pub fn kind(&self) -> SensorKind {
        self.kind
    }

    /// Last value recorded, if any.
    #[must_use]
    pub fn value(&self) -> Option<&SensorValue> {
        self.value.as_ref()
    }

    /// Parse `raw` with this sensor's model and record it.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when `raw` is not a valid value for the
    /// model.
    pub fn record_raw(&mut self, raw: &str) -> Result<&SensorValue, ValidationError> {
        let value = self.kind.parse_value(raw)?;
        Ok(self.value.insert(value))
    }
}

impl AggregateRoot for Sensor {
    type Id = SensorId;

    fn identity(&self) -> &SensorId {
        &self.id
    }

    /// Compares identity, device and model; the last measured value is
    /// transient and ignored.
    fn same_as(&self, other: &Self) -> bool {
        self.id == other.id && self.device_id == other.device_id && self.model_id == other.model_id
    }
}

identity_equality!(Sensor);

/// Builds [`Sensor`] aggregates.
pub trait SensorFactory {
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownSensorModel`] for codes outside the
    /// catalog.
    fn create_sensor(
        &self,
        id: SensorId,
        device_id: DeviceId,
        model_id: SensorModelId,
    ) -> Result<Sensor, ValidationError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSensorFactory;

impl SensorFactory for DefaultSensorFactory {
    fn create_sensor(
        &self,
        id: SensorId,
        device_id: DeviceId,
        model_id: SensorModelId,
    ) -> Result<Sensor, ValidationError> {
        Sensor::new(id, device_id, model_id)
    }
}
