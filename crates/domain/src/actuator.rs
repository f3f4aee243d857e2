//! Actuator: a controllable element fitted to a device.

pub mod kind;
pub mod value;

pub use kind::ActuatorKind;
pub use value::ActuatorValue;

use crate::aggregate::{AggregateRoot, identity_equality};
use crate::error::ValidationError;
use crate::id::{ActuatorId, ActuatorModelId, DeviceId};

#[derive(Debug, Clone)]
pub struct Actuator {
    id: ActuatorId,
    device_id: DeviceId,
    model_id: ActuatorModelId,
    kind: ActuatorKind,
    value: Option<ActuatorValue>,
}

impl Actuator {
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownActuatorModel`] when `model_id` is
    /// not a catalog code.
    pub fn new(
        id: ActuatorId,
        device_id: DeviceId,
        model_id: ActuatorModelId,
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
    pub fn id(&self) -> &ActuatorId {
        &self.id
    }

    #[must_use]
    pub fn device_id(&self) -> &DeviceId {
        &self.device_id
    }

    #[must_use]
    pub fn model_id(&self) -> &ActuatorModelId {
        &self.model_id
    }

    #[must_use]
    pub fn kind(&self) -> ActuatorKind {
        self.kind
    }

    /// Value last applied, if any.
    #[must_use]
    pub fn value(&self) -> Option<&ActuatorValue> {
        self.value.as_ref()
    }

    /// Drive the actuator to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ValueModelMismatch`] when `value` targets a
    /// different model. The current value is left untouched.
    pub fn set_value(&mut self, value: ActuatorValue) -> Result<&ActuatorValue, ValidationError> {
        if value.kind() != self.kind {
            return Err(ValidationError::ValueModelMismatch {
                expected: self.kind.code(),
                found: value.kind().code(),
            });
        }
        Ok(self.value.insert(value))
    }

    /// Parse `raw` with this actuator's model and apply it.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when `raw` is not a valid command for
    /// the model.
    pub fn set_raw(&mut self, raw: &str) -> Result<&ActuatorValue, ValidationError> {
        let value = self.kind.parse_value(raw)?;
        Ok(self.value.insert(value))
    }
}

impl AggregateRoot for Actuator {
    type Id = ActuatorId;

    fn identity(&self) -> &ActuatorId {
        &self.id
    }

    fn same_as(&self, other: &Self) -> bool {
        self.id == other.id
            && self.device_id == other.device_id
            && self.model_id == other.model_id
            && self.value == other.value
    }
}

identity_equality!(Actuator);

/// Builds [`Actuator`] aggregates.
pub trait ActuatorFactory {
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownActuatorModel`] for codes outside
    /// the catalog.
    fn create_actuator(
        &self,
        id: ActuatorId,
        device_id: DeviceId,
        model_id: ActuatorModelId,
    ) -> Result<Actuator, ValidationError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultActuatorFactory;

impl ActuatorFactory for DefaultActuatorFactory {
    fn create_actuator(
        &self,
        id: ActuatorId,
        device_id: DeviceId,
        model_id: ActuatorModelId,
    ) -> Result<Actuator, ValidationError> {
        Actuator::new(id, device_id, model_id)
    }
}
