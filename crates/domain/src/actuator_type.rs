//! Actuator type: what a family of actuators controls (e.g. a switch).

use crate::aggregate::{AggregateRoot, identity_equality};
use crate::id::ActuatorTypeId;
use crate::text::{Description, Unit};

#[derive(Debug, Clone)]
pub struct ActuatorType {
    id: ActuatorTypeId,
    description: Description,
    unit: Unit,
}

impl ActuatorType {
    #[must_use]
    pub fn new(id: ActuatorTypeId, description: Description, unit: Unit) -> Self {
        Self {
            id,
            description,
            unit,
        }
    }

    #[must_use]
    pub fn id(&self) -> &ActuatorTypeId {
        &self.id
    }

    #[must_use]
    pub fn description(&self) -> &Description {
        &self.description
    }

    #[must_use]
    pub fn unit(&self) -> &Unit {
        &self.unit
    }
}

impl AggregateRoot for ActuatorType {
    type Id = ActuatorTypeId;

    fn identity(&self) -> &ActuatorTypeId {
        &self.id
    }

    fn same_as(&self, other: &Self) -> bool {
        self.id == other.id && self.description == other.description && self.unit == other.unit
    }
}

identity_equality!(ActuatorType);

/// Builds [`ActuatorType`] aggregates.
pub trait ActuatorTypeFactory {
    fn create_actuator_type(
        &self,
        id: ActuatorTypeId,
        description: Description,
        unit: Unit,
    ) -> ActuatorType;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultActuatorTypeFactory;

impl ActuatorTypeFactory for DefaultActuatorTypeFactory {
    fn create_actuator_type(
        &self,
        id: ActuatorTypeId,
        description: Description,
        unit: Unit,
    ) -> ActuatorType {
        ActuatorType::new(id, description, unit)
    }
}
