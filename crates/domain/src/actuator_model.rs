//! Actuator model: a catalog entry (e.g. `ONF01A`) tied to an actuator type.

use crate::aggregate::{AggregateRoot, identity_equality};
use crate::id::{ActuatorModelId, ActuatorTypeId};

#[derive(Debug, Clone)]
pub struct ActuatorModel {
    id: ActuatorModelId,
    actuator_type_id: ActuatorTypeId,
}

impl ActuatorModel {
    #[must_use]
    pub fn new(id: ActuatorModelId, actuator_type_id: ActuatorTypeId) -> Self {
        Self {
            id,
            actuator_type_id,
        }
    }

    #[must_use]
    pub fn id(&self) -> &ActuatorModelId {
        &self.id
    }

    #[must_use]
    pub fn actuator_type_id(&self) -> &ActuatorTypeId {
        &self.actuator_type_id
    }
}

impl AggregateRoot for ActuatorModel {
    type Id = ActuatorModelId;

    fn identity(&self) -> &ActuatorModelId {
        &self.id
    }

    fn same_as(&self, other: &Self) -> bool {
        self.id == other.id && self.actuator_type_id == other.actuator_type_id
    }
}

identity_equality!(ActuatorModel);

/// Builds [`ActuatorModel`] aggregates.
pub trait ActuatorModelFactory {
    fn create_actuator_model(
        &self,
        id: ActuatorModelId,
        actuator_type_id: ActuatorTypeId,
    ) -> ActuatorModel;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultActuatorModelFactory;

impl ActuatorModelFactory for DefaultActuatorModelFactory {
    fn create_actuator_model(
        &self,
        id: ActuatorModelId,
        actuator_type_id: ActuatorTypeId,
    ) -> ActuatorModel {
        ActuatorModel::new(id, actuator_type_id)
    }
}
