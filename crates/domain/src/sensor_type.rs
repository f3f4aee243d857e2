//! Sensor type: what a family of sensors measures (e.g. temperature).

use crate::aggregate::{AggregateRoot, identity_equality};
use crate::id::SensorTypeId;
use crate::text::{Description, Unit};

#[derive(Debug, Clone)]
pub struct SensorType {
    id: SensorTypeId,
    description: Description,
    unit: Unit,
}

impl SensorType {
    #[must_use]
    pub fn new(id: SensorTypeId, description: Description, unit: Unit) -> Self {
        Self {
            id,
            description,
            unit,
        }
    }

    #[must_use]
    pub fn id(&self) -> &SensorTypeId {
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

impl AggregateRoot for SensorType {
    type Id = SensorTypeId;

    fn identity(&self) -> &SensorTypeId {
        &self.id
    }

    fn same_as(&self, other: &Self) -> bool {
        self.id == other.id && self.description == other.description && self.unit == other.unit
    }
}

identity_equality!(SensorType);

/// Builds [`SensorType`] aggregates.
pub trait SensorTypeFactory {
    fn create_sensor_type(
        &self,
        id: SensorTypeId,
        description: Description,
        unit: Unit,
    ) -> SensorType;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSensorTypeFactory;

impl SensorTypeFactory for DefaultSensorTypeFactory {
    fn create_sensor_type(
        &self,
        id: SensorTypeId,
        description: Description,
        unit: Unit,
    ) -> SensorType {
        SensorType::new(id, description, unit)
    }
}
