//! Sensor model: a catalog entry (e.g. `GA100K`) tied to a sensor type.

use crate::aggregate::{AggregateRoot, identity_equality};
use crate::id::{SensorModelId, SensorTypeId};

#[derive(Debug, Clone)]
pub struct SensorModel {
    id: SensorModelId,
    sensor_type_id: SensorTypeId,
}

impl SensorModel {
    #[must_use]
    pub fn new(id: SensorModelId, sensor_type_id: SensorTypeId) -> Self {
        Self { id, sensor_type_id }
    }

    #[must_use]
    pub fn id(&self) -> &SensorModelId {
        &self.id
    }

    #[must_use]
    pub fn sensor_type_id(&self) -> &SensorTypeId {
        &self.sensor_type_id
    }
}

impl AggregateRoot for SensorModel {
    type Id = SensorModelId;

    fn identity(&self) -> &SensorModelId {
        &self.id
    }

    fn same_as(&self, other: &Self) -> bool {
        self.id == other.id && self.sensor_type_id == other.sensor_type_id
    }
}

identity_equality!(SensorModel);

/// Builds [`SensorModel`] aggregates.
pub trait SensorModelFactory {
    fn create_sensor_model(&self, id: SensorModelId, sensor_type_id: SensorTypeId) -> SensorModel;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSensorModelFactory;

impl SensorModelFactory for DefaultSensorModelFactory {
    fn create_sensor_model(&self, id: SensorModelId, sensor_type_id: SensorTypeId) -> SensorModel {
        SensorModel::new(id, sensor_type_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(id: &str, type_id: &str) -> SensorModel {
        DefaultSensorModelFactory.create_sensor_model(
            SensorModelId::new(id).unwrap(),
            SensorTypeId::new(type_id).unwrap(),
        )
    }

    #[test]
    fn should_equal_itself() {
        let m = model("GA100K", "Temperature");
        assert_eq!(m, m.clone());
        assert!(m.same_as(&m));
        assert_ne!(Some(&m), None);
    }

    #[test]
    fn should_be_equal_but_not_same_when_type_differs() {
        let a = model("GA100K", "Temperature");
        let b = model("GA100K", "Humidity");
        assert_eq!(a, b);
        assert!(!a.same_as(&b));
        assert_eq!(b.sensor_type_id().as_str(), "Humidity");
    }
}
