//! Sensor reading: a value captured by a sensor at a point in time.

use crate::aggregate::{AggregateRoot, identity_equality};
use crate::id::{DeviceId, SensorId, SensorReadingId};
use crate::text::Reading;
use crate::time::Timestamp;

#[derive(Debug, Clone)]
pub struct SensorReading {
    id: SensorReadingId,
    reading: Reading,
    device_id: DeviceId,
    sensor_id: SensorId,
    timestamp: Timestamp,
}

impl SensorReading {
    #[must_use]
    pub fn new(
        id: SensorReadingId,
        reading: Reading,
        device_id: DeviceId,
        sensor_id: SensorId,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            id,
            reading,
            device_id,
            sensor_id,
            timestamp,
        }
    }

    #[must_use]
    pub fn id(&self) -> &SensorReadingId {
        &self.id
    }

    #[must_use]
    pub fn reading(&self) -> &Reading {
        &self.reading
    }

    #[must_use]
    pub fn device_id(&self) -> &DeviceId {
        &self.device_id
    }

    #[must_use]
    pub fn sensor_id(&self) -> &SensorId {
        &self.sensor_id
    }

    #[must_use]
    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }
}

impl AggregateRoot for SensorReading {
    type Id = SensorReadingId;

    fn identity(&self) -> &SensorReadingId {
        &self.id
    }

    fn same_as(&self, other: &Self) -> bool {
        self.id == other.id
            && self.reading == other.reading
            && self.device_id == other.device_id
            && self.sensor_id == other.sensor_id
            && self.timestamp == other.timestamp
    }
}

identity_equality!(SensorReading);

/// Builds [`SensorReading`] aggregates.
pub trait SensorReadingFactory {
    fn create_sensor_reading(
        &self,
        id: SensorReadingId,
        reading: Reading,
        device_id: DeviceId,
        sensor_id: SensorId,
        timestamp: Timestamp,
    ) -> SensorReading;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSensorReadingFactory;

impl SensorReadingFactory for DefaultSensorReadingFactory {
    fn create_sensor_reading(
        &self,
        id: SensorReadingId,
        reading: Reading,
        device_id: DeviceId,
        sensor_id: SensorId,
        timestamp: Timestamp,
    ) -> SensorReading {
        SensorReading::new(id, reading, device_id, sensor_id, timestamp)
    }
}
