//! Instrument port: repositories for sensors and actuators fitted to devices.

use std::future::Future;

use smarthome_domain::actuator::Actuator;
use smarthome_domain::error::SmartHomeError;
use smarthome_domain::id::{ActuatorId, DeviceId, SensorId};
use smarthome_domain::sensor::Sensor;

/// Repository for [`Sensor`]s.
pub trait SensorRepository: Send + Sync {
    fn save(&self, sensor: Sensor) -> impl Future<Output = Result<Sensor, SmartHomeError>> + Send;

    /// Overwrite a stored sensor, e.g. after it reported a new value.
    fn update(&self, sensor: Sensor) -> impl Future<Output = Result<Sensor, SmartHomeError>> + Send;

    fn get_by_id(
        &self,
        id: &SensorId,
    ) -> impl Future<Output = Result<Option<Sensor>, SmartHomeError>> + Send;

    fn get_all(&self) -> impl Future<Output = Result<Vec<Sensor>, SmartHomeError>> + Send;

    /// Sensors fitted to `device_id`.
    fn find_by_device(
        &self,
        device_id: &DeviceId,
    ) -> impl Future<Output = Result<Vec<Sensor>, SmartHomeError>> + Send;

    fn contains(&self, id: &SensorId) -> impl Future<Output = Result<bool, SmartHomeError>> + Send {
        async move { Ok(self.get_by_id(id).await?.is_some()) }
    }
}

/// Repository for [`Actuator`]s.
pub trait ActuatorRepository: Send + Sync {
    fn save(
        &self,
        actuator: Actuator,
    ) -> impl Future<Output = Result<Actuator, SmartHomeError>> + Send;

    /// Overwrite a stored actuator, e.g. after a new value was applied.
    fn update(
        &self,
        actuator: Actuator,
    ) -> impl Future<Output = Result<Actuator, SmartHomeError>> + Send;

    fn get_by_id(
        &self,
        id: &ActuatorId,
    ) -> impl Future<Output = Result<Option<Actuator>, SmartHomeError>> + Send;

    fn get_all(&self) -> impl Future<Output = Result<Vec<Actuator>, SmartHomeError>> + Send;

    /// Actuators fitted to `device_id`.
    fn find_by_device(
        &self,
        device_id: &DeviceId,
    ) -> impl Future<Output = Result<Vec<Actuator>, SmartHomeError>> + Send;

    fn contains(
        &self,
        id: &ActuatorId,
    ) -> impl Future<Output = Result<bool, SmartHomeError>> + Send {
        async move { Ok(self.get_by_id(id).await?.is_some()) }
    }
}
