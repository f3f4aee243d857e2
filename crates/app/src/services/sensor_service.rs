//! Sensor service: installing sensors on devices.

use smarthome_domain::error::{NotFoundError, SmartHomeError};
use smarthome_domain::id::{DeviceId, SensorId, SensorModelId};
use smarthome_domain::sensor::{DefaultSensorFactory, Sensor, SensorFactory};

use crate::ports::{DeviceRepository, IdGenerator, SensorRepository};
use crate::settings::{ReadingsSettings, Settings};

/// Application service for sensor operations.
pub struct SensorService<S, D, G, F = DefaultSensorFactory> {
    sensors: S,
    devices: D,
    ids: G,
    factory: F,
    models: ReadingsSettings,
}

impl<S: SensorRepository, D: DeviceRepository, G: IdGenerator> SensorService<S, D, G> {
    pub fn new(sensors: S, devices: D, ids: G) -> Self {
        Self::with_factory(sensors, devices, ids, DefaultSensorFactory)
    }
}

impl<S, D, G, F> SensorService<S, D, G, F>
where
    S: SensorRepository,
    D: DeviceRepository,
    G: IdGenerator,
    F: SensorFactory,
{
    pub fn with_factory(sensors: S, devices: D, ids: G, factory: F) -> Self {
        Self {
            sensors,
            devices,
            ids,
            factory,
            models: ReadingsSettings::default(),
        }
    }

    /// Override the model code that identifies temperature sensors.
    #[must_use]
    pub fn with_temperature_model(mut self, model: impl Into<String>) -> Self {
        self.models.temperature_sensor_model = model.into();
        self
    }

    #[must_use]
    pub fn with_settings(mut self, settings: &Settings) -> Self {
        self.models.clone_from(&settings.readings);
        self
    }

    /// Install a sensor of `model_id` on an existing device.
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] when the device does not exist,
    /// [`SmartHomeError::Validation`] when the model is not in the catalog,
    /// or a storage error from the repositories.
    #[tracing::instrument(skip(self))]
    pub async fn add_sensor(
        &self,
        device_id: &DeviceId,
        model_id: SensorModelId,
    ) -> Result<Sensor, SmartHomeError> {
        if !self.devices.contains(device_id).await? {
            return Err(NotFoundError::new("Device", device_id).into());
        }
        let id = SensorId::new(self.ids.next_id())?;
        let sensor = self
            .factory
            .create_sensor(id, device_id.clone(), model_id)?;
        tracing::debug!(sensor_id = %sensor.id(), kind = %sensor.kind(), "sensor added");
        self.sensors.save(sensor).await
    }

    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] when the device does not exist,
    /// or a storage error from the repositories.
    pub async fn list_sensors_of_device(
        &self,
        device_id: &DeviceId,
    ) -> Result<Vec<Sensor>, SmartHomeError> {
        if !self.devices.contains(device_id).await? {
            return Err(NotFoundError::new("Device", device_id).into());
        }
        self.sensors.find_by_device(device_id).await
    }

    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] when no sensor with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_sensor(&self, id: &SensorId) -> Result<Sensor, SmartHomeError> {
        self.sensors
            .get_by_id(id)
            .await?
            .ok_or_else(|| NotFoundError::new("Sensor", id).into())
    }

    /// Whether `sensor` is of the configured temperature model.
    #[must_use]
    pub fn is_temperature_sensor(&self, sensor: &Sensor) -> bool {
        self.models.is_temperature_sensor(sensor)
    }
}
