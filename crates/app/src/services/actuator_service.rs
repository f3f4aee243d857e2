//! Actuator service: installing and driving actuators.

use smarthome_domain::actuator::{Actuator, ActuatorFactory, DefaultActuatorFactory};
use smarthome_domain::error::{NotFoundError, SmartHomeError};
use smarthome_domain::id::{ActuatorId, ActuatorModelId, DeviceId};

use crate::ports::{ActuatorRepository, DeviceRepository, IdGenerator};

/// Application service for actuator operations.
pub struct ActuatorService<A, D, G, F = DefaultActuatorFactory> {
    actuators: A,
    devices: D,
    ids: G,
    factory: F,
}

impl<A: ActuatorRepository, D: DeviceRepository, G: IdGenerator> ActuatorService<A, D, G> {
    pub fn new(actuators: A, devices: D, ids: G) -> Self {
        Self::with_factory(actuators, devices, ids, DefaultActuatorFactory)
    }
}

impl<A, D, G, F> ActuatorService<A, D, G, F>
where
    A: ActuatorRepository,
    D: DeviceRepository,
    G: IdGenerator,
    F: ActuatorFactory,
{
    pub fn with_factory(actuators: A, devices: D, ids: G, factory: F) -> Self {
        Self {
            actuators,
            devices,
            ids,
            factory,
        }
    }

    /// Install an actuator of `model_id` on an existing device.
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] when the device does not exist,
    /// [`SmartHomeError::Validation`] when the model is not in the catalog,
    /// or a storage error from the repositories.
    #[tracing::instrument(skip(self))]
    pub async fn add_actuator(
        &self,
        device_id: &DeviceId,
        model_id: ActuatorModelId,
    ) -> Result<Actuator, SmartHomeError> {
        if !self.devices.contains(device_id).await? {
            return Err(NotFoundError::new("Device", device_id).into());
        }
        let id = ActuatorId::new(self.ids.next_id())?;
        let actuator = self
            .factory
            .create_actuator(id, device_id.clone(), model_id)?;
        self.actuators.save(actuator).await
    }

    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] when the device does not exist,
    /// or a storage error from the repositories.
    pub async fn list_actuators_of_device(
        &self,
        device_id: &DeviceId,
    ) -> Result<Vec<Actuator>, SmartHomeError> {
        if !self.devices.contains(device_id).await? {
            return Err(NotFoundError::new("Device", device_id).into());
        }
        self.actuators.find_by_device(device_id).await
    }

    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] when no actuator with `id`
    /// exists, or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_actuator(&self, id: &ActuatorId) -> Result<Actuator, SmartHomeError> {
        self.actuators
            .get_by_id(id)
            .await?
            .ok_or_else(|| NotFoundError::new("Actuator", id).into())
    }

    /// Parse `raw` for the actuator's model and store it as the new setting.
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] when no actuator with `id`
    /// exists, [`SmartHomeError::Validation`] when `raw` is not a valid value
    /// for the model, or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn set_actuator_value(
        &self,
        id: &ActuatorId,
        raw: &str,
    ) -> Result<Actuator, SmartHomeError> {
        let mut actuator = self.get_actuator(id).await?;
        actuator.set_raw(raw)?;
        self.actuators.update(actuator).await
    }
}
