//! Device type service: grouping devices by what they measure or drive.

use std::collections::BTreeMap;

use smarthome_domain::device::Device;
use smarthome_domain::error::SmartHomeError;
use smarthome_domain::id::DeviceId;

use crate::ports::{
    ActuatorModelRepository, ActuatorRepository, ActuatorTypeRepository, DeviceRepository,
    SensorModelRepository, SensorRepository, SensorTypeRepository,
};

/// Devices keyed by sensor or actuator type description.
pub type DevicesByFunctionality = BTreeMap<String, Vec<Device>>;

/// Repositories needed to resolve sensors and actuators to their type.
pub struct DeviceTypeRepos<S, SM, ST, A, AM, AT, D> {
    pub sensors: S,
    pub sensor_models: SM,
    pub sensor_types: ST,
    pub actuators: A,
    pub actuator_models: AM,
    pub actuator_types: AT,
    pub devices: D,
}

pub struct DeviceTypeService<S, SM, ST, A, AM, AT, D> {
    repos: DeviceTypeRepos<S, SM, ST, A, AM, AT, D>,
}

impl<S, SM, ST, A, AM, AT, D> DeviceTypeService<S, SM, ST, A, AM, AT, D>
where
    S: SensorRepository,
    SM: SensorModelRepository,
    ST: SensorTypeRepository,
    A: ActuatorRepository,
    AM: ActuatorModelRepository,
    AT: ActuatorTypeRepository,
    D: DeviceRepository,
{
    pub fn new(repos: DeviceTypeRepos<S, SM, ST, A, AM, AT, D>) -> Self {
        Self { repos }
    }

    /// Group devices by the type description of every sensor and actuator
    /// they carry. A device shows up at most once per group.
    ///
    /// Sensors or actuators whose model, type or device cannot be resolved
    /// are skipped.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repositories.
    #[tracing::instrument(skip(self))]
    pub async fn devices_by_functionality(&self) -> Result<DevicesByFunctionality, SmartHomeError> {
        let mut groups = DevicesByFunctionality::new();

        for sensor in self.repos.sensors.get_all().await? {
            let Some(model) = self.repos.sensor_models.get_by_id(sensor.model_id()).await? else {
                tracing::debug!(sensor_id = %sensor.id(), "sensor model not registered");
                continue;
            };
            let Some(kind) = self
                .repos
                .sensor_types
                .get_by_id(model.sensor_type_id())
                .await?
            else {
                continue;
            };
            self.assign(&mut groups, kind.description().as_str(), sensor.device_id())
                .await?;
        }

        for actuator in self.repos.actuators.get_all().await? {
            let Some(model) = self
                .repos
                .actuator_models
                .get_by_id(actuator.model_id())
                .await?
            else {
                tracing::debug!(actuator_id = %actuator.id(), "actuator model not registered");
                continue;
            };
            let Some(kind) = self
                .repos
                .actuator_types
                .get_by_id(model.actuator_type_id())
                .await?
            else {
                continue;
            };
            self.assign(&mut groups, kind.description().as_str(), actuator.device_id())
                .await?;
        }

        Ok(groups)
    }

    async fn assign(
        &self,
        groups: &mut DevicesByFunctionality,
        description: &str,
        device_id: &DeviceId,
    ) -> Result<(), SmartHomeError> {
        let Some(device) = self.repos.devices.get_by_id(device_id).await? else {
            return Ok(());
        };
        let group = groups.entry(description.to_owned()).or_default();
        if !group.contains(&device) {
            group.push(device);
        }
        Ok(())
    }
}
