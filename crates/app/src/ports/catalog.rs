//! Catalog port: repositories for sensor/actuator types and models.

use std::future::Future;

use smarthome_domain::actuator_model::ActuatorModel;
use smarthome_domain::actuator_type::ActuatorType;
use smarthome_domain::error::SmartHomeError;
use smarthome_domain::id::{ActuatorModelId, ActuatorTypeId, SensorModelId, SensorTypeId};
use smarthome_domain::sensor_model::SensorModel;
use smarthome_domain::sensor_type::SensorType;

/// Repository for [`SensorType`]s.
pub trait SensorTypeRepository: Send + Sync {
    fn save(
        &self,
        sensor_type: SensorType,
    ) -> impl Future<Output = Result<SensorType, SmartHomeError>> + Send;

    fn get_by_id(
        &self,
        id: &SensorTypeId,
    ) -> impl Future<Output = Result<Option<SensorType>, SmartHomeError>> + Send;

    fn get_all(&self) -> impl Future<Output = Result<Vec<SensorType>, SmartHomeError>> + Send;

    fn contains(
        &self,
        id: &SensorTypeId,
    ) -> impl Future<Output = Result<bool, SmartHomeError>> + Send {
        async move { Ok(self.get_by_id(id).await?.is_some()) }
    }
}

/// Repository for [`ActuatorType`]s.
pub trait ActuatorTypeRepository: Send + Sync {
    fn save(
        &self,
        actuator_type: ActuatorType,
    ) -> impl Future<Output = Result<ActuatorType, SmartHomeError>> + Send;

    fn get_by_id(
        &self,
        id: &ActuatorTypeId,
    ) -> impl Future<Output = Result<Option<ActuatorType>, SmartHomeError>> + Send;

    fn get_all(&self) -> impl Future<Output = Result<Vec<ActuatorType>, SmartHomeError>> + Send;

    fn contains(
        &self,
        id: &ActuatorTypeId,
    ) -> impl Future<Output = Result<bool, SmartHomeError>> + Send {
        async move { Ok(self.get_by_id(id).await?.is_some()) }
    }
}

/// Repository for [`SensorModel`]s.
pub trait SensorModelRepository: Send + Sync {
    fn save(
        &self,
        model: SensorModel,
    ) -> impl Future<Output = Result<SensorModel, SmartHomeError>> + Send;

    fn get_by_id(
        &self,
        id: &SensorModelId,
    ) -> impl Future<Output = Result<Option<SensorModel>, SmartHomeError>> + Send;

    fn get_all(&self) -> impl Future<Output = Result<Vec<SensorModel>, SmartHomeError>> + Send;

    /// Models that measure `sensor_type_id`.
    fn find_by_sensor_type(
        &self,
        sensor_type_id: &SensorTypeId,
    ) -> impl Future<Output = Result<Vec<SensorModel>, SmartHomeError>> + Send;

    fn contains(
        &self,
        id: &SensorModelId,
    ) -> impl Future<Output = Result<bool, SmartHomeError>> + Send {
        async move { Ok(self.get_by_id(id).await?.is_some()) }
    }
}

/// Repository for [`ActuatorModel`]s.
pub trait ActuatorModelRepository: Send + Sync {
    fn save(
        &self,
        model: ActuatorModel,
    ) -> impl Future<Output = Result<ActuatorModel, SmartHomeError>> + Send;

    fn get_by_id(
        &self,
        id: &ActuatorModelId,
    ) -> impl Future<Output = Result<Option<ActuatorModel>, SmartHomeError>> + Send;

    fn get_all(&self) -> impl Future<Output = Result<Vec<ActuatorModel>, SmartHomeError>> + Send;

    /// Models that implement `actuator_type_id`.
    fn find_by_actuator_type(
        &self,
        actuator_type_id: &ActuatorTypeId,
    ) -> impl Future<Output = Result<Vec<ActuatorModel>, SmartHomeError>> + Send;

    fn contains(
        &self,
        id: &ActuatorModelId,
    ) -> impl Future<Output = Result<bool, SmartHomeError>> + Send {
        async move { Ok(self.get_by_id(id).await?.is_some()) }
    }
}
