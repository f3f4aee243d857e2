//! Sensor model service: which hardware models measure which type.

use smarthome_domain::error::{NotFoundError, SmartHomeError};
use smarthome_domain::id::{SensorModelId, SensorTypeId};
use smarthome_domain::sensor_model::{DefaultSensorModelFactory, SensorModel, SensorModelFactory};

use crate::ports::SensorModelRepository;

pub struct SensorModelService<R, F = DefaultSensorModelFactory> {
    repo: R,
    factory: F,
}

impl<R: SensorModelRepository> SensorModelService<R> {
    pub fn new(repo: R) -> Self {
        Self::with_factory(repo, DefaultSensorModelFactory)
    }
}

impl<R: SensorModelRepository, F: SensorModelFactory> SensorModelService<R, F> {
    pub fn with_factory(repo: R, factory: F) -> Self {
        Self { repo, factory }
    }

    /// Register a sensor model under its hardware code.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn add_sensor_model(
        &self,
        id: SensorModelId,
        sensor_type_id: SensorTypeId,
    ) -> Result<SensorModel, SmartHomeError> {
        let model = self.factory.create_sensor_model(id, sensor_type_id);
        self.repo.save(model).await
    }

    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] when no model with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_sensor_model(&self, id: &SensorModelId) -> Result<SensorModel, SmartHomeError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| NotFoundError::new("SensorModel", id).into())
    }

    /// Models measuring the given sensor type.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_models_of_type(
        &self,
        sensor_type_id: &SensorTypeId,
    ) -> Result<Vec<SensorModel>, SmartHomeError> {
        self.repo.find_by_sensor_type(sensor_type_id).await
    }
}
