//! Actuator type service.

use smarthome_domain::actuator_type::{ActuatorType, ActuatorTypeFactory, DefaultActuatorTypeFactory};
use smarthome_domain::error::{NotFoundError, SmartHomeError};
use smarthome_domain::id::ActuatorTypeId;
use smarthome_domain::text::{Description, Unit};

use crate::ports::ActuatorTypeRepository;

pub struct ActuatorTypeService<R, F = DefaultActuatorTypeFactory> {
    repo: R,
    factory: F,
}

impl<R: ActuatorTypeRepository> ActuatorTypeService<R> {
    pub fn new(repo: R) -> Self {
        Self::with_factory(repo, DefaultActuatorTypeFactory)
    }
}

impl<R: ActuatorTypeRepository, F: ActuatorTypeFactory> ActuatorTypeService<R, F> {
    pub fn with_factory(repo: R, factory: F) -> Self {
        Self { repo, factory }
    }

    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self, description, unit))]
    pub async fn create_actuator_type(
        &self,
        id: ActuatorTypeId,
        description: Description,
        unit: Unit,
    ) -> Result<ActuatorType, SmartHomeError> {
        let actuator_type = self.factory.create_actuator_type(id, description, unit);
        self.repo.save(actuator_type).await
    }

    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] when no type with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_actuator_type(
        &self,
        id: &ActuatorTypeId,
    ) -> Result<ActuatorType, SmartHomeError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| NotFoundError::new("ActuatorType", id).into())
    }

    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_actuator_types(&self) -> Result<Vec<ActuatorType>, SmartHomeError> {
        self.repo.get_all().await
    }
}
