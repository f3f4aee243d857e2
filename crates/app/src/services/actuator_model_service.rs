//! Actuator model service.

use smarthome_domain::actuator_model::{
    ActuatorModel, ActuatorModelFactory, DefaultActuatorModelFactory,
};
use smarthome_domain::error::{NotFoundError, SmartHomeError};
use smarthome_domain::id::{ActuatorModelId, ActuatorTypeId};

use crate::ports::ActuatorModelRepository;

pub struct ActuatorModelService<R, F = DefaultActuatorModelFactory> {
    repo: R,
    factory: F,
}

impl<R: ActuatorModelRepository> ActuatorModelService<R> {
    pub fn new(repo: R) -> Self {
        Self::with_factory(repo, DefaultActuatorModelFactory)
    }
}

impl<R: ActuatorModelRepository, F: ActuatorModelFactory> ActuatorModelService<R, F> {
    pub fn with_factory(repo: R, factory: F) -> Self {
        Self { repo, factory }
    }

    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn add_actuator_model(
        &self,
        id: ActuatorModelId,
        actuator_type_id: ActuatorTypeId,
    ) -> Result<ActuatorModel, SmartHomeError> {
        let model = self.factory.create_actuator_model(id, actuator_type_id);
        self.repo.save(model).await
    }

    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] when no model with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_actuator_model(
        &self,
        id: &ActuatorModelId,
    ) -> Result<ActuatorModel, SmartHomeError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| NotFoundError::new("ActuatorModel", id).into())
    }

    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_models_of_type(
        &self,
        actuator_type_id: &ActuatorTypeId,
    ) -> Result<Vec<ActuatorModel>, SmartHomeError> {
        self.repo.find_by_actuator_type(actuator_type_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::in_memory::InMemoryRepo;

    #[tokio::test]
    async fn should_add_and_list_actuator_models_of_type() {
        let svc = ActuatorModelService::new(InMemoryRepo::<ActuatorModel>::default());
        let blind = ActuatorTypeId::new("blind").unwrap();
        let switch = ActuatorTypeId::new("switch").unwrap();
        svc.add_actuator_model(ActuatorModelId::new("OPNCL0100").unwrap(), blind.clone())
            .await
            .unwrap();
        svc.add_actuator_model(ActuatorModelId::new("ONF01A").unwrap(), switch)
            .await
            .unwrap();

        let models = svc.list_models_of_type(&blind).await.unwrap();
        assert_eq!(models.len(), 1);
        assert_eq!(models[0].id().as_str(), "OPNCL0100");
        assert!(
            svc.get_actuator_model(&ActuatorModelId::new("ONF01A").unwrap())
                .await
                .is_ok()
        );
    }

    #[tokio::test]
    async fn should_return_not_found_when_actuator_model_missing() {
        let svc = ActuatorModelService::new(InMemoryRepo::<ActuatorModel>::default());
        let result = svc
            .get_actuator_model(&ActuatorModelId::new("SPV300").unwrap())
            .await;
        assert!(matches!(result, Err(SmartHomeError::NotFound(_))));
    }
}
