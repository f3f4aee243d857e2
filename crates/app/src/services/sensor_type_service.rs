//! Sensor type service: the catalog of measured quantities.

use smarthome_domain::error::{NotFoundError, SmartHomeError};
use smarthome_domain::id::SensorTypeId;
use smarthome_domain::sensor_type::{DefaultSensorTypeFactory, SensorType, SensorTypeFactory};
use smarthome_domain::text::{Description, Unit};

use crate::ports::SensorTypeRepository;

pub struct SensorTypeService<R, F = DefaultSensorTypeFactory> {
    repo: R,
    factory: F,
}

impl<R: SensorTypeRepository> SensorTypeService<R> {
    pub fn new(repo: R) -> Self {
        Self::with_factory(repo, DefaultSensorTypeFactory)
    }
}

impl<R: SensorTypeRepository, F: SensorTypeFactory> SensorTypeService<R, F> {
    pub fn with_factory(repo: R, factory: F) -> Self {
        Self { repo, factory }
    }

    /// Define a sensor type, e.g. `Temperature` measured in `Celsius`.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self, description, unit))]
    pub async fn create_sensor_type(
        &self,
        id: SensorTypeId,
        description: Description,
        unit: Unit,
    ) -> Result<SensorType, SmartHomeError> {
        let sensor_type = self.factory.create_sensor_type(id, description, unit);
        self.repo.save(sensor_type).await
    }

    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] when no type with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_sensor_type(&self, id: &SensorTypeId) -> Result<SensorType, SmartHomeError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| NotFoundError::new("SensorType", id).into())
    }

    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_sensor_types(&self) -> Result<Vec<SensorType>, SmartHomeError> {
        self.repo.get_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::in_memory::InMemoryRepo;

    fn make_service() -> SensorTypeService<InMemoryRepo<SensorType>> {
        SensorTypeService::new(InMemoryRepo::default())
    }

    #[tokio::test]
    async fn should_create_and_get_sensor_type() {
        let svc = make_service();
        let id = SensorTypeId::new("temperature").unwrap();
        svc.create_sensor_type(
            id.clone(),
            Description::new("Temperature").unwrap(),
            Unit::new("Celsius").unwrap(),
        )
        .await
        .unwrap();

        let found = svc.get_sensor_type(&id).await.unwrap();
        assert_eq!(found.description().as_str(), "Temperature");
        assert_eq!(found.unit().as_str(), "Celsius");
    }

    #[tokio::test]
    async fn should_return_not_found_when_sensor_type_missing() {
        let svc = make_service();
        let result = svc
            .get_sensor_type(&SensorTypeId::new("pressure").unwrap())
            .await;
        assert!(matches!(
            result,
            Err(SmartHomeError::NotFound(NotFoundError {
                entity: "SensorType",
                ..
            }))
        ));
    }

    #[tokio::test]
    async fn should_list_sensor_types() {
        let svc = make_service();
        for (id, unit) in [("temperature", "Celsius"), ("humidity", "Percent")] {
            svc.create_sensor_type(
                SensorTypeId::new(id).unwrap(),
                Description::new(id).unwrap(),
                Unit::new(unit).unwrap(),
            )
            .await
            .unwrap();
        }
        assert_eq!(svc.list_sensor_types().await.unwrap().len(), 2);
    }
}
