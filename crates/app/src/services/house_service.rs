//! House service: use-cases for registering and locating houses.

use smarthome_domain::error::{NotFoundError, SmartHomeError};
use smarthome_domain::house::{DefaultHouseFactory, House, HouseFactory};
use smarthome_domain::id::HouseId;
use smarthome_domain::location::Location;

use crate::ports::HouseRepository;

/// Application service for house operations.
pub struct HouseService<R, F = DefaultHouseFactory> {
    repo: R,
    factory: F,
}

impl<R: HouseRepository> HouseService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self::with_factory(repo, DefaultHouseFactory)
    }
}

impl<R: HouseRepository, F: HouseFactory> HouseService<R, F> {
    pub fn with_factory(repo: R, factory: F) -> Self {
        Self { repo, factory }
    }

    /// Register a house under a caller-chosen id.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self, location))]
    pub async fn add_house(&self, id: HouseId, location: Location) -> Result<House, SmartHomeError> {
        let house = self.factory.create_house(id, location);
        self.repo.save(house).await
    }

    /// Move an existing house to `location`.
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] when no house with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self, location))]
    pub async fn configure_location(
        &self,
        id: &HouseId,
        location: Location,
    ) -> Result<House, SmartHomeError> {
        let mut house = self.get_house(id).await?;
        house.configure_location(location);
        self.repo.update(house).await
    }

    /// Look up a house by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] when no house with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_house(&self, id: &HouseId) -> Result<House, SmartHomeError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "House",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all houses.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_houses(&self) -> Result<Vec<House>, SmartHomeError> {
        self.repo.get_all().await
    }
}
