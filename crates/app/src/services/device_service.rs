//! Device service: use-cases for managing devices.

use smarthome_domain::activation::ActivationStatus;
use smarthome_domain::device::{DefaultDeviceFactory, Device, DeviceFactory};
use smarthome_domain::error::{NotFoundError, SmartHomeError};
use smarthome_domain::id::{DeviceId, RoomId};
use smarthome_domain::text::{DeviceModel, DeviceName};

use crate::ports::{DeviceRepository, IdGenerator, RoomRepository};
use crate::settings::Settings;

/// Name of the device that meters the whole house.
pub const POWER_GRID_METER: &str = "Power Grid Meter";

/// Application service for device operations.
pub struct DeviceService<D, R, G, F = DefaultDeviceFactory> {
    devices: D,
    rooms: R,
    ids: G,
    factory: F,
    grid_meter_name: String,
}

impl<D: DeviceRepository, R: RoomRepository, G: IdGenerator> DeviceService<D, R, G> {
    pub fn new(devices: D, rooms: R, ids: G) -> Self {
        Self::with_factory(devices, rooms, ids, DefaultDeviceFactory)
    }
}

impl<D, R, G, F> DeviceService<D, R, G, F>
where
    D: DeviceRepository,
    R: RoomRepository,
    G: IdGenerator,
    F: DeviceFactory,
{
    pub fn with_factory(devices: D, rooms: R, ids: G, factory: F) -> Self {
        Self {
            devices,
            rooms,
            ids,
            factory,
            grid_meter_name: POWER_GRID_METER.to_string(),
        }
    }

    /// Override the name used to find the house power meter.
    #[must_use]
    pub fn with_grid_meter_name(mut self, name: impl Into<String>) -> Self {
        self.grid_meter_name = name.into();
        self
    }

    #[must_use]
    pub fn with_settings(self, settings: &Settings) -> Self {
        self.with_grid_meter_name(settings.power.grid_meter_name.clone())
    }

    /// Install a new, active device in an existing room.
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] when the room does not exist,
    /// [`SmartHomeError::Validation`] when `status` is inactive, or a storage
    /// error from the repositories.
    #[tracing::instrument(skip(self, name, model), fields(device_name = %name))]
    pub async fn add_device(
        &self,
        room_id: &RoomId,
        name: DeviceName,
        model: DeviceModel,
        status: ActivationStatus,
    ) -> Result<Device, SmartHomeError> {
        if !self.rooms.contains(room_id).await? {
            return Err(NotFoundError::new("Room", room_id).into());
        }
        let id = DeviceId::new(self.ids.next_id())?;
        let device = self
            .factory
            .create_device(id, name, model, status, room_id.clone())?;
        self.devices.save(device).await
    }

    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] when the room does not exist,
    /// or a storage error from the repositories.
    #[tracing::instrument(skip(self))]
    pub async fn list_devices_in_room(&self, room_id: &RoomId) -> Result<Vec<Device>, SmartHomeError> {
        if !self.rooms.contains(room_id).await? {
            return Err(NotFoundError::new("Room", room_id).into());
        }
        self.devices.find_by_room(room_id).await
    }

    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_active_devices(&self) -> Result<Vec<Device>, SmartHomeError> {
        self.devices.find_active().await
    }

    /// Take a device out of service.
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] when no device with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn deactivate_device(&self, id: &DeviceId) -> Result<Device, SmartHomeError> {
        let mut device = self.get_device(id).await?;
        if !device.is_active() {
            tracing::debug!("device already inactive");
        }
        device.deactivate();
        self.devices.update(device).await
    }

    /// Look up a device by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] when no device with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_device(&self, id: &DeviceId) -> Result<Device, SmartHomeError> {
        self.devices.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Device",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all devices.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_devices(&self) -> Result<Vec<Device>, SmartHomeError> {
        self.devices.get_all().await
    }

    /// The device metering the whole house, found by its configured name.
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] when no device carries that name,
    /// or a storage error from the repository.
    pub async fn power_grid_meter(&self) -> Result<Device, SmartHomeError> {
        self.devices
            .get_all()
            .await?
            .into_iter()
            .find(|d| d.name().as_str() == self.grid_meter_name)
            .ok_or_else(|| NotFoundError::new("Device", &self.grid_meter_name).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::in_memory::{InMemoryRepo, SequentialIds};
    use smarthome_domain::dimensions::{Dimensions, FloorNumber, Height, Length, Width};
    use smarthome_domain::error::ValidationError;
    use smarthome_domain::id::HouseId;
    use smarthome_domain::room::Room;
    use smarthome_domain::text::RoomName;

    type Service = DeviceService<InMemoryRepo<Device>, InMemoryRepo<Room>, SequentialIds>;

    fn kitchen() -> Room {
        Room::new(
            RoomId::new("kitchen").unwrap(),
            HouseId::new("home").unwrap(),
            FloorNumber::new(0),
            Dimensions::new(
                Length::new(3.0).unwrap(),
                Width::new(3.0).unwrap(),
                Height::new(2.5).unwrap(),
            ),
            true,
            RoomName::new("Kitchen").unwrap(),
        )
    }

    fn make_service() -> Service {
        let rooms = InMemoryRepo::<Room>::default();
        rooms.insert(kitchen());
        DeviceService::new(InMemoryRepo::default(), rooms, SequentialIds::default())
    }

    async fn add(svc: &Service, name: &str) -> Device {
        svc.add_device(
            &RoomId::new("kitchen").unwrap(),
            DeviceName::new(name).unwrap(),
            DeviceModel::new("Model X").unwrap(),
            ActivationStatus::Active,
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn should_add_device_to_existing_room() {
        let svc = make_service();
        let device = add(&svc, "Fridge").await;
        assert_eq!(device.id().as_str(), "id-1");
        assert!(device.is_active());
        assert_eq!(svc.get_device(device.id()).await.unwrap(), device);
    }

    #[tokio::test]
    async fn should_return_not_found_when_room_missing() {
        let svc = make_service();
        let result = svc
            .add_device(
                &RoomId::new("garage").unwrap(),
                DeviceName::new("Charger").unwrap(),
                DeviceModel::new("EV-1").unwrap(),
                ActivationStatus::Active,
            )
            .await;
        assert!(matches!(result, Err(SmartHomeError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_return_validation_error_when_added_inactive() {
        let svc = make_service();
        let result = svc
            .add_device(
                &RoomId::new("kitchen").unwrap(),
                DeviceName::new("Oven").unwrap(),
                DeviceModel::new("O-1").unwrap(),
                ActivationStatus::Inactive,
            )
            .await;
        assert!(matches!(
            result,
            Err(SmartHomeError::Validation(ValidationError::InactiveDevice))
        ));
        assert!(svc.list_devices().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_list_devices_in_room() {
        let svc = make_service();
        add(&svc, "Fridge").await;
        add(&svc, "Oven").await;
        let devices = svc
            .list_devices_in_room(&RoomId::new("kitchen").unwrap())
            .await
            .unwrap();
        assert_eq!(devices.len(), 2);
    }

    #[tokio::test]
    async fn should_return_not_found_when_listing_missing_room() {
        let svc = make_service();
        let result = svc
            .list_devices_in_room(&RoomId::new("garage").unwrap())
            .await;
        assert!(matches!(result, Err(SmartHomeError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_deactivate_device_and_drop_it_from_active_list() {
        let svc = make_service();
        let fridge = add(&svc, "Fridge").await;
        add(&svc, "Oven").await;

        let deactivated = svc.deactivate_device(fridge.id()).await.unwrap();
        assert!(!deactivated.is_active());

        let active = svc.list_active_devices().await.unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].name().as_str(), "Oven");
    }

    #[tokio::test]
    async fn should_return_not_found_when_deactivating_missing_device() {
        let svc = make_service();
        let result = svc.deactivate_device(&DeviceId::new("ghost").unwrap()).await;
        assert!(matches!(result, Err(SmartHomeError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_find_power_grid_meter_by_name() {
        let svc = make_service();
        add(&svc, "Fridge").await;
        let meter = add(&svc, POWER_GRID_METER).await;
        assert_eq!(svc.power_grid_meter().await.unwrap(), meter);
    }

    #[tokio::test]
    async fn should_use_configured_grid_meter_name() {
        let svc = make_service().with_grid_meter_name("Main Meter");
        add(&svc, POWER_GRID_METER).await;
        let result = svc.power_grid_meter().await;
        assert!(matches!(result, Err(SmartHomeError::NotFound(_))));

        let meter = add(&svc, "Main Meter").await;
        assert_eq!(svc.power_grid_meter().await.unwrap(), meter);
    }
}
