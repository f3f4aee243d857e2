//! Storage port: repository traits for houses, rooms and devices.

use std::future::Future;

use smarthome_domain::device::Device;
use smarthome_domain::error::SmartHomeError;
use smarthome_domain::house::House;
use smarthome_domain::id::{DeviceId, HouseId, RoomId};
use smarthome_domain::room::Room;

/// Repository for persisting and querying [`House`]s.
pub trait HouseRepository: Send + Sync {
    /// Persist a new house.
    fn save(&self, house: House) -> impl Future<Output = Result<House, SmartHomeError>> + Send;

    /// Overwrite a stored house.
    fn update(&self, house: House) -> impl Future<Output = Result<House, SmartHomeError>> + Send;

    fn get_by_id(
        &self,
        id: &HouseId,
    ) -> impl Future<Output = Result<Option<House>, SmartHomeError>> + Send;

    fn get_all(&self) -> impl Future<Output = Result<Vec<House>, SmartHomeError>> + Send;

    /// Whether a house with `id` exists.
    fn contains(&self, id: &HouseId) -> impl Future<Output = Result<bool, SmartHomeError>> + Send {
        async move { Ok(self.get_by_id(id).await?.is_some()) }
    }
}

/// Repository for persisting and querying [`Room`]s.
pub trait RoomRepository: Send + Sync {
    fn save(&self, room: Room) -> impl Future<Output = Result<Room, SmartHomeError>> + Send;

    fn get_by_id(
        &self,
        id: &RoomId,
    ) -> impl Future<Output = Result<Option<Room>, SmartHomeError>> + Send;

    fn get_all(&self) -> impl Future<Output = Result<Vec<Room>, SmartHomeError>> + Send;

    /// Rooms belonging to `house_id`.
    fn find_by_house(
        &self,
        house_id: &HouseId,
    ) -> impl Future<Output = Result<Vec<Room>, SmartHomeError>> + Send;

    fn contains(&self, id: &RoomId) -> impl Future<Output = Result<bool, SmartHomeError>> + Send {
        async move { Ok(self.get_by_id(id).await?.is_some()) }
    }
}

/// Repository for persisting and querying [`Device`]s.
pub trait DeviceRepository: Send + Sync {
    fn save(&self, device: Device) -> impl Future<Output = Result<Device, SmartHomeError>> + Send;

    /// Overwrite a stored device, e.g. after deactivation.
    fn update(&self, device: Device) -> impl Future<Output = Result<Device, SmartHomeError>> + Send;

    fn get_by_id(
        &self,
        id: &DeviceId,
    ) -> impl Future<Output = Result<Option<Device>, SmartHomeError>> + Send;

    fn get_all(&self) -> impl Future<Output = Result<Vec<Device>, SmartHomeError>> + Send;

    /// Devices installed in `room_id`, active or not.
    fn find_by_room(
        &self,
        room_id: &RoomId,
    ) -> impl Future<Output = Result<Vec<Device>, SmartHomeError>> + Send;

    /// Devices whose status is active.
    fn find_active(&self) -> impl Future<Output = Result<Vec<Device>, SmartHomeError>> + Send;

    fn contains(&self, id: &DeviceId) -> impl Future<Output = Result<bool, SmartHomeError>> + Send {
        async move { Ok(self.get_by_id(id).await?.is_some()) }
    }
}
