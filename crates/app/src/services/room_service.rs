//! Room service: use-cases for rooms within a house.

use smarthome_domain::dimensions::{Dimensions, FloorNumber};
use smarthome_domain::error::{NotFoundError, SmartHomeError};
use smarthome_domain::id::{HouseId, RoomId};
use smarthome_domain::room::{DefaultRoomFactory, Room, RoomFactory};
use smarthome_domain::text::RoomName;

use crate::ports::{HouseRepository, IdGenerator, RoomRepository};

/// Description of a room to create.
#[derive(Debug, Clone)]
pub struct NewRoom {
    pub name: RoomName,
    pub floor: FloorNumber,
    pub dimensions: Dimensions,
    pub inside: bool,
}

/// Application service for room operations.
pub struct RoomService<H, R, G, F = DefaultRoomFactory> {
    houses: H,
    rooms: R,
    ids: G,
    factory: F,
}

impl<H: HouseRepository, R: RoomRepository, G: IdGenerator> RoomService<H, R, G> {
    pub fn new(houses: H, rooms: R, ids: G) -> Self {
        Self::with_factory(houses, rooms, ids, DefaultRoomFactory)
    }
}

impl<H, R, G, F> RoomService<H, R, G, F>
where
    H: HouseRepository,
    R: RoomRepository,
    G: IdGenerator,
    F: RoomFactory,
{
    pub fn with_factory(houses: H, rooms: R, ids: G, factory: F) -> Self {
        Self {
            houses,
            rooms,
            ids,
            factory,
        }
    }

    /// Add a room to an existing house under a freshly generated id.
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] when the house does not exist,
    /// or a storage error from the repositories.
    #[tracing::instrument(skip(self, room), fields(room_name = %room.name))]
    pub async fn add_room(&self, house_id: &HouseId, room: NewRoom) -> Result<Room, SmartHomeError> {
        if !self.houses.contains(house_id).await? {
            return Err(NotFoundError::new("House", house_id).into());
        }
        let id = RoomId::new(self.ids.next_id())?;
        let room = self.factory.create_room(
            id,
            house_id.clone(),
            room.floor,
            room.dimensions,
            room.inside,
            room.name,
        );
        tracing::debug!(room_id = %room.id(), "room added");
        self.rooms.save(room).await
    }

    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] when the house does not exist,
    /// or a storage error from the repositories.
    #[tracing::instrument(skip(self))]
    pub async fn list_rooms(&self, house_id: &HouseId) -> Result<Vec<Room>, SmartHomeError> {
        if !self.houses.contains(house_id).await? {
            return Err(NotFoundError::new("House", house_id).into());
        }
        self.rooms.find_by_house(house_id).await
    }

    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] when no room with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_room(&self, id: &RoomId) -> Result<Room, SmartHomeError> {
        self.rooms
            .get_by_id(id)
            .await?
            .ok_or_else(|| NotFoundError::new("Room", id).into())
    }

    /// List rooms of every house.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_all_rooms(&self) -> Result<Vec<Room>, SmartHomeError> {
        self.rooms.get_all().await
    }
}
