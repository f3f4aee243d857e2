//! Room: a space inside (or attached to) a house.

use crate::aggregate::{AggregateRoot, identity_equality};
use crate::dimensions::{Dimensions, FloorNumber};
use crate::id::{HouseId, RoomId};
use crate::text::RoomName;

#[derive(Debug, Clone)]
pub struct Room {
    id: RoomId,
    house_id: HouseId,
    floor: FloorNumber,
    dimensions: Dimensions,
    inside: bool,
    name: RoomName,
}

impl Room {
    #[must_use]
    pub fn new(
        id: RoomId,
        house_id: HouseId,
        floor: FloorNumber,
        dimensions: Dimensions,
        inside: bool,
        name: RoomName,
    ) -> Self {
        Self {
            id,
            house_id,
            floor,
            dimensions,
            inside,
            name,
        }
    }

    #[must_use]
    pub fn id(&self) -> &RoomId {
        &self.id
    }

    #[must_use]
    pub fn house_id(&self) -> &HouseId {
        &self.house_id
    }

    #[must_use]
    pub fn floor(&self) -> FloorNumber {
        self.floor
    }

    #[must_use]
    pub fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }

    /// `false` for outdoor spaces such as gardens or balconies.
    #[must_use]
    pub fn is_inside(&self) -> bool {
        self.inside
    }

    #[must_use]
    pub fn name(&self) -> &RoomName {
        &self.name
    }
}

impl AggregateRoot for Room {
    type Id = RoomId;

    fn identity(&self) -> &RoomId {
        &self.id
    }

    fn same_as(&self, other: &Self) -> bool {
        self.id == other.id
            && self.house_id == other.house_id
            && self.floor == other.floor
            && self.dimensions == other.dimensions
            && self.inside == other.inside
            && self.name == other.name
    }
}

identity_equality!(Room);

/// Builds [`Room`] aggregates.
pub trait RoomFactory {
    fn create_room(
        &self,
        id: RoomId,
        house_id: HouseId,
        floor: FloorNumber,
        dimensions: Dimensions,
        inside: bool,
        name: RoomName,
    ) -> Room;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultRoomFactory;

impl RoomFactory for DefaultRoomFactory {
    fn create_room(
        &self,
        id: RoomId,
        house_id: HouseId,
        floor: FloorNumber,
        dimensions: Dimensions,
        inside: bool,
        name: RoomName,
    ) -> Room {
        Room::new(id, house_id, floor, dimensions, inside, name)
    }
}
