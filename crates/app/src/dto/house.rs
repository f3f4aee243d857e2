use serde::{Deserialize, Serialize};
use smarthome_domain::dimensions::{Dimensions, FloorNumber, Height, Length, Width};
use smarthome_domain::error::ValidationError;
use smarthome_domain::house::House;
use smarthome_domain::location::{
    Address, GpsCoordinates, Latitude, Location, Longitude, ZipCode,
};
use smarthome_domain::room::Room;
use smarthome_domain::text::RoomName;

use crate::services::NewRoom;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationDto {
    pub address: String,
    /// One of `Portugal`, `France`, `USA`, `Canada`.
    pub country: String,
    pub zip_code: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<&Location> for LocationDto {
    fn from(location: &Location) -> Self {
        Self {
            address: location.address().to_string(),
            country: location.zip_code().country().to_string(),
            zip_code: location.zip_code().code().to_owned(),
            latitude: location.gps().latitude().value(),
            longitude: location.gps().longitude().value(),
        }
    }
}

impl TryFrom<&LocationDto> for Location {
    type Error = ValidationError;

    fn try_from(dto: &LocationDto) -> Result<Self, Self::Error> {
        Ok(Location::new(
            Address::new(dto.address.as_str())?,
            ZipCode::parse(&dto.country, dto.zip_code.as_str())?,
            GpsCoordinates::new(Latitude::new(dto.latitude)?, Longitude::new(dto.longitude)?),
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseDto {
    pub id: String,
    pub location: LocationDto,
}

impl From<&House> for HouseDto {
    fn from(house: &House) -> Self {
        Self {
            id: house.id().to_string(),
            location: house.location().into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomDto {
    pub id: String,
    pub house_id: String,
    pub name: String,
    pub floor: i32,
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub inside: bool,
}

impl From<&Room> for RoomDto {
    fn from(room: &Room) -> Self {
        let dimensions = room.dimensions();
        Self {
            id: room.id().to_string(),
            house_id: room.house_id().to_string(),
            name: room.name().to_string(),
            floor: room.floor().value(),
            length: dimensions.length().value(),
            width: dimensions.width().value(),
            height: dimensions.height().value(),
            inside: room.is_inside(),
        }
    }
}

/// Request body for adding a room to a house.
#[derive(Debug, Clone, Deserialize)]
pub struct NewRoomDto {
    pub name: String,
    pub floor: i32,
    pub length: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default = "inside_by_default")]
    pub inside: bool,
}

fn inside_by_default() -> bool {
    true
}

impl TryFrom<&NewRoomDto> for NewRoom {
    type Error = ValidationError;

    fn try_from(dto: &NewRoomDto) -> Result<Self, Self::Error> {
        Ok(NewRoom {
            name: RoomName::new(dto.name.as_str())?,
            floor: FloorNumber::new(dto.floor),
            dimensions: Dimensions::new(
                Length::new(dto.length)?,
                Width::new(dto.width)?,
                Height::new(dto.height)?,
            ),
            inside: dto.inside,
        })
    }
}

#[cfg(test)]
mod tests {
    use smarthome_domain::id::{HouseId, RoomId};
    use smarthome_domain::location::Country;

    use super::*;

    fn location_dto() -> LocationDto {
        LocationDto {
            address: "1 Rue de Rivoli".to_string(),
            country: "France".to_string(),
            zip_code: "75001".to_string(),
            latitude: 48.86,
            longitude: 2.34,
        }
    }

    #[test]
    fn should_parse_location_dto() {
        let location = Location::try_from(&location_dto()).unwrap();
        assert_eq!(location.zip_code().country(), Country::France);
        assert_eq!(LocationDto::from(&location), location_dto());
    }

    #[test]
    fn should_reject_location_with_foreign_zip_code() {
        let mut dto = location_dto();
        dto.zip_code = "1000-100".to_string();
        assert!(matches!(
            Location::try_from(&dto),
            Err(ValidationError::InvalidZipCode { .. })
        ));
    }

    #[test]
    fn should_reject_location_with_latitude_out_of_range() {
        let mut dto = location_dto();
        dto.latitude = 91.0;
        assert!(matches!(
            Location::try_from(&dto),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn should_serialize_house_with_nested_location() {
        let house = House::new(
            HouseId::new("home").unwrap(),
            Location::try_from(&location_dto()).unwrap(),
        );
        let json = serde_json::to_value(HouseDto::from(&house)).unwrap();
        assert_eq!(json["id"], "home");
        assert_eq!(json["location"]["country"], "France");
        assert_eq!(json["location"]["zip_code"], "75001");
    }

    #[test]
    fn should_default_new_room_to_inside() {
        let dto: NewRoomDto = serde_json::from_str(
            r#"{"name":"Garage","floor":0,"length":6.0,"width":3.0,"height":2.4}"#,
        )
        .unwrap();
        let room = NewRoom::try_from(&dto).unwrap();
        assert!(room.inside);
        assert_eq!(room.name.as_str(), "Garage");
    }

    #[test]
    fn should_reject_new_room_with_non_positive_dimension() {
        let dto: NewRoomDto = serde_json::from_str(
            r#"{"name":"Closet","floor":1,"length":0.0,"width":1.0,"height":2.0,"inside":true}"#,
        )
        .unwrap();
        assert!(NewRoom::try_from(&dto).is_err());
    }

    #[test]
    fn should_map_room_to_flat_dto() {
        let room = Room::new(
            RoomId::new("r1").unwrap(),
            HouseId::new("home").unwrap(),
            FloorNumber::new(-1),
            Dimensions::new(
                Length::new(4.0).unwrap(),
                Width::new(3.5).unwrap(),
                Height::new(2.2).unwrap(),
            ),
            false,
            RoomName::new("Cellar").unwrap(),
        );
        let dto = RoomDto::from(&room);
        assert_eq!(dto.floor, -1);
        assert!((dto.width - 3.5).abs() < f64::EPSILON);
        assert!(!dto.inside);
        assert_eq!(dto.house_id, "home");
    }
}
