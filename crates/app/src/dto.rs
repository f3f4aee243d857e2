//! Flat serde records crossing the application boundary.
//!
//! Aggregates map to DTOs infallibly through `From<&Aggregate>`. Incoming
//! DTOs are parsed back into value objects with `TryFrom` or `parse`, which
//! fail with a [`ValidationError`](smarthome_domain::error::ValidationError)
//! on the first invalid field. Timestamps travel as RFC 3339 strings.

mod catalog;
mod device;
mod house;
mod instrument;
mod reading;

pub use catalog::{ActuatorModelDto, ActuatorTypeDto, SensorModelDto, SensorTypeDto};
pub use device::{DeviceDto, DevicesByFunctionalityDto, NewDeviceDto};
pub use house::{HouseDto, LocationDto, NewRoomDto, RoomDto};
pub use instrument::{
    ActuatorDto, ActuatorValueDto, BlindPositionDto, NewActuatorDto, NewSensorDto, SensorDto,
};
pub use reading::{
    MaxTemperatureDifferenceDto, NewSensorReadingDto, PeakPowerConsumptionDto, PeakPowerQueryDto,
    ReadingsWithinPeriodDto, SensorReadingDto, TemperatureGapQuery,
};
