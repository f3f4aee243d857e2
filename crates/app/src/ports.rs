//! Port definitions: traits that storage adapters implement.
//!
//! Every repository speaks in domain aggregates and typed ids; the only
//! error it may add is [`SmartHomeError::Storage`](smarthome_domain::error::SmartHomeError::Storage).

pub mod catalog;
pub mod id_generator;
pub mod instrument;
pub mod reading;
pub mod storage;

pub use catalog::{
    ActuatorModelRepository, ActuatorTypeRepository, SensorModelRepository, SensorTypeRepository,
};
pub use id_generator::{IdGenerator, UuidIdGenerator};
pub use instrument::{ActuatorRepository, SensorRepository};
pub use reading::SensorReadingRepository;
pub use storage::{DeviceRepository, HouseRepository, RoomRepository};
