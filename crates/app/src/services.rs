//! Application services: one struct per use-case family.
//!
//! Services take their repositories, id generator and factory as generic
//! parameters and never see a concrete adapter.

pub mod actuator_model_service;
pub mod actuator_service;
pub mod actuator_type_service;
pub mod blind_roller_service;
pub mod device_service;
pub mod device_type_service;
pub mod house_service;
pub mod room_service;
pub mod sensor_model_service;
pub mod sensor_reading_service;
pub mod sensor_service;
pub mod sensor_type_service;

pub use actuator_model_service::ActuatorModelService;
pub use actuator_service::ActuatorService;
pub use actuator_type_service::ActuatorTypeService;
pub use blind_roller_service::BlindRollerService;
pub use device_service::{DeviceService, POWER_GRID_METER};
pub use device_type_service::{DeviceTypeRepos, DeviceTypeService, DevicesByFunctionality};
pub use house_service::HouseService;
pub use room_service::{NewRoom, RoomService};
pub use sensor_model_service::SensorModelService;
pub use sensor_reading_service::SensorReadingService;
pub use sensor_service::SensorService;
pub use sensor_type_service::SensorTypeService;
