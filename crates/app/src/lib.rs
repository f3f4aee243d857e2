//! # smarthome-app
//!
//! Application layer: use-cases, **port definitions** and boundary types.
//!
//! ## Responsibilities
//! - Define **port traits** that storage adapters implement:
//!   - `HouseRepository`, `RoomRepository`, `DeviceRepository`
//!   - `SensorRepository`, `ActuatorRepository`, `SensorReadingRepository`
//!   - catalog repositories for sensor/actuator types and models
//!   - `IdGenerator` for fresh aggregate ids
//! - Provide **services** orchestrating the domain: houses, rooms, devices,
//!   sensors, actuators, readings analytics, blind rollers
//! - Map aggregates to and from flat **DTOs**
//! - Load **settings** and initialise **telemetry**
//!
//! ## Dependency rule
//! Depends on `smarthome-domain` only. Never imports adapter crates.

pub mod dto;
pub mod ports;
pub mod services;
pub mod settings;
pub mod telemetry;

#[cfg(test)]
mod in_memory;
