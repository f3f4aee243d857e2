//! # smarthome-domain
//!
//! Pure domain model for the smart-home system.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - **Value objects** that validate themselves on construction (names,
//!   locations, room geometry, measurements)
//! - **Aggregates**: houses, rooms, devices, sensor/actuator types and
//!   models, sensors, actuators and sensor readings
//! - **Factories**, one per aggregate, so callers never depend on
//!   constructors directly
//! - Closed catalogs of the sensor and actuator hardware the system supports
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app` or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod aggregate;
pub mod error;
pub mod id;
pub mod time;

pub mod activation;
pub mod dimensions;
pub mod location;
pub mod measure;
pub mod text;

pub mod actuator;
pub mod actuator_model;
pub mod actuator_type;
pub mod device;
pub mod house;
pub mod room;
pub mod sensor;
pub mod sensor_model;
pub mod sensor_reading;
pub mod sensor_type;

