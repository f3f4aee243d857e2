//! Typed identifier newtypes backed by non-blank strings.
//!
//! Identifiers are compared, hashed and ordered by their wrapped string.
//! Generating fresh identifiers is the job of the application layer.

use crate::text::non_blank_string;

non_blank_string!(
    /// Unique identifier for a [`House`](crate::house::House).
    HouseId,
    "house id"
);

non_blank_string!(
    /// Unique identifier for a [`Room`](crate::room::Room).
    RoomId,
    "room id"
);

non_blank_string!(
    /// Unique identifier for a [`Device`](crate::device::Device).
    DeviceId,
    "device id"
);

non_blank_string!(
    /// Unique identifier for a [`Sensor`](crate::sensor::Sensor).
    SensorId,
    "sensor id"
);

non_blank_string!(
    /// Unique identifier for an [`Actuator`](crate::actuator::Actuator).
    ActuatorId,
    "actuator id"
);

non_blank_string!(
    /// Unique identifier for a [`SensorType`](crate::sensor_type::SensorType).
    SensorTypeId,
    "sensor type id"
);

non_blank_string!(
    /// Unique identifier for an [`ActuatorType`](crate::actuator_type::ActuatorType).
    ActuatorTypeId,
    "actuator type id"
);

non_blank_string!(
    /// Catalog code of a [`SensorModel`](crate::sensor_model::SensorModel), e.g. `GA100K`.
    SensorModelId,
    "sensor model id"
);

non_blank_string!(
    /// Catalog code of an [`ActuatorModel`](crate::actuator_model::ActuatorModel), e.g. `ONF01A`.
    ActuatorModelId,
    "actuator model id"
);

non_blank_string!(
    /// Unique identifier for a [`SensorReading`](crate::sensor_reading::SensorReading).
    SensorReadingId,
    "sensor reading id"
);
