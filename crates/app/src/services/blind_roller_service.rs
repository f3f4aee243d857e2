//! Blind roller service: driving a roller blind from its capacity sensor.

use smarthome_domain::actuator::{Actuator, ActuatorKind};
use smarthome_domain::error::{NotFoundError, SmartHomeError, ValidationError};
use smarthome_domain::id::{ActuatorId, SensorId, SensorReadingId};
use smarthome_domain::sensor::{Sensor, SensorKind};
use smarthome_domain::sensor_reading::{DefaultSensorReadingFactory, SensorReadingFactory};
use smarthome_domain::text::Reading;
use smarthome_domain::time;

use crate::ports::{ActuatorRepository, IdGenerator, SensorReadingRepository, SensorRepository};

/// Application service moving roller blinds.
///
/// A blind is an `OPNCL0100` actuator paired with a `CAP200` sensor on the
/// same device. Every accepted position is also recorded as a reading of
/// that sensor.
pub struct BlindRollerService<A, S, R, G, F = DefaultSensorReadingFactory> {
    actuators: A,
    sensors: S,
    readings: R,
    ids: G,
    factory: F,
}

impl<A, S, R, G> BlindRollerService<A, S, R, G>
where
    A: ActuatorRepository,
    S: SensorRepository,
    R: SensorReadingRepository,
    G: IdGenerator,
{
    pub fn new(actuators: A, sensors: S, readings: R, ids: G) -> Self {
        Self::with_factory(actuators, sensors, readings, ids, DefaultSensorReadingFactory)
    }
}

impl<A, S, R, G, F> BlindRollerService<A, S, R, G, F>
where
    A: ActuatorRepository,
    S: SensorRepository,
    R: SensorReadingRepository,
    G: IdGenerator,
    F: SensorReadingFactory,
{
    pub fn with_factory(actuators: A, sensors: S, readings: R, ids: G, factory: F) -> Self {
        Self {
            actuators,
            sensors,
            readings,
            ids,
            factory,
        }
    }

    /// Move the blind to the position given by `raw` (0 closed, 100 open).
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] when the actuator or the sensor
    /// does not exist. Returns [`SmartHomeError::Validation`] when they sit
    /// on different devices, have the wrong models, or `raw` is not a
    /// percentage. Storage errors are propagated.
    #[tracing::instrument(skip(self))]
    pub async fn set_position(
        &self,
        actuator_id: &ActuatorId,
        sensor_id: &SensorId,
        raw: &str,
    ) -> Result<Actuator, SmartHomeError> {
        let mut actuator = self
            .actuators
            .get_by_id(actuator_id)
            .await?
            .ok_or_else(|| NotFoundError::new("Actuator", actuator_id))?;
        let mut sensor = self
            .sensors
            .get_by_id(sensor_id)
            .await?
            .ok_or_else(|| NotFoundError::new("Sensor", sensor_id))?;

        check_pairing(&actuator, &sensor)?;

        let reading = Reading::new(actuator.set_raw(raw)?.to_string())?;
        sensor.record_raw(reading.as_str())?;
        let actuator = self.actuators.update(actuator).await?;

        let id = SensorReadingId::new(self.ids.next_id())?;
        let reading = self.factory.create_sensor_reading(
            id,
            reading,
            sensor.device_id().clone(),
            sensor.id().clone(),
            time::now(),
        );
        tracing::debug!(reading = %reading.reading(), "blind position recorded");
        self.readings.save(reading).await?;
        self.sensors.update(sensor).await?;

        Ok(actuator)
    }
}

fn check_pairing(actuator: &Actuator, sensor: &Sensor) -> Result<(), ValidationError> {
    if actuator.device_id() != sensor.device_id() {
        return Err(ValidationError::DeviceMismatch);
    }
    if actuator.kind() != ActuatorKind::BlindRoller {
        return Err(ValidationError::IncompatibleModel {
            expected: ActuatorKind::BlindRoller.code(),
            found: actuator.model_id().to_string(),
        });
    }
    if sensor.kind() != SensorKind::Capacity {
        return Err(ValidationError::IncompatibleModel {
            expected: SensorKind::Capacity.code(),
            found: sensor.model_id().to_string(),
        });
    }
    Ok(())
}
