//! Sensor reading service: recording measurements and analysing them.

use std::collections::BTreeMap;

use chrono::Duration;
use smarthome_domain::device::Device;
use smarthome_domain::error::{NotFoundError, SmartHomeError, ValidationError};
use smarthome_domain::id::{DeviceId, SensorId, SensorReadingId};
use smarthome_domain::sensor_reading::{
    DefaultSensorReadingFactory, SensorReading, SensorReadingFactory,
};
use smarthome_domain::text::Reading;
use smarthome_domain::time::{Period, Timestamp};

use crate::ports::{DeviceRepository, IdGenerator, SensorReadingRepository, SensorRepository};
use crate::services::device_service::POWER_GRID_METER;
use crate::settings::{ReadingsSettings, Settings};

/// Application service for sensor readings.
pub struct SensorReadingService<R, S, D, G, F = DefaultSensorReadingFactory> {
    readings: R,
    sensors: S,
    devices: D,
    ids: G,
    factory: F,
    models: ReadingsSettings,
    grid_meter_name: String,
}

impl<R, S, D, G> SensorReadingService<R, S, D, G>
where
    R: SensorReadingRepository,
    S: SensorRepository,
    D: DeviceRepository,
    G: IdGenerator,
{
    pub fn new(readings: R, sensors: S, devices: D, ids: G) -> Self {
        Self::with_factory(readings, sensors, devices, ids, DefaultSensorReadingFactory)
    }
}

impl<R, S, D, G, F> SensorReadingService<R, S, D, G, F>
where
    R: SensorReadingRepository,
    S: SensorRepository,
    D: DeviceRepository,
    G: IdGenerator,
    F: SensorReadingFactory,
{
    pub fn with_factory(readings: R, sensors: S, devices: D, ids: G, factory: F) -> Self {
        Self {
            readings,
            sensors,
            devices,
            ids,
            factory,
            models: ReadingsSettings::default(),
            grid_meter_name: POWER_GRID_METER.to_string(),
        }
    }

    /// Take sensor model codes and the grid meter name from `settings`.
    #[must_use]
    pub fn with_settings(mut self, settings: &Settings) -> Self {
        self.models.clone_from(&settings.readings);
        self.grid_meter_name.clone_from(&settings.power.grid_meter_name);
        self
    }

    /// Record a reading taken by `sensor_id` on `device_id`.
    ///
    /// The reading must parse as a value of the sensor's model. It becomes
    /// the sensor's current value unless a later reading is already stored.
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] when the device or the sensor
    /// does not exist, [`SmartHomeError::Validation`] when the sensor is not
    /// installed on the device or the reading does not fit its model, or a
    /// storage error from the repositories.
    #[tracing::instrument(skip(self, reading), fields(reading = %reading))]
    pub async fn add_reading(
        &self,
        reading: Reading,
        device_id: &DeviceId,
        sensor_id: &SensorId,
        timestamp: Timestamp,
    ) -> Result<SensorReading, SmartHomeError> {
        if !self.devices.contains(device_id).await? {
            return Err(NotFoundError::new("Device", device_id).into());
        }
        let mut sensor = self
            .sensors
            .get_by_id(sensor_id)
            .await?
            .ok_or_else(|| NotFoundError::new("Sensor", sensor_id))?;
        if sensor.device_id() != device_id {
            return Err(ValidationError::DeviceMismatch.into());
        }
        sensor.record_raw(reading.as_str())?;
        let latest = self.readings.find_latest_by_sensor(sensor_id).await?;

        let id = SensorReadingId::new(self.ids.next_id())?;
        let reading = self.factory.create_sensor_reading(
            id,
            reading,
            device_id.clone(),
            sensor_id.clone(),
            timestamp,
        );
        let reading = self.readings.save(reading).await?;
        if latest.is_none_or(|latest| latest.timestamp() <= timestamp) {
            self.sensors.update(sensor).await?;
        }
        Ok(reading)
    }

    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] when no reading with `id`
    /// exists, or a storage error from the repository.
    pub async fn get_reading(&self, id: &SensorReadingId) -> Result<SensorReading, SmartHomeError> {
        self.readings
            .get_by_id(id)
            .await?
            .ok_or_else(|| NotFoundError::new("SensorReading", id).into())
    }

    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn readings_of_device(
        &self,
        device_id: &DeviceId,
    ) -> Result<Vec<SensorReading>, SmartHomeError> {
        self.readings.find_by_device(device_id).await
    }

    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn readings_of_device_within(
        &self,
        device_id: &DeviceId,
        period: Period,
    ) -> Result<Vec<SensorReading>, SmartHomeError> {
        self.readings.find_by_device_within(device_id, period).await
    }

    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn readings_of_sensor_within(
        &self,
        sensor_id: &SensorId,
        period: Period,
    ) -> Result<Vec<SensorReading>, SmartHomeError> {
        self.readings.find_by_sensor_within(sensor_id, period).await
    }

    /// Most recent reading of a sensor, if it ever reported one.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn latest_reading(
        &self,
        sensor_id: &SensorId,
    ) -> Result<Option<SensorReading>, SmartHomeError> {
        self.readings.find_latest_by_sensor(sensor_id).await
    }

    /// Readings taken within `period` by the temperature sensors of a device.
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] when the device does not exist,
    /// [`ValidationError::NoReadings`] when nothing was measured, or a
    /// storage error from the repositories.
    #[tracing::instrument(skip(self))]
    pub async fn temperature_readings(
        &self,
        device_id: &DeviceId,
        period: Period,
    ) -> Result<Vec<SensorReading>, SmartHomeError> {
        if !self.devices.contains(device_id).await? {
            return Err(NotFoundError::new("Device", device_id).into());
        }
        let mut readings = Vec::new();
        for sensor in self.sensors.find_by_device(device_id).await? {
            if !self.models.is_temperature_sensor(&sensor) {
                continue;
            }
            readings.extend(self.readings.find_by_sensor_within(sensor.id(), period).await?);
        }
        if readings.is_empty() {
            return Err(ValidationError::NoReadings.into());
        }
        Ok(readings)
    }

    /// Largest absolute temperature gap between an inside and an outside
    /// reading taken at most `delta_minutes` apart. The gap between two
    /// readings is compared at full precision, so 5m59s is not within 5
    /// minutes.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidInterval`] for a negative delta,
    /// [`SmartHomeError::NotFound`] when either device does not
    /// exist, [`ValidationError::NoReadings`] when no pair of readings is
    /// close enough in time, [`ValidationError::InvalidNumber`] when a stored
    /// reading is not an integer, or a storage error from the repositories.
    #[tracing::instrument(skip(self))]
    pub async fn max_temperature_difference(
        &self,
        inside: &DeviceId,
        outside: &DeviceId,
        period: Period,
        delta_minutes: i64,
    ) -> Result<i64, SmartHomeError> {
        if delta_minutes < 0 {
            return Err(ValidationError::InvalidInterval(delta_minutes).into());
        }
        let delta = Duration::try_minutes(delta_minutes).unwrap_or(Duration::MAX);
        let inside = self.temperature_readings(inside, period).await?;
        let outside = self.temperature_readings(outside, period).await?;

        let mut max: Option<i64> = None;
        for a in &inside {
            for b in &outside {
                if (a.timestamp() - b.timestamp()).abs() > delta {
                    continue;
                }
                let diff = (a.reading().parse::<i64>()? - b.reading().parse::<i64>()?).abs();
                max = Some(max.map_or(diff, |m| m.max(diff)));
            }
        }
        max.ok_or_else(|| ValidationError::NoReadings.into())
    }

    /// Highest house power draw over `period`, sampled every
    /// `interval_minutes`.
    ///
    /// Each window sums, over the devices carrying a power sensor, the mean
    /// of the readings their power sensors took in the window. `meter` must
    /// be the house grid meter.
    ///
    /// # Errors
    ///
    /// Returns [`SmartHomeError::NotFound`] when `meter` is not the grid
    /// meter, [`ValidationError::InvalidInterval`] for a non-positive or
    /// unrepresentable interval, [`ValidationError::InvalidPeriod`] for an empty period,
    /// [`ValidationError::InvalidNumber`] for non-numeric readings, or a
    /// storage error from the repositories.
    #[tracing::instrument(skip(self, meter), fields(meter = %meter.id()))]
    pub async fn peak_power_consumption(
        &self,
        meter: &Device,
        period: Period,
        interval_minutes: i64,
    ) -> Result<f64, SmartHomeError> {
        if meter.name().as_str() != self.grid_meter_name {
            return Err(NotFoundError::new("Device", &self.grid_meter_name).into());
        }
        if interval_minutes <= 0 {
            return Err(ValidationError::InvalidInterval(interval_minutes).into());
        }
        let step = Duration::try_minutes(interval_minutes)
            .ok_or(ValidationError::InvalidInterval(interval_minutes))?;
        let windows = period.windows(step);
        if windows.is_empty() {
            return Err(ValidationError::InvalidPeriod.into());
        }

        let mut metered: BTreeMap<DeviceId, Vec<SensorId>> = BTreeMap::new();
        for sensor in self.sensors.get_all().await? {
            if self.models.is_power_sensor(&sensor) {
                metered
                    .entry(sensor.device_id().clone())
                    .or_default()
                    .push(sensor.id().clone());
            }
        }
        if metered.is_empty() {
            tracing::warn!(
                model = %self.models.power_sensor_model,
                "no device carries a power sensor"
            );
        }

        let mut peak = 0.0_f64;
        for window in windows {
            let mut total = 0.0;
            for sensor_ids in metered.values() {
                let mut readings = Vec::new();
                for sensor_id in sensor_ids {
                    readings.extend(self.readings.find_by_sensor_within(sensor_id, window).await?);
                }
                total += mean(&readings)?;
            }
            peak = peak.max(total);
        }
        Ok(peak)
    }
}

#[allow(clippy::cast_precision_loss)]
fn mean(readings: &[SensorReading]) -> Result<f64, ValidationError> {
    if readings.is_empty() {
        return Ok(0.0);
    }
    let mut sum = 0.0;
    for reading in readings {
        sum += reading.reading().parse::<f64>()?;
    }
    Ok(sum / readings.len() as f64)
}
