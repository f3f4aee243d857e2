//! Reading port: append and query sensor readings.

use std::future::Future;

use smarthome_domain::error::SmartHomeError;
use smarthome_domain::id::{DeviceId, SensorId, SensorReadingId};
use smarthome_domain::sensor_reading::SensorReading;
use smarthome_domain::time::Period;

/// Repository for [`SensorReading`]s.
///
/// Period queries include both bounds.
pub trait SensorReadingRepository: Send + Sync {
    fn save(
        &self,
        reading: SensorReading,
    ) -> impl Future<Output = Result<SensorReading, SmartHomeError>> + Send;

    fn get_by_id(
        &self,
        id: &SensorReadingId,
    ) -> impl Future<Output = Result<Option<SensorReading>, SmartHomeError>> + Send;

    /// Every reading produced by sensors of `device_id`.
    fn find_by_device(
        &self,
        device_id: &DeviceId,
    ) -> impl Future<Output = Result<Vec<SensorReading>, SmartHomeError>> + Send;

    fn find_by_device_within(
        &self,
        device_id: &DeviceId,
        period: Period,
    ) -> impl Future<Output = Result<Vec<SensorReading>, SmartHomeError>> + Send;

    fn find_by_sensor_within(
        &self,
        sensor_id: &SensorId,
        period: Period,
    ) -> impl Future<Output = Result<Vec<SensorReading>, SmartHomeError>> + Send;

    /// Most recent reading of `sensor_id`.
    fn find_latest_by_sensor(
        &self,
        sensor_id: &SensorId,
    ) -> impl Future<Output = Result<Option<SensorReading>, SmartHomeError>> + Send;
}
