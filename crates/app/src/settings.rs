//! Settings loading: TOML file with environment variable overrides.
//!
//! Looks for `smarthome.toml` in the working directory. Every field has a
//! default so the file is optional. Environment variables take precedence
//! over file values.

use std::path::Path;

use serde::Deserialize;
use smarthome_domain::sensor::{Sensor, SensorKind};

/// Top-level settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Logging settings.
    pub logging: LoggingSettings,
    /// Which sensor models feed the reading analytics.
    pub readings: ReadingsSettings,
    /// House power metering.
    pub power: PowerSettings,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReadingsSettings {
    /// Model code of temperature sensors.
    pub temperature_sensor_model: String,
    /// Model code of power consumption sensors.
    pub power_sensor_model: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PowerSettings {
    /// Name of the device metering the whole house.
    pub grid_meter_name: String,
}

impl Settings {
    /// Load settings from `smarthome.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting settings are invalid.
    pub fn load() -> Result<Self, SettingsError> {
        let mut settings = Self::from_file("smarthome.toml")?;
        settings.apply_env_overrides();
        settings.validate()?;
        Ok(settings)
    }

    /// # Errors
    ///
    /// Returns [`SettingsError::Parse`] for malformed TOML and
    /// [`SettingsError::Io`] when the file exists but cannot be read.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(SettingsError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(SettingsError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup("SMARTHOME_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = lookup("RUST_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = lookup("SMARTHOME_TEMPERATURE_SENSOR_MODEL") {
            self.readings.temperature_sensor_model = val;
        }
        if let Some(val) = lookup("SMARTHOME_POWER_SENSOR_MODEL") {
            self.readings.power_sensor_model = val;
        }
        if let Some(val) = lookup("SMARTHOME_GRID_METER_NAME") {
            self.power.grid_meter_name = val;
        }
    }

    /// # Errors
    ///
    /// Returns [`SettingsError::Validation`] when a sensor model is not in
    /// the catalog or the grid meter name is blank.
    pub fn validate(&self) -> Result<(), SettingsError> {
        for model in [
            &self.readings.temperature_sensor_model,
            &self.readings.power_sensor_model,
        ] {
            if model.parse::<SensorKind>().is_err() {
                return Err(SettingsError::Validation(format!(
                    "unknown sensor model {model:?}"
                )));
            }
        }
        if self.power.grid_meter_name.trim().is_empty() {
            return Err(SettingsError::Validation(
                "grid meter name must not be blank".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: "smarthome=info".to_string(),
        }
    }
}

impl ReadingsSettings {
    /// Whether `sensor` is of the configured temperature model.
    #[must_use]
    pub fn is_temperature_sensor(&self, sensor: &Sensor) -> bool {
        sensor.model_id().as_str() == self.temperature_sensor_model
    }

    /// Whether `sensor` is of the configured power consumption model.
    #[must_use]
    pub fn is_power_sensor(&self, sensor: &Sensor) -> bool {
        sensor.model_id().as_str() == self.power_sensor_model
    }
}

impl Default for ReadingsSettings {
    fn default() -> Self {
        Self {
            temperature_sensor_model: SensorKind::Temperature.code().to_string(),
            power_sensor_model: SensorKind::PowerConsumption.code().to_string(),
        }
    }
}

impl Default for PowerSettings {
    fn default() -> Self {
        Self {
            grid_meter_name: crate::services::POWER_GRID_METER.to_string(),
        }
    }
}

/// Settings errors.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// TOML parse failure.
    #[error("failed to parse settings file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read settings file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid settings: {0}")]
    Validation(String),
}
