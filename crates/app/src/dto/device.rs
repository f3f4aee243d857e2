use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use smarthome_domain::activation::ActivationStatus;
use smarthome_domain::device::Device;
use smarthome_domain::error::ValidationError;
use smarthome_domain::text::{DeviceModel, DeviceName};

use crate::services::DevicesByFunctionality;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceDto {
    pub id: String,
    pub room_id: String,
    pub name: String,
    pub model: String,
    pub status: ActivationStatus,
}

impl From<&Device> for DeviceDto {
    fn from(device: &Device) -> Self {
        Self {
            id: device.id().to_string(),
            room_id: device.room_id().to_string(),
            name: device.name().to_string(),
            model: device.model().to_string(),
            status: device.status(),
        }
    }
}

/// Request body for installing a device in a room.
#[derive(Debug, Clone, Deserialize)]
pub struct NewDeviceDto {
    pub name: String,
    pub model: String,
    #[serde(default)]
    pub status: ActivationStatus,
}

impl NewDeviceDto {
    /// # Errors
    ///
    /// Returns [`ValidationError::Empty`] for a blank name or model.
    pub fn parse(&self) -> Result<(DeviceName, DeviceModel, ActivationStatus), ValidationError> {
        Ok((
            DeviceName::new(self.name.as_str())?,
            DeviceModel::new(self.model.as_str())?,
            self.status,
        ))
    }
}

/// Devices grouped by sensor or actuator type description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DevicesByFunctionalityDto(pub BTreeMap<String, Vec<DeviceDto>>);

impl From<&DevicesByFunctionality> for DevicesByFunctionalityDto {
    fn from(groups: &DevicesByFunctionality) -> Self {
        Self(
            groups
                .iter()
                .map(|(description, devices)| {
                    (description.clone(), devices.iter().map(DeviceDto::from).collect())
                })
                .collect(),
        )
    }
}
