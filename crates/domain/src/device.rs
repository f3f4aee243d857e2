//! Device: a physical appliance installed in a room that carries sensors
//! and actuators.

use crate::activation::ActivationStatus;
use crate::aggregate::{AggregateRoot, identity_equality};
use crate::error::ValidationError;
use crate::id::{DeviceId, RoomId};
use crate::text::{DeviceModel, DeviceName};

#[derive(Debug, Clone)]
pub struct Device {
    id: DeviceId,
    name: DeviceName,
    model: DeviceModel,
    status: ActivationStatus,
    room_id: RoomId,
}

impl Device {
    /// Register a new device. Devices always start active.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InactiveDevice`] when `status` is
    /// [`ActivationStatus::Inactive`].
    pub fn new(
        id: DeviceId,
        name: DeviceName,
        model: DeviceModel,
        status: ActivationStatus,
        room_id: RoomId,
    ) -> Result<Self, ValidationError> {
        if !status.is_active() {
            return Err(ValidationError::InactiveDevice);
        }
        Ok(Self::restore(id, name, model, status, room_id))
    }

    /// Rebuild a previously stored device, whatever its status.
    #[must_use]
    pub fn restore(
        id: DeviceId,
        name: DeviceName,
        model: DeviceModel,
        status: ActivationStatus,
        room_id: RoomId,
    ) -> Self {
        Self {
            id,
            name,
            model,
            status,
            room_id,
        }
    }

    #[must_use]
    pub fn id(&self) -> &DeviceId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &DeviceName {
        &self.name
    }

    #[must_use]
    pub fn model(&self) -> &DeviceModel {
        &self.model
    }

    #[must_use]
    pub fn status(&self) -> ActivationStatus {
        self.status
    }

    #[must_use]
    pub fn room_id(&self) -> &RoomId {
        &self.room_id
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Take the device out of service. Deactivating twice is a no-op.
    pub fn deactivate(&mut self) {
        self.status = ActivationStatus::Inactive;
    }
}

impl AggregateRoot for Device {
    type Id = DeviceId;

    fn identity(&self) -> &DeviceId {
        &self.id
    }

    fn same_as(&self, other: &Self) -> bool {
        self.id == other.id
            && self.name == other.name
            && self.model == other.model
            && self.status == other.status
            && self.room_id == other.room_id
    }
}

identity_equality!(Device);

/// Builds [`Device`] aggregates.
pub trait DeviceFactory {
    /// # Errors
    ///
    /// Returns [`ValidationError::InactiveDevice`] for an inactive status.
    fn create_device(
        &self,
        id: DeviceId,
        name: DeviceName,
        model: DeviceModel,
        status: ActivationStatus,
        room_id: RoomId,
    ) -> Result<Device, ValidationError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultDeviceFactory;

impl DeviceFactory for DefaultDeviceFactory {
    fn create_device(
        &self,
        id: DeviceId,
        name: DeviceName,
        model: DeviceModel,
        status: ActivationStatus,
        room_id: RoomId,
    ) -> Result<Device, ValidationError> {
        Device::new(id, name, model, status, room_id)
    }
}
