//! Device activation flag.

use serde::{Deserialize, Serialize};

/// Whether a device is in service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivationStatus {
    #[default]
    Active,
    Inactive,
}

impl ActivationStatus {
    #[must_use]
    pub fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}

impl From<bool> for ActivationStatus {
    fn from(active: bool) -> Self {
        if active { Self::Active } else { Self::Inactive }
    }
}

impl From<ActivationStatus> for bool {
    fn from(status: ActivationStatus) -> Self {
        status.is_active()
    }
}
