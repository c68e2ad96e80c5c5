/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Render options shared by every group in a document.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Default notification limit on desktop devices.
pub const DESKTOP_MAX_NOTIFICATIONS: usize = 400;

/// Default notification limit on tablets and phones.
pub const MOBILE_MAX_NOTIFICATIONS: usize = 100;

crate::str_enum! {
    /// Device class the markup is rendered for.
    ///
    /// Detection happens outside this crate; callers pass the result in.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[cfg_attr(feature = "schema", derive(JsonSchema))]
    #[serde(rename_all = "kebab-case")]
    pub enum DeviceClass {
        #[default]
        Desktop = "desktop",
        Tablet = "tablet",
        Phone = "phone",
    }
}

impl DeviceClass {
    pub fn is_phone(&self) -> bool {
        matches!(self, DeviceClass::Phone)
    }

    pub fn is_desktop(&self) -> bool {
        matches!(self, DeviceClass::Desktop)
    }
}

/// Options applied to a render pass.
#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub struct RenderOptions {
    /// Target device class.
    #[serde(default)]
    pub device: DeviceClass,
    /// Number of notifications a group displays before showing the
    /// "maximum reached" footer. Defaults depend on the device class.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_notifications: Option<usize>,
}

impl RenderOptions {
    pub fn for_device(device: DeviceClass) -> Self {
        Self {
            device,
            ..Default::default()
        }
    }

    /// The effective notification limit.
    pub fn max_notifications(&self) -> usize {
        self.max_notifications.unwrap_or(if self.device.is_desktop() {
            DESKTOP_MAX_NOTIFICATIONS
        } else {
            MOBILE_MAX_NOTIFICATIONS
        })
    }
}
