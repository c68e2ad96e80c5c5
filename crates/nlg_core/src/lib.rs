/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Data model for notification list groups.
//!
//! A [`NotificationGroup`] is a collapsible container of
//! [`NotificationItem`]s with a title, an optional priority and a set of
//! actions. Documents of groups are read from YAML, JSON or CBOR and handed
//! to `nlg_processor` for rendering.

pub mod group;
pub mod macros;
pub mod options;

pub use group::{Action, InputDocument, InputGroups, NotificationGroup, NotificationItem, Priority};
pub use options::{DeviceClass, RenderOptions};
