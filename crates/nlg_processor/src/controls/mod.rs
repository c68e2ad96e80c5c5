/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Concrete controls a notification group is composed of.
//!
//! The group renderer only sees these through [`Renderable`](crate::render::Renderable).

pub mod button;
pub mod group;
pub mod icon;
pub mod invisible_text;
pub mod item;
pub mod toolbar;

pub use button::Button;
pub use group::{group_title_text, max_number_message, NotificationListGroup};
pub use icon::Icon;
pub use invisible_text::InvisibleText;
pub use item::NotificationListItem;
pub use toolbar::OverflowToolbar;
