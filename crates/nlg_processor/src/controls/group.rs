/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! A notification group together with the controls it is rendered with.

use super::button::Button;
use super::icon::Icon;
use super::invisible_text::InvisibleText;
use super::item::{actions_toolbar, close_button, NotificationListItem};
use super::toolbar::OverflowToolbar;
use crate::error::RenderError;
use crate::render::group::invisible_title_id;
use crate::render::{GroupRenderer, GroupView, MaxNumberMessage, RenderTarget, Renderable};
use nlg_core::{NotificationGroup, Priority, RenderOptions};
use tracing::debug;

pub const MAX_NUMBER_DESCRIPTION: &str =
    "To see them, dismiss some of the notifications that are displayed.";

/// Text read by screen readers in place of the visual group header.
pub fn group_title_text(group: &NotificationGroup) -> String {
    let mut parts = vec!["Notification group".to_string()];
    parts.push(if group.unread { "Unread" } else { "Read" }.to_string());
    if group.priority != Priority::None {
        parts.push(format!("{} priority", group.priority));
    }
    let count = group.visible_items_count();
    parts.push(match count {
        1 => "1 notification".to_string(),
        n => format!("{} notifications", n),
    });
    parts.join(". ")
}

/// Footer message when `total` notifications exceed `limit`.
pub fn max_number_message(total: usize, limit: usize) -> Option<MaxNumberMessage> {
    (total > limit).then(|| MaxNumberMessage {
        title: format!("{} More Notifications", total - limit),
        description: MAX_NUMBER_DESCRIPTION.to_string(),
    })
}

/// Owns everything a [`GroupView`] borrows.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationListGroup {
    pub id: String,
    pub title: String,
    pub visible: bool,
    pub collapsed: bool,
    pub unread: bool,
    pub priority: Priority,
    pub show_items_counter: bool,
    pub show_empty_group: bool,
    pub items_count: usize,
    pub visible_items_count: usize,
    /// Items that are displayed, at most the configured limit.
    pub items: Vec<NotificationListItem>,
    pub max_number_message: Option<MaxNumberMessage>,
    pub collapse_button: Button,
    pub priority_icon: Option<Icon>,
    pub overflow_toolbar: Option<OverflowToolbar>,
    pub close_button: Option<Button>,
    pub title_text: InvisibleText,
    pub is_phone: bool,
}

impl NotificationListGroup {
    pub fn new(group: &NotificationGroup, options: &RenderOptions) -> Self {
        let limit = options.max_notifications();
        let max_number_message = max_number_message(group.items.len(), limit);
        if max_number_message.is_some() {
            debug!(
                id = group.id.as_str(),
                total = group.items.len(),
                limit,
                "notification limit reached"
            );
        }

        Self {
            id: group.id.clone(),
            title: group.title.clone(),
            visible: group.visible,
            collapsed: group.collapsed,
            unread: group.unread,
            priority: group.priority,
            show_items_counter: group.show_items_counter,
            show_empty_group: group.show_empty_group,
            items_count: group.items.len(),
            visible_items_count: group.visible_items_count(),
            items: group
                .items
                .iter()
                .take(limit)
                .map(|item| NotificationListItem::new(item, options))
                .collect(),
            max_number_message,
            collapse_button: Button::collapse_toggle(&group.id, group.collapsed),
            priority_icon: Icon::for_priority(
                &format!("{}-priorityIcon", group.id),
                group.priority,
            ),
            overflow_toolbar: actions_toolbar(
                &group.id,
                &group.buttons,
                group.show_buttons,
                group.show_close_button,
                options,
            ),
            close_button: close_button(&group.id, group.show_close_button, options),
            title_text: InvisibleText::new(&invisible_title_id(&group.id), &group_title_text(group)),
            is_phone: options.device.is_phone(),
        }
    }

    /// Snapshot for a single render pass.
    pub fn view(&self) -> GroupView<'_> {
        GroupView {
            id: &self.id,
            visible: self.visible,
            collapsed: self.collapsed,
            unread: self.unread,
            priority: self.priority,
            title: &self.title,
            show_items_counter: self.show_items_counter,
            show_empty_group: self.show_empty_group,
            items_count: self.items_count,
            visible_items_count: self.visible_items_count,
            items: self
                .items
                .iter()
                .map(|item| item as &dyn Renderable)
                .collect(),
            max_number_message: self.max_number_message.clone(),
            collapse_button: &self.collapse_button,
            priority_icon: self.priority_icon.as_ref().map(|icon| icon as &dyn Renderable),
            overflow_toolbar: self
                .overflow_toolbar
                .as_ref()
                .map(|toolbar| toolbar as &dyn Renderable),
            close_button: self
                .close_button
                .as_ref()
                .map(|button| button as &dyn Renderable),
            group_title_invisible_text: &self.title_text,
            is_phone: self.is_phone,
        }
    }
}

impl Renderable for NotificationListGroup {
    fn render(&self, rm: &mut RenderTarget) -> Result<(), RenderError> {
        GroupRenderer::render(rm, &self.view())
    }
}
