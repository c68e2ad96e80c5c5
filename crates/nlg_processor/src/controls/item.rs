/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! A single notification inside a group's child list.

use super::button::Button;
use super::icon::Icon;
use super::toolbar::OverflowToolbar;
use crate::error::RenderError;
use crate::render::group::{
    priority_class, CLASS_ACTIONS, CLASS_CLOSE_BUTTON, CLASS_HEADER_ITEM, CLASS_LIST_ITEM_BASE,
    CLASS_NOTIFICATION_BASE, CLASS_PRIORITY,
};
use crate::render::{render_invisible, AccessibilityState, RenderTarget, Renderable};
use nlg_core::{Action, NotificationItem, Priority, RenderOptions};

/// Overflow toolbar for a notification or group.
///
/// On phones there is no room for a separate close control, so closing
/// becomes one more toolbar action.
pub(crate) fn actions_toolbar(
    owner_id: &str,
    actions: &[Action],
    show_buttons: bool,
    show_close_button: bool,
    options: &RenderOptions,
) -> Option<OverflowToolbar> {
    let mut buttons: Vec<Button> = if show_buttons {
        actions.iter().map(Button::from).collect()
    } else {
        Vec::new()
    };
    if options.device.is_phone() && show_close_button {
        buttons.push(
            Button::new(&format!("{}-closeAction", owner_id)).with_text("Close"),
        );
    }
    if buttons.is_empty() {
        return None;
    }
    Some(OverflowToolbar::new(
        &format!("{}-overflowToolbar", owner_id),
        buttons,
    ))
}

/// Close control, present on devices other than phones.
pub(crate) fn close_button(
    owner_id: &str,
    show_close_button: bool,
    options: &RenderOptions,
) -> Option<Button> {
    (show_close_button && !options.device.is_phone()).then(|| Button::close(owner_id))
}

/// Render-ready notification with its sub-controls.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationListItem {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub datetime: Option<String>,
    pub author_name: Option<String>,
    pub priority: Priority,
    pub unread: bool,
    pub visible: bool,
    pub priority_icon: Option<Icon>,
    pub close_button: Option<Button>,
    pub overflow_toolbar: Option<OverflowToolbar>,
}

impl NotificationListItem {
    pub fn new(item: &NotificationItem, options: &RenderOptions) -> Self {
        Self {
            id: item.id.clone(),
            title: item.title.clone(),
            description: item.description.clone(),
            datetime: item.datetime.clone(),
            author_name: item.author_name.clone(),
            priority: item.priority,
            unread: item.unread,
            visible: item.visible,
            priority_icon: Icon::for_priority(&format!("{}-priorityIcon", item.id), item.priority),
            close_button: close_button(&item.id, item.show_close_button, options),
            overflow_toolbar: actions_toolbar(
                &item.id,
                &item.buttons,
                true,
                item.show_close_button,
                options,
            ),
        }
    }

    fn title_id(&self) -> String {
        format!("{}-title", self.id)
    }
}

impl Renderable for NotificationListItem {
    fn render(&self, rm: &mut RenderTarget) -> Result<(), RenderError> {
        if !self.visible {
            return render_invisible(rm, &self.id, "li");
        }

        let title_id = self.title_id();

        rm.open_start("li")?
            .control_data(&self.id)?
            .class(CLASS_LIST_ITEM_BASE)?
            .class(CLASS_NOTIFICATION_BASE)?
            .class("sapMNLI")?;
        if self.unread {
            rm.class("sapMNLIUnread")?;
        }
        rm.attr("tabindex", "0")?
            .accessibility_state(&AccessibilityState {
                role: Some("option"),
                labelledby: vec![title_id.clone()],
                ..Default::default()
            })?
            .open_end()?;

        // header
        rm.open_start("div")?.class("sapMNLIHeader")?.open_end()?;
        if let (Some(class), Some(icon)) = (priority_class(self.priority), &self.priority_icon) {
            rm.open_start("div")?
                .class(CLASS_PRIORITY)?
                .class(class)?
                .open_end()?
                .render_control(icon)?
                .close("div")?;
        }
        rm.open_start("div")?
            .attr("id", &title_id)?
            .class("sapMNLITitleText")?
            .open_end()?
            .text(&self.title)?
            .close("div")?;
        if let Some(close) = &self.close_button {
            rm.open_start("div")?
                .class(CLASS_HEADER_ITEM)?
                .class(CLASS_CLOSE_BUTTON)?
                .open_end()?
                .render_control(close)?
                .close("div")?;
        }
        rm.close("div")?;

        if let Some(description) = &self.description {
            rm.open_start("div")?
                .class("sapMNLIDescription")?
                .open_end()?
                .text(description)?
                .close("div")?;
        }

        // footer
        rm.open_start("div")?.class("sapMNLIFooter")?.open_end()?;
        if let Some(author) = &self.author_name {
            rm.open_start("span")?
                .class("sapMNLIAuthor")?
                .open_end()?
                .text(author)?
                .close("span")?;
        }
        if let Some(datetime) = &self.datetime {
            rm.open_start("span")?
                .class("sapMNLIDatetime")?
                .open_end()?
                .text(datetime)?
                .close("span")?;
        }
        if let Some(toolbar) = &self.overflow_toolbar {
            rm.open_start("div")?
                .class(CLASS_HEADER_ITEM)?
                .class(CLASS_ACTIONS)?
                .open_end()?
                .render_control(toolbar)?
                .close("div")?;
        }
        rm.close("div")?;

        rm.close("li")?;
        Ok(())
    }
}
