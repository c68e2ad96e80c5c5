/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Renderer for a collapsible notification group.
//!
//! ## Output structure
//!
//! ```text
//! <li role="option">                      root, identity + state classes
//!   <div header>
//!     collapse button | priority | title | counter | spacer | actions | close
//!     hidden title text
//!   </div>
//!   <ul role="listbox">
//!     items...
//!     max-reached footer
//!   </ul>
//! </li>
//! ```
//!
//! Branches are skipped, never reordered. The renderer reads the view and
//! nothing else, so the same view always yields the same output.


use super::invisible::render_invisible;
use super::target::{AccessibilityState, RenderTarget};
use super::Renderable;
use crate::error::RenderError;
use nlg_core::Priority;
use tracing::{debug, trace};

/// Tag of the root element, also used for the invisible placeholder.
pub const TAG_NAME: &str = "li";

pub(crate) const CLASS_LIST_ITEM_BASE: &str = "sapMLIB";
pub(crate) const CLASS_NOTIFICATION_BASE: &str = "sapMNLIB";
const CLASS_GROUP: &str = "sapMNLGroup";
const CLASS_COLLAPSED: &str = "sapMNLGroupCollapsed";
const CLASS_UNREAD: &str = "sapMNLGroupUnread";
const CLASS_HEADER: &str = "sapMNLGroupHeader";
pub(crate) const CLASS_HEADER_ITEM: &str = "sapMNLIItem";
const CLASS_COLLAPSE_BUTTON: &str = "sapMNLGroupCollapseButton";
pub(crate) const CLASS_PRIORITY: &str = "sapMNLIBPriority";
const CLASS_TITLE: &str = "sapMNLGroupTitle";
const CLASS_COUNT: &str = "sapMNLGroupCount";
const CLASS_SPACER: &str = "sapMNLGroupHeaderSpacer";
pub(crate) const CLASS_ACTIONS: &str = "sapMNLIActions";
pub(crate) const CLASS_CLOSE_BUTTON: &str = "sapMNLICloseBtn";
const CLASS_CHILDREN: &str = "sapMNLGroupChildren";
const CLASS_MAX_NOTIFICATIONS: &str = "sapMNLGroupMaxNotifications";
const CLASS_MAX_TITLE: &str = "sapMNLGroupMNTitle";
const CLASS_MAX_DESCRIPTION: &str = "sapMNLGroupMNDescription";

/// Message shown once a group holds more notifications than it displays.
///
/// Both strings are pre-composed by the caller and written verbatim.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MaxNumberMessage {
    pub title: String,
    pub description: String,
}

/// Read-only snapshot of a group, built right before a render pass.
#[derive(Debug)]
pub struct GroupView<'a> {
    /// Unique id; sub-element ids are derived from it.
    pub id: &'a str,
    pub visible: bool,
    pub collapsed: bool,
    pub unread: bool,
    pub priority: Priority,
    /// Untrusted; always escaped on output.
    pub title: &'a str,
    pub show_items_counter: bool,
    pub show_empty_group: bool,
    /// Items the group owns, including those cut off by the limit.
    pub items_count: usize,
    pub visible_items_count: usize,
    /// Child items in render order.
    pub items: Vec<&'a dyn Renderable>,
    /// `Some` when the maximum number of notifications is reached.
    pub max_number_message: Option<MaxNumberMessage>,
    pub collapse_button: &'a dyn Renderable,
    /// Required whenever `priority` is not `None`.
    pub priority_icon: Option<&'a dyn Renderable>,
    /// Present only when the overflow toolbar should render.
    pub overflow_toolbar: Option<&'a dyn Renderable>,
    /// Present only when the close button should render.
    pub close_button: Option<&'a dyn Renderable>,
    pub group_title_invisible_text: &'a dyn Renderable,
    pub is_phone: bool,
}

impl GroupView<'_> {
    pub fn should_render_overflow_toolbar(&self) -> bool {
        self.overflow_toolbar.is_some()
    }

    pub fn should_render_close_button(&self) -> bool {
        self.close_button.is_some()
    }

    pub fn max_number_reached(&self) -> bool {
        self.max_number_message.is_some()
    }

    pub fn title_id(&self) -> String {
        title_id(self.id)
    }

    pub fn invisible_title_id(&self) -> String {
        invisible_title_id(self.id)
    }

    /// The actions wrapper is always written; this decides whether it shows.
    pub fn actions_visible(&self) -> bool {
        self.should_render_overflow_toolbar() && (!self.collapsed || self.is_phone)
    }
}

impl Renderable for GroupView<'_> {
    fn render(&self, rm: &mut RenderTarget) -> Result<(), RenderError> {
        GroupRenderer::render(rm, self)
    }
}

/// Id of the title element of group `group_id`.
pub fn title_id(group_id: &str) -> String {
    format!("{}-groupTitle", group_id)
}

/// Id of the hidden text that describes group `group_id`.
pub fn invisible_title_id(group_id: &str) -> String {
    format!("{}-invisibleGroupTitleText", group_id)
}

pub(crate) fn priority_class(priority: Priority) -> Option<&'static str> {
    match priority {
        Priority::High => Some("sapMNLIBPriorityHigh"),
        Priority::Medium => Some("sapMNLIBPriorityMedium"),
        Priority::Low => Some("sapMNLIBPriorityLow"),
        Priority::None => None,
    }
}

/// Stateless renderer for [`GroupView`]s.
#[derive(Debug, Default, Clone, Copy)]
pub struct GroupRenderer;

impl GroupRenderer {
    /// Write one group into `rm`.
    ///
    /// An invisible group becomes a placeholder; an empty group renders
    /// nothing unless `show_empty_group` is set.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::MissingControl`] when a priority is set but no
    /// priority icon was supplied, and propagates errors from sub-controls.
    pub fn render(rm: &mut RenderTarget, view: &GroupView<'_>) -> Result<(), RenderError> {
        if !view.visible {
            debug!(id = view.id, "group hidden, writing placeholder");
            return render_invisible(rm, view.id, TAG_NAME);
        }

        if view.items_count == 0 && !view.show_empty_group {
            debug!(id = view.id, "group empty, nothing to render");
            return Ok(());
        }

        debug!(
            id = view.id,
            items = view.items.len(),
            collapsed = view.collapsed,
            "rendering group"
        );

        let title_id = view.title_id();

        rm.open_start(TAG_NAME)?
            .control_data(view.id)?
            .class(CLASS_LIST_ITEM_BASE)?
            .class(CLASS_NOTIFICATION_BASE)?
            .class(CLASS_GROUP)?;
        if view.collapsed {
            rm.class(CLASS_COLLAPSED)?;
        }
        if view.unread {
            rm.class(CLASS_UNREAD)?;
        }
        rm.attr("tabindex", "0")?
            .accessibility_state(&AccessibilityState {
                role: Some("option"),
                expanded: Some(!view.collapsed),
                labelledby: vec![title_id.clone(), view.invisible_title_id()],
                ..Default::default()
            })?
            .open_end()?;

        Self::render_header(rm, view, &title_id)?;

        rm.open_start("ul")?
            .attr("role", "listbox")?
            .class(CLASS_CHILDREN)?
            .open_end()?;

        for item in &view.items {
            rm.render_control(*item)?;
        }

        if let Some(message) = &view.max_number_message {
            Self::render_max_number_footer(rm, message)?;
        }

        rm.close("ul")?.close(TAG_NAME)?;
        Ok(())
    }

    fn render_header(
        rm: &mut RenderTarget,
        view: &GroupView<'_>,
        title_id: &str,
    ) -> Result<(), RenderError> {
        rm.open_start("div")?.class(CLASS_HEADER)?.open_end()?;

        rm.open_start("div")?
            .class(CLASS_HEADER_ITEM)?
            .class(CLASS_COLLAPSE_BUTTON)?
            .open_end()?
            .render_control(view.collapse_button)?
            .close("div")?;

        if let Some(class) = priority_class(view.priority) {
            let icon = view
                .priority_icon
                .ok_or(RenderError::MissingControl("priority icon"))?;
            rm.open_start("div")?
                .class(CLASS_PRIORITY)?
                .class(class)?
                .open_end()?
                .render_control(icon)?
                .close("div")?;
        }

        rm.open_start("div")?
            .attr("id", title_id)?
            .class(CLASS_HEADER_ITEM)?
            .class(CLASS_TITLE)?
            .open_end()?
            .text(view.title)?
            .close("div")?;

        if view.show_items_counter {
            rm.open_start("div")?
                .class(CLASS_COUNT)?
                .open_end()?
                .unsafe_html(&format!("({})", view.visible_items_count))?
                .close("div")?;
        }

        rm.open_start("div")?
            .class(CLASS_SPACER)?
            .open_end()?
            .close("div")?;

        rm.open_start("div")?
            .class(CLASS_HEADER_ITEM)?
            .class(CLASS_ACTIONS)?;
        if !view.actions_visible() {
            rm.style("display", "none")?;
        }
        rm.open_end()?;
        if let Some(toolbar) = view.overflow_toolbar {
            rm.render_control(toolbar)?;
        } else {
            trace!(id = view.id, "no overflow toolbar");
        }
        rm.close("div")?;

        if let Some(close_button) = view.close_button {
            rm.open_start("div")?
                .class(CLASS_HEADER_ITEM)?
                .class(CLASS_CLOSE_BUTTON)?
                .open_end()?
                .render_control(close_button)?
                .close("div")?;
        }

        rm.render_control(view.group_title_invisible_text)?;

        rm.close("div")?;
        Ok(())
    }

    fn render_max_number_footer(
        rm: &mut RenderTarget,
        message: &MaxNumberMessage,
    ) -> Result<(), RenderError> {
        rm.open_start("div")?
            .class(CLASS_MAX_NOTIFICATIONS)?
            .open_end()?;
        rm.open_start("div")?
            .class(CLASS_MAX_TITLE)?
            .open_end()?
            .unsafe_html(&message.title)?
            .close("div")?;
        rm.open_start("div")?
            .class(CLASS_MAX_DESCRIPTION)?
            .open_end()?
            .unsafe_html(&message.description)?
            .close("div")?;
        rm.close("div")?;
        Ok(())
    }
}
