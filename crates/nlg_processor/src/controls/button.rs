/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use super::icon::Icon;
use crate::error::RenderError;
use crate::render::{AccessibilityState, RenderTarget, Renderable};
use nlg_core::Action;

/// A transparent push button with an optional icon and text.
#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    pub id: String,
    pub text: Option<String>,
    pub icon: Option<Icon>,
    pub tooltip: Option<String>,
    /// Written as `aria-expanded` when set (collapse toggles).
    pub expanded: Option<bool>,
}

impl Button {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            text: None,
            icon: None,
            tooltip: None,
            expanded: None,
        }
    }

    pub fn with_icon(mut self, src: &str) -> Self {
        self.icon = Some(Icon::new(&format!("{}-img", self.id), src));
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }

    pub fn with_tooltip(mut self, tooltip: &str) -> Self {
        self.tooltip = Some(tooltip.to_string());
        self
    }

    /// The expand/collapse toggle of a group header.
    pub fn collapse_toggle(group_id: &str, collapsed: bool) -> Self {
        let (icon, tooltip) = if collapsed {
            ("sap-icon://slim-arrow-right", "Expand Group")
        } else {
            ("sap-icon://slim-arrow-down", "Collapse Group")
        };
        Self {
            expanded: Some(!collapsed),
            ..Self::new(&format!("{}-collapseButton", group_id))
                .with_icon(icon)
                .with_tooltip(tooltip)
        }
    }

    /// The close control of a group or item.
    pub fn close(owner_id: &str) -> Self {
        Self::new(&format!("{}-closeButton", owner_id))
            .with_icon("sap-icon://decline")
            .with_tooltip("Close")
    }
}

impl From<&Action> for Button {
    fn from(action: &Action) -> Self {
        let button = Self::new(&action.id).with_text(&action.text);
        match &action.icon {
            Some(icon) => button.with_icon(icon),
            None => button,
        }
    }
}

impl Renderable for Button {
    fn render(&self, rm: &mut RenderTarget) -> Result<(), RenderError> {
        rm.open_start("button")?
            .control_data(&self.id)?
            .class("sapMBtn")?
            .class("sapMBtnTransparent")?
            .attr("type", "button")?;
        if let Some(tooltip) = &self.tooltip {
            rm.attr("title", tooltip)?;
        }
        rm.accessibility_state(&AccessibilityState {
            expanded: self.expanded,
            ..Default::default()
        })?
        .open_end()?;

        if let Some(icon) = &self.icon {
            rm.render_control(icon)?;
        }
        if let Some(text) = &self.text {
            rm.open_start("span")?
                .class("sapMBtnContent")?
                .open_end()?
                .text(text)?
                .close("span")?;
        }
        rm.close("button")?;
        Ok(())
    }
}
