/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use crate::error::RenderError;
use crate::render::{AccessibilityState, RenderTarget, Renderable};
use nlg_core::Priority;

/// An icon font glyph referenced by URI (`sap-icon://name`).
#[derive(Debug, Clone, PartialEq)]
pub struct Icon {
    pub id: String,
    pub src: String,
    /// Accessible name; decorative icons leave this empty.
    pub alt: Option<String>,
}

impl Icon {
    pub fn new(id: &str, src: &str) -> Self {
        Self {
            id: id.to_string(),
            src: src.to_string(),
            alt: None,
        }
    }

    /// The icon shown next to a group or item of the given priority.
    pub fn for_priority(id: &str, priority: Priority) -> Option<Self> {
        let src = match priority {
            Priority::High => "sap-icon://message-error",
            Priority::Medium => "sap-icon://message-warning",
            Priority::Low => "sap-icon://message-success",
            Priority::None => return None,
        };
        Some(Self {
            alt: Some(format!("{} priority", priority)),
            ..Self::new(id, src)
        })
    }
}

impl Renderable for Icon {
    fn render(&self, rm: &mut RenderTarget) -> Result<(), RenderError> {
        rm.open_start("span")?
            .control_data(&self.id)?
            .class("sapUiIcon")?
            .attr("data-icon", &self.src)?;
        match &self.alt {
            Some(alt) => {
                rm.attr("role", "img")?.attr("aria-label", alt)?;
            }
            None => {
                rm.accessibility_state(&AccessibilityState {
                    role: Some("presentation"),
                    hidden: Some(true),
                    ..Default::default()
                })?;
            }
        }
        rm.open_end()?.close("span")?;
        Ok(())
    }
}
