/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use super::button::Button;
use crate::error::RenderError;
use crate::render::{AccessibilityState, RenderTarget, Renderable};

/// A row of action buttons that collapses into an overflow menu when space
/// runs out.
#[derive(Debug, Clone, PartialEq)]
pub struct OverflowToolbar {
    pub id: String,
    pub buttons: Vec<Button>,
}

impl OverflowToolbar {
    pub fn new(id: &str, buttons: Vec<Button>) -> Self {
        Self {
            id: id.to_string(),
            buttons,
        }
    }
}

impl Renderable for OverflowToolbar {
    fn render(&self, rm: &mut RenderTarget) -> Result<(), RenderError> {
        rm.open_start("div")?
            .control_data(&self.id)?
            .class("sapMTB")?
            .class("sapMOTB")?
            .accessibility_state(&AccessibilityState {
                role: Some("toolbar"),
                ..Default::default()
            })?
            .open_end()?;
        for button in &self.buttons {
            rm.render_control(button)?;
        }
        rm.close("div")?;
        Ok(())
    }
}
