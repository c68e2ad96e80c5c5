/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use crate::error::RenderError;
use crate::render::{AccessibilityState, RenderTarget, Renderable};

/// Text that is never shown but can be referenced by `aria-labelledby`.
#[derive(Debug, Clone, PartialEq)]
pub struct InvisibleText {
    pub id: String,
    pub text: String,
}

impl InvisibleText {
    pub fn new(id: &str, text: &str) -> Self {
        Self {
            id: id.to_string(),
            text: text.to_string(),
        }
    }
}

impl Renderable for InvisibleText {
    fn render(&self, rm: &mut RenderTarget) -> Result<(), RenderError> {
        rm.open_start("span")?
            .control_data(&self.id)?
            .class("sapUiInvisibleText")?
            .accessibility_state(&AccessibilityState {
                hidden: Some(true),
                ..Default::default()
            })?
            .open_end()?
            .text(&self.text)?
            .close("span")?;
        Ok(())
    }
}
