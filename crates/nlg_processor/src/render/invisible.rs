/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Placeholder markup for controls whose visibility flag is off.

use super::target::{AccessibilityState, RenderTarget};
use crate::error::RenderError;

pub const HIDDEN_PLACEHOLDER_CLASS: &str = "sapUiHiddenPlaceholder";

/// Render an empty, hidden element that keeps the control's identity in
/// the document.
pub fn render_invisible(
    rm: &mut RenderTarget,
    id: &str,
    tag: &'static str,
) -> Result<(), RenderError> {
    rm.open_start(tag)?
        .control_data(id)?
        .class(HIDDEN_PLACEHOLDER_CLASS)?
        .accessibility_state(&AccessibilityState {
            hidden: Some(true),
            ..Default::default()
        })?
        .open_end()?
        .close(tag)?;
    Ok(())
}
