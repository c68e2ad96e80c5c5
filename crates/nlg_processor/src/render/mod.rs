/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Rendering of notification groups to markup.

pub mod format;
pub mod group;
pub mod html;
pub mod invisible;
pub mod plain;
pub mod target;

#[cfg(test)]
mod test_formats;

pub use format::OutputFormat;
pub use group::{GroupRenderer, GroupView, MaxNumberMessage};
pub use html::Html;
pub use invisible::render_invisible;
pub use plain::PlainText;
pub use target::{AccessibilityState, RenderTarget};

use crate::error::RenderError;
use std::fmt;

/// Anything that knows how to write itself into a [`RenderTarget`].
///
/// Sub-controls, child items and whole groups all implement this; a parent
/// only ever sees the trait, never the concrete control.
pub trait Renderable: fmt::Debug + Send + Sync {
    fn render(&self, rm: &mut RenderTarget) -> Result<(), RenderError>;
}

/// Render a control to HTML.
pub fn render_to_string(control: &dyn Renderable) -> Result<String, RenderError> {
    render_with_format(control, Html)
}

/// Render a control using a specific output format.
pub fn render_with_format<F: OutputFormat + 'static>(
    control: &dyn Renderable,
    format: F,
) -> Result<String, RenderError> {
    let mut rm = RenderTarget::new(format);
    rm.render_control(control)?;
    rm.finish()
}
