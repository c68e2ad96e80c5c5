/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! The append-only output sink every control renders into.
//!
//! Markup is built with structured operations instead of string
//! concatenation:
//!
//! ```text
//! open_start("div") -> attr / class / style ... -> open_end()
//!     text / unsafe_html / render_control ...
//! close("div")
//! ```
//!
//! Open elements are tracked on a stack, so a mismatched `close` or an
//! element left open is reported as a [`RenderError`] instead of silently
//! producing malformed output.

use super::format::OutputFormat;
use super::html::Html;
use super::plain::PlainText;
use super::Renderable;
use crate::error::RenderError;

/// Accessibility attributes of an element.
///
/// `role` is written as a plain attribute, everything else as `aria-*`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AccessibilityState {
    pub role: Option<&'static str>,
    pub expanded: Option<bool>,
    /// Ids of the labelling elements, written space-separated in order.
    pub labelledby: Vec<String>,
    pub hidden: Option<bool>,
}

/// A start tag whose attributes are still being collected.
#[derive(Debug)]
struct PendingTag {
    tag: &'static str,
    attrs: Vec<(String, String)>,
    classes: Vec<String>,
    styles: Vec<(String, String)>,
    // Position of the class/style attribute, fixed by the first call.
    class_slot: Option<usize>,
    style_slot: Option<usize>,
}

impl PendingTag {
    fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            classes: Vec::new(),
            styles: Vec::new(),
            class_slot: None,
            style_slot: None,
        }
    }

    fn into_attrs(mut self) -> (&'static str, Vec<(String, String)>) {
        if let Some(slot) = self.class_slot {
            self.attrs[slot].1 = self.classes.join(" ");
        }
        if let Some(slot) = self.style_slot {
            self.attrs[slot].1 = self
                .styles
                .iter()
                .map(|(property, value)| format!("{}:{}", property, value))
                .collect::<Vec<_>>()
                .join(";");
        }
        (self.tag, self.attrs)
    }
}

/// Output sink threaded explicitly through every render call.
#[derive(Debug)]
pub struct RenderTarget {
    format: Box<dyn OutputFormat>,
    buffer: String,
    open: Vec<&'static str>,
    pending: Option<PendingTag>,
}

impl Default for RenderTarget {
    fn default() -> Self {
        Self::html()
    }
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':' | '.'))
}

impl RenderTarget {
    pub fn new(format: impl OutputFormat + 'static) -> Self {
        Self {
            format: Box::new(format),
            buffer: String::new(),
            open: Vec::new(),
            pending: None,
        }
    }

    pub fn html() -> Self {
        Self::new(Html)
    }

    pub fn plain() -> Self {
        Self::new(PlainText)
    }

    /// Number of currently open elements.
    pub fn depth(&self) -> usize {
        self.open.len()
    }

    fn ensure_no_pending(&self) -> Result<(), RenderError> {
        match &self.pending {
            Some(pending) => Err(RenderError::PendingStartTag(pending.tag)),
            None => Ok(()),
        }
    }

    fn pending_mut(&mut self, what: &str) -> Result<&mut PendingTag, RenderError> {
        self.pending
            .as_mut()
            .ok_or_else(|| RenderError::NoStartTag(what.to_string()))
    }

    /// Begin a start tag. Attributes and classes may follow until `open_end`.
    pub fn open_start(&mut self, tag: &'static str) -> Result<&mut Self, RenderError> {
        self.ensure_no_pending()?;
        self.pending = Some(PendingTag::new(tag));
        Ok(self)
    }

    pub fn attr(&mut self, name: &str, value: &str) -> Result<&mut Self, RenderError> {
        if !is_valid_name(name) || name == "class" || name == "style" {
            return Err(RenderError::InvalidAttributeName(name.to_string()));
        }
        self.pending_mut(name)?
            .attrs
            .push((name.to_string(), value.to_string()));
        Ok(self)
    }

    /// Write the control identity: `id` plus the `data-sap-ui` marker.
    pub fn control_data(&mut self, id: &str) -> Result<&mut Self, RenderError> {
        self.attr("id", id)?.attr("data-sap-ui", id)
    }

    /// Append a class token. Tokens are kept in call order, without deduplication.
    pub fn class(&mut self, class: &str) -> Result<&mut Self, RenderError> {
        if class.is_empty() {
            self.pending_mut("class")?;
            return Ok(self);
        }
        let pending = self.pending_mut("class")?;
        if pending.class_slot.is_none() {
            pending.class_slot = Some(pending.attrs.len());
            pending.attrs.push(("class".to_string(), String::new()));
        }
        pending.classes.push(class.to_string());
        Ok(self)
    }

    pub fn style(&mut self, property: &str, value: &str) -> Result<&mut Self, RenderError> {
        let pending = self.pending_mut("style")?;
        if pending.style_slot.is_none() {
            pending.style_slot = Some(pending.attrs.len());
            pending.attrs.push(("style".to_string(), String::new()));
        }
        pending
            .styles
            .push((property.to_string(), value.to_string()));
        Ok(self)
    }

    pub fn accessibility_state(
        &mut self,
        state: &AccessibilityState,
    ) -> Result<&mut Self, RenderError> {
        if let Some(role) = state.role {
            self.attr("role", role)?;
        }
        if let Some(expanded) = state.expanded {
            self.attr("aria-expanded", if expanded { "true" } else { "false" })?;
        }
        if !state.labelledby.is_empty() {
            self.attr("aria-labelledby", &state.labelledby.join(" "))?;
        }
        if let Some(hidden) = state.hidden {
            self.attr("aria-hidden", if hidden { "true" } else { "false" })?;
        }
        Ok(self)
    }

    /// Flush collected classes and attributes and finish the start tag.
    pub fn open_end(&mut self) -> Result<&mut Self, RenderError> {
        let pending = self
            .pending
            .take()
            .ok_or_else(|| RenderError::NoStartTag(">".to_string()))?;
        let (tag, attrs) = pending.into_attrs();
        self.format.start_tag(&mut self.buffer, tag, &attrs);
        self.open.push(tag);
        Ok(self)
    }

    /// Close the innermost open element, which must be `tag`.
    pub fn close(&mut self, tag: &str) -> Result<&mut Self, RenderError> {
        self.ensure_no_pending()?;
        match self.open.last().copied() {
            Some(expected) if expected == tag => {
                self.open.pop();
                self.format.end_tag(&mut self.buffer, tag);
                Ok(self)
            }
            Some(expected) => Err(RenderError::MismatchedClose {
                expected,
                found: tag.to_string(),
            }),
            None => Err(RenderError::UnbalancedClose(tag.to_string())),
        }
    }

    /// Write escaped text content.
    pub fn text(&mut self, s: &str) -> Result<&mut Self, RenderError> {
        self.ensure_no_pending()?;
        self.format.text(&mut self.buffer, s);
        Ok(self)
    }

    /// Write trusted, pre-composed markup verbatim.
    pub fn unsafe_html(&mut self, s: &str) -> Result<&mut Self, RenderError> {
        self.ensure_no_pending()?;
        self.format.raw(&mut self.buffer, s);
        Ok(self)
    }

    /// Let another control render itself into this target.
    pub fn render_control(&mut self, control: &dyn Renderable) -> Result<&mut Self, RenderError> {
        self.ensure_no_pending()?;
        control.render(self)?;
        Ok(self)
    }

    /// Consume the target and return the output.
    pub fn finish(self) -> Result<String, RenderError> {
        self.ensure_no_pending()?;
        if !self.open.is_empty() {
            return Err(RenderError::Unclosed(self.open));
        }
        Ok(self.format.finish(self.buffer))
    }
}
