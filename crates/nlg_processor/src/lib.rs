/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Notification Group Processor
//!
//! This crate renders collapsible notification groups to markup: a header
//! with collapse toggle, priority indicator, title, item counter, actions
//! and close control, followed by the list of child notifications and an
//! optional "maximum reached" footer.
//!
//! Rendering is a pure projection of a [`GroupView`] snapshot into a
//! [`RenderTarget`]; sub-controls are reached only through the
//! [`Renderable`] trait, and output formats are pluggable.
//!
//! # Example
//!
//! ```rust
//! use nlg_processor::{NotificationGroup, NotificationItem, Processor, RenderOptions};
//!
//! let group = NotificationGroup {
//!     items: vec![NotificationItem::new("n1", "Build failed")],
//!     ..NotificationGroup::new("builds", "CI <main>")
//! };
//!
//! let processor = Processor::new(RenderOptions::default());
//! let html = processor.render_group(&group).unwrap();
//! assert!(html.starts_with(r#"<li id="builds""#));
//! assert!(html.contains("CI &lt;main&gt;"));
//! assert!(html.contains(r#"<div class="sapMNLGroupCount">(1)</div>"#));
//! ```

pub mod controls;
pub mod error;
pub mod io;
pub mod processor;
pub mod render;

pub use error::{ProcessorError, RenderError};
pub use processor::Processor;
pub use render::{
    render_to_string, render_with_format, GroupRenderer, GroupView, MaxNumberMessage,
    OutputFormat, RenderTarget, Renderable,
};

// Re-export the model for convenience
pub use nlg_core::{
    Action, DeviceClass, InputDocument, NotificationGroup, NotificationItem, Priority,
    RenderOptions,
};
