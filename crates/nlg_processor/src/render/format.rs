/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Output format trait for pluggable renderers.

use std::fmt;

/// Trait for defining how markup operations are serialized.
///
/// The [`RenderTarget`](super::target::RenderTarget) tracks nesting and
/// collects attributes; an implementation of this trait decides what the
/// resulting bytes look like. Implementations must be stateless so a target
/// can be rendered into from any thread.
pub trait OutputFormat: fmt::Debug + Send + Sync {
    /// Write escaped text content.
    ///
    /// The implementation should handle any necessary character escaping
    /// required by the target format.
    fn text(&self, out: &mut String, s: &str);

    /// Write pre-composed markup without escaping.
    fn raw(&self, out: &mut String, s: &str);

    /// Write a start tag with its attributes, in order.
    fn start_tag(&self, out: &mut String, tag: &str, attrs: &[(String, String)]);

    /// Write the end tag matching a previous start tag.
    fn end_tag(&self, out: &mut String, tag: &str);

    /// Convert the buffer into the final result string.
    ///
    /// This is called exactly once, when the target is finished.
    fn finish(&self, output: String) -> String {
        output
    }
}
