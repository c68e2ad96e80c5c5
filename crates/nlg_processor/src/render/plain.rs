/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Plain text output format.

use super::format::OutputFormat;

/// Keeps text content only. Block elements become line breaks.
///
/// Assistive text is text content too, so it shows up here.
#[derive(Debug, Default, Clone)]
pub struct PlainText;

const BLOCK_TAGS: &[&str] = &["div", "li", "ul", "ol", "p"];

fn break_line(out: &mut String) {
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
}

impl OutputFormat for PlainText {
    fn text(&self, out: &mut String, s: &str) {
        out.push_str(s);
    }

    fn raw(&self, out: &mut String, s: &str) {
        // Pre-composed markup: keep what is outside of tags.
        let mut in_tag = false;
        for c in s.chars() {
            match c {
                '<' => in_tag = true,
                '>' if in_tag => in_tag = false,
                _ if !in_tag => out.push(c),
                _ => {}
            }
        }
    }

    fn start_tag(&self, out: &mut String, tag: &str, _attrs: &[(String, String)]) {
        if BLOCK_TAGS.contains(&tag) {
            break_line(out);
        }
    }

    fn end_tag(&self, out: &mut String, tag: &str) {
        if BLOCK_TAGS.contains(&tag) {
            break_line(out);
        }
    }

    fn finish(&self, output: String) -> String {
        output.trim_end().to_string()
    }
}
