/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use crate::controls::{Button, InvisibleText};
use crate::render::html::Html;
use crate::render::plain::PlainText;
use crate::render::{render_with_format, OutputFormat, RenderTarget};

#[test]
fn test_html_escapes_text() {
    let mut out = String::new();
    Html.text(&mut out, r#"<a href="x">Tom & 'Jerry'</a>"#);
    assert_eq!(
        out,
        "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
    );

    let mut out = String::new();
    Html.text(&mut out, "plain");
    assert_eq!(out, "plain");
}

#[test]
fn test_html_button() {
    let button = Button::new("b").with_text("Go");
    assert_eq!(
        render_with_format(&button, Html).unwrap(),
        r#"<button id="b" data-sap-ui="b" class="sapMBtn sapMBtnTransparent" type="button"><span class="sapMBtnContent">Go</span></button>"#
    );
}

#[test]
fn test_plain_button() {
    let button = Button::new("b").with_text("Go");
    assert_eq!(render_with_format(&button, PlainText).unwrap(), "Go");
}

#[test]
fn test_plain_text_is_not_escaped() {
    let text = InvisibleText::new("t", "a < b & c");
    assert_eq!(render_with_format(&text, PlainText).unwrap(), "a < b & c");
}

#[test]
fn test_plain_blocks_become_lines() {
    let mut rm = RenderTarget::plain();
    rm.open_start("div").unwrap().open_end().unwrap();
    rm.open_start("div")
        .unwrap()
        .open_end()
        .unwrap()
        .text("one")
        .unwrap()
        .close("div")
        .unwrap();
    rm.open_start("div")
        .unwrap()
        .open_end()
        .unwrap()
        .text("two")
        .unwrap()
        .close("div")
        .unwrap();
    rm.close("div").unwrap();
    assert_eq!(rm.finish().unwrap(), "one\ntwo");
}

#[test]
fn test_plain_strips_tags_from_trusted_markup() {
    let mut rm = RenderTarget::plain();
    rm.unsafe_html("<b>12</b> more").unwrap();
    assert_eq!(rm.finish().unwrap(), "12 more");
}

#[test]
fn test_plain_still_checks_nesting() {
    let mut rm = RenderTarget::plain();
    rm.open_start("li").unwrap().open_end().unwrap();
    assert!(rm.close("div").is_err());
}
