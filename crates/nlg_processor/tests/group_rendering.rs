/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

mod common;
use common::*;

use nlg_processor::controls::NotificationListGroup;
use nlg_processor::render::PlainText;
use nlg_processor::{
    render_to_string, DeviceClass, NotificationGroup, Priority, Processor, RenderOptions,
};

fn render(group: &NotificationGroup) -> String {
    Processor::default().render_group(group).unwrap()
}

fn render_on(group: &NotificationGroup, device: DeviceClass) -> String {
    Processor::new(RenderOptions::for_device(device))
        .render_group(group)
        .unwrap()
}

#[test]
fn test_full_group_markup() {
    let html = render(&make_full_group());
    let expected = concat!(
        r#"<li id="full" data-sap-ui="full" class="sapMLIB sapMNLIB sapMNLGroup sapMNLGroupUnread" tabindex="0" role="option" aria-expanded="true" aria-labelledby="full-groupTitle full-invisibleGroupTitleText">"#,
        r#"<div class="sapMNLGroupHeader">"#,
        r#"<div class="sapMNLIItem sapMNLGroupCollapseButton">"#,
        r#"<button id="full-collapseButton" data-sap-ui="full-collapseButton" class="sapMBtn sapMBtnTransparent" type="button" title="Collapse Group" aria-expanded="true">"#,
        r#"<span id="full-collapseButton-img" data-sap-ui="full-collapseButton-img" class="sapUiIcon" data-icon="sap-icon://slim-arrow-down" role="presentation" aria-hidden="true"></span>"#,
        r#"</button></div>"#,
        r#"<div class="sapMNLIBPriority sapMNLIBPriorityHigh">"#,
        r#"<span id="full-priorityIcon" data-sap-ui="full-priorityIcon" class="sapUiIcon" data-icon="sap-icon://message-error" role="img" aria-label="High priority"></span>"#,
        r#"</div>"#,
        r#"<div id="full-groupTitle" class="sapMNLIItem sapMNLGroupTitle">Approvals</div>"#,
        r#"<div class="sapMNLGroupCount">(2)</div>"#,
        r#"<div class="sapMNLGroupHeaderSpacer"></div>"#,
        r#"<div class="sapMNLIItem sapMNLIActions">"#,
        r#"<div id="full-overflowToolbar" data-sap-ui="full-overflowToolbar" class="sapMTB sapMOTB" role="toolbar">"#,
        r#"<button id="accept-all" data-sap-ui="accept-all" class="sapMBtn sapMBtnTransparent" type="button"><span class="sapMBtnContent">Accept All</span></button>"#,
        r#"</div></div>"#,
        r#"<div class="sapMNLIItem sapMNLICloseBtn">"#,
        r#"<button id="full-closeButton" data-sap-ui="full-closeButton" class="sapMBtn sapMBtnTransparent" type="button" title="Close">"#,
        r#"<span id="full-closeButton-img" data-sap-ui="full-closeButton-img" class="sapUiIcon" data-icon="sap-icon://decline" role="presentation" aria-hidden="true"></span>"#,
        r#"</button></div>"#,
        r#"<span id="full-invisibleGroupTitleText" data-sap-ui="full-invisibleGroupTitleText" class="sapUiInvisibleText" aria-hidden="true">Notification group. Unread. High priority. 2 notifications</span>"#,
        r#"</div>"#,
        r#"<ul role="listbox" class="sapMNLGroupChildren">"#,
    );
    assert!(html.starts_with(expected), "{}", html);
    assert!(html.ends_with("</ul></li>"));
}

#[test]
fn test_invisible_group_ignores_everything_else() {
    let group = NotificationGroup {
        visible: false,
        ..make_full_group()
    };
    assert_eq!(
        render(&group),
        r#"<li id="full" data-sap-ui="full" class="sapUiHiddenPlaceholder" aria-hidden="true"></li>"#
    );
}

#[test]
fn test_empty_group_suppression_and_forcing() {
    let empty = make_group("e", "Empty", &[]);
    assert_eq!(render(&empty), "");

    let forced = NotificationGroup {
        show_empty_group: true,
        ..empty
    };
    let html = render(&forced);
    assert!(html.contains(r#"<div class="sapMNLGroupCount">(0)</div>"#));
    assert!(html.contains(r#"<ul role="listbox" class="sapMNLGroupChildren"></ul>"#));
}

#[test]
fn test_hidden_items_still_count_as_items() {
    let mut group = make_group("g", "Mixed", &["A", "B"]);
    group.items[1].visible = false;
    let html = render(&group);
    assert!(html.contains("(1)"));
    assert!(html.contains(r#"<li id="g-n2" data-sap-ui="g-n2" class="sapUiHiddenPlaceholder""#));
}

#[test]
fn test_priority_block() {
    for (priority, class) in [
        (Priority::High, "sapMNLIBPriorityHigh"),
        (Priority::Medium, "sapMNLIBPriorityMedium"),
        (Priority::Low, "sapMNLIBPriorityLow"),
    ] {
        let group = NotificationGroup {
            priority,
            ..make_group("g", "P", &["A"])
        };
        let html = render(&group);
        assert_eq!(html.matches("sapMNLIBPriority ").count(), 1);
        assert!(html.contains(class));
    }
    assert!(!render(&make_group("g", "P", &["A"])).contains("sapMNLIBPriority"));
}

#[test]
fn test_title_escaping() {
    let html = render(&make_group("g", "<b>bold</b>", &["A"]));
    assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"));
    assert!(!html.contains("<b>bold"));
}

#[test]
fn test_items_counter_toggle() {
    let mut group = make_group("g", "C", &["A", "B", "C"]);
    assert!(render(&group).contains("(3)"));
    group.show_items_counter = false;
    assert!(!render(&group).contains("sapMNLGroupCount"));
}

#[test]
fn test_items_render_in_order() {
    let html = render(&make_group("g", "O", &["Alpha", "Beta", "Gamma"]));
    let a = html.find("Alpha").unwrap();
    let b = html.find("Beta").unwrap();
    let c = html.find("Gamma").unwrap();
    assert!(a < b && b < c);
}

#[test]
fn test_max_number_footer() {
    let group = make_group("g", "Many", &["A", "B", "C", "D"]);
    let processor = Processor::new(RenderOptions {
        max_notifications: Some(3),
        ..Default::default()
    });
    let html = processor.render_group(&group).unwrap();
    assert!(html.contains(concat!(
        r#"<div class="sapMNLGroupMaxNotifications">"#,
        r#"<div class="sapMNLGroupMNTitle">1 More Notifications</div>"#,
        r#"<div class="sapMNLGroupMNDescription">To see them, dismiss some of the notifications that are displayed.</div>"#,
        r#"</div></ul></li>"#
    )));
    assert!(!html.contains(r#"id="g-n4""#));

    assert!(!render(&group).contains("sapMNLGroupMaxNotifications"));
}

#[test]
fn test_zero_limit_keeps_group_with_footer() {
    let group = make_group("g", "Muted", &["A", "B"]);
    let processor = Processor::new(RenderOptions {
        max_notifications: Some(0),
        ..Default::default()
    });
    let html = processor.render_group(&group).unwrap();
    assert!(html.starts_with(r#"<li id="g""#), "{}", html);
    assert!(html.contains(r#"<div class="sapMNLGroupCount">(2)</div>"#));
    assert!(html.contains(r#"<div class="sapMNLGroupMNTitle">2 More Notifications</div>"#));
    assert!(!html.contains(r#"id="g-n1""#));
}

#[test]
fn test_collapsed_actions_hidden_except_on_phone() {
    let group = NotificationGroup {
        collapsed: true,
        ..make_full_group()
    };
    let hidden = r#"<div class="sapMNLIItem sapMNLIActions" style="display:none"><div id="full-overflowToolbar""#;
    let shown = r#"<div class="sapMNLIItem sapMNLIActions"><div id="full-overflowToolbar""#;

    let desktop = render_on(&group, DeviceClass::Desktop);
    assert!(desktop.contains(hidden));
    assert!(desktop.contains(r#"aria-expanded="false""#));
    assert!(desktop.contains("sapMNLGroupCollapsed"));

    let phone = render_on(&group, DeviceClass::Phone);
    assert!(phone.contains(shown));
    assert!(!phone.contains("sapMNLICloseBtn"));
    assert!(phone.contains(r#"id="full-closeAction""#));
}

#[test]
fn test_actions_wrapper_present_without_toolbar() {
    let group = NotificationGroup {
        show_buttons: false,
        ..make_full_group()
    };
    assert!(render(&group)
        .contains(r#"<div class="sapMNLIItem sapMNLIActions" style="display:none"></div>"#));
}

#[test]
fn test_render_is_idempotent() {
    let group = make_full_group();
    let control = NotificationListGroup::new(&group, &RenderOptions::default());
    let first = render_to_string(&control).unwrap();
    let second = render_to_string(&control).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_output_is_well_nested() {
    let mut group = make_full_group();
    group.items[0].description = Some("Details".to_string());
    group.items[0].buttons = group.buttons.clone();
    let html = render(&group);
    for tag in ["li", "div", "ul", "span", "button"] {
        let (opened, closed) = count_tags(&html, tag);
        assert_eq!(opened, closed, "<{}> in {}", tag, html);
    }
}

#[test]
fn test_concurrent_renders_match() {
    let groups: Vec<NotificationGroup> = (0..8)
        .map(|i| make_group(&format!("g{}", i), "Parallel", &["A", "B"]))
        .collect();
    let processor = Processor::default();
    let sequential: Vec<String> = groups
        .iter()
        .map(|g| processor.render_group(g).unwrap())
        .collect();

    let shared = &processor;
    let parallel: Vec<String> = std::thread::scope(|s| {
        let handles: Vec<_> = groups
            .iter()
            .map(|g| s.spawn(move || shared.render_group(g).unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert_eq!(sequential, parallel);
}

#[test]
fn test_plain_text_preview() {
    let text = Processor::default()
        .render_group_with_format(&make_group("g", "Deploys", &["Rolled back"]), PlainText)
        .unwrap();
    assert!(text.starts_with("Deploys\n(1)\n"));
    assert!(text.ends_with("Rolled back"));
}
