/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

#![allow(dead_code)]

use nlg_processor::{Action, NotificationGroup, NotificationItem, Priority};

// --- Helper Functions for Test Data Construction ---

/// Create a notification with just an id and a title.
pub fn make_item(id: &str, title: &str) -> NotificationItem {
    NotificationItem {
        show_close_button: false,
        ..NotificationItem::new(id, title)
    }
}

/// Create a group holding one item per title, ids derived from the group id.
pub fn make_group(id: &str, title: &str, item_titles: &[&str]) -> NotificationGroup {
    NotificationGroup {
        items: item_titles
            .iter()
            .enumerate()
            .map(|(i, t)| make_item(&format!("{}-n{}", id, i + 1), t))
            .collect(),
        ..NotificationGroup::new(id, title)
    }
}

/// A group with every optional part switched on.
pub fn make_full_group() -> NotificationGroup {
    NotificationGroup {
        unread: true,
        priority: Priority::High,
        buttons: vec![Action {
            id: "accept-all".to_string(),
            text: "Accept All".to_string(),
            icon: None,
        }],
        ..make_group("full", "Approvals", &["Leave request", "Purchase order"])
    }
}

/// Count opened and closed elements of the given tag.
pub fn count_tags(html: &str, tag: &str) -> (usize, usize) {
    let opened = html.matches(&format!("<{} ", tag)).count()
        + html.matches(&format!("<{}>", tag)).count();
    let closed = html.matches(&format!("</{}>", tag)).count();
    (opened, closed)
}
