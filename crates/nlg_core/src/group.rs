/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Notification groups, their items and actions.

use crate::options::RenderOptions;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

crate::str_enum! {
    /// Severity of a notification or group.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[cfg_attr(feature = "schema", derive(JsonSchema))]
    #[serde(rename_all = "kebab-case")]
    pub enum Priority {
        #[default]
        None = "None",
        Low = "Low",
        Medium = "Medium",
        High = "High",
    }
}

impl Priority {
    pub fn is_none(&self) -> bool {
        matches!(self, Priority::None)
    }
}

fn default_true() -> bool {
    true
}

fn is_true(value: &bool) -> bool {
    *value
}

/// An action button shown in the overflow toolbar of a group or item.
#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub struct Action {
    pub id: String,
    pub text: String,
    /// Optional icon URI, e.g. `sap-icon://accept`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// A single notification inside a group.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub struct NotificationItem {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datetime: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub unread: bool,
    #[serde(default = "default_true", skip_serializing_if = "is_true")]
    pub visible: bool,
    #[serde(default = "default_true", skip_serializing_if = "is_true")]
    pub show_close_button: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub buttons: Vec<Action>,
}

impl Default for NotificationItem {
    fn default() -> Self {
        Self {
            id: String::new(),
            title: String::new(),
            description: None,
            datetime: None,
            author_name: None,
            priority: Priority::None,
            unread: false,
            visible: true,
            show_close_button: true,
            buttons: Vec::new(),
        }
    }
}

impl NotificationItem {
    pub fn new(id: &str, title: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            ..Default::default()
        }
    }
}

/// A collapsible group of notifications.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub struct NotificationGroup {
    /// Unique identifier; sub-element ids are derived from it.
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default = "default_true", skip_serializing_if = "is_true")]
    pub visible: bool,
    #[serde(default)]
    pub collapsed: bool,
    #[serde(default)]
    pub unread: bool,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default = "default_true", skip_serializing_if = "is_true")]
    pub show_items_counter: bool,
    #[serde(default)]
    pub show_empty_group: bool,
    #[serde(default = "default_true", skip_serializing_if = "is_true")]
    pub show_close_button: bool,
    #[serde(default = "default_true", skip_serializing_if = "is_true")]
    pub show_buttons: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub buttons: Vec<Action>,
    #[serde(default)]
    pub items: Vec<NotificationItem>,
}

impl Default for NotificationGroup {
    fn default() -> Self {
        Self {
            id: String::new(),
            title: String::new(),
            visible: true,
            collapsed: false,
            unread: false,
            priority: Priority::None,
            show_items_counter: true,
            show_empty_group: false,
            show_close_button: true,
            show_buttons: true,
            buttons: Vec::new(),
            items: Vec::new(),
        }
    }
}

impl NotificationGroup {
    pub fn new(id: &str, title: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            ..Default::default()
        }
    }

    /// Number of items whose own visibility flag is set.
    pub fn visible_items_count(&self) -> usize {
        self.items.iter().filter(|item| item.visible).count()
    }
}

/// An input document: render options plus one or more groups.
#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "kebab-case")]
pub struct InputDocument {
    #[serde(default)]
    pub options: RenderOptions,
    pub groups: Vec<NotificationGroup>,
}

/// Accepted shapes of an input file.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(untagged)]
pub enum InputGroups {
    Document(InputDocument),
    List(Vec<NotificationGroup>),
    Single(Box<NotificationGroup>),
}

impl From<InputGroups> for InputDocument {
    fn from(input: InputGroups) -> Self {
        match input {
            InputGroups::Document(doc) => doc,
            InputGroups::List(groups) => InputDocument {
                groups,
                ..Default::default()
            },
            InputGroups::Single(group) => InputDocument {
                groups: vec![*group],
                ..Default::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_defaults_from_yaml() {
        let group: NotificationGroup = serde_yaml::from_str("id: g1\ntitle: Inbox\n").unwrap();
        assert!(group.visible);
        assert!(!group.collapsed);
        assert!(group.show_items_counter);
        assert!(!group.show_empty_group);
        assert!(group.show_close_button);
        assert_eq!(group.priority, Priority::None);
        assert!(group.items.is_empty());
    }

    #[test]
    fn test_visible_items_count_skips_hidden_items() {
        let mut group = NotificationGroup::new("g1", "Inbox");
        group.items = vec![
            NotificationItem::new("a", "A"),
            NotificationItem {
                visible: false,
                ..NotificationItem::new("b", "B")
            },
            NotificationItem::new("c", "C"),
        ];
        assert_eq!(group.visible_items_count(), 2);
    }

    #[test]
    fn test_priority_kebab_case() {
        let p: Priority = serde_json::from_str("\"medium\"").unwrap();
        assert_eq!(p, Priority::Medium);
        assert_eq!(p.as_str(), "Medium");
        assert!(Priority::default().is_none());
    }

    #[test]
    fn test_input_shapes() {
        let single: InputGroups = serde_yaml::from_str("id: g1\n").unwrap();
        assert_eq!(InputDocument::from(single).groups.len(), 1);

        let list: InputGroups = serde_yaml::from_str("- id: g1\n- id: g2\n").unwrap();
        assert_eq!(InputDocument::from(list).groups.len(), 2);

        let doc: InputGroups =
            serde_yaml::from_str("options:\n  device: phone\ngroups:\n  - id: g1\n").unwrap();
        let doc = InputDocument::from(doc);
        assert!(doc.options.device.is_phone());
        assert_eq!(doc.groups[0].id, "g1");
    }
}
