/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Entry point for rendering notification groups.
//!
//! The processor derives everything the group renderer treats as given
//! (visible item count, limit footer, which optional controls exist) from
//! the model and the render options, then hands a snapshot to
//! [`GroupRenderer`](crate::render::GroupRenderer).

use crate::controls::NotificationListGroup;
use crate::error::ProcessorError;
use crate::render::{render_with_format, Html, OutputFormat};
use indexmap::IndexMap;
use nlg_core::{NotificationGroup, RenderOptions};
use tracing::debug;

/// Renders groups with a fixed set of options.
#[derive(Debug, Default, Clone)]
pub struct Processor {
    pub options: RenderOptions,
}

impl Processor {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render one group to HTML.
    pub fn render_group(&self, group: &NotificationGroup) -> Result<String, ProcessorError> {
        self.render_group_with_format(group, Html)
    }

    /// Render one group using a specific output format.
    pub fn render_group_with_format<F: OutputFormat + 'static>(
        &self,
        group: &NotificationGroup,
        format: F,
    ) -> Result<String, ProcessorError> {
        let control = NotificationListGroup::new(group, &self.options);
        Ok(render_with_format(&control, format)?)
    }

    /// Render several groups to HTML, keyed by group id in input order.
    pub fn render_groups(
        &self,
        groups: &[NotificationGroup],
    ) -> Result<IndexMap<String, String>, ProcessorError> {
        self.render_groups_with_format(groups, Html)
    }

    /// Render several groups using a specific output format.
    ///
    /// Ids must be unique within one document.
    pub fn render_groups_with_format<F: OutputFormat + Clone + 'static>(
        &self,
        groups: &[NotificationGroup],
        format: F,
    ) -> Result<IndexMap<String, String>, ProcessorError> {
        debug!(groups = groups.len(), device = %self.options.device, "rendering document");
        let mut rendered = IndexMap::with_capacity(groups.len());
        for group in groups {
            if rendered.contains_key(&group.id) {
                return Err(ProcessorError::DuplicateId(group.id.clone()));
            }
            let output = self.render_group_with_format(group, format.clone())?;
            rendered.insert(group.id.clone(), output);
        }
        Ok(rendered)
    }
}
