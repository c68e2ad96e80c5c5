/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Error types for rendering and processing.

use thiserror::Error;

/// Misuse of the render target, or a missing collaborator control.
///
/// A well-formed render pass never produces one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("start tag <{0}> is still open; call open_end first")]
    PendingStartTag(&'static str),
    #[error("`{0}` written outside of a start tag")]
    NoStartTag(String),
    #[error("invalid attribute name `{0}`")]
    InvalidAttributeName(String),
    #[error("mismatched close: expected </{expected}>, found </{found}>")]
    MismatchedClose {
        expected: &'static str,
        found: String,
    },
    #[error("close </{0}> without a matching open element")]
    UnbalancedClose(String),
    #[error("render finished with unclosed elements: {0:?}")]
    Unclosed(Vec<&'static str>),
    #[error("missing collaborator control: {0}")]
    MissingControl(&'static str),
}

/// Errors raised while loading and rendering notification groups.
#[derive(Debug, Error)]
pub enum ProcessorError {
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse {0}: {1}")]
    ParseError(String, String),
    #[error("duplicate group id `{0}`")]
    DuplicateId(String),
}
