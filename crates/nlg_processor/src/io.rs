/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use std::fs;
use std::path::Path;

use nlg_core::{InputDocument, InputGroups};

use crate::ProcessorError;

/// Load notification groups from a file given its path.
/// Supports YAML (default), JSON and CBOR, chosen by extension.
///
/// The file may hold a document (`options` + `groups`), a list of groups
/// or a single group.
pub fn load_groups(path: &Path) -> Result<InputDocument, ProcessorError> {
    let bytes = fs::read(path)?;
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("yaml");
    parse_groups(&bytes, ext)
}

/// Parse notification groups from raw bytes in the format named by `ext`.
pub fn parse_groups(bytes: &[u8], ext: &str) -> Result<InputDocument, ProcessorError> {
    let input: InputGroups = match ext {
        "json" => {
            // Check for syntax errors first
            let _: serde_json::Value = serde_json::from_slice(bytes)
                .map_err(|e| ProcessorError::ParseError("JSON".to_string(), e.to_string()))?;
            serde_json::from_slice(bytes)
                .map_err(|e| ProcessorError::ParseError("JSON".to_string(), e.to_string()))?
        }
        "cbor" => serde_cbor::from_slice(bytes)
            .map_err(|e| ProcessorError::ParseError("CBOR".to_string(), e.to_string()))?,
        _ => {
            let content = String::from_utf8_lossy(bytes);
            // Check for syntax errors first
            let _: serde_yaml::Value = serde_yaml::from_str(&content)
                .map_err(|e| ProcessorError::ParseError("YAML".to_string(), e.to_string()))?;
            serde_yaml::from_str(&content)
                .map_err(|e| ProcessorError::ParseError("YAML".to_string(), e.to_string()))?
        }
    };
    Ok(input.into())
}
