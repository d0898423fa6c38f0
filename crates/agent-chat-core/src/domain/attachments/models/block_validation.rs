// agent-chat/agent-chat-core
//
// Copyright: 2025, Agent Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::str::FromStr;

use serde_json::Value;

use super::{BlockKind, ContentBlock};

#[derive(Debug, thiserror::Error)]
pub enum BlockValidationError {
    #[error("Content block must be a JSON object.")]
    NotAnObject,
    #[error("Content block is missing its 'type'.")]
    MissingType,
    #[error("Unsupported content block type {0}.")]
    UnsupportedType(String),
    #[error("Content block is missing a textual 'mimeType'.")]
    MissingMimeType,
    #[error("Image block has non-image media type '{0}'.")]
    NotAnImage(String),
    #[error("Malformed content block: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Checks the discriminating fields of a block without looking at its payload or metadata.
fn validate_shape(value: &Value) -> Result<BlockKind, BlockValidationError> {
    let object = value.as_object().ok_or(BlockValidationError::NotAnObject)?;
    let kind = object
        .get("type")
        .ok_or(BlockValidationError::MissingType)?;

    let kind = match kind.as_str() {
        Some("file") => BlockKind::File,
        Some("image") => BlockKind::Image,
        _ => return Err(BlockValidationError::UnsupportedType(kind.to_string())),
    };

    let mime_type = object
        .get("mimeType")
        .and_then(Value::as_str)
        .ok_or(BlockValidationError::MissingMimeType)?;

    if kind == BlockKind::Image && !mime_type.starts_with("image/") {
        return Err(BlockValidationError::NotAnImage(mime_type.to_string()));
    }

    Ok(kind)
}

/// Returns true if `value` looks like a content block: an object tagged `file` with a textual
/// `mimeType`, or tagged `image` with a `mimeType` starting with `image/`.
pub fn is_content_block(value: &Value) -> bool {
    validate_shape(value).is_ok()
}

impl TryFrom<Value> for ContentBlock {
    type Error = BlockValidationError;

    fn try_from(mut value: Value) -> Result<Self, Self::Error> {
        validate_shape(&value)?;

        // Explicit nulls are treated like absent keys.
        if let Some(object) = value.as_object_mut() {
            object.retain(|key, v| !(v.is_null() && matches!(key.as_str(), "data" | "metadata")));
        }

        Ok(serde_json::from_value(value)?)
    }
}

impl FromStr for ContentBlock {
    type Err = BlockValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(serde_json::from_str::<Value>(s)?)
    }
}
