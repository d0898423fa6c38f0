// agent-chat/agent-chat-core
//
// Copyright: 2025, Agent Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use base64::{engine::general_purpose, DecodeError, Engine as _};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use super::BlockMetadata;

/// An attachment of a message that is being composed. The payload is kept inline as base64.
///
/// Serializes to the multimodal block shape the agent service expects:
/// `{"type": "image" | "file", "mimeType": "…", "data": "…", "metadata": {…}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    Image {
        #[serde(rename = "mimeType")]
        mime_type: String,
        #[serde(default)]
        data: String,
        #[serde(default)]
        metadata: BlockMetadata,
    },
    File {
        #[serde(rename = "mimeType")]
        mime_type: String,
        #[serde(default)]
        data: String,
        #[serde(default)]
        metadata: BlockMetadata,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum BlockKind {
    Image,
    File,
}

impl ContentBlock {
    pub fn image(
        mime_type: impl Into<String>,
        data: impl Into<String>,
        metadata: BlockMetadata,
    ) -> Self {
        Self::Image {
            mime_type: mime_type.into(),
            data: data.into(),
            metadata,
        }
    }

    pub fn file(
        mime_type: impl Into<String>,
        data: impl Into<String>,
        metadata: BlockMetadata,
    ) -> Self {
        Self::File {
            mime_type: mime_type.into(),
            data: data.into(),
            metadata,
        }
    }

    pub fn kind(&self) -> BlockKind {
        match self {
            Self::Image { .. } => BlockKind::Image,
            Self::File { .. } => BlockKind::File,
        }
    }

    pub fn mime_type(&self) -> &str {
        match self {
            Self::Image { mime_type, .. } | Self::File { mime_type, .. } => mime_type,
        }
    }

    /// The base64 encoded payload.
    pub fn data(&self) -> &str {
        match self {
            Self::Image { data, .. } | Self::File { data, .. } => data,
        }
    }

    pub fn metadata(&self) -> &BlockMetadata {
        match self {
            Self::Image { metadata, .. } | Self::File { metadata, .. } => metadata,
        }
    }

    pub fn file_name(&self) -> Option<&str> {
        self.metadata().file_name()
    }

    pub fn decode_data(&self) -> Result<Vec<u8>, DecodeError> {
        general_purpose::STANDARD.decode(self.data())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_serializes_image_block() {
        let block = ContentBlock::image(
            "image/png",
            "iVBORw0KGgo=",
            BlockMetadata::with_file_name("a.png"),
        );

        assert_eq!(
            serde_json::to_value(&block).unwrap(),
            json!({
                "type": "image",
                "mimeType": "image/png",
                "data": "iVBORw0KGgo=",
                "metadata": { "filename": "a.png" }
            })
        );
    }

    #[test]
    fn test_serializes_file_block() {
        let block = ContentBlock::file(
            "application/pdf",
            "JVBERi0=",
            BlockMetadata {
                filename: Some("report.pdf".to_string()),
                size: Some(5),
                last_modified: Some(1_700_000_000_000),
                ..Default::default()
            },
        );

        assert_eq!(
            serde_json::to_value(&block).unwrap(),
            json!({
                "type": "file",
                "mimeType": "application/pdf",
                "data": "JVBERi0=",
                "metadata": {
                    "filename": "report.pdf",
                    "size": 5,
                    "lastModified": 1700000000000i64
                }
            })
        );
        assert_eq!(block.kind(), BlockKind::File);
        assert_eq!(block.decode_data().unwrap(), b"%PDF-");
    }
}
