// agent-chat/agent-chat-core
//
// Copyright: 2025, Agent Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Descriptive data stored next to an attachment's payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    /// Older producers store the file name under `name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<i64>,
    /// Keys this crate doesn't know about, preserved as received.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl BlockMetadata {
    pub fn with_file_name(file_name: impl Into<String>) -> Self {
        Self {
            filename: Some(file_name.into()),
            ..Default::default()
        }
    }

    /// The stored file name, looking at `filename` first and `name` second. An empty
    /// `filename` counts as missing.
    pub fn file_name(&self) -> Option<&str> {
        self.filename
            .as_deref()
            .filter(|name| !name.is_empty())
            .or(self.name.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_file_name_prefers_filename() {
        let metadata = BlockMetadata {
            filename: Some("a.png".to_string()),
            name: Some("b.png".to_string()),
            ..Default::default()
        };
        assert_eq!(metadata.file_name(), Some("a.png"));

        let metadata = BlockMetadata {
            name: Some("b.png".to_string()),
            ..Default::default()
        };
        assert_eq!(metadata.file_name(), Some("b.png"));

        let metadata = BlockMetadata {
            filename: Some(String::new()),
            name: Some("b.png".to_string()),
            ..Default::default()
        };
        assert_eq!(metadata.file_name(), Some("b.png"));
        assert_eq!(BlockMetadata::default().file_name(), None);
    }

    #[test]
    fn test_preserves_unknown_keys() {
        let value = json!({
            "filename": "report.pdf",
            "size": 20,
            "lastModified": 1700000000000i64,
            "source": "upload"
        });

        let metadata: BlockMetadata = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(metadata.size, Some(20));
        assert_eq!(metadata.last_modified, Some(1700000000000));
        assert_eq!(metadata.extra.get("source"), Some(&json!("upload")));
        assert_eq!(serde_json::to_value(&metadata).unwrap(), value);
    }
}
