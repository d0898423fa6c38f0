// agent-chat/agent-chat-core
//
// Copyright: 2025, Agent Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;

use crate::domain::attachments::models::{FileReadError, PendingFile};

/// A file whose contents are already in memory, e.g. received over an IPC channel.
#[derive(Debug, Clone, PartialEq)]
pub struct InMemoryFile {
    pub name: String,
    pub media_type: String,
    pub bytes: Vec<u8>,
    pub last_modified: i64,
}

impl InMemoryFile {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            bytes,
            last_modified: 0,
        }
    }

    pub fn with_last_modified(mut self, last_modified: i64) -> Self {
        self.last_modified = last_modified;
        self
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl PendingFile for InMemoryFile {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn media_type(&self) -> String {
        self.media_type.clone()
    }

    fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    fn last_modified(&self) -> i64 {
        self.last_modified
    }

    async fn read_bytes(&self) -> Result<Vec<u8>, FileReadError> {
        Ok(self.bytes.clone())
    }
}
