// agent-chat/agent-chat-core
//
// Copyright: 2025, Agent Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::Display;

use async_trait::async_trait;

use crate::util::{SendUnlessWasm, SyncUnlessWasm};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Failed to read file '{file_name}': {reason}")]
pub struct FileReadError {
    pub file_name: String,
    pub reason: String,
}

impl FileReadError {
    pub fn new(file_name: impl Into<String>, reason: impl Display) -> Self {
        Self {
            file_name: file_name.into(),
            reason: reason.to_string(),
        }
    }
}

/// A file handed to the composer by one of its input surfaces, not yet read.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait PendingFile: SendUnlessWasm + SyncUnlessWasm {
    fn name(&self) -> String;

    /// The declared media type, verbatim. May be empty if the platform could not tell.
    fn media_type(&self) -> String;

    /// The size in bytes as reported by the platform before reading.
    fn size(&self) -> u64;

    /// Milliseconds since the Unix epoch.
    fn last_modified(&self) -> i64;

    /// Reads the complete contents of the file.
    async fn read_bytes(&self) -> Result<Vec<u8>, FileReadError>;
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl<T: PendingFile + ?Sized> PendingFile for Box<T> {
    fn name(&self) -> String {
        (**self).name()
    }

    fn media_type(&self) -> String {
        (**self).media_type()
    }

    fn size(&self) -> u64 {
        (**self).size()
    }

    fn last_modified(&self) -> i64 {
        (**self).last_modified()
    }

    async fn read_bytes(&self) -> Result<Vec<u8>, FileReadError> {
        (**self).read_bytes().await
    }
}
