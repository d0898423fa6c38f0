// agent-chat/agent-chat-core
//
// Copyright: 2025, Agent Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

use anyhow::{format_err, Result};
use async_trait::async_trait;

use crate::domain::attachments::models::{FileReadError, PendingFile};
use crate::util::PathExt;

/// A file on the local filesystem. The media type is guessed from the extension.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalFile {
    path: PathBuf,
    name: String,
    media_type: String,
    size: u64,
    last_modified: i64,
}

impl LocalFile {
    /// Stats `path`. The contents are only read once the file is ingested.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let metadata = tokio::fs::metadata(&path).await?;

        if !metadata.is_file() {
            return Err(format_err!("{} is not a regular file.", path.display()));
        }

        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| format_err!("{} has no file name.", path.display()))?;

        let last_modified = metadata
            .modified()
            .ok()
            .and_then(|time| time.duration_since(UNIX_EPOCH).ok())
            .map(|duration| duration.as_millis() as i64)
            .unwrap_or_default();

        Ok(Self {
            media_type: path.declared_media_type(),
            size: metadata.len(),
            path,
            name,
            last_modified,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl PendingFile for LocalFile {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn media_type(&self) -> String {
        self.media_type.clone()
    }

    fn size(&self) -> u64 {
        self.size
    }

    fn last_modified(&self) -> i64 {
        self.last_modified
    }

    async fn read_bytes(&self) -> Result<Vec<u8>, FileReadError> {
        tokio::fs::read(&self.path)
            .await
            .map_err(|err| FileReadError::new(&self.name, err))
    }
}
