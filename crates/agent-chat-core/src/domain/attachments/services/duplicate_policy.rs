// agent-chat/agent-chat-core
//
// Copyright: 2025, Agent Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::attachments::models::{ContentBlock, PendingFile};

/// Returns true if `blocks` already hold an attachment with the same file name *and* media type.
pub fn is_duplicate(file_name: &str, media_type: &str, blocks: &[ContentBlock]) -> bool {
    blocks
        .iter()
        .any(|block| block.file_name() == Some(file_name) && block.mime_type() == media_type)
}

#[derive(Debug)]
pub struct PartitionedFiles<F> {
    pub unique: Vec<F>,
    pub duplicates: Vec<F>,
}

/// Splits `files` into the ones that may be attached and the ones that would duplicate an
/// existing block. A file repeated within `files` counts as a duplicate of its first occurrence.
pub fn partition_duplicates<F: PendingFile>(
    files: Vec<F>,
    existing: &[ContentBlock],
) -> PartitionedFiles<F> {
    let mut accepted_keys: Vec<(String, String)> = vec![];
    let mut partitioned = PartitionedFiles {
        unique: vec![],
        duplicates: vec![],
    };

    for file in files {
        let key = (file.name(), file.media_type());

        if is_duplicate(&key.0, &key.1, existing) || accepted_keys.contains(&key) {
            partitioned.duplicates.push(file);
            continue;
        }

        accepted_keys.push(key);
        partitioned.unique.push(file);
    }

    partitioned
}
