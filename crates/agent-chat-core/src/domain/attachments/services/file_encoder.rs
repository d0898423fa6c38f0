// agent-chat/agent-chat-core
//
// Copyright: 2025, Agent Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use base64::{engine::general_purpose, Engine as _};

use crate::domain::attachments::models::{
    BlockMetadata, ContentBlock, FileReadError, ImageMediaType, PendingFile,
};

/// Reads `file` completely and turns it into a content block.
///
/// Allow-listed images become `image` blocks carrying only the file name. Everything else,
/// including files without a media type, becomes a `file` block that also records the size and
/// modification date. The payload is plain base64 without a `data:` URL prefix.
pub async fn encode_file<F>(file: &F) -> Result<ContentBlock, FileReadError>
where
    F: PendingFile + ?Sized,
{
    let bytes = file.read_bytes().await?;
    let data = general_purpose::STANDARD.encode(&bytes);
    let media_type = file.media_type();

    if ImageMediaType::classify(&media_type).is_some() {
        return Ok(ContentBlock::image(
            media_type,
            data,
            BlockMetadata::with_file_name(file.name()),
        ));
    }

    Ok(ContentBlock::file(
        media_type,
        data,
        BlockMetadata {
            filename: Some(file.name()),
            size: Some(bytes.len() as u64),
            last_modified: Some(file.last_modified()),
            ..Default::default()
        },
    ))
}
