// agent-chat/agent-chat-core
//
// Copyright: 2025, Agent Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use block_metadata::BlockMetadata;
pub use block_validation::{is_content_block, BlockValidationError};
pub use clipboard_item::{files_from_clipboard, ClipboardItem};
pub use content_block::{BlockKind, ContentBlock};
pub use drag_state::{carries_files, DragEvent, DragState};
pub use image_media_type::ImageMediaType;
pub use pending_file::{FileReadError, PendingFile};

mod block_metadata;
mod block_validation;
mod clipboard_item;
mod content_block;
mod drag_state;
mod image_media_type;
mod pending_file;
