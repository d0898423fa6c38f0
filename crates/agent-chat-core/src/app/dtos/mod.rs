// agent-chat/agent-chat-core
//
// Copyright: 2025, Agent Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use crate::domain::assistants::models::{Assistant, CreateAssistantRequest, IfExists};
pub use crate::domain::attachments::models::{
    carries_files, files_from_clipboard, is_content_block, BlockKind, BlockMetadata,
    BlockValidationError, ClipboardItem, ContentBlock, DragEvent, DragState, FileReadError,
    ImageMediaType, PendingFile,
};
pub use crate::domain::connection::models::{
    ConfigError, ConnectionConfig, EnvDefaults, QueryOverrides, DEFAULT_API_URL,
    DEFAULT_ASSISTANT_ID,
};
pub use crate::domain::threads::models::{
    Thread, ThreadSearchMetadata, ThreadSearchRequest, ThreadStatus,
};
