// agent-chat/agent-chat-core
//
// Copyright: 2025, Agent Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use itertools::Itertools;

use crate::domain::attachments::models::FileReadError;
use crate::util::{SendUnlessWasm, SyncUnlessWasm};

#[derive(Debug, Clone, PartialEq)]
pub enum ComposerEvent {
    /// Blocks were appended or removed, or the session was reset or replaced.
    BlocksChanged,

    /// A file drag entered or left the drop target.
    DragStateChanged { is_dragging: bool },

    /// Files were not attached because an attachment with the same name and media type exists.
    DuplicateFilesRejected { file_names: Vec<String> },

    /// A file could not be read and was skipped.
    FileReadFailed { error: FileReadError },
}

impl ComposerEvent {
    /// A message suitable for a toast notification.
    pub fn user_message(&self) -> Option<String> {
        match self {
            ComposerEvent::DuplicateFilesRejected { file_names } => Some(format!(
                "Duplicate file(s) detected: {}. Each file can only be uploaded once per message.",
                file_names.iter().join(", ")
            )),
            ComposerEvent::FileReadFailed { error } => Some(error.to_string()),
            ComposerEvent::BlocksChanged | ComposerEvent::DragStateChanged { .. } => None,
        }
    }
}

pub trait ComposerDelegate: SendUnlessWasm + SyncUnlessWasm {
    fn handle_event(&self, event: ComposerEvent);
}
