// agent-chat/agent-chat-core
//
// Copyright: 2025, Agent Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::Serialize;
use uuid::Uuid;

pub const THREAD_SEARCH_LIMIT: u32 = 100;

/// The metadata filter threads are searched by. Serializes to `{"assistant_id": …}` or
/// `{"graph_id": …}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThreadSearchMetadata {
    AssistantId(String),
    GraphId(String),
}

impl ThreadSearchMetadata {
    /// Assistants are addressed by UUID. Anything else is taken to be the ID of a graph, whose
    /// default assistant created the threads.
    pub fn for_assistant(assistant_id: &str) -> Self {
        if Uuid::parse_str(assistant_id).is_ok() {
            Self::AssistantId(assistant_id.to_string())
        } else {
            Self::GraphId(assistant_id.to_string())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThreadSearchRequest {
    pub metadata: ThreadSearchMetadata,
    pub limit: u32,
    pub offset: u32,
}

impl ThreadSearchRequest {
    pub fn new(metadata: ThreadSearchMetadata) -> Self {
        Self {
            metadata,
            limit: THREAD_SEARCH_LIMIT,
            offset: 0,
        }
    }
}
