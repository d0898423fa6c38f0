// agent-chat/agent-chat-core
//
// Copyright: 2025, Agent Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strum_macros::Display;

pub const DEFAULT_GRAPH_ID: &str = "agent";
pub const DEFAULT_ASSISTANT_NAME: &str = "default-assistant";
pub const DEFAULT_ASSISTANT_DESCRIPTION: &str = "Default assistant created from UI";

/// A named agent configuration bound to a graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assistant {
    pub assistant_id: String,
    pub graph_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub config: Value,
    #[serde(default)]
    pub metadata: Map<String, Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// What the service should do if an assistant with the requested ID exists already.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum IfExists {
    Raise,
    DoNothing,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateAssistantRequest {
    pub graph_id: String,
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assistant_id: Option<String>,
    pub if_exists: IfExists,
}

impl CreateAssistantRequest {
    /// A request for the default graph, named after the assistant ID. Creating an assistant
    /// that exists already is not an error.
    pub fn with_defaults(assistant_id: Option<String>) -> Self {
        let assistant_id = assistant_id.filter(|id| !id.is_empty());

        Self {
            graph_id: DEFAULT_GRAPH_ID.to_string(),
            name: assistant_id
                .clone()
                .unwrap_or_else(|| DEFAULT_ASSISTANT_NAME.to_string()),
            description: DEFAULT_ASSISTANT_DESCRIPTION.to_string(),
            assistant_id,
            if_exists: IfExists::DoNothing,
        }
    }
}
