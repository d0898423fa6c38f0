// agent-chat/agent-chat-core
//
// Copyright: 2025, Agent Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use assistant_service::AssistantService;

mod assistant_service;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::assistant_service::MockAssistantService;
}
