// agent-chat/agent-chat-core
//
// Copyright: 2025, Agent Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use thread_service::ThreadService;

mod thread_service;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::thread_service::MockThreadService;
}
