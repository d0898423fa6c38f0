// agent-chat/agent-chat-core
//
// Copyright: 2025, Agent Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use langgraph_client::LangGraphClient;

mod assistant_service;
mod langgraph_client;
mod thread_service;
