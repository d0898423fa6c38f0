// agent-chat/agent-chat-core
//
// Copyright: 2025, Agent Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub mod assistants;
pub mod attachments;
pub mod connection;
pub mod threads;
