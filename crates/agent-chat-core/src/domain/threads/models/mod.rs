// agent-chat/agent-chat-core
//
// Copyright: 2025, Agent Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use thread::{Thread, ThreadStatus};
pub use thread_search::{ThreadSearchMetadata, ThreadSearchRequest, THREAD_SEARCH_LIMIT};

mod thread;
mod thread_search;
