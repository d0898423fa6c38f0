// agent-chat/agent-chat-core
//
// Copyright: 2025, Agent Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use in_memory_file::InMemoryFile;
#[cfg(not(target_arch = "wasm32"))]
pub use local_file::LocalFile;

mod in_memory_file;
#[cfg(not(target_arch = "wasm32"))]
mod local_file;
