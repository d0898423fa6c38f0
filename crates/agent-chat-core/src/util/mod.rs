// agent-chat/agent-chat-core
//
// Copyright: 2025, Agent Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub(crate) use join_all::join_all;
#[cfg(not(target_arch = "wasm32"))]
pub(crate) use path_ext::PathExt;
pub use send_unless_wasm::{SendUnlessWasm, SyncUnlessWasm};

mod join_all;
#[cfg(not(target_arch = "wasm32"))]
mod path_ext;
mod send_unless_wasm;
