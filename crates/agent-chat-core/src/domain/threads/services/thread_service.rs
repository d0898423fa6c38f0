// agent-chat/agent-chat-core
//
// Copyright: 2025, Agent Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::connection::models::ConnectionConfig;
use crate::domain::threads::models::{Thread, ThreadSearchRequest};
use crate::util::{SendUnlessWasm, SyncUnlessWasm};

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait ThreadService: SendUnlessWasm + SyncUnlessWasm {
    async fn search_threads(
        &self,
        config: &ConnectionConfig,
        request: &ThreadSearchRequest,
    ) -> Result<Vec<Thread>>;
}
