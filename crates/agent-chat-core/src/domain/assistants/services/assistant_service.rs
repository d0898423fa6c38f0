// agent-chat/agent-chat-core
//
// Copyright: 2025, Agent Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::assistants::models::{Assistant, CreateAssistantRequest};
use crate::domain::connection::models::ConnectionConfig;
use crate::util::{SendUnlessWasm, SyncUnlessWasm};

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait AssistantService: SendUnlessWasm + SyncUnlessWasm {
    async fn create_assistant(
        &self,
        config: &ConnectionConfig,
        request: &CreateAssistantRequest,
    ) -> Result<Assistant>;
}
