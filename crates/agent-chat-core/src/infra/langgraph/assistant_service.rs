// agent-chat/agent-chat-core
//
// Copyright: 2025, Agent Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Method;

use crate::domain::assistants::models::{Assistant, CreateAssistantRequest};
use crate::domain::assistants::services::AssistantService;
use crate::domain::connection::models::ConnectionConfig;

use super::LangGraphClient;

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl AssistantService for LangGraphClient {
    async fn create_assistant(
        &self,
        config: &ConnectionConfig,
        request: &CreateAssistantRequest,
    ) -> Result<Assistant> {
        let assistant = self
            .request(config, Method::POST, &["assistants"])?
            .json(request)
            .send()
            .await?
            .error_for_status()?
            .json::<Assistant>()
            .await?;
        Ok(assistant)
    }
}
