// agent-chat/agent-chat-core
//
// Copyright: 2025, Agent Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Method;

use crate::domain::connection::models::ConnectionConfig;
use crate::domain::threads::models::{Thread, ThreadSearchRequest};
use crate::domain::threads::services::ThreadService;

use super::LangGraphClient;

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl ThreadService for LangGraphClient {
    async fn search_threads(
        &self,
        config: &ConnectionConfig,
        request: &ThreadSearchRequest,
    ) -> Result<Vec<Thread>> {
        let threads = self
            .request(config, Method::POST, &["threads", "search"])?
            .json(request)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<Thread>>()
            .await?;
        Ok(threads)
    }
}
