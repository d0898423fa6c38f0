// agent-chat/agent-chat-core
//
// Copyright: 2025, Agent Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use anyhow::Result;

use crate::app::deps::{AppContext, AppDependencies, DynAssistantService, DynThreadService};
use crate::client::{Client, ClientDelegate};
use crate::domain::assistants::services::AssistantService;
use crate::domain::connection::models::{ConnectionConfig, QueryOverrides};
use crate::domain::threads::services::ThreadService;
use crate::infra::langgraph::LangGraphClient;

pub struct ClientBuilder {
    config: Option<ConnectionConfig>,
    thread_service: Option<DynThreadService>,
    assistant_service: Option<DynAssistantService>,
    delegate: Option<Box<dyn ClientDelegate>>,
}

impl ClientBuilder {
    pub(crate) fn new() -> Self {
        ClientBuilder {
            config: None,
            thread_service: None,
            assistant_service: None,
            delegate: None,
        }
    }

    pub fn set_config(mut self, config: ConnectionConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn set_thread_service<T: ThreadService + 'static>(mut self, service: T) -> Self {
        self.thread_service = Some(Arc::new(service));
        self
    }

    pub fn set_assistant_service<T: AssistantService + 'static>(mut self, service: T) -> Self {
        self.assistant_service = Some(Arc::new(service));
        self
    }

    pub fn set_delegate(mut self, delegate: Option<Box<dyn ClientDelegate>>) -> Self {
        self.delegate = delegate;
        self
    }

    /// Builds the client. Services that were not set talk to the agent service over HTTP, a
    /// missing configuration resolves to the defaults.
    pub fn build(self) -> Result<Client> {
        let config = match self.config {
            Some(config) => config,
            None => ConnectionConfig::resolve(&QueryOverrides::default(), None)?,
        };

        let http_client = LangGraphClient::new();
        let deps = AppDependencies {
            assistant_service: self
                .assistant_service
                .unwrap_or_else(|| Arc::new(http_client.clone()) as DynAssistantService),
            ctx: Arc::new(AppContext::new(config, self.delegate)),
            thread_service: self
                .thread_service
                .unwrap_or_else(|| Arc::new(http_client) as DynThreadService),
        };

        Ok(Client::new(
            deps.ctx.clone(),
            (&deps).into(),
            (&deps).into(),
        ))
    }
}
