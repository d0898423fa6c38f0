// agent-chat/agent-chat-core
//
// Copyright: 2025, Agent Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use crate::app::deps::{AppContext, AppDependencies};
use crate::domain::assistants::services::mocks::MockAssistantService;
use crate::domain::connection::models::ConnectionConfig;
use crate::domain::threads::services::mocks::MockThreadService;
use crate::ClientDelegate;

pub struct MockAppDependencies {
    pub config: ConnectionConfig,
    pub assistant_service: MockAssistantService,
    pub thread_service: MockThreadService,
    pub delegate: Option<Box<dyn ClientDelegate>>,
}

impl Default for MockAppDependencies {
    fn default() -> Self {
        Self {
            config: ConnectionConfig::new("http://localhost:2024", "agent").unwrap(),
            assistant_service: MockAssistantService::new(),
            thread_service: MockThreadService::new(),
            delegate: None,
        }
    }
}

impl MockAppDependencies {
    pub fn into_deps(self) -> AppDependencies {
        AppDependencies {
            assistant_service: Arc::new(self.assistant_service),
            ctx: Arc::new(AppContext::new(self.config, self.delegate)),
            thread_service: Arc::new(self.thread_service),
        }
    }
}
