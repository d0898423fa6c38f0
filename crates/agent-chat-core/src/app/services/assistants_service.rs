// agent-chat/agent-chat-core
//
// Copyright: 2025, Agent Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use tracing::{error, info};

use crate::app::deps::{AppDependencies, DynAppContext, DynAssistantService};
use crate::domain::assistants::models::{Assistant, CreateAssistantRequest};

pub struct AssistantsService {
    ctx: DynAppContext,
    assistant_service: DynAssistantService,
}

impl From<&AppDependencies> for AssistantsService {
    fn from(deps: &AppDependencies) -> Self {
        Self {
            ctx: deps.ctx.clone(),
            assistant_service: deps.assistant_service.clone(),
        }
    }
}

impl AssistantsService {
    /// Creates an assistant for the default graph. An existing assistant with the same ID is
    /// returned unchanged.
    pub async fn create_assistant(&self, assistant_id: Option<String>) -> Result<Assistant> {
        let config = self.ctx.config();
        let request = CreateAssistantRequest::with_defaults(assistant_id);

        match self
            .assistant_service
            .create_assistant(&config, &request)
            .await
        {
            Ok(assistant) => {
                info!("Created assistant '{}'.", assistant.assistant_id);
                Ok(assistant)
            }
            Err(err) => {
                error!("Failed to create assistant. {:?}", err);
                Err(err)
            }
        }
    }
}
