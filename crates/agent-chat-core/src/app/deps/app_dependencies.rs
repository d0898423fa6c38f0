// agent-chat/agent-chat-core
//
// Copyright: 2025, Agent Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use crate::app::deps::AppContext;
use crate::domain::assistants::services::AssistantService;
use crate::domain::threads::services::ThreadService;

pub type DynAppContext = Arc<AppContext>;
pub type DynAssistantService = Arc<dyn AssistantService>;
pub type DynThreadService = Arc<dyn ThreadService>;

pub struct AppDependencies {
    pub assistant_service: DynAssistantService,
    pub ctx: DynAppContext,
    pub thread_service: DynThreadService,
}
