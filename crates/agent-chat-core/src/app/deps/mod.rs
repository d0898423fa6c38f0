// agent-chat/agent-chat-core
//
// Copyright: 2025, Agent Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use app_context::AppContext;
pub use app_dependencies::{
    AppDependencies, DynAppContext, DynAssistantService, DynThreadService,
};

mod app_context;
mod app_dependencies;
