// agent-chat/agent-chat-core
//
// Copyright: 2025, Agent Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use connection_config::{
    ConfigError, ConnectionConfig, DEFAULT_API_URL, DEFAULT_ASSISTANT_ID,
};
pub use env_defaults::EnvDefaults;
pub use query_overrides::QueryOverrides;

mod connection_config;
mod env_defaults;
mod query_overrides;
