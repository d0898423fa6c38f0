// agent-chat/agent-chat-core
//
// Copyright: 2025, Agent Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use app::dtos;
pub use app::services;
pub use client::{Client, ClientDelegate, ClientEvent};
pub use client_builder::ClientBuilder;
pub use composer_event::{ComposerDelegate, ComposerEvent};
#[cfg(not(target_arch = "wasm32"))]
pub use infra::files::LocalFile;
pub use infra::files::InMemoryFile;
pub use infra::langgraph::LangGraphClient;

#[cfg(feature = "test")]
pub mod test;

pub mod app;
mod client;
mod client_builder;
mod composer_event;

pub mod domain;

#[cfg(feature = "test")]
pub mod infra;
#[cfg(not(feature = "test"))]
pub(crate) mod infra;

pub(crate) mod util;
