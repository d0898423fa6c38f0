// agent-chat/agent-chat-core
//
// Copyright: 2025, Agent Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::ops::Deref;
use std::sync::Arc;

use crate::app::deps::DynAppContext;
use crate::app::services::{AssistantsService, ThreadsService};
use crate::client_builder::ClientBuilder;
use crate::domain::connection::models::ConnectionConfig;
use crate::util::{SendUnlessWasm, SyncUnlessWasm};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientEvent {
    /// The API URL or the assistant changed.
    ConfigChanged,

    /// The cached thread list was replaced or cleared.
    ThreadsChanged,
}

pub trait ClientDelegate: SendUnlessWasm + SyncUnlessWasm {
    fn handle_event(&self, event: ClientEvent);
}

#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

pub struct ClientInner {
    pub threads: ThreadsService,
    pub assistants: AssistantsService,
    ctx: DynAppContext,
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub(crate) fn new(
        ctx: DynAppContext,
        threads: ThreadsService,
        assistants: AssistantsService,
    ) -> Self {
        Self {
            inner: Arc::new(ClientInner {
                threads,
                assistants,
                ctx,
            }),
        }
    }

    pub fn config(&self) -> ConnectionConfig {
        self.inner.ctx.config()
    }

    pub fn update_config(&self, config: ConnectionConfig) {
        self.inner.ctx.set_config(config)
    }
}

impl Deref for Client {
    type Target = ClientInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
