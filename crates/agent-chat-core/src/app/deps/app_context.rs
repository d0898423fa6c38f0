// agent-chat/agent-chat-core
//
// Copyright: 2025, Agent Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::RwLock;
use tracing::info;

use crate::client::{ClientDelegate, ClientEvent};
use crate::domain::connection::models::ConnectionConfig;
use crate::domain::threads::models::Thread;

pub struct AppContext {
    config: RwLock<ConnectionConfig>,
    threads: RwLock<Vec<Thread>>,
    /// Number of thread loads in flight.
    threads_loading: AtomicUsize,
    delegate: Option<Box<dyn ClientDelegate>>,
}

impl AppContext {
    pub fn new(config: ConnectionConfig, delegate: Option<Box<dyn ClientDelegate>>) -> Self {
        Self {
            config: RwLock::new(config),
            threads: Default::default(),
            threads_loading: AtomicUsize::new(0),
            delegate,
        }
    }

    pub fn config(&self) -> ConnectionConfig {
        self.config.read().clone()
    }

    /// Replaces the configuration. Cached threads belong to the previous assistant and are
    /// dropped if the service or the assistant changed.
    pub fn set_config(&self, config: ConnectionConfig) {
        let target_changed = {
            let mut current = self.config.write();
            let changed = !current.same_target(&config);
            *current = config;
            changed
        };

        if !target_changed {
            return;
        }

        {
            let config = self.config.read();
            info!(
                "Connection changed to assistant '{}' at {}.",
                config.assistant_id, config.api_url
            );
        }

        self.threads.write().clear();
        self.dispatch_event(ClientEvent::ConfigChanged);
        self.dispatch_event(ClientEvent::ThreadsChanged);
    }

    pub fn threads(&self) -> Vec<Thread> {
        self.threads.read().clone()
    }

    pub fn set_threads(&self, threads: Vec<Thread>) {
        *self.threads.write() = threads;
        self.dispatch_event(ClientEvent::ThreadsChanged);
    }

    pub fn threads_loading(&self) -> bool {
        self.threads_loading.load(Ordering::Acquire) > 0
    }

    pub fn begin_threads_load(&self) {
        self.threads_loading.fetch_add(1, Ordering::AcqRel);
    }

    pub fn end_threads_load(&self) {
        self.threads_loading.fetch_sub(1, Ordering::AcqRel);
    }

    pub fn dispatch_event(&self, event: ClientEvent) {
        let Some(ref delegate) = self.delegate else {
            return;
        };
        delegate.handle_event(event)
    }
}
