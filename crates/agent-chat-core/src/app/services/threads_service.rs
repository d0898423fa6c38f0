// agent-chat/agent-chat-core
//
// Copyright: 2025, Agent Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use tracing::{error, info, warn};

use crate::app::deps::{AppDependencies, DynAppContext, DynThreadService};
use crate::domain::threads::models::{Thread, ThreadSearchMetadata, ThreadSearchRequest};

/// The list of threads belonging to the configured assistant.
pub struct ThreadsService {
    ctx: DynAppContext,
    thread_service: DynThreadService,
}

impl From<&AppDependencies> for ThreadsService {
    fn from(deps: &AppDependencies) -> Self {
        Self {
            ctx: deps.ctx.clone(),
            thread_service: deps.thread_service.clone(),
        }
    }
}

impl ThreadsService {
    /// The threads loaded last, empty until the first load completes.
    pub fn threads(&self) -> Vec<Thread> {
        self.ctx.threads()
    }

    pub fn is_loading(&self) -> bool {
        self.ctx.threads_loading()
    }

    /// Fetches the threads of the configured assistant and caches them. Failures are logged and
    /// yield an empty list.
    pub async fn load_threads(&self) -> Vec<Thread> {
        let config = self.ctx.config();

        if config.assistant_id.is_empty() {
            warn!("Missing assistant ID, not fetching threads.");
            return vec![];
        }

        info!(
            "Fetching threads from {} for assistant '{}'.",
            config.api_url, config.assistant_id
        );

        let request =
            ThreadSearchRequest::new(ThreadSearchMetadata::for_assistant(&config.assistant_id));

        self.ctx.begin_threads_load();
        let result = self.thread_service.search_threads(&config, &request).await;
        self.ctx.end_threads_load();

        let threads = match result {
            Ok(threads) => threads,
            Err(err) => {
                error!("Failed to fetch threads. {:?}", err);
                return vec![];
            }
        };

        if !self.ctx.config().same_target(&config) {
            info!("Discarding threads of a previous connection.");
            return vec![];
        }

        self.ctx.set_threads(threads.clone());
        threads
    }
}
