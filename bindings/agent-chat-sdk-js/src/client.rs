// agent-chat/agent-chat-sdk-js
//
// Copyright: 2025, Agent Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use tracing::info;
use wasm_bindgen::prelude::*;

use agent_chat_core::dtos::{ConnectionConfig, EnvDefaults, QueryOverrides};
use agent_chat_core::Client as CoreClient;
use agent_chat_core::ClientDelegate;

use crate::delegate::{ClientEventDelegate, JSClientDelegate};
use crate::error::{Result, WasmError};
use crate::log::init_logging;
use crate::types::{from_js_value, to_js_value};

#[derive(Debug, PartialEq, Clone)]
#[wasm_bindgen(js_name = "AgentClientConfig")]
pub struct ClientConfig {
    #[wasm_bindgen(js_name = "loggingEnabled")]
    pub logging_enabled: bool,

    #[wasm_bindgen(skip)]
    pub logging_min_level: String,

    #[wasm_bindgen(skip)]
    pub api_key: Option<String>,
}

#[wasm_bindgen(js_class = "AgentClientConfig")]
impl ClientConfig {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Default::default()
    }

    #[wasm_bindgen(getter, js_name = "loggingMinLevel")]
    pub fn logging_min_level(&self) -> String {
        self.logging_min_level.clone()
    }

    #[wasm_bindgen(setter, js_name = "loggingMinLevel")]
    pub fn set_logging_min_level(&mut self, level: String) {
        self.logging_min_level = level
    }

    /// Sent as `x-api-key` with every request.
    #[wasm_bindgen(setter, js_name = "apiKey")]
    pub fn set_api_key(&mut self, api_key: Option<String>) {
        self.api_key = api_key
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            logging_enabled: true,
            logging_min_level: "info".to_string(),
            api_key: None,
        }
    }
}

#[wasm_bindgen(js_name = "AgentClient")]
pub struct Client {
    client: CoreClient,
}

#[wasm_bindgen(js_class = "AgentClient")]
impl Client {
    /// Connects to the agent service. The API URL and assistant are taken from the query
    /// string of the current page, then from `env` (the payload of `/api/env`), then from
    /// the defaults.
    pub fn init(
        delegate: Option<JSClientDelegate>,
        env: JsValue,
        config: Option<ClientConfig>,
    ) -> Result<Client> {
        let config = config.unwrap_or_default();

        if config.logging_enabled {
            init_logging(Some(config.logging_min_level.clone()));
        }

        let env = if env.is_undefined() || env.is_null() {
            None
        } else {
            Some(from_js_value::<EnvDefaults>(env)?)
        };

        let connection =
            ConnectionConfig::resolve(&current_query(), env.as_ref())?.with_api_key(config.api_key);

        info!(
            "Using assistant '{}' at {}.",
            connection.assistant_id, connection.api_url
        );

        let client = CoreClient::builder()
            .set_config(connection)
            .set_delegate(
                delegate.map(|js| Box::new(ClientEventDelegate::new(js)) as Box<dyn ClientDelegate>),
            )
            .build()
            .map_err(WasmError::from)?;

        Ok(Client { client })
    }

    #[wasm_bindgen(getter, js_name = "apiUrl")]
    pub fn api_url(&self) -> String {
        self.client.config().api_url.to_string()
    }

    #[wasm_bindgen(getter, js_name = "assistantId")]
    pub fn assistant_id(&self) -> String {
        self.client.config().assistant_id
    }

    /// Points the client at another service or assistant. Loaded threads are discarded if
    /// either changed.
    #[wasm_bindgen(js_name = "updateConfig")]
    pub fn update_config(&self, api_url: &str, assistant_id: String) -> Result<()> {
        let current = self.client.config();
        let config = ConnectionConfig::new(api_url, assistant_id)?
            .with_api_key(current.api_key().map(ToString::to_string));
        self.client.update_config(config);
        Ok(())
    }

    /// Fetches the threads of the current assistant. Yields an empty list if the service
    /// can't be reached.
    #[wasm_bindgen(js_name = "loadThreads")]
    pub async fn load_threads(&self) -> Result<JsValue> {
        to_js_value(&self.client.threads.load_threads().await)
    }

    /// The threads loaded last.
    pub fn threads(&self) -> Result<JsValue> {
        to_js_value(&self.client.threads.threads())
    }

    #[wasm_bindgen(getter, js_name = "isLoadingThreads")]
    pub fn is_loading_threads(&self) -> bool {
        self.client.threads.is_loading()
    }

    /// Creates an assistant for the default graph unless one with `assistantId` exists.
    #[wasm_bindgen(js_name = "createAssistant")]
    pub async fn create_assistant(&self, assistant_id: Option<String>) -> Result<JsValue> {
        let assistant = self
            .client
            .assistants
            .create_assistant(assistant_id)
            .await
            .map_err(WasmError::from)?;
        to_js_value(&assistant)
    }
}

fn current_query() -> QueryOverrides {
    web_sys::window()
        .and_then(|window| window.location().search().ok())
        .map(|search| QueryOverrides::from_query(&search))
        .unwrap_or_default()
}
