// agent-chat/agent-chat-sdk-js
//
// Copyright: 2025, Agent Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use tracing::warn;
use wasm_bindgen::prelude::*;

use agent_chat_core::{ClientDelegate, ClientEvent, ComposerDelegate, ComposerEvent};

#[wasm_bindgen(typescript_custom_section)]
const TS_APPEND_CONTENT: &'static str = r#"
export interface AttachmentComposerDelegate {
    /// Attachments were added, removed or replaced.
    blocksChanged(): void

    /// A file drag entered or left the drop target.
    dragStateChanged(isDragging: boolean): void

    /// Files were not attached because they were attached already. `message` is suitable
    /// for a toast.
    duplicateFilesRejected(fileNames: string[], message: string): void

    /// A file could not be read and was skipped.
    fileReadFailed(fileName: string, message: string): void
}

export interface AgentClientDelegate {
    /// The API URL or the assistant changed.
    configChanged(): void

    /// The list of threads was loaded or cleared.
    threadsChanged(): void
}
"#;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(typescript_type = "AttachmentComposerDelegate")]
    pub type JSComposerDelegate;

    #[wasm_bindgen(method, catch, js_name = "blocksChanged")]
    fn blocks_changed(this: &JSComposerDelegate) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = "dragStateChanged")]
    fn drag_state_changed(this: &JSComposerDelegate, is_dragging: bool) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = "duplicateFilesRejected")]
    fn duplicate_files_rejected(
        this: &JSComposerDelegate,
        file_names: Vec<JsValue>,
        message: String,
    ) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = "fileReadFailed")]
    fn file_read_failed(
        this: &JSComposerDelegate,
        file_name: String,
        message: String,
    ) -> Result<(), JsValue>;

    #[wasm_bindgen(typescript_type = "AgentClientDelegate")]
    pub type JSClientDelegate;

    #[wasm_bindgen(method, catch, js_name = "configChanged")]
    fn config_changed(this: &JSClientDelegate) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = "threadsChanged")]
    fn threads_changed(this: &JSClientDelegate) -> Result<(), JsValue>;
}

pub struct ComposerEventDelegate {
    inner: JSComposerDelegate,
}

impl ComposerEventDelegate {
    pub fn new(js: JSComposerDelegate) -> Self {
        Self { inner: js }
    }

    fn handle_event_throwing(&self, event: ComposerEvent) -> Result<(), JsValue> {
        let message = event.user_message().unwrap_or_default();

        match event {
            ComposerEvent::BlocksChanged => self.inner.blocks_changed(),
            ComposerEvent::DragStateChanged { is_dragging } => {
                self.inner.drag_state_changed(is_dragging)
            }
            ComposerEvent::DuplicateFilesRejected { file_names } => {
                self.inner.duplicate_files_rejected(
                    file_names.into_iter().map(JsValue::from).collect(),
                    message,
                )
            }
            ComposerEvent::FileReadFailed { error } => {
                self.inner.file_read_failed(error.file_name, message)
            }
        }
    }
}

impl ComposerDelegate for ComposerEventDelegate {
    fn handle_event(&self, event: ComposerEvent) {
        if let Err(val) = self.handle_event_throwing(event) {
            warn!(
                "JSComposerDelegate threw an error when handling an event: {:?}",
                val
            )
        }
    }
}

pub struct ClientEventDelegate {
    inner: JSClientDelegate,
}

impl ClientEventDelegate {
    pub fn new(js: JSClientDelegate) -> Self {
        Self { inner: js }
    }
}

impl ClientDelegate for ClientEventDelegate {
    fn handle_event(&self, event: ClientEvent) {
        let result = match event {
            ClientEvent::ConfigChanged => self.inner.config_changed(),
            ClientEvent::ThreadsChanged => self.inner.threads_changed(),
        };

        if let Err(val) = result {
            warn!(
                "JSClientDelegate threw an error when handling an event: {:?}",
                val
            )
        }
    }
}
