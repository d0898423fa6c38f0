// agent-chat/agent-chat-sdk-js
//
// Copyright: 2025, Agent Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Promise;
use serde_json::Value;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;
use web_sys::{ClipboardEvent, HtmlElement, HtmlInputElement};

use agent_chat_core::dtos::ContentBlock;
use agent_chat_core::services::AttachmentComposer;
use agent_chat_core::ComposerDelegate;

use crate::delegate::{ComposerEventDelegate, JSComposerDelegate};
use crate::error::Result;
use crate::listeners::{capture_paste, CaptureListeners};
use crate::types::{files_from_list, from_js_value, to_js_value, IngestResult};

#[wasm_bindgen(typescript_custom_section)]
const TS_APPEND_CONTENT: &'static str = r#"
export type ContentBlock = {
    type: "image" | "file";
    mimeType: string;
    data: string;
    metadata: { filename?: string; name?: string; size?: number; lastModified?: number; [key: string]: unknown };
}
"#;

/// The attachments of the message that is being composed.
#[wasm_bindgen(js_name = "AttachmentComposer")]
pub struct Composer {
    inner: Rc<AttachmentComposer>,
    listeners: RefCell<Option<CaptureListeners>>,
}

#[wasm_bindgen(js_class = "AttachmentComposer")]
impl Composer {
    /// Creates a composer, optionally seeded with blocks of a restored draft. Throws if one of
    /// `initialBlocks` is not a valid content block.
    #[wasm_bindgen(constructor)]
    pub fn new(
        delegate: Option<JSComposerDelegate>,
        initial_blocks: Option<Vec<JsValue>>,
    ) -> Result<Composer> {
        let blocks = parse_blocks(initial_blocks.unwrap_or_default())?;
        let delegate = delegate
            .map(|js| Box::new(ComposerEventDelegate::new(js)) as Box<dyn ComposerDelegate>);

        Ok(Composer {
            inner: Rc::new(AttachmentComposer::new(blocks, delegate)),
            listeners: RefCell::new(None),
        })
    }

    /// Listens for drags, drops and pastes on `target`. Listeners registered on a previous
    /// target are removed first.
    pub fn attach(&self, target: &HtmlElement) -> Result<(), JsValue> {
        self.detach();
        let listeners = CaptureListeners::register(target, self.inner.clone())?;
        self.listeners.replace(Some(listeners));
        Ok(())
    }

    pub fn detach(&self) {
        self.listeners.replace(None);
    }

    /// Attaches the files selected in `input`. The selection is cleared so that the same file
    /// can be picked again.
    #[wasm_bindgen(js_name = "handleFileSelection")]
    pub fn handle_file_selection(&self, input: &HtmlInputElement) -> Promise {
        let files = files_from_list(input.files());
        input.set_value("");

        let composer = self.inner.clone();
        future_to_promise(async move {
            let report = composer.handle_file_selection(files).await;
            Ok(IngestResult::from(report).into())
        })
    }

    /// For use as an `onpaste` handler if the composer isn't attached. Returns true if the
    /// paste carried files, which suppresses the default paste.
    #[wasm_bindgen(js_name = "handlePaste")]
    pub fn handle_paste(&self, event: &ClipboardEvent) -> bool {
        capture_paste(&self.inner, event)
    }

    /// Returns false if `idx` is out of range.
    #[wasm_bindgen(js_name = "removeBlock")]
    pub fn remove_block(&self, idx: usize) -> bool {
        self.inner.remove_block(idx).is_some()
    }

    pub fn reset(&self) {
        self.inner.reset()
    }

    pub fn blocks(&self) -> Result<JsValue> {
        to_js_value(&self.inner.blocks())
    }

    #[wasm_bindgen(js_name = "setBlocks")]
    pub fn set_blocks(&self, blocks: Vec<JsValue>) -> Result<()> {
        self.inner.set_blocks(parse_blocks(blocks)?);
        Ok(())
    }

    #[wasm_bindgen(getter, js_name = "isDragging")]
    pub fn is_dragging(&self) -> bool {
        self.inner.is_dragging()
    }

    #[wasm_bindgen(getter)]
    pub fn length(&self) -> usize {
        self.inner.len()
    }
}

fn parse_blocks(values: Vec<JsValue>) -> Result<Vec<ContentBlock>> {
    values
        .into_iter()
        .map(|value| Ok(ContentBlock::try_from(from_js_value::<Value>(value)?)?))
        .collect()
}
