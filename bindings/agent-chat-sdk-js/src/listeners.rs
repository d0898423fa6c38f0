// agent-chat/agent-chat-sdk-js
//
// Copyright: 2025, Agent Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::rc::Rc;

use tracing::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{ClipboardEvent, DragEvent, HtmlElement};

use agent_chat_core::dtos::{self, carries_files, files_from_clipboard};
use agent_chat_core::services::{AttachmentComposer, CaptureSource};

use crate::error::js_error_message;
use crate::types::{clipboard_items, files_from_list};

type DragHandler = Closure<dyn FnMut(DragEvent)>;

/// The drag, drop and paste listeners of one drop target. Dropping the value removes them.
pub struct CaptureListeners {
    target: HtmlElement,
    drag_handlers: Vec<(&'static str, DragHandler)>,
    paste_handler: Closure<dyn FnMut(ClipboardEvent)>,
}

impl CaptureListeners {
    pub fn register(
        target: &HtmlElement,
        composer: Rc<AttachmentComposer>,
    ) -> Result<Self, JsValue> {
        let drag_handlers = vec![
            ("dragenter", drag_transition(&composer, dtos::DragEvent::Enter)),
            ("dragleave", drag_transition(&composer, dtos::DragEvent::Leave)),
            ("dragover", drag_over()),
            ("drop", drop_files(&composer)),
            ("dragend", drag_end(&composer)),
        ];

        let paste_composer = composer.clone();
        let paste_handler = Closure::wrap(Box::new(move |event: ClipboardEvent| {
            capture_paste(&paste_composer, &event);
        }) as Box<dyn FnMut(ClipboardEvent)>);

        for (name, handler) in drag_handlers.iter() {
            target.add_event_listener_with_callback(name, handler.as_ref().unchecked_ref())?;
        }
        target.add_event_listener_with_callback(
            "paste",
            paste_handler.as_ref().unchecked_ref(),
        )?;

        debug!("Registered attachment capture listeners.");

        Ok(Self {
            target: target.clone(),
            drag_handlers,
            paste_handler,
        })
    }
}

impl Drop for CaptureListeners {
    fn drop(&mut self) {
        for (name, handler) in self.drag_handlers.iter() {
            if let Err(err) = self
                .target
                .remove_event_listener_with_callback(name, handler.as_ref().unchecked_ref())
            {
                warn!("Failed to remove {name} listener. {}", js_error_message(&err));
            }
        }

        if let Err(err) = self.target.remove_event_listener_with_callback(
            "paste",
            self.paste_handler.as_ref().unchecked_ref(),
        ) {
            warn!("Failed to remove paste listener. {}", js_error_message(&err));
        }

        debug!("Removed attachment capture listeners.");
    }
}

/// Takes the files of a paste. Returns true if the paste carried files, in which case the
/// default paste has been suppressed and the files are being attached.
pub fn capture_paste(composer: &Rc<AttachmentComposer>, event: &ClipboardEvent) -> bool {
    let files = files_from_clipboard(clipboard_items(event.clipboard_data()));

    if files.is_empty() {
        return false;
    }

    event.prevent_default();

    let composer = composer.clone();
    spawn_local(async move {
        composer.ingest(CaptureSource::Paste, files).await;
    });

    true
}

fn transfers_files(event: &DragEvent) -> bool {
    event
        .data_transfer()
        .map(|transfer| carries_files(transfer.types().iter().filter_map(|t| t.as_string())))
        .unwrap_or(false)
}

fn drag_transition(composer: &Rc<AttachmentComposer>, transition: dtos::DragEvent) -> DragHandler {
    let composer = composer.clone();

    Closure::wrap(Box::new(move |event: DragEvent| {
        if !transfers_files(&event) {
            return;
        }
        event.prevent_default();
        composer.apply_drag_event(transition);
    }) as Box<dyn FnMut(DragEvent)>)
}

// Without this the browser refuses the drop.
fn drag_over() -> DragHandler {
    Closure::wrap(Box::new(move |event: DragEvent| {
        if transfers_files(&event) {
            event.prevent_default();
        }
    }) as Box<dyn FnMut(DragEvent)>)
}

fn drag_end(composer: &Rc<AttachmentComposer>) -> DragHandler {
    let composer = composer.clone();

    Closure::wrap(Box::new(move |_: DragEvent| {
        composer.apply_drag_event(dtos::DragEvent::End);
    }) as Box<dyn FnMut(DragEvent)>)
}

fn drop_files(composer: &Rc<AttachmentComposer>) -> DragHandler {
    let composer = composer.clone();

    Closure::wrap(Box::new(move |event: DragEvent| {
        if !transfers_files(&event) {
            return;
        }
        event.prevent_default();

        // The drag ends with the drop, not once the files have been read.
        composer.apply_drag_event(dtos::DragEvent::Drop);

        let files = files_from_list(event.data_transfer().and_then(|t| t.files()));
        let composer = composer.clone();
        spawn_local(async move {
            composer.ingest(CaptureSource::Drop, files).await;
        });
    }) as Box<dyn FnMut(DragEvent)>)
}
