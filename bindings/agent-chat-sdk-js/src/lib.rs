// agent-chat/agent-chat-sdk-js
//
// Copyright: 2025, Agent Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use wasm_bindgen::prelude::*;

mod client;
mod composer;
mod delegate;
mod error;
mod listeners;
mod log;
mod types;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}
