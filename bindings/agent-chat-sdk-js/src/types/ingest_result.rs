// agent-chat/agent-chat-sdk-js
//
// Copyright: 2025, Agent Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use js_sys::Array;
use wasm_bindgen::prelude::*;

use agent_chat_core::services::IngestReport;

/// The outcome of attaching a batch of files.
#[wasm_bindgen]
pub struct IngestResult {
    report: IngestReport,
}

#[wasm_bindgen]
impl IngestResult {
    #[wasm_bindgen(getter)]
    pub fn appended(&self) -> u32 {
        self.report.appended as u32
    }

    /// Names of the files that were attached already.
    #[wasm_bindgen(getter)]
    pub fn duplicates(&self) -> Array {
        self.report
            .duplicates
            .iter()
            .map(|name| JsValue::from_str(name))
            .collect()
    }

    /// Messages describing the files that could not be read.
    #[wasm_bindgen(getter)]
    pub fn failures(&self) -> Array {
        self.report
            .failures
            .iter()
            .map(|error| JsValue::from(error.to_string()))
            .collect()
    }
}

impl From<IngestReport> for IngestResult {
    fn from(report: IngestReport) -> Self {
        Self { report }
    }
}
