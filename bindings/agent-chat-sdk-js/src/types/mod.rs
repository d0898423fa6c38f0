// agent-chat/agent-chat-sdk-js
//
// Copyright: 2025, Agent Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use browser_file::{clipboard_items, files_from_list, BrowserFile};
pub use ingest_result::IngestResult;
pub use js_value_ext::{from_js_value, to_js_value};

mod browser_file;
mod ingest_result;
mod js_value_ext;
