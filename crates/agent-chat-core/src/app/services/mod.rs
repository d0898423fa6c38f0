// agent-chat/agent-chat-core
//
// Copyright: 2025, Agent Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use assistants_service::AssistantsService;
pub use attachment_composer::{AttachmentComposer, CaptureSource, IngestReport, PasteOutcome};
pub use threads_service::ThreadsService;

mod assistants_service;
mod attachment_composer;
mod threads_service;
