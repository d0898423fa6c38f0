// agent-chat/agent-chat-core
//
// Copyright: 2025, Agent Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use failing_file::FailingFile;
pub use mock_app_dependencies::MockAppDependencies;
pub use recording_delegate::{RecordingClientDelegate, RecordingComposerDelegate};

pub use crate::app::deps::{AppContext, AppDependencies};

mod mock_app_dependencies;
