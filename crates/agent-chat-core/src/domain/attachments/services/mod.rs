// agent-chat/agent-chat-core
//
// Copyright: 2025, Agent Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use duplicate_policy::{is_duplicate, partition_duplicates, PartitionedFiles};
pub use file_encoder::encode_file;

mod duplicate_policy;
mod file_encoder;
