// agent-chat/agent-chat-sdk-js
//
// Copyright: 2025, Agent Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;
use js_sys::Uint8Array;
use wasm_bindgen_futures::JsFuture;
use web_sys::{DataTransfer, File, FileList};

use agent_chat_core::dtos::{ClipboardItem, FileReadError, PendingFile};

use crate::error::js_error_message;

/// A `File` handed over by an `<input type="file">`, a drop or a paste.
pub struct BrowserFile {
    file: File,
}

impl BrowserFile {
    pub fn new(file: File) -> Self {
        Self { file }
    }
}

#[async_trait(?Send)]
impl PendingFile for BrowserFile {
    fn name(&self) -> String {
        self.file.name()
    }

    fn media_type(&self) -> String {
        self.file.type_()
    }

    fn size(&self) -> u64 {
        self.file.size() as u64
    }

    fn last_modified(&self) -> i64 {
        self.file.last_modified() as i64
    }

    async fn read_bytes(&self) -> Result<Vec<u8>, FileReadError> {
        let buffer = JsFuture::from(self.file.array_buffer())
            .await
            .map_err(|err| FileReadError::new(self.file.name(), js_error_message(&err)))?;
        Ok(Uint8Array::new(&buffer).to_vec())
    }
}

pub fn files_from_list(list: Option<FileList>) -> Vec<BrowserFile> {
    let Some(list) = list else {
        return vec![];
    };

    (0..list.length())
        .filter_map(|idx| list.get(idx))
        .map(BrowserFile::new)
        .collect()
}

/// Converts the items of a clipboard transfer. File items the browser fails to materialise are
/// kept as empty file entries.
pub fn clipboard_items(transfer: Option<DataTransfer>) -> Vec<ClipboardItem<BrowserFile>> {
    let Some(transfer) = transfer else {
        return vec![];
    };
    let items = transfer.items();

    (0..items.length())
        .filter_map(|idx| items.get(idx))
        .map(|item| {
            if item.kind() != "file" {
                return ClipboardItem::Text;
            }
            ClipboardItem::File(item.get_as_file().ok().flatten().map(BrowserFile::new))
        })
        .collect()
}
