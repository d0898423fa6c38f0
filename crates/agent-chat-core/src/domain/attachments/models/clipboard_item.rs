// agent-chat/agent-chat-core
//
// Copyright: 2025, Agent Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

/// One entry of a clipboard paste.
#[derive(Debug, Clone, PartialEq)]
pub enum ClipboardItem<F> {
    /// An item of kind `file`. Browsers may fail to materialize the file, hence the `Option`.
    File(Option<F>),
    /// An item of kind `string`.
    Text,
}

/// Extracts the files of a paste. An empty result means the paste should be left to the
/// platform's default text handling.
pub fn files_from_clipboard<F>(items: impl IntoIterator<Item = ClipboardItem<F>>) -> Vec<F> {
    items
        .into_iter()
        .filter_map(|item| match item {
            ClipboardItem::File(file) => file,
            ClipboardItem::Text => None,
        })
        .collect()
}
