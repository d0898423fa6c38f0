// agent-chat/agent-chat-core
//
// Copyright: 2025, Agent Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use parking_lot::{Mutex, RwLock};
use strum_macros::Display;
use tracing::{debug, info, warn};

use crate::domain::attachments::models::{
    files_from_clipboard, ClipboardItem, ContentBlock, DragEvent, DragState, FileReadError,
    PendingFile,
};
use crate::domain::attachments::services::{encode_file, partition_duplicates};
use crate::util::join_all;
use crate::{ComposerDelegate, ComposerEvent};

/// The input surface a batch of files arrived through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum CaptureSource {
    Selection,
    Drop,
    Paste,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct IngestReport {
    /// Number of blocks appended to the session.
    pub appended: usize,
    /// Names of the files rejected as duplicates.
    pub duplicates: Vec<String>,
    /// Files that could not be read.
    pub failures: Vec<FileReadError>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PasteOutcome {
    /// The clipboard held no files. The platform's default paste should proceed.
    Ignored,
    /// The clipboard held files which were ingested. The default paste must be suppressed.
    Handled(IngestReport),
}

impl PasteOutcome {
    pub fn suppresses_default(&self) -> bool {
        matches!(self, PasteOutcome::Handled(_))
    }
}

/// Collects the attachments of the message that is currently being composed.
///
/// Files arrive from a file picker, a drop or a paste. Each batch is checked for duplicates
/// against the blocks present when the batch starts, the remaining files are read concurrently
/// and the resulting blocks are appended in one go, in the order the files were supplied. Files
/// that fail to read are skipped and reported individually.
///
/// Two batches running at the same time both check against their own snapshot, so they may
/// attach the same file twice.
pub struct AttachmentComposer {
    blocks: RwLock<Vec<ContentBlock>>,
    drag_state: Mutex<DragState>,
    delegate: Option<Box<dyn ComposerDelegate>>,
}

impl AttachmentComposer {
    pub fn new(
        initial_blocks: Vec<ContentBlock>,
        delegate: Option<Box<dyn ComposerDelegate>>,
    ) -> Self {
        Self {
            blocks: RwLock::new(initial_blocks),
            drag_state: Default::default(),
            delegate,
        }
    }

    pub fn blocks(&self) -> Vec<ContentBlock> {
        self.blocks.read().clone()
    }

    pub fn len(&self) -> usize {
        self.blocks.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.read().is_empty()
    }

    /// Replaces the whole session, e.g. when restoring a draft.
    pub fn set_blocks(&self, blocks: Vec<ContentBlock>) {
        *self.blocks.write() = blocks;
        self.dispatch(ComposerEvent::BlocksChanged);
    }

    /// Removes the block at `idx`. Returns `None` and leaves the session untouched if `idx` is
    /// out of range.
    pub fn remove_block(&self, idx: usize) -> Option<ContentBlock> {
        let removed = {
            let mut blocks = self.blocks.write();
            (idx < blocks.len()).then(|| blocks.remove(idx))
        };

        match removed {
            Some(block) => {
                self.dispatch(ComposerEvent::BlocksChanged);
                Some(block)
            }
            None => {
                debug!("Ignoring removal of attachment at out-of-range index {idx}.");
                None
            }
        }
    }

    pub fn reset(&self) {
        let was_empty = {
            let mut blocks = self.blocks.write();
            let was_empty = blocks.is_empty();
            blocks.clear();
            was_empty
        };

        if !was_empty {
            self.dispatch(ComposerEvent::BlocksChanged);
        }
    }

    pub fn drag_state(&self) -> DragState {
        *self.drag_state.lock()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_state.lock().is_dragging()
    }

    /// Feeds a drag notification into the drag state and returns the new state.
    pub fn apply_drag_event(&self, event: DragEvent) -> DragState {
        let (was_dragging, state) = {
            let mut state = self.drag_state.lock();
            let was_dragging = state.is_dragging();
            *state = state.reduce(event);
            (was_dragging, *state)
        };

        if was_dragging != state.is_dragging() {
            self.dispatch(ComposerEvent::DragStateChanged {
                is_dragging: state.is_dragging(),
            });
        }

        state
    }

    /// Attaches files chosen with a file picker.
    pub async fn handle_file_selection<F: PendingFile>(&self, files: Vec<F>) -> IngestReport {
        self.ingest(CaptureSource::Selection, files).await
    }

    /// Attaches dropped files. Ends the drag regardless of the current nesting depth.
    pub async fn handle_drop<F: PendingFile>(&self, files: Vec<F>) -> IngestReport {
        self.apply_drag_event(DragEvent::Drop);
        self.ingest(CaptureSource::Drop, files).await
    }

    /// Attaches the files of a paste. Pastes without files are ignored so that text pastes keep
    /// their default behavior.
    pub async fn handle_paste<F: PendingFile>(&self, items: Vec<ClipboardItem<F>>) -> PasteOutcome {
        let files = files_from_clipboard(items);

        if files.is_empty() {
            return PasteOutcome::Ignored;
        }

        PasteOutcome::Handled(self.ingest(CaptureSource::Paste, files).await)
    }

    pub async fn ingest<F: PendingFile>(&self, source: CaptureSource, files: Vec<F>) -> IngestReport {
        if files.is_empty() {
            return IngestReport::default();
        }

        let snapshot = self.blocks();
        let partitioned = partition_duplicates(files, &snapshot);
        let mut report = IngestReport::default();

        if !partitioned.duplicates.is_empty() {
            report.duplicates = partitioned.duplicates.iter().map(|f| f.name()).collect();
            warn!(
                "Rejected {} duplicate file(s) from {source}: {:?}",
                report.duplicates.len(),
                report.duplicates
            );
            self.dispatch(ComposerEvent::DuplicateFilesRejected {
                file_names: report.duplicates.clone(),
            });
        }

        let results = join_all(partitioned.unique.iter().map(|file| encode_file(file))).await;
        let mut new_blocks = Vec::with_capacity(results.len());

        for result in results {
            match result {
                Ok(block) => new_blocks.push(block),
                Err(error) => {
                    warn!("Skipping attachment from {source}. {error}");
                    report.failures.push(error);
                }
            }
        }

        report.appended = new_blocks.len();

        if !new_blocks.is_empty() {
            self.blocks.write().extend(new_blocks);
            info!("Attached {} file(s) from {source}.", report.appended);
            self.dispatch(ComposerEvent::BlocksChanged);
        }

        for error in report.failures.iter().cloned() {
            self.dispatch(ComposerEvent::FileReadFailed { error });
        }

        report
    }

    fn dispatch(&self, event: ComposerEvent) {
        let Some(ref delegate) = self.delegate else {
            return;
        };
        delegate.handle_event(event)
    }
}
