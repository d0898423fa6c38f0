// agent-chat/agent-chat-core
//
// Copyright: 2025, Agent Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

/// A drag notification from the drop target. Only notifications for transfers that carry
/// files are fed into [`DragState::reduce`], see [`carries_files`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragEvent {
    Enter,
    Leave,
    Drop,
    End,
}

/// Whether a file is being dragged over the drop target.
///
/// Enter/leave notifications fire once per nested element the pointer crosses, so the state
/// keeps the nesting depth and only returns to `Idle` once every enter has been balanced by a
/// leave. A drop or a drag end always returns to `Idle`, which also recovers from notifications
/// the platform never delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        depth: u32,
    },
}

impl DragState {
    #[must_use]
    pub fn reduce(self, event: DragEvent) -> Self {
        match (self, event) {
            (_, DragEvent::Drop | DragEvent::End) => Self::Idle,
            (Self::Idle, DragEvent::Enter) => Self::Dragging { depth: 1 },
            (Self::Dragging { depth }, DragEvent::Enter) => Self::Dragging {
                depth: depth.saturating_add(1),
            },
            (Self::Dragging { depth }, DragEvent::Leave) if depth > 1 => {
                Self::Dragging { depth: depth - 1 }
            }
            (Self::Dragging { .. } | Self::Idle, DragEvent::Leave) => Self::Idle,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    pub fn depth(&self) -> u32 {
        match self {
            Self::Idle => 0,
            Self::Dragging { depth } => *depth,
        }
    }
}

/// Returns true if the transfer's type list announces files.
pub fn carries_files<S: AsRef<str>>(types: impl IntoIterator<Item = S>) -> bool {
    types.into_iter().any(|t| t.as_ref() == "Files")
}
