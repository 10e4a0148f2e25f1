//! Drag and drop events delivered to the list.

use saved_requests_domain::DataTransfer;

/// Phase of a drag over the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragEventKind {
    /// The pointer moves over the list while dragging.
    DragOver,
    /// The pointer leaves the list while dragging.
    DragLeave,
    /// The item is released over the list.
    Drop,
}

/// A drag event with its transfer data.
///
/// Handlers call [`DragEvent::prevent_default`] when they accept the event,
/// which tells the host the list is a valid drop target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragEvent {
    /// Phase of the drag.
    pub kind: DragEventKind,
    /// Data carried by the drag.
    pub transfer: DataTransfer,
    default_prevented: bool,
}

impl DragEvent {
    /// Creates an event that has not been handled yet.
    #[must_use]
    pub const fn new(kind: DragEventKind, transfer: DataTransfer) -> Self {
        Self {
            kind,
            transfer,
            default_prevented: false,
        }
    }

    /// Marks the event as handled by the list.
    pub const fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Whether a handler accepted the event.
    #[must_use]
    pub const fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}
