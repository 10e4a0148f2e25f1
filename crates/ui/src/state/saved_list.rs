//! State of the saved requests list.
//!
//! The list owns the rows, the row selection and both ends of drag and drop:
//! rows can be picked up to be dropped elsewhere, and requests dragged from
//! other lists (for example the history) can be dropped onto it. Gestures
//! come out as [`ListEvent`]s for the panel to act on.

use std::collections::BTreeSet;

use saved_requests_domain::{
    DataTransfer, DropEffect, ListType, NavigationTarget, SavedRequestRecord,
};

use crate::dnd::{DragEvent, DragEventKind};

/// Something the list asks its owner to do.
#[derive(Debug, Clone, PartialEq)]
pub enum ListEvent {
    /// Store a request dropped onto the list as a new saved request.
    SaveRequest(SavedRequestRecord),
    /// Show the details of a row.
    Details(SavedRequestRecord),
    /// Open a row in the request editor of the host.
    Navigate(NavigationTarget),
    /// The list scrolled near its end and wants the next page.
    LoadNext,
}

/// Presentation data of one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    /// HTTP method.
    pub method: String,
    /// Request URL.
    pub url: String,
    /// Display name.
    pub name: String,
    /// Whether the row is selected.
    pub selected: bool,
}

/// The saved requests list.
#[derive(Debug, Default)]
pub struct SavedPanelList {
    requests: Vec<SavedRequestRecord>,
    selected: BTreeSet<usize>,
    list_type: ListType,
    draggable_enabled: bool,
    dnd_attached: bool,
    registrations: usize,
    drop_target: bool,
}

impl SavedPanelList {
    /// Creates an empty list. Drag handlers are attached on [`Self::connect`].
    #[must_use]
    pub fn new(list_type: ListType, draggable_enabled: bool) -> Self {
        Self {
            list_type,
            draggable_enabled,
            ..Self::default()
        }
    }

    // --- Data ---

    /// Replaces the rows.
    ///
    /// Selected rows whose identifier is still listed stay selected. A
    /// selected row without an identifier stays selected when the row at
    /// the same index has no identifier either.
    pub fn set_requests(&mut self, requests: Vec<SavedRequestRecord>) {
        let kept: BTreeSet<String> = self
            .selected_items()
            .into_iter()
            .filter_map(|record| record.id)
            .collect();
        let unsaved: BTreeSet<usize> = self
            .selected
            .iter()
            .copied()
            .filter(|index| self.requests.get(*index).is_some_and(|r| r.id.is_none()))
            .collect();
        self.selected = requests
            .iter()
            .enumerate()
            .filter(|(index, record)| match record.id.as_ref() {
                Some(id) => kept.contains(id),
                None => unsaved.contains(index),
            })
            .map(|(index, _)| index)
            .collect();
        self.requests = requests;
    }

    /// Replaces listed rows with updated copies, matched by identifier.
    pub fn replace_records(&mut self, updated: &[SavedRequestRecord]) {
        for record in updated {
            if let Some(row) = self
                .requests
                .iter_mut()
                .find(|row| row.id.is_some() && row.id == record.id)
            {
                *row = record.clone();
            }
        }
    }

    /// The listed records.
    #[must_use]
    pub fn requests(&self) -> &[SavedRequestRecord] {
        &self.requests
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    /// Whether the list has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    // --- Selection ---

    /// Toggles the selection of a row. Out of range indexes are ignored.
    pub fn toggle_selection(&mut self, index: usize) {
        if index >= self.requests.len() {
            return;
        }
        if !self.selected.remove(&index) {
            self.selected.insert(index);
        }
    }

    /// Selects every row.
    pub fn select_all(&mut self) {
        self.selected = (0..self.requests.len()).collect();
    }

    /// Deselects every row.
    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// Whether any row is selected.
    #[must_use]
    pub fn has_selection(&self) -> bool {
        !self.selected.is_empty()
    }

    /// Selected records, in list order.
    #[must_use]
    pub fn selected_items(&self) -> Vec<SavedRequestRecord> {
        self.selected
            .iter()
            .filter_map(|index| self.requests.get(*index).cloned())
            .collect()
    }

    // --- Presentation ---

    /// Rows for rendering.
    #[must_use]
    pub fn rows(&self) -> Vec<ListRow> {
        self.requests
            .iter()
            .enumerate()
            .map(|(index, record)| ListRow {
                method: record.method.clone(),
                url: record.url.clone(),
                name: record.display_name().to_string(),
                selected: self.selected.contains(&index),
            })
            .collect()
    }

    /// Row density.
    #[must_use]
    pub const fn list_type(&self) -> ListType {
        self.list_type
    }

    /// Changes the row density.
    pub const fn set_list_type(&mut self, list_type: ListType) {
        self.list_type = list_type;
    }

    /// Row height in pixels for the current density.
    #[must_use]
    pub const fn item_height(&self) -> u32 {
        self.list_type.item_height()
    }

    /// Whether the list is highlighted as a drop target.
    #[must_use]
    pub const fn is_drop_target(&self) -> bool {
        self.drop_target
    }

    // --- Listener lifecycle ---

    /// Called when the list is shown. Attaches the drag handlers if enabled.
    pub fn connect(&mut self) {
        if self.draggable_enabled {
            self.attach_dnd();
        }
    }

    /// Called when the list is hidden. Detaches the drag handlers.
    pub fn disconnect(&mut self) {
        self.detach_dnd();
    }

    /// Turns drag and drop on or off.
    pub fn set_draggable_enabled(&mut self, enabled: bool) {
        self.draggable_enabled = enabled;
        if enabled {
            self.attach_dnd();
        } else {
            self.detach_dnd();
        }
    }

    /// Whether drag and drop is enabled.
    #[must_use]
    pub const fn draggable_enabled(&self) -> bool {
        self.draggable_enabled
    }

    /// Whether the drag handlers are attached.
    #[must_use]
    pub const fn dnd_attached(&self) -> bool {
        self.dnd_attached
    }

    /// How many times the drag handlers were attached.
    #[must_use]
    pub const fn listener_registrations(&self) -> usize {
        self.registrations
    }

    fn attach_dnd(&mut self) {
        if self.dnd_attached {
            return;
        }
        self.dnd_attached = true;
        self.registrations += 1;
    }

    fn detach_dnd(&mut self) {
        if !self.dnd_attached {
            return;
        }
        self.dnd_attached = false;
        self.drop_target = false;
    }

    /// Delivers a drag event to the handlers, if they are attached.
    pub fn handle_drag_event(&mut self, event: &mut DragEvent) -> Option<ListEvent> {
        if !self.dnd_attached {
            return None;
        }
        match event.kind {
            DragEventKind::DragOver => {
                self.drag_over(event);
                None
            }
            DragEventKind::DragLeave => {
                self.drag_leave(event);
                None
            }
            DragEventKind::Drop => self.drop(event),
        }
    }

    // --- Drag and drop ---

    /// Starts dragging a row, filling `transfer` with the row's markers.
    ///
    /// Returns `false` when dragging is disabled or the index is out of range.
    pub fn drag_start(&self, index: usize, transfer: &mut DataTransfer) -> bool {
        if !self.draggable_enabled {
            return false;
        }
        let Some(record) = self.requests.get(index) else {
            return false;
        };
        match DataTransfer::from_saved_record(record) {
            Ok(source) => {
                *transfer = source;
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "Unable to start dragging a request");
                false
            }
        }
    }

    fn accepts(&self, event: &DragEvent) -> bool {
        self.draggable_enabled && event.transfer.accepts_saved_drop()
    }

    /// Highlights the list when the drag carries a droppable request.
    pub fn drag_over(&mut self, event: &mut DragEvent) {
        if !self.accepts(event) {
            return;
        }
        event.transfer.drop_effect = DropEffect::Copy;
        event.prevent_default();
        self.drop_target = true;
    }

    /// Removes the highlight when a droppable drag leaves the list.
    pub fn drag_leave(&mut self, event: &mut DragEvent) {
        if !self.accepts(event) {
            return;
        }
        event.prevent_default();
        self.drop_target = false;
    }

    /// Accepts a dropped request.
    ///
    /// The request is cleaned up as a new record and handed out as
    /// [`ListEvent::SaveRequest`]. Empty or unreadable payloads are ignored.
    pub fn drop(&mut self, event: &mut DragEvent) -> Option<ListEvent> {
        if !self.accepts(event) {
            return None;
        }
        event.prevent_default();
        self.drop_target = false;

        match event.transfer.request_object() {
            Ok(Some(record)) => Some(ListEvent::SaveRequest(record.into_new_record())),
            Ok(None) => {
                tracing::debug!("Ignoring drop without request data");
                None
            }
            Err(e) => {
                tracing::debug!(error = %e, "Ignoring drop with unreadable request data");
                None
            }
        }
    }

    // --- Other gestures ---

    /// Asks for the details of a row.
    #[must_use]
    pub fn request_details(&self, index: usize) -> Option<ListEvent> {
        self.requests.get(index).cloned().map(ListEvent::Details)
    }

    /// Asks to open a row in the host.
    #[must_use]
    pub fn navigate_item(&self, index: usize) -> Option<ListEvent> {
        self.requests
            .get(index)
            .map(|record| ListEvent::Navigate(NavigationTarget::saved_request(record.id_or_empty())))
    }

    /// The list scrolled near its end.
    #[must_use]
    pub fn threshold_reached(&self) -> Option<ListEvent> {
        (!self.requests.is_empty()).then_some(ListEvent::LoadNext)
    }
}
