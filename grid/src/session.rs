//! Selection and draft-edit state machine.
//!
//! At most one element is selected at a time, tracked by its stable id
//! rather than by reference — the engine's copy-on-write transforms break
//! reference identity on every mutation, the id never does. Property edits
//! are buffered in a draft copy of the selected element and only reach the
//! document when the caller commits the draft through
//! [`FormMatrix::update_element`]. Selecting a different element discards
//! any in-progress draft.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::element::{FieldElement, FieldId, FieldType};
use crate::matrix::FormMatrix;
use crate::registry;

/// Session state: `NoSelection → Selected → Editing → Selected → NoSelection`.
///
/// Each variant carries exactly the context the next transition needs.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SessionState {
    /// Nothing selected. The terminal state of a session.
    #[default]
    NoSelection,
    /// An element is selected; no edit in progress.
    Selected {
        /// Id of the selected element.
        id: FieldId,
    },
    /// The selected element has an in-progress draft of buffered edits.
    Editing {
        /// Id of the selected element.
        id: FieldId,
        /// Working copy shown in the property editor; committed or discarded
        /// as a whole.
        draft: FieldElement,
    },
}

/// The selection/edit session for one editor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditSession {
    state: SessionState,
}

impl EditSession {
    /// Start a session with nothing selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current state.
    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Id of the selected element, in either the selected or editing state.
    #[must_use]
    pub fn selected_id(&self) -> Option<FieldId> {
        match &self.state {
            SessionState::NoSelection => None,
            SessionState::Selected { id } | SessionState::Editing { id, .. } => Some(*id),
        }
    }

    /// The in-progress draft, if an edit is underway.
    #[must_use]
    pub fn draft(&self) -> Option<&FieldElement> {
        match &self.state {
            SessionState::Editing { draft, .. } => Some(draft),
            _ => None,
        }
    }

    /// Select the element with the given id.
    ///
    /// Any unsaved draft of a previously selected element is discarded.
    /// Selecting an id that is not in the matrix deselects instead, so the
    /// session never points at a vanished element.
    pub fn select(&mut self, matrix: &FormMatrix, id: FieldId) {
        if self.selected_id() == Some(id) {
            return;
        }
        self.state = if matrix.find(id).is_some() {
            SessionState::Selected { id }
        } else {
            SessionState::NoSelection
        };
    }

    /// Begin editing the selected element, seeding the draft from its
    /// current state in the matrix. No-op without a selection; keeps an
    /// existing draft if one is already open.
    pub fn begin_edit(&mut self, matrix: &FormMatrix) {
        let SessionState::Selected { id } = self.state else {
            return;
        };
        let Some(element) = matrix.find(id) else {
            self.state = SessionState::NoSelection;
            return;
        };
        self.state = SessionState::Editing { id, draft: element.clone() };
    }

    /// Mutable access to the draft for label/help/required/width edits.
    pub fn draft_mut(&mut self) -> Option<&mut FieldElement> {
        match &mut self.state {
            SessionState::Editing { draft, .. } => Some(draft),
            _ => None,
        }
    }

    /// Change the draft's field type.
    ///
    /// Resets the draft's properties to the new type's defaults — edits that
    /// belonged to the previous type are discarded, never carried across.
    /// A label the user never changed from the old type's default is
    /// re-labeled to the new type's default; a custom label survives.
    pub fn set_draft_type(&mut self, field_type: FieldType) {
        let SessionState::Editing { draft, .. } = &mut self.state else {
            return;
        };
        if draft.field_type == field_type {
            return;
        }
        if draft.label == registry::default_label(draft.field_type) {
            draft.label = registry::default_label(field_type).to_owned();
        }
        draft.field_type = field_type;
        draft.properties = registry::default_properties_for(field_type);
    }

    /// Commit the draft into the matrix, returning the successor matrix.
    /// The session drops back to the selected state. Without an open draft
    /// this returns the matrix unchanged.
    #[must_use]
    pub fn commit(&mut self, matrix: &FormMatrix) -> FormMatrix {
        let SessionState::Editing { id, draft } = &self.state else {
            return matrix.clone();
        };
        let next = matrix.update_element(draft);
        self.state = SessionState::Selected { id: *id };
        next
    }

    /// Discard the draft, keeping the element selected.
    pub fn discard(&mut self) {
        if let SessionState::Editing { id, .. } = self.state {
            self.state = SessionState::Selected { id };
        }
    }

    /// Explicitly deselect (clicking empty canvas). Discards any draft.
    pub fn deselect(&mut self) {
        self.state = SessionState::NoSelection;
    }

    /// Drop the selection if it points at an element no longer in the
    /// matrix. Called after structural mutations such as delete and undo.
    pub fn prune(&mut self, matrix: &FormMatrix) {
        if let Some(id) = self.selected_id() {
            if matrix.find(id).is_none() {
                self.state = SessionState::NoSelection;
            }
        }
    }
}
