//! Editor controller: one document, one session, one undo history.
//!
//! [`FormEditor`] is what a builder page holds. It routes every UI gesture
//! through the pure matrix operations, applies the selection side effects
//! the builder expects (inserting auto-selects the new element, deleting
//! clears the selection, moving follows the moved element), and keeps an
//! undo/redo history of matrix snapshots — free, since every engine
//! operation already produces a structural copy.
//!
//! ERROR HANDLING
//! ==============
//! Save validation failures and repository failures both leave the document
//! untouched; the caller surfaces the message and the user may retry. A
//! failed load produces an empty document plus the collaborator's message.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use uuid::Uuid;

use crate::document::{FormDocument, FormId, FormSnapshot};
use crate::element::{FieldId, FieldType};
use crate::matrix::{FormMatrix, MoveDirection};
use crate::repo::{FormRepository, RepoError};
use crate::session::EditSession;

/// Why a save did not happen.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SaveError {
    /// The form has no name; validation failed before any repository call.
    #[error("form name is required")]
    NameRequired,
    /// The persistence collaborator rejected the save.
    #[error("{0}")]
    Repository(#[from] RepoError),
}

/// The editing state for one form: document, selection session, history.
#[derive(Debug, Clone, PartialEq)]
pub struct FormEditor {
    document: FormDocument,
    session: EditSession,
    undo: Vec<FormMatrix>,
    redo: Vec<FormMatrix>,
}

impl FormEditor {
    /// Start an editor on an empty document.
    #[must_use]
    pub fn new(id: FormId, now_ms: i64) -> Self {
        Self::with_document(FormDocument::new(id, now_ms))
    }

    /// Start an editor on a loaded snapshot, accepted verbatim.
    #[must_use]
    pub fn from_snapshot(id: FormId, snapshot: FormSnapshot, now_ms: i64) -> Self {
        Self::with_document(FormDocument::from_snapshot(id, snapshot, now_ms))
    }

    fn with_document(document: FormDocument) -> Self {
        Self { document, session: EditSession::new(), undo: Vec::new(), redo: Vec::new() }
    }

    /// The document being edited.
    #[must_use]
    pub fn document(&self) -> &FormDocument {
        &self.document
    }

    /// The current matrix.
    #[must_use]
    pub fn matrix(&self) -> &FormMatrix {
        &self.document.matrix
    }

    /// The selection/edit session.
    #[must_use]
    pub fn session(&self) -> &EditSession {
        &self.session
    }

    /// Id of the currently selected element, if any.
    #[must_use]
    pub fn selected_id(&self) -> Option<FieldId> {
        self.session.selected_id()
    }

    /// Rename the form. Takes effect on the next save.
    pub fn set_name(&mut self, name: &str) {
        self.document.metadata.name = name.to_owned();
    }

    // ── Structural mutations ────────────────────────────────────

    /// Insert a placeholder row at `at` and select the new element.
    pub fn insert_row(&mut self, at: usize) -> Option<FieldId> {
        let (next, element) = self.document.matrix.insert_row(at);
        let id = element.map(|e| e.id);
        self.apply(next);
        if let Some(id) = id {
            self.session.select(&self.document.matrix, id);
        }
        id
    }

    /// Append a placeholder row and select the new element.
    pub fn append_row(&mut self) -> Option<FieldId> {
        self.insert_row(self.document.matrix.row_count())
    }

    /// Insert a placeholder element into `row` at `at` and select it.
    pub fn insert_column(&mut self, row: usize, at: usize) -> Option<FieldId> {
        let (next, element) = self.document.matrix.insert_column(row, at);
        let id = element.map(|e| e.id);
        self.apply(next);
        if let Some(id) = id {
            self.session.select(&self.document.matrix, id);
        }
        id
    }

    /// Append a placeholder element to `row` and select it.
    pub fn append_column(&mut self, row: usize) -> Option<FieldId> {
        let len = self.document.matrix.rows().get(row).map(Vec::len)?;
        self.insert_column(row, len)
    }

    /// Delete the element at `(row, col)` and clear the selection.
    pub fn delete_element(&mut self, row: usize, col: usize) {
        let next = self.document.matrix.delete_element(row, col);
        self.apply(next);
        self.session.deselect();
    }

    /// Swap the element at `(row, col)` with its neighbor and keep it
    /// selected at its new position.
    pub fn move_element(&mut self, row: usize, col: usize, direction: MoveDirection) {
        let moved = self.document.matrix.get(row, col).map(|e| e.id);
        let next = self.document.matrix.move_element(row, col, direction);
        self.apply(next);
        if let Some(id) = moved {
            self.session.select(&self.document.matrix, id);
        }
    }

    /// Exchange two elements at arbitrary positions (drag-and-drop drop).
    pub fn swap_elements(&mut self, source: (usize, usize), target: (usize, usize)) {
        let next = self
            .document
            .matrix
            .swap_elements(source.0, source.1, target.0, target.1);
        self.apply(next);
    }

    /// Resize the element at `(row, col)`, redistributing row widths.
    pub fn resize_element(&mut self, row: usize, col: usize, width: f64) {
        let next = self.document.matrix.resize_element(row, col, width);
        self.apply(next);
    }

    // ── Selection and drafts ────────────────────────────────────

    /// Select the element with the given id, discarding any open draft.
    pub fn select(&mut self, id: FieldId) {
        self.session.select(&self.document.matrix, id);
    }

    /// Deselect (clicking empty canvas).
    pub fn deselect(&mut self) {
        self.session.deselect();
    }

    /// Open a draft for the selected element.
    pub fn begin_edit(&mut self) {
        self.session.begin_edit(&self.document.matrix);
    }

    /// Mutable access to the open draft.
    pub fn draft_mut(&mut self) -> Option<&mut crate::element::FieldElement> {
        self.session.draft_mut()
    }

    /// Change the open draft's field type, resetting its properties.
    pub fn set_draft_type(&mut self, field_type: FieldType) {
        self.session.set_draft_type(field_type);
    }

    /// Commit the open draft into the document.
    pub fn commit_draft(&mut self) {
        let next = self.session.commit(&self.document.matrix);
        self.apply(next);
    }

    /// Discard the open draft.
    pub fn discard_draft(&mut self) {
        self.session.discard();
    }

    // ── History ─────────────────────────────────────────────────

    /// Whether an undo step is available.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    /// Whether a redo step is available.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Restore the matrix from before the most recent mutation.
    pub fn undo(&mut self) {
        if let Some(previous) = self.undo.pop() {
            let current = std::mem::replace(&mut self.document.matrix, previous);
            self.redo.push(current);
            self.session.prune(&self.document.matrix);
        }
    }

    /// Re-apply the most recently undone mutation.
    pub fn redo(&mut self) {
        if let Some(next) = self.redo.pop() {
            let current = std::mem::replace(&mut self.document.matrix, next);
            self.undo.push(current);
            self.session.prune(&self.document.matrix);
        }
    }

    fn apply(&mut self, next: FormMatrix) {
        if next == self.document.matrix {
            return;
        }
        let previous = std::mem::replace(&mut self.document.matrix, next);
        self.undo.push(previous);
        self.redo.clear();
    }

    // ── Persistence flows ───────────────────────────────────────

    /// Validate and persist the current document.
    ///
    /// An unnamed form fails validation before any repository call. The
    /// document's save metadata is updated only after the collaborator
    /// accepts the snapshot, so a failed save leaves it untouched. While a
    /// save is in flight the document stays mutable; ordering beyond
    /// last-write-wins is the collaborator's concern.
    pub async fn save<R: FormRepository>(
        &mut self,
        repo: &R,
        saved_by: Option<Uuid>,
        now_ms: i64,
    ) -> Result<(), SaveError> {
        if self.document.metadata.name.trim().is_empty() {
            return Err(SaveError::NameRequired);
        }
        let snapshot = self.document.snapshot();
        repo.save(self.document.metadata.id, &snapshot).await?;
        self.document.mark_saved(saved_by, now_ms);
        Ok(())
    }
}

/// Load a form into a fresh editor.
///
/// On repository failure the editor starts on an empty document and the
/// collaborator's message is returned alongside it for the UI to surface.
pub async fn load_form<R: FormRepository>(
    repo: &R,
    id: FormId,
    now_ms: i64,
) -> (FormEditor, Option<String>) {
    match repo.load(id).await {
        Ok(snapshot) => (FormEditor::from_snapshot(id, snapshot, now_ms), None),
        Err(err) => (FormEditor::new(id, now_ms), Some(err.to_string())),
    }
}

/// Request a new form id from the collaborator and open an editor on it.
///
/// # Errors
///
/// Returns the collaborator's error when no id could be issued — without an
/// id the document has no stable persistence key, so no editor is created.
pub async fn create_form<R: FormRepository>(
    repo: &R,
    name: &str,
    now_ms: i64,
) -> Result<FormEditor, RepoError> {
    let id = repo.create(name).await?;
    let mut editor = FormEditor::new(id, now_ms);
    editor.set_name(name);
    Ok(editor)
}
