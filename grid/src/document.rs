//! Form metadata, the full editable document, and the save snapshot.

#[cfg(test)]
#[path = "document_test.rs"]
mod document_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::matrix::FormMatrix;

/// Opaque identifier for a form, issued by the persistence collaborator.
pub type FormId = Uuid;

/// Form-level metadata.
///
/// Timestamps are epoch milliseconds supplied by the caller, keeping this
/// crate clock-free (and therefore identical on native and WASM targets).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormMetadata {
    /// Persistence key for this form.
    pub id: FormId,
    /// Display name, also the name transmitted on save.
    pub name: String,
    /// User who created the form, if known.
    pub author: Option<Uuid>,
    /// User who last saved the form, if known.
    pub last_editor: Option<Uuid>,
    /// Organization the form belongs to, if known.
    pub organization: Option<Uuid>,
    /// Creation time, epoch milliseconds.
    pub created_at: i64,
    /// Last save time, epoch milliseconds. Updated on every save.
    pub updated_at: i64,
}

/// The wire shape exchanged with the persistence collaborator: the form name
/// plus the whole matrix, serialized wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormSnapshot {
    /// Display name of the form.
    pub name: String,
    /// The full row/column matrix.
    pub json: FormMatrix,
}

/// A form's full editable state: metadata plus the element matrix.
///
/// Created empty when the user starts a new form, mutated in place through
/// the grid engine during an editing session, serialized wholesale on save,
/// and discarded on navigation away without saving.
#[derive(Debug, Clone, PartialEq)]
pub struct FormDocument {
    /// Form-level metadata.
    pub metadata: FormMetadata,
    /// The element grid.
    pub matrix: FormMatrix,
}

impl FormDocument {
    /// Create an empty document (zero rows) for a freshly issued form id.
    #[must_use]
    pub fn new(id: FormId, now_ms: i64) -> Self {
        Self {
            metadata: FormMetadata {
                id,
                name: String::new(),
                author: None,
                last_editor: None,
                organization: None,
                created_at: now_ms,
                updated_at: now_ms,
            },
            matrix: FormMatrix::new(),
        }
    }

    /// Build a document from a loaded snapshot, accepted verbatim.
    #[must_use]
    pub fn from_snapshot(id: FormId, snapshot: FormSnapshot, now_ms: i64) -> Self {
        let mut doc = Self::new(id, now_ms);
        doc.metadata.name = snapshot.name;
        doc.matrix = snapshot.json;
        doc
    }

    /// The snapshot transmitted on save: current name plus current matrix.
    #[must_use]
    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot { name: self.metadata.name.clone(), json: self.matrix.clone() }
    }

    /// Record a successful save: bump the edit timestamp and remember the
    /// saving user. Called only after the persistence collaborator accepts
    /// the snapshot, so a failed save leaves the document untouched.
    pub fn mark_saved(&mut self, saved_by: Option<Uuid>, now_ms: i64) {
        self.metadata.updated_at = now_ms;
        self.metadata.last_editor = saved_by;
    }
}
