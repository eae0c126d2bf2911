//! Repository boundary: the persistence collaborator the editor talks to.
//!
//! Persistence, authentication, and routing are external concerns. The core
//! reaches them only through [`FormRepository`], injected into the editor
//! flows rather than referenced as ambient global state, so the engine is
//! testable against [`MemoryRepository`] and the client can supply an HTTP
//! implementation.

#[cfg(test)]
#[path = "repo_test.rs"]
mod repo_test;

use std::cell::RefCell;
use std::collections::HashMap;

use uuid::Uuid;

use crate::document::{FormId, FormSnapshot};

/// Failure reported by the persistence collaborator. The message is surfaced
/// to the user unchanged; the in-memory document is never modified by a
/// failed call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepoError {
    /// No form exists under the requested id.
    #[error("form not found: {0}")]
    NotFound(FormId),
    /// Any other backend failure, with the collaborator's own message.
    #[error("{0}")]
    Backend(String),
}

/// Load/save/create contract for form persistence.
///
/// Futures returned here are driven on the UI task and need not be `Send`.
#[allow(async_fn_in_trait)]
pub trait FormRepository {
    /// Fetch the persisted snapshot for a form.
    async fn load(&self, id: FormId) -> Result<FormSnapshot, RepoError>;

    /// Persist a snapshot under an existing form id. Last write wins.
    async fn save(&self, id: FormId, snapshot: &FormSnapshot) -> Result<(), RepoError>;

    /// Issue a new opaque form id. Until this returns, a brand-new document
    /// has no stable persistence key.
    async fn create(&self, name: &str) -> Result<FormId, RepoError>;
}

/// In-memory repository: the test double for the editor flows, also usable
/// as an offline demo backend.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    forms: RefCell<HashMap<FormId, FormSnapshot>>,
    /// When set, every call fails with this backend message.
    fail_with: RefCell<Option<String>>,
}

impl MemoryRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a stored form.
    pub fn put(&self, id: FormId, snapshot: FormSnapshot) {
        self.forms.borrow_mut().insert(id, snapshot);
    }

    /// Make every subsequent call fail with the given message.
    pub fn fail_with(&self, message: &str) {
        *self.fail_with.borrow_mut() = Some(message.to_owned());
    }

    /// Number of stored forms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.forms.borrow().len()
    }

    /// Returns `true` when no forms are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.forms.borrow().is_empty()
    }

    fn check_failure(&self) -> Result<(), RepoError> {
        match self.fail_with.borrow().as_ref() {
            Some(message) => Err(RepoError::Backend(message.clone())),
            None => Ok(()),
        }
    }
}

impl FormRepository for MemoryRepository {
    async fn load(&self, id: FormId) -> Result<FormSnapshot, RepoError> {
        self.check_failure()?;
        self.forms
            .borrow()
            .get(&id)
            .cloned()
            .ok_or(RepoError::NotFound(id))
    }

    async fn save(&self, id: FormId, snapshot: &FormSnapshot) -> Result<(), RepoError> {
        self.check_failure()?;
        self.forms.borrow_mut().insert(id, snapshot.clone());
        Ok(())
    }

    async fn create(&self, name: &str) -> Result<FormId, RepoError> {
        self.check_failure()?;
        let id = Uuid::new_v4();
        self.forms.borrow_mut().insert(
            id,
            FormSnapshot { name: name.to_owned(), json: crate::matrix::FormMatrix::new() },
        );
        Ok(id)
    }
}
