use futures::executor::block_on;
use uuid::Uuid;

use super::*;
use crate::element::FieldType;
use crate::matrix::FormMatrix;
use crate::registry;

fn snapshot(name: &str) -> FormSnapshot {
    FormSnapshot {
        name: name.to_owned(),
        json: FormMatrix::from_rows(vec![vec![registry::default_element(FieldType::Textbox)]]),
    }
}

// =============================================================
// MemoryRepository
// =============================================================

#[test]
fn load_returns_stored_snapshot() {
    let repo = MemoryRepository::new();
    let id = Uuid::new_v4();
    repo.put(id, snapshot("Stored"));
    let loaded = block_on(repo.load(id)).unwrap();
    assert_eq!(loaded.name, "Stored");
    assert_eq!(loaded.json.element_count(), 1);
}

#[test]
fn load_unknown_id_is_not_found() {
    let repo = MemoryRepository::new();
    let id = Uuid::new_v4();
    assert_eq!(block_on(repo.load(id)), Err(RepoError::NotFound(id)));
}

#[test]
fn save_overwrites_last_write_wins() {
    let repo = MemoryRepository::new();
    let id = Uuid::new_v4();
    block_on(repo.save(id, &snapshot("first"))).unwrap();
    block_on(repo.save(id, &snapshot("second"))).unwrap();
    assert_eq!(repo.len(), 1);
    assert_eq!(block_on(repo.load(id)).unwrap().name, "second");
}

#[test]
fn create_issues_distinct_ids_and_stores_empty_form() {
    let repo = MemoryRepository::new();
    let a = block_on(repo.create("A")).unwrap();
    let b = block_on(repo.create("B")).unwrap();
    assert_ne!(a, b);
    assert_eq!(repo.len(), 2);
    let stored = block_on(repo.load(a)).unwrap();
    assert_eq!(stored.name, "A");
    assert!(stored.json.is_empty());
}

#[test]
fn fail_with_poisons_every_call() {
    let repo = MemoryRepository::new();
    let id = Uuid::new_v4();
    repo.put(id, snapshot("Stored"));
    repo.fail_with("backend down");

    let expected = RepoError::Backend("backend down".to_owned());
    assert_eq!(block_on(repo.load(id)), Err(expected.clone()));
    assert_eq!(block_on(repo.save(id, &snapshot("x"))), Err(expected.clone()));
    assert_eq!(block_on(repo.create("y")), Err(expected));
}

#[test]
fn error_messages_surface_unchanged() {
    let id = Uuid::new_v4();
    assert_eq!(RepoError::NotFound(id).to_string(), format!("form not found: {id}"));
    assert_eq!(RepoError::Backend("disk full".to_owned()).to_string(), "disk full");
}
