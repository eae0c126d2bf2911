use futures::executor::block_on;
use uuid::Uuid;

use super::*;
use crate::element::FieldType;
use crate::matrix::FormMatrix;
use crate::registry;
use crate::repo::MemoryRepository;

fn editor_with_rows(rows: usize) -> FormEditor {
    let mut editor = FormEditor::new(Uuid::new_v4(), 0);
    for _ in 0..rows {
        editor.append_row();
    }
    editor
}

fn loaded_snapshot() -> FormSnapshot {
    FormSnapshot {
        name: "Contact".to_owned(),
        json: FormMatrix::from_rows(vec![
            vec![registry::default_element(FieldType::Name)],
            vec![registry::default_element(FieldType::Email)],
        ]),
    }
}

// =============================================================
// Structural mutations and selection side effects
// =============================================================

#[test]
fn insert_row_auto_selects_new_element() {
    let mut editor = FormEditor::new(Uuid::new_v4(), 0);
    let id = editor.insert_row(0).unwrap();
    assert_eq!(editor.matrix().row_count(), 1);
    assert_eq!(editor.selected_id(), Some(id));
}

#[test]
fn insert_column_auto_selects_new_element() {
    let mut editor = editor_with_rows(1);
    let id = editor.insert_column(0, 1).unwrap();
    assert_eq!(editor.matrix().rows()[0].len(), 2);
    assert_eq!(editor.selected_id(), Some(id));
}

#[test]
fn append_column_missing_row_returns_none() {
    let mut editor = editor_with_rows(1);
    assert!(editor.append_column(7).is_none());
    assert_eq!(editor.matrix().row_count(), 1);
}

#[test]
fn delete_element_clears_selection() {
    let mut editor = editor_with_rows(1);
    assert!(editor.selected_id().is_some());
    editor.delete_element(0, 0);
    assert!(editor.selected_id().is_none());
    assert!(editor.matrix().is_empty());
}

#[test]
fn move_element_follows_moved_element() {
    let mut editor = editor_with_rows(1);
    editor.append_column(0);
    let moved = editor.matrix().get(0, 1).unwrap().id;
    editor.move_element(0, 1, MoveDirection::Left);
    assert_eq!(editor.matrix().position_of(moved), Some((0, 0)));
    assert_eq!(editor.selected_id(), Some(moved));
}

#[test]
fn swap_elements_across_rows() {
    let mut editor = editor_with_rows(2);
    let top = editor.matrix().get(0, 0).unwrap().id;
    editor.swap_elements((0, 0), (1, 0));
    assert_eq!(editor.matrix().position_of(top), Some((1, 0)));
}

#[test]
fn resize_element_updates_row_widths() {
    let mut editor = editor_with_rows(1);
    editor.append_column(0);
    editor.resize_element(0, 0, 75.0);
    assert!((editor.matrix().get(0, 0).unwrap().width - 75.0).abs() < f64::EPSILON);
    assert!((editor.matrix().get(0, 1).unwrap().width - 25.0).abs() < f64::EPSILON);
}

// =============================================================
// Draft flow through the controller
// =============================================================

#[test]
fn commit_draft_writes_through_to_document() {
    let mut editor = editor_with_rows(1);
    editor.begin_edit();
    editor.draft_mut().unwrap().label = "Full Name".to_owned();
    editor.set_draft_type(FieldType::Name);
    editor.commit_draft();
    let element = editor.matrix().get(0, 0).unwrap();
    assert_eq!(element.label, "Full Name");
    assert_eq!(element.field_type, FieldType::Name);
}

#[test]
fn discard_draft_leaves_document_unchanged() {
    let mut editor = editor_with_rows(1);
    editor.begin_edit();
    editor.draft_mut().unwrap().label = "Doomed".to_owned();
    editor.discard_draft();
    editor.commit_draft();
    assert_eq!(editor.matrix().get(0, 0).unwrap().label, "Untitled");
}

// =============================================================
// Undo / redo
// =============================================================

#[test]
fn undo_restores_previous_matrix() {
    let mut editor = FormEditor::new(Uuid::new_v4(), 0);
    assert!(!editor.can_undo());
    editor.append_row();
    assert!(editor.can_undo());
    editor.undo();
    assert!(editor.matrix().is_empty());
    assert!(editor.can_redo());
}

#[test]
fn redo_reapplies_undone_mutation() {
    let mut editor = FormEditor::new(Uuid::new_v4(), 0);
    editor.append_row();
    let after = editor.matrix().clone();
    editor.undo();
    editor.redo();
    assert_eq!(editor.matrix(), &after);
}

#[test]
fn new_mutation_clears_redo() {
    let mut editor = FormEditor::new(Uuid::new_v4(), 0);
    editor.append_row();
    editor.undo();
    editor.append_row();
    assert!(!editor.can_redo());
}

#[test]
fn noop_mutation_records_no_history() {
    let mut editor = editor_with_rows(1);
    let depth_before = {
        let mut probe = editor.clone();
        let mut depth = 0;
        while probe.can_undo() {
            probe.undo();
            depth += 1;
        }
        depth
    };
    // Out-of-range delete is a no-op and must not grow history.
    editor.delete_element(9, 9);
    let mut depth_after = 0;
    while editor.can_undo() {
        editor.undo();
        depth_after += 1;
    }
    assert_eq!(depth_after, depth_before);
}

#[test]
fn undo_prunes_selection_of_vanished_element() {
    let mut editor = FormEditor::new(Uuid::new_v4(), 0);
    let id = editor.append_row().unwrap();
    editor.select(id);
    editor.undo();
    assert!(editor.selected_id().is_none());
}

// =============================================================
// Persistence flows
// =============================================================

#[test]
fn save_requires_a_name() {
    let repo = MemoryRepository::new();
    let mut editor = editor_with_rows(1);
    let result = block_on(editor.save(&repo, None, 10));
    assert_eq!(result, Err(SaveError::NameRequired));
    // Validation failed before any repository call.
    assert!(repo.is_empty());
    assert_eq!(editor.document().metadata.updated_at, 0);
}

#[test]
fn save_whitespace_name_is_rejected() {
    let repo = MemoryRepository::new();
    let mut editor = editor_with_rows(1);
    editor.set_name("   ");
    assert_eq!(block_on(editor.save(&repo, None, 10)), Err(SaveError::NameRequired));
}

#[test]
fn save_transmits_name_and_matrix() {
    let repo = MemoryRepository::new();
    let mut editor = editor_with_rows(1);
    editor.set_name("Signup");
    let saver = Uuid::new_v4();
    block_on(editor.save(&repo, Some(saver), 99)).unwrap();

    let stored = block_on(repo.load(editor.document().metadata.id)).unwrap();
    assert_eq!(stored.name, "Signup");
    assert_eq!(&stored.json, editor.matrix());
    assert_eq!(editor.document().metadata.updated_at, 99);
    assert_eq!(editor.document().metadata.last_editor, Some(saver));
}

#[test]
fn failed_save_leaves_document_untouched() {
    let repo = MemoryRepository::new();
    repo.fail_with("storage offline");
    let mut editor = editor_with_rows(1);
    editor.set_name("Signup");
    let result = block_on(editor.save(&repo, Some(Uuid::new_v4()), 99));
    assert_eq!(result, Err(SaveError::Repository(RepoError::Backend("storage offline".to_owned()))));
    assert_eq!(editor.document().metadata.updated_at, 0);
    assert!(editor.document().metadata.last_editor.is_none());
}

#[test]
fn second_save_wins() {
    let repo = MemoryRepository::new();
    let mut editor = editor_with_rows(1);
    editor.set_name("v1");
    block_on(editor.save(&repo, None, 1)).unwrap();
    editor.set_name("v2");
    editor.append_row();
    block_on(editor.save(&repo, None, 2)).unwrap();

    let stored = block_on(repo.load(editor.document().metadata.id)).unwrap();
    assert_eq!(stored.name, "v2");
    assert_eq!(stored.json.row_count(), 2);
}

#[test]
fn load_form_accepts_snapshot_verbatim() {
    let repo = MemoryRepository::new();
    let id = Uuid::new_v4();
    repo.put(id, loaded_snapshot());
    let (editor, error) = block_on(load_form(&repo, id, 7));
    assert!(error.is_none());
    assert_eq!(editor.document().metadata.name, "Contact");
    assert_eq!(editor.matrix().row_count(), 2);
}

#[test]
fn load_form_failure_presents_empty_document() {
    let repo = MemoryRepository::new();
    let id = Uuid::new_v4();
    let (editor, error) = block_on(load_form(&repo, id, 7));
    assert_eq!(error, Some(format!("form not found: {id}")));
    assert!(editor.matrix().is_empty());
    assert_eq!(editor.document().metadata.id, id);
}

#[test]
fn create_form_issues_id_before_editing() {
    let repo = MemoryRepository::new();
    let editor = block_on(create_form(&repo, "Fresh", 3)).unwrap();
    assert_eq!(editor.document().metadata.name, "Fresh");
    assert_eq!(repo.len(), 1);
}

#[test]
fn create_form_failure_yields_no_editor() {
    let repo = MemoryRepository::new();
    repo.fail_with("quota exceeded");
    let result = block_on(create_form(&repo, "Fresh", 3));
    assert_eq!(result.unwrap_err(), RepoError::Backend("quota exceeded".to_owned()));
}
