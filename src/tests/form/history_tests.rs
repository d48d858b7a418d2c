use pretty_assertions::assert_eq;

use crate::domain::{Field, FieldType, FormDocument, Row, RowId};
use crate::form::History;

fn doc_with_rows(ids: &[&str]) -> FormDocument {
    FormDocument {
        rows: ids
            .iter()
            .map(|id| Row {
                id: RowId::from(*id),
                fields: vec![Field::new(FieldType::SingleLine)],
            })
            .collect(),
    }
}

#[test]
fn undo_restores_the_snapshot_taken_before_the_change() {
    let before = doc_with_rows(&["a"]);
    let after = doc_with_rows(&["a", "b"]);

    let mut history = History::new();
    history.begin_mutation(&before);
    assert_eq!(history.undo(&after), Some(before));
}

#[test]
fn undo_parks_the_current_document_for_redo() {
    let before = doc_with_rows(&["a"]);
    let after = doc_with_rows(&["a", "b"]);

    let mut history = History::new();
    history.begin_mutation(&before);
    history.undo(&after);
    assert_eq!(history.redo(&before), Some(after));
}

#[test]
fn begin_mutation_clears_redo() {
    let first = doc_with_rows(&["a"]);
    let second = doc_with_rows(&["a", "b"]);

    let mut history = History::new();
    history.begin_mutation(&first);
    history.undo(&second);
    assert!(history.can_redo());

    history.begin_mutation(&first);
    assert!(!history.can_redo());
    assert_eq!(history.redo(&first), None);
}

#[test]
fn empty_stacks_return_none() {
    let doc = doc_with_rows(&["a"]);
    let mut history = History::new();
    assert_eq!(history.undo(&doc), None);
    assert_eq!(history.redo(&doc), None);
    assert!(!history.can_undo());
    assert!(!history.can_redo());
}

#[test]
fn chained_undo_and_redo_walk_states_in_order() {
    let a = doc_with_rows(&[]);
    let b = doc_with_rows(&["r1"]);
    let c = doc_with_rows(&["r1", "r2"]);

    let mut history = History::new();
    history.begin_mutation(&a);
    history.begin_mutation(&b);
    assert_eq!(history.undo_depth(), 2);

    assert_eq!(history.undo(&c), Some(b.clone()));
    assert_eq!(history.undo(&b), Some(a.clone()));
    assert_eq!(history.redo_depth(), 2);

    assert_eq!(history.redo(&a), Some(b.clone()));
    assert_eq!(history.redo(&b), Some(c));
    assert_eq!(history.redo_depth(), 0);
    assert_eq!(history.undo_depth(), 2);
}
