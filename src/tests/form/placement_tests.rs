use std::collections::HashSet;

use pretty_assertions::assert_eq;

use crate::domain::{
    DEFAULT_FIELD_NAME, DropTarget, Field, FieldId, FieldType, FormDocument, Row, RowId,
};
use crate::form::{PlacementError, resolve_drop};

fn mk_field(id: &str, field_type: FieldType) -> Field {
    Field {
        id: FieldId::from(id),
        field_name: DEFAULT_FIELD_NAME.to_string(),
        field_type,
    }
}

fn mk_doc(rows: Vec<(&str, Vec<Field>)>) -> FormDocument {
    FormDocument {
        rows: rows
            .into_iter()
            .map(|(id, fields)| Row {
                id: RowId::from(id),
                fields,
            })
            .collect(),
    }
}

#[test]
fn surface_drop_adds_a_row_holding_one_new_field() {
    let empty = FormDocument::new();
    let next = resolve_drop(&empty, &DropTarget::Surface, FieldType::SingleLine).unwrap();

    assert_eq!(next.row_count(), 1);
    assert_eq!(next.rows[0].fields.len(), 1);
    let field = &next.rows[0].fields[0];
    assert_eq!(field.field_name, DEFAULT_FIELD_NAME);
    assert_eq!(field.field_type, FieldType::SingleLine);
    assert!(!field.id.as_str().is_empty());
    assert!(!next.rows[0].id.as_str().is_empty());
}

#[test]
fn surface_drop_appends_below_existing_rows() {
    let doc = mk_doc(vec![
        ("r1", vec![mk_field("f1", FieldType::SingleLine)]),
        ("r2", vec![mk_field("f2", FieldType::Date)]),
    ]);
    let next = resolve_drop(&doc, &DropTarget::Surface, FieldType::Checkbox).unwrap();

    assert_eq!(next.row_count(), 3);
    assert_eq!(next.rows[0], doc.rows[0]);
    assert_eq!(next.rows[1], doc.rows[1]);
    assert_eq!(next.rows[2].fields[0].field_type, FieldType::Checkbox);
}

#[test]
fn row_drop_appends_to_the_addressed_row_only() {
    let doc = mk_doc(vec![
        ("r1", vec![mk_field("f1", FieldType::SingleLine)]),
        ("r2", vec![mk_field("f2", FieldType::Date)]),
    ]);
    let target = DropTarget::Row(RowId::from("r1"));
    let next = resolve_drop(&doc, &target, FieldType::MultiLine).unwrap();

    assert_eq!(next.rows[0].fields.len(), 2);
    assert_eq!(next.rows[0].fields[0], doc.rows[0].fields[0]);
    assert_eq!(next.rows[0].fields[1].field_type, FieldType::MultiLine);
    assert_eq!(next.rows[0].fields[1].field_name, DEFAULT_FIELD_NAME);
    assert_eq!(next.rows[1], doc.rows[1]);
}

#[test]
fn row_drop_rejects_unknown_rows() {
    let doc = mk_doc(vec![("r1", vec![mk_field("f1", FieldType::SingleLine)])]);
    let target = DropTarget::Row(RowId::from("ghost"));
    let err = resolve_drop(&doc, &target, FieldType::Radio).unwrap_err();

    assert_eq!(
        err,
        PlacementError::UnknownDropTarget {
            row_id: RowId::from("ghost"),
        }
    );
}

#[test]
fn resolve_drop_never_mutates_its_input() {
    let doc = mk_doc(vec![("r1", vec![mk_field("f1", FieldType::SingleLine)])]);
    let before = doc.clone();

    resolve_drop(&doc, &DropTarget::Surface, FieldType::Date).unwrap();
    resolve_drop(&doc, &DropTarget::Row(RowId::from("r1")), FieldType::Date).unwrap();
    resolve_drop(&doc, &DropTarget::Row(RowId::from("ghost")), FieldType::Date).unwrap_err();

    assert_eq!(doc, before);
}

#[test]
fn placements_mint_document_unique_ids() {
    let mut doc = FormDocument::new();
    doc = resolve_drop(&doc, &DropTarget::Surface, FieldType::SingleLine).unwrap();
    let first_row = doc.rows[0].id.clone();
    for kind in FieldType::ALL {
        doc = resolve_drop(&doc, &DropTarget::Row(first_row.clone()), kind).unwrap();
    }
    doc = resolve_drop(&doc, &DropTarget::Surface, FieldType::MultiLine).unwrap();

    let mut ids: HashSet<String> = HashSet::new();
    let mut total = 0;
    for row in &doc.rows {
        ids.insert(row.id.as_str().to_string());
        total += 1;
        for field in &row.fields {
            ids.insert(field.id.as_str().to_string());
            total += 1;
        }
    }
    assert_eq!(ids.len(), total);
    assert_eq!(doc.find_duplicate_id(), None);
}
