use crate::domain::{FieldId, FormDocument, RowId};

/// Set a field's label. Stale ids leave the document as it was.
pub fn rename_field(
    document: &FormDocument,
    row_id: &RowId,
    field_id: &FieldId,
    name: &str,
) -> FormDocument {
    let mut next = document.clone();
    if let Some(row) = next.rows.iter_mut().find(|row| row.id == *row_id)
        && let Some(field) = row.fields.iter_mut().find(|field| field.id == *field_id)
    {
        field.field_name = name.to_string();
    }
    next
}

/// Remove one field from the addressed row. A row emptied this way stays in
/// the document until deleted itself.
pub fn delete_field(document: &FormDocument, row_id: &RowId, field_id: &FieldId) -> FormDocument {
    let mut next = document.clone();
    if let Some(row) = next.rows.iter_mut().find(|row| row.id == *row_id) {
        row.fields.retain(|field| field.id != *field_id);
    }
    next
}

/// Remove a row and everything in it.
pub fn delete_row(document: &FormDocument, row_id: &RowId) -> FormDocument {
    let mut next = document.clone();
    next.rows.retain(|row| row.id != *row_id);
    next
}
