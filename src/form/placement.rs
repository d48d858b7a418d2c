use crate::domain::{DropTarget, Field, FieldType, FormDocument, Row};

use super::error::PlacementError;

/// Work out the document that results from releasing `field_type` at
/// `target`. The input document is never touched; on failure nothing is
/// placed and the error carries the offending row id.
pub fn resolve_drop(
    document: &FormDocument,
    target: &DropTarget,
    field_type: FieldType,
) -> Result<FormDocument, PlacementError> {
    match target {
        DropTarget::Surface => {
            let mut next = document.clone();
            next.rows.push(Row::with_field(Field::new(field_type)));
            Ok(next)
        }
        DropTarget::Row(row_id) => {
            let Some(index) = document.rows.iter().position(|row| row.id == *row_id) else {
                return Err(PlacementError::UnknownDropTarget {
                    row_id: row_id.clone(),
                });
            };
            let mut next = document.clone();
            next.rows[index].fields.push(Field::new(field_type));
            Ok(next)
        }
    }
}
