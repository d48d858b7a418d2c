use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::field::Field;
use super::ids::{FieldId, RowId};

/// A horizontal band of fields. Vec order is display order, left to right.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub id: RowId,
    #[serde(rename = "rowData")]
    pub fields: Vec<Field>,
}

impl Row {
    pub fn with_field(field: Field) -> Self {
        Self {
            id: RowId::fresh(),
            fields: vec![field],
        }
    }
}

/// The whole form layout: rows top to bottom. Serializes as a bare array of
/// rows, the persisted blob layout.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormDocument {
    pub rows: Vec<Row>,
}

impl FormDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn field_count(&self) -> usize {
        self.rows.iter().map(|row| row.fields.len()).sum()
    }

    pub fn row(&self, id: &RowId) -> Option<&Row> {
        self.rows.iter().find(|row| row.id == *id)
    }

    pub fn field(&self, row_id: &RowId, field_id: &FieldId) -> Option<&Field> {
        self.row(row_id)
            .and_then(|row| row.fields.iter().find(|field| field.id == *field_id))
    }

    /// First id that appears twice anywhere in the document, if any. Row and
    /// field ids share one namespace.
    pub fn find_duplicate_id(&self) -> Option<String> {
        let mut seen = HashSet::new();
        for row in &self.rows {
            if !seen.insert(row.id.as_str()) {
                return Some(row.id.as_str().to_string());
            }
            for field in &row.fields {
                if !seen.insert(field.id.as_str()) {
                    return Some(field.id.as_str().to_string());
                }
            }
        }
        None
    }
}
