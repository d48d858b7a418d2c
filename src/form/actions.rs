use crate::domain::{DropTarget, FieldId, FieldType, RowId};

/// One editing gesture, already resolved to ids by the caller.
#[derive(Debug, Clone)]
pub enum FormCommand {
    Drop {
        target: DropTarget,
        field_type: FieldType,
    },
    Rename {
        row_id: RowId,
        field_id: FieldId,
        name: String,
    },
    DeleteField {
        row_id: RowId,
        field_id: FieldId,
    },
    DeleteRow {
        row_id: RowId,
    },
    Undo,
    Redo,
    TogglePreview,
}

/// Whether a dispatched command changed anything observable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Applied,
    NoOp,
}
