use crate::domain::RowId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// The drop named a row that is not in the document.
    UnknownDropTarget { row_id: RowId },
}

impl std::fmt::Display for PlacementError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlacementError::UnknownDropTarget { row_id } => {
                write!(f, "unknown drop target: no row with id {row_id}")
            }
        }
    }
}

impl std::error::Error for PlacementError {}
