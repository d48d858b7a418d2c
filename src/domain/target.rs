use std::fmt;

use super::ids::RowId;

/// Container id the drop surface announces itself under.
pub const DROP_SURFACE_ID: &str = "drop-area";

/// Where a dragged field type was released. Callers resolve the gesture to a
/// container before handing it to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropTarget {
    Surface,
    Row(RowId),
}

impl DropTarget {
    /// Map a raw container id to a target. The surface sentinel wins; every
    /// other id is treated as a row id.
    pub fn from_container_id(container: &str) -> Self {
        if container == DROP_SURFACE_ID {
            DropTarget::Surface
        } else {
            DropTarget::Row(RowId::from(container))
        }
    }
}

impl fmt::Display for DropTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DropTarget::Surface => f.write_str(DROP_SURFACE_ID),
            DropTarget::Row(id) => write!(f, "row {id}"),
        }
    }
}
