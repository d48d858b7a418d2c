mod document;
mod field;
mod ids;
mod target;

pub use document::{FormDocument, Row};
pub use field::{DEFAULT_FIELD_NAME, Field, FieldType, UnknownFieldType};
pub use ids::{FieldId, RowId};
pub use target::{DROP_SURFACE_ID, DropTarget};
