#![deny(rust_2018_idioms)]

mod domain;
mod form;
mod io;


pub use domain::{
    DEFAULT_FIELD_NAME, DROP_SURFACE_ID, DropTarget, Field, FieldId, FieldType, FormDocument, Row,
    RowId, UnknownFieldType,
};
pub use form::{
    CommandOutcome, FormCommand, FormSession, History, PlacementError, delete_field, delete_row,
    rename_field, resolve_drop,
};
pub use io::{
    BlobStore, DEFAULT_FORM_KEY, FileBlobStore, FormArchive, LoadError, MemoryBlobStore, SaveError,
};

pub mod prelude {
    pub use super::{
        DropTarget, FieldType, FormArchive, FormCommand, FormDocument, FormSession,
        MemoryBlobStore,
    };
}
