mod archive;
mod store;

pub use archive::{DEFAULT_FORM_KEY, FormArchive, LoadError, SaveError};
pub use store::{BlobStore, FileBlobStore, MemoryBlobStore};
