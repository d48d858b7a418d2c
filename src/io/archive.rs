use crate::domain::FormDocument;

use super::store::BlobStore;

/// Slot key the editor saves under when the caller does not pick one.
pub const DEFAULT_FORM_KEY: &str = "formData";

#[derive(Debug)]
pub enum LoadError {
    /// The slot is absent, blank, or holds zero rows.
    NoSavedForm,
    /// The slot holds something that is not a valid form layout.
    Corrupt { detail: String },
    Store(anyhow::Error),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::NoSavedForm => write!(f, "no saved form found"),
            LoadError::Corrupt { detail } => write!(f, "saved form is corrupt: {detail}"),
            LoadError::Store(err) => write!(f, "storage failure: {err}"),
        }
    }
}

impl std::error::Error for LoadError {}

#[derive(Debug)]
pub enum SaveError {
    Encode(serde_json::Error),
    Store(anyhow::Error),
}

impl std::fmt::Display for SaveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SaveError::Encode(err) => write!(f, "failed to encode form: {err}"),
            SaveError::Store(err) => write!(f, "storage failure: {err}"),
        }
    }
}

impl std::error::Error for SaveError {}

/// Saves and loads one form layout through a [`BlobStore`] slot. Only the
/// document crosses the boundary; history never does.
#[derive(Debug)]
pub struct FormArchive<S> {
    store: S,
    key: String,
}

impl<S: BlobStore> FormArchive<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_FORM_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn save(&mut self, document: &FormDocument) -> Result<(), SaveError> {
        let blob = serde_json::to_string(document).map_err(SaveError::Encode)?;
        self.store.set(&self.key, &blob).map_err(SaveError::Store)?;
        tracing::debug!("saved {} rows to slot {}", document.row_count(), self.key);
        Ok(())
    }

    /// Read the slot back into a document. The caller's state is never
    /// touched by a failed load.
    pub fn load(&self) -> Result<FormDocument, LoadError> {
        let Some(blob) = self.store.get(&self.key).map_err(LoadError::Store)? else {
            return Err(LoadError::NoSavedForm);
        };
        if blob.trim().is_empty() {
            return Err(LoadError::NoSavedForm);
        }
        let document: FormDocument =
            serde_json::from_str(&blob).map_err(|err| LoadError::Corrupt {
                detail: err.to_string(),
            })?;
        if document.is_empty() {
            return Err(LoadError::NoSavedForm);
        }
        if let Some(id) = document.find_duplicate_id() {
            return Err(LoadError::Corrupt {
                detail: format!("duplicate id {id}"),
            });
        }
        tracing::debug!("loaded {} rows from slot {}", document.row_count(), self.key);
        Ok(document)
    }

    /// Like [`FormArchive::load`], but an absent form comes back as an empty
    /// document instead of an error.
    pub fn load_or_empty(&self) -> Result<FormDocument, LoadError> {
        match self.load() {
            Ok(document) => Ok(document),
            Err(LoadError::NoSavedForm) => Ok(FormDocument::new()),
            Err(other) => Err(other),
        }
    }
}
