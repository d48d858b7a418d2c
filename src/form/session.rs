use crate::domain::{DropTarget, FieldId, FieldType, FormDocument, RowId};

use super::{
    actions::{CommandOutcome, FormCommand},
    edits,
    error::PlacementError,
    history::History,
    placement,
};

/// Owns the live editing state: the current document, its history, and the
/// preview flag. Callers hold one session per open form and re-read
/// [`FormSession::document`] after every call.
#[derive(Debug, Clone, Default)]
pub struct FormSession {
    document: FormDocument,
    history: History,
    preview: bool,
}

impl FormSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing document with empty history, the state after
    /// opening a saved form.
    pub fn with_document(document: FormDocument) -> Self {
        Self {
            document,
            history: History::new(),
            preview: false,
        }
    }

    pub fn document(&self) -> &FormDocument {
        &self.document
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn preview(&self) -> bool {
        self.preview
    }

    /// Place a new field of `field_type` at `target`. The snapshot is taken
    /// only once placement has resolved; a rejected drop leaves both the
    /// document and the history untouched.
    pub fn drop_field(
        &mut self,
        target: &DropTarget,
        field_type: FieldType,
    ) -> Result<(), PlacementError> {
        let next = placement::resolve_drop(&self.document, target, field_type)?;
        self.history.begin_mutation(&self.document);
        self.document = next;
        tracing::debug!("placed {field_type} field onto {target}");
        Ok(())
    }

    /// Update a field's label. Renames bypass history: no snapshot is taken
    /// and undo never restores an older label.
    pub fn rename_field(
        &mut self,
        row_id: &RowId,
        field_id: &FieldId,
        name: &str,
    ) -> CommandOutcome {
        let next = edits::rename_field(&self.document, row_id, field_id, name);
        self.install(next)
    }

    pub fn delete_field(&mut self, row_id: &RowId, field_id: &FieldId) -> CommandOutcome {
        self.history.begin_mutation(&self.document);
        let next = edits::delete_field(&self.document, row_id, field_id);
        let outcome = self.install(next);
        if outcome == CommandOutcome::NoOp {
            tracing::trace!("delete_field matched nothing for {row_id}/{field_id}");
        }
        outcome
    }

    pub fn delete_row(&mut self, row_id: &RowId) -> CommandOutcome {
        self.history.begin_mutation(&self.document);
        let next = edits::delete_row(&self.document, row_id);
        let outcome = self.install(next);
        if outcome == CommandOutcome::Applied {
            tracing::debug!("deleted row {row_id}");
        }
        outcome
    }

    pub fn undo(&mut self) -> CommandOutcome {
        match self.history.undo(&self.document) {
            Some(previous) => {
                self.document = previous;
                CommandOutcome::Applied
            }
            None => CommandOutcome::NoOp,
        }
    }

    pub fn redo(&mut self) -> CommandOutcome {
        match self.history.redo(&self.document) {
            Some(next) => {
                self.document = next;
                CommandOutcome::Applied
            }
            None => CommandOutcome::NoOp,
        }
    }

    /// Preview mode lives outside history; undo never flips it back.
    pub fn toggle_preview(&mut self) -> CommandOutcome {
        self.preview = !self.preview;
        CommandOutcome::Applied
    }

    /// Install a document loaded from storage. History is left exactly as it
    /// was, so undo still walks into pre-load states.
    pub fn replace_document(&mut self, document: FormDocument) {
        self.document = document;
    }

    /// Typed entry point for callers that feed gestures through one channel.
    pub fn dispatch(&mut self, command: FormCommand) -> Result<CommandOutcome, PlacementError> {
        match command {
            FormCommand::Drop { target, field_type } => {
                self.drop_field(&target, field_type)?;
                Ok(CommandOutcome::Applied)
            }
            FormCommand::Rename {
                row_id,
                field_id,
                name,
            } => Ok(self.rename_field(&row_id, &field_id, &name)),
            FormCommand::DeleteField { row_id, field_id } => {
                Ok(self.delete_field(&row_id, &field_id))
            }
            FormCommand::DeleteRow { row_id } => Ok(self.delete_row(&row_id)),
            FormCommand::Undo => Ok(self.undo()),
            FormCommand::Redo => Ok(self.redo()),
            FormCommand::TogglePreview => Ok(self.toggle_preview()),
        }
    }

    fn install(&mut self, next: FormDocument) -> CommandOutcome {
        let outcome = if next == self.document {
            CommandOutcome::NoOp
        } else {
            CommandOutcome::Applied
        };
        self.document = next;
        outcome
    }
}
