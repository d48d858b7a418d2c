use std::collections::VecDeque;

use crate::domain::FormDocument;

/// Linear undo/redo over whole-document snapshots. Unbounded; only this type
/// touches the two stacks.
#[derive(Debug, Clone, Default)]
pub struct History {
    undo: Vec<FormDocument>,
    redo: VecDeque<FormDocument>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the document as it stands ahead of a structural change. Any
    /// redo states become unreachable.
    pub fn begin_mutation(&mut self, current: &FormDocument) {
        self.undo.push(current.clone());
        self.redo.clear();
    }

    /// Step back, exchanging `current` for the most recent snapshot. Returns
    /// `None` when there is nothing to undo.
    pub fn undo(&mut self, current: &FormDocument) -> Option<FormDocument> {
        let restored = self.undo.pop()?;
        self.redo.push_front(current.clone());
        Some(restored)
    }

    /// Step forward again after an undo. Returns `None` when there is nothing
    /// to redo.
    pub fn redo(&mut self, current: &FormDocument) -> Option<FormDocument> {
        let restored = self.redo.pop_front()?;
        self.undo.push(current.clone());
        Some(restored)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }
}
