//! Undo functionality for the editing pipeline

use tracing::debug;

use super::PaintingPipeline;

impl PaintingPipeline {
    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Undo the last recorded action
    ///
    /// A stroke in progress is finished (and recorded) first, so undo always
    /// reverts whole actions.
    pub fn undo(&mut self) -> bool {
        self.end_stroke();
        let undone = self.history.undo(&mut self.model);
        if undone {
            debug!("Pipeline undo: {} levels left", self.history.undo_count());
        }
        undone
    }

    /// Redo the last undone action
    pub fn redo(&mut self) -> bool {
        self.end_stroke();
        self.history.redo(&mut self.model)
    }

    /// Record the current model state as one action.
    ///
    /// For edits made directly through [`PaintingPipeline::model_mut`].
    pub fn commit(&mut self) {
        self.end_stroke();
        self.history.save_state(&self.model);
    }

    /// Forget all history; the current state becomes the only entry
    pub fn clear_history(&mut self) {
        self.end_stroke();
        self.history.clear(&self.model);
    }
}
