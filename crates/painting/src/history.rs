//! Linear undo/redo history built on full-model snapshots.

use std::collections::VecDeque;

use tracing::debug;

use crate::constants::MAX_HISTORY_STATES;
use crate::events::{EditorEvent, EventBus};
use crate::face::Snapshot;
use crate::model::CubeModel;

/// Undo/redo stacks of [`Snapshot`]s.
///
/// The top of the undo stack is always the current state, so the stack is
/// never emptied by `undo`. Any new `save_state` discards redo history.
#[derive(Debug)]
pub struct HistoryManager {
    /// Oldest snapshot at the front
    undo_stack: VecDeque<Snapshot>,
    /// Most recently undone snapshot at the end
    redo_stack: Vec<Snapshot>,
    max_states: usize,
    bus: EventBus,
}

impl HistoryManager {
    /// Create a history with the default depth, recording the model's current state as baseline.
    pub fn new(model: &CubeModel) -> Self {
        Self::with_capacity(model, MAX_HISTORY_STATES)
    }

    /// Create a history keeping at most `max_states` undo snapshots (minimum 1).
    pub fn with_capacity(model: &CubeModel, max_states: usize) -> Self {
        let mut history = Self {
            undo_stack: VecDeque::new(),
            redo_stack: Vec::new(),
            max_states: max_states.max(1),
            bus: model.bus().clone(),
        };
        history.save_state(model);
        history
    }

    /// Push the model's current state and drop redo history.
    ///
    /// Call once per completed user action, never per pixel write.
    pub fn save_state(&mut self, model: &CubeModel) {
        self.undo_stack.push_back(model.snapshot());
        self.redo_stack.clear();

        while self.undo_stack.len() > self.max_states {
            self.undo_stack.pop_front();
            debug!("History full, evicted oldest snapshot");
        }

        debug!("Saved history state ({} undo levels)", self.undo_stack.len());
        self.notify_history_change();
    }

    /// Step back one action.
    ///
    /// Returns false if only the current state is on the stack.
    pub fn undo(&mut self, model: &mut CubeModel) -> bool {
        if self.undo_stack.len() <= 1 {
            debug!("Undo: no entries available");
            return false;
        }
        let Some(current) = self.undo_stack.pop_back() else {
            return false;
        };
        self.redo_stack.push(current);

        if let Some(previous) = self.undo_stack.back() {
            model.restore(previous);
        }

        debug!(
            "Undo: {} undo / {} redo levels",
            self.undo_stack.len(),
            self.redo_stack.len()
        );
        self.notify_history_change();
        true
    }

    /// Re-apply the most recently undone action.
    ///
    /// Returns false if there is nothing to redo.
    pub fn redo(&mut self, model: &mut CubeModel) -> bool {
        let Some(next) = self.redo_stack.pop() else {
            debug!("Redo: no entries available");
            return false;
        };
        model.restore(&next);
        self.undo_stack.push_back(next);

        debug!(
            "Redo: {} undo / {} redo levels",
            self.undo_stack.len(),
            self.redo_stack.len()
        );
        self.notify_history_change();
        true
    }

    pub fn can_undo(&self) -> bool {
        self.undo_stack.len() > 1
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn max_states(&self) -> usize {
        self.max_states
    }

    /// Snapshot at the top of the undo stack, the last recorded state
    pub fn current(&self) -> Option<&Snapshot> {
        self.undo_stack.back()
    }

    /// Drop all history and record the model's current state as the new baseline.
    pub fn clear(&mut self, model: &CubeModel) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.save_state(model);
    }

    fn notify_history_change(&self) {
        self.bus.emit(EditorEvent::HistoryChanged {
            can_undo: self.can_undo(),
            can_redo: self.can_redo(),
            undo_count: self.undo_stack.len(),
            redo_count: self.redo_stack.len(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::events::EventKind;
    use crate::types::FaceName;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn paint(model: &mut CubeModel, x: u32) {
        model.set_pixel(FaceName::Front, x, 0, Color::BLACK);
    }

    #[test]
    fn test_initial_state() {
        let model = CubeModel::new(EventBus::new());
        let history = HistoryManager::new(&model);
        assert_eq!(history.undo_count(), 1);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_undo_with_only_baseline_fails() {
        let mut model = CubeModel::new(EventBus::new());
        let mut history = HistoryManager::new(&model);
        assert!(!history.undo(&mut model));
        assert_eq!(history.undo_count(), 1);
    }

    #[test]
    fn test_undo_redo_symmetry() {
        let mut model = CubeModel::new(EventBus::new());
        let mut history = HistoryManager::new(&model);

        paint(&mut model, 0);
        history.save_state(&model);
        paint(&mut model, 1);
        history.save_state(&model);
        let after_both = model.snapshot();

        assert!(history.undo(&mut model));
        assert_eq!(model.get_pixel(FaceName::Front, 1, 0), Some(Color::WHITE));
        assert_eq!(model.get_pixel(FaceName::Front, 0, 0), Some(Color::BLACK));
        assert!(history.can_redo());

        assert!(history.redo(&mut model));
        assert_eq!(model.all_faces(), after_both.faces());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_redo_with_empty_stack_changes_nothing() {
        let mut model = CubeModel::new(EventBus::new());
        let mut history = HistoryManager::new(&model);
        paint(&mut model, 3);
        let before = model.snapshot();

        assert!(!history.redo(&mut model));
        assert_eq!(model.all_faces(), before.faces());
        assert_eq!(history.undo_count(), 1);
    }

    #[test]
    fn test_save_clears_redo() {
        let mut model = CubeModel::new(EventBus::new());
        let mut history = HistoryManager::new(&model);
        paint(&mut model, 0);
        history.save_state(&model);
        history.undo(&mut model);
        assert!(history.can_redo());

        paint(&mut model, 5);
        history.save_state(&model);
        assert!(!history.can_redo());
        assert_eq!(history.redo_count(), 0);
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut model = CubeModel::new(EventBus::new());
        let mut history = HistoryManager::new(&model);

        for i in 0..(MAX_HISTORY_STATES + 5) {
            paint(&mut model, (i % 16) as u32);
            model.set_pixel(FaceName::Back, (i % 16) as u32, (i / 16) as u32, Color::BLACK);
            history.save_state(&model);
        }
        assert_eq!(history.undo_count(), MAX_HISTORY_STATES);

        let mut undone = 0;
        while history.undo(&mut model) {
            undone += 1;
        }
        assert_eq!(undone, MAX_HISTORY_STATES - 1);
        // The blank baseline and the first saves were evicted
        assert_ne!(model.face(FaceName::Back).count(Color::WHITE), 256);
    }

    #[test]
    fn test_history_change_events() {
        let model = CubeModel::new(EventBus::new());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&seen);
        model.bus().subscribe(EventKind::HistoryChange, move |e| {
            if let EditorEvent::HistoryChanged {
                can_undo, can_redo, ..
            } = e
            {
                log.borrow_mut().push((*can_undo, *can_redo));
            }
        });

        let mut model = model;
        let mut history = HistoryManager::new(&model);
        paint(&mut model, 0);
        history.save_state(&model);
        history.undo(&mut model);
        history.redo(&mut model);

        assert_eq!(
            *seen.borrow(),
            vec![(false, false), (true, false), (false, true), (true, false)]
        );
    }

    #[test]
    fn test_clear_resets_to_current() {
        let mut model = CubeModel::new(EventBus::new());
        let mut history = HistoryManager::with_capacity(&model, 10);
        paint(&mut model, 0);
        history.save_state(&model);
        history.undo(&mut model);

        history.clear(&model);
        assert_eq!(history.undo_count(), 1);
        assert_eq!(history.redo_count(), 0);
        assert_eq!(history.max_states(), 10);
    }
}
