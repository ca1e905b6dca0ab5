//! Bulk find/replace of a color across one or all faces

use tracing::{debug, info};

use crate::color::Color;
use crate::events::EditorEvent;
use crate::model::CubeModel;
use crate::types::{FaceName, ReplaceScope};

impl CubeModel {
    /// Replace every cell equal to `from` with `to`.
    ///
    /// Returns the number of cells changed. Identical colors or no matches
    /// leave the model untouched and emit nothing. History is not recorded
    /// here; the caller snapshots the whole replacement as one action.
    pub fn replace_color(&mut self, from: Color, to: Color, scope: ReplaceScope) -> usize {
        if from == to {
            debug!("replace_color: {} equals {}, nothing to do", from, to);
            return 0;
        }

        let current = self.current_face();
        let faces = self.faces_mut();
        let count: usize = match scope {
            ReplaceScope::CurrentFace => faces.face_mut(current).replace(from, to),
            ReplaceScope::AllFaces => FaceName::ALL
                .into_iter()
                .map(|face| faces.face_mut(face).replace(from, to))
                .sum(),
        };

        if count == 0 {
            return 0;
        }

        info!("Replaced {} cells of {} with {} ({:?})", count, from, to, scope);
        self.bus().emit(EditorEvent::ColorReplaced {
            from,
            to,
            scope,
            count,
        });
        self.emit_state_restored();
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{EventBus, EventKind};
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Paint `n` cells of `face` with `color`, in row-major order
    fn paint_cells(model: &mut CubeModel, face: FaceName, n: u32, color: Color) {
        for i in 0..n {
            model.set_pixel(face, i % 16, i / 16, color);
        }
    }

    #[test]
    fn test_replace_current_face_only() {
        let mut model = CubeModel::new(EventBus::new());
        let black = Color::BLACK;
        let white = Color::WHITE;

        // Front: 40 white cells out of 256
        paint_cells(&mut model, FaceName::Front, 256, black);
        paint_cells(&mut model, FaceName::Front, 40, white);
        let others = model.snapshot();

        let from = Color::parse("#ffffff").unwrap();
        let to = Color::parse("#000000").unwrap();
        assert_eq!(model.replace_color(from, to, ReplaceScope::CurrentFace), 40);
        assert_eq!(model.face(FaceName::Front).count(black), 256);

        for face in FaceName::ALL.into_iter().filter(|f| *f != FaceName::Front) {
            assert_eq!(model.face(face), others.faces().face(face));
        }
    }

    #[test]
    fn test_replace_all_faces() {
        let mut model = CubeModel::new(EventBus::new());
        model.set_pixel(FaceName::Top, 0, 0, Color::BLACK);
        let red = Color::rgb(255, 0, 0);

        let count = model.replace_color(Color::WHITE, red, ReplaceScope::AllFaces);
        assert_eq!(count, 6 * 256 - 1);
        assert_eq!(model.get_pixel(FaceName::Top, 0, 0), Some(Color::BLACK));
        assert_eq!(model.face(FaceName::Bottom).count(red), 256);
    }

    #[test]
    fn test_replace_noops_emit_nothing() {
        let bus = EventBus::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&seen);
        bus.subscribe_all(move |e| log.borrow_mut().push(e.kind()));
        let mut model = CubeModel::new(bus);

        let same = Color::parse("#abcdef").unwrap();
        let same_lower = Color::parse("#ABCDEF").unwrap();
        assert_eq!(model.replace_color(same, same_lower, ReplaceScope::AllFaces), 0);
        assert_eq!(model.replace_color(same, Color::BLACK, ReplaceScope::AllFaces), 0);
        assert!(seen.borrow().is_empty());

        model.replace_color(Color::WHITE, Color::BLACK, ReplaceScope::CurrentFace);
        assert_eq!(
            *seen.borrow(),
            vec![EventKind::ColorReplaced, EventKind::StateRestored]
        );
    }
}
