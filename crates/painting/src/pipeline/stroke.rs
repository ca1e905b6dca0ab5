//! Pointer and stroke handling for the editing pipeline

use tracing::debug;

use crate::events::EditorEvent;

use super::{PaintingPipeline, PointerEvent, PointerKind};

impl PaintingPipeline {
    /// Dispatch one pointer event
    ///
    /// - Down starts a stroke and paints under the pointer
    /// - Move paints while stroking, otherwise reports the hovered color
    /// - Up ends the stroke
    /// - Leave ends the stroke and clears the hover
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event.kind {
            PointerKind::Down => {
                self.begin_stroke();
                self.stroke_to(event.x, event.y);
            }
            PointerKind::Move => {
                if self.is_stroking() {
                    self.stroke_to(event.x, event.y);
                } else {
                    self.hover(event.x, event.y);
                }
            }
            PointerKind::Up => {
                self.end_stroke();
            }
            PointerKind::Leave => {
                self.end_stroke();
                self.model.bus().emit(EditorEvent::PixelHover { color: None });
            }
        }
    }

    /// Begin a stroke on the current face
    ///
    /// A stroke already in progress is ended (and recorded) first. Pixel
    /// edits made through [`PaintingPipeline::model_mut`] since the last
    /// recorded state are committed as their own entry, so a later
    /// [`PaintingPipeline::cancel_stroke`] cannot roll them back.
    pub fn begin_stroke(&mut self) {
        if self.is_stroking() {
            self.end_stroke();
        }
        let pending = self
            .history
            .current()
            .is_none_or(|snapshot| snapshot.faces() != self.model.all_faces());
        if pending {
            self.history.save_state(&self.model);
            debug!("Committed direct edits before stroke");
        }
        self.brush.begin_stroke();
        self.stroke_dirty = false;
    }

    /// Continue a stroke at a surface position
    ///
    /// Paints the current color with the current brush size on the current
    /// face. Returns the number of cells written; zero when no stroke is
    /// active, the position is off the grid, or the pointer is still on the
    /// previous anchor cell.
    pub fn stroke_to(&mut self, x: f32, y: f32) -> usize {
        let Some(anchor) = self.cell_at(x, y) else {
            debug!("stroke_to: non-finite position, ignoring");
            return 0;
        };

        let cells = self.brush.stroke_to(anchor, self.model.brush_size());
        if cells.is_empty() {
            return 0;
        }

        let face = self.model.current_face();
        let color = self.model.current_color();
        for &(cx, cy) in &cells {
            if self.model.get_pixel(face, cx, cy) != Some(color) {
                self.stroke_dirty = true;
            }
            self.model.set_pixel(face, cx, cy, color);
        }
        cells.len()
    }

    /// End the current stroke
    ///
    /// Records one history snapshot if the stroke changed any pixel.
    /// Returns whether a snapshot was recorded.
    pub fn end_stroke(&mut self) -> bool {
        if !self.is_stroking() {
            return false;
        }
        self.brush.end_stroke();

        let recorded = std::mem::take(&mut self.stroke_dirty);
        if recorded {
            self.history.save_state(&self.model);
            debug!("Stroke finished on {}", self.model.current_face());
        }
        recorded
    }

    /// Cancel the current stroke
    ///
    /// Pixels written by the stroke are rolled back to the last recorded
    /// state, and nothing is added to history. Since `begin_stroke` records
    /// any pending direct edits, only the stroke's own pixels are lost.
    pub fn cancel_stroke(&mut self) {
        if !self.is_stroking() {
            return;
        }
        self.brush.end_stroke();

        if std::mem::take(&mut self.stroke_dirty) {
            if let Some(snapshot) = self.history.current().cloned() {
                self.model.restore(&snapshot);
            }
            debug!("Stroke cancelled and rolled back");
        }
    }

    /// Check if a stroke is currently in progress
    pub fn is_stroking(&self) -> bool {
        self.brush.is_stroking()
    }

    /// Report the color under the pointer. Positions off the grid report nothing.
    pub(crate) fn hover(&self, x: f32, y: f32) {
        let Some((cx, cy)) = self.cell_at(x, y) else {
            return;
        };
        let (Ok(cx), Ok(cy)) = (u32::try_from(cx), u32::try_from(cy)) else {
            return;
        };
        let Some(color) = self.model.get_pixel(self.model.current_face(), cx, cy) else {
            return;
        };
        self.model
            .bus()
            .emit(EditorEvent::PixelHover { color: Some(color) });
    }
}
