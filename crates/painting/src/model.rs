//! Authoritative editor state: six faces plus the current tool selection.

use std::collections::HashMap;

use pixelcube_config::EditorConfig;
use tracing::{debug, warn};

use crate::color::Color;
use crate::events::{EditorEvent, EventBus};
use crate::face::{CubeFaces, PixelFace, Snapshot};
use crate::types::{BrushSize, FaceName};
use crate::validation::{DocumentError, validate_face_grids};

/// The cube being edited.
///
/// All mutation goes through these methods, and each one announces itself
/// on the event bus before returning. Invalid face/coordinate references are
/// silently ignored.
#[derive(Debug)]
pub struct CubeModel {
    faces: CubeFaces,
    current_face: FaceName,
    current_color: Color,
    brush_size: BrushSize,
    /// Color used when a face is cleared
    fill: Color,
    bus: EventBus,
}

impl CubeModel {
    /// Create a model with white faces, black ink and the front face selected.
    pub fn new(bus: EventBus) -> Self {
        Self {
            faces: CubeFaces::filled(Color::WHITE),
            current_face: FaceName::Front,
            current_color: Color::BLACK,
            brush_size: BrushSize::default(),
            fill: Color::WHITE,
            bus,
        }
    }

    /// Create a model from configured defaults.
    ///
    /// Unparsable values fall back to the built-in defaults.
    pub fn from_config(config: &EditorConfig, bus: EventBus) -> Self {
        let mut model = Self::new(bus);

        match Color::parse(&config.default_fill) {
            Ok(fill) => {
                model.fill = fill;
                model.faces = CubeFaces::filled(fill);
            }
            Err(e) => warn!("Ignoring configured fill: {}", e),
        }
        match Color::parse(&config.default_color) {
            Ok(color) => model.current_color = color,
            Err(e) => warn!("Ignoring configured color: {}", e),
        }
        match config.default_face.parse::<FaceName>() {
            Ok(face) => model.current_face = face,
            Err(e) => warn!("Ignoring configured face: {}", e),
        }
        match BrushSize::new(config.default_brush_size) {
            Some(size) => model.brush_size = size,
            None => warn!(
                "Ignoring configured brush size {}",
                config.default_brush_size
            ),
        }

        model
    }

    /// The bus this model notifies.
    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    pub fn current_face(&self) -> FaceName {
        self.current_face
    }

    pub fn current_color(&self) -> Color {
        self.current_color
    }

    pub fn brush_size(&self) -> BrushSize {
        self.brush_size
    }

    /// Blank-face color.
    pub fn fill(&self) -> Color {
        self.fill
    }

    /// Read-only view of all faces, for exporters and renderers.
    pub fn all_faces(&self) -> &CubeFaces {
        &self.faces
    }

    pub fn face(&self, face: FaceName) -> &PixelFace {
        self.faces.face(face)
    }

    /// Get a pixel. Returns None for out-of-range coordinates.
    pub fn get_pixel(&self, face: FaceName, x: u32, y: u32) -> Option<Color> {
        self.faces.face(face).get(x, y)
    }

    /// Look up a face by name first; unknown names return None.
    pub fn get_pixel_by_name(&self, face: &str, x: u32, y: u32) -> Option<Color> {
        let face = face.parse::<FaceName>().ok()?;
        self.get_pixel(face, x, y)
    }

    /// Write a pixel and emit `PixelChanged`. Out-of-range writes do nothing.
    pub fn set_pixel(&mut self, face: FaceName, x: u32, y: u32, color: Color) -> bool {
        if !self.faces.face_mut(face).set(x, y, color) {
            return false;
        }
        self.bus.emit(EditorEvent::PixelChanged { face, x, y, color });
        true
    }

    /// Name-based variant of [`set_pixel`](Self::set_pixel); unknown names do nothing.
    pub fn set_pixel_by_name(&mut self, face: &str, x: u32, y: u32, color: Color) -> bool {
        match face.parse::<FaceName>() {
            Ok(face) => self.set_pixel(face, x, y, color),
            Err(_) => false,
        }
    }

    pub fn set_current_face(&mut self, face: FaceName) {
        self.current_face = face;
        self.bus.emit(EditorEvent::FaceChanged { face });
    }

    /// Select a face by name; unknown names do nothing.
    pub fn set_current_face_by_name(&mut self, face: &str) -> bool {
        match face.parse::<FaceName>() {
            Ok(face) => {
                self.set_current_face(face);
                true
            }
            Err(_) => false,
        }
    }

    pub fn set_current_color(&mut self, color: Color) {
        self.current_color = color;
        self.bus.emit(EditorEvent::ColorChanged { color });
    }

    /// Set the brush size; values outside 1..=3 are ignored.
    pub fn set_brush_size(&mut self, size: u8) -> bool {
        let Some(size) = BrushSize::new(size) else {
            return false;
        };
        self.brush_size = size;
        self.bus.emit(EditorEvent::BrushSizeChanged { size });
        true
    }

    /// Overwrite `target` with a copy of `source`.
    pub fn copy_face(&mut self, source: FaceName, target: FaceName) {
        let copy = self.faces.face(source).clone();
        *self.faces.face_mut(target) = copy;
        debug!("Copied face {} -> {}", source, target);

        self.bus.emit(EditorEvent::FaceCopied { source, target });
        self.emit_state_restored();
    }

    /// Reset a face to the blank fill.
    pub fn clear_face(&mut self, face: FaceName) {
        self.faces.face_mut(face).clear(self.fill);
        debug!("Cleared face {}", face);

        self.bus.emit(EditorEvent::FaceCleared { face });
        self.emit_state_restored();
    }

    /// Replace all six faces at once.
    ///
    /// The input must contain a 16x16 grid for every face; otherwise the
    /// model is left untouched and the reason is returned.
    pub fn load_faces(
        &mut self,
        grids: &HashMap<FaceName, Vec<Vec<Color>>>,
    ) -> Result<(), DocumentError> {
        let faces = validate_face_grids(grids)?;
        self.replace_faces(faces);
        Ok(())
    }

    /// Replace all six faces with an already validated set.
    pub fn replace_faces(&mut self, faces: CubeFaces) {
        self.faces = faces;
        self.emit_state_restored();
    }

    /// Deep copy of the current faces.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.faces.clone())
    }

    /// Restore faces from a snapshot.
    pub fn restore(&mut self, snapshot: &Snapshot) {
        self.faces = snapshot.to_faces();
        self.bus.emit(EditorEvent::StateRestored {
            faces: snapshot.clone(),
        });
    }

    /// Bulk writes skip per-pixel events and ask listeners to redraw everything.
    pub(crate) fn emit_state_restored(&self) {
        self.bus.emit(EditorEvent::StateRestored {
            faces: self.snapshot(),
        });
    }

    pub(crate) fn faces_mut(&mut self) -> &mut CubeFaces {
        &mut self.faces
    }
}
