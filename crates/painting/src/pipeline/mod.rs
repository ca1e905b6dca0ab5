//! Complete editing pipeline
//!
//! This module connects:
//! - Pointer input (already translated to drawing-surface pixels)
//! - Brush engine (cell stamping with per-anchor dedup)
//! - Cube model (pixel writes and notifications)
//! - History (one snapshot per completed user action)
//!
//! The pipeline has no knowledge of the host UI; it only needs positions in
//! local surface coordinates and an [`EventBus`] to announce changes on.

mod actions;
mod stroke;
mod undo;

use pixelcube_config::{DEFAULT_CELL_SIZE_PX, EditorConfig};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::brush::BrushEngine;
use crate::constants::GRID_SIZE;
use crate::events::EventBus;
use crate::history::HistoryManager;
use crate::model::CubeModel;

/// Kind of pointer input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerKind {
    /// Button pressed (or touch started)
    Down,
    /// Pointer moved, pressed or not
    Move,
    /// Button released
    Up,
    /// Pointer left the drawing surface
    Leave,
}

/// Pointer input in local drawing-surface pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub x: f32,
    pub y: f32,
}

impl PointerEvent {
    pub fn down(x: f32, y: f32) -> Self {
        Self {
            kind: PointerKind::Down,
            x,
            y,
        }
    }

    pub fn moved(x: f32, y: f32) -> Self {
        Self {
            kind: PointerKind::Move,
            x,
            y,
        }
    }

    pub fn up(x: f32, y: f32) -> Self {
        Self {
            kind: PointerKind::Up,
            x,
            y,
        }
    }

    pub fn leave() -> Self {
        Self {
            kind: PointerKind::Leave,
            x: -1.0,
            y: -1.0,
        }
    }
}

/// Complete editing pipeline for one cube
///
/// This struct manages the full editing workflow:
/// 1. Pointer input comes in via `handle_pointer` (or `begin_stroke`, `stroke_to`, `end_stroke`)
/// 2. The brush engine turns the anchor cell into a set of cells
/// 3. Cells are written to the current face of the model
/// 4. A history snapshot is recorded once the action completes
#[derive(Debug)]
pub struct PaintingPipeline {
    /// Editor state
    pub(crate) model: CubeModel,
    /// Undo/redo snapshots
    pub(crate) history: HistoryManager,
    /// Brush stamping and anchor dedup
    pub(crate) brush: BrushEngine,
    /// Size of one cell on the drawing surface, in pixels
    pub(crate) cell_size: f32,
    /// Whether the current stroke has changed any pixel
    pub(crate) stroke_dirty: bool,
}

impl PaintingPipeline {
    /// Create a pipeline with default settings on the given bus
    pub fn new(bus: EventBus) -> Self {
        let model = CubeModel::new(bus);
        let history = HistoryManager::new(&model);
        Self {
            model,
            history,
            brush: BrushEngine::new(GRID_SIZE as u32),
            cell_size: DEFAULT_CELL_SIZE_PX,
            stroke_dirty: false,
        }
    }

    /// Create a pipeline from an editor config
    pub fn from_config(config: &EditorConfig, bus: EventBus) -> Self {
        if config.grid_size as usize != GRID_SIZE {
            warn!(
                "Configured grid size {} is not supported; using {}",
                config.grid_size, GRID_SIZE
            );
        }

        let cell_size = if config.cell_size_px.is_finite() && config.cell_size_px > 0.0 {
            config.cell_size_px
        } else {
            warn!(
                "Ignoring configured cell size {}; using {}",
                config.cell_size_px, DEFAULT_CELL_SIZE_PX
            );
            DEFAULT_CELL_SIZE_PX
        };

        let model = CubeModel::from_config(config, bus);
        let history = HistoryManager::with_capacity(&model, config.history_depth);
        Self {
            model,
            history,
            brush: BrushEngine::new(GRID_SIZE as u32),
            cell_size,
            stroke_dirty: false,
        }
    }

    /// Read-only editor state
    pub fn model(&self) -> &CubeModel {
        &self.model
    }

    /// Mutable editor state, for tool selection.
    ///
    /// Pixel edits made through this handle are not recorded; call
    /// [`PaintingPipeline::commit`] afterwards to snapshot them.
    pub fn model_mut(&mut self) -> &mut CubeModel {
        &mut self.model
    }

    pub fn history(&self) -> &HistoryManager {
        &self.history
    }

    pub fn bus(&self) -> &EventBus {
        self.model.bus()
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Side length of the drawing surface in pixels
    pub fn surface_size(&self) -> f32 {
        self.cell_size * GRID_SIZE as f32
    }

    /// Grid cell under a surface position, or None for non-finite input.
    ///
    /// The result may lie outside the grid.
    pub fn cell_at(&self, x: f32, y: f32) -> Option<(i32, i32)> {
        if !x.is_finite() || !y.is_finite() {
            return None;
        }
        let cx = (x / self.cell_size).floor();
        let cy = (y / self.cell_size).floor();
        Some((cx as i32, cy as i32))
    }
}
