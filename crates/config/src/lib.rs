//! Shared configuration for the pixel cube editor
//!
//! This crate provides the single source of truth for editor defaults,
//! paper-craft net export settings and palette limits. Values are kept as
//! plain strings and numbers so any presentation layer can load them without
//! depending on the engine.

use serde::{Deserialize, Serialize};

/// Side length of every face grid in cells
pub const DEFAULT_GRID_SIZE: u32 = 16;

/// Size of one grid cell on the drawing surface, in pixels (15 * 16 = 240px)
pub const DEFAULT_CELL_SIZE_PX: f32 = 15.0;

/// Maximum number of snapshots kept on the undo stack
pub const DEFAULT_HISTORY_DEPTH: usize = 50;

/// Color used for blank faces
pub const DEFAULT_FILL: &str = "#FFFFFF";

/// Initial drawing color
pub const DEFAULT_COLOR: &str = "#000000";

/// Face selected at startup
pub const DEFAULT_FACE: &str = "front";

/// Brush size at startup
pub const DEFAULT_BRUSH_SIZE: u8 = 1;

/// Default printed face edge length in millimetres
pub const DEFAULT_FACE_SIZE_MM: f32 = 40.0;

/// Smallest face size offered by the export dialog
pub const MIN_FACE_SIZE_MM: f32 = 20.0;

/// Largest face size offered by the export dialog
pub const MAX_FACE_SIZE_MM: f32 = 100.0;

/// Pixels per millimetre at 96 DPI
pub const DEFAULT_MM_TO_PX: f32 = 3.78;

/// Glue tab depth as a fraction of the face size
pub const DEFAULT_TAB_RATIO: f32 = 0.25;

/// Glue tab taper as a fraction of the face size
pub const DEFAULT_TAPER_RATIO: f32 = 0.125;

/// Stroke width of printed cut lines, in pixels
pub const DEFAULT_CUT_LINE_WIDTH: f32 = 1.5;

/// Maximum number of palette entries
pub const DEFAULT_MAX_PALETTE_COLORS: usize = 32;

/// Leading palette entries that cannot be removed
pub const DEFAULT_PROTECTED_PALETTE_COLORS: usize = 8;

/// Editor defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Side length of a face grid in cells
    pub grid_size: u32,
    /// Pixel size of one cell on the drawing surface
    pub cell_size_px: f32,
    /// Maximum undo snapshots
    pub history_depth: usize,
    /// Blank face color (hex)
    pub default_fill: String,
    /// Initial drawing color (hex)
    pub default_color: String,
    /// Initially selected face name
    pub default_face: String,
    /// Initial brush size (1-3)
    pub default_brush_size: u8,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            cell_size_px: DEFAULT_CELL_SIZE_PX,
            history_depth: DEFAULT_HISTORY_DEPTH,
            default_fill: DEFAULT_FILL.to_string(),
            default_color: DEFAULT_COLOR.to_string(),
            default_face: DEFAULT_FACE.to_string(),
            default_brush_size: DEFAULT_BRUSH_SIZE,
        }
    }
}

impl EditorConfig {
    /// Pixel size of the whole drawing surface along one axis
    pub fn surface_size_px(&self) -> f32 {
        self.cell_size_px * self.grid_size as f32
    }
}

/// Paper-craft net export settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetConfig {
    /// Printed face edge length in millimetres
    pub face_size_mm: f32,
    /// Millimetre to pixel conversion factor
    pub mm_to_px: f32,
    /// Tab depth as a fraction of the face size
    pub tab_ratio: f32,
    /// Tab taper as a fraction of the face size
    pub taper_ratio: f32,
    /// Cut line stroke width in pixels
    pub cut_line_width: f32,
}

impl Default for NetConfig {
    fn default() -> Self {
        Self {
            face_size_mm: DEFAULT_FACE_SIZE_MM,
            mm_to_px: DEFAULT_MM_TO_PX,
            tab_ratio: DEFAULT_TAB_RATIO,
            taper_ratio: DEFAULT_TAPER_RATIO,
            cut_line_width: DEFAULT_CUT_LINE_WIDTH,
        }
    }
}

impl NetConfig {
    /// Create a net config for the given face size, clamped to the dialog range
    pub fn with_face_size_mm(face_size_mm: f32) -> Self {
        Self {
            face_size_mm: face_size_mm.clamp(MIN_FACE_SIZE_MM, MAX_FACE_SIZE_MM),
            ..Default::default()
        }
    }

    /// Tab depth in millimetres
    pub fn tab_size_mm(&self) -> f32 {
        self.face_size_mm * self.tab_ratio
    }

    /// Tab taper in millimetres
    pub fn taper_size_mm(&self) -> f32 {
        self.face_size_mm * self.taper_ratio
    }
}

/// Palette limits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    pub max_colors: usize,
    pub protected_colors: usize,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            max_colors: DEFAULT_MAX_PALETTE_COLORS,
            protected_colors: DEFAULT_PROTECTED_PALETTE_COLORS,
        }
    }
}
