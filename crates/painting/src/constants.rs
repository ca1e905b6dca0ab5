/// Side length of every face grid, in cells.
pub const GRID_SIZE: usize = 16;

/// Number of cells in one face.
pub const CELLS_PER_FACE: usize = GRID_SIZE * GRID_SIZE;

/// Number of faces on the cube.
pub const FACE_COUNT: usize = 6;

/// Default maximum number of undo snapshots.
pub const MAX_HISTORY_STATES: usize = 50;

/// Exchange document format version.
pub const DOCUMENT_VERSION: &str = "1.0";

/// Net and atlas grid: 4 columns by 3 rows of faces.
pub const NET_COLUMNS: u32 = 4;
pub const NET_ROWS: u32 = 3;

/// Largest net canvas side, in pixels.
pub const MAX_NET_CANVAS_SIZE: u32 = 16384;
