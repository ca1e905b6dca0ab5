use std::collections::HashMap;

use thiserror::Error;

use crate::color::{Color, ColorError};
use crate::constants::GRID_SIZE;
use crate::face::CubeFaces;
use crate::types::FaceName;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Invalid file format: Missing version or faces data")]
    MissingVersionOrFaces,
    #[error("Incompatible grid size: Expected {}, got {actual}", GRID_SIZE)]
    GridSize { actual: u64 },
    #[error("Missing face data: {0}")]
    MissingFace(FaceName),
    #[error("Invalid face dimensions for {face}: expected {} rows, got {rows}", GRID_SIZE)]
    FaceRows { face: FaceName, rows: usize },
    #[error("Invalid row length in face {face}: row {row} has {len} values")]
    RowLength { face: FaceName, row: usize, len: usize },
    #[error("Invalid color in face {face} at ({x}, {y}): {source}")]
    InvalidColor {
        face: FaceName,
        x: usize,
        y: usize,
        #[source]
        source: ColorError,
    },
    #[error("Malformed document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Check that a grid size field matches the fixed face dimension
pub fn validate_grid_size(grid_size: u64) -> Result<(), DocumentError> {
    if grid_size != GRID_SIZE as u64 {
        return Err(DocumentError::GridSize { actual: grid_size });
    }
    Ok(())
}

/// Validate typed grids for all six faces and assemble them
pub fn validate_face_grids(
    grids: &HashMap<FaceName, Vec<Vec<Color>>>,
) -> Result<CubeFaces, DocumentError> {
    build_faces(|face| grids.get(&face).map(Vec::as_slice), |cell| Ok(*cell))
}

/// Assemble six faces from loosely-shaped rows.
///
/// Faces are checked in document order; the first problem found is returned
/// and nothing is built.
pub(crate) fn build_faces<'a, T: 'a>(
    lookup: impl Fn(FaceName) -> Option<&'a [Vec<T>]>,
    parse: impl Fn(&T) -> Result<Color, ColorError>,
) -> Result<CubeFaces, DocumentError> {
    let mut faces = CubeFaces::default();

    for face in FaceName::ALL {
        let rows = lookup(face).ok_or(DocumentError::MissingFace(face))?;
        if rows.len() != GRID_SIZE {
            return Err(DocumentError::FaceRows {
                face,
                rows: rows.len(),
            });
        }

        let target = faces.face_mut(face);
        for (y, row) in rows.iter().enumerate() {
            if row.len() != GRID_SIZE {
                return Err(DocumentError::RowLength {
                    face,
                    row: y,
                    len: row.len(),
                });
            }
            for (x, cell) in row.iter().enumerate() {
                let color = parse(cell)
                    .map_err(|source| DocumentError::InvalidColor { face, x, y, source })?;
                target.set(x as u32, y as u32, color);
            }
        }
    }

    Ok(faces)
}
