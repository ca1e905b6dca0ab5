//! Fixed-size pixel grids for the six cube faces

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::constants::GRID_SIZE;
use crate::types::FaceName;

/// A 16x16 grid of colors, stored row-major (`rows[y][x]`)
///
/// The dimensions are part of the type, so a face can never be resized or
/// hold a missing cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PixelFace {
    rows: [[Color; GRID_SIZE]; GRID_SIZE],
}

impl PixelFace {
    /// Create a face filled with a single color
    pub fn filled(color: Color) -> Self {
        Self {
            rows: [[color; GRID_SIZE]; GRID_SIZE],
        }
    }

    /// Build a face from nested rows, returning None unless the input is exactly 16x16
    pub fn from_rows(rows: &[Vec<Color>]) -> Option<Self> {
        if rows.len() != GRID_SIZE || rows.iter().any(|row| row.len() != GRID_SIZE) {
            return None;
        }
        let mut face = Self::filled(Color::default());
        for (dst, src) in face.rows.iter_mut().zip(rows) {
            dst.copy_from_slice(src);
        }
        Some(face)
    }

    /// Get a pixel at the given coordinates
    /// Returns None if coordinates are out of bounds
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<Color> {
        let (x, y) = (x as usize, y as usize);
        self.rows.get(y)?.get(x).copied()
    }

    /// Set a pixel at the given coordinates
    /// Returns false (and does nothing) if coordinates are out of bounds
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, color: Color) -> bool {
        let (x, y) = (x as usize, y as usize);
        match self.rows.get_mut(y).and_then(|row| row.get_mut(x)) {
            Some(cell) => {
                *cell = color;
                true
            }
            None => false,
        }
    }

    /// Fill every cell with one color
    pub fn clear(&mut self, color: Color) {
        self.rows = [[color; GRID_SIZE]; GRID_SIZE];
    }

    /// Replace every cell equal to `from` with `to`, returning how many changed
    pub fn replace(&mut self, from: Color, to: Color) -> usize {
        if from == to {
            return 0;
        }
        let mut count = 0;
        for cell in self.rows.iter_mut().flatten() {
            if *cell == from {
                *cell = to;
                count += 1;
            }
        }
        count
    }

    /// Count cells holding the given color
    pub fn count(&self, color: Color) -> usize {
        self.rows.iter().flatten().filter(|c| **c == color).count()
    }

    #[inline]
    pub fn rows(&self) -> &[[Color; GRID_SIZE]; GRID_SIZE] {
        &self.rows
    }

    /// Raw RGB bytes in row-major order, suitable for texture upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.rows.as_slice())
    }
}

impl Default for PixelFace {
    fn default() -> Self {
        Self::filled(Color::WHITE)
    }
}

/// All six faces of the cube
///
/// Named fields instead of a keyed map: every face always exists.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CubeFaces {
    pub top: PixelFace,
    pub bottom: PixelFace,
    pub front: PixelFace,
    pub back: PixelFace,
    pub left: PixelFace,
    pub right: PixelFace,
}

impl CubeFaces {
    /// All six faces filled with one color
    pub fn filled(color: Color) -> Self {
        let face = PixelFace::filled(color);
        Self {
            top: face.clone(),
            bottom: face.clone(),
            front: face.clone(),
            back: face.clone(),
            left: face.clone(),
            right: face,
        }
    }

    pub fn face(&self, name: FaceName) -> &PixelFace {
        match name {
            FaceName::Top => &self.top,
            FaceName::Bottom => &self.bottom,
            FaceName::Front => &self.front,
            FaceName::Back => &self.back,
            FaceName::Left => &self.left,
            FaceName::Right => &self.right,
        }
    }

    pub fn face_mut(&mut self, name: FaceName) -> &mut PixelFace {
        match name {
            FaceName::Top => &mut self.top,
            FaceName::Bottom => &mut self.bottom,
            FaceName::Front => &mut self.front,
            FaceName::Back => &mut self.back,
            FaceName::Left => &mut self.left,
            FaceName::Right => &mut self.right,
        }
    }

    /// Iterate faces in document order
    pub fn iter(&self) -> impl Iterator<Item = (FaceName, &PixelFace)> {
        FaceName::ALL.into_iter().map(|name| (name, self.face(name)))
    }
}

/// Immutable copy of all six faces at one point in time
///
/// Cloning a snapshot shares the underlying grids; the model only ever
/// reads from it, so history entries can never be mutated after capture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot(Arc<CubeFaces>);

impl Snapshot {
    pub fn new(faces: CubeFaces) -> Self {
        Self(Arc::new(faces))
    }

    pub fn faces(&self) -> &CubeFaces {
        &self.0
    }

    /// Deep copy of the captured faces
    pub fn to_faces(&self) -> CubeFaces {
        (*self.0).clone()
    }
}
