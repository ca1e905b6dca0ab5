//! Texture atlas: all six faces at native resolution in one image

use crate::color::Color;
use crate::constants::{GRID_SIZE, NET_COLUMNS, NET_ROWS};
use crate::face::CubeFaces;
use crate::surface::{RenderSurface, RgbCanvas};

use super::{FACE_LAYOUT, grid_position};

pub const ATLAS_WIDTH: u32 = NET_COLUMNS * GRID_SIZE as u32;
pub const ATLAS_HEIGHT: u32 = NET_ROWS * GRID_SIZE as u32;

/// Compose the 64x48 atlas, one 16px cell per face in the cross layout.
///
/// Cells without a face stay white.
pub fn compose_atlas(faces: &CubeFaces) -> RgbCanvas {
    let mut canvas = RgbCanvas::new(ATLAS_WIDTH, ATLAS_HEIGHT, Color::WHITE);
    let cell = GRID_SIZE as u32;

    for face in FACE_LAYOUT {
        let origin = grid_position(face) * cell;
        for (y, row) in faces.face(face).rows().iter().enumerate() {
            for (x, color) in row.iter().enumerate() {
                canvas.put_pixel(origin.x + x as u32, origin.y + y as u32, *color);
            }
        }
    }

    canvas
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::face::PixelFace;

    #[test]
    fn test_atlas_dimensions() {
        let atlas = compose_atlas(&CubeFaces::default());
        assert_eq!(atlas.width, 64);
        assert_eq!(atlas.height, 48);
    }

    #[test]
    fn test_faces_at_cross_positions() {
        let red = Color::rgb(255, 0, 0);
        let blue = Color::rgb(0, 0, 255);
        let mut faces = CubeFaces::default();
        faces.top = PixelFace::filled(red);
        faces.back = PixelFace::filled(blue);
        faces.bottom.set(15, 15, Color::BLACK);

        let atlas = compose_atlas(&faces);
        assert_eq!(atlas.get_pixel(16, 0), Some(red));
        assert_eq!(atlas.get_pixel(31, 15), Some(red));
        assert_eq!(atlas.get_pixel(48, 16), Some(blue));
        assert_eq!(atlas.get_pixel(63, 31), Some(blue));
        assert_eq!(atlas.get_pixel(31, 47), Some(Color::BLACK));
        // empty corner cell
        assert_eq!(atlas.get_pixel(0, 0), Some(Color::WHITE));
    }
}
