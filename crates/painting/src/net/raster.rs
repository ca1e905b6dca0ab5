//! Nearest-neighbour upscaling of faces for print

use glam::UVec2;

use crate::color::Color;
use crate::constants::GRID_SIZE;
use crate::face::PixelFace;
use crate::surface::RenderSurface;

/// A face upscaled to `size` x `size` pixels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaledFace {
    pub size: u32,
    pixels: Vec<Color>,
}

impl ScaledFace {
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.size || y >= self.size {
            return None;
        }
        Some(self.pixels[(y as usize) * (self.size as usize) + (x as usize)])
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Copy this image onto a surface with its top-left corner at `origin`
    pub fn blit(&self, surface: &mut impl RenderSurface, origin: UVec2) {
        for y in 0..self.size {
            for x in 0..self.size {
                if let Some(color) = self.get_pixel(x, y) {
                    surface.put_pixel(origin.x + x, origin.y + y, color);
                }
            }
        }
    }
}

/// Upscale a 16x16 face to `size` x `size` without smoothing.
///
/// Each source cell covers a square starting at `floor(i * scale)` with side
/// `ceil(scale)`, clipped to the image. Neighbouring squares may overlap by
/// a pixel but never leave a gap.
pub fn scale_face(face: &PixelFace, size: u32) -> ScaledFace {
    let side = size as usize;
    let mut pixels = vec![Color::default(); side * side];
    if side == 0 {
        return ScaledFace { size, pixels };
    }

    let scale = f64::from(size) / GRID_SIZE as f64;
    let cell = scale.ceil() as usize;

    for (sy, row) in face.rows().iter().enumerate() {
        let py = (sy as f64 * scale).floor() as usize;
        for (sx, color) in row.iter().enumerate() {
            let px = (sx as f64 * scale).floor() as usize;
            for y in py..(py + cell).min(side) {
                let start = y * side + px;
                let end = y * side + (px + cell).min(side);
                pixels[start..end].fill(*color);
            }
        }
    }

    ScaledFace { size, pixels }
}
