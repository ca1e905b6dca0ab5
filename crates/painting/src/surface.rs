//! Rendering surfaces - 8-bit RGB pixel grids the engine writes into

use crate::color::Color;

/// A 2-D grid that accepts RGB writes
///
/// Presentation layers implement this for their canvas type; the engine only
/// ever writes whole pixels through it.
pub trait RenderSurface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Write a pixel. Out-of-bounds writes must be ignored.
    fn put_pixel(&mut self, x: u32, y: u32, color: Color);

    /// Fill a rectangle, clipped to the surface
    fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Color) {
        let x_end = x.saturating_add(w).min(self.width());
        let y_end = y.saturating_add(h).min(self.height());
        for py in y..y_end {
            for px in x..x_end {
                self.put_pixel(px, py, color);
            }
        }
    }
}

/// An in-memory RGB surface
/// Stores pixels row-major, one [`Color`] per pixel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbCanvas {
    /// Surface dimensions
    pub width: u32,
    pub height: u32,
    pixels: Vec<Color>,
}

impl RgbCanvas {
    /// Create a new canvas filled with one color
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        let pixel_count = (width as usize) * (height as usize);
        Self {
            width,
            height,
            pixels: vec![background; pixel_count],
        }
    }

    /// Clear the canvas to a solid color
    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// Get a pixel at the given coordinates
    /// Returns None if coordinates are out of bounds
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let index = (y as usize) * (self.width as usize) + (x as usize);
        Some(self.pixels[index])
    }

    /// Set a pixel at the given coordinates
    /// Does nothing if coordinates are out of bounds
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        if x >= self.width || y >= self.height {
            return;
        }
        let index = (y as usize) * (self.width as usize) + (x as usize);
        self.pixels[index] = color;
    }

    /// Raw RGB bytes for upload or encoding
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Get the total number of pixels
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    #[inline]
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }
}

impl RenderSurface for RgbCanvas {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn put_pixel(&mut self, x: u32, y: u32, color: Color) {
        self.set_pixel(x, y, color);
    }
}
