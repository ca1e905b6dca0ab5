//! Swatch palette shown next to the color picker

use pixelcube_config::PaletteConfig;
use thiserror::Error;
use tracing::{debug, warn};

use crate::color::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PaletteError {
    #[error("Palette is full ({max} colors); remove a color first")]
    Full { max: usize },
}

/// Starting swatches, a Minecraft-flavoured set of 24
pub const DEFAULT_PALETTE: [Color; 24] = [
    Color::rgb(0xFF, 0xFF, 0xFF),
    Color::rgb(0x00, 0x00, 0x00),
    Color::rgb(0x80, 0x80, 0x80),
    Color::rgb(0xC0, 0xC0, 0xC0),
    Color::rgb(0x8B, 0x45, 0x13),
    Color::rgb(0xD2, 0x69, 0x1E),
    Color::rgb(0x22, 0x8B, 0x22),
    Color::rgb(0x32, 0xCD, 0x32),
    Color::rgb(0x00, 0x64, 0x00),
    Color::rgb(0x41, 0x69, 0xE1),
    Color::rgb(0x1E, 0x90, 0xFF),
    Color::rgb(0x00, 0x00, 0x8B),
    Color::rgb(0xFF, 0x00, 0x00),
    Color::rgb(0xDC, 0x14, 0x3C),
    Color::rgb(0xFF, 0xD7, 0x00),
    Color::rgb(0xFF, 0xA5, 0x00),
    Color::rgb(0xFF, 0xFF, 0x00),
    Color::rgb(0x80, 0x00, 0x80),
    Color::rgb(0xFF, 0x00, 0xFF),
    Color::rgb(0xFF, 0xC0, 0xCB),
    Color::rgb(0xA5, 0x2A, 0x2A),
    Color::rgb(0xF5, 0xDE, 0xB3),
    Color::rgb(0xD2, 0xB4, 0x8C),
    Color::rgb(0x70, 0x80, 0x90),
];

/// Ordered list of unique swatches with a capacity and a protected prefix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
    max_colors: usize,
    protected_colors: usize,
}

impl Default for Palette {
    fn default() -> Self {
        Self::with_config(&PaletteConfig::default())
    }
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default swatches with limits from config
    pub fn with_config(config: &PaletteConfig) -> Self {
        let max_colors = config.max_colors.max(1);
        let mut colors = DEFAULT_PALETTE.to_vec();
        colors.truncate(max_colors);
        Self {
            colors,
            max_colors,
            protected_colors: config.protected_colors.min(max_colors),
        }
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn max_colors(&self) -> usize {
        self.max_colors
    }

    pub fn contains(&self, color: Color) -> bool {
        self.colors.contains(&color)
    }

    pub fn is_protected(&self, index: usize) -> bool {
        index < self.protected_colors
    }

    /// Append a swatch.
    ///
    /// Returns `Ok(false)` if the color is already present.
    pub fn add(&mut self, color: Color) -> Result<bool, PaletteError> {
        if self.contains(color) {
            return Ok(false);
        }
        if self.colors.len() >= self.max_colors {
            return Err(PaletteError::Full {
                max: self.max_colors,
            });
        }
        debug!("Palette: added {}", color);
        self.colors.push(color);
        Ok(true)
    }

    /// Remove the swatch at `index`. Protected and out-of-range indices are refused.
    pub fn remove(&mut self, index: usize) -> bool {
        if self.is_protected(index) || index >= self.colors.len() {
            return false;
        }
        let color = self.colors.remove(index);
        debug!("Palette: removed {}", color);
        true
    }

    /// Replace all swatches, dropping duplicates and anything past capacity
    pub fn load(&mut self, colors: impl IntoIterator<Item = Color>) {
        let mut loaded = Vec::with_capacity(self.max_colors);
        let mut dropped = 0usize;
        for color in colors {
            if loaded.contains(&color) {
                continue;
            }
            if loaded.len() >= self.max_colors {
                dropped += 1;
                continue;
            }
            loaded.push(color);
        }
        if dropped > 0 {
            warn!(
                "Palette load: {} colors beyond capacity {} were dropped",
                dropped, self.max_colors
            );
        }
        self.colors = loaded;
    }
}
