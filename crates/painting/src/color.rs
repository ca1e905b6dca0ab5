//! RGB colors with a canonical uppercase hex form

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("Invalid color '{0}': expected #RGB or #RRGGBB")]
    InvalidFormat(String),
}

/// An opaque RGB color
///
/// Equality is component-wise, which makes it equivalent to comparing the
/// canonical `#RRGGBB` strings regardless of the case used on input.
/// Laid out as three bytes so a face can be handed to the GPU as-is.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    bytemuck::Pod,
    bytemuck::Zeroable,
)]
#[serde(try_from = "String", into = "String")]
#[repr(C)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB`, `RRGGBB`, `#RGB` or `RGB` in any letter case
    pub fn parse(text: &str) -> Result<Self, ColorError> {
        let invalid = || ColorError::InvalidFormat(text.to_string());
        let trimmed = text.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);

        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        match hex.len() {
            6 => {
                let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);
                let (Ok(r), Ok(g), Ok(b)) = (channel(0), channel(2), channel(4)) else {
                    return Err(invalid());
                };
                Ok(Self::rgb(r, g, b))
            }
            3 => {
                // #abc expands to #aabbcc
                let channel = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).map(|v| v * 17);
                let (Ok(r), Ok(g), Ok(b)) = (channel(0), channel(1), channel(2)) else {
                    return Err(invalid());
                };
                Ok(Self::rgb(r, g, b))
            }
            _ => Err(invalid()),
        }
    }

    /// Canonical `#RRGGBB` form
    pub fn to_hex(self) -> String {
        self.to_string()
    }

    /// Normalized [r, g, b, a] for renderers working in floats
    pub fn to_rgba_f32(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            1.0,
        ]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for Color {
    type Error = ColorError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}
