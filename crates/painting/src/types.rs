use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the six cube faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FaceName {
    Top,
    Bottom,
    Front,
    Back,
    Left,
    Right,
}

impl FaceName {
    /// All faces, in document order
    pub const ALL: [FaceName; 6] = [
        FaceName::Top,
        FaceName::Bottom,
        FaceName::Front,
        FaceName::Back,
        FaceName::Left,
        FaceName::Right,
    ];

    /// Lowercase identifier used in documents and events
    pub fn as_str(self) -> &'static str {
        match self {
            FaceName::Top => "top",
            FaceName::Bottom => "bottom",
            FaceName::Front => "front",
            FaceName::Back => "back",
            FaceName::Left => "left",
            FaceName::Right => "right",
        }
    }

    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            FaceName::Top => "Top",
            FaceName::Bottom => "Bottom",
            FaceName::Front => "Front",
            FaceName::Back => "Back",
            FaceName::Left => "Left",
            FaceName::Right => "Right",
        }
    }
}

impl fmt::Display for FaceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name one of the six faces
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown face name: {0}")]
pub struct UnknownFace(pub String);

impl FromStr for FaceName {
    type Err = UnknownFace;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FaceName::ALL
            .into_iter()
            .find(|face| face.as_str() == s)
            .ok_or_else(|| UnknownFace(s.to_string()))
    }
}

/// Square brush side length, restricted to 1, 2 or 3 cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct BrushSize(u8);

impl BrushSize {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 3;

    /// Returns None for sizes outside 1..=3
    pub fn new(size: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&size).then_some(Self(size))
    }

    #[inline]
    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for BrushSize {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl TryFrom<u8> for BrushSize {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("Invalid brush size: {value}"))
    }
}

impl From<BrushSize> for u8 {
    fn from(size: BrushSize) -> Self {
        size.0
    }
}

/// Which faces a bulk color replacement scans
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ReplaceScope {
    #[default]
    CurrentFace,
    AllFaces,
}
