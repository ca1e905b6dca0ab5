//! Block model import
//!
//! A block model is a small JSON file naming a `parent` model and a table of
//! texture references:
//!
//! ```json
//! { "parent": "minecraft:block/cube_column",
//!   "textures": { "end": "minecraft:block/oak_log_top", "side": "minecraft:block/oak_log" } }
//! ```
//!
//! [`face_mapping`] picks a texture for each cube face from the parent kind,
//! and [`assemble_block_faces`] turns the referenced 16x16 RGBA images into
//! [`CubeFaces`]. Reading files and decoding PNGs is left to the caller.

use std::collections::HashMap;

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::color::Color;
use crate::constants::{CELLS_PER_FACE, GRID_SIZE};
use crate::face::{CubeFaces, PixelFace};
use crate::types::FaceName;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Invalid block model: {0}")]
    Json(#[from] serde_json::Error),
}

/// Pixels with alpha below this are imported as white
pub const ALPHA_THRESHOLD: u8 = 128;

/// A block model file, as read from disk
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BlockModel {
    #[serde(default)]
    pub parent: String,
    #[serde(default)]
    pub textures: HashMap<String, String>,
}

impl BlockModel {
    pub fn from_json(json: &str) -> Result<Self, ImportError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn parent_kind(&self) -> ParentKind {
        ParentKind::detect(&self.parent)
    }

    /// First non-empty texture among `keys`
    fn texture(&self, keys: &[&str]) -> Option<&str> {
        keys.iter()
            .filter_map(|key| self.textures.get(*key))
            .map(String::as_str)
            .find(|reference| !reference.is_empty())
    }
}

/// Parent model families that decide which texture keys feed which face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParentKind {
    /// One texture on every face
    CubeAll,
    /// Distinct front, shared top/bottom, sides elsewhere
    Orientable,
    /// End caps on top and bottom, side texture around
    CubeColumn,
    /// Per-face keys, falling back to side and all
    Cube,
    Other,
}

impl ParentKind {
    /// Classify a parent reference by substring, most specific first
    pub fn detect(parent: &str) -> Self {
        if parent.contains("cube_all") {
            ParentKind::CubeAll
        } else if parent.contains("orientable") {
            ParentKind::Orientable
        } else if parent.contains("cube_column") {
            ParentKind::CubeColumn
        } else if parent.contains("cube") {
            ParentKind::Cube
        } else {
            ParentKind::Other
        }
    }

    /// Texture keys tried for a face, in order
    fn texture_keys(self, face: FaceName) -> &'static [&'static str] {
        use FaceName::*;
        match (self, face) {
            (ParentKind::CubeAll, _) => &["all", "texture"],

            (ParentKind::Orientable, Top) => &["top", "texture"],
            (ParentKind::Orientable, Bottom) => &["top", "side", "texture"],
            (ParentKind::Orientable, Front) => &["front", "texture"],
            (ParentKind::Orientable, Back | Left | Right) => &["side", "texture"],

            (ParentKind::CubeColumn, Top | Bottom) => &["end", "texture"],
            (ParentKind::CubeColumn, Front | Back | Left | Right) => &["side", "texture"],

            (ParentKind::Cube, Top) => &["top", "up", "all", "texture"],
            (ParentKind::Cube, Bottom) => &["bottom", "down", "all", "texture"],
            (ParentKind::Cube, Front) => &["front", "north", "side", "all", "texture"],
            (ParentKind::Cube, Back) => &["back", "south", "side", "all", "texture"],
            (ParentKind::Cube, Left) => &["left", "west", "side", "all", "texture"],
            (ParentKind::Cube, Right) => &["right", "east", "side", "all", "texture"],

            (ParentKind::Other, Top) => &["top", "up", "all", "side", "texture"],
            (ParentKind::Other, Bottom) => &["bottom", "down", "all", "side", "texture"],
            (ParentKind::Other, Front) => &["front", "north", "all", "side", "texture"],
            (ParentKind::Other, Back) => &["back", "south", "all", "side", "texture"],
            (ParentKind::Other, Left) => &["left", "west", "all", "side", "texture"],
            (ParentKind::Other, Right) => &["right", "east", "all", "side", "texture"],
        }
    }
}

/// Texture reference chosen for each face; `None` leaves the face white
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FaceMapping {
    pub top: Option<String>,
    pub bottom: Option<String>,
    pub front: Option<String>,
    pub back: Option<String>,
    pub left: Option<String>,
    pub right: Option<String>,
}

impl FaceMapping {
    pub fn get(&self, face: FaceName) -> Option<&str> {
        let slot = match face {
            FaceName::Top => &self.top,
            FaceName::Bottom => &self.bottom,
            FaceName::Front => &self.front,
            FaceName::Back => &self.back,
            FaceName::Left => &self.left,
            FaceName::Right => &self.right,
        };
        slot.as_deref()
    }

    fn slot_mut(&mut self, face: FaceName) -> &mut Option<String> {
        match face {
            FaceName::Top => &mut self.top,
            FaceName::Bottom => &mut self.bottom,
            FaceName::Front => &mut self.front,
            FaceName::Back => &mut self.back,
            FaceName::Left => &mut self.left,
            FaceName::Right => &mut self.right,
        }
    }

    /// Distinct references in face order, for previews
    pub fn unique_textures(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for reference in FaceName::ALL.iter().filter_map(|&face| self.get(face)) {
            if !seen.contains(&reference) {
                seen.push(reference);
            }
        }
        seen
    }
}

/// Resolve which texture each face of `model` uses
pub fn face_mapping(model: &BlockModel) -> FaceMapping {
    let kind = model.parent_kind();
    let mut mapping = FaceMapping::default();
    for face in FaceName::ALL {
        *mapping.slot_mut(face) = model.texture(kind.texture_keys(face)).map(str::to_owned);
    }
    debug!("Mapped block textures for {:?} parent", kind);
    mapping
}

/// Strip the `minecraft:block/` namespace, then a bare `block/` prefix
pub fn texture_name(reference: &str) -> String {
    reference
        .replacen("minecraft:block/", "", 1)
        .replacen("block/", "", 1)
}

/// Image file holding a texture reference, e.g. `oak_log_top.png`
pub fn texture_file_name(reference: &str) -> String {
    format!("{}.png", texture_name(reference))
}

/// Importable block names from a listing of model files
///
/// Keeps `.json` files, skips `_`-prefixed index files and `template_`
/// models, drops the extension and sorts.
pub fn block_names<S: AsRef<str>>(files: &[S]) -> Vec<String> {
    let mut names: Vec<String> = files
        .iter()
        .map(|file| file.as_ref())
        .filter(|file| !file.starts_with('_'))
        .filter_map(|file| file.strip_suffix(".json"))
        .filter(|name| !name.contains("template_"))
        .map(str::to_owned)
        .collect();
    names.sort();
    names
}

/// Convert 16x16 RGBA bytes (row-major, 4 bytes per pixel) into a face.
///
/// Pixels with alpha below [`ALPHA_THRESHOLD`] become white. Returns `None`
/// unless the buffer holds exactly one face worth of pixels.
pub fn face_from_rgba(rgba: &[u8]) -> Option<PixelFace> {
    let pixels: &[[u8; 4]] = bytemuck::try_cast_slice(rgba).ok()?;
    if pixels.len() != CELLS_PER_FACE {
        return None;
    }

    let mut face = PixelFace::filled(Color::WHITE);
    for (i, &[r, g, b, a]) in pixels.iter().enumerate() {
        if a >= ALPHA_THRESHOLD {
            face.set((i % GRID_SIZE) as u32, (i / GRID_SIZE) as u32, Color::rgb(r, g, b));
        }
    }
    Some(face)
}

/// Build all six faces from a mapping.
///
/// `load` receives each texture's file name (see [`texture_file_name`]) and
/// returns the decoded face. Faces without a texture, or whose texture fails
/// to load, are white.
pub fn assemble_block_faces(
    mapping: &FaceMapping,
    mut load: impl FnMut(&str) -> Option<PixelFace>,
) -> CubeFaces {
    let mut faces = CubeFaces::filled(Color::WHITE);
    for face in FaceName::ALL {
        let Some(reference) = mapping.get(face) else {
            debug!("No texture for {} face, leaving it white", face);
            continue;
        };
        let file = texture_file_name(reference);
        match load(&file) {
            Some(pixels) => *faces.face_mut(face) = pixels,
            None => warn!("Failed to load texture {} for {} face", file, face),
        }
    }
    faces
}
