//! Pixel cube editor core - state, brush, history and paper-craft export
//!
//! This crate provides the engine behind a 16x16-per-face cube texture editor:
//! - [`model::CubeModel`] - The six faces plus tool selection, announcing every change
//! - [`events`] - Typed event bus the model and history notify through
//! - [`brush`] - Brush footprint computation and per-stroke anchor dedup
//! - [`history`] - Linear undo/redo over whole-cube snapshots
//! - [`pipeline`] - Pointer-driven editing pipeline tying the above together
//! - [`net`] - Paper-craft net layout, face upscaling and the texture atlas
//! - [`document`] - JSON save/load with import validation
//! - [`import`] - Block model texture import
//! - [`palette`] - Swatch list with protected defaults
//! - [`surface`] - RGB render surface abstraction and in-memory canvas

pub mod brush;
pub mod color;
pub mod constants;
pub mod document;
pub mod events;
pub mod face;
pub mod history;
pub mod import;
pub mod model;
pub mod net;
pub mod palette;
pub mod pipeline;
mod replace;
pub mod surface;
pub mod types;
pub mod validation;

pub use brush::*;
pub use color::*;
pub use constants::*;
pub use document::*;
pub use events::*;
pub use face::*;
pub use history::*;
pub use import::*;
pub use model::*;
pub use net::*;
pub use palette::*;
pub use pipeline::*;
pub use surface::*;
pub use types::*;
pub use validation::*;
