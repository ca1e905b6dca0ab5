//! Whole-face and whole-cube actions, each recorded as one history entry

use tracing::info;

use crate::color::Color;
use crate::document::CubeDocument;
use crate::face::PixelFace;
use crate::import::{BlockModel, ImportError, assemble_block_faces, face_mapping};
use crate::types::{FaceName, ReplaceScope};
use crate::validation::DocumentError;

use super::PaintingPipeline;

impl PaintingPipeline {
    /// Copy one face onto another
    pub fn copy_face(&mut self, source: FaceName, target: FaceName) {
        self.end_stroke();
        self.model.copy_face(source, target);
        self.history.save_state(&self.model);
    }

    /// Reset a face to the blank fill
    pub fn clear_face(&mut self, face: FaceName) {
        self.end_stroke();
        self.model.clear_face(face);
        self.history.save_state(&self.model);
    }

    /// Replace a color; records history only if any cell changed
    pub fn replace_color(&mut self, from: Color, to: Color, scope: ReplaceScope) -> usize {
        self.end_stroke();
        let count = self.model.replace_color(from, to, scope);
        if count > 0 {
            self.history.save_state(&self.model);
        }
        count
    }

    /// Load a document, replacing all six faces.
    ///
    /// A rejected document leaves the model and history untouched.
    pub fn import_document(&mut self, json: &str) -> Result<(), DocumentError> {
        let document = CubeDocument::from_json(json)?;
        self.end_stroke();
        self.model.replace_faces(document.faces);
        self.history.save_state(&self.model);
        info!("Imported cube document (version {})", document.version);
        Ok(())
    }

    /// Replace all six faces with a block model's textures.
    ///
    /// `load` decodes a texture file name into a face (see
    /// [`crate::import::face_from_rgba`]). A model that fails to parse leaves
    /// the model and history untouched.
    pub fn import_block(
        &mut self,
        model_json: &str,
        load: impl FnMut(&str) -> Option<PixelFace>,
    ) -> Result<(), ImportError> {
        let block = BlockModel::from_json(model_json)?;
        let faces = assemble_block_faces(&face_mapping(&block), load);
        self.end_stroke();
        self.model.replace_faces(faces);
        self.history.save_state(&self.model);
        info!("Imported block model (parent {:?})", block.parent);
        Ok(())
    }

    /// Current faces as a document
    pub fn export_document(&self) -> CubeDocument {
        CubeDocument::from_model(&self.model)
    }
}
