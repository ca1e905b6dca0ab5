//! JSON exchange document for saving and loading a cube

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::color::Color;
use crate::constants::{DOCUMENT_VERSION, GRID_SIZE};
use crate::face::CubeFaces;
use crate::model::CubeModel;
use crate::validation::{DocumentError, build_faces, validate_grid_size};

/// A saved cube
///
/// ```json
/// { "version": "1.0", "gridSize": 16, "faces": { "top": [["#FFFFFF", ...], ...], ... },
///   "exportDate": "2024-01-01T00:00:00Z" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CubeDocument {
    pub version: String,
    pub grid_size: u32,
    pub faces: CubeFaces,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_date: Option<String>,
}

/// Loosely-typed document as read from disk, before validation
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDocument {
    #[serde(default)]
    version: Option<Value>,
    #[serde(default)]
    grid_size: Option<u64>,
    #[serde(default)]
    faces: Option<HashMap<String, Vec<Vec<String>>>>,
    #[serde(default)]
    export_date: Option<String>,
}

impl CubeDocument {
    /// Wrap a set of faces in a current-version document
    pub fn new(faces: CubeFaces) -> Self {
        Self {
            version: DOCUMENT_VERSION.to_string(),
            grid_size: GRID_SIZE as u32,
            faces,
            export_date: None,
        }
    }

    /// Capture the model's faces
    pub fn from_model(model: &CubeModel) -> Self {
        Self::new(model.all_faces().clone())
    }

    /// Stamp the document with a caller-supplied timestamp (ISO 8601)
    pub fn with_export_date(mut self, date: impl Into<String>) -> Self {
        self.export_date = Some(date.into());
        self
    }

    pub fn to_json_pretty(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse and validate a document.
    ///
    /// Checks run in order: version and faces present, grid size (when
    /// given) equals 16, then every face's presence, row count, row lengths
    /// and colors. The first failure is returned.
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        let raw: RawDocument = serde_json::from_str(json)?;

        let version = raw.version.as_ref().and_then(version_text);
        let (Some(version), Some(faces)) = (version, raw.faces) else {
            return Err(DocumentError::MissingVersionOrFaces);
        };

        if let Some(grid_size) = raw.grid_size {
            validate_grid_size(grid_size)?;
        }

        let faces = build_faces(
            |face| faces.get(face.as_str()).map(Vec::as_slice),
            |cell: &String| Color::parse(cell),
        )?;

        if version != DOCUMENT_VERSION {
            warn!("Loading document version {} as {}", version, DOCUMENT_VERSION);
        }
        debug!("Parsed cube document (version {})", version);

        Ok(Self {
            version,
            grid_size: GRID_SIZE as u32,
            faces,
            export_date: raw.export_date,
        })
    }
}

/// A version tag counts as present when it is a non-empty string or a non-zero number
fn version_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if !text.is_empty() => Some(text.clone()),
        Value::Number(number) if number.as_f64() != Some(0.0) => Some(number.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventBus;
    use crate::types::FaceName;
    use serde_json::json;

    fn valid_json() -> Value {
        let grid = vec![vec!["#ffffff"; 16]; 16];
        let faces: serde_json::Map<String, Value> = FaceName::ALL
            .iter()
            .map(|f| (f.as_str().to_string(), json!(grid)))
            .collect();
        json!({ "version": "1.0", "gridSize": 16, "faces": faces })
    }

    fn parse(value: &Value) -> Result<CubeDocument, DocumentError> {
        CubeDocument::from_json(&value.to_string())
    }

    #[test]
    fn test_export_shape() {
        let mut model = CubeModel::new(EventBus::new());
        model.set_pixel(FaceName::Top, 1, 0, Color::rgb(0xAB, 0xCD, 0xEF));

        let json = CubeDocument::from_model(&model)
            .with_export_date("2024-05-01T12:00:00.000Z")
            .to_json_pretty()
            .unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["version"], "1.0");
        assert_eq!(value["gridSize"], 16);
        assert_eq!(value["exportDate"], "2024-05-01T12:00:00.000Z");
        assert_eq!(value["faces"]["top"][0][1], "#ABCDEF");
        assert_eq!(value["faces"]["bottom"].as_array().unwrap().len(), 16);
    }

    #[test]
    fn test_export_without_date_omits_key() {
        let json = CubeDocument::new(CubeFaces::default()).to_json_pretty().unwrap();
        assert!(!json.contains("exportDate"));
    }

    #[test]
    fn test_export_import_preserves_faces() {
        let mut faces = CubeFaces::default();
        faces.left.set(3, 4, Color::rgb(1, 2, 3));
        let json = CubeDocument::new(faces.clone()).to_json_pretty().unwrap();

        let doc = CubeDocument::from_json(&json).unwrap();
        assert_eq!(doc.faces, faces);
    }

    #[test]
    fn test_import_normalizes_colors() {
        let mut value = valid_json();
        value["faces"]["front"][0][0] = json!("f00");
        let doc = parse(&value).unwrap();
        assert_eq!(doc.faces.front.get(0, 0), Some(Color::rgb(255, 0, 0)));
    }

    #[test]
    fn test_grid_size_is_optional() {
        let mut value = valid_json();
        value.as_object_mut().unwrap().remove("gridSize");
        assert!(parse(&value).is_ok());
    }

    #[test]
    fn test_missing_version_or_faces() {
        let mut value = valid_json();
        value["version"] = json!("");
        assert!(matches!(parse(&value), Err(DocumentError::MissingVersionOrFaces)));

        let mut value = valid_json();
        value.as_object_mut().unwrap().remove("faces");
        assert!(matches!(parse(&value), Err(DocumentError::MissingVersionOrFaces)));
    }

    #[test]
    fn test_numeric_version_is_accepted() {
        let mut value = valid_json();
        value["version"] = json!(1);
        assert_eq!(parse(&value).unwrap().version, "1");

        value["version"] = json!(1.5);
        assert_eq!(parse(&value).unwrap().version, "1.5");

        for missing in [json!(0), json!(null), json!(false), json!([])] {
            value["version"] = missing;
            assert!(matches!(parse(&value), Err(DocumentError::MissingVersionOrFaces)));
        }
    }

    #[test]
    fn test_wrong_grid_size() {
        let mut value = valid_json();
        value["gridSize"] = json!(32);
        let err = parse(&value).unwrap_err();
        assert!(matches!(err, DocumentError::GridSize { actual: 32 }));
        assert_eq!(err.to_string(), "Incompatible grid size: Expected 16, got 32");
    }

    #[test]
    fn test_missing_face() {
        let mut value = valid_json();
        value["faces"].as_object_mut().unwrap().remove("right");
        assert!(matches!(
            parse(&value),
            Err(DocumentError::MissingFace(FaceName::Right))
        ));
    }

    #[test]
    fn test_short_row() {
        let mut value = valid_json();
        value["faces"]["back"][7] = json!(vec!["#000000"; 15]);
        assert!(matches!(
            parse(&value),
            Err(DocumentError::RowLength {
                face: FaceName::Back,
                row: 7,
                len: 15
            })
        ));
    }

    #[test]
    fn test_bad_color() {
        let mut value = valid_json();
        value["faces"]["top"][2][5] = json!("not-a-color");
        assert!(matches!(
            parse(&value),
            Err(DocumentError::InvalidColor {
                face: FaceName::Top,
                x: 5,
                y: 2,
                ..
            })
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            CubeDocument::from_json("{ not json"),
            Err(DocumentError::Json(_))
        ));
    }
}
