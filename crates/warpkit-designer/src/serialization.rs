//! Serialization and deserialization for editor documents.
//!
//! A document is a JSON array with one entry per shape, in scene order:
//!
//! ```json
//! [
//!     {
//!         "x": 0.0, "y": 0.0, "width": 100.0, "height": 50.0,
//!         "transform": {
//!             "m11": 1.0, "m12": 0.0, "m13": 0.0,
//!             "m21": 0.0, "m22": 1.0, "m23": 0.0,
//!             "m31": 0.0, "m32": 0.0, "m33": 1.0
//!         }
//!     }
//! ]
//! ```
//!
//! Every field is required. The transform mode is not persisted.

use serde::{Deserialize, Serialize};
use std::path::Path;
use warpkit_core::{PersistenceError, Transform};

/// The nine entries of a persisted transform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransformRecord {
    pub m11: f64,
    pub m12: f64,
    pub m13: f64,
    pub m21: f64,
    pub m22: f64,
    pub m23: f64,
    pub m31: f64,
    pub m32: f64,
    pub m33: f64,
}

impl Default for TransformRecord {
    fn default() -> Self {
        Self::from(&Transform::identity())
    }
}

impl From<&Transform> for TransformRecord {
    fn from(t: &Transform) -> Self {
        let [m11, m12, m13, m21, m22, m23, m31, m32, m33] = t.entries();
        Self {
            m11,
            m12,
            m13,
            m21,
            m22,
            m23,
            m31,
            m32,
            m33,
        }
    }
}

impl From<TransformRecord> for Transform {
    fn from(r: TransformRecord) -> Self {
        Transform::new(
            r.m11, r.m12, r.m13, r.m21, r.m22, r.m23, r.m31, r.m32, r.m33,
        )
    }
}

/// Serialized shape data
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeRecord {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub transform: TransformRecord,
}

/// Complete document: the ordered shape records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    pub shapes: Vec<ShapeRecord>,
}

impl Document {
    pub fn new(shapes: Vec<ShapeRecord>) -> Self {
        Self { shapes }
    }

    /// Pretty-prints the document with `indent` spaces per level.
    pub fn to_json(&self, indent: usize) -> Result<String, PersistenceError> {
        let indent = " ".repeat(indent);
        let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
        let mut buf = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)?;
        Ok(String::from_utf8(buf)?)
    }

    /// Parses a complete document. Nothing is returned unless every record is valid.
    pub fn from_json(json: &str) -> Result<Self, PersistenceError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Save document to file
    pub fn save_to_file(
        &self,
        path: impl AsRef<Path>,
        indent: usize,
    ) -> Result<(), PersistenceError> {
        let path = path.as_ref();
        let json = self.to_json(indent)?;
        std::fs::write(path, json).map_err(|e| PersistenceError::io(path, e))
    }

    /// Load document from file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, PersistenceError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| PersistenceError::io(path, e))?;
        Self::from_json(&content)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
