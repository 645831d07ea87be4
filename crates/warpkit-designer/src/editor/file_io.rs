//! File I/O operations (save, load) for the editor.

use std::path::Path;
use warpkit_core::PersistenceError;

use super::{EditorController, Gesture};
use crate::serialization::Document;
use crate::shape::TransformableShape;

impl EditorController {
    /// Snapshot of every shape in insertion order.
    pub fn to_document(&self) -> Document {
        Document::new(self.shapes.iter().map(TransformableShape::serialize).collect())
    }

    /// Serializes the collection with the configured indentation.
    pub fn to_json(&self) -> Result<String, PersistenceError> {
        self.to_document().to_json(self.json_indent)
    }

    /// Replaces the collection with the shapes of `document`.
    ///
    /// Shapes are appended in document order, unselected, with the
    /// editor's current mode.
    pub fn replace_with(&mut self, document: &Document) {
        self.shapes.clear();
        self.gesture = Gesture::Idle;
        self.shapes.extend(
            document
                .shapes
                .iter()
                .map(|record| TransformableShape::deserialize(record, self.mode, self.style)),
        );
    }

    /// Parses `json` fully, then replaces the collection. On error nothing changes.
    pub fn load_json(&mut self, json: &str) -> Result<(), PersistenceError> {
        let document = Document::from_json(json)?;
        self.replace_with(&document);
        Ok(())
    }

    /// Save all shapes to `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PersistenceError> {
        let path = path.as_ref();
        let document = self.to_document();
        match document.save_to_file(path, self.json_indent) {
            Ok(()) => {
                tracing::info!("Saved {} shapes to {}", document.len(), path.display());
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Failed to save shapes: {}", e);
                Err(e)
            }
        }
    }

    /// Load shapes from `path`, replacing the current ones.
    ///
    /// The whole document is read and validated before the collection is
    /// touched; on failure the existing shapes are kept.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<(), PersistenceError> {
        let path = path.as_ref();
        let document = Document::load_from_file(path).inspect_err(|e| {
            tracing::warn!("Failed to load shapes: {}", e);
        })?;

        self.replace_with(&document);
        tracing::info!("Loaded {} shapes from {}", document.len(), path.display());
        Ok(())
    }
}
