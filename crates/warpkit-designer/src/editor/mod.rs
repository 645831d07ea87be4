//! Editor controller for UI integration.
//! Owns the shape collection and routes pointer events to shape creation
//! or to the shape under the pointer.
//!
//! This module is split into submodules:
//! - `pointer`: Press/move/release routing and hover feedback
//! - `file_io`: Save/load operations

mod file_io;
mod pointer;

use warpkit_core::{Point, Rect, TransformMode};
use warpkit_settings::EditorSettings;

use crate::handles::HandleStyle;
use crate::shape::TransformableShape;

/// The pointer gesture in progress.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub(crate) enum Gesture {
    #[default]
    Idle,
    /// A new rectangle is being spanned from `start`.
    Drawing {
        index: usize,
        start: Point,
    },
    /// An existing shape is being dragged.
    Interacting { index: usize },
}

/// Editor state: shapes in z-order (last is topmost) plus the active mode.
#[derive(Debug, Clone)]
pub struct EditorController {
    shapes: Vec<TransformableShape>,
    mode: TransformMode,
    style: HandleStyle,
    json_indent: usize,
    gesture: Gesture,
}

impl EditorController {
    /// Creates an empty editor with default settings.
    pub fn new() -> Self {
        Self::with_settings(&EditorSettings::default())
    }

    pub fn with_settings(settings: &EditorSettings) -> Self {
        Self {
            shapes: Vec::new(),
            mode: settings.initial_mode,
            style: HandleStyle::from(settings),
            json_indent: settings.json_indent,
            gesture: Gesture::Idle,
        }
    }

    pub fn mode(&self) -> TransformMode {
        self.mode
    }

    /// Sets the transform mode on the editor and on every shape.
    ///
    /// Handle layouts are recomputed for all shapes, selected or not.
    pub fn set_mode(&mut self, mode: TransformMode) {
        tracing::debug!("Transform mode {} -> {}", self.mode, mode);
        self.mode = mode;
        for shape in &mut self.shapes {
            shape.set_mode(mode);
        }
    }

    pub fn handle_style(&self) -> HandleStyle {
        self.style
    }

    /// Returns the number of shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Shapes in insertion (z) order.
    pub fn shapes(&self) -> &[TransformableShape] {
        &self.shapes
    }

    pub fn shape(&self, index: usize) -> Option<&TransformableShape> {
        self.shapes.get(index)
    }

    /// Index of the topmost selected shape.
    pub fn selected_index(&self) -> Option<usize> {
        self.shapes.iter().rposition(|s| s.is_selected())
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.gesture, Gesture::Drawing { .. })
    }

    /// Index of the shape currently being dragged.
    pub fn interacting_index(&self) -> Option<usize> {
        match self.gesture {
            Gesture::Interacting { index } => Some(index),
            _ => None,
        }
    }

    /// Adds a committed, unselected rectangle on top and returns its index.
    pub fn add_rectangle(&mut self, rect: Rect) -> usize {
        let mut shape = TransformableShape::new(rect, self.mode, self.style);
        shape.commit_geometry();
        self.shapes.push(shape);
        self.shapes.len() - 1
    }

    /// Removes every shape and abandons any gesture.
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.gesture = Gesture::Idle;
    }

    pub(crate) fn select_only(&mut self, index: usize) {
        for (i, shape) in self.shapes.iter_mut().enumerate() {
            shape.set_selected(i == index);
        }
    }

    pub(crate) fn deselect_all(&mut self) {
        for shape in &mut self.shapes {
            shape.set_selected(false);
        }
    }
}

impl Default for EditorController {
    fn default() -> Self {
        Self::new()
    }
}
