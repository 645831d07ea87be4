//! # WarpKit Designer
//!
//! This crate provides the interactive editing core of WarpKit: rectangles
//! drawn on a canvas and reshaped through draggable handles under five
//! transform modes.
//!
//! ## Core Components
//!
//! - **Handles**: Named hit regions laid out per transform mode
//! - **TransformableShape**: One rectangle, its committed baseline and its
//!   applied 3x3 transform
//! - **EditorController**: The shape collection, the active mode and the
//!   pointer gesture state machine
//! - **Serialization**: The JSON document format for save/load
//!
//! ## Architecture
//!
//! ```text
//! EditorController (pointer routing, save/load)
//!   └── TransformableShape (geometry, handles, drags)
//!         └── Mode table (handle layout + drag interpretation per mode)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use warpkit_designer::{EditorController, Point, TransformMode};
//!
//! let mut editor = EditorController::new();
//! editor.on_pointer_down(Point::new(0.0, 0.0));
//! editor.on_pointer_up(Point::new(100.0, 50.0));
//!
//! editor.set_mode(TransformMode::Perspective);
//! editor.on_pointer_down(Point::new(0.0, 0.0));
//! editor.on_pointer_move(Point::new(-20.0, -10.0));
//! editor.on_pointer_up(Point::new(-20.0, -10.0));
//!
//! let json = editor.to_json().unwrap();
//! assert!(json.contains("\"m13\""));
//! ```

pub mod editor;
pub mod handles;
mod modes;
pub mod serialization;
pub mod shape;

pub use editor::EditorController;
pub use handles::{CursorHint, Handle, HandleName, HandleStyle};
pub use serialization::{Document, ShapeRecord, TransformRecord};
pub use shape::TransformableShape;

pub use warpkit_core::{Corner, PersistenceError, Point, Rect, Transform, TransformMode};
