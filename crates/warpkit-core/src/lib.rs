//! # WarpKit Core
//!
//! Core types and math for WarpKit.
//! Provides the plane geometry primitives, the 3x3 homogeneous transform
//! with its quad-to-quad solver, the editor transform modes, and the error
//! types shared by the designer and settings crates.

pub mod error;
pub mod geometry;
pub mod mode;
pub mod transform;

pub use error::{Error, PersistenceError, Result, TransformError};
pub use geometry::{polygon_contains, Corner, Point, Rect};
pub use mode::TransformMode;
pub use transform::{Transform, EPSILON, NEAR_CLIP};
