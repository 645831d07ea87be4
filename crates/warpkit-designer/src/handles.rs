//! Drag handles: named hit regions laid out around a shape's base rectangle.
//!
//! Handles live in the shape's local (untransformed) coordinates. They are
//! recomputed from the rectangle and the transform mode whenever either
//! changes and are never persisted.

use std::fmt;
use warpkit_core::{Corner, Point, Rect};
use warpkit_settings::EditorSettings;

/// Identifies a handle on a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleName {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Rotate,
}

impl HandleName {
    /// Corner handles in layout order. Hit testing follows this order.
    pub const CORNERS: [HandleName; 4] = [
        HandleName::TopLeft,
        HandleName::TopRight,
        HandleName::BottomLeft,
        HandleName::BottomRight,
    ];

    /// The rectangle corner a corner handle sits on.
    pub fn corner(self) -> Option<Corner> {
        match self {
            HandleName::TopLeft => Some(Corner::TopLeft),
            HandleName::TopRight => Some(Corner::TopRight),
            HandleName::BottomLeft => Some(Corner::BottomLeft),
            HandleName::BottomRight => Some(Corner::BottomRight),
            HandleName::Rotate => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HandleName::TopLeft => "top_left",
            HandleName::TopRight => "top_right",
            HandleName::BottomLeft => "bottom_left",
            HandleName::BottomRight => "bottom_right",
            HandleName::Rotate => "rotate",
        }
    }

    /// Cursor shown while hovering this handle.
    pub fn cursor(self) -> CursorHint {
        match self {
            HandleName::Rotate => CursorHint::Cross,
            _ => CursorHint::SizeDiagonal,
        }
    }
}

impl fmt::Display for HandleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named square hit region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Handle {
    pub name: HandleName,
    pub region: Rect,
}

impl Handle {
    pub fn contains(&self, p: Point) -> bool {
        self.region.contains(p)
    }
}

/// Pointer cursor the host should display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorHint {
    #[default]
    Arrow,
    /// Over a rotation handle
    Cross,
    /// Over a corner handle
    SizeDiagonal,
}

/// Handle geometry constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleStyle {
    /// Side length of each square handle
    pub size: f64,
    /// Distance of the rotation handle above the top edge
    pub rotate_offset: f64,
}

impl Default for HandleStyle {
    fn default() -> Self {
        Self {
            size: 8.0,
            rotate_offset: 20.0,
        }
    }
}

impl From<&EditorSettings> for HandleStyle {
    fn from(settings: &EditorSettings) -> Self {
        Self {
            size: settings.handle_size,
            rotate_offset: settings.rotate_handle_offset,
        }
    }
}

/// No handles: the shape is only moved by dragging its body.
pub(crate) fn no_handles(_rect: &Rect, _style: &HandleStyle) -> Vec<Handle> {
    Vec::new()
}

/// One handle centered on each corner.
pub(crate) fn corner_handles(rect: &Rect, style: &HandleStyle) -> Vec<Handle> {
    HandleName::CORNERS
        .iter()
        .filter_map(|&name| {
            name.corner().map(|corner| Handle {
                name,
                region: Rect::centered_square(rect.corner(corner), style.size),
            })
        })
        .collect()
}

/// A single handle above the midpoint of the top edge.
pub(crate) fn rotate_handle(rect: &Rect, style: &HandleStyle) -> Vec<Handle> {
    let top_left = rect.top_left();
    let top_right = rect.top_right();
    let anchor = Point::new(
        (top_left.x + top_right.x) / 2.0,
        rect.y - style.rotate_offset,
    );
    vec![Handle {
        name: HandleName::Rotate,
        region: Rect::centered_square(anchor, style.size),
    }]
}
