//! Per-mode behavior table.
//!
//! Each transform mode maps to a handle layout and a handle-drag
//! interpretation. Adding a mode means adding one row here.

use warpkit_core::{Point, Rect, TransformMode};

use crate::handles::{self, Handle, HandleName, HandleStyle};
use crate::shape::TransformableShape;

pub(crate) type LayoutFn = fn(&Rect, &HandleStyle) -> Vec<Handle>;
pub(crate) type DragFn = fn(&mut TransformableShape, HandleName, Point);

#[derive(Clone, Copy)]
pub(crate) struct ModeBehavior {
    pub layout: LayoutFn,
    pub drag: DragFn,
}

pub(crate) fn behavior(mode: TransformMode) -> ModeBehavior {
    match mode {
        TransformMode::Translation => ModeBehavior {
            layout: handles::no_handles,
            drag: TransformableShape::ignore_handle_drag,
        },
        TransformMode::Rotation => ModeBehavior {
            layout: handles::rotate_handle,
            drag: TransformableShape::rotate_to,
        },
        TransformMode::Scaling => ModeBehavior {
            layout: handles::corner_handles,
            drag: TransformableShape::resize_to,
        },
        // Both solve the full projective quad-to-quad mapping.
        TransformMode::Affine | TransformMode::Perspective => ModeBehavior {
            layout: handles::corner_handles,
            drag: TransformableShape::warp_to,
        },
    }
}
