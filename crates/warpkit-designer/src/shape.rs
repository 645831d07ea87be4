//! A rectangle that can be moved, resized, rotated and warped through handles.
//!
//! The shape keeps its base geometry (the untransformed rectangle) apart
//! from the applied transform. Scaling and moving edit the rectangle;
//! rotation and the affine/perspective modes edit the transform.
//!
//! Every intermediate drag state is computed from the baseline captured
//! when the drag began plus the current pointer position, never from the
//! previous drag state, so long drags cannot accumulate error.

use warpkit_core::{polygon_contains, Point, Rect, Transform, TransformMode};

use crate::handles::{CursorHint, Handle, HandleName, HandleStyle};
use crate::modes;
use crate::serialization::{ShapeRecord, TransformRecord};

/// Geometry captured at the start of a drag.
#[derive(Debug, Clone, Copy, PartialEq)]
struct DragBaseline {
    rect: Rect,
    transform: Transform,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum DragState {
    /// A handle is being dragged.
    Handle {
        name: HandleName,
        baseline: DragBaseline,
    },
    /// The body is being dragged.
    Move { press: Point, baseline: DragBaseline },
}

/// One editable rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformableShape {
    rect: Rect,
    original_rect: Rect,
    original_corners: [Point; 4],
    transform: Transform,
    mode: TransformMode,
    selected: bool,
    handles: Vec<Handle>,
    style: HandleStyle,
    drag: Option<DragState>,
}

impl TransformableShape {
    /// Creates an unselected shape with an identity transform.
    pub fn new(rect: Rect, mode: TransformMode, style: HandleStyle) -> Self {
        let mut shape = Self {
            rect,
            original_rect: rect,
            original_corners: rect.corners(),
            transform: Transform::identity(),
            mode,
            selected: false,
            handles: Vec::new(),
            style,
            drag: None,
        };
        shape.update_handles();
        shape
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Replaces the base rectangle. Handles follow; the committed baseline does not.
    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
        self.update_handles();
    }

    /// The rectangle as of the last committed gesture.
    pub fn original_rect(&self) -> Rect {
        self.original_rect
    }

    /// Corners of [`original_rect`](Self::original_rect) in quad order.
    pub fn original_corners(&self) -> [Point; 4] {
        self.original_corners
    }

    pub fn transform(&self) -> Transform {
        self.transform
    }

    pub fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }

    pub fn mode(&self) -> TransformMode {
        self.mode
    }

    /// Switches the drag interpretation and recomputes the handle layout.
    pub fn set_mode(&mut self, mode: TransformMode) {
        self.mode = mode;
        self.update_handles();
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    pub fn handles(&self) -> &[Handle] {
        &self.handles
    }

    pub fn style(&self) -> HandleStyle {
        self.style
    }

    pub fn active_handle(&self) -> Option<HandleName> {
        match self.drag {
            Some(DragState::Handle { name, .. }) => Some(name),
            _ => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Corners of the base rectangle after the applied transform, in quad order.
    pub fn scene_corners(&self) -> [Point; 4] {
        self.transform.map_quad(&self.rect.corners())
    }

    /// Rebuilds the handle list from the current rectangle and mode.
    pub fn update_handles(&mut self) {
        let layout = modes::behavior(self.mode).layout;
        self.handles = layout(&self.rect, &self.style);
    }

    /// Snapshots the current rectangle as the baseline for later warps.
    pub fn commit_geometry(&mut self) {
        self.original_rect = self.rect;
        self.original_corners = self.rect.corners();
        self.update_handles();
    }

    /// Maps a scene point into the shape's local coordinates.
    fn to_local(&self, point: Point) -> Option<Point> {
        self.transform.inverse().ok().map(|inv| inv.map_point(point))
    }

    /// The first handle containing `point`, in layout order. Only selected shapes have live handles.
    pub fn hit_test(&self, point: Point) -> Option<HandleName> {
        if !self.selected {
            return None;
        }
        let local = self.to_local(point)?;
        self.handles
            .iter()
            .find(|h| h.contains(local))
            .map(|h| h.name)
    }

    /// True when `point` lies on the transformed body or on a live handle.
    pub fn contains_point(&self, point: Point) -> bool {
        polygon_contains(&self.scene_corners(), point) || self.hit_test(point).is_some()
    }

    pub fn cursor_at(&self, point: Point) -> CursorHint {
        self.hit_test(point)
            .map(HandleName::cursor)
            .unwrap_or_default()
    }

    fn baseline(&self) -> DragBaseline {
        DragBaseline {
            rect: self.rect,
            transform: self.transform,
        }
    }

    /// Grabs the handle under `point`, if the shape is selected and one is hit.
    pub fn begin_drag(&mut self, point: Point) -> Option<HandleName> {
        let name = self.hit_test(point)?;
        tracing::debug!("Grabbed {} handle in {} mode", name, self.mode);
        self.drag = Some(DragState::Handle {
            name,
            baseline: self.baseline(),
        });
        Some(name)
    }

    /// Starts dragging the whole shape from `press`.
    pub fn begin_move(&mut self, press: Point) {
        self.drag = Some(DragState::Move {
            press,
            baseline: self.baseline(),
        });
    }

    /// Applies the active drag for the pointer at `point`.
    pub fn drag_to(&mut self, point: Point) {
        match self.drag {
            Some(DragState::Handle { name, .. }) => {
                let drag = modes::behavior(self.mode).drag;
                drag(self, name, point);
            }
            Some(DragState::Move { press, baseline }) => self.move_to(press, baseline, point),
            None => {}
        }
    }

    /// Releases the drag and commits the rectangle as the new baseline.
    pub fn end_drag(&mut self) {
        if self.drag.take().is_some() {
            tracing::debug!("Drag ended, rect {:?}", self.rect);
        }
        self.commit_geometry();
    }

    fn drag_baseline(&self) -> DragBaseline {
        match self.drag {
            Some(DragState::Handle { baseline, .. }) | Some(DragState::Move { baseline, .. }) => {
                baseline
            }
            None => self.baseline(),
        }
    }

    pub(crate) fn ignore_handle_drag(&mut self, _handle: HandleName, _point: Point) {}

    /// Corner resize: the dragged corner follows the pointer, the opposite one stays put.
    pub(crate) fn resize_to(&mut self, handle: HandleName, point: Point) {
        let Some(corner) = handle.corner() else {
            return;
        };
        let baseline = self.drag_baseline();
        let local = baseline
            .transform
            .inverse()
            .map(|inv| inv.map_point(point))
            .unwrap_or(point);
        let anchor = baseline.rect.corner(corner.opposite());
        self.set_rect(Rect::from_points(anchor, local));
        tracing::trace!("Resized to {:?}", self.rect);
    }

    /// Rotation about the on-screen center so the shape's x axis points at `point`.
    ///
    /// The turn is composed onto the baseline transform, so an earlier
    /// move, resize or warp is kept.
    pub(crate) fn rotate_to(&mut self, _handle: HandleName, point: Point) {
        let baseline = self.drag_baseline();
        let center = baseline.rect.center();
        let pivot = baseline.transform.map_point(center);
        let x_axis = baseline.transform.map_point(center.translated(1.0, 0.0));

        // Screen angles run counter-clockwise, rotations clockwise.
        let current = -pivot.screen_angle_to(&x_axis);
        let target = -pivot.screen_angle_to(&point);
        self.transform = baseline
            .transform
            .then(&Transform::rotation_about(pivot, target - current));
        tracing::trace!("Rotated to {:.2} degrees", target);
    }

    /// Quad-to-quad warp with one corner moved to `point`.
    pub(crate) fn warp_to(&mut self, handle: HandleName, point: Point) {
        let Some(corner) = handle.corner() else {
            return;
        };
        let baseline = self.drag_baseline();
        let mut target = baseline.transform.map_quad(&self.original_corners);
        target[corner.quad_index()] = point;

        match Transform::quad_to_quad(&self.original_corners, &target) {
            Ok(transform) => {
                self.transform = transform;
                tracing::trace!("Warped {} to {:?}", handle, point);
            }
            Err(e) => tracing::debug!("Keeping previous transform: {}", e),
        }
    }

    fn move_to(&mut self, press: Point, baseline: DragBaseline, point: Point) {
        let (dx, dy) = (point.x - press.x, point.y - press.y);
        let inverse = baseline
            .transform
            .inverse()
            .ok()
            .filter(|_| baseline.transform.is_affine());

        match inverse {
            Some(inv) => {
                let from = inv.map_point(press);
                let to = inv.map_point(point);
                self.set_rect(baseline.rect.translated(to.x - from.x, to.y - from.y));
            }
            None => {
                self.transform = baseline
                    .transform
                    .then(&Transform::translation(dx, dy));
            }
        }
    }

    /// The persisted form: base rectangle plus all nine transform entries.
    pub fn serialize(&self) -> ShapeRecord {
        ShapeRecord {
            x: self.rect.x,
            y: self.rect.y,
            width: self.rect.width,
            height: self.rect.height,
            transform: TransformRecord::from(&self.transform),
        }
    }

    /// Rebuilds a shape from its persisted form. The matrix is taken as-is.
    pub fn deserialize(record: &ShapeRecord, mode: TransformMode, style: HandleStyle) -> Self {
        let rect = Rect::new(record.x, record.y, record.width, record.height);
        let mut shape = Self::new(rect, mode, style);
        shape.transform = Transform::from(record.transform);
        shape
    }
}
