//! Pointer routing: press, move, release and hover.

use warpkit_core::{Point, Rect};

use super::{EditorController, Gesture};
use crate::handles::CursorHint;
use crate::shape::TransformableShape;

impl EditorController {
    /// Index of the topmost shape under `point`.
    pub fn shape_at(&self, point: Point) -> Option<usize> {
        self.shapes.iter().rposition(|s| s.contains_point(point))
    }

    /// Starts a gesture.
    ///
    /// On a shape: its handle (if already selected and one is hit) or its
    /// body is grabbed, and the shape becomes the only selection. In empty
    /// space: the selection is cleared and a zero-size rectangle tagged with
    /// the current mode is added at `point`.
    pub fn on_pointer_down(&mut self, point: Point) {
        if self.gesture != Gesture::Idle {
            self.finish_gesture(point);
        }

        match self.shape_at(point) {
            Some(index) => {
                let shape = &mut self.shapes[index];
                if shape.begin_drag(point).is_none() {
                    shape.begin_move(point);
                }
                self.select_only(index);
                self.gesture = Gesture::Interacting { index };
                tracing::debug!("Interacting with shape {}", index);
            }
            None => {
                self.deselect_all();
                let rect = Rect::new(point.x, point.y, 0.0, 0.0);
                self.shapes
                    .push(TransformableShape::new(rect, self.mode, self.style));
                let index = self.shapes.len() - 1;
                self.gesture = Gesture::Drawing {
                    index,
                    start: point,
                };
                tracing::debug!("Drawing new shape {} from {:?}", index, point);
            }
        }
    }

    /// Grows the pending rectangle or drags the grabbed shape.
    pub fn on_pointer_move(&mut self, point: Point) {
        match self.gesture {
            Gesture::Drawing { index, start } => {
                if let Some(shape) = self.shapes.get_mut(index) {
                    shape.set_rect(Rect::from_points(start, point));
                }
            }
            Gesture::Interacting { index } => {
                if let Some(shape) = self.shapes.get_mut(index) {
                    shape.drag_to(point);
                }
            }
            Gesture::Idle => {}
        }
    }

    /// Ends the gesture.
    ///
    /// A new rectangle spans to `point`, becomes selected and has its
    /// geometry committed. A dragged shape commits its geometry.
    pub fn on_pointer_up(&mut self, point: Point) {
        self.finish_gesture(point);
    }

    fn finish_gesture(&mut self, point: Point) {
        match std::mem::take(&mut self.gesture) {
            Gesture::Drawing { index, start } => {
                if index < self.shapes.len() {
                    self.select_only(index);
                    let shape = &mut self.shapes[index];
                    shape.set_rect(Rect::from_points(start, point));
                    shape.commit_geometry();
                    tracing::debug!("Created shape {} with rect {:?}", index, shape.rect());
                }
            }
            Gesture::Interacting { index } => {
                if let Some(shape) = self.shapes.get_mut(index) {
                    shape.end_drag();
                }
            }
            Gesture::Idle => {}
        }
    }

    /// Cursor for the pointer hovering at `point`.
    pub fn cursor_at(&self, point: Point) -> CursorHint {
        self.shape_at(point)
            .and_then(|index| self.shapes.get(index))
            .map(|shape| shape.cursor_at(point))
            .unwrap_or_default()
    }
}
