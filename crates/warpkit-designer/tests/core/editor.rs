use proptest::prelude::*;
use warpkit_designer::{EditorController, Point, Rect, TransformMode};
use warpkit_settings::EditorSettings;

#[test]
fn test_topmost_shape_wins() {
    let mut editor = EditorController::new();
    editor.add_rectangle(Rect::new(0.0, 0.0, 100.0, 100.0));
    editor.add_rectangle(Rect::new(50.0, 50.0, 100.0, 100.0));

    assert_eq!(editor.shape_at(Point::new(75.0, 75.0)), Some(1));
    assert_eq!(editor.shape_at(Point::new(25.0, 25.0)), Some(0));
    assert_eq!(editor.shape_at(Point::new(500.0, 500.0)), None);

    editor.on_pointer_down(Point::new(75.0, 75.0));
    assert_eq!(editor.interacting_index(), Some(1));
    assert_eq!(editor.selected_index(), Some(1));
    assert!(!editor.shapes()[0].is_selected());
}

#[test]
fn test_press_in_empty_space_deselects_and_draws() {
    let mut editor = EditorController::new();
    editor.add_rectangle(Rect::new(0.0, 0.0, 10.0, 10.0));
    editor.on_pointer_down(Point::new(5.0, 5.0));
    editor.on_pointer_up(Point::new(5.0, 5.0));
    assert_eq!(editor.selected_index(), Some(0));

    editor.on_pointer_down(Point::new(200.0, 200.0));
    assert!(editor.is_drawing());
    assert_eq!(editor.selected_index(), None);
    assert_eq!(editor.len(), 2);
    assert_eq!(editor.shapes()[1].mode(), TransformMode::Translation);
    editor.on_pointer_up(Point::new(150.0, 260.0));
    assert_eq!(editor.selected_index(), Some(1));
    assert_eq!(editor.shapes()[1].rect(), Rect::new(150.0, 200.0, 50.0, 60.0));
}

#[test]
fn test_new_shape_tagged_with_current_mode() {
    let settings = EditorSettings {
        initial_mode: TransformMode::Perspective,
        ..EditorSettings::default()
    };
    let mut editor = EditorController::with_settings(&settings);
    editor.on_pointer_down(Point::new(0.0, 0.0));
    editor.on_pointer_up(Point::new(40.0, 40.0));
    assert_eq!(editor.shapes()[0].mode(), TransformMode::Perspective);
    assert_eq!(editor.shapes()[0].handles().len(), 4);
}

#[test]
fn test_mode_round_trip_leaves_rects() {
    let mut editor = EditorController::new();
    editor.on_pointer_down(Point::new(10.0, 10.0));
    editor.on_pointer_up(Point::new(60.0, 30.0));
    editor.add_rectangle(Rect::new(100.0, 100.0, 5.0, 5.0));
    let before: Vec<Rect> = editor.shapes().iter().map(|s| s.rect()).collect();

    editor.set_mode(TransformMode::Rotation);
    editor.set_mode(TransformMode::Scaling);

    let after: Vec<Rect> = editor.shapes().iter().map(|s| s.rect()).collect();
    assert_eq!(before, after);
    assert!(editor.shapes().iter().all(|s| s.handles().len() == 4));
}

#[test]
fn test_drawing_preview_grows_with_pointer() {
    let mut editor = EditorController::new();
    editor.on_pointer_down(Point::new(10.0, 10.0));
    editor.on_pointer_move(Point::new(30.0, 20.0));
    assert_eq!(editor.shapes()[0].rect(), Rect::new(10.0, 10.0, 20.0, 10.0));
    assert!(!editor.shapes()[0].is_selected());
    editor.on_pointer_move(Point::new(0.0, 0.0));
    assert_eq!(editor.shapes()[0].rect(), Rect::new(0.0, 0.0, 10.0, 10.0));
    editor.on_pointer_up(Point::new(0.0, 0.0));
    assert_eq!(
        editor.shapes()[0].original_corners(),
        Rect::new(0.0, 0.0, 10.0, 10.0).corners()
    );
}

#[test]
fn test_clear_empties_collection() {
    let mut editor = EditorController::new();
    editor.on_pointer_down(Point::new(0.0, 0.0));
    editor.clear();
    assert!(editor.is_empty());
    assert!(!editor.is_drawing());
    // A stray release after clearing does nothing.
    editor.on_pointer_up(Point::new(10.0, 10.0));
    assert!(editor.is_empty());
}

proptest! {
    #[test]
    fn prop_draw_direction_does_not_matter(
        ax in -500.0f64..500.0, ay in -500.0f64..500.0,
        bx in -500.0f64..500.0, by in -500.0f64..500.0,
    ) {
        let a = Point::new(ax, ay);
        let b = Point::new(bx, by);

        let mut forward = EditorController::new();
        forward.on_pointer_down(a);
        forward.on_pointer_move(b);
        forward.on_pointer_up(b);

        let mut backward = EditorController::new();
        backward.on_pointer_down(b);
        backward.on_pointer_move(a);
        backward.on_pointer_up(a);

        let r1 = forward.shapes()[0].rect();
        let r2 = backward.shapes()[0].rect();
        prop_assert_eq!(r1, r2);
        prop_assert!(r1.width >= 0.0 && r1.height >= 0.0);
    }
}
