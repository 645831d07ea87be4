use proptest::prelude::*;
use warpkit_core::{Point, Rect, Transform, TransformError};

fn near(a: Point, b: Point, eps: f64) -> bool {
    (a.x - b.x).abs() < eps && (a.y - b.y).abs() < eps
}

#[test]
fn test_perspective_division() {
    // w = 0.01 * x + 1
    let t = Transform::new(1.0, 0.0, 0.01, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0);
    let p = t.map_point(Point::new(100.0, 50.0));
    assert!(near(p, Point::new(50.0, 25.0), 1e-9), "{:?}", p);
}

#[test]
fn test_quad_to_quad_each_corner_of_rect() {
    let src = Rect::new(0.0, 0.0, 100.0, 50.0).corners();
    let targets = [
        Point::new(-20.0, -10.0),
        Point::new(130.0, -15.0),
        Point::new(120.0, 70.0),
        Point::new(-5.0, 65.0),
    ];
    for (i, target) in targets.iter().enumerate() {
        let mut dst = src;
        dst[i] = *target;
        let t = Transform::quad_to_quad(&src, &dst).expect("solvable");
        for (s, d) in src.iter().zip(dst.iter()) {
            assert!(near(t.map_point(*s), *d, 1e-6));
        }
    }
}

#[test]
fn test_quad_to_quad_rejects_collinear_source() {
    let src = [
        Point::new(0.0, 0.0),
        Point::new(50.0, 0.0),
        Point::new(100.0, 0.0),
        Point::new(0.0, 50.0),
    ];
    let dst = Rect::new(0.0, 0.0, 100.0, 50.0).corners();
    assert!(matches!(
        Transform::quad_to_quad(&src, &dst),
        Err(TransformError::DegenerateQuad { .. })
    ));
}

#[test]
fn test_composition_matches_sequential_mapping() {
    let a = Transform::rotation_about(Point::new(10.0, 10.0), 30.0);
    let b = Transform::translation(-4.0, 9.0);
    let p = Point::new(3.0, -2.0);
    assert!(near(a.then(&b).map_point(p), b.map_point(a.map_point(p)), 1e-9));
}

proptest! {
    #[test]
    fn prop_quad_to_quad_hits_moved_corner(
        corner in 0usize..4,
        dx in -30.0f64..30.0,
        dy in -20.0f64..20.0,
    ) {
        let src = Rect::new(0.0, 0.0, 100.0, 50.0).corners();
        let mut dst = src;
        dst[corner] = dst[corner].translated(dx, dy);
        // Small moves keep the quad convex and non-degenerate.
        let t = Transform::quad_to_quad(&src, &dst).unwrap();
        for (s, d) in src.iter().zip(dst.iter()) {
            prop_assert!(near(t.map_point(*s), *d, 1e-6));
        }
    }
}
