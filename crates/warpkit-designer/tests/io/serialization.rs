use proptest::prelude::*;
use warpkit_designer::{
    Document, EditorController, HandleStyle, Point, Rect, ShapeRecord, Transform, TransformMode,
    TransformRecord, TransformableShape,
};

#[test]
fn test_record_field_names() {
    let shape = TransformableShape::new(
        Rect::new(1.5, 2.5, 30.0, 40.0),
        TransformMode::Translation,
        HandleStyle::default(),
    );
    let value = serde_json::to_value(shape.serialize()).unwrap();
    for key in ["x", "y", "width", "height", "transform"] {
        assert!(value.get(key).is_some(), "missing {}", key);
    }
    for key in ["m11", "m12", "m13", "m21", "m22", "m23", "m31", "m32", "m33"] {
        assert!(value["transform"].get(key).is_some(), "missing {}", key);
    }
    assert_eq!(value["x"], 1.5);
}

#[test]
fn test_singular_matrix_accepted() {
    let json = r#"[{"x": 0, "y": 0, "width": 10, "height": 10,
        "transform": {"m11": 0, "m12": 0, "m13": 0, "m21": 0, "m22": 0,
                      "m23": 0, "m31": 0, "m32": 0, "m33": 0}}]"#;
    let mut editor = EditorController::new();
    editor.load_json(json).unwrap();
    assert_eq!(editor.shapes()[0].transform().entries(), [0.0; 9]);
}

#[test]
fn test_loaded_zero_w_matrix_stays_finite() {
    let json = r#"[{"x": 0, "y": 0, "width": 10, "height": 10,
        "transform": {"m11": 1, "m12": 0, "m13": 0, "m21": 0, "m22": 1,
                      "m23": 0, "m31": 0, "m32": 0, "m33": 0}}]"#;
    let mut editor = EditorController::new();
    editor.load_json(json).unwrap();

    let shape = &editor.shapes()[0];
    let corners = shape.scene_corners();
    assert!(corners.iter().all(|c| c.x.is_finite() && c.y.is_finite()));
    assert!(shape.contains_point(Point::new(5.0, 5.0)));
    assert!(!shape.contains_point(Point::new(-5.0, 5.0)));
}

#[test]
fn test_empty_document() {
    let doc = Document::from_json("[]").unwrap();
    assert!(doc.is_empty());
    assert_eq!(Document::default().to_json(4).unwrap(), "[]");
}

#[test]
fn test_object_at_top_level_rejected() {
    assert!(Document::from_json(r#"{"shapes": []}"#).is_err());
}

fn arb_record() -> impl Strategy<Value = ShapeRecord> {
    (
        -1.0e4f64..1.0e4,
        -1.0e4f64..1.0e4,
        0.0f64..1.0e4,
        0.0f64..1.0e4,
        prop::array::uniform9(-1.0e3f64..1.0e3),
    )
        .prop_map(|(x, y, width, height, entries)| ShapeRecord {
            x,
            y,
            width,
            height,
            transform: TransformRecord::from(&Transform::from_entries(entries)),
        })
}

proptest! {
    #[test]
    fn prop_collection_round_trip(records in prop::collection::vec(arb_record(), 0..20)) {
        let mut source = EditorController::new();
        source.replace_with(&Document::new(records.clone()));
        let json = source.to_json().unwrap();

        let mut target = EditorController::new();
        target.load_json(&json).unwrap();
        prop_assert_eq!(target.len(), records.len());
        for (shape, record) in target.shapes().iter().zip(records.iter()) {
            let r = shape.rect();
            prop_assert_eq!((r.x, r.y, r.width, r.height), (record.x, record.y, record.width, record.height));
            prop_assert_eq!(TransformRecord::from(&shape.transform()), record.transform);
        }
        prop_assert_eq!(target.to_document(), Document::new(records));
    }
}
