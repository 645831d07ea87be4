use tempfile::TempDir;
use warpkit_designer::{
    EditorController, PersistenceError, Point, Rect, Transform, TransformMode,
};
use warpkit_settings::EditorSettings;

fn sample_editor() -> EditorController {
    let mut editor = EditorController::new();
    editor.add_rectangle(Rect::new(0.0, 0.0, 100.0, 50.0));
    editor.add_rectangle(Rect::new(200.0, 10.0, 30.0, 30.0));

    editor.set_mode(TransformMode::Perspective);
    editor.on_pointer_down(Point::new(50.0, 25.0));
    editor.on_pointer_up(Point::new(50.0, 25.0));
    editor.on_pointer_down(Point::new(100.0, 50.0));
    editor.on_pointer_move(Point::new(130.0, 70.0));
    editor.on_pointer_up(Point::new(130.0, 70.0));
    editor
}

#[test]
fn test_save_and_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("shapes.json");

    let editor = sample_editor();
    assert!(!editor.shapes()[0].transform().is_identity(1e-9));
    editor.save(&path).unwrap();

    let mut loaded = EditorController::new();
    loaded.set_mode(TransformMode::Scaling);
    loaded.load(&path).unwrap();

    assert_eq!(loaded.len(), 2);
    for (a, b) in editor.shapes().iter().zip(loaded.shapes().iter()) {
        assert_eq!(a.rect(), b.rect());
        assert_eq!(a.transform().entries(), b.transform().entries());
        assert_eq!(b.mode(), TransformMode::Scaling);
        assert!(!b.is_selected());
    }
}

#[test]
fn test_saved_file_is_indented_array() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("shapes.json");
    sample_editor().save(&path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("[\n    {\n"));
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value.as_array().map(Vec::len), Some(2));
    assert_eq!(value[1]["x"], 200.0);
}

#[test]
fn test_indent_from_settings() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("shapes.json");
    let settings = EditorSettings {
        json_indent: 2,
        ..EditorSettings::default()
    };
    let mut editor = EditorController::with_settings(&settings);
    editor.add_rectangle(Rect::new(0.0, 0.0, 1.0, 1.0));
    editor.save(&path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("[\n  {\n    \"x\""));
}

#[test]
fn test_load_missing_width_keeps_collection() {
    let dir = TempDir::new().unwrap();
    let good = dir.path().join("good.json");
    let bad = dir.path().join("bad.json");

    sample_editor().save(&good).unwrap();
    std::fs::write(
        &bad,
        r#"[
            {"x": 0, "y": 0, "width": 5, "height": 5,
             "transform": {"m11": 1, "m12": 0, "m13": 0, "m21": 0, "m22": 1,
                           "m23": 0, "m31": 0, "m32": 0, "m33": 1}},
            {"x": 0, "y": 0, "height": 5,
             "transform": {"m11": 1, "m12": 0, "m13": 0, "m21": 0, "m22": 1,
                           "m23": 0, "m31": 0, "m32": 0, "m33": 1}}
        ]"#,
    )
    .unwrap();

    let mut editor = EditorController::new();
    editor.load(&good).unwrap();
    let before: Vec<(Rect, Transform)> = editor
        .shapes()
        .iter()
        .map(|s| (s.rect(), s.transform()))
        .collect();

    let err = editor.load(&bad).unwrap_err();
    assert!(matches!(err, PersistenceError::Json(_)));
    assert!(err.to_string().contains("width"));

    let after: Vec<(Rect, Transform)> = editor
        .shapes()
        .iter()
        .map(|s| (s.rect(), s.transform()))
        .collect();
    assert_eq!(before, after);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.json");

    let mut editor = EditorController::new();
    editor.add_rectangle(Rect::new(0.0, 0.0, 1.0, 1.0));
    let err = editor.load(&path).unwrap_err();
    assert!(matches!(err, PersistenceError::Io { .. }));
    assert_eq!(editor.len(), 1);
}

#[test]
fn test_save_into_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("no").join("such").join("dir.json");
    let err = sample_editor().save(&path).unwrap_err();
    assert!(matches!(err, PersistenceError::Io { .. }));
}

#[test]
fn test_load_preserves_file_order_and_clears_previous() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("order.json");

    let mut source = EditorController::new();
    for i in 0..5 {
        source.add_rectangle(Rect::new(i as f64 * 10.0, 0.0, 5.0, 5.0));
    }
    source.save(&path).unwrap();

    let mut target = EditorController::new();
    target.add_rectangle(Rect::new(-100.0, -100.0, 1.0, 1.0));
    target.load(&path).unwrap();

    let xs: Vec<f64> = target.shapes().iter().map(|s| s.rect().x).collect();
    assert_eq!(xs, vec![0.0, 10.0, 20.0, 30.0, 40.0]);
}
