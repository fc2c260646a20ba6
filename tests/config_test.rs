use keymapcraft::config::EditorConfig;
use keymapcraft::error::KeymapError;
use std::fs;

#[test]
fn test_defaults() {
    let config = EditorConfig::default();
    assert_eq!(config.unit_px, 50.0);
    assert_eq!(config.canvas_padding_px, 16.0);
    assert!(config.direct_input);
    assert!(config.validate().is_ok());
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("editor.json");
    fs::write(&path, r#"{"unit_px": 40.0, "direct_input": false}"#).unwrap();

    let config = EditorConfig::load_from_file(&path).unwrap();
    assert_eq!(config.unit_px, 40.0);
    assert!(!config.direct_input);
    assert_eq!(config.canvas_padding_px, 16.0);
    assert_eq!(config.share_base_url, EditorConfig::default().share_base_url);
}

#[test]
fn test_invalid_values_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("editor.json");

    fs::write(&path, r#"{"unit_px": 0.0}"#).unwrap();
    assert!(matches!(
        EditorConfig::load_from_file(&path),
        Err(KeymapError::Config(_))
    ));

    fs::write(&path, r#"{"canvas_padding_px": -1.0}"#).unwrap();
    assert!(matches!(
        EditorConfig::load_from_file(&path),
        Err(KeymapError::Config(_))
    ));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = EditorConfig::load_from_file(dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, KeymapError::Io(_)));
}
