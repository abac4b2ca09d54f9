use super::*;
use serde_json::json;

#[test]
fn read_keeps_key_order() {
    let doc = read_reader(r#"{"z": 1, "a": 2, "m": {"y": 3, "b": 4}}"#.as_bytes()).unwrap();
    let keys: Vec<&str> = doc.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys, ["z", "a", "m"]);
    assert_eq!(
        to_string(&doc, Layout::Compact).unwrap(),
        r#"{"z":1,"a":2,"m":{"y":3,"b":4}}"#
    );
}

#[test]
fn read_rejects_malformed_json() {
    let err = read_reader("{ \"layers\": [".as_bytes()).unwrap_err();
    assert!(matches!(err, LottieGradeError::Parse(_)));
}

#[test]
fn pretty_layout_uses_two_space_indent() {
    let s = to_string(&json!({"v": "5.7.4", "fr": 30}), Layout::Pretty).unwrap();
    assert_eq!(s, "{\n  \"v\": \"5.7.4\",\n  \"fr\": 30\n}");
}

#[test]
fn write_then_read_path() {
    let path = std::path::PathBuf::from("target")
        .join("unit_document")
        .join("nested")
        .join("doc.json");
    let _ = std::fs::remove_file(&path);

    let doc = json!({"layers": [{"ty": 1, "sc": "#ff0000"}], "w": 512});
    write_path(&path, &doc, Layout::Pretty).unwrap();
    let back = read_path(&path).unwrap();
    assert_eq!(back, doc);
}

#[test]
fn read_missing_path_is_io_error() {
    let err = read_path(std::path::Path::new("target/unit_document/missing.json")).unwrap_err();
    assert!(matches!(err, LottieGradeError::Io { .. }));
}
