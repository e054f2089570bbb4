//! Tests for the JSON file reference store

use super::common::{write_table, FAT_TABLE};
use crate::error::EngineError;
use crate::services::RealReferenceStore;
use crate::traits::ReferenceStore;

#[tokio::test]
async fn test_loads_boards_in_file_order() {
    let (_dir, path) = write_table(FAT_TABLE);
    let store = RealReferenceStore::new(&path);

    let boards = store.load_boards().await.unwrap();

    assert_eq!(boards.len(), 3);
    assert_eq!(boards[0].name, "female_fat");
    assert_eq!(boards[1].range.id, 5);
    assert!(!boards[0].inverse);
    assert!(boards[2].inverse);
    assert_eq!(store.path(), path.as_path());
}

#[tokio::test]
async fn test_missing_file_is_reference_table_error() {
    let dir = tempfile::tempdir().unwrap();
    let store = RealReferenceStore::new(dir.path().join("absent.json"));

    let err = store.load_boards().await.unwrap_err();

    assert!(matches!(err, EngineError::ReferenceTable { .. }));
    assert!(err.to_string().contains("absent.json"));
}

#[tokio::test]
async fn test_malformed_json_is_reference_table_error() {
    let (_dir, path) = write_table("[{\"name\": \"hdl\", \"min_value\": 40.0}");
    let store = RealReferenceStore::new(path);

    let err = store.load_boards().await.unwrap_err();
    assert!(matches!(err, EngineError::ReferenceTable { .. }));
}

#[tokio::test]
async fn test_invalid_board_rejects_whole_file() {
    let table = r#"[
        { "name": "hdl", "min_value": 40.0, "max_value": 60.0,
          "range": { "id": 1, "min_age": 35.0, "max_age": 63.0 } },
        { "name": "", "min_value": 60.0, "max_value": 90.0,
          "range": { "id": 2, "min_age": 21.0, "max_age": 35.0 } }
    ]"#;
    let (_dir, path) = write_table(table);
    let store = RealReferenceStore::new(path);

    let err = store.load_boards().await.unwrap_err();
    assert!(matches!(err, EngineError::ReferenceTable { .. }));
    assert!(err.to_string().contains("biomarker name is empty"));
    assert!(err.to_string().contains("boards.json"));
}

#[test]
fn test_empty_table_loads_without_tokio_main() {
    let (_dir, path) = write_table("[]");
    let store = RealReferenceStore::new(path);

    let boards = tokio_test::block_on(store.load_boards()).unwrap();
    assert!(boards.is_empty());
}
