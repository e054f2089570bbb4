//! Service-specific tests
//!
//! Each service has its own test file with dedicated fixtures and helpers.

#[cfg(test)]
mod reference_store;

#[cfg(test)]
pub mod common {
    use std::path::PathBuf;
    use tempfile::TempDir;

    /// Two-band female fat table in the on-disk layout
    pub const FAT_TABLE: &str = r#"[
        {
            "name": "female_fat",
            "min_value": 29.0,
            "max_value": 32.0,
            "range": { "id": 4, "min_age": 42.0, "max_age": 49.0 }
        },
        {
            "name": "female_fat",
            "min_value": 32.0,
            "max_value": 35.0,
            "range": { "id": 5, "min_age": 49.0, "max_age": 56.0 }
        },
        {
            "name": "hdl",
            "min_value": 40.0,
            "max_value": 60.0,
            "inverse": true,
            "range": { "id": 2, "min_age": 35.0, "max_age": 63.0 }
        }
    ]"#;

    /// Write `contents` to `boards.json` inside a fresh temp dir
    pub fn write_table(contents: &str) -> (TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("boards.json");
        std::fs::write(&path, contents).unwrap();
        (dir, path)
    }
}
