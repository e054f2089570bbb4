//! Test helpers to reduce boilerplate

#![allow(dead_code)]

use engine::CalculationRequest;
use shared::{AgeStatus, Board, CalculationResult};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestHelpers;

impl TestHelpers {
    /// Assert the composite figures of a result
    pub fn assert_composite(
        result: &CalculationResult,
        biological_age: f64,
        differential_age: f64,
        status: AgeStatus,
    ) {
        assert_eq!(result.biological_age, biological_age, "biological age");
        assert_eq!(result.differential_age, differential_age, "differential age");
        assert_eq!(result.status, status, "status");
    }

    /// Every partial age must lie inside the adult age range
    pub fn assert_partials_in_range(result: &CalculationResult) {
        for (key, age) in &result.partial_ages {
            assert!(
                (21.0..=120.0).contains(age),
                "{key} partial age {age} outside the adult range"
            );
        }
    }

    /// Write boards as a JSON table inside a fresh temp dir
    pub fn write_boards(boards: &[Board]) -> (TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("boards.json");
        std::fs::write(&path, serde_json::to_string_pretty(boards).unwrap()).unwrap();
        (dir, path)
    }

    /// Write requests as a JSON array next to an existing file
    pub fn write_requests(dir: &Path, requests: &[CalculationRequest]) -> PathBuf {
        let path = dir.join("requests.json");
        std::fs::write(&path, serde_json::to_string(requests).unwrap()).unwrap();
        path
    }
}
