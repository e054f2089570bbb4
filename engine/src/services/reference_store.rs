//! JSON file reference store
//!
//! Loads a JSON array of boards from disk. Every board is validated on load;
//! a single invalid board rejects the whole file.

use shared::{parse_boards, Board};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{EngineError, EngineResult};
use crate::traits::ReferenceStore;

/// Real reference store backed by a JSON file
#[derive(Debug, Clone)]
pub struct RealReferenceStore {
    path: PathBuf,
}

impl RealReferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait::async_trait]
impl ReferenceStore for RealReferenceStore {
    async fn load_boards(&self) -> EngineResult<Vec<Board>> {
        debug!(path = %self.path.display(), "loading reference tables");

        let contents = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            EngineError::reference_table(format!("cannot read {}: {e}", self.path.display()))
        })?;

        let boards = parse_boards(&contents).map_err(|e| {
            EngineError::reference_table(format!("{}: {e}", self.path.display()))
        })?;

        info!(
            path = %self.path.display(),
            boards = boards.len(),
            "📋 Reference tables loaded"
        );
        Ok(boards)
    }
}
