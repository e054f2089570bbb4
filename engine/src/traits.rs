//! Trait definitions with mockall annotations for testing
//!
//! The engine never fetches reference data itself. Callers load boards
//! through a [`ReferenceStore`] and pass them in, which keeps the
//! calculators pure and lets tests inject tables directly.

use shared::Board;

use crate::error::EngineResult;

/// Reference table source abstraction for dependency injection
#[mockall::automock]
#[async_trait::async_trait]
pub trait ReferenceStore: Send + Sync {
    /// Load every board of every biomarker
    ///
    /// # Returns
    /// All boards in table order, or a reference table error when the source
    /// is unreadable or contains invalid boards
    async fn load_boards(&self) -> EngineResult<Vec<Board>>;
}
