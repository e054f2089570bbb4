//! Shared types for the biological age engine
//!
//! Contains the reference-table data model, measurement inputs, calculation
//! results and the logging setup used by every crate in the workspace.

pub mod errors;
pub mod logging;
pub mod results;
pub mod types;

pub use errors::*;
pub use types::*;

pub use results::{
    AgeStatus, BiomarkerStatus, CalculationResult, CalculationWarning, WarningKind,
};
