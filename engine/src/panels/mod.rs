//! Panel module containing traits, types, and calculators
//!
//! This module keeps the calculator interface, the policy types and the
//! concrete panel implementations apart.

pub mod calculators;
pub mod traits;
pub mod types;

#[cfg(test)]
mod tests;

pub use calculators::*;
pub use traits::PanelCalculator;
pub use types::*;
