//! Concrete panel calculators
//!
//! Each calculator implements [`PanelCalculator`](super::PanelCalculator)
//! and differs from the others only in its keys, boards and policy.

pub mod biochemistry;
pub mod biophysics;
pub mod elemental;

pub use biochemistry::{BiochemistryCalculator, BiochemistryMarker};
pub use biophysics::{fat_board_name, BiophysicsCalculator, BiophysicsMarker};
pub use elemental::{Bracket, Element, ElementalCalculator};
