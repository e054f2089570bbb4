//! Biological age interpolation engine
//!
//! Turns biomarker measurements from three clinical panels into a
//! biological age by locating each value inside an age-banded reference
//! board, interpolating linearly and averaging the per-biomarker ages.
//! Reference boards are supplied by the caller, usually through a
//! [`ReferenceStore`].

pub mod age_engine;
pub mod batch;
pub mod core;
pub mod error;
pub mod interpolation;
pub mod panels;
pub mod services;
pub mod traits;

// Re-export commonly used types
pub use crate::core::{Aggregator, BiomarkerThresholds, StatusClassifier, DEFAULT_NORMAL_BAND};
pub use age_engine::{
    compute_biochemistry_age, compute_biophysics_age, compute_elemental_age, BiologicalAgeEngine,
    EngineConfig,
};
pub use batch::{evaluate_batch, parse_requests, BatchOutcome, CalculationRequest};
pub use error::{EngineError, EngineResult};
pub use interpolation::{interpolate, round_to, BoardResolver, Resolution, ResolutionStrategy};
pub use panels::{
    BiochemistryCalculator, BiochemistryMarker, BiophysicsCalculator, BiophysicsMarker, Element,
    ElementalCalculator, PanelCalculator, PanelPolicy,
};
pub use traits::{MockReferenceStore, ReferenceStore};
