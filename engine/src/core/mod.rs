//! Aggregation and classification shared by all panels

pub mod aggregator;
pub mod status;

pub use aggregator::Aggregator;
pub use status::{BiomarkerThresholds, StatusClassifier, DEFAULT_NORMAL_BAND};
