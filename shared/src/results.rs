//! Calculation outputs handed back to callers

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::types::Panel;

/// Threshold-based status of a single biochemistry marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BiomarkerStatus {
    Optimal,
    Suboptimal,
    HighRisk,
}

impl fmt::Display for BiomarkerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BiomarkerStatus::Optimal => write!(f, "OPTIMAL"),
            BiomarkerStatus::Suboptimal => write!(f, "SUBOPTIMAL"),
            BiomarkerStatus::HighRisk => write!(f, "HIGH_RISK"),
        }
    }
}

/// Qualitative bucket for a differential age
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeStatus {
    /// Biologically younger than the chronological age
    Rejuvenated,
    Normal,
    /// Biologically older than the chronological age
    Aged,
}

impl fmt::Display for AgeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgeStatus::Rejuvenated => write!(f, "rejuvenated"),
            AgeStatus::Normal => write!(f, "normal"),
            AgeStatus::Aged => write!(f, "aged"),
        }
    }
}

/// Why a biomarker did not contribute to the composite age
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    /// No reference table exists for the biomarker
    MissingReferenceTable,
    /// A table exists but no band applies to the value
    NoApplicableBoard,
    /// The key is not part of the panel
    UnknownBiomarker,
    /// Non-finite value or incomplete dimensional reading
    MalformedMeasurement,
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WarningKind::MissingReferenceTable => write!(f, "missing reference table"),
            WarningKind::NoApplicableBoard => write!(f, "no applicable board"),
            WarningKind::UnknownBiomarker => write!(f, "unknown biomarker"),
            WarningKind::MalformedMeasurement => write!(f, "malformed measurement"),
        }
    }
}

/// A skipped biomarker, recorded for observability
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationWarning {
    pub biomarker: String,
    pub kind: WarningKind,
}

impl CalculationWarning {
    pub fn new(biomarker: impl Into<String>, kind: WarningKind) -> Self {
        Self {
            biomarker: biomarker.into(),
            kind,
        }
    }
}

impl fmt::Display for CalculationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.biomarker, self.kind)
    }
}

/// Result of one panel calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub panel: Panel,
    pub chronological_age: f64,
    pub biological_age: f64,
    pub differential_age: f64,
    pub status: AgeStatus,
    pub partial_ages: BTreeMap<String, f64>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub statuses: BTreeMap<String, BiomarkerStatus>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<CalculationWarning>,
}

impl CalculationResult {
    /// Number of biomarkers that contributed to the composite
    pub fn contributing_count(&self) -> usize {
        self.partial_ages.len()
    }

    /// True when no biomarker contributed and the composite fell back to the chronological age
    pub fn is_neutral(&self) -> bool {
        self.partial_ages.is_empty()
    }

    pub fn partial_age(&self, biomarker: &str) -> Option<f64> {
        self.partial_ages.get(biomarker).copied()
    }

    pub fn has_warning(&self, biomarker: &str, kind: WarningKind) -> bool {
        self.warnings
            .iter()
            .any(|w| w.biomarker == biomarker && w.kind == kind)
    }
}
