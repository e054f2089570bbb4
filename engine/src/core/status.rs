//! Status classification
//!
//! Two independent rule sets: threshold bucketing of raw biochemistry values,
//! and bucketing of a panel's differential age.

use serde::{Deserialize, Serialize};
use shared::{AgeStatus, BiomarkerStatus};

/// Two fixed cutoffs for one biomarker
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BiomarkerThresholds {
    /// Upper bound of the optimal bucket (lower bound when `inverse`)
    pub optimal: f64,
    /// Upper bound of the suboptimal bucket (lower bound when `inverse`)
    pub risk: f64,
    /// Higher values are better
    pub inverse: bool,
}

impl BiomarkerThresholds {
    pub const fn new(optimal: f64, risk: f64) -> Self {
        Self {
            optimal,
            risk,
            inverse: false,
        }
    }

    pub const fn inverse(optimal: f64, risk: f64) -> Self {
        Self {
            optimal,
            risk,
            inverse: true,
        }
    }

    pub fn classify(&self, value: f64) -> BiomarkerStatus {
        let (optimal, suboptimal) = if self.inverse {
            (value >= self.optimal, value >= self.risk)
        } else {
            (value <= self.optimal, value <= self.risk)
        };

        if optimal {
            BiomarkerStatus::Optimal
        } else if suboptimal {
            BiomarkerStatus::Suboptimal
        } else {
            BiomarkerStatus::HighRisk
        }
    }
}

/// Default half-width, in years, of the band treated as normal
pub const DEFAULT_NORMAL_BAND: f64 = 2.0;

/// Buckets a differential age into [`AgeStatus`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatusClassifier {
    normal_band: f64,
}

impl StatusClassifier {
    /// Negative or non-finite bands collapse to zero
    pub fn new(normal_band: f64) -> Self {
        let normal_band = if normal_band.is_finite() {
            normal_band.max(0.0)
        } else {
            0.0
        };
        Self { normal_band }
    }

    pub fn normal_band(&self) -> f64 {
        self.normal_band
    }

    pub fn classify(&self, differential_age: f64) -> AgeStatus {
        if differential_age < -self.normal_band {
            AgeStatus::Rejuvenated
        } else if differential_age > self.normal_band {
            AgeStatus::Aged
        } else {
            AgeStatus::Normal
        }
    }
}

impl Default for StatusClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_NORMAL_BAND)
    }
}
