//! Engine facade
//!
//! [`BiologicalAgeEngine`] binds a configuration to the three panel
//! calculators. The free `compute_*` functions use the default
//! configuration. Every call is a pure function of its arguments.

use serde::{Deserialize, Serialize};
use shared::{BiophysicsInputs, Board, CalculationResult, Measurements, Sex};

use crate::core::{StatusClassifier, DEFAULT_NORMAL_BAND};
use crate::error::EngineResult;
use crate::panels::{
    BiochemistryCalculator, BiophysicsCalculator, ElementalCalculator, PanelCalculator,
};

/// Engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Differential ages within ±`normal_band` years classify as normal
    pub normal_band: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            normal_band: DEFAULT_NORMAL_BAND,
        }
    }
}

/// Stateless biological age calculator
#[derive(Debug, Clone, Default)]
pub struct BiologicalAgeEngine {
    config: EngineConfig,
    classifier: StatusClassifier,
}

impl BiologicalAgeEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            classifier: StatusClassifier::new(config.normal_band),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn biophysics(
        &self,
        boards: &[Board],
        measurements: &BiophysicsInputs,
        chronological_age: f64,
        sex: Sex,
        is_athlete: bool,
    ) -> EngineResult<CalculationResult> {
        BiophysicsCalculator::new(boards, sex, is_athlete).calculate(
            measurements,
            chronological_age,
            &self.classifier,
        )
    }

    /// Fails with a validation error when `measurements` is empty
    pub fn biochemistry(
        &self,
        boards: &[Board],
        measurements: &Measurements,
        chronological_age: f64,
    ) -> EngineResult<CalculationResult> {
        BiochemistryCalculator::new(boards).calculate(measurements, chronological_age, &self.classifier)
    }

    pub fn elemental(
        &self,
        measurements: &Measurements,
        chronological_age: f64,
    ) -> EngineResult<CalculationResult> {
        ElementalCalculator::new().calculate(measurements, chronological_age, &self.classifier)
    }
}

pub fn compute_biophysics_age(
    boards: &[Board],
    measurements: &BiophysicsInputs,
    chronological_age: f64,
    sex: Sex,
    is_athlete: bool,
) -> EngineResult<CalculationResult> {
    BiologicalAgeEngine::default().biophysics(boards, measurements, chronological_age, sex, is_athlete)
}

pub fn compute_biochemistry_age(
    boards: &[Board],
    measurements: &Measurements,
    chronological_age: f64,
) -> EngineResult<CalculationResult> {
    BiologicalAgeEngine::default().biochemistry(boards, measurements, chronological_age)
}

pub fn compute_elemental_age(
    measurements: &Measurements,
    chronological_age: f64,
) -> EngineResult<CalculationResult> {
    BiologicalAgeEngine::default().elemental(measurements, chronological_age)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::AgeStatus;

    #[test]
    fn test_default_engine_uses_default_band() {
        let engine = BiologicalAgeEngine::default();
        assert_eq!(engine.config().normal_band, DEFAULT_NORMAL_BAND);
    }

    #[test]
    fn test_configured_band_changes_status() {
        let measurements = Measurements::from([("lead".to_string(), 0.3)]);

        // Midpoint of the youngest lead bracket is 28
        let strict = BiologicalAgeEngine::new(EngineConfig { normal_band: 0.0 });
        let result = strict.elemental(&measurements, 30.0).unwrap();
        assert_eq!(result.biological_age, 28.0);
        assert_eq!(result.status, AgeStatus::Rejuvenated);

        let lenient = BiologicalAgeEngine::new(EngineConfig { normal_band: 5.0 });
        let result = lenient.elemental(&measurements, 30.0).unwrap();
        assert_eq!(result.status, AgeStatus::Normal);
    }
}
