//! Composite age aggregation
//!
//! Collects per-biomarker ages under a [`PanelPolicy`] and derives the
//! composite biological age, the differential age and the age status.

use shared::{panel_debug, panel_warn, BiomarkerStatus, CalculationResult, CalculationWarning};
use std::collections::BTreeMap;

use super::status::StatusClassifier;
use crate::interpolation::round_to;
use crate::panels::PanelPolicy;

/// Running sum of partial ages for one calculation
#[derive(Debug)]
pub struct Aggregator<'p> {
    policy: &'p PanelPolicy,
    chronological_age: f64,
    partial_ages: BTreeMap<String, f64>,
    sum: f64,
    count: usize,
    warnings: Vec<CalculationWarning>,
}

impl<'p> Aggregator<'p> {
    pub fn new(policy: &'p PanelPolicy, chronological_age: f64) -> Self {
        Self {
            policy,
            chronological_age,
            partial_ages: BTreeMap::new(),
            sum: 0.0,
            count: 0,
            warnings: Vec::new(),
        }
    }

    /// Add one biomarker's age, rounded per policy before it enters the sum
    pub fn record(&mut self, key: impl Into<String>, age: f64) {
        let key = key.into();
        let age = match self.policy.partial_precision {
            Some(decimals) => round_to(age, decimals),
            None => age,
        };

        panel_debug!(self.policy.panel, biomarker = %key, age, "partial age recorded");

        if let Some(previous) = self.partial_ages.insert(key, age) {
            // Same key supplied twice: last value wins
            self.sum -= previous;
            self.count -= 1;
        }
        self.sum += age;
        self.count += 1;
    }

    /// Record a biomarker that contributes nothing
    pub fn skip(&mut self, warning: CalculationWarning) {
        panel_warn!(
            self.policy.panel,
            biomarker = %warning.biomarker,
            reason = %warning.kind,
            "biomarker skipped"
        );
        self.warnings.push(warning);
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Mean of the recorded ages, or the chronological age when none
    pub fn raw_composite(&self) -> f64 {
        if self.count == 0 {
            self.chronological_age
        } else {
            self.sum / self.count as f64
        }
    }

    pub fn finish(
        self,
        classifier: &StatusClassifier,
        statuses: BTreeMap<String, BiomarkerStatus>,
    ) -> CalculationResult {
        let biological_age = round_to(self.raw_composite(), self.policy.composite_precision);
        let differential = biological_age - self.chronological_age;
        let differential_age = match self.policy.differential_precision {
            Some(decimals) => round_to(differential, decimals),
            None => differential,
        };
        let status = classifier.classify(differential_age);

        panel_debug!(
            self.policy.panel,
            biological_age,
            differential_age,
            contributing = self.count,
            skipped = self.warnings.len(),
            "composite age computed"
        );

        CalculationResult {
            panel: self.policy.panel,
            chronological_age: self.chronological_age,
            biological_age,
            differential_age,
            status,
            partial_ages: self.partial_ages,
            statuses,
            warnings: self.warnings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{AgeStatus, WarningKind};

    #[test]
    fn test_biophysics_rounding() {
        let policy = PanelPolicy::biophysics();
        let mut aggregator = Aggregator::new(&policy, 73.0);
        aggregator.record("fat_percentage", 49.0 + 2.5 / 3.0 * 7.0);
        aggregator.record("body_mass_index", 59.5);

        let result = aggregator.finish(&StatusClassifier::default(), BTreeMap::new());
        assert_eq!(result.partial_age("fat_percentage"), Some(54.83));
        // (54.83 + 59.5) / 2 = 57.165
        assert_eq!(result.biological_age, 57.0);
        assert_eq!(result.differential_age, -16.0);
        assert_eq!(result.status, AgeStatus::Rejuvenated);
    }

    #[test]
    fn test_biochemistry_rounds_only_composite() {
        let policy = PanelPolicy::biochemistry();
        let mut aggregator = Aggregator::new(&policy, 50.0);
        aggregator.record("hdl", 50.123);
        aggregator.record("crp", 55.456);

        let result = aggregator.finish(&StatusClassifier::default(), BTreeMap::new());
        assert_eq!(result.partial_age("hdl"), Some(50.123));
        // (50.123 + 55.456) / 2 = 52.7895
        assert_eq!(result.biological_age, 52.8);
        assert_eq!(result.differential_age, 2.8);
        assert_eq!(result.status, AgeStatus::Aged);
    }

    #[test]
    fn test_empty_aggregation_is_neutral() {
        let policy = PanelPolicy::elemental();
        let mut aggregator = Aggregator::new(&policy, 61.0);
        aggregator.skip(CalculationWarning::new("lead", WarningKind::NoApplicableBoard));

        let result = aggregator.finish(&StatusClassifier::default(), BTreeMap::new());
        assert_eq!(result.biological_age, 61.0);
        assert_eq!(result.differential_age, 0.0);
        assert_eq!(result.status, AgeStatus::Normal);
        assert!(result.is_neutral());
        assert!(result.has_warning("lead", WarningKind::NoApplicableBoard));
    }

    #[test]
    fn test_repeated_key_replaces_previous_age() {
        let policy = PanelPolicy::biochemistry();
        let mut aggregator = Aggregator::new(&policy, 40.0);
        aggregator.record("hdl", 30.0);
        aggregator.record("hdl", 50.0);

        assert_eq!(aggregator.count(), 1);
        assert_eq!(aggregator.raw_composite(), 50.0);
    }
}
