//! Panel calculator trait definition
//!
//! Every panel implements [`PanelCalculator`] by supplying its policy, its
//! reference boards and the readings extracted from its input. The shared
//! evaluation loop lives in the provided [`PanelCalculator::calculate`].

use shared::{
    panel_debug, BiomarkerStatus, Board, CalculationResult, CalculationWarning, WarningKind,
};
use std::collections::BTreeMap;

use super::types::{EmptyInput, PanelPolicy, Reading};
use crate::core::{Aggregator, StatusClassifier};
use crate::error::{ensure_chronological_age, EngineError, EngineResult};
use crate::interpolation::Resolution;

/// Core trait that all panel calculators implement
pub trait PanelCalculator {
    /// Caller-supplied measurements for this panel
    type Input: ?Sized;

    /// Strategy parameters for the shared evaluation loop
    fn policy(&self) -> &PanelPolicy;

    /// All reference boards available to this panel
    fn boards(&self) -> &[Board];

    /// Supplied biomarkers in evaluation order
    ///
    /// Absent slots produce nothing; malformed or unknown ones produce a
    /// [`Reading::Skipped`].
    fn readings(&self, input: &Self::Input) -> Vec<Reading>;

    /// Threshold statuses layered on the raw input, empty by default
    fn statuses(&self, _input: &Self::Input) -> BTreeMap<String, BiomarkerStatus> {
        BTreeMap::new()
    }

    /// Boards belonging to one biomarker, in table order
    fn boards_for(&self, board_name: &str) -> Vec<&Board> {
        self.boards()
            .iter()
            .filter(|board| board.name == board_name)
            .collect()
    }

    /// Evaluate every reading and aggregate into a [`CalculationResult`]
    fn calculate(
        &self,
        input: &Self::Input,
        chronological_age: f64,
        classifier: &StatusClassifier,
    ) -> EngineResult<CalculationResult> {
        let chronological_age = ensure_chronological_age(chronological_age)?;
        let policy = self.policy();
        let readings = self.readings(input);

        if readings.is_empty() && policy.empty_input == EmptyInput::Reject {
            return Err(EngineError::validation(format!(
                "{} panel requires at least one biomarker value",
                policy.panel
            )));
        }

        let resolver = policy.resolver();
        panel_debug!(
            policy.panel,
            strategy = ?resolver.strategy(),
            readings = readings.len(),
            "evaluating panel"
        );
        let mut aggregator = Aggregator::new(policy, chronological_age);

        for reading in readings {
            let (key, board_name, value) = match reading {
                Reading::Value {
                    key,
                    board_name,
                    value,
                } => (key, board_name, value),
                Reading::Skipped(warning) => {
                    aggregator.skip(warning);
                    continue;
                }
            };

            let boards = self.boards_for(&board_name);
            if boards.is_empty() {
                aggregator.skip(CalculationWarning::new(key, WarningKind::MissingReferenceTable));
                continue;
            }

            match resolver.resolve(&boards, value, chronological_age) {
                Resolution::Board(board) => {
                    panel_debug!(
                        policy.panel,
                        biomarker = %key,
                        value,
                        min_value = board.min_value,
                        max_value = board.max_value,
                        "board resolved"
                    );
                    aggregator.record(key, policy.score(board, value));
                }
                Resolution::Neutral => {
                    panel_debug!(policy.panel, biomarker = %key, value, "no band for subject age, using chronological age");
                    aggregator.record(key, chronological_age);
                }
                Resolution::Unresolved => {
                    aggregator.skip(CalculationWarning::new(key, WarningKind::NoApplicableBoard));
                }
            }
        }

        Ok(aggregator.finish(classifier, self.statuses(input)))
    }
}
