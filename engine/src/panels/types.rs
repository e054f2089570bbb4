//! Panel policy and reading types
//!
//! A [`PanelPolicy`] captures everything that differs between panels in the
//! shared evaluation loop: board selection, scoring and rounding, and how an
//! empty request is treated.

use shared::{Board, CalculationWarning, Panel, WarningKind};

use crate::interpolation::{interpolate, BoardResolver, ResolutionStrategy};

/// How a resolved board turns a value into an age
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scoring {
    /// Linear interpolation inside the board
    Interpolate,
    /// Midpoint of the board's age interval
    Midpoint,
}

/// Behaviour when the caller supplied no biomarker at all
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyInput {
    /// Composite falls back to the chronological age
    FallbackToChronological,
    /// Fail with a validation error
    Reject,
}

/// Strategy object parameterising the shared evaluation loop
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelPolicy {
    pub panel: Panel,
    pub resolution: ResolutionStrategy,
    pub scoring: Scoring,
    /// Decimals for each partial age, `None` keeps full precision
    pub partial_precision: Option<u32>,
    pub composite_precision: u32,
    /// Decimals for the differential age, `None` keeps full precision
    pub differential_precision: Option<u32>,
    pub empty_input: EmptyInput,
}

impl PanelPolicy {
    /// Age-aware resolution, 2-decimal partials, whole-year composite
    pub fn biophysics() -> Self {
        Self {
            panel: Panel::Biophysics,
            resolution: ResolutionStrategy::AgeAware,
            scoring: Scoring::Interpolate,
            partial_precision: Some(2),
            composite_precision: 0,
            differential_precision: None,
            empty_input: EmptyInput::FallbackToChronological,
        }
    }

    /// Age-agnostic resolution with extrapolation, rounding only at the end
    pub fn biochemistry() -> Self {
        Self {
            panel: Panel::Biochemistry,
            resolution: ResolutionStrategy::FirstValueMatch { extrapolate: true },
            scoring: Scoring::Interpolate,
            partial_precision: None,
            composite_precision: 1,
            differential_precision: Some(1),
            empty_input: EmptyInput::Reject,
        }
    }

    /// Bracket midpoints, out-of-table values skipped
    pub fn elemental() -> Self {
        Self {
            panel: Panel::Elemental,
            resolution: ResolutionStrategy::FirstValueMatch { extrapolate: false },
            scoring: Scoring::Midpoint,
            partial_precision: None,
            composite_precision: 1,
            differential_precision: Some(1),
            empty_input: EmptyInput::FallbackToChronological,
        }
    }

    pub fn resolver(&self) -> BoardResolver {
        BoardResolver::new(self.resolution)
    }

    pub fn score(&self, board: &Board, value: f64) -> f64 {
        match self.scoring {
            Scoring::Interpolate => interpolate(board, value),
            Scoring::Midpoint => board.range.midpoint(),
        }
    }
}

/// One supplied biomarker, ready for evaluation or already rejected
#[derive(Debug, Clone, PartialEq)]
pub enum Reading {
    Value {
        /// Key reported in the result
        key: String,
        /// Reference table to resolve against
        board_name: String,
        value: f64,
    },
    Skipped(CalculationWarning),
}

impl Reading {
    pub fn value(key: impl Into<String>, board_name: impl Into<String>, value: f64) -> Self {
        Reading::Value {
            key: key.into(),
            board_name: board_name.into(),
            value,
        }
    }

    pub fn skipped(key: impl Into<String>, kind: WarningKind) -> Self {
        Reading::Skipped(CalculationWarning::new(key, kind))
    }
}
