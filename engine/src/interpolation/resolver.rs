//! Board selection for a measured value
//!
//! Each panel picks one [`ResolutionStrategy`]; the resolver never fails, it
//! reports what it found through [`Resolution`].

use serde::{Deserialize, Serialize};
use shared::Board;
use std::cmp::Ordering;

/// How a panel selects the applicable board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolutionStrategy {
    /// Prefer boards whose age band contains the chronological age, falling
    /// back to value containment, then to the nearest band at that age
    AgeAware,

    /// First board whose value interval contains the measurement, ignoring
    /// the chronological age. With `extrapolate`, values past either end of
    /// the table resolve to the board at that end.
    FirstValueMatch { extrapolate: bool },
}

/// Outcome of board resolution
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolution<'a> {
    /// Interpolate against this board
    Board(&'a Board),
    /// No band applies; the biomarker contributes the chronological age
    Neutral,
    /// Skip the biomarker
    Unresolved,
}

impl<'a> Resolution<'a> {
    pub fn board(&self) -> Option<&'a Board> {
        match self {
            Resolution::Board(board) => Some(*board),
            _ => None,
        }
    }
}

/// Selects boards for one biomarker
#[derive(Debug, Clone, Copy)]
pub struct BoardResolver {
    strategy: ResolutionStrategy,
}

impl BoardResolver {
    pub fn new(strategy: ResolutionStrategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> ResolutionStrategy {
        self.strategy
    }

    /// Resolve `value` against the boards of a single biomarker
    pub fn resolve<'a>(&self, boards: &[&'a Board], value: f64, chronological_age: f64) -> Resolution<'a> {
        if boards.is_empty() {
            return Resolution::Unresolved;
        }

        match self.strategy {
            ResolutionStrategy::AgeAware => resolve_age_aware(boards, value, chronological_age),
            ResolutionStrategy::FirstValueMatch { extrapolate } => {
                resolve_first_value_match(boards, value, extrapolate)
            }
        }
    }
}

fn resolve_age_aware<'a>(boards: &[&'a Board], value: f64, chronological_age: f64) -> Resolution<'a> {
    if let Some(board) = boards
        .iter()
        .copied()
        .find(|b| b.contains_age(chronological_age) && b.contains_value(value))
    {
        return Resolution::Board(board);
    }

    if let Some(board) = boards.iter().copied().find(|b| b.contains_value(value)) {
        return Resolution::Board(board);
    }

    // Value lies outside every band: nearest band for the subject's age
    boards
        .iter()
        .copied()
        .filter(|b| b.contains_age(chronological_age))
        .min_by(|a, b| {
            a.distance_to(value)
                .partial_cmp(&b.distance_to(value))
                .unwrap_or(Ordering::Equal)
        })
        .map(Resolution::Board)
        .unwrap_or(Resolution::Neutral)
}

/// First board containing `value`, in table order.
///
/// Out-of-table values resolve to the edge board only; the age comes from
/// clamping during interpolation. On an inverse table a value below every
/// band therefore lands on the lowest-bound board's `max_age`, not its
/// `min_age`.
fn resolve_first_value_match<'a>(boards: &[&'a Board], value: f64, extrapolate: bool) -> Resolution<'a> {
    if let Some(board) = boards.iter().copied().find(|b| b.contains_value(value)) {
        return Resolution::Board(board);
    }

    if !extrapolate {
        return Resolution::Unresolved;
    }

    let lowest = boards
        .iter()
        .copied()
        .min_by(|a, b| edge_order(a, b, |board| board.value_bounds().0));
    let highest = boards
        .iter()
        .copied()
        .max_by(|a, b| edge_order(a, b, |board| board.value_bounds().1));

    match (lowest, highest) {
        (Some(low), _) if value < low.value_bounds().0 => Resolution::Board(low),
        (_, Some(high)) if value > high.value_bounds().1 => Resolution::Board(high),
        _ => Resolution::Unresolved,
    }
}

/// Order boards by a value edge, ties broken by age ascending
fn edge_order(a: &Board, b: &Board, edge: impl Fn(&Board) -> f64) -> Ordering {
    edge(a)
        .partial_cmp(&edge(b))
        .unwrap_or(Ordering::Equal)
        .then_with(|| {
            a.range
                .min_age
                .partial_cmp(&b.range.min_age)
                .unwrap_or(Ordering::Equal)
        })
}
