//! Biophysics panel
//!
//! Eight physical measurements evaluated against age-banded reference
//! tables. Fat percentage is the only slot whose table depends on the
//! subject: sex and athlete status select one of four tables.

use shared::{panel_debug, BiophysicsInputs, Board, Dimensions, Sex, WarningKind};

use super::super::traits::PanelCalculator;
use super::super::types::{PanelPolicy, Reading};

/// The eight biophysics slots, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BiophysicsMarker {
    FatPercentage,
    BodyMassIndex,
    DigitalReflexes,
    VisualAccommodation,
    StaticBalance,
    SkinHydration,
    SystolicPressure,
    DiastolicPressure,
}

impl BiophysicsMarker {
    pub const ALL: [BiophysicsMarker; 8] = [
        BiophysicsMarker::FatPercentage,
        BiophysicsMarker::BodyMassIndex,
        BiophysicsMarker::DigitalReflexes,
        BiophysicsMarker::VisualAccommodation,
        BiophysicsMarker::StaticBalance,
        BiophysicsMarker::SkinHydration,
        BiophysicsMarker::SystolicPressure,
        BiophysicsMarker::DiastolicPressure,
    ];

    /// Key used in results
    pub fn key(&self) -> &'static str {
        match self {
            BiophysicsMarker::FatPercentage => "fat_percentage",
            BiophysicsMarker::BodyMassIndex => "body_mass_index",
            BiophysicsMarker::DigitalReflexes => "digital_reflexes",
            BiophysicsMarker::VisualAccommodation => "visual_accommodation",
            BiophysicsMarker::StaticBalance => "static_balance",
            BiophysicsMarker::SkinHydration => "skin_hydration",
            BiophysicsMarker::SystolicPressure => "systolic_pressure",
            BiophysicsMarker::DiastolicPressure => "diastolic_pressure",
        }
    }

    /// Reference table name for the slot
    pub fn board_name(&self, sex: Sex, is_athlete: bool) -> &'static str {
        match self {
            BiophysicsMarker::FatPercentage => fat_board_name(sex, is_athlete),
            other => other.key(),
        }
    }
}

/// Fat-percentage reference table for the subject
pub fn fat_board_name(sex: Sex, is_athlete: bool) -> &'static str {
    match (sex, is_athlete) {
        (Sex::Male, false) => "male_fat",
        (Sex::Male, true) => "sporty_male_fat",
        (Sex::Female, false) => "female_fat",
        (Sex::Female, true) => "sporty_female_fat",
    }
}

enum SlotValue {
    Scalar(Option<f64>),
    Dimensional(Option<Dimensions>),
}

/// Biophysics calculator for one subject
pub struct BiophysicsCalculator<'a> {
    policy: PanelPolicy,
    boards: &'a [Board],
    sex: Sex,
    is_athlete: bool,
}

impl<'a> BiophysicsCalculator<'a> {
    pub fn new(boards: &'a [Board], sex: Sex, is_athlete: bool) -> Self {
        Self {
            policy: PanelPolicy::biophysics(),
            boards,
            sex,
            is_athlete,
        }
    }

    fn slot(inputs: &BiophysicsInputs, marker: BiophysicsMarker) -> SlotValue {
        match marker {
            BiophysicsMarker::FatPercentage => SlotValue::Scalar(inputs.fat_percentage),
            BiophysicsMarker::BodyMassIndex => SlotValue::Scalar(inputs.body_mass_index),
            BiophysicsMarker::DigitalReflexes => SlotValue::Dimensional(inputs.digital_reflexes),
            BiophysicsMarker::VisualAccommodation => SlotValue::Scalar(inputs.visual_accommodation),
            BiophysicsMarker::StaticBalance => SlotValue::Dimensional(inputs.static_balance),
            BiophysicsMarker::SkinHydration => SlotValue::Scalar(inputs.skin_hydration),
            BiophysicsMarker::SystolicPressure => SlotValue::Scalar(inputs.systolic_pressure),
            BiophysicsMarker::DiastolicPressure => SlotValue::Scalar(inputs.diastolic_pressure),
        }
    }
}

impl PanelCalculator for BiophysicsCalculator<'_> {
    type Input = BiophysicsInputs;

    fn policy(&self) -> &PanelPolicy {
        &self.policy
    }

    fn boards(&self) -> &[Board] {
        self.boards
    }

    fn readings(&self, input: &BiophysicsInputs) -> Vec<Reading> {
        panel_debug!(
            self.policy.panel,
            supplied = input.supplied_count(),
            athlete = self.is_athlete,
            sex = %self.sex,
            "biophysics slots supplied"
        );

        BiophysicsMarker::ALL
            .iter()
            .filter_map(|&marker| {
                let key = marker.key();
                let value = match Self::slot(input, marker) {
                    SlotValue::Scalar(None) | SlotValue::Dimensional(None) => return None,
                    SlotValue::Scalar(Some(v)) => Some(v).filter(|v| v.is_finite()),
                    SlotValue::Dimensional(Some(dims)) => dims.mean(),
                };

                Some(match value {
                    Some(value) => {
                        Reading::value(key, marker.board_name(self.sex, self.is_athlete), value)
                    }
                    None => Reading::skipped(key, WarningKind::MalformedMeasurement),
                })
            })
            .collect()
    }
}
