//! Biochemistry panel
//!
//! Sixteen blood markers. Each supplied marker gets two independent
//! outputs: an interpolated age from the reference tables and a
//! threshold status that does not look at the tables at all.

use shared::{ensure_finite, BiomarkerStatus, Board, Measurements, WarningKind};
use std::collections::BTreeMap;

use super::super::traits::PanelCalculator;
use super::super::types::{PanelPolicy, Reading};
use crate::core::BiomarkerThresholds;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BiochemistryMarker {
    /// IGF-1
    SomatomedinC,
    Hba1c,
    Insulin,
    DheaS,
    FreeTestosterone,
    Shbg,
    Psa,
    UricAcid,
    Ferritin,
    VitaminD,
    Homocysteine,
    Crp,
    Fibrinogen,
    Triglycerides,
    Hdl,
    TgHdlRatio,
}

impl BiochemistryMarker {
    pub const ALL: [BiochemistryMarker; 16] = [
        BiochemistryMarker::SomatomedinC,
        BiochemistryMarker::Hba1c,
        BiochemistryMarker::Insulin,
        BiochemistryMarker::DheaS,
        BiochemistryMarker::FreeTestosterone,
        BiochemistryMarker::Shbg,
        BiochemistryMarker::Psa,
        BiochemistryMarker::UricAcid,
        BiochemistryMarker::Ferritin,
        BiochemistryMarker::VitaminD,
        BiochemistryMarker::Homocysteine,
        BiochemistryMarker::Crp,
        BiochemistryMarker::Fibrinogen,
        BiochemistryMarker::Triglycerides,
        BiochemistryMarker::Hdl,
        BiochemistryMarker::TgHdlRatio,
    ];

    /// Measurement key, also the reference table name
    pub fn key(&self) -> &'static str {
        match self {
            BiochemistryMarker::SomatomedinC => "somatomedin_c",
            BiochemistryMarker::Hba1c => "hba1c",
            BiochemistryMarker::Insulin => "insulin",
            BiochemistryMarker::DheaS => "dhea_s",
            BiochemistryMarker::FreeTestosterone => "free_testosterone",
            BiochemistryMarker::Shbg => "shbg",
            BiochemistryMarker::Psa => "psa",
            BiochemistryMarker::UricAcid => "uric_acid",
            BiochemistryMarker::Ferritin => "ferritin",
            BiochemistryMarker::VitaminD => "vitamin_d",
            BiochemistryMarker::Homocysteine => "homocysteine",
            BiochemistryMarker::Crp => "crp",
            BiochemistryMarker::Fibrinogen => "fibrinogen",
            BiochemistryMarker::Triglycerides => "triglycerides",
            BiochemistryMarker::Hdl => "hdl",
            BiochemistryMarker::TgHdlRatio => "tg_hdl_ratio",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|marker| marker.key() == key)
    }

    /// Fixed status cutoffs in conventional units
    pub fn thresholds(&self) -> BiomarkerThresholds {
        match self {
            // ng/mL
            BiochemistryMarker::SomatomedinC => BiomarkerThresholds::inverse(200.0, 120.0),
            // %
            BiochemistryMarker::Hba1c => BiomarkerThresholds::new(5.6, 6.4),
            // µU/mL
            BiochemistryMarker::Insulin => BiomarkerThresholds::new(8.0, 15.0),
            // µg/dL
            BiochemistryMarker::DheaS => BiomarkerThresholds::inverse(200.0, 100.0),
            // pg/mL
            BiochemistryMarker::FreeTestosterone => BiomarkerThresholds::inverse(10.0, 5.0),
            // nmol/L
            BiochemistryMarker::Shbg => BiomarkerThresholds::new(60.0, 80.0),
            // ng/mL
            BiochemistryMarker::Psa => BiomarkerThresholds::new(2.5, 4.0),
            // mg/dL
            BiochemistryMarker::UricAcid => BiomarkerThresholds::new(5.5, 7.0),
            // ng/mL
            BiochemistryMarker::Ferritin => BiomarkerThresholds::new(150.0, 300.0),
            // ng/mL
            BiochemistryMarker::VitaminD => BiomarkerThresholds::inverse(40.0, 30.0),
            // µmol/L
            BiochemistryMarker::Homocysteine => BiomarkerThresholds::new(8.0, 12.0),
            // mg/L
            BiochemistryMarker::Crp => BiomarkerThresholds::new(1.0, 3.0),
            // mg/dL
            BiochemistryMarker::Fibrinogen => BiomarkerThresholds::new(300.0, 400.0),
            // mg/dL
            BiochemistryMarker::Triglycerides => BiomarkerThresholds::new(100.0, 150.0),
            // mg/dL
            BiochemistryMarker::Hdl => BiomarkerThresholds::inverse(60.0, 40.0),
            BiochemistryMarker::TgHdlRatio => BiomarkerThresholds::new(2.0, 3.5),
        }
    }
}

/// Biochemistry calculator over a set of reference boards
pub struct BiochemistryCalculator<'a> {
    policy: PanelPolicy,
    boards: &'a [Board],
}

impl<'a> BiochemistryCalculator<'a> {
    pub fn new(boards: &'a [Board]) -> Self {
        Self {
            policy: PanelPolicy::biochemistry(),
            boards,
        }
    }
}

impl PanelCalculator for BiochemistryCalculator<'_> {
    type Input = Measurements;

    fn policy(&self) -> &PanelPolicy {
        &self.policy
    }

    fn boards(&self) -> &[Board] {
        self.boards
    }

    fn readings(&self, input: &Measurements) -> Vec<Reading> {
        input
            .iter()
            .map(|(key, &value)| match BiochemistryMarker::from_key(key) {
                None => Reading::skipped(key.as_str(), WarningKind::UnknownBiomarker),
                Some(marker) => match ensure_finite(key, value) {
                    Ok(value) => Reading::value(key.as_str(), marker.key(), value),
                    Err(_) => Reading::skipped(key.as_str(), WarningKind::MalformedMeasurement),
                },
            })
            .collect()
    }

    fn statuses(&self, input: &Measurements) -> BTreeMap<String, BiomarkerStatus> {
        input
            .iter()
            .filter(|(_, value)| value.is_finite())
            .filter_map(|(key, &value)| {
                BiochemistryMarker::from_key(key)
                    .map(|marker| (key.clone(), marker.thresholds().classify(value)))
            })
            .collect()
    }
}
