//! Elemental panel (toxic metals and minerals)
//!
//! Reference data is owned here rather than supplied by the caller, and only
//! a subset of elements has a bracket table. Each matching bracket
//! contributes the midpoint of its age range.

use shared::{ensure_finite, AgeRange, Board, Measurements, WarningKind};
use std::sync::OnceLock;

use super::super::traits::PanelCalculator;
use super::super::types::{PanelPolicy, Reading};

/// Value interval mapped to an age interval
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    pub min_value: f64,
    pub max_value: f64,
    pub min_age: f64,
    pub max_age: f64,
}

const fn bracket(min_value: f64, max_value: f64, min_age: f64, max_age: f64) -> Bracket {
    Bracket {
        min_value,
        max_value,
        min_age,
        max_age,
    }
}

// Hair concentrations in µg/g. Toxic metals age with concentration,
// minerals age with depletion.
const LEAD: &[Bracket] = &[
    bracket(0.0, 0.6, 21.0, 35.0),
    bracket(0.6, 1.2, 35.0, 49.0),
    bracket(1.2, 2.0, 49.0, 63.0),
    bracket(2.0, 3.0, 63.0, 77.0),
    bracket(3.0, 5.0, 77.0, 91.0),
    bracket(5.0, 10.0, 91.0, 105.0),
    bracket(10.0, 100.0, 105.0, 120.0),
];

const MERCURY: &[Bracket] = &[
    bracket(0.0, 0.2, 21.0, 35.0),
    bracket(0.2, 0.4, 35.0, 49.0),
    bracket(0.4, 0.8, 49.0, 63.0),
    bracket(0.8, 1.2, 63.0, 77.0),
    bracket(1.2, 2.0, 77.0, 91.0),
    bracket(2.0, 4.0, 91.0, 105.0),
    bracket(4.0, 50.0, 105.0, 120.0),
];

const CADMIUM: &[Bracket] = &[
    bracket(0.0, 0.03, 21.0, 35.0),
    bracket(0.03, 0.06, 35.0, 49.0),
    bracket(0.06, 0.1, 49.0, 63.0),
    bracket(0.1, 0.2, 63.0, 77.0),
    bracket(0.2, 0.4, 77.0, 91.0),
    bracket(0.4, 1.0, 91.0, 105.0),
    bracket(1.0, 20.0, 105.0, 120.0),
];

const ALUMINUM: &[Bracket] = &[
    bracket(0.0, 3.0, 21.0, 35.0),
    bracket(3.0, 6.0, 35.0, 49.0),
    bracket(6.0, 9.0, 49.0, 63.0),
    bracket(9.0, 12.0, 63.0, 77.0),
    bracket(12.0, 16.0, 77.0, 91.0),
    bracket(16.0, 25.0, 91.0, 105.0),
    bracket(25.0, 200.0, 105.0, 120.0),
];

const ARSENIC: &[Bracket] = &[
    bracket(0.0, 0.02, 21.0, 35.0),
    bracket(0.02, 0.04, 35.0, 49.0),
    bracket(0.04, 0.06, 49.0, 63.0),
    bracket(0.06, 0.08, 63.0, 77.0),
    bracket(0.08, 0.12, 77.0, 91.0),
    bracket(0.12, 0.3, 91.0, 105.0),
    bracket(0.3, 10.0, 105.0, 120.0),
];

const ZINC: &[Bracket] = &[
    bracket(160.0, 240.0, 21.0, 35.0),
    bracket(140.0, 160.0, 35.0, 49.0),
    bracket(120.0, 140.0, 49.0, 63.0),
    bracket(100.0, 120.0, 63.0, 77.0),
    bracket(80.0, 100.0, 77.0, 91.0),
    bracket(60.0, 80.0, 91.0, 105.0),
    bracket(0.0, 60.0, 105.0, 120.0),
];

const MAGNESIUM: &[Bracket] = &[
    bracket(40.0, 80.0, 21.0, 35.0),
    bracket(30.0, 40.0, 35.0, 49.0),
    bracket(25.0, 30.0, 49.0, 63.0),
    bracket(20.0, 25.0, 63.0, 77.0),
    bracket(15.0, 20.0, 77.0, 91.0),
    bracket(10.0, 15.0, 91.0, 105.0),
    bracket(0.0, 10.0, 105.0, 120.0),
];

const SELENIUM: &[Bracket] = &[
    bracket(0.8, 1.5, 21.0, 35.0),
    bracket(0.7, 0.8, 35.0, 49.0),
    bracket(0.6, 0.7, 49.0, 63.0),
    bracket(0.5, 0.6, 63.0, 77.0),
    bracket(0.4, 0.5, 77.0, 91.0),
    bracket(0.3, 0.4, 91.0, 105.0),
    bracket(0.0, 0.3, 105.0, 120.0),
];

/// Elements recognised by the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    // Toxic metals
    Aluminum,
    Antimony,
    Arsenic,
    Barium,
    Beryllium,
    Bismuth,
    Cadmium,
    Lead,
    Mercury,
    Nickel,
    Silver,
    Thallium,
    Tin,
    Uranium,
    // Minerals
    Boron,
    Calcium,
    Chromium,
    Cobalt,
    Copper,
    Germanium,
    Iodine,
    Iron,
    Lithium,
    Magnesium,
    Manganese,
    Molybdenum,
    Phosphorus,
    Potassium,
    Rubidium,
    Selenium,
    Sodium,
    Strontium,
    Sulfur,
    Vanadium,
    Zinc,
    Zirconium,
}

impl Element {
    pub const ALL: [Element; 36] = [
        Element::Aluminum,
        Element::Antimony,
        Element::Arsenic,
        Element::Barium,
        Element::Beryllium,
        Element::Bismuth,
        Element::Cadmium,
        Element::Lead,
        Element::Mercury,
        Element::Nickel,
        Element::Silver,
        Element::Thallium,
        Element::Tin,
        Element::Uranium,
        Element::Boron,
        Element::Calcium,
        Element::Chromium,
        Element::Cobalt,
        Element::Copper,
        Element::Germanium,
        Element::Iodine,
        Element::Iron,
        Element::Lithium,
        Element::Magnesium,
        Element::Manganese,
        Element::Molybdenum,
        Element::Phosphorus,
        Element::Potassium,
        Element::Rubidium,
        Element::Selenium,
        Element::Sodium,
        Element::Strontium,
        Element::Sulfur,
        Element::Vanadium,
        Element::Zinc,
        Element::Zirconium,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Element::Aluminum => "aluminum",
            Element::Antimony => "antimony",
            Element::Arsenic => "arsenic",
            Element::Barium => "barium",
            Element::Beryllium => "beryllium",
            Element::Bismuth => "bismuth",
            Element::Cadmium => "cadmium",
            Element::Lead => "lead",
            Element::Mercury => "mercury",
            Element::Nickel => "nickel",
            Element::Silver => "silver",
            Element::Thallium => "thallium",
            Element::Tin => "tin",
            Element::Uranium => "uranium",
            Element::Boron => "boron",
            Element::Calcium => "calcium",
            Element::Chromium => "chromium",
            Element::Cobalt => "cobalt",
            Element::Copper => "copper",
            Element::Germanium => "germanium",
            Element::Iodine => "iodine",
            Element::Iron => "iron",
            Element::Lithium => "lithium",
            Element::Magnesium => "magnesium",
            Element::Manganese => "manganese",
            Element::Molybdenum => "molybdenum",
            Element::Phosphorus => "phosphorus",
            Element::Potassium => "potassium",
            Element::Rubidium => "rubidium",
            Element::Selenium => "selenium",
            Element::Sodium => "sodium",
            Element::Strontium => "strontium",
            Element::Sulfur => "sulfur",
            Element::Vanadium => "vanadium",
            Element::Zinc => "zinc",
            Element::Zirconium => "zirconium",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|element| element.key() == key)
    }

    /// Bracket table, `None` for elements without reference data
    pub fn brackets(&self) -> Option<&'static [Bracket]> {
        match self {
            Element::Lead => Some(LEAD),
            Element::Mercury => Some(MERCURY),
            Element::Cadmium => Some(CADMIUM),
            Element::Aluminum => Some(ALUMINUM),
            Element::Arsenic => Some(ARSENIC),
            Element::Zinc => Some(ZINC),
            Element::Magnesium => Some(MAGNESIUM),
            Element::Selenium => Some(SELENIUM),
            _ => None,
        }
    }
}

/// Bracket tables flattened into boards, built once
fn element_boards() -> &'static [Board] {
    static BOARDS: OnceLock<Vec<Board>> = OnceLock::new();

    BOARDS.get_or_init(|| {
        Element::ALL
            .iter()
            .filter_map(|element| element.brackets().map(|brackets| (element.key(), brackets)))
            .flat_map(|(name, brackets)| {
                brackets.iter().zip(1u32..).map(move |(b, id)| {
                    Board::new(
                        name,
                        b.min_value,
                        b.max_value,
                        AgeRange::new(id, b.min_age, b.max_age),
                    )
                })
            })
            .collect()
    })
}

/// Elemental calculator over the built-in bracket tables
pub struct ElementalCalculator {
    policy: PanelPolicy,
}

impl ElementalCalculator {
    pub fn new() -> Self {
        Self {
            policy: PanelPolicy::elemental(),
        }
    }
}

impl Default for ElementalCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl PanelCalculator for ElementalCalculator {
    type Input = Measurements;

    fn policy(&self) -> &PanelPolicy {
        &self.policy
    }

    fn boards(&self) -> &[Board] {
        element_boards()
    }

    fn readings(&self, input: &Measurements) -> Vec<Reading> {
        input
            .iter()
            .map(|(key, &value)| match Element::from_key(key) {
                None => Reading::skipped(key.as_str(), WarningKind::UnknownBiomarker),
                Some(element) => match ensure_finite(key, value) {
                    Ok(value) => Reading::value(key.as_str(), element.key(), value),
                    Err(_) => Reading::skipped(key.as_str(), WarningKind::MalformedMeasurement),
                },
            })
            .collect()
    }
}
