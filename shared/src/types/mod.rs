//! Core types used throughout the biological age engine

use serde::{Deserialize, Serialize};
use std::fmt;

pub mod board;
pub mod measurement;

pub use board::{parse_boards, AgeRange, Board};
pub use measurement::{ensure_finite, BiophysicsInputs, Dimensions, Measurements};

/// Biological sex of the subject
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Male => write!(f, "male"),
            Sex::Female => write!(f, "female"),
        }
    }
}

impl std::str::FromStr for Sex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" | "m" => Ok(Sex::Male),
            "female" | "f" => Ok(Sex::Female),
            _ => Err(format!("Unknown sex: {s}")),
        }
    }
}

/// A named group of biomarkers evaluated together
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Panel {
    Biophysics,
    Biochemistry,
    Elemental,
}

impl Panel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Panel::Biophysics => "biophysics",
            Panel::Biochemistry => "biochemistry",
            Panel::Elemental => "elemental",
        }
    }
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
