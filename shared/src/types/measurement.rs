//! Measurement inputs supplied by the caller

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::errors::{SharedError, SharedResult};

/// Scalar measurements keyed by biomarker name
pub type Measurements = BTreeMap<String, f64>;

/// Accept a scalar reading only when it is a finite number
pub fn ensure_finite(key: &str, value: f64) -> SharedResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SharedError::InvalidMeasurement {
            key: key.to_string(),
            reason: format!("{value} is not a finite number"),
        })
    }
}

/// A dimensional measurement captured as three sub-readings
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub high: Option<f64>,
    pub long: Option<f64>,
    pub width: Option<f64>,
}

impl Dimensions {
    pub fn new(high: f64, long: f64, width: f64) -> Self {
        Self {
            high: Some(high),
            long: Some(long),
            width: Some(width),
        }
    }

    /// Arithmetic mean of the three axes.
    ///
    /// Returns `None` unless all three axes are present and finite.
    pub fn mean(&self) -> Option<f64> {
        let axes = [self.high?, self.long?, self.width?];
        if axes.iter().all(|v| v.is_finite()) {
            Some(axes.iter().sum::<f64>() / 3.0)
        } else {
            None
        }
    }
}

/// Inputs for the biophysics panel, every slot optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BiophysicsInputs {
    pub fat_percentage: Option<f64>,
    pub body_mass_index: Option<f64>,
    pub digital_reflexes: Option<Dimensions>,
    pub visual_accommodation: Option<f64>,
    pub static_balance: Option<Dimensions>,
    pub skin_hydration: Option<f64>,
    pub systolic_pressure: Option<f64>,
    pub diastolic_pressure: Option<f64>,
}

impl BiophysicsInputs {
    /// Number of slots carrying a value, including malformed dimensional ones
    pub fn supplied_count(&self) -> usize {
        let scalars = [
            self.fat_percentage,
            self.body_mass_index,
            self.visual_accommodation,
            self.skin_hydration,
            self.systolic_pressure,
            self.diastolic_pressure,
        ];
        let dimensional = [self.digital_reflexes, self.static_balance];

        scalars.iter().filter(|v| v.is_some()).count()
            + dimensional.iter().filter(|v| v.is_some()).count()
    }
}
