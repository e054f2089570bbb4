//! Reference bands mapping a biomarker value interval to an age interval

use serde::{Deserialize, Serialize};

use crate::errors::{SharedError, SharedResult};

/// Age interval a board maps onto
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgeRange {
    pub id: u32,
    pub min_age: f64,
    pub max_age: f64,
}

impl AgeRange {
    pub fn new(id: u32, min_age: f64, max_age: f64) -> Self {
        Self { id, min_age, max_age }
    }

    /// Inclusive on both ends
    pub fn contains(&self, age: f64) -> bool {
        age >= self.min_age && age <= self.max_age
    }

    pub fn midpoint(&self) -> f64 {
        (self.min_age + self.max_age) / 2.0
    }

    pub fn span(&self) -> f64 {
        self.max_age - self.min_age
    }
}

/// A reference band for one biomarker.
///
/// The value interval is closed. Storage does not guarantee that
/// `min_value <= max_value`, so every comparison goes through
/// [`Board::value_bounds`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub name: String,
    pub min_value: f64,
    pub max_value: f64,
    #[serde(default)]
    pub inverse: bool,
    pub range: AgeRange,
}

impl Board {
    pub fn new(name: impl Into<String>, min_value: f64, max_value: f64, range: AgeRange) -> Self {
        Self {
            name: name.into(),
            min_value,
            max_value,
            inverse: false,
            range,
        }
    }

    /// Mark the board as inverse: higher values map to younger ages
    pub fn inverted(mut self) -> Self {
        self.inverse = true;
        self
    }

    /// Value interval as `(low, high)` irrespective of declaration order
    pub fn value_bounds(&self) -> (f64, f64) {
        if self.min_value <= self.max_value {
            (self.min_value, self.max_value)
        } else {
            (self.max_value, self.min_value)
        }
    }

    pub fn contains_value(&self, value: f64) -> bool {
        let (low, high) = self.value_bounds();
        value >= low && value <= high
    }

    pub fn contains_age(&self, age: f64) -> bool {
        self.range.contains(age)
    }

    /// Distance from `value` to the value interval, 0 when inside
    pub fn distance_to(&self, value: f64) -> f64 {
        let (low, high) = self.value_bounds();
        if value < low {
            low - value
        } else if value > high {
            value - high
        } else {
            0.0
        }
    }

    /// Reject boards carrying non-finite bounds or ages
    pub fn validate(&self) -> SharedResult<()> {
        let fields = [
            ("min_value", self.min_value),
            ("max_value", self.max_value),
            ("min_age", self.range.min_age),
            ("max_age", self.range.max_age),
        ];

        for (field, value) in fields {
            if !value.is_finite() {
                return Err(SharedError::InvalidBoard {
                    name: self.name.clone(),
                    reason: format!("{field} is not a finite number"),
                });
            }
        }

        if self.name.trim().is_empty() {
            return Err(SharedError::InvalidBoard {
                name: self.name.clone(),
                reason: "biomarker name is empty".to_string(),
            });
        }

        Ok(())
    }
}

/// Parse and validate a JSON array of boards
pub fn parse_boards(json: &str) -> SharedResult<Vec<Board>> {
    let boards: Vec<Board> =
        serde_json::from_str(json).map_err(|e| SharedError::DeserializationError {
            message: e.to_string(),
        })?;

    for board in &boards {
        board.validate()?;
    }

    Ok(boards)
}
