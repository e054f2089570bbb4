//! Test fixtures and reference boards for engine tests
//!
//! Every table uses fourteen seven-year bands starting at age 21, the last
//! band ending at 120.

#![allow(dead_code)]

use engine::{BiochemistryMarker, BiophysicsMarker};
use shared::{AgeRange, BiophysicsInputs, Board, Dimensions, Measurements, Sex};

/// Standard test data and fixtures
pub struct TestFixtures;

impl TestFixtures {
    pub const BAND_COUNT: u32 = 14;
    pub const YOUNGEST_AGE: f64 = 21.0;
    pub const OLDEST_AGE: f64 = 120.0;

    /// Subject of the reference biophysics scenario
    pub const SCENARIO_AGE: f64 = 73.0;
    pub const SCENARIO_FAT: f64 = 34.5;

    pub fn band_range(i: u32) -> AgeRange {
        let min_age = Self::YOUNGEST_AGE + 7.0 * i as f64;
        let max_age = if i + 1 == Self::BAND_COUNT {
            Self::OLDEST_AGE
        } else {
            min_age + 7.0
        };
        AgeRange::new(i + 1, min_age, max_age)
    }

    /// Ascending boards: band `i` covers [start + step·i, start + step·(i+1)]
    pub fn banded(name: &str, start: f64, step: f64) -> Vec<Board> {
        (0..Self::BAND_COUNT)
            .map(|i| {
                let low = start + step * i as f64;
                Board::new(name, low, low + step, Self::band_range(i))
            })
            .collect()
    }

    /// Inverse boards: band 0 holds the highest values
    pub fn banded_inverse(name: &str, start: f64, step: f64) -> Vec<Board> {
        (0..Self::BAND_COUNT)
            .map(|i| {
                let high = start - step * i as f64;
                Board::new(name, high - step, high, Self::band_range(i)).inverted()
            })
            .collect()
    }

    /// Boards for every biophysics slot and all four fat tables
    pub fn biophysics_boards() -> Vec<Board> {
        let mut boards = Self::banded("female_fat", 20.0, 3.0);
        boards.extend(Self::banded("male_fat", 10.0, 3.0));
        boards.extend(Self::banded("sporty_female_fat", 14.0, 3.0));
        boards.extend(Self::banded("sporty_male_fat", 5.0, 3.0));
        boards.extend(Self::banded("body_mass_index", 18.0, 3.0));

        for marker in BiophysicsMarker::ALL {
            if matches!(
                marker,
                BiophysicsMarker::FatPercentage | BiophysicsMarker::BodyMassIndex
            ) {
                continue;
            }
            boards.extend(Self::banded(marker.key(), 10.0, 3.0));
        }
        boards
    }

    /// Boards for every biochemistry marker, inverse where higher is better
    pub fn biochemistry_boards() -> Vec<Board> {
        BiochemistryMarker::ALL
            .iter()
            .flat_map(|marker| {
                if marker.thresholds().inverse {
                    Self::banded_inverse(marker.key(), 140.0, 10.0)
                } else {
                    Self::banded(marker.key(), 0.0, 10.0)
                }
            })
            .collect()
    }

    pub fn all_boards() -> Vec<Board> {
        let mut boards = Self::biophysics_boards();
        boards.extend(Self::biochemistry_boards());
        boards
    }

    /// Female, 73, fat 34.5 and BMI 34.5
    pub fn scenario_inputs() -> BiophysicsInputs {
        BiophysicsInputs {
            fat_percentage: Some(Self::SCENARIO_FAT),
            body_mass_index: Some(34.5),
            ..Default::default()
        }
    }

    pub const SCENARIO_SEX: Sex = Sex::Female;

    /// All eight biophysics slots, each mid-band for ages 35-42
    pub fn full_male_inputs() -> BiophysicsInputs {
        BiophysicsInputs {
            fat_percentage: Some(17.5),
            body_mass_index: Some(25.5),
            digital_reflexes: Some(Dimensions::new(16.5, 17.5, 18.5)),
            visual_accommodation: Some(17.5),
            static_balance: Some(Dimensions::new(17.5, 17.5, 17.5)),
            skin_hydration: Some(17.5),
            systolic_pressure: Some(17.5),
            diastolic_pressure: Some(17.5),
        }
    }

    pub fn measurements(values: &[(&str, f64)]) -> Measurements {
        values.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }
}
