//! Panel calculator tests
//!
//! Each panel has its own test file. Boards are built here in the shape the
//! reference tables use: fourteen seven-year bands from age 21.


#[cfg(test)]
pub mod common {
    use shared::{AgeRange, Board};

    pub const BAND_COUNT: u32 = 14;

    /// Age interval of band `i`: [21 + 7i, 28 + 7i], the last band ending at 120
    pub fn band_range(i: u32) -> AgeRange {
        let min_age = 21.0 + 7.0 * i as f64;
        let max_age = if i + 1 == BAND_COUNT { 120.0 } else { min_age + 7.0 };
        AgeRange::new(i + 1, min_age, max_age)
    }

    /// Ascending boards: band `i` covers values [start + step·i, start + step·(i+1)]
    pub fn banded(name: &str, start: f64, step: f64) -> Vec<Board> {
        (0..BAND_COUNT)
            .map(|i| {
                let low = start + step * i as f64;
                Board::new(name, low, low + step, band_range(i))
            })
            .collect()
    }

    /// Inverse boards: the youngest band holds the highest values
    pub fn banded_inverse(name: &str, start: f64, step: f64) -> Vec<Board> {
        (0..BAND_COUNT)
            .map(|i| {
                let high = start - step * i as f64;
                Board::new(name, high - step, high, band_range(i)).inverted()
            })
            .collect()
    }
}
