//! Linear interpolation of a measured value inside one board

use shared::Board;

/// Map `value` onto the board's age interval.
///
/// The value is clamped into the board's value interval first, so the
/// result never leaves `[min_age, max_age]`. A degenerate board (equal
/// bounds) maps everything to `min_age`. No rounding happens here.
pub fn interpolate(board: &Board, value: f64) -> f64 {
    let (low, high) = board.value_bounds();
    let clamped = value.clamp(low, high);

    let width = high - low;
    let mut proportion = if width == 0.0 {
        0.0
    } else {
        (clamped - low) / width
    };

    if board.inverse && width != 0.0 {
        proportion = 1.0 - proportion;
    }

    board.range.min_age + proportion * board.range.span()
}

/// Round half away from zero to `decimals` places
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
