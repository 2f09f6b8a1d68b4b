// =============================================================================
// Simple Moving Average (SMA)
// =============================================================================
//
// Arithmetic mean of each contiguous window of `period` elements, computed
// with a sliding sum: the first window is summed directly, then each step
// subtracts the element leaving the window and adds the one entering it.
// Total cost is O(n) instead of the naive O(n * period).

use crate::indicators::valid_window_input;

/// Compute the SMA series for `data` and the given look-back `period`.
///
/// The result has `data.len() - period + 1` entries; `result[i]` is the mean
/// of the window ending at input index `i + period - 1`.
///
/// # Edge cases
/// - `period == 0` or `period > data.len()` => empty vec
/// - any non-finite element anywhere in `data` => empty vec
pub fn calculate_sma(data: &[f64], period: usize) -> Vec<f64> {
    if !valid_window_input(data, period) {
        return Vec::new();
    }

    let period_f = period as f64;
    let mut result = Vec::with_capacity(data.len() - period + 1);

    let mut sum: f64 = data[..period].iter().sum();
    result.push(sum / period_f);

    for i in period..data.len() {
        sum += data[i] - data[i - period];
        result.push(sum / period_f);
    }

    result
}
