// =============================================================================
// Exponential Moving Average (EMA)
// =============================================================================
//
// EMA weights recent prices more heavily than the SMA:
//   k     = 2 / (period + 1)
//   EMA_t = EMA_{t-1} + k * (price_t - EMA_{t-1})
//
// The recurrence is seeded with the SMA of the first `period` prices, so the
// output only becomes a true EMA from index `period - 1` onward.

use crate::indicators::valid_window_input;

/// Compute the EMA series for `data` and the given `period`.
///
/// The result has one entry per input element.  Positions `0..period-1` are
/// warm-up values (the cumulative mean of the prefix, so position
/// `period - 1` is exactly the SMA seed); from `period` onward the standard
/// recurrence applies.  Callers should treat the first `period - 1` entries
/// as not independently meaningful.
///
/// # Edge cases
/// - `period == 0` or `period > data.len()` => empty vec
/// - any non-finite element anywhere in `data` => empty vec
pub fn calculate_ema(data: &[f64], period: usize) -> Vec<f64> {
    if !valid_window_input(data, period) {
        return Vec::new();
    }

    let multiplier = 2.0 / (period + 1) as f64;
    let mut result = Vec::with_capacity(data.len());

    // Warm-up: running mean of the prefix, landing on the SMA seed.
    let mut sum = 0.0;
    for (i, &price) in data[..period].iter().enumerate() {
        sum += price;
        result.push(sum / (i + 1) as f64);
    }

    let mut ema = sum / period as f64;
    for &price in &data[period..] {
        ema += multiplier * (price - ema);
        result.push(ema);
    }

    result
}
