// =============================================================================
// Standard Deviation — scalar (Welford) and rolling (sliding accumulators)
// =============================================================================
//
// Both forms are *population* standard deviation (divide by n, not n-1).
//
// The scalar form uses Welford's one-pass mean/variance update rather than a
// naive sum-of-squares, which suffers catastrophic cancellation on series
// with a large mean and a small spread (e.g. prices near 1_000_000 moving by
// a few hundred).
//
// The rolling form keeps running Sum(x) and Sum(x^2) across the window and
// derives variance as Sum(x^2)/p - (Sum(x)/p)^2, clamped at zero before the
// square root to absorb round-off that can push the operand slightly
// negative on flat windows.

use crate::indicators::valid_window_input;

/// Population standard deviation of the whole series, via Welford's method.
///
/// Non-finite elements are skipped.  Returns 0.0 when the input holds fewer
/// than two finite values.
pub fn std_dev(data: &[f64]) -> f64 {
    let mut count = 0usize;
    let mut mean = 0.0;
    let mut m2 = 0.0;

    for &x in data {
        if !x.is_finite() {
            continue;
        }
        count += 1;
        let delta = x - mean;
        mean += delta / count as f64;
        m2 += delta * (x - mean);
    }

    if count < 2 {
        return 0.0;
    }
    (m2 / count as f64).sqrt()
}

/// Population standard deviation of each contiguous window of `period`
/// elements, in O(n) via sliding Sum(x) / Sum(x^2) accumulators.
///
/// The result has `data.len() - period + 1` entries, positionally aligned
/// with [`calculate_sma`](crate::indicators::calculate_sma).
///
/// # Edge cases
/// - `period == 0` or `period > data.len()` => empty vec
/// - any non-finite element anywhere in `data` => empty vec
pub fn rolling_std_dev(data: &[f64], period: usize) -> Vec<f64> {
    if !valid_window_input(data, period) {
        return Vec::new();
    }

    let period_f = period as f64;
    let mut sum: f64 = data[..period].iter().sum();
    let mut sum_sq: f64 = data[..period].iter().map(|x| x * x).sum();

    let mut result = Vec::with_capacity(data.len() - period + 1);
    result.push(window_std(sum, sum_sq, period_f));

    for i in period..data.len() {
        let leaving = data[i - period];
        let entering = data[i];
        sum += entering - leaving;
        sum_sq += entering * entering - leaving * leaving;
        result.push(window_std(sum, sum_sq, period_f));
    }

    result
}

/// Variance from window sums, clamped at zero against round-off.
pub(crate) fn window_std(sum: f64, sum_sq: f64, period_f: f64) -> f64 {
    let mean = sum / period_f;
    let variance = (sum_sq / period_f - mean * mean).max(0.0);
    variance.sqrt()
}
