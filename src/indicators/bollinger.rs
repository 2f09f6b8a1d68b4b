// =============================================================================
// Bollinger Bands
// =============================================================================
//
// Middle band = SMA, upper/lower = middle +/- k * rolling population stddev.
// All three series come out of one sliding pass over Sum(x) / Sum(x^2); the
// middle band and the window stddev share the same accumulators rather than
// making separate SMA and rolling-stddev passes over the input.

use crate::indicators::stddev::window_std;
use crate::indicators::valid_window_input;

/// Result of a Bollinger Band calculation: three parallel series of equal
/// length `data.len() - period + 1`, positionally aligned.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BollingerBands {
    pub upper: Vec<f64>,
    pub middle: Vec<f64>,
    pub lower: Vec<f64>,
}

impl BollingerBands {
    /// True when the input was rejected and no bands were produced.
    pub fn is_empty(&self) -> bool {
        self.middle.is_empty()
    }
}

/// Compute Bollinger Bands for `data` with the given `period` and stddev
/// `multiplier` (2.0 is the conventional choice).
///
/// # Edge cases
/// - `period == 0` or `period > data.len()` => all three series empty
/// - any non-finite element anywhere in `data` => all three series empty
/// - negative or non-finite `multiplier` => all three series empty
pub fn bollinger_bands(data: &[f64], period: usize, multiplier: f64) -> BollingerBands {
    if !multiplier.is_finite() || multiplier < 0.0 || !valid_window_input(data, period) {
        return BollingerBands::default();
    }

    let period_f = period as f64;
    let out_len = data.len() - period + 1;
    let mut bands = BollingerBands {
        upper: Vec::with_capacity(out_len),
        middle: Vec::with_capacity(out_len),
        lower: Vec::with_capacity(out_len),
    };

    let mut sum: f64 = data[..period].iter().sum();
    let mut sum_sq: f64 = data[..period].iter().map(|x| x * x).sum();
    push_window(&mut bands, sum, sum_sq, period_f, multiplier);

    for i in period..data.len() {
        let leaving = data[i - period];
        let entering = data[i];
        sum += entering - leaving;
        sum_sq += entering * entering - leaving * leaving;
        push_window(&mut bands, sum, sum_sq, period_f, multiplier);
    }

    bands
}

fn push_window(bands: &mut BollingerBands, sum: f64, sum_sq: f64, period_f: f64, multiplier: f64) {
    let middle = sum / period_f;
    let band_width = multiplier * window_std(sum, sum_sq, period_f);
    bands.upper.push(middle + band_width);
    bands.middle.push(middle);
    bands.lower.push(middle - band_width);
}
