// =============================================================================
// Technical Indicators Module
// =============================================================================
//
// Pure, side-effect-free implementations of the batch indicators used by the
// quant core.  Every windowed function applies the same validation before it
// computes anything: the period must be at least 1 and no larger than the
// input, and every input element must be finite.  Invalid input yields an
// empty result rather than a panic or an error -- malformed data is a normal
// condition in a market-data pipeline, and callers check for emptiness.

pub mod bollinger;
pub mod ema;
pub mod sma;
pub mod stddev;

pub use bollinger::{bollinger_bands, BollingerBands};
pub use ema::calculate_ema;
pub use sma::calculate_sma;
pub use stddev::{rolling_std_dev, std_dev};

/// Shared pre-check for every windowed indicator.
///
/// The finiteness scan is O(n) and runs up front so that no partial result is
/// ever produced from a series containing NaN or infinity.
pub(crate) fn valid_window_input(data: &[f64], period: usize) -> bool {
    period >= 1 && period <= data.len() && data.iter().all(|x| x.is_finite())
}
