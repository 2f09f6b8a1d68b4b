// =============================================================================
// Market data value types shared across the Aurora quant core
// =============================================================================

use serde::{Deserialize, Serialize};

/// A single trade tick for one instrument.
///
/// Timestamps are Unix milliseconds and are assumed (not enforced) to be
/// non-decreasing per symbol. A tick is immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    pub symbol: String,
    pub price: f64,
    pub volume: f64,
    pub timestamp: i64,
}

impl Tick {
    pub fn new(symbol: impl Into<String>, price: f64, volume: f64, timestamp: i64) -> Self {
        Self {
            symbol: symbol.into(),
            price,
            volume,
            timestamp,
        }
    }

    /// Build a tick stamped with the current wall-clock time.
    pub fn now(symbol: impl Into<String>, price: f64, volume: f64) -> Self {
        Self::new(symbol, price, volume, chrono::Utc::now().timestamp_millis())
    }
}

/// A single OHLCV candle. Sibling shape to [`Tick`]; the core computes on
/// raw price series and enforces no open/high/low/close invariant here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub symbol: String,
    pub timestamp: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

/// Trading signal emitted by a strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Signal {
    Buy,
    Sell,
    Hold,
}

impl Default for Signal {
    fn default() -> Self {
        Self::Hold
    }
}

impl std::fmt::Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Buy => write!(f, "BUY"),
            Self::Sell => write!(f, "SELL"),
            Self::Hold => write!(f, "HOLD"),
        }
    }
}
