// =============================================================================
// Aurora Quant — Indicator Engine & Crossover Strategy
// =============================================================================
//
// The numerical core of the Aurora stack: batch technical indicators over
// price series plus a stateful dual moving-average crossover strategy for
// live tick streams.
//
// Two layers, leaves-first:
//   - `indicators` — pure, stateless functions over `&[f64]`. Malformed
//     input (bad period, non-finite elements) yields an empty result, never
//     a panic or an error: bad data is a normal condition in a pipeline.
//   - `strategy`   — `DualMaStrategy`, one mutable instance per
//     (symbol, fast, slow) triple. Consumes one tick at a time, keeps a
//     bounded price window, emits Buy / Sell / Hold.
//
// Nothing here blocks, suspends, or touches the network. The indicator
// functions are safe to call from any number of threads; a strategy
// instance owns private mutable state and callers must serialize access
// to it (one instance per worker per symbol is the intended pattern).
// =============================================================================

pub mod indicators;
pub mod strategy;
pub mod types;

pub use strategy::DualMaStrategy;
pub use types::{Candle, Signal, Tick};
