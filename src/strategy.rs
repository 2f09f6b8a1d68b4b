// =============================================================================
// Dual Moving-Average Crossover Strategy
// =============================================================================
//
// Classic crossover state machine: a fast and a slow moving average over the
// same price stream, BUY when the fast line crosses above the slow line
// (golden cross), SELL when it crosses below (death cross), HOLD otherwise.
//
// One instance per (symbol, fast_period, slow_period) triple.  The instance
// owns a bounded price window of exactly `slow_period` entries and is NOT
// safe for concurrent mutation; callers serialize access (one instance per
// worker per symbol is the intended pattern).
//
// Lifecycle: the strategy starts in warm-up and emits HOLD until the window
// fills.  The first full-window computation also emits HOLD -- there is no
// prior fast/slow position to compare against -- and every later tick is
// classified against the *previous* pair of averages.

use std::collections::VecDeque;

use tracing::debug;

use crate::types::{Signal, Tick};

pub struct DualMaStrategy {
    symbol: String,
    fast_period: usize,
    slow_period: usize,
    /// Most recent `slow_period` prices, oldest first.
    prices: VecDeque<f64>,
    fast_ma: f64,
    slow_ma: f64,
    /// Whether `fast_ma` / `slow_ma` hold a real prior computation.  An
    /// explicit flag, not a zero sentinel: a legitimate average of exactly
    /// 0.0 must not be mistaken for "no history".
    has_prior: bool,
}

impl DualMaStrategy {
    /// Create a strategy for `symbol` with the given look-back periods.
    ///
    /// The periods are taken as-is: `fast_period >= slow_period` is accepted
    /// and simply degenerates toward constant HOLD (the fast window can
    /// never cross a window it contains).
    pub fn new(symbol: impl Into<String>, fast_period: usize, slow_period: usize) -> Self {
        Self {
            symbol: symbol.into(),
            fast_period,
            slow_period,
            prices: VecDeque::with_capacity(slow_period + 1),
            fast_ma: 0.0,
            slow_ma: 0.0,
            has_prior: false,
        }
    }

    /// Feed one tick through the state machine and return the signal.
    ///
    /// Ticks for other symbols are filtered, not errored: they return HOLD
    /// and leave the window and averages untouched.
    pub fn on_tick(&mut self, tick: &Tick) -> Signal {
        if tick.symbol != self.symbol {
            return Signal::Hold;
        }

        self.prices.push_back(tick.price);
        if self.prices.len() > self.slow_period {
            self.prices.pop_front();
        }

        // Warm-up: not enough history for the slow line yet.
        if self.prices.len() < self.slow_period {
            return Signal::Hold;
        }

        let new_fast = self.tail_mean(self.fast_period);
        let new_slow = self.tail_mean(self.slow_period);

        let signal = if !self.has_prior {
            // First full-window computation: no prior position to cross from.
            Signal::Hold
        } else if self.fast_ma <= self.slow_ma && new_fast > new_slow {
            debug!(
                symbol = %self.symbol,
                fast = new_fast,
                slow = new_slow,
                "Golden cross"
            );
            Signal::Buy
        } else if self.fast_ma >= self.slow_ma && new_fast < new_slow {
            debug!(
                symbol = %self.symbol,
                fast = new_fast,
                slow = new_slow,
                "Death cross"
            );
            Signal::Sell
        } else {
            Signal::Hold
        };

        self.fast_ma = new_fast;
        self.slow_ma = new_slow;
        self.has_prior = true;

        signal
    }

    /// Run a tick series through [`on_tick`](Self::on_tick) in order and
    /// collect the positionally aligned signals.  Pure sequential replay:
    /// no look-ahead, no reordering.
    pub fn backtest(&mut self, ticks: &[Tick]) -> Vec<Signal> {
        ticks.iter().map(|tick| self.on_tick(tick)).collect()
    }

    /// Mean of the most recent `period` buffered prices.
    ///
    /// Recomputed from the window on every tick rather than maintained
    /// incrementally; O(period) per call, which is fine at these window
    /// sizes.
    fn tail_mean(&self, period: usize) -> f64 {
        if period == 0 || self.prices.len() < period {
            return 0.0;
        }
        let sum: f64 = self.prices.iter().rev().take(period).sum();
        sum / period as f64
    }

    pub fn fast_ma(&self) -> f64 {
        self.fast_ma
    }

    pub fn slow_ma(&self) -> f64 {
        self.slow_ma
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn fast_period(&self) -> usize {
        self.fast_period
    }

    pub fn slow_period(&self) -> usize {
        self.slow_period
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticks_for(symbol: &str, prices: &[f64]) -> Vec<Tick> {
        let base_time = 1_640_000_000_000_i64;
        prices
            .iter()
            .enumerate()
            .map(|(i, &p)| Tick::new(symbol, p, 1.0, base_time + i as i64 * 60_000))
            .collect()
    }

    #[test]
    fn crossover_scenario_fixed_sequence() {
        // fast=2, slow=3 over [1,1,1,5,5,1], derived by hand:
        //   t1,t2      warm-up                        -> HOLD, HOLD
        //   t3         first averages (1.0, 1.0)      -> HOLD (no prior)
        //   t4         fast 3.0 > slow 7/3, prior 1<=1 -> BUY
        //   t5         fast stays above slow           -> HOLD
        //   t6         fast 3.0 < slow 11/3, prior >=  -> SELL
        let mut strategy = DualMaStrategy::new("X", 2, 3);
        let signals = strategy.backtest(&ticks_for("X", &[1.0, 1.0, 1.0, 5.0, 5.0, 1.0]));
        assert_eq!(
            signals,
            vec![
                Signal::Hold,
                Signal::Hold,
                Signal::Hold,
                Signal::Buy,
                Signal::Hold,
                Signal::Sell,
            ]
        );
    }

    #[test]
    fn warm_up_emits_hold_without_averages() {
        let mut strategy = DualMaStrategy::new("BTCUSDT", 2, 4);
        for tick in ticks_for("BTCUSDT", &[10.0, 11.0, 12.0]) {
            assert_eq!(strategy.on_tick(&tick), Signal::Hold);
        }
        // Still warming up: no averages stored yet.
        assert_eq!(strategy.fast_ma(), 0.0);
        assert_eq!(strategy.slow_ma(), 0.0);
    }

    #[test]
    fn foreign_symbol_leaves_state_untouched() {
        let mut strategy = DualMaStrategy::new("BTCUSDT", 2, 3);
        strategy.backtest(&ticks_for("BTCUSDT", &[1.0, 2.0, 3.0]));
        let (fast, slow) = (strategy.fast_ma(), strategy.slow_ma());

        // A burst of ticks for another instrument is filtered out entirely.
        for tick in ticks_for("ETHUSDT", &[900.0, 901.0, 902.0, 903.0]) {
            assert_eq!(strategy.on_tick(&tick), Signal::Hold);
        }
        assert_eq!(strategy.fast_ma(), fast);
        assert_eq!(strategy.slow_ma(), slow);

        // The next matching tick behaves as if the foreign burst never
        // happened: window is [2,3,4], fast (3+4)/2 = 3.5, slow 3.0.
        let tick = Tick::new("BTCUSDT", 4.0, 1.0, 1_640_000_360_000);
        strategy.on_tick(&tick);
        assert!((strategy.fast_ma() - 3.5).abs() < 1e-10);
        assert!((strategy.slow_ma() - 3.0).abs() < 1e-10);
    }

    #[test]
    fn zero_average_is_not_mistaken_for_missing_history() {
        // Symmetric prices make legitimately zero averages possible; a
        // zero-valued prior must still count as real history.
        let mut strategy = DualMaStrategy::new("X", 2, 3);
        let signals = strategy.backtest(&ticks_for("X", &[-1.0, 1.0, 0.0, 5.0]));
        // After [-1,1,0]: first computation, fast 0.5 / slow 0.0 -> HOLD.
        assert_eq!(signals[2], Signal::Hold);
        // After [1,0,5]: fast 2.5, slow 2.0 -> fast stays above, no cross.
        assert_eq!(signals[3], Signal::Hold);

        // Flat-at-zero prior, then a rise: prior fast == slow == 0.0 must be
        // treated as a real position, producing a golden cross.
        let mut flat = DualMaStrategy::new("X", 2, 3);
        let signals = flat.backtest(&ticks_for("X", &[0.0, 0.0, 0.0, 0.0, 4.0]));
        assert_eq!(signals[3], Signal::Hold); // second computation, still flat
        assert_eq!(signals[4], Signal::Buy);
    }

    #[test]
    fn accessors_report_configuration() {
        let strategy = DualMaStrategy::new("SOLUSDT", 5, 20);
        assert_eq!(strategy.symbol(), "SOLUSDT");
        assert_eq!(strategy.fast_period(), 5);
        assert_eq!(strategy.slow_period(), 20);
    }

    #[test]
    fn fall_rise_fall_produces_buy_then_sell() {
        // 5/20 dual-MA over a slide, a recovery, then another slide.  The
        // fast line starts below the slow line, crosses above it on the
        // recovery (BUY) and back below on the second slide (SELL).
        let mut prices: Vec<f64> = (0..22).map(|i| 150.0 - i as f64).collect();
        prices.extend((1..=15).map(|i| 129.0 + 2.0 * i as f64));
        prices.extend((1..=15).map(|i| 159.0 - 3.0 * i as f64));

        let mut strategy = DualMaStrategy::new("BTCUSDT", 5, 20);
        let signals = strategy.backtest(&ticks_for("BTCUSDT", &prices));

        let buys = signals.iter().filter(|s| **s == Signal::Buy).count();
        let sells = signals.iter().filter(|s| **s == Signal::Sell).count();
        assert!(buys >= 1);
        assert!(sells >= 1);
        // First BUY comes before the first SELL.
        let first_buy = signals.iter().position(|s| *s == Signal::Buy).unwrap();
        let first_sell = signals.iter().position(|s| *s == Signal::Sell).unwrap();
        assert!(first_buy < first_sell);
        // No signal can fire before the slow window has filled plus one tick.
        for signal in &signals[..20] {
            assert_eq!(*signal, Signal::Hold);
        }
    }

    #[test]
    fn fast_period_not_smaller_than_slow_degenerates_to_hold() {
        // Allowed by construction; both lines coincide so nothing crosses.
        let mut strategy = DualMaStrategy::new("X", 3, 3);
        let signals = strategy.backtest(&ticks_for("X", &[1.0, 2.0, 3.0, 10.0, 0.5, 7.0]));
        assert!(signals.iter().all(|s| *s == Signal::Hold));
    }
}
