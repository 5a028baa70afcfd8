//! The ATR-derived entry/exit band.

/// Entry offset below the close, in ATR units. Policy constant, not tuned.
pub const BUY_ATR_MULT: f64 = 0.5;
/// Take-profit / stop-loss offset from the close, in ATR units.
pub const EXIT_ATR_MULT: f64 = 1.0;

/// Price levels derived from one close and one ATR value.
///
/// For positive ATR the intended ordering is
/// `stop_loss < buy_price < close < take_profit`; that is a correctness
/// property of the constants, checked in tests rather than validated at
/// runtime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TradeBand {
    /// close − 0.5·ATR
    pub buy_price: f64,
    /// close + 1.0·ATR
    pub take_profit: f64,
    /// close − 1.0·ATR
    pub stop_loss: f64,
    /// (take_profit − buy_price) / buy_price × 100
    pub expected_profit_pct: f64,
}

impl TradeBand {
    /// Derives the band for the latest close.
    pub fn derive(close: f64, atr: f64) -> Self {
        let buy_price = close - atr * BUY_ATR_MULT;
        let take_profit = close + atr * EXIT_ATR_MULT;
        let stop_loss = close - atr * EXIT_ATR_MULT;
        let expected_profit_pct = (take_profit - buy_price) / buy_price * 100.0;
        Self {
            buy_price,
            take_profit,
            stop_loss,
            expected_profit_pct,
        }
    }
}
