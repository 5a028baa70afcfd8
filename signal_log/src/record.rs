use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One fired alert. Immutable once created: records are appended to the
/// sinks and never mutated or retracted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertRecord {
    /// When the alert fired (UTC).
    pub time: DateTime<Utc>,
    /// Canonical symbol in slash form (e.g. "BTC/USDT").
    pub symbol: String,
    /// Timeframe token (e.g. "15m").
    pub timeframe: String,
    /// Close price of the candle that triggered the alert.
    pub price: f64,
    /// ATR at trigger time.
    pub atr: f64,
    /// Suggested entry: close − 0.5·ATR.
    pub buy_price: f64,
    /// Target: close + 1.0·ATR.
    pub take_profit: f64,
    /// Exit floor: close − 1.0·ATR.
    pub stop_loss: f64,
    /// (take_profit − buy_price) / buy_price × 100.
    pub expected_profit_pct: f64,
}

/// Which log a block belongs to. The marker word on the opening line is the
/// only difference between the two grammars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    /// The main signal log.
    Standard,
    /// The secondary log holding only watchlisted symbols.
    Watchlist,
}

impl AlertKind {
    /// The marker word on the opening line of a block.
    pub const fn marker(self) -> &'static str {
        match self {
            AlertKind::Standard => "ALERT",
            AlertKind::Watchlist => "WATCHLIST ALERT",
        }
    }
}

/// A take-profit touch: the current close reached the take-profit level
/// derived from the same candle. Emitted statelessly, one line per event,
/// with no cooldown and no CSV counterpart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TpHitEvent {
    /// When the hit was observed (UTC).
    pub time: DateTime<Utc>,
    /// Canonical symbol in slash form.
    pub symbol: String,
    /// Timeframe token.
    pub timeframe: String,
    /// The close price that reached the level.
    pub price: f64,
}
