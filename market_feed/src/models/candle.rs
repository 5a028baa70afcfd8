//! Canonical in-memory representation of an OHLCV candle.
//!
//! This is the standard output shape for all [`CandleSource`](crate::providers::CandleSource)
//! implementations, regardless of venue.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::timeframe::Timeframe;

/// A single OHLCV candle for one time bucket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    /// Bucket open time (UTC).
    pub timestamp: DateTime<Utc>,

    /// Opening price.
    pub open: f64,

    /// Highest price during the bucket.
    pub high: f64,

    /// Lowest price during the bucket.
    pub low: f64,

    /// Closing price.
    pub close: f64,

    /// Base-asset volume traded during the bucket.
    pub volume: f64,
}

/// An ordered window of candles for one (symbol, timeframe) pair.
///
/// Invariant: `candles` is ordered by strictly increasing timestamp, most
/// recent last. Providers must reject payloads that violate this; consumers
/// may rely on `last()` being the current candle.
#[derive(Debug, Clone, PartialEq)]
pub struct CandleSeries {
    /// Canonical symbol in slash form (e.g. "BTC/USDT").
    pub symbol: String,
    /// Bucket size for every candle in the window.
    pub timeframe: Timeframe,
    /// The candles, oldest first.
    pub candles: Vec<Candle>,
}

impl CandleSeries {
    /// The most recent candle in the window, if any.
    pub fn latest(&self) -> Option<&Candle> {
        self.candles.last()
    }

    /// Whether timestamps are strictly increasing throughout the window.
    pub fn is_monotonic(&self) -> bool {
        self.candles
            .windows(2)
            .all(|pair| pair[0].timestamp < pair[1].timestamp)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn candle(ts_secs: i64) -> Candle {
        Candle {
            timestamp: Utc.timestamp_opt(ts_secs, 0).unwrap(),
            open: 1.0,
            high: 1.0,
            low: 1.0,
            close: 1.0,
            volume: 0.0,
        }
    }

    #[test]
    fn monotonic_accepts_increasing_and_rejects_duplicates() {
        let mut series = CandleSeries {
            symbol: "BTC/USDT".into(),
            timeframe: Timeframe::Min15,
            candles: vec![candle(0), candle(900), candle(1800)],
        };
        assert!(series.is_monotonic());

        series.candles.push(candle(1800));
        assert!(!series.is_monotonic());
    }

    #[test]
    fn latest_is_the_last_candle() {
        let series = CandleSeries {
            symbol: "BTC/USDT".into(),
            timeframe: Timeframe::Min15,
            candles: vec![candle(0), candle(900)],
        };
        assert_eq!(series.latest().unwrap().timestamp, candle(900).timestamp);
    }
}
