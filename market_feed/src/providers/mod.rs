//! Provider abstraction for candle data.
//!
//! [`CandleSource`] is the seam between the signal engine and any market
//! data venue. It is async and dyn-capable so the engine can hold a
//! `Box<dyn CandleSource>` and tests can substitute a scripted source.

pub mod binance;
pub mod errors;

use async_trait::async_trait;

use crate::models::{candle::CandleSeries, timeframe::Timeframe};
use errors::ProviderError;

/// A read-only source of candle windows and symbol listings.
#[async_trait]
pub trait CandleSource {
    /// Fetches the most recent `limit` candles for one (symbol, timeframe)
    /// pair, oldest first.
    async fn fetch_window(
        &self,
        symbol: &str,
        timeframe: Timeframe,
        limit: usize,
    ) -> Result<CandleSeries, ProviderError>;

    /// Lists actively trading symbols quoted in `quote` (e.g. "USDT"),
    /// in slash form.
    async fn list_symbols(&self, quote: &str) -> Result<Vec<String>, ProviderError>;
}
