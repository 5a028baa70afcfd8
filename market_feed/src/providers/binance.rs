//! Binance public-REST candle source.
//!
//! Uses only unauthenticated market-data endpoints (`/api/v3/klines` and
//! `/api/v3/exchangeInfo`), so no API keys are involved anywhere. Symbols
//! are handled in canonical slash form ("BTC/USDT") at the boundary and
//! collapsed to the venue's concatenated form ("BTCUSDT") on the wire.

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use reqwest::Client;
use serde::Deserialize;

use crate::{
    models::{
        candle::{Candle, CandleSeries},
        timeframe::Timeframe,
    },
    providers::{CandleSource, errors::ProviderError},
};

const BASE_URL: &str = "https://api.binance.com";

/// Candle source backed by the Binance spot public API.
pub struct BinanceProvider {
    client: Client,
    base_url: String,
}

/// One kline row as Binance serializes it: a fixed 12-element array with
/// prices and volumes as decimal strings. Only the OHLCV head is read;
/// the tail must still be declared so the tuple arity matches the payload.
#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct RawKline(
    i64,    // open time (ms)
    String, // open
    String, // high
    String, // low
    String, // close
    String, // volume
    i64,    // close time (ms)
    String, // quote asset volume
    i64,    // number of trades
    String, // taker buy base volume
    String, // taker buy quote volume
    String, // unused
);

#[derive(Debug, Deserialize)]
struct ExchangeInfo {
    symbols: Vec<SymbolInfo>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SymbolInfo {
    status: String,
    base_asset: String,
    quote_asset: String,
}

impl BinanceProvider {
    /// Creates a provider against the production Binance endpoint.
    pub fn new() -> Result<Self, ProviderError> {
        Ok(Self {
            client: Client::builder().build()?,
            base_url: BASE_URL.to_string(),
        })
    }

    /// Creates a provider against an alternate base URL (mock servers in
    /// tests, regional mirrors).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ProviderError> {
        Ok(Self {
            client: Client::builder().build()?,
            base_url: base_url.into(),
        })
    }
}

/// Collapses "BTC/USDT" into the venue's "BTCUSDT" form.
fn wire_symbol(symbol: &str) -> String {
    symbol.replace('/', "")
}

fn parse_price(field: &str, value: &str) -> Result<f64, ProviderError> {
    value
        .parse::<f64>()
        .map_err(|_| ProviderError::Decode(format!("bad {field} value: {value:?}")))
}

fn parse_timestamp(ms: i64) -> Result<DateTime<Utc>, ProviderError> {
    Utc.timestamp_millis_opt(ms)
        .single()
        .ok_or_else(|| ProviderError::Decode(format!("bad kline timestamp: {ms}")))
}

/// Maps raw kline rows onto a validated [`CandleSeries`].
fn klines_to_series(
    symbol: &str,
    timeframe: Timeframe,
    rows: Vec<RawKline>,
) -> Result<CandleSeries, ProviderError> {
    let mut candles = Vec::with_capacity(rows.len());
    for row in rows {
        candles.push(Candle {
            timestamp: parse_timestamp(row.0)?,
            open: parse_price("open", &row.1)?,
            high: parse_price("high", &row.2)?,
            low: parse_price("low", &row.3)?,
            close: parse_price("close", &row.4)?,
            volume: parse_price("volume", &row.5)?,
        });
    }

    let series = CandleSeries {
        symbol: symbol.to_string(),
        timeframe,
        candles,
    };
    if !series.is_monotonic() {
        return Err(ProviderError::Decode(format!(
            "kline window for {symbol} is not strictly increasing in time"
        )));
    }
    Ok(series)
}

#[async_trait]
impl CandleSource for BinanceProvider {
    async fn fetch_window(
        &self,
        symbol: &str,
        timeframe: Timeframe,
        limit: usize,
    ) -> Result<CandleSeries, ProviderError> {
        if limit == 0 {
            return Err(ProviderError::Validation("limit must be positive".into()));
        }

        let url = format!("{}/api/v3/klines", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("symbol", wire_symbol(symbol)),
                ("interval", timeframe.as_str().to_string()),
                ("limit", limit.to_string()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let error_msg = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown API error".to_string());
            return Err(ProviderError::Api(error_msg));
        }

        let rows = response.json::<Vec<RawKline>>().await?;
        klines_to_series(symbol, timeframe, rows)
    }

    async fn list_symbols(&self, quote: &str) -> Result<Vec<String>, ProviderError> {
        let url = format!("{}/api/v3/exchangeInfo", self.base_url);
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            let error_msg = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown API error".to_string());
            return Err(ProviderError::Api(error_msg));
        }

        let info = response.json::<ExchangeInfo>().await?;
        Ok(info
            .symbols
            .into_iter()
            .filter(|s| s.status == "TRADING" && s.quote_asset == quote)
            .map(|s| format!("{}/{}", s.base_asset, s.quote_asset))
            .collect())
    }
}
