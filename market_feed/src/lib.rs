//! Candle retrieval for the signal scanner.
//!
//! This crate isolates everything exchange-facing: the canonical OHLCV
//! models, the [`CandleSource`](providers::CandleSource) trait that the
//! signal engine consumes, and the Binance public-REST implementation of
//! that trait. Nothing in here knows about alerts, cooldowns, or log
//! formats.

pub mod models;
pub mod providers;
