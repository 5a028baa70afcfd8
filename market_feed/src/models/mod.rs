//! Canonical, vendor-agnostic market data models.

pub mod candle;
pub mod timeframe;
