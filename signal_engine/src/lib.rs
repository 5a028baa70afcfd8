//! Volatility signal engine.
//!
//! For each (symbol, timeframe) pair the engine pulls a bounded candle
//! window, computes an ATR-derived trade band, checks the volume and
//! profit conditions, and — subject to a per-key cooldown — appends a
//! structured alert to the log sinks. A scan loop drives the evaluations
//! sequentially with fixed courtesy delays between calls.
//!
//! Design rules inherited from the log contract:
//! - fetch/compute failures for one pair never halt the scan of others;
//! - sink and registry persistence failures do propagate (append-only logs
//!   must not be silently incomplete);
//! - alerts are rendered as full blocks before a single write, so a reader
//!   never observes a partial record from a completed write.

pub mod band;
pub mod config;
pub mod cooldown;
pub mod engine;
pub mod indicators;
pub mod scanner;
pub mod sinks;
