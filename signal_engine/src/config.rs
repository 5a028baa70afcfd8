//! Engine configuration: a TOML file with defaults for every knob.
//!
//! All defaults reproduce the scanner's stock behavior (14-period ATR,
//! 20-period volume SMA, 0.5% minimum profit, 24h cooldown, 500 ms
//! per-call courtesy delay, 60 s per-cycle delay), so an empty file — or no
//! file at all — is a valid configuration.

use std::path::{Path, PathBuf};

use anyhow::Context;
use market_feed::models::timeframe::Timeframe;
use serde::Deserialize;

/// Locations of the log sinks and the cooldown registry snapshot.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SinkPaths {
    /// Main append-only text log.
    pub text_log: PathBuf,
    /// Main CSV log.
    pub csv_log: PathBuf,
    /// Watchlist-only text log.
    pub watchlist_log: PathBuf,
    /// Watchlist two-column CSV.
    pub watchlist_csv: PathBuf,
    /// Take-profit hit text log.
    pub tp_hit_log: PathBuf,
    /// Cooldown registry JSON snapshot.
    pub registry: PathBuf,
}

impl Default for SinkPaths {
    fn default() -> Self {
        Self {
            text_log: "signals_log.txt".into(),
            csv_log: "signals_log.csv".into(),
            watchlist_log: "watchlist_signals_log.txt".into(),
            watchlist_csv: "watchlist_signals_log.csv".into(),
            tp_hit_log: "tp_hit_log.txt".into(),
            registry: "last_signals.json".into(),
        }
    }
}

/// Full engine configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Explicit symbol universe (slash form). When absent, the scanner
    /// discovers actively trading USDT pairs and caps them at
    /// `max_symbols`.
    pub symbols: Option<Vec<String>>,
    /// Symbols whose alerts are additionally copied to the watchlist sinks.
    pub watchlist: Vec<String>,
    /// Timeframes scanned per symbol.
    pub timeframes: Vec<Timeframe>,
    /// ATR lookback in candles.
    pub atr_period: usize,
    /// Volume SMA lookback in candles.
    pub volume_period: usize,
    /// Volume condition: current ≥ average × threshold.
    pub volume_threshold: f64,
    /// Minimum expected profit (percent) for an alert to fire.
    pub min_profit_pct: f64,
    /// Per-key suppression window in hours.
    pub cooldown_hours: i64,
    /// Candle window size requested per fetch.
    pub candle_limit: usize,
    /// Cap on the discovered symbol universe.
    pub max_symbols: usize,
    /// Courtesy delay between evaluations, in milliseconds.
    pub per_call_delay_ms: u64,
    /// Delay between full scan cycles, in seconds.
    pub cycle_delay_secs: u64,
    /// Sink and registry locations.
    pub paths: SinkPaths,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            symbols: None,
            watchlist: vec![
                "BTC/USDT".into(),
                "ETH/USDT".into(),
                "SOL/USDT".into(),
                "XRP/USDT".into(),
            ],
            timeframes: Timeframe::all().to_vec(),
            atr_period: 14,
            volume_period: 20,
            volume_threshold: 1.0,
            min_profit_pct: 0.5,
            cooldown_hours: 24,
            candle_limit: 100,
            max_symbols: 50,
            per_call_delay_ms: 500,
            cycle_delay_secs: 60,
            paths: SinkPaths::default(),
        }
    }
}

impl EngineConfig {
    /// Parses a configuration from a TOML string.
    pub fn load_str(text: &str) -> anyhow::Result<Self> {
        toml::from_str(text).context("failed to parse engine config TOML")
    }

    /// Reads and parses a configuration file from disk.
    pub fn load_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("read config file {}", path.as_ref().display()))?;
        Self::load_str(&text)
    }

    /// The suppression window as a chrono duration.
    pub fn cooldown(&self) -> chrono::Duration {
        chrono::Duration::hours(self.cooldown_hours)
    }
}
