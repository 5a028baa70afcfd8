//! The core evaluation: one (symbol, timeframe) pair in, at most one alert
//! out.

use chrono::Utc;
use market_feed::{
    models::timeframe::Timeframe,
    providers::{CandleSource, errors::ProviderError},
};
use signal_log::{AlertRecord, TpHitEvent};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{
    band::TradeBand,
    config::EngineConfig,
    cooldown::{CooldownRegistry, RegistryError},
    indicators,
    sinks::{SignalSinks, SinkError},
};

/// Unrecoverable evaluation failures. Fetch and compute problems are *not*
/// here: those fail soft per pair. Only persistence failures propagate,
/// because a sink that stops accepting appends must halt the operator-facing
/// process rather than silently drop records.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A log sink refused the append.
    #[error(transparent)]
    Sink(#[from] SinkError),

    /// The cooldown registry snapshot could not be persisted.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// What one evaluation decided about the alert condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// Conditions met and outside the cooldown window: an alert was
    /// persisted and the registry updated.
    Fired,
    /// Conditions met but a prior alert is still cooling down; nothing was
    /// written and the registry is untouched.
    Suppressed,
    /// Volume or profit threshold not met.
    ConditionsNotMet,
    /// Window too short for the indicators (warm-up), or empty.
    InsufficientData,
    /// The candle source failed; logged and skipped.
    FetchFailed,
}

/// Result of one evaluation. `tp_hit` is tracked independently of the
/// alert decision: the take-profit check is stateless and runs on every
/// evaluation that produced a band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    /// The alert decision.
    pub signal: Signal,
    /// Whether a take-profit hit event was emitted this evaluation.
    pub tp_hit: bool,
}

impl Outcome {
    fn no_hit(signal: Signal) -> Self {
        Self {
            signal,
            tp_hit: false,
        }
    }
}

/// The signal engine: candle source + cooldown registry + sinks, evaluated
/// one pair at a time by a single logical writer.
pub struct SignalEngine {
    source: Box<dyn CandleSource + Send + Sync>,
    registry: CooldownRegistry,
    sinks: SignalSinks,
    config: EngineConfig,
}

impl SignalEngine {
    /// Assembles an engine from its collaborators.
    pub fn new(
        source: Box<dyn CandleSource + Send + Sync>,
        registry: CooldownRegistry,
        sinks: SignalSinks,
        config: EngineConfig,
    ) -> Self {
        Self {
            source,
            registry,
            sinks,
            config,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Resolves the symbol universe when none was configured explicitly:
    /// actively trading USDT pairs, capped at `max_symbols`.
    pub async fn discover_symbols(&self) -> Result<Vec<String>, ProviderError> {
        let mut symbols = self.source.list_symbols("USDT").await?;
        symbols.truncate(self.config.max_symbols);
        Ok(symbols)
    }

    /// Evaluates one (symbol, timeframe) pair.
    ///
    /// Fetch or indicator shortfalls log and return a no-signal outcome so
    /// the caller can continue with the next pair; only sink/registry
    /// persistence failures return `Err`.
    pub async fn evaluate(
        &mut self,
        symbol: &str,
        timeframe: Timeframe,
    ) -> Result<Outcome, EngineError> {
        let series = match self
            .source
            .fetch_window(symbol, timeframe, self.config.candle_limit)
            .await
        {
            Ok(series) => series,
            Err(e) => {
                warn!(symbol, timeframe = %timeframe, error = %e, "candle fetch failed, skipping pair");
                return Ok(Outcome::no_hit(Signal::FetchFailed));
            }
        };

        let Some(latest) = series.latest().copied() else {
            debug!(symbol, timeframe = %timeframe, "empty candle window");
            return Ok(Outcome::no_hit(Signal::InsufficientData));
        };

        let Some(atr) = indicators::atr(&series.candles, self.config.atr_period) else {
            debug!(symbol, timeframe = %timeframe, "ATR not available yet");
            return Ok(Outcome::no_hit(Signal::InsufficientData));
        };

        let band = TradeBand::derive(latest.close, atr);
        let now = Utc::now();

        // The take-profit check is intentionally stateless and compares the
        // close to the band derived from this same candle, so a hit can be
        // reported for a key that never fired an alert. That mirrors the
        // log contract; do not "fix" it here.
        let tp_hit = latest.close >= band.take_profit;
        if tp_hit {
            self.sinks.record_tp_hit(&TpHitEvent {
                time: now,
                symbol: symbol.to_string(),
                timeframe: timeframe.to_string(),
                price: latest.close,
            })?;
        }

        let avg_volume = indicators::volume_sma(&series.candles, self.config.volume_period);
        info!(
            symbol,
            timeframe = %timeframe,
            volume = latest.volume,
            avg_volume = avg_volume.unwrap_or(f64::NAN),
            profit_pct = band.expected_profit_pct,
            "evaluated pair"
        );

        let volume_ok = match avg_volume {
            Some(avg) => latest.volume >= avg * self.config.volume_threshold,
            None => false,
        };
        if !volume_ok || band.expected_profit_pct < self.config.min_profit_pct {
            return Ok(Outcome {
                signal: Signal::ConditionsNotMet,
                tp_hit,
            });
        }

        let key = CooldownRegistry::key(symbol, timeframe.as_str());
        if self.registry.suppressed(&key, now, self.config.cooldown()) {
            debug!(
                symbol,
                timeframe = %timeframe,
                last_fired = ?self.registry.last_fired(&key),
                "alert suppressed by cooldown"
            );
            return Ok(Outcome {
                signal: Signal::Suppressed,
                tp_hit,
            });
        }

        let record = AlertRecord {
            time: now,
            symbol: symbol.to_string(),
            timeframe: timeframe.to_string(),
            price: latest.close,
            atr,
            buy_price: band.buy_price,
            take_profit: band.take_profit,
            stop_loss: band.stop_loss,
            expected_profit_pct: band.expected_profit_pct,
        };
        let watchlisted = self.config.watchlist.iter().any(|s| s == symbol);
        self.sinks.record_alert(&record, watchlisted)?;
        self.registry.mark(&key, now)?;
        info!(symbol, timeframe = %timeframe, profit_pct = band.expected_profit_pct, "alert fired");

        Ok(Outcome {
            signal: Signal::Fired,
            tp_hit,
        })
    }
}
