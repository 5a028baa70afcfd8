//! The outer scan loop.
//!
//! Sequentially evaluates every (symbol, timeframe) combination, sleeping
//! a fixed per-call delay between evaluations as a courtesy rate limit
//! toward the data source, and a longer delay between full cycles. Those
//! two delays bound both signal freshness and the external call rate, so
//! they come from config rather than being buried here.
//!
//! Shutdown: an interrupt finishes the in-flight evaluation and stops
//! before starting the next one. The interrupt is only observed at the
//! sleep points between evaluations.

use std::time::Duration;

use tracing::info;

use crate::engine::SignalEngine;

/// Runs scan cycles until interrupted, or exactly one cycle when `once`.
pub async fn run(mut engine: SignalEngine, symbols: Vec<String>, once: bool) -> anyhow::Result<()> {
    let per_call = Duration::from_millis(engine.config().per_call_delay_ms);
    let per_cycle = Duration::from_secs(engine.config().cycle_delay_secs);
    let timeframes = engine.config().timeframes.clone();

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    'outer: loop {
        for symbol in &symbols {
            for timeframe in &timeframes {
                engine.evaluate(symbol, *timeframe).await?;

                tokio::select! {
                    _ = &mut shutdown => {
                        info!("interrupt received, stopping after in-flight evaluation");
                        break 'outer;
                    }
                    _ = tokio::time::sleep(per_call) => {}
                }
            }
        }

        if once {
            break;
        }

        info!(delay_secs = per_cycle.as_secs(), "cycle complete, waiting");
        tokio::select! {
            _ = &mut shutdown => {
                info!("interrupt received, stopping");
                break;
            }
            _ = tokio::time::sleep(per_cycle) => {}
        }
    }

    Ok(())
}
