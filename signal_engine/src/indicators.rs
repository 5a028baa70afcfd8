//! The two indicators the engine needs: ATR and a volume SMA.
//!
//! Both return `None` rather than a degenerate value when the window is
//! shorter than the warm-up length; the engine treats that as "no signal",
//! not as an error.

use market_feed::models::candle::Candle;

/// True range for one candle given the previous close.
pub fn true_range(prev_close: f64, candle: &Candle) -> f64 {
    let hl = candle.high - candle.low;
    let hc = (candle.high - prev_close).abs();
    let lc = (candle.low - prev_close).abs();
    hl.max(hc).max(lc)
}

/// ATR as a simple average of the last `period` true ranges.
///
/// Needs `period + 1` candles, since each true range consumes the previous
/// close.
pub fn atr(candles: &[Candle], period: usize) -> Option<f64> {
    if period == 0 || candles.len() < period + 1 {
        return None;
    }
    let start = candles.len() - period;
    let mut sum = 0.0;
    for i in start..candles.len() {
        sum += true_range(candles[i - 1].close, &candles[i]);
    }
    Some(sum / period as f64)
}

/// Simple moving average of the last `period` volumes.
pub fn volume_sma(candles: &[Candle], period: usize) -> Option<f64> {
    if period == 0 || candles.len() < period {
        return None;
    }
    let tail = &candles[candles.len() - period..];
    Some(tail.iter().map(|c| c.volume).sum::<f64>() / period as f64)
}
