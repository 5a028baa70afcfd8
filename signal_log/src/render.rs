//! Text rendering of alert records.
//!
//! The label vocabulary and ordering here are contractual: the reverse
//! parser in [`crate::parse`] matches on these exact labels, and external
//! tooling greps the same lines. Changing a label is a format break.

use crate::record::{AlertKind, AlertRecord, TpHitEvent};

/// Timestamp layout used in every log line.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Renders one alert as its multi-line text block (no trailing newline).
pub fn render_alert(record: &AlertRecord, kind: AlertKind) -> String {
    format!(
        "[{time}] ⚡ {symbol} [{tf}] {marker}\n\
         Current Price: {price:.4}\n\
         ATR: {atr:.4}\n\
         ✅ Buy Price: {buy:.4}\n\
         🎯 Take Profit: {tp:.4}\n\
         🛑 Stop Loss: {sl:.4}\n\
         Expected Profit: {profit:.2}%\n\
         ---",
        time = record.time.format(TIME_FORMAT),
        symbol = record.symbol,
        tf = record.timeframe,
        marker = kind.marker(),
        price = record.price,
        atr = record.atr,
        buy = record.buy_price,
        tp = record.take_profit,
        sl = record.stop_loss,
        profit = record.expected_profit_pct,
    )
}

/// Renders one take-profit hit as a single line (no trailing newline).
pub fn render_tp_hit(event: &TpHitEvent) -> String {
    format!(
        "[{time}] 🎉 {symbol} [{tf}] HIT Take Profit at {price:.4} 🎯",
        time = event.time.format(TIME_FORMAT),
        symbol = event.symbol,
        tf = event.timeframe,
        price = event.price,
    )
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use chrono::Utc;

    use super::*;

    fn sample() -> AlertRecord {
        AlertRecord {
            time: Utc.with_ymd_and_hms(2025, 3, 4, 12, 30, 0).unwrap(),
            symbol: "BTC/USDT".into(),
            timeframe: "15m".into(),
            price: 100.0,
            atr: 4.0,
            buy_price: 98.0,
            take_profit: 104.0,
            stop_loss: 96.0,
            expected_profit_pct: 6.122448979591837,
        }
    }

    #[test]
    fn standard_block_layout() {
        let text = render_alert(&sample(), AlertKind::Standard);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "[2025-03-04 12:30:00] ⚡ BTC/USDT [15m] ALERT");
        assert_eq!(lines[1], "Current Price: 100.0000");
        assert_eq!(lines[2], "ATR: 4.0000");
        assert_eq!(lines[3], "✅ Buy Price: 98.0000");
        assert_eq!(lines[4], "🎯 Take Profit: 104.0000");
        assert_eq!(lines[5], "🛑 Stop Loss: 96.0000");
        assert_eq!(lines[6], "Expected Profit: 6.12%");
        assert_eq!(lines[7], "---");
    }

    #[test]
    fn watchlist_block_differs_only_in_the_marker() {
        let standard = render_alert(&sample(), AlertKind::Standard);
        let watchlist = render_alert(&sample(), AlertKind::Watchlist);
        assert!(watchlist.lines().next().unwrap().ends_with("WATCHLIST ALERT"));
        assert_eq!(
            standard.lines().skip(1).collect::<Vec<_>>(),
            watchlist.lines().skip(1).collect::<Vec<_>>(),
        );
    }

    #[test]
    fn tp_hit_line_layout() {
        let event = TpHitEvent {
            time: Utc.with_ymd_and_hms(2025, 3, 4, 12, 45, 0).unwrap(),
            symbol: "ETH/USDT".into(),
            timeframe: "1h".into(),
            price: 2501.25,
        };
        assert_eq!(
            render_tp_hit(&event),
            "[2025-03-04 12:45:00] 🎉 ETH/USDT [1h] HIT Take Profit at 2501.2500 🎯",
        );
    }
}
