//! Derived views: ticker strip, signals table, profit history, and
//! per-pair frequency counts.

use chrono::{DateTime, Utc};
use signal_log::AlertRecord;

use signal_log::render::TIME_FORMAT;

/// One-line strip of the most recent signals (up to `limit`, oldest of
/// them first), `|`-separated.
pub fn ticker_strip(records: &[AlertRecord], limit: usize) -> String {
    let start = records.len().saturating_sub(limit);
    records[start..]
        .iter()
        .map(|r| {
            format!(
                "{} [{}]: Buy {:.4} | TP: {:.4} | SL: {:.4}",
                r.symbol, r.timeframe, r.buy_price, r.take_profit, r.stop_loss
            )
        })
        .collect::<Vec<_>>()
        .join("  |  ")
}

/// The full signals table, one row per record in log order.
pub fn signals_table(records: &[AlertRecord]) -> String {
    let mut rows: Vec<[String; 8]> = Vec::with_capacity(records.len() + 1);
    rows.push([
        "Time".into(),
        "Pair / Timeframe".into(),
        "Price".into(),
        "ATR".into(),
        "Buy Price".into(),
        "Take Profit".into(),
        "Stop Loss".into(),
        "Profit %".into(),
    ]);
    for r in records {
        rows.push([
            r.time.format(TIME_FORMAT).to_string(),
            format!("{} [{}]", r.symbol, r.timeframe),
            format!("{:.4}", r.price),
            format!("{:.4}", r.atr),
            format!("{:.4}", r.buy_price),
            format!("{:.4}", r.take_profit),
            format!("{:.4}", r.stop_loss),
            format!("{:.2}", r.expected_profit_pct),
        ]);
    }
    render_columns(&rows)
}

/// (time, expected profit %) per record, for the profit-over-time view.
pub fn profit_history(records: &[AlertRecord]) -> Vec<(DateTime<Utc>, f64)> {
    records
        .iter()
        .map(|r| (r.time, r.expected_profit_pct))
        .collect()
}

/// Alert counts per `symbol [timeframe]` key, most frequent first; ties
/// keep first-seen order.
pub fn frequency(records: &[AlertRecord]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for r in records {
        let key = format!("{} [{}]", r.symbol, r.timeframe);
        match counts.iter_mut().find(|(k, _)| *k == key) {
            Some((_, n)) => *n += 1,
            None => counts.push((key, 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// The frequency counts as a textual bar chart.
pub fn frequency_chart(records: &[AlertRecord]) -> String {
    let counts = frequency(records);
    let widest = counts.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
    counts
        .iter()
        .map(|(key, n)| format!("{key:<widest$}  {bar} {n}", bar = "#".repeat(*n)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pads each column to its widest cell, two spaces between columns.
fn render_columns<const N: usize>(rows: &[[String; N]]) -> String {
    let mut widths = [0usize; N];
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.len());
        }
    }
    rows.iter()
        .map(|row| {
            row.iter()
                .zip(widths)
                .map(|(cell, w)| format!("{cell:<w$}"))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn record(symbol: &str, tf: &str, hour: u32, profit: f64) -> AlertRecord {
        AlertRecord {
            time: Utc.with_ymd_and_hms(2025, 3, 4, hour, 0, 0).unwrap(),
            symbol: symbol.into(),
            timeframe: tf.into(),
            price: 100.0,
            atr: 4.0,
            buy_price: 98.0,
            take_profit: 104.0,
            stop_loss: 96.0,
            expected_profit_pct: profit,
        }
    }

    #[test]
    fn ticker_strip_keeps_only_the_latest() {
        let records: Vec<AlertRecord> = (0..15)
            .map(|i| record(&format!("S{i}/USDT"), "15m", i % 24, 1.0))
            .collect();
        let strip = ticker_strip(&records, 10);
        assert!(!strip.contains("S4/USDT"));
        assert!(strip.contains("S5/USDT"));
        assert!(strip.contains("S14/USDT"));
    }

    #[test]
    fn ticker_strip_of_nothing_is_empty() {
        assert_eq!(ticker_strip(&[], 10), "");
    }

    #[test]
    fn table_has_header_and_one_row_per_record() {
        let records = vec![
            record("BTC/USDT", "15m", 10, 6.12),
            record("ETH/USDT", "1h", 11, 1.5),
        ];
        let table = signals_table(&records);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Time"));
        assert!(lines[1].contains("BTC/USDT [15m]"));
        assert!(lines[2].contains("ETH/USDT [1h]"));
        assert!(lines[1].contains("6.12"));
    }

    #[test]
    fn profit_history_preserves_log_order() {
        let records = vec![
            record("BTC/USDT", "15m", 10, 6.12),
            record("BTC/USDT", "15m", 11, 2.0),
        ];
        let history = profit_history(&records);
        assert_eq!(history.len(), 2);
        assert!(history[0].0 < history[1].0);
        assert_eq!(history[1].1, 2.0);
    }

    #[test]
    fn frequency_sorts_by_count_descending() {
        let records = vec![
            record("BTC/USDT", "15m", 10, 1.0),
            record("ETH/USDT", "1h", 11, 1.0),
            record("BTC/USDT", "15m", 12, 1.0),
        ];
        let counts = frequency(&records);
        assert_eq!(
            counts,
            vec![
                ("BTC/USDT [15m]".to_string(), 2),
                ("ETH/USDT [1h]".to_string(), 1),
            ]
        );
    }

    #[test]
    fn frequency_chart_bars_match_counts() {
        let records = vec![
            record("BTC/USDT", "15m", 10, 1.0),
            record("BTC/USDT", "15m", 12, 1.0),
        ];
        let chart = frequency_chart(&records);
        assert!(chart.contains("## 2"));
    }
}
