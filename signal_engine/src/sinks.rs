//! Append-only output sinks for alerts and take-profit hits.
//!
//! Every write appends one complete record: text blocks are fully rendered
//! before a single `write_all`, and CSV rows go through one writer flush.
//! Files are created on first use; the CSV header is written only when the
//! file is being created, so appends never duplicate it.

use std::{fs::OpenOptions, io::Write, path::Path};

use signal_log::{
    AlertKind, AlertRecord, TpHitEvent, render::TIME_FORMAT, render_alert, render_tp_hit,
};
use thiserror::Error;

use crate::config::SinkPaths;

/// Failures while appending to a sink.
#[derive(Debug, Error)]
pub enum SinkError {
    /// Opening or appending to a log file failed.
    #[error("sink I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Writing a CSV row failed.
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),
}

/// The set of configured sinks the engine writes to.
#[derive(Debug, Clone)]
pub struct SignalSinks {
    paths: SinkPaths,
}

const CSV_HEADER: [&str; 7] = [
    "Time",
    "Symbol",
    "Price",
    "ATR",
    "Buy Price",
    "Take Profit",
    "Stop Loss",
];

const WATCHLIST_CSV_HEADER: [&str; 2] = ["Time", "Signal"];

impl SignalSinks {
    /// Wraps the configured sink locations. Files are touched lazily on
    /// first write, not here.
    pub fn new(paths: SinkPaths) -> Self {
        Self { paths }
    }

    /// Appends a fired alert to the main text and CSV logs, and — when the
    /// symbol is watchlisted — to both watchlist sinks.
    pub fn record_alert(&self, record: &AlertRecord, watchlisted: bool) -> Result<(), SinkError> {
        append_line(&self.paths.text_log, &render_alert(record, AlertKind::Standard))?;
        self.append_csv_row(record)?;

        if watchlisted {
            let block = render_alert(record, AlertKind::Watchlist);
            append_line(&self.paths.watchlist_log, &block)?;
            self.append_watchlist_csv(record, &block)?;
        }
        Ok(())
    }

    /// Appends one take-profit hit line to its own log.
    pub fn record_tp_hit(&self, event: &TpHitEvent) -> Result<(), SinkError> {
        append_line(&self.paths.tp_hit_log, &render_tp_hit(event))
    }

    fn append_csv_row(&self, record: &AlertRecord) -> Result<(), SinkError> {
        let mut writer = open_csv(&self.paths.csv_log, &CSV_HEADER)?;
        writer.write_record([
            record.time.format(TIME_FORMAT).to_string(),
            record.symbol.clone(),
            record.price.to_string(),
            record.atr.to_string(),
            record.buy_price.to_string(),
            record.take_profit.to_string(),
            record.stop_loss.to_string(),
        ])?;
        writer.flush().map_err(SinkError::Io)
    }

    fn append_watchlist_csv(&self, record: &AlertRecord, block: &str) -> Result<(), SinkError> {
        let mut writer = open_csv(&self.paths.watchlist_csv, &WATCHLIST_CSV_HEADER)?;
        writer.write_record([
            record.time.format(TIME_FORMAT).to_string(),
            block.to_string(),
        ])?;
        writer.flush().map_err(SinkError::Io)
    }
}

/// Appends `text` plus a newline to the file at `path`, creating it if
/// needed.
fn append_line(path: &Path, text: &str) -> Result<(), SinkError> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(text.as_bytes())?;
    file.write_all(b"\n")?;
    Ok(())
}

/// Opens a CSV file for appending, emitting `header` first when the file
/// is newly created.
fn open_csv(
    path: &Path,
    header: &[&str],
) -> Result<csv::Writer<std::fs::File>, SinkError> {
    let is_new = !path.exists();
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);
    if is_new {
        writer.write_record(header)?;
    }
    Ok(writer)
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use signal_log::parse_alerts;

    use super::*;

    fn paths_in(dir: &Path) -> SinkPaths {
        SinkPaths {
            text_log: dir.join("signals_log.txt"),
            csv_log: dir.join("signals_log.csv"),
            watchlist_log: dir.join("watchlist_signals_log.txt"),
            watchlist_csv: dir.join("watchlist_signals_log.csv"),
            tp_hit_log: dir.join("tp_hit_log.txt"),
            registry: dir.join("last_signals.json"),
        }
    }

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
            expected_profit_pct: 6.12,
        }
    }

    #[test]
    fn alert_lands_in_text_and_csv_but_not_watchlist() {
        let dir = tempfile::tempdir().unwrap();
        let paths = paths_in(dir.path());
        let sinks = SignalSinks::new(paths.clone());

        sinks.record_alert(&sample(), false).unwrap();

        let text = std::fs::read_to_string(&paths.text_log).unwrap();
        assert_eq!(parse_alerts(&text, AlertKind::Standard).len(), 1);

        let csv = std::fs::read_to_string(&paths.csv_log).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Time,Symbol,Price,ATR,Buy Price,Take Profit,Stop Loss"
        );
        assert_eq!(
            lines.next().unwrap(),
            "2025-03-04 12:30:00,BTC/USDT,100,4,98,104,96"
        );

        assert!(!paths.watchlist_log.exists());
        assert!(!paths.watchlist_csv.exists());
    }

    #[test]
    fn watchlisted_alert_also_hits_both_watchlist_sinks() {
        let dir = tempfile::tempdir().unwrap();
        let paths = paths_in(dir.path());
        let sinks = SignalSinks::new(paths.clone());

        sinks.record_alert(&sample(), true).unwrap();

        let wl = std::fs::read_to_string(&paths.watchlist_log).unwrap();
        assert_eq!(parse_alerts(&wl, AlertKind::Watchlist).len(), 1);

        let csv = std::fs::read_to_string(&paths.watchlist_csv).unwrap();
        assert!(csv.starts_with("Time,Signal\n"));
        assert!(csv.contains("WATCHLIST ALERT"));
    }

    #[test]
    fn csv_header_is_written_exactly_once() {
        let dir = tempfile::tempdir().unwrap();
        let paths = paths_in(dir.path());
        let sinks = SignalSinks::new(paths.clone());

        sinks.record_alert(&sample(), false).unwrap();
        sinks.record_alert(&sample(), false).unwrap();

        let csv = std::fs::read_to_string(&paths.csv_log).unwrap();
        assert_eq!(csv.matches("Time,Symbol").count(), 1);
        assert_eq!(csv.lines().count(), 3);
    }

    #[test]
    fn tp_hits_append_one_line_each() {
        let dir = tempfile::tempdir().unwrap();
        let paths = paths_in(dir.path());
        let sinks = SignalSinks::new(paths.clone());

        let event = TpHitEvent {
            time: Utc.with_ymd_and_hms(2025, 3, 4, 12, 45, 0).unwrap(),
            symbol: "BTC/USDT".into(),
            timeframe: "15m".into(),
            price: 104.5,
        };
        sinks.record_tp_hit(&event).unwrap();
        sinks.record_tp_hit(&event).unwrap();

        let log = std::fs::read_to_string(&paths.tp_hit_log).unwrap();
        assert_eq!(log.lines().count(), 2);
        assert!(log.lines().all(|l| l.contains("HIT Take Profit")));
    }
}
