//! Reverse parser: log text back into alert records.
//!
//! A pure function over the append-only text log. A line carrying the
//! marker word opens a new record; subsequent labeled lines populate its
//! fields until the next opener. The parser is deliberately tolerant:
//! lines it does not recognize are skipped, and a record that never
//! collected all of its fields (malformed block, or a trailing block still
//! being written) is dropped silently. It is also lossy by construction —
//! only the labeled fields survive the round trip, at text precision.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::record::{AlertKind, AlertRecord};
use crate::render::TIME_FORMAT;

/// Parses every complete alert block of the given kind out of `text`,
/// in order of appearance.
pub fn parse_alerts(text: &str, kind: AlertKind) -> Vec<AlertRecord> {
    let mut records = Vec::new();
    let mut current: Option<PartialRecord> = None;

    for line in text.lines() {
        if let Some(opened) = parse_opener(line, kind) {
            if let Some(done) = current.take().and_then(PartialRecord::finish) {
                records.push(done);
            }
            current = Some(opened);
        } else if let Some(partial) = current.as_mut() {
            partial.absorb(line);
        }
    }
    if let Some(done) = current.and_then(PartialRecord::finish) {
        records.push(done);
    }
    records
}

/// A record under construction; becomes an [`AlertRecord`] only once every
/// labeled field has been seen.
struct PartialRecord {
    time: DateTime<Utc>,
    symbol: String,
    timeframe: String,
    price: Option<f64>,
    atr: Option<f64>,
    buy_price: Option<f64>,
    take_profit: Option<f64>,
    stop_loss: Option<f64>,
    expected_profit_pct: Option<f64>,
}

impl PartialRecord {
    fn absorb(&mut self, line: &str) {
        if let Some(v) = labeled_value(line, "Current Price:") {
            self.price = Some(v);
        } else if let Some(v) = labeled_value(line, "Buy Price:") {
            self.buy_price = Some(v);
        } else if let Some(v) = labeled_value(line, "Take Profit:") {
            self.take_profit = Some(v);
        } else if let Some(v) = labeled_value(line, "Stop Loss:") {
            self.stop_loss = Some(v);
        } else if let Some(v) = labeled_value(line, "Expected Profit:") {
            self.expected_profit_pct = Some(v);
        } else if let Some(v) = labeled_value(line, "ATR:") {
            self.atr = Some(v);
        }
    }

    fn finish(self) -> Option<AlertRecord> {
        Some(AlertRecord {
            time: self.time,
            symbol: self.symbol,
            timeframe: self.timeframe,
            price: self.price?,
            atr: self.atr?,
            buy_price: self.buy_price?,
            take_profit: self.take_profit?,
            stop_loss: self.stop_loss?,
            expected_profit_pct: self.expected_profit_pct?,
        })
    }
}

/// Recognizes `[ts] ⚡ {symbol} [{tf}] {marker}` for exactly the requested
/// kind. The trailing `]`-then-marker check keeps the `ALERT` grammar from
/// also matching `WATCHLIST ALERT` openers.
fn parse_opener(line: &str, kind: AlertKind) -> Option<PartialRecord> {
    let line = line.trim();
    let ts_text = line.strip_prefix('[')?.split(']').next()?;
    let time = NaiveDateTime::parse_from_str(ts_text, TIME_FORMAT)
        .ok()?
        .and_utc();

    let rest = line.split_once('⚡')?.1.trim();
    let head = rest.strip_suffix(kind.marker())?.trim_end();
    let head = head.strip_suffix(']')?;
    let (symbol, timeframe) = head.rsplit_once('[')?;

    let symbol = symbol.trim();
    let timeframe = timeframe.trim();
    if symbol.is_empty() || timeframe.is_empty() {
        return None;
    }

    Some(PartialRecord {
        time,
        symbol: symbol.to_string(),
        timeframe: timeframe.to_string(),
        price: None,
        atr: None,
        buy_price: None,
        take_profit: None,
        stop_loss: None,
        expected_profit_pct: None,
    })
}

/// Extracts the numeric value after a field label, tolerating emoji
/// prefixes and a trailing percent sign.
fn labeled_value(line: &str, label: &str) -> Option<f64> {
    let idx = line.find(label)?;
    let value = line[idx + label.len()..].trim().trim_end_matches('%');
    value.trim().parse().ok()
}
