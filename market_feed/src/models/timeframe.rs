//! The fixed set of bucket sizes the scanner evaluates.
//!
//! A closed enum rather than an amount × unit pair: the scan loop only ever
//! asks for the intervals Binance serves under the same names, so parsing
//! and display stay a direct token match (`"15m"`, `"1h"`, `"4h"`).

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Candle bucket size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Timeframe {
    /// 15 minutes
    #[serde(rename = "15m")]
    Min15,
    /// 1 hour
    #[serde(rename = "1h")]
    Hour1,
    /// 4 hours
    #[serde(rename = "4h")]
    Hour4,
}

/// The input did not name a supported timeframe.
#[derive(Debug, Error)]
#[error("unknown timeframe: {0} (expected 15m, 1h, or 4h)")]
pub struct ParseTimeframeError(pub String);

impl Timeframe {
    /// Wire token, identical to the Binance interval name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Timeframe::Min15 => "15m",
            Timeframe::Hour1 => "1h",
            Timeframe::Hour4 => "4h",
        }
    }

    /// Every supported timeframe, in scan order.
    pub const fn all() -> [Timeframe; 3] {
        [Timeframe::Min15, Timeframe::Hour1, Timeframe::Hour4]
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Timeframe {
    type Err = ParseTimeframeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "15m" => Ok(Timeframe::Min15),
            "1h" => Ok(Timeframe::Hour1),
            "4h" => Ok(Timeframe::Hour4),
            other => Err(ParseTimeframeError(other.to_string())),
        }
    }
}
