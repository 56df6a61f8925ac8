//! Opening hours for stores and store accounts.

use chrono::NaiveTime;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

const TIME_FORMAT: &str = "%H:%M";

/// Error parsing a time of day.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid time of day '{0}', expected HH:MM")]
pub struct HoursError(pub String);

/// Daily opening window, serialized as `{"open": "07:00", "close": "22:00"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BusinessHours {
    #[serde(with = "hh_mm")]
    pub open: NaiveTime,
    #[serde(with = "hh_mm")]
    pub close: NaiveTime,
}

impl BusinessHours {
    #[must_use]
    pub const fn new(open: NaiveTime, close: NaiveTime) -> Self {
        Self { open, close }
    }

    /// Parse both ends from `HH:MM` strings.
    ///
    /// # Errors
    ///
    /// Returns `HoursError` naming the first value that is not a valid time.
    pub fn parse(open: &str, close: &str) -> Result<Self, HoursError> {
        Ok(Self {
            open: parse_time(open)?,
            close: parse_time(close)?,
        })
    }

    /// Whether the store is open at `time`.
    ///
    /// A window whose close is earlier than its open runs past midnight.
    #[must_use]
    pub fn is_open_at(&self, time: NaiveTime) -> bool {
        if self.open <= self.close {
            self.open <= time && time < self.close
        } else {
            time >= self.open || time < self.close
        }
    }

    /// `HH:MM` rendering of the opening time.
    #[must_use]
    pub fn open_label(&self) -> String {
        self.open.format(TIME_FORMAT).to_string()
    }

    /// `HH:MM` rendering of the closing time.
    #[must_use]
    pub fn close_label(&self) -> String {
        self.close.format(TIME_FORMAT).to_string()
    }
}

fn parse_time(value: &str) -> Result<NaiveTime, HoursError> {
    NaiveTime::parse_from_str(value.trim(), TIME_FORMAT).map_err(|_| HoursError(value.to_owned()))
}

mod hh_mm {
    use super::{Deserialize, Deserializer, NaiveTime, Serializer, TIME_FORMAT, parse_time};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.format(TIME_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_time(&raw).map_err(serde::de::Error::custom)
    }
}
