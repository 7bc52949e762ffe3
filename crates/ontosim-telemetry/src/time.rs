use crate::{Result, TelemetryError};
use chrono::{NaiveDateTime, TimeDelta};

/// Format used for every timestamp the simulator emits.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// `base + offset` minutes, formatted with [`TIMESTAMP_FORMAT`].
pub fn timestamp(base: NaiveDateTime, offset: i64) -> Result<String> {
    TimeDelta::try_minutes(offset)
        .and_then(|delta| base.checked_add_signed(delta))
        .map(|t| t.format(TIMESTAMP_FORMAT).to_string())
        .ok_or(TelemetryError::TimestampOutOfRange { base, offset })
}

pub fn parse_base_time(text: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text.trim(), TIMESTAMP_FORMAT).map_err(|source| {
        TelemetryError::InvalidBaseTime {
            input: text.to_string(),
            source,
        }
    })
}
