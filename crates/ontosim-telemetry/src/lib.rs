//! Synthetic telemetry for sensors derived from component constraints.
//!
//! Readings are mostly inside each sensor's bounds; with a fixed 5% chance a
//! reading is pushed outside them, so downstream monitoring has something to
//! catch.

pub mod series;
pub mod synth;
pub mod time;

pub use series::{Reading, Readings, TimeSeries};
pub use synth::{sample, sample_with, VIOLATION_PROBABILITY};
pub use time::{parse_base_time, timestamp, TIMESTAMP_FORMAT};

#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("invalid base time {input:?} (expected YYYY-MM-DD HH:MM:SS): {source}")]
    InvalidBaseTime {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("timestamp {base} + {offset} minutes is out of range")]
    TimestampOutOfRange {
        base: chrono::NaiveDateTime,
        offset: i64,
    },
}

pub type Result<T> = std::result::Result<T, TelemetryError>;
