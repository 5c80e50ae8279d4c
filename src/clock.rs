//! Calendar breakdown of timestamps for the text formatter.
//!
//! This module splits a `SystemTime` into whole epoch seconds plus a
//! millisecond remainder, and converts whole seconds into calendar fields
//! through a [`CalendarZone`]. The split is what the formatter caches on, so
//! it must be cheap; the calendar conversion only runs once per second.

use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{DateTime, Datelike, Local, TimeZone, Timelike, Utc};
use thiserror::Error;

const NANOS_PER_SEC: u32 = 1_000_000_000;
const NANOS_PER_MILLI: u32 = 1_000_000;

/// Calendar fields of a single second.
///
/// `month` and `day` are 1-based for real dates. The [`CalendarTime::ZERO`]
/// sentinel has every field set to zero and stands in for a timestamp that
/// could not be converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CalendarTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl CalendarTime {
    /// Sentinel used when conversion fails.
    pub const ZERO: CalendarTime = CalendarTime {
        year: 0,
        month: 0,
        day: 0,
        hour: 0,
        minute: 0,
        second: 0,
    };

    fn from_datetime<Tz: TimeZone>(dt: &DateTime<Tz>) -> Self {
        Self {
            year: dt.year(),
            month: dt.month(),
            day: dt.day(),
            hour: dt.hour(),
            minute: dt.minute(),
            second: dt.second(),
        }
    }
}

/// Failure to turn an epoch second into calendar fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TimeConversionError {
    #[error("epoch second {0} is outside the representable calendar range")]
    OutOfRange(i64),
}

/// Time zone used to break a timestamp into calendar fields.
///
/// The zone is chosen at compile time as a type parameter of
/// [`DefaultFormatter`](crate::DefaultFormatter), so the formatting path
/// carries no runtime zone configuration.
pub trait CalendarZone: Send + 'static {
    /// Converts whole seconds since the Unix epoch into calendar fields.
    fn to_calendar(epoch_secs: i64) -> Result<CalendarTime, TimeConversionError>;
}

/// The platform's local time zone. This is the default.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalZone;

/// Coordinated Universal Time.
#[derive(Debug, Clone, Copy, Default)]
pub struct UtcZone;

impl CalendarZone for LocalZone {
    fn to_calendar(epoch_secs: i64) -> Result<CalendarTime, TimeConversionError> {
        Local
            .timestamp_opt(epoch_secs, 0)
            .single()
            .map(|dt| CalendarTime::from_datetime(&dt))
            .ok_or(TimeConversionError::OutOfRange(epoch_secs))
    }
}

impl CalendarZone for UtcZone {
    fn to_calendar(epoch_secs: i64) -> Result<CalendarTime, TimeConversionError> {
        Utc.timestamp_opt(epoch_secs, 0)
            .single()
            .map(|dt| CalendarTime::from_datetime(&dt))
            .ok_or(TimeConversionError::OutOfRange(epoch_secs))
    }
}

/// Splits a timestamp into floor seconds since the epoch and the millisecond
/// part of the current second.
///
/// The millisecond part is always in `0..1000`, including for instants before
/// the epoch: one millisecond before the epoch is `(-1, 999)`. Instants too far
/// from the epoch for an `i64` saturate, which later fails calendar
/// conversion instead of wrapping.
///
/// # Examples
///
/// ```
/// # use text_logger::clock::split_epoch;
/// # use std::time::{Duration, UNIX_EPOCH};
/// let t = UNIX_EPOCH + Duration::from_millis(1_700_000_000_007);
/// assert_eq!(split_epoch(t), (1_700_000_000, 7));
/// ```
#[inline(always)]
pub fn split_epoch(time: SystemTime) -> (i64, u32) {
    match time.duration_since(UNIX_EPOCH) {
        Ok(since) => (
            i64::try_from(since.as_secs()).unwrap_or(i64::MAX),
            since.subsec_millis(),
        ),
        Err(err) => {
            let before = err.duration();
            let secs = i64::try_from(before.as_secs()).unwrap_or(i64::MAX);
            match before.subsec_nanos() {
                0 => (-secs, 0),
                nanos => (-secs - 1, (NANOS_PER_SEC - nanos) / NANOS_PER_MILLI),
            }
        }
    }
}
