//! Core implementation of the text formatting path.
//!
//! This module provides the `Formatter` trait that sinks hold, and the
//! `DefaultFormatter` that renders the fixed default line layout.

use std::marker::PhantomData;

use crate::clock::{split_epoch, CalendarTime, CalendarZone, LocalZone};
use crate::fmt_helper::{append_int, append_str, append_uint, pad2, pad3};
use crate::log_record::{ColorRange, LogRecord};
use crate::os::{basename, DEFAULT_EOL};

/// Renders log records into bytes.
///
/// A sink owns its formatter and calls [`format`](Formatter::format) once per
/// record. Implementations may keep mutable state between calls, which is why
/// `format` takes `&mut self`.
///
/// # Thread Safety
///
/// A formatter is used by one thread at a time. Code that delivers records
/// from several threads (for example, a pool of async workers) gives each
/// worker its own instance via [`clone_box`](Formatter::clone_box).
pub trait Formatter: Send {
    /// Appends the rendering of `record` to the end of `dest`.
    ///
    /// Existing content of `dest` is left untouched. The returned
    /// [`ColorRange`] locates the level name inside `dest`.
    fn format(&mut self, record: &LogRecord<'_>, dest: &mut Vec<u8>) -> ColorRange;

    /// Creates an independent formatter with the same configuration and none
    /// of this one's cached state.
    fn clone_box(&self) -> Box<dyn Formatter>;
}

impl Clone for Box<dyn Formatter> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Upper bound on the prefix length for any real date, so the cache buffer
/// is allocated once and reused for the formatter's lifetime.
const PREFIX_CAPACITY: usize = 32;

/// Formatter for the fixed default layout:
///
/// ```text
/// [2024-03-05 08:09:10.007] [net] [info] [main.rs:42] started
/// ```
///
/// The `[logger]` field is written only for a non-empty logger name, and the
/// `[file:line]` field only for a non-empty source location. The line ends
/// with [`DEFAULT_EOL`].
///
/// # Timestamp Cache
///
/// The `[YYYY-MM-DD HH:MM:SS.` prefix only changes once per second, so it is
/// rendered into an internal buffer keyed by the epoch second and copied on
/// every later record from that same second. Only the milliseconds are
/// rendered per call. The key is the wall-clock second; if the clock steps
/// backwards into a second that happens to equal the cached one, the cached
/// prefix is reused as-is.
///
/// # Thread Safety
///
/// **Important**: the cache is mutated without synchronization, so a
/// `DefaultFormatter` must not be shared between threads. Clone it instead;
/// a clone starts with an empty cache and never observes the original's.
///
/// # Type Parameters
///
/// * `Z` - The [`CalendarZone`] used for the calendar fields, [`LocalZone`] by
///   default.
///
/// # Examples
///
/// ```
/// # use text_logger::{DefaultFormatter, Formatter, Level, LogRecord, UtcZone};
/// # use std::time::{Duration, UNIX_EPOCH};
/// let mut formatter = DefaultFormatter::with_zone(UtcZone);
/// let record = LogRecord::new("", Level::Info, "started")
///     .at(UNIX_EPOCH + Duration::from_millis(1_709_626_150_007));
///
/// let mut buf = Vec::new();
/// let range = formatter.format(&record, &mut buf);
///
/// assert!(buf.starts_with(b"[2024-03-05 08:09:10.007] [info] started"));
/// assert_eq!(&buf[range.as_range()], b"info");
/// ```
pub struct DefaultFormatter<Z: CalendarZone = LocalZone> {
    cached_epoch_second: i64,
    cached_prefix: Vec<u8>,
    zone: PhantomData<fn() -> Z>,
}

impl DefaultFormatter<LocalZone> {
    /// Creates a formatter in the local time zone with an empty timestamp
    /// cache.
    pub fn new() -> Self {
        Self::with_zone(LocalZone)
    }
}

impl<Z: CalendarZone> DefaultFormatter<Z> {
    /// Creates a formatter in the given zone with an empty timestamp cache.
    ///
    /// ```
    /// # use text_logger::{DefaultFormatter, UtcZone};
    /// let formatter = DefaultFormatter::with_zone(UtcZone);
    /// ```
    pub fn with_zone(_zone: Z) -> Self {
        Self::empty()
    }

    fn empty() -> Self {
        Self {
            cached_epoch_second: 0,
            cached_prefix: Vec::with_capacity(PREFIX_CAPACITY),
            zone: PhantomData,
        }
    }

    /// Rebuilds the cached prefix for `epoch_secs`.
    ///
    /// A timestamp the zone cannot convert is rendered from
    /// [`CalendarTime::ZERO`]; the rest of the record still gets formatted.
    fn refresh_prefix(&mut self, epoch_secs: i64) {
        let tm = Z::to_calendar(epoch_secs).unwrap_or_else(|err| {
            tracing::warn!(
                epoch_secs,
                error = %err,
                "calendar conversion failed, using zeroed date"
            );
            CalendarTime::ZERO
        });

        let prefix = &mut self.cached_prefix;
        prefix.clear();
        prefix.push(b'[');
        append_int(i64::from(tm.year), prefix);
        prefix.push(b'-');
        pad2(tm.month, prefix);
        prefix.push(b'-');
        pad2(tm.day, prefix);
        prefix.push(b' ');
        pad2(tm.hour, prefix);
        prefix.push(b':');
        pad2(tm.minute, prefix);
        prefix.push(b':');
        pad2(tm.second, prefix);
        prefix.push(b'.');

        self.cached_epoch_second = epoch_secs;
        tracing::trace!(epoch_secs, "timestamp prefix rebuilt");
    }
}

impl Default for DefaultFormatter<LocalZone> {
    fn default() -> Self {
        Self::new()
    }
}

/// Cloning never copies the cache: the clone renders its first prefix from
/// scratch.
impl<Z: CalendarZone> Clone for DefaultFormatter<Z> {
    fn clone(&self) -> Self {
        Self::empty()
    }
}

impl<Z: CalendarZone> Formatter for DefaultFormatter<Z> {
    fn format(&mut self, record: &LogRecord<'_>, dest: &mut Vec<u8>) -> ColorRange {
        let (epoch_secs, millis) = split_epoch(record.time);

        if self.cached_epoch_second != epoch_secs || self.cached_prefix.is_empty() {
            self.refresh_prefix(epoch_secs);
        }
        dest.extend_from_slice(&self.cached_prefix);

        pad3(millis, dest);
        dest.extend_from_slice(b"] ");

        if !record.logger_name.is_empty() {
            dest.push(b'[');
            append_str(record.logger_name, dest);
            dest.extend_from_slice(b"] ");
        }

        dest.push(b'[');
        let start = dest.len();
        append_str(record.level.as_str(), dest);
        let end = dest.len();
        dest.extend_from_slice(b"] ");

        if !record.source.is_empty() {
            dest.push(b'[');
            append_str(basename(record.source.filename), dest);
            dest.push(b':');
            append_uint(u64::from(record.source.line), dest);
            dest.extend_from_slice(b"] ");
        }

        append_str(record.payload, dest);
        append_str(DEFAULT_EOL, dest);

        ColorRange { start, end }
    }

    fn clone_box(&self) -> Box<dyn Formatter> {
        Box::new(self.clone())
    }
}
