use std::ops::Range;
use std::time::SystemTime;

use crate::level::Level;
use crate::source_loc::SourceLoc;

/// A single log event, fully populated and ready to be formatted.
///
/// The record only borrows its text; it is built by the logging front end
/// and handed to a [`Formatter`](crate::Formatter) by reference.
#[derive(Debug, Clone, Copy)]
pub struct LogRecord<'a> {
    /// When the event happened.
    pub time: SystemTime,

    /// Name of the emitting logger. Empty means no logger field is written.
    pub logger_name: &'a str,

    pub level: Level,

    /// Call site, or [`SourceLoc::EMPTY`].
    pub source: SourceLoc<'a>,

    /// The already formatted message text, copied to the output verbatim.
    pub payload: &'a str,
}

impl<'a> LogRecord<'a> {
    /// Creates a record stamped with the current time and no source location.
    pub fn new(logger_name: &'a str, level: Level, payload: &'a str) -> Self {
        Self {
            time: SystemTime::now(),
            logger_name,
            level,
            source: SourceLoc::EMPTY,
            payload,
        }
    }

    /// Creates a record stamped with the current time at the given call site.
    pub fn with_source(
        source: SourceLoc<'a>,
        logger_name: &'a str,
        level: Level,
        payload: &'a str,
    ) -> Self {
        Self {
            source,
            ..Self::new(logger_name, level, payload)
        }
    }

    /// Replaces the timestamp.
    pub fn at(mut self, time: SystemTime) -> Self {
        self.time = time;
        self
    }
}

/// Byte range of the level name inside the destination buffer.
///
/// Returned by [`Formatter::format`](crate::Formatter::format) so that a
/// console sink can wrap exactly those bytes in color escape codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColorRange {
    pub start: usize,
    pub end: usize,
}

impl ColorRange {
    #[inline(always)]
    pub fn as_range(&self) -> Range<usize> {
        self.start..self.end
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}
