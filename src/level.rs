use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Severity of a log record.
///
/// Levels are ordered from least to most severe, so `Level::Warn > Level::Info`.
/// `Off` sorts above everything and is only meaningful as a filter threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Critical,
    Off,
}

const LEVEL_NAMES: [&str; 7] = ["trace", "debug", "info", "warning", "error", "critical", "off"];
const SHORT_LEVEL_NAMES: [&str; 7] = ["T", "D", "I", "W", "E", "C", "O"];

impl Level {
    /// All levels in severity order.
    pub const ALL: [Level; 7] = [
        Level::Trace,
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
        Level::Critical,
        Level::Off,
    ];

    /// Canonical display string, as written between the level brackets of a
    /// formatted line.
    ///
    /// # Examples
    ///
    /// ```
    /// # use text_logger::Level;
    /// assert_eq!(Level::Info.as_str(), "info");
    /// assert_eq!(Level::Warn.as_str(), "warning");
    /// ```
    #[inline(always)]
    pub const fn as_str(self) -> &'static str {
        LEVEL_NAMES[self as usize]
    }

    /// One-letter form of the level name.
    #[inline(always)]
    pub const fn as_short_str(self) -> &'static str {
        SHORT_LEVEL_NAMES[self as usize]
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known level.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown log level: {0:?}")]
pub struct ParseLevelError(pub String);

impl FromStr for Level {
    type Err = ParseLevelError;

    /// Parses a canonical level name. `"warn"` and `"err"` are accepted as
    /// aliases for `warning` and `error`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(idx) = LEVEL_NAMES.iter().position(|name| *name == s) {
            return Ok(Level::ALL[idx]);
        }
        match s {
            "warn" => Ok(Level::Warn),
            "err" => Ok(Level::Error),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Trace => Level::Trace,
            log::Level::Debug => Level::Debug,
            log::Level::Info => Level::Info,
            log::Level::Warn => Level::Warn,
            log::Level::Error => Level::Error,
        }
    }
}

impl From<tracing::Level> for Level {
    fn from(level: tracing::Level) -> Self {
        match level {
            tracing::Level::TRACE => Level::Trace,
            tracing::Level::DEBUG => Level::Debug,
            tracing::Level::INFO => Level::Info,
            tracing::Level::WARN => Level::Warn,
            tracing::Level::ERROR => Level::Error,
        }
    }
}
