//! # Text Logger
//!
//! The text formatting core of a logging library: it turns one populated
//! log record into a single line of text, appended straight into a caller
//! owned byte buffer.
//!
//! * **Cheap timestamps**: the date and time of day are rendered once per
//!   second and cached; only milliseconds are rendered per record
//! * **No allocation on the hot path**: everything is appended into the
//!   destination `Vec<u8>`, which the caller reuses between records
//! * **Color-ready output**: `format` returns the byte range of the level name
//!   so a console sink can highlight it
//!
//! ## Main Components
//!
//! * `DefaultFormatter`: renders the fixed default layout (one per thread)
//! * `Formatter`: the trait sinks use to hold any formatter
//! * `LogRecord`, `Level`, `SourceLoc`: the record being formatted
//! * `clock`: epoch splitting and calendar conversion
//! * `os`: per-platform separators and line terminator
//!
//! ## Quick Start
//!
//! ```
//! use text_logger::{source_loc, DefaultFormatter, Formatter, Level, LogRecord};
//!
//! let mut formatter = DefaultFormatter::default();
//! let mut buf = Vec::with_capacity(256);
//!
//! let record = LogRecord::with_source(source_loc!(), "app", Level::Warn, "disk almost full");
//! let range = formatter.format(&record, &mut buf);
//!
//! assert_eq!(&buf[range.as_range()], b"warning");
//! let line = String::from_utf8(buf).unwrap();
//! assert!(line.contains("] [app] [warning] ["));
//! assert!(line.ends_with("disk almost full\n") || line.ends_with("disk almost full\r\n"));
//! ```

pub mod clock;
pub mod fmt_helper;
pub mod formatter;
pub mod level;
pub mod log_record;
pub mod os;
pub mod source_loc;

pub use clock::{CalendarTime, CalendarZone, LocalZone, TimeConversionError, UtcZone};
pub use formatter::{DefaultFormatter, Formatter};
pub use level::{Level, ParseLevelError};
pub use log_record::{ColorRange, LogRecord};
pub use source_loc::SourceLoc;
