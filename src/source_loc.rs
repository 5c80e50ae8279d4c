/// Call-site location attached to a log record.
///
/// A location whose `line` is zero is treated as absent, and the formatter
/// omits the `[file:line]` field for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SourceLoc<'a> {
    pub filename: &'a str,
    pub line: u32,
    pub funcname: &'a str,
}

impl<'a> SourceLoc<'a> {
    /// The absent location.
    pub const EMPTY: SourceLoc<'static> = SourceLoc {
        filename: "",
        line: 0,
        funcname: "",
    };

    pub const fn new(filename: &'a str, line: u32, funcname: &'a str) -> Self {
        Self { filename, line, funcname }
    }

    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.line == 0
    }
}

/// Captures the [`SourceLoc`] of the macro invocation.
///
/// The function slot holds the enclosing module path, which is the closest
/// call-site name Rust exposes without a proc macro.
///
/// # Examples
///
/// ```
/// # use text_logger::source_loc;
/// let loc = source_loc!();
/// assert!(!loc.is_empty());
/// assert!(loc.filename.ends_with(".rs"));
/// ```
#[macro_export]
macro_rules! source_loc {
    () => {
        $crate::SourceLoc::new(file!(), line!(), module_path!())
    };
}
