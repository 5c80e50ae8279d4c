//! Per-platform constants, fixed at build time.

/// Characters that separate directories in a source path.
#[cfg(windows)]
pub const FOLDER_SEPS: &[u8] = b"\\/";
#[cfg(not(windows))]
pub const FOLDER_SEPS: &[u8] = b"/";

/// Line terminator appended to every formatted record.
#[cfg(windows)]
pub const DEFAULT_EOL: &str = "\r\n";
#[cfg(not(windows))]
pub const DEFAULT_EOL: &str = "\n";

/// Returns the part of `filename` after its last directory separator, or the
/// whole string when it has none.
///
/// Scans from the end and returns a subslice; nothing is allocated.
///
/// # Examples
///
/// ```
/// # use text_logger::os::basename;
/// assert_eq!(basename("/a/b/c.cpp"), "c.cpp");
/// assert_eq!(basename("c.cpp"), "c.cpp");
/// ```
#[inline]
pub fn basename(filename: &str) -> &str {
    let bytes = filename.as_bytes();
    let found = match FOLDER_SEPS {
        [sep] => bytes.iter().rposition(|b| b == sep),
        seps => bytes.iter().rposition(|b| seps.contains(b)),
    };
    // Separators are ASCII, so the byte after one is always a char boundary.
    match found {
        Some(pos) => &filename[pos + 1..],
        None => filename,
    }
}
