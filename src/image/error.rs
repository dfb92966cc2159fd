//! Errors raised when a line write would fall outside the buffer.

use thiserror::Error;

use crate::packet::LineIndex;

/// A rejected line write. The buffer is validated before any copy, so a
/// rejected write leaves pixel storage and counters untouched.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ImageError {
    /// The supplied line is not exactly `3 * width` bytes.
    #[error("line length mismatch: buffer expects {expected} bytes per line, got {actual}")]
    LineLengthMismatch {
        /// Bytes one scan-line of this buffer occupies.
        expected: usize,
        /// Bytes actually supplied.
        actual: usize,
    },
    /// The line index does not fit the buffer's height.
    #[error("line index {index} outside image height {height}")]
    LineIndexOutOfRange { index: LineIndex, height: u32 },
}
