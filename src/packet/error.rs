//! Errors produced while decoding datagram payloads.
//!
//! Every variant is a structural defect in the inbound bytes. Decoding never
//! creates or mutates image state, so callers drop the offending record and
//! continue with the next one.

use thiserror::Error;

use super::LineIndex;

/// A datagram payload or line record that cannot be decoded.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// The payload ends before the fixed line header is complete.
    #[error("line header truncated: {len} bytes, need {required}")]
    TruncatedHeader {
        /// Bytes actually available.
        len: usize,
        /// Bytes the fixed header occupies.
        required: usize,
    },
    /// The datagram ends before the leading record count is complete.
    #[error("datagram truncated: {len} bytes, need {required} for the record count")]
    TruncatedDatagram {
        /// Bytes actually available.
        len: usize,
        /// Bytes the record-count prefix occupies.
        required: usize,
    },
    /// Height or width is zero or reads as a negative signed wire integer.
    #[error("geometry out of range: height {height}, width {width}")]
    InvalidGeometry { height: u32, width: u32 },
    /// Height or width exceeds the decoder's per-dimension bound. Accepting
    /// the header would commit the receiver to an allocation sized by
    /// attacker-controlled fields.
    #[error("geometry too large: height {height}, width {width}, limit {limit} per dimension")]
    GeometryTooLarge {
        height: u32,
        width: u32,
        /// The bound each dimension must stay within.
        limit: u32,
    },
    /// The declared line index does not fit the declared height.
    #[error("line index {index} outside image height {height}")]
    LineIndexOutOfRange { index: LineIndex, height: u32 },
    /// A single-line payload whose pixel section is not exactly `3 * width`.
    #[error("pixel length mismatch: declared width needs {expected} bytes, got {actual}")]
    PixelLengthMismatch { expected: usize, actual: usize },
    /// A datagram record with fewer pixel bytes remaining than `3 * width`.
    #[error("pixel payload truncated: need {expected} bytes, {actual} remain")]
    TruncatedPixels { expected: usize, actual: usize },
}
