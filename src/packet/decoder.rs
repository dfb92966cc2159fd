//! Parser turning inbound datagram bytes into [`LinePacket`]s.
//!
//! ## Wire layout
//!
//! All header integers are unsigned 32-bit values in network byte order
//! (big-endian); pixel bytes are raw. A datagram payload is:
//!
//! ```text
//! u32  record count
//! then `record count` line records, each:
//!   u32  image id
//!   u32  line index        (zero-based, < height)
//!   u32  image height      (rows)
//!   u32  image width       (columns)
//!   u32  timestamp         (sender milliseconds, wraps at 0x7FFF_FFFF)
//!   [u8; 3 * width] pixels (interleaved RGB for this line)
//! ```
//!
//! Height, width, and line index travel as signed integers on the wire;
//! values with the top bit set are negative at the sender and therefore
//! malformed here. Dimensions above [`MAX_DIMENSION`] are rejected too:
//! routing a decoded header allocates `3 * height * width` bytes, so the
//! decoder refuses headers whose declared geometry no real sensor produces
//! before any allocation happens. The final datagram of an image may declare
//! more records than it actually packed; the stale trailing records fail to
//! decode and are dropped by the caller.

use bytes::{Buf, Bytes};

use super::{DecodeError, Geometry, ImageId, LineHeader, LineIndex, LinePacket};
use crate::{byte_order::read_network_u32, policy::Timestamp};

/// Bytes occupied by the fixed per-line header (five `u32` fields).
pub const LINE_HEADER_BYTES: usize = 20;

/// Bytes occupied by the datagram's leading record count.
const RECORD_COUNT_BYTES: usize = 4;

/// Largest height or width the decoder accepts.
///
/// Caps the buffer allocation a single decoded header can demand at
/// `3 * MAX_DIMENSION * MAX_DIMENSION` bytes while leaving ample headroom
/// over real sensor geometries.
pub const MAX_DIMENSION: u32 = 8_192;

/// Largest dimension representable as a positive signed wire integer.
const SIGNED_WIRE_MAX: u32 = i32::MAX as u32;

/// Decode a payload containing exactly one line record.
///
/// Use this entry point when the surrounding transport has already split a
/// datagram into individual line payloads. The pixel section must be exactly
/// `3 * width` bytes; the input is never mutated.
///
/// # Errors
///
/// Returns a [`DecodeError`] when the payload is shorter than the fixed
/// header, the header fields are out of range, or the pixel section length
/// does not match the declared width.
pub fn decode_line(payload: &[u8]) -> Result<LinePacket, DecodeError> {
    let mut buf = payload;
    let header = decode_header(&mut buf)?;

    let expected = header.geometry().line_bytes();
    if buf.len() != expected {
        return Err(DecodeError::PixelLengthMismatch {
            expected,
            actual: buf.len(),
        });
    }

    Ok(LinePacket::new(header, Bytes::copy_from_slice(buf)))
}

/// Decode a whole datagram into an iterator of line records.
///
/// The returned [`LineRecords`] yields one `Result<LinePacket, DecodeError>`
/// per declared record. Record boundaries depend on each record's declared
/// width, so a malformed record makes the rest of the datagram unreadable:
/// the iterator yields that error and then fuses.
///
/// # Errors
///
/// Returns [`DecodeError::TruncatedDatagram`] when the payload is shorter
/// than the leading record count.
///
/// # Examples
///
/// ```
/// use rasterline::packet::decode_datagram;
///
/// // Record count of zero: a well-formed but empty datagram.
/// let payload = 0u32.to_be_bytes();
/// let mut records = decode_datagram(&payload).expect("count prefix present");
/// assert!(records.next().is_none());
/// ```
pub fn decode_datagram(payload: &[u8]) -> Result<LineRecords<'_>, DecodeError> {
    let Some((count, buf)) = payload.split_first_chunk::<RECORD_COUNT_BYTES>() else {
        return Err(DecodeError::TruncatedDatagram {
            len: payload.len(),
            required: RECORD_COUNT_BYTES,
        });
    };
    let declared = read_network_u32(*count);

    Ok(LineRecords {
        buf,
        remaining: declared,
        poisoned: false,
    })
}

/// Iterator over the line records packed into one datagram.
///
/// Produced by [`decode_datagram`]. Fuses after yielding a decode error
/// because the following record boundary is unknown.
#[derive(Clone, Debug)]
pub struct LineRecords<'a> {
    buf: &'a [u8],
    remaining: u32,
    poisoned: bool,
}

impl LineRecords<'_> {
    /// Number of records the datagram still claims to hold.
    #[must_use]
    pub const fn remaining_records(&self) -> u32 { self.remaining }
}

impl Iterator for LineRecords<'_> {
    type Item = Result<LinePacket, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.poisoned || self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        match decode_record(&mut self.buf) {
            Ok(packet) => Some(Ok(packet)),
            Err(err) => {
                self.poisoned = true;
                Some(Err(err))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.poisoned {
            (0, Some(0))
        } else {
            (0, Some(self.remaining as usize))
        }
    }
}

/// Decode one record from the front of `buf`, advancing past it.
fn decode_record(buf: &mut &[u8]) -> Result<LinePacket, DecodeError> {
    let header = decode_header(buf)?;

    let expected = header.geometry().line_bytes();
    if buf.len() < expected {
        return Err(DecodeError::TruncatedPixels {
            expected,
            actual: buf.len(),
        });
    }

    let pixels = Bytes::copy_from_slice(&buf[..expected]);
    buf.advance(expected);

    Ok(LinePacket::new(header, pixels))
}

fn decode_header(buf: &mut &[u8]) -> Result<LineHeader, DecodeError> {
    if buf.len() < LINE_HEADER_BYTES {
        return Err(DecodeError::TruncatedHeader {
            len: buf.len(),
            required: LINE_HEADER_BYTES,
        });
    }

    let image_id = ImageId::new(buf.get_u32());
    let line_index = buf.get_u32();
    let height = buf.get_u32();
    let width = buf.get_u32();
    let timestamp = Timestamp::new(buf.get_u32());

    if !wire_dimension_positive(height) || !wire_dimension_positive(width) {
        return Err(DecodeError::InvalidGeometry { height, width });
    }
    if height > MAX_DIMENSION || width > MAX_DIMENSION {
        return Err(DecodeError::GeometryTooLarge {
            height,
            width,
            limit: MAX_DIMENSION,
        });
    }
    if line_index >= height {
        return Err(DecodeError::LineIndexOutOfRange {
            index: LineIndex::new(line_index),
            height,
        });
    }

    Ok(LineHeader::new(
        image_id,
        LineIndex::new(line_index),
        Geometry::new(height, width),
        timestamp,
    ))
}

const fn wire_dimension_positive(value: u32) -> bool { value >= 1 && value <= SIGNED_WIRE_MAX }
