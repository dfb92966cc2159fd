//! Decoded line-record header and the packet type built from it.

use bytes::Bytes;

use super::{Geometry, ImageId, LineIndex};
use crate::policy::Timestamp;

/// Framing metadata decoded from one line record.
///
/// Small enough to copy by value; the pixel bytes live separately in
/// [`LinePacket`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LineHeader {
    image_id: ImageId,
    line_index: LineIndex,
    geometry: Geometry,
    timestamp: Timestamp,
}

impl LineHeader {
    /// Create a new line header.
    #[must_use]
    pub const fn new(
        image_id: ImageId,
        line_index: LineIndex,
        geometry: Geometry,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            image_id,
            line_index,
            geometry,
            timestamp,
        }
    }

    /// Image this scan-line belongs to.
    #[must_use]
    pub const fn image_id(&self) -> ImageId { self.image_id }

    /// Row position of the scan-line within the image.
    #[must_use]
    pub const fn line_index(&self) -> LineIndex { self.line_index }

    /// Image dimensions declared by the record.
    #[must_use]
    pub const fn geometry(&self) -> Geometry { self.geometry }

    /// Sender-side millisecond timestamp for this record.
    #[must_use]
    pub const fn timestamp(&self) -> Timestamp { self.timestamp }
}

/// One decoded scan-line: framing metadata plus its raw pixel bytes.
///
/// Immutable once decoded; consumed by
/// [`ImageRegistry::route_line`](crate::registry::ImageRegistry::route_line)
/// and discarded.
///
/// # Examples
///
/// ```
/// use rasterline::packet::{Geometry, ImageId, LineHeader, LineIndex, LinePacket};
/// use rasterline::policy::Timestamp;
///
/// let header = LineHeader::new(
///     ImageId::new(1),
///     LineIndex::zero(),
///     Geometry::new(2, 2),
///     Timestamp::new(0),
/// );
/// let packet = LinePacket::new(header, vec![0u8; 6].into());
/// assert_eq!(packet.pixels().len(), packet.header().geometry().line_bytes());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinePacket {
    header: LineHeader,
    pixels: Bytes,
}

impl LinePacket {
    /// Assemble a packet from a decoded header and its pixel bytes.
    #[must_use]
    pub const fn new(header: LineHeader, pixels: Bytes) -> Self { Self { header, pixels } }

    /// Framing metadata for this scan-line.
    #[must_use]
    pub const fn header(&self) -> &LineHeader { &self.header }

    /// Raw interleaved RGB bytes, exactly `3 * width` of them.
    #[must_use]
    pub fn pixels(&self) -> &[u8] { &self.pixels }

    /// Consume the packet, returning the owned pixel bytes.
    #[must_use]
    pub fn into_pixels(self) -> Bytes { self.pixels }
}
