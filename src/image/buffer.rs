//! In-memory reconstruction target for one image id.

use std::num::NonZeroU32;

use super::ImageError;
use crate::{
    packet::{Geometry, ImageId, LineIndex},
    policy::{DEFAULT_VALIDITY_DIVISOR, Timestamp, elapsed, is_valid_at},
};

/// Result of feeding a scan-line into an [`ImageBuffer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineStatus {
    /// The image still expects more lines.
    Incomplete,
    /// This line completed the image. Returned exactly once per buffer, on
    /// the call where the received count reaches the image height.
    Complete,
}

/// Pixel storage and bookkeeping for one in-flight or completed image.
///
/// Storage is allocated eagerly at construction: exactly
/// `3 * height * width` zeroed bytes, addressed as row-major RGB triples.
/// Untrusted geometry must be bounded before it reaches this type; the
/// decoder caps each dimension at [`MAX_DIMENSION`](crate::packet::MAX_DIMENSION)
/// so a wire header can never demand an unbounded allocation here.
/// Lines may arrive in any order; each accepted write lands at byte offset
/// `3 * width * index` and replaces whatever was there.
///
/// The received-line count only ever increases, and the `done` and `valid`
/// flags are monotonic: once set they never revert. A re-received line index
/// is counted again rather than de-duplicated, mirroring the transmitting
/// system's tolerance for streams that never retransmit.
///
/// # Examples
///
/// ```
/// use rasterline::image::{ImageBuffer, LineStatus};
/// use rasterline::packet::{Geometry, ImageId, LineIndex};
/// use rasterline::policy::Timestamp;
///
/// let geometry = Geometry::new(2, 1);
/// let mut buffer = ImageBuffer::new(geometry, ImageId::new(7), Timestamp::new(100));
///
/// let status = buffer
///     .add_line(&[1, 2, 3], LineIndex::new(1))
///     .expect("line fits the buffer");
/// assert_eq!(status, LineStatus::Incomplete);
/// assert_eq!(buffer.pixels(), &[0, 0, 0, 1, 2, 3]);
///
/// let status = buffer
///     .add_line(&[4, 5, 6], LineIndex::zero())
///     .expect("line fits the buffer");
/// assert_eq!(status, LineStatus::Complete);
/// assert!(buffer.is_done());
/// ```
#[derive(Clone, Debug)]
pub struct ImageBuffer {
    id: ImageId,
    geometry: Geometry,
    pixels: Vec<u8>,
    lines_received: u32,
    done: bool,
    valid: bool,
    validity_divisor: NonZeroU32,
    start_time: Timestamp,
    finish_time: Option<Timestamp>,
}

impl ImageBuffer {
    /// Allocate a zeroed buffer for `geometry`, stamped with the send time
    /// of the first packet seen for this image.
    #[must_use]
    pub fn new(geometry: Geometry, id: ImageId, start_time: Timestamp) -> Self {
        Self::with_validity_divisor(geometry, id, start_time, DEFAULT_VALIDITY_DIVISOR)
    }

    /// Allocate a buffer whose display-validity threshold divides the height
    /// by `divisor` instead of the default.
    #[must_use]
    pub fn with_validity_divisor(
        geometry: Geometry,
        id: ImageId,
        start_time: Timestamp,
        divisor: NonZeroU32,
    ) -> Self {
        Self {
            id,
            geometry,
            pixels: vec![0; geometry.image_bytes()],
            lines_received: 0,
            done: false,
            valid: false,
            validity_divisor: divisor,
            start_time,
            finish_time: None,
        }
    }

    /// Copy one scan-line into the buffer at row `index`.
    ///
    /// The write is validated before any byte is copied, so a rejected line
    /// leaves the buffer unchanged. A repeated index silently overwrites the
    /// earlier bytes and is counted again.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::LineLengthMismatch`] when `line` is not exactly
    /// `3 * width` bytes, or [`ImageError::LineIndexOutOfRange`] when
    /// `index` does not fit the buffer's height.
    pub fn add_line(&mut self, line: &[u8], index: LineIndex) -> Result<LineStatus, ImageError> {
        let expected = self.geometry.line_bytes();
        if line.len() != expected {
            return Err(ImageError::LineLengthMismatch {
                expected,
                actual: line.len(),
            });
        }
        if index.get() >= self.geometry.height() {
            return Err(ImageError::LineIndexOutOfRange {
                index,
                height: self.geometry.height(),
            });
        }

        let offset = expected * index.get() as usize;
        self.pixels[offset..offset + expected].copy_from_slice(line);

        self.lines_received += 1;
        if is_valid_at(
            self.lines_received,
            self.geometry.height(),
            self.validity_divisor,
        ) {
            self.valid = true;
        }
        if !self.done && self.lines_received == self.geometry.height() {
            self.done = true;
            return Ok(LineStatus::Complete);
        }

        Ok(LineStatus::Incomplete)
    }

    /// Record the send time of the packet that completed the image.
    ///
    /// Single assignment is the caller's contract: the registry calls this
    /// exactly once, on the done transition. A repeat call overwrites the
    /// prior value.
    pub fn set_finish_time(&mut self, finish_time: Timestamp) {
        self.finish_time = Some(finish_time);
    }

    /// Milliseconds from the first to the final transmission, absorbing one
    /// timestamp wraparound. `None` until a finish time has been recorded.
    #[must_use]
    pub fn transmission_time(&self) -> Option<u32> {
        self.finish_time
            .map(|finish| elapsed(self.start_time, finish))
    }

    /// Identifier of the image this buffer reconstructs.
    #[must_use]
    pub const fn id(&self) -> ImageId { self.id }

    /// Dimensions fixed at construction.
    #[must_use]
    pub const fn geometry(&self) -> Geometry { self.geometry }

    /// Count of accepted line writes, duplicates included.
    #[must_use]
    pub const fn lines_received(&self) -> u32 { self.lines_received }

    /// Whether the received count has reached the image height.
    #[must_use]
    pub const fn is_done(&self) -> bool { self.done }

    /// Whether enough lines arrived for the image to be worth displaying.
    #[must_use]
    pub const fn is_valid(&self) -> bool { self.valid }

    /// Send time of the first packet seen for this image.
    #[must_use]
    pub const fn start_time(&self) -> Timestamp { self.start_time }

    /// Row-major RGB pixel storage for read-only display consumption.
    #[must_use]
    pub fn pixels(&self) -> &[u8] { &self.pixels }
}
