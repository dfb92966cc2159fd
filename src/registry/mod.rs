//! Session-wide routing of decoded line packets to image buffers.
//!
//! [`ImageRegistry`] owns one [`ImageBuffer`] per in-flight image id,
//! creating buffers on first-seen ids and surfacing the most recently
//! routed buffer for the display collaborator. It holds no eviction policy
//! of its own: the caller decides when to [`retire`](ImageRegistry::retire)
//! completed or stale images.
//!
//! All mutation flows through `&mut self`, so one registry forms a single
//! mutual-exclusion domain. A caller that receives datagrams on several
//! threads must either wrap the registry in a `Mutex` or funnel decoded
//! packets through a single-consumer queue; concurrent unsynchronised line
//! writes to the same buffer would race on the received count and on
//! overlapping byte ranges.

pub mod error;

pub use error::RouteError;

use std::{
    collections::{HashMap, hash_map::Entry},
    num::NonZeroU32,
};

use crate::{
    image::{ImageBuffer, LineStatus},
    packet::{ImageId, LinePacket},
    policy::DEFAULT_VALIDITY_DIVISOR,
};

/// Owned map of in-flight and completed image buffers for one receiving
/// session.
///
/// # Examples
///
/// ```
/// use rasterline::packet::{Geometry, ImageId, LineHeader, LineIndex, LinePacket};
/// use rasterline::policy::Timestamp;
/// use rasterline::registry::ImageRegistry;
///
/// let mut registry = ImageRegistry::new();
/// let header = LineHeader::new(
///     ImageId::new(1),
///     LineIndex::zero(),
///     Geometry::new(1, 2),
///     Timestamp::new(40),
/// );
/// let packet = LinePacket::new(header, vec![9u8; 6].into());
///
/// let buffer = registry.route_line(&packet).expect("line routed");
/// assert!(buffer.is_done());
/// assert_eq!(registry.current().map(|b| b.id()), Some(ImageId::new(1)));
/// ```
#[derive(Debug)]
pub struct ImageRegistry {
    images: HashMap<ImageId, ImageBuffer>,
    current: Option<ImageId>,
    validity_divisor: NonZeroU32,
}

impl Default for ImageRegistry {
    fn default() -> Self { Self::new() }
}

impl ImageRegistry {
    /// Create an empty registry using the default display-validity divisor.
    #[must_use]
    pub fn new() -> Self { Self::with_validity_divisor(DEFAULT_VALIDITY_DIVISOR) }

    /// Create an empty registry whose buffers judge validity against
    /// `height / divisor`.
    #[must_use]
    pub fn with_validity_divisor(divisor: NonZeroU32) -> Self {
        Self {
            images: HashMap::new(),
            current: None,
            validity_divisor: divisor,
        }
    }

    /// Route one decoded scan-line to its image buffer.
    ///
    /// An unknown image id is the normal creation path, never an error: a
    /// fresh buffer is allocated with the packet's send time as the image
    /// start time. On the write that completes the image, the packet's send
    /// time is recorded as the finish time. The routed image becomes the
    /// [`current`](Self::current) one and its buffer is returned for
    /// inspection.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::GeometryConflict`] when the packet declares
    /// different dimensions than the existing buffer for its id, or a
    /// [`RouteError::Image`] when the buffer rejects the write. Either way
    /// the buffer is left unchanged and the packet should be dropped.
    pub fn route_line(&mut self, packet: &LinePacket) -> Result<&ImageBuffer, RouteError> {
        let header = packet.header();
        let id = header.image_id();

        let buffer = match self.images.entry(id) {
            Entry::Occupied(entry) => {
                let buffer = entry.into_mut();
                if buffer.geometry() != header.geometry() {
                    return Err(RouteError::GeometryConflict {
                        id,
                        existing: buffer.geometry(),
                        declared: header.geometry(),
                    });
                }
                buffer
            }
            Entry::Vacant(vacant) => vacant.insert(ImageBuffer::with_validity_divisor(
                header.geometry(),
                id,
                header.timestamp(),
                self.validity_divisor,
            )),
        };

        let status = buffer.add_line(packet.pixels(), header.line_index())?;
        if status == LineStatus::Complete {
            buffer.set_finish_time(header.timestamp());
        }

        self.current = Some(id);
        Ok(buffer)
    }

    /// The most recently routed buffer, the one the display should render.
    #[must_use]
    pub fn current(&self) -> Option<&ImageBuffer> {
        self.current.and_then(|id| self.images.get(&id))
    }

    /// Look up the buffer for `id`.
    #[must_use]
    pub fn get(&self, id: ImageId) -> Option<&ImageBuffer> { self.images.get(&id) }

    /// Whether a buffer exists for `id`.
    #[must_use]
    pub fn contains(&self, id: ImageId) -> bool { self.images.contains_key(&id) }

    /// Remove and return the buffer for `id`.
    ///
    /// When to retire is the caller's policy: immediately on completion,
    /// after a display refresh, or on a staleness timeout. A later packet
    /// for the same id starts a fresh image from scratch. Retiring the
    /// current image leaves the registry with no current buffer.
    pub fn retire(&mut self, id: ImageId) -> Option<ImageBuffer> {
        let buffer = self.images.remove(&id);
        if buffer.is_some() && self.current == Some(id) {
            self.current = None;
        }
        buffer
    }

    /// Number of buffers currently held.
    #[must_use]
    pub fn len(&self) -> usize { self.images.len() }

    /// Whether the registry holds no buffers.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.images.is_empty() }
}
