//! Errors surfaced while routing decoded packets.

use thiserror::Error;

use crate::{
    image::ImageError,
    packet::{Geometry, ImageId},
};

/// A packet the registry refused to apply. Routing errors are recoverable:
/// the datagram is dropped and processing continues with the next one.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    /// A later packet declared different dimensions than the buffer its
    /// image id was constructed with.
    #[error("geometry conflict for image {id}: buffer is {existing}, packet declares {declared}")]
    GeometryConflict {
        /// Image id the conflicting packet named.
        id: ImageId,
        /// Dimensions the buffer was constructed with.
        existing: Geometry,
        /// Dimensions the packet declared.
        declared: Geometry,
    },
    /// The image buffer rejected the line write.
    #[error(transparent)]
    Image(#[from] ImageError),
}
