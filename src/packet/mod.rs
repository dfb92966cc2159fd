//! Wire model and decoder for inbound line packets.
//!
//! Each datagram payload carries a leading record count followed by one or
//! more line records. A record frames exactly one scan-line of one image:
//! a fixed header naming the image, the line's position, the image geometry,
//! and the sender's timestamp, followed by the line's raw RGB bytes. The
//! sub-modules each cover a single concept so the decoder stays small and
//! easy to audit.

pub mod decoder;
pub mod error;
pub mod geometry;
pub mod header;
pub mod id;
pub mod index;

pub use decoder::{LINE_HEADER_BYTES, MAX_DIMENSION, LineRecords, decode_datagram, decode_line};
pub use error::DecodeError;
pub use geometry::Geometry;
pub use header::{LineHeader, LinePacket};
pub use id::ImageId;
pub use index::LineIndex;

#[cfg(test)]
mod tests;
