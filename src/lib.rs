//! Public API for the `rasterline` library.
//!
//! This crate reassembles raster images from a live stream of unreliable,
//! unordered datagrams, each carrying one or more scan-lines of interleaved
//! RGB pixel data plus framing metadata. Decoded line packets are routed
//! through an [`ImageRegistry`] that owns one [`ImageBuffer`] per in-flight
//! image, tracks completion and transmission timing under 32-bit timestamp
//! wraparound, and classifies partially received images as usable for
//! display or not.
//!
//! The crate performs no socket I/O: callers feed already received datagram
//! payload bytes into [`packet::decode_datagram`] (or
//! [`packet::decode_line`] for pre-split payloads) and inspect the resulting
//! buffers. The optional [`session::ReceiverSession`] bundles decode and
//! routing into a single call with diagnostic logging.

pub mod byte_order;
pub mod diagnostics;
pub mod image;
pub mod packet;
pub mod policy;
pub mod registry;
pub mod session;

pub use diagnostics::DiagnosticToggles;
pub use image::{ImageBuffer, ImageError, LineStatus};
pub use packet::{
    DecodeError,
    Geometry,
    ImageId,
    LineHeader,
    LineIndex,
    LinePacket,
    LineRecords,
    decode_datagram,
    decode_line,
};
pub use policy::{DEFAULT_VALIDITY_DIVISOR, Timestamp, elapsed, is_valid_at};
pub use registry::{ImageRegistry, RouteError};
pub use session::{DatagramSummary, ReceiverSession};
