//! Per-image reconstruction target and its bookkeeping.
//!
//! An [`ImageBuffer`] owns the pixel storage for one image id, fills it one
//! scan-line at a time in whatever order the lines arrive, and tracks the
//! completion and display-validity thresholds along with transmission
//! timing.

pub mod buffer;
pub mod error;

pub use buffer::{ImageBuffer, LineStatus};
pub use error::ImageError;
