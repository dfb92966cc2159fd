//! Zero-based scan-line positioning within an image.

use derive_more::{Display, From};

/// Zero-based row index of a scan-line within its image's height.
///
/// # Examples
///
/// ```
/// use rasterline::packet::LineIndex;
/// let index = LineIndex::new(3);
/// assert_eq!(index.get(), 3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From)]
#[display("{_0}")]
pub struct LineIndex(u32);

impl LineIndex {
    /// Construct an index from a `u32` value.
    #[must_use]
    pub const fn new(value: u32) -> Self { Self(value) }

    /// Return the first row of an image.
    #[must_use]
    pub const fn zero() -> Self { Self(0) }

    /// Return the underlying numeric value.
    #[must_use]
    pub const fn get(self) -> u32 { self.0 }
}

impl From<LineIndex> for u32 {
    fn from(value: LineIndex) -> Self { value.0 }
}
