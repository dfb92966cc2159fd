//! Fixed image dimensions declared by every line record.

use derive_more::Display;

/// Bytes occupied by one pixel on the wire (interleaved RGB).
pub const BYTES_PER_PIXEL: usize = 3;

/// Image dimensions in pixels, fixed for an image's whole lifetime.
///
/// Every line record re-declares the geometry of the image it belongs to;
/// the registry rejects records whose declaration conflicts with the buffer
/// the image was constructed with.
///
/// # Examples
///
/// ```
/// use rasterline::packet::Geometry;
///
/// let geometry = Geometry::new(10, 4);
/// assert_eq!(geometry.line_bytes(), 12);
/// assert_eq!(geometry.image_bytes(), 120);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
#[display("{width}x{height}")]
pub struct Geometry {
    height: u32,
    width: u32,
}

impl Geometry {
    /// Create a geometry of `height` rows by `width` columns.
    #[must_use]
    pub const fn new(height: u32, width: u32) -> Self { Self { height, width } }

    /// Number of rows in the image.
    #[must_use]
    pub const fn height(self) -> u32 { self.height }

    /// Number of columns in the image.
    #[must_use]
    pub const fn width(self) -> u32 { self.width }

    /// Bytes carried by one scan-line: `3 * width`.
    #[must_use]
    pub const fn line_bytes(self) -> usize { BYTES_PER_PIXEL * self.width as usize }

    /// Bytes required to store the whole image: `3 * height * width`.
    #[must_use]
    pub const fn image_bytes(self) -> usize {
        BYTES_PER_PIXEL * self.height as usize * self.width as usize
    }
}
