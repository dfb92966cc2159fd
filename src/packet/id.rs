use derive_more::{Display, From, Into};

/// Identifier correlating scan-lines that belong to the same image.
///
/// The transmitter numbers images with a running counter, so ids repeat only
/// after the counter wraps or the sender restarts. A re-used id after
/// [`retire`](crate::registry::ImageRegistry::retire) starts a fresh logical
/// image.
///
/// # Examples
///
/// ```
/// use rasterline::packet::ImageId;
/// let id = ImageId::new(42);
/// assert_eq!(id.get(), 42);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From, Into)]
#[display("{_0}")]
pub struct ImageId(u32);

impl ImageId {
    /// Create a new identifier.
    #[must_use]
    pub const fn new(value: u32) -> Self { Self(value) }

    /// Return the inner numeric identifier.
    #[must_use]
    pub const fn get(self) -> u32 { self.0 }
}
