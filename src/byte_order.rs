//! Helpers for explicit network byte-order conversions.
//!
//! The line-packet wire contract encodes every header integer in network
//! byte order (big-endian), matching the `htonl` calls on the transmitting
//! side. Keeping the conversions in one place lets the decoder stay explicit
//! about wire endianness without scattering `to_be_bytes` calls through
//! protocol code.

/// Serialise a `u32` in network byte order (big-endian).
///
/// # Examples
///
/// ```
/// use rasterline::byte_order::write_network_u32;
///
/// assert_eq!(write_network_u32(0x1234_5678), [0x12, 0x34, 0x56, 0x78]);
/// ```
#[must_use]
pub fn write_network_u32(value: u32) -> [u8; 4] { value.to_be_bytes() }

/// Parse a network-order `u32` from its on-wire representation.
///
/// # Examples
///
/// ```
/// use rasterline::byte_order::read_network_u32;
///
/// assert_eq!(read_network_u32([0x12, 0x34, 0x56, 0x78]), 0x1234_5678);
/// ```
#[must_use]
pub fn read_network_u32(bytes: [u8; 4]) -> u32 { u32::from_be_bytes(bytes) }
