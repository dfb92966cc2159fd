//! Pure timing and validity rules consumed by the image buffer.
//!
//! These functions are stateless so the threshold arithmetic and wraparound
//! handling can be tested in isolation from buffer bookkeeping.

use std::num::NonZeroU32;

use derive_more::{Display, From, Into};

/// Largest value the sender's millisecond counter reaches before wrapping.
///
/// The wire carries timestamps as signed 32-bit integers, so the counter
/// occupies `0..=0x7FFF_FFFF` and wraps back to zero from there.
pub const TIMESTAMP_WRAP: u32 = 0x7FFF_FFFF;

/// Divisor applied to an image's height when judging display validity.
///
/// An image with more than `height / DEFAULT_VALIDITY_DIVISOR` lines
/// received is considered usable for display.
pub const DEFAULT_VALIDITY_DIVISOR: NonZeroU32 = NonZeroU32::new(5).expect("divisor is non-zero");

/// Millisecond timestamp sampled from the sender's wrapping 31-bit counter.
///
/// # Examples
///
/// ```
/// use rasterline::policy::Timestamp;
/// let ts = Timestamp::new(1_000);
/// assert_eq!(ts.get(), 1_000);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From, Into)]
#[display("{_0}")]
pub struct Timestamp(u32);

impl Timestamp {
    /// Wrap a raw counter reading.
    #[must_use]
    pub const fn new(value: u32) -> Self { Self(value) }

    /// Return the raw counter value.
    #[must_use]
    pub const fn get(self) -> u32 { self.0 }
}

/// Milliseconds elapsed between two counter readings, absorbing at most one
/// wraparound of the sender's clock.
///
/// When `start < finish` the counter did not wrap and the result is the
/// plain difference. Otherwise the counter is assumed to have wrapped exactly
/// once and the result is `(TIMESTAMP_WRAP - start) + finish`. More than one
/// wrap between the readings under-reports the true duration; the contract
/// assumes transmissions are far shorter than a full counter period.
///
/// # Examples
///
/// ```
/// use rasterline::policy::{Timestamp, elapsed};
///
/// assert_eq!(elapsed(Timestamp::new(100), Timestamp::new(350)), 250);
/// assert_eq!(
///     elapsed(Timestamp::new(0x7FFF_FFF0), Timestamp::new(10)),
///     25,
/// );
/// ```
#[must_use]
pub fn elapsed(start: Timestamp, finish: Timestamp) -> u32 {
    if start.get() < finish.get() {
        finish.get() - start.get()
    } else {
        // Wrapping arithmetic keeps readings outside the signed range from
        // panicking in debug builds; such inputs already violate the wire
        // contract and yield an unspecified duration.
        TIMESTAMP_WRAP
            .wrapping_sub(start.get())
            .wrapping_add(finish.get())
    }
}

/// Whether an image with `lines_received` of `height` total lines has
/// crossed the display-validity threshold.
///
/// The rule is `lines_received > height / divisor` with integer division,
/// so validity is independent of which specific line indices arrived.
///
/// # Examples
///
/// ```
/// use rasterline::policy::{DEFAULT_VALIDITY_DIVISOR, is_valid_at};
///
/// assert!(!is_valid_at(2, 10, DEFAULT_VALIDITY_DIVISOR));
/// assert!(is_valid_at(3, 10, DEFAULT_VALIDITY_DIVISOR));
/// ```
#[must_use]
pub fn is_valid_at(lines_received: u32, height: u32, divisor: NonZeroU32) -> bool {
    lines_received > height / divisor.get()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{DEFAULT_VALIDITY_DIVISOR, TIMESTAMP_WRAP, Timestamp, elapsed, is_valid_at};

    #[rstest]
    #[case::no_wrap(100, 350, 250)]
    #[case::single_wrap(0x7FFF_FFF0, 10, 25)]
    #[case::equal_readings(500, 500, TIMESTAMP_WRAP)]
    #[case::finish_behind_start(10, 5, TIMESTAMP_WRAP - 10 + 5)]
    #[case::wrap_to_zero(TIMESTAMP_WRAP, 0, 0)]
    fn elapsed_absorbs_one_wraparound(#[case] start: u32, #[case] finish: u32, #[case] want: u32) {
        assert_eq!(elapsed(Timestamp::new(start), Timestamp::new(finish)), want);
    }

    #[rstest]
    #[case::below_threshold(2, 10, false)]
    #[case::just_above_threshold(3, 10, true)]
    #[case::zero_lines(0, 10, false)]
    #[case::full_image(10, 10, true)]
    #[case::tiny_image_first_line(1, 1, true)]
    #[case::threshold_rounds_down(1, 9, false)]
    #[case::threshold_rounds_down_crossed(2, 9, true)]
    fn validity_threshold_uses_integer_division(
        #[case] lines_received: u32,
        #[case] height: u32,
        #[case] valid: bool,
    ) {
        assert_eq!(
            is_valid_at(lines_received, height, DEFAULT_VALIDITY_DIVISOR),
            valid,
        );
    }
}
