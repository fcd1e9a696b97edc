//! The first digit distribution predicted by Benford's Law.

use core::ops::RangeInclusive;

/// All possible leading digits, in ascending order.
pub const DIGITS: RangeInclusive<u8> = 1..=9;

/// Number of possible leading digits.
pub const DIGIT_COUNT: usize = 9;

/// Expected percentage of values with leading digit `d`, stored at index `d - 1`.
///
/// These are `log10(1 + 1/d) * 100`, rounded to one decimal place.
pub const BENFORD_PERCENTAGES: [f64; DIGIT_COUNT] = [30.1, 17.6, 12.5, 9.7, 7.9, 6.7, 5.8, 5.1, 4.6];

/// Returns the expected percentage for `digit`, or [`None`] if it isn't in `1..=9`.
pub fn expected_percent(digit: u8) -> Option<f64> {
    digit_index(digit).map(|index| BENFORD_PERCENTAGES[index])
}

/// Maps a leading digit to its index in per-digit arrays.
pub(crate) fn digit_index(digit: u8) -> Option<usize> {
    DIGITS.contains(&digit).then(|| usize::from(digit - 1))
}
