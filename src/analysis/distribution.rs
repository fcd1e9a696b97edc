//! Observed leading digit distribution and its comparison with Benford's Law.

use super::leading_digit::leading_digit;
use super::reference::{digit_index, BENFORD_PERCENTAGES, DIGITS, DIGIT_COUNT};
use crate::api::errors::BenfordError;
use serde::Serialize;
use tracing::debug;

type Result<T> = core::result::Result<T, BenfordError>;

/// Observed versus expected frequency of a single leading digit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DigitComparison {
    /// The leading digit, `1..=9`.
    pub digit: u8,
    /// Number of magnitudes starting with [`Self::digit`].
    pub count: usize,
    /// Share of magnitudes starting with [`Self::digit`], `0..=100`.
    pub observed_percent: f64,
    /// Share predicted by Benford's Law, `0..=100`.
    pub expected_percent: f64,
}

/// Per-digit comparison of a set of magnitudes against Benford's Law.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenfordAnalysis {
    total: usize,
    digits: [DigitComparison; DIGIT_COUNT],
}

impl BenfordAnalysis {
    /// Builds the comparison from per-digit counts, where `counts[d - 1]`
    /// is the number of magnitudes with leading digit `d`.
    ///
    /// # Errors
    ///
    /// [`BenfordError::EmptyInput`] if all counts are zero.
    pub fn from_counts(counts: [usize; DIGIT_COUNT]) -> Result<Self> {
        let total: usize = counts.iter().sum();
        if total == 0 {
            return Err(BenfordError::EmptyInput);
        }

        let mut digits = [DigitComparison {
            digit: 0,
            count: 0,
            observed_percent: 0.0,
            expected_percent: 0.0,
        }; DIGIT_COUNT];

        for ((slot, digit), (&count, &expected_percent)) in digits
            .iter_mut()
            .zip(DIGITS)
            .zip(counts.iter().zip(BENFORD_PERCENTAGES.iter()))
        {
            *slot = DigitComparison {
                digit,
                count,
                observed_percent: (count as f64 / total as f64) * 100.0,
                expected_percent,
            };
        }

        Ok(Self { total, digits })
    }

    /// Number of magnitudes analyzed.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Comparisons for digits 1 to 9, in ascending order.
    pub fn digits(&self) -> &[DigitComparison] {
        &self.digits
    }

    /// Comparison for a single digit, or [`None`] if it isn't in `1..=9`.
    pub fn digit(&self, digit: u8) -> Option<&DigitComparison> {
        digit_index(digit).map(|index| &self.digits[index])
    }

    /// Observed percentages, indexed by `digit - 1`.
    pub fn observed_percentages(&self) -> [f64; DIGIT_COUNT] {
        self.digits.map(|entry| entry.observed_percent)
    }

    /// The comparison as `(digit, observed_percent, expected_percent)` rows.
    pub fn as_tuples(&self) -> Vec<(u8, f64, f64)> {
        self.digits
            .iter()
            .map(|entry| (entry.digit, entry.observed_percent, entry.expected_percent))
            .collect()
    }
}

/// Counts leading digits, `counts[d - 1]` being the count for digit `d`.
///
/// # Errors
///
/// [`BenfordError::InvalidInput`] on the first magnitude that is not positive and finite.
pub fn count_leading_digits(magnitudes: &[f64]) -> Result<[usize; DIGIT_COUNT]> {
    let mut counts = [0usize; DIGIT_COUNT];
    for &magnitude in magnitudes {
        let digit = leading_digit(magnitude)?;
        counts[usize::from(digit - 1)] += 1;
    }
    Ok(counts)
}

/// Compares the leading digits of `magnitudes` against Benford's Law.
///
/// # Errors
///
/// - [`BenfordError::EmptyInput`] if `magnitudes` is empty.
/// - [`BenfordError::InvalidInput`] if any magnitude is not positive and finite.
///   Such values are never skipped or clamped.
pub fn analyze_benford(magnitudes: &[f64]) -> Result<BenfordAnalysis> {
    if magnitudes.is_empty() {
        return Err(BenfordError::EmptyInput);
    }

    let counts = count_leading_digits(magnitudes)?;
    debug!(total = magnitudes.len(), ?counts, "counted leading digits");
    BenfordAnalysis::from_counts(counts)
}
