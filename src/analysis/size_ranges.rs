//! Breaks a set of magnitudes into size ranges and analyzes each one separately.
//!
//! Benford's Law tends to hold over data spanning several orders of magnitude,
//! so a per-range breakdown shows whether conformance comes from one band of
//! package sizes or from the whole population.

use super::chi_square::{chi_square_test, ChiSquareTest};
use super::distribution::{analyze_benford, BenfordAnalysis};
use super::leading_digit::leading_digit;
use crate::api::errors::BenfordError;
use core::fmt;
use serde::Serialize;

type Result<T> = core::result::Result<T, BenfordError>;

/// A half-open range of sizes in KiB, `min_kib <= size < max_kib`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SizeRange {
    pub min_kib: f64,
    /// May be [`f64::INFINITY`] for an unbounded range.
    pub max_kib: f64,
}

impl SizeRange {
    pub const fn new(min_kib: f64, max_kib: f64) -> Self {
        Self { min_kib, max_kib }
    }

    /// Returns true if `kib` falls within this range.
    pub fn contains(&self, kib: f64) -> bool {
        kib >= self.min_kib && kib < self.max_kib
    }
}

impl fmt::Display for SizeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.max_kib.is_infinite() {
            write!(f, "{:.0} KiB and above", self.min_kib)
        } else {
            write!(f, "{:.0} KiB - {:.0} KiB", self.min_kib, self.max_kib)
        }
    }
}

/// Decades of 0-100 KiB, 100-1000 KiB, 1000-10000 KiB and 10000 KiB upwards.
pub const DEFAULT_SIZE_RANGES: [SizeRange; 4] = [
    SizeRange::new(0.0, 100.0),
    SizeRange::new(100.0, 1000.0),
    SizeRange::new(1000.0, 10_000.0),
    SizeRange::new(10_000.0, f64::INFINITY),
];

/// Benford analysis of the magnitudes within a single [`SizeRange`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeAnalysis {
    pub range: SizeRange,
    /// [`None`] when no magnitude falls within [`Self::range`].
    pub analysis: Option<BenfordAnalysis>,
    pub chi_square: Option<ChiSquareTest>,
}

impl RangeAnalysis {
    /// Number of magnitudes within the range.
    pub fn count(&self) -> usize {
        self.analysis.as_ref().map_or(0, BenfordAnalysis::total)
    }
}

/// Analyzes the magnitudes falling within each of `ranges`, in the order given.
///
/// Ranges with no magnitudes are reported with an empty analysis rather than
/// an error. Ranges may overlap; a magnitude is counted in every range
/// containing it.
///
/// # Errors
///
/// [`BenfordError::InvalidInput`] if any magnitude is not positive and finite,
/// whether or not a range contains it.
pub fn analyze_size_ranges(magnitudes: &[f64], ranges: &[SizeRange]) -> Result<Vec<RangeAnalysis>> {
    for &magnitude in magnitudes {
        leading_digit(magnitude)?;
    }

    ranges
        .iter()
        .map(|range| {
            let in_range: Vec<f64> = magnitudes
                .iter()
                .copied()
                .filter(|&kib| range.contains(kib))
                .collect();

            let analysis = match analyze_benford(&in_range) {
                Ok(analysis) => Some(analysis),
                Err(BenfordError::EmptyInput) => None,
                Err(err) => return Err(err),
            };

            Ok(RangeAnalysis {
                range: *range,
                chi_square: analysis.as_ref().map(chi_square_test),
                analysis,
            })
        })
        .collect()
}
