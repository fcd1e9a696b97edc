//! Pearson's chi-square goodness of fit against Benford's Law.

use super::distribution::BenfordAnalysis;
use super::reference::DIGIT_COUNT;
use crate::api::enums::fit_verdict::FitVerdict;
use serde::Serialize;

/// Nine digit categories, one constraint (the total).
pub const DEGREES_OF_FREEDOM: u32 = (DIGIT_COUNT as u32) - 1;

/// Chi-square critical value for 8 degrees of freedom at α = 0.05.
pub const CRITICAL_VALUE_P05: f64 = 15.51;

/// Chi-square critical value for 8 degrees of freedom at α = 0.01.
pub const CRITICAL_VALUE_P01: f64 = 20.09;

/// Result of a chi-square test of observed leading digits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChiSquareTest {
    /// The chi-square statistic.
    pub statistic: f64,
    pub degrees_of_freedom: u32,
    pub verdict: FitVerdict,
}

impl FitVerdict {
    /// Classifies a chi-square statistic with [`DEGREES_OF_FREEDOM`] degrees of freedom.
    pub fn from_statistic(statistic: f64) -> Self {
        if statistic < CRITICAL_VALUE_P05 {
            FitVerdict::Good
        } else if statistic < CRITICAL_VALUE_P01 {
            FitVerdict::Marginal
        } else {
            FitVerdict::Poor
        }
    }
}

/// Runs a chi-square goodness of fit test on `analysis`.
///
/// Expected counts are `expected_percent / 100 * total`. These are never zero
/// since every Benford percentage is positive and an analysis is never empty.
pub fn chi_square_test(analysis: &BenfordAnalysis) -> ChiSquareTest {
    let total = analysis.total() as f64;
    let statistic = analysis
        .digits()
        .iter()
        .map(|entry| {
            let expected = (entry.expected_percent / 100.0) * total;
            let observed = entry.count as f64;
            (observed - expected).powi(2) / expected
        })
        .sum();

    ChiSquareTest {
        statistic,
        degrees_of_freedom: DEGREES_OF_FREEDOM,
        verdict: FitVerdict::from_statistic(statistic),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::distribution::analyze_benford;
    use rstest::rstest;

    #[test]
    fn perfect_benford_counts_fit() {
        let analysis = BenfordAnalysis::from_counts([301, 176, 125, 97, 79, 67, 58, 51, 46]).unwrap();
        let test = chi_square_test(&analysis);

        assert!(test.statistic.abs() < 1e-9, "statistic {}", test.statistic);
        assert_eq!(test.verdict, FitVerdict::Good);
        assert_eq!(test.degrees_of_freedom, 8);
    }

    #[test]
    fn three_distinct_digits() {
        let analysis = analyze_benford(&[10.0, 20.0, 30.0]).unwrap();
        let test = chi_square_test(&analysis);

        // Hand computed from expected counts 0.903, 0.528, 0.375, ...
        assert!((test.statistic - 2.66803).abs() < 1e-4, "statistic {}", test.statistic);
        assert_eq!(test.verdict, FitVerdict::Good);
    }

    #[test]
    fn uniform_nines_fit_poorly() {
        let analysis = analyze_benford(&[9.0; 100]).unwrap();
        assert_eq!(chi_square_test(&analysis).verdict, FitVerdict::Poor);
    }

    #[rstest]
    #[case(0.0, FitVerdict::Good)]
    #[case(15.50, FitVerdict::Good)]
    #[case(15.51, FitVerdict::Marginal)]
    #[case(20.0, FitVerdict::Marginal)]
    #[case(20.09, FitVerdict::Poor)]
    #[case(1000.0, FitVerdict::Poor)]
    fn verdict_thresholds(#[case] statistic: f64, #[case] expected: FitVerdict) {
        assert_eq!(FitVerdict::from_statistic(statistic), expected);
    }
}
