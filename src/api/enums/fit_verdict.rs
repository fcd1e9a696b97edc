use serde::Serialize;

/// How well an observed distribution follows Benford's Law, judged by
/// a chi-square test with 8 degrees of freedom.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
pub enum FitVerdict {
    /// p > 0.05
    Good,

    /// 0.01 < p < 0.05
    Marginal,

    /// p < 0.01
    Poor,
}

impl FitVerdict {
    /// Human readable interpretation of the verdict.
    pub const fn description(self) -> &'static str {
        match self {
            FitVerdict::Good => "Good fit! The data follows Benford's Law (p > 0.05)",
            FitVerdict::Marginal => "Marginal fit to Benford's Law (0.01 < p < 0.05)",
            FitVerdict::Poor => "Poor fit. Data does not follow Benford's Law (p < 0.01)",
        }
    }
}
