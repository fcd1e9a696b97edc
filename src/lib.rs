//! # pkgsize-benford
//!
//! Extracts artifact sizes from package manager logs and checks whether their
//! leading digits follow Benford's Law.
//!
//! ```
//! use pkgsize_benford::prelude::*;
//!
//! let log = "Downloaded foo-1.0 (10 KiB) Downloaded bar-2.0 (20 KiB) Downloaded baz-3.0 (30 KiB)";
//! let sizes = extract_sizes(log);
//! assert_eq!(sizes, vec![10.0, 20.0, 30.0]);
//!
//! let analysis = analyze_benford(&sizes).unwrap();
//! assert_eq!(analysis.digit(4).unwrap().observed_percent, 0.0);
//! ```

/// Public High Level API
pub mod api {
    pub mod enums {
        /// How well a distribution matches Benford's Law.
        pub mod fit_verdict;

        /// Units sizes are reported in.
        pub mod size_unit;
    }

    pub mod errors;
    pub mod extractor_settings;
}

/// Pulling sizes out of raw log text.
pub mod extract {
    pub mod size_extractor;
}

/// Leading digit statistics.
pub mod analysis {
    pub mod chi_square;
    pub mod distribution;
    pub mod leading_digit;

    /// The fixed Benford's Law reference distribution.
    pub mod reference;
    pub mod size_ranges;
}

/// Commonly used items, for `use pkgsize_benford::prelude::*`.
pub mod prelude {
    pub use crate::analysis::chi_square::{chi_square_test, ChiSquareTest};
    pub use crate::analysis::distribution::{analyze_benford, BenfordAnalysis, DigitComparison};
    pub use crate::analysis::leading_digit::leading_digit;
    pub use crate::analysis::reference::{expected_percent, BENFORD_PERCENTAGES};
    pub use crate::analysis::size_ranges::{
        analyze_size_ranges, RangeAnalysis, SizeRange, DEFAULT_SIZE_RANGES,
    };
    pub use crate::api::enums::fit_verdict::FitVerdict;
    pub use crate::api::enums::size_unit::SizeUnit;
    pub use crate::api::errors::BenfordError;
    pub use crate::api::extractor_settings::ExtractorSettings;
    pub use crate::extract::size_extractor::{extract_sizes, SizeExtractor, SizeToken};
}
