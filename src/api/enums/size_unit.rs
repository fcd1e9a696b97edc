use core::fmt;
use core::str::FromStr;
use serde::Serialize;

/// A size unit recognized in package manager logs.
///
/// All magnitudes are normalized to [`SizeUnit::Kibibyte`].
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize)]
pub enum SizeUnit {
    /// `KiB`, the normalized unit.
    Kibibyte,

    /// `MiB`, 1024 [`SizeUnit::Kibibyte`]s.
    Mebibyte,
}

impl SizeUnit {
    /// Number of KiB in one of this unit.
    pub const fn ratio(self) -> f64 {
        match self {
            SizeUnit::Kibibyte => 1.0,
            SizeUnit::Mebibyte => 1024.0,
        }
    }

    /// The case-sensitive label used in log text.
    pub const fn label(self) -> &'static str {
        match self {
            SizeUnit::Kibibyte => "KiB",
            SizeUnit::Mebibyte => "MiB",
        }
    }

    /// Converts a value in this unit to KiB.
    pub fn to_kib(self, value: f64) -> f64 {
        value * self.ratio()
    }
}

impl fmt::Display for SizeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when parsing a label that isn't `KiB` or `MiB`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unrecognized size unit: {0}")]
pub struct UnknownSizeUnit(pub String);

impl FromStr for SizeUnit {
    type Err = UnknownSizeUnit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "KiB" => Ok(SizeUnit::Kibibyte),
            "MiB" => Ok(SizeUnit::Mebibyte),
            other => Err(UnknownSizeUnit(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("KiB", SizeUnit::Kibibyte)]
    #[case("MiB", SizeUnit::Mebibyte)]
    fn parses_labels(#[case] label: &str, #[case] expected: SizeUnit) {
        assert_eq!(label.parse::<SizeUnit>(), Ok(expected));
        assert_eq!(expected.to_string(), label);
    }

    #[rstest]
    #[case("kib")]
    #[case("MIB")]
    #[case("GiB")]
    #[case("")]
    fn rejects_unknown_labels(#[case] label: &str) {
        assert!(label.parse::<SizeUnit>().is_err());
    }

    #[test]
    fn converts_to_kib() {
        assert_eq!(SizeUnit::Mebibyte.to_kib(2.0), 2048.0);
        assert_eq!(SizeUnit::Kibibyte.to_kib(512.0), 512.0);
    }
}
