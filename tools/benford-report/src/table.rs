//! ASCII tables for leading digit comparisons, using the [`tabled`] crate.

use pkgsize_benford::prelude::*;
use tabled::{Table, Tabled};

/// A single row of the digit comparison table.
#[derive(Debug, Clone, Tabled)]
pub struct DigitRow {
    #[tabled(rename = "Digit")]
    pub digit: u8,
    #[tabled(rename = "Actual %")]
    pub actual: String,
    #[tabled(rename = "Expected %")]
    pub expected: String,
    #[tabled(rename = "Count")]
    pub count: usize,
}

impl From<&DigitComparison> for DigitRow {
    fn from(entry: &DigitComparison) -> Self {
        Self {
            digit: entry.digit,
            actual: format!("{:.1}", entry.observed_percent),
            expected: format!("{:.1}", entry.expected_percent),
            count: entry.count,
        }
    }
}

/// Formats the comparison of every digit as an ASCII table.
///
/// # Arguments
/// * `analysis` - The analysis to format
/// * `title` - Optional title, underlined, placed above the table
pub fn format_digit_table(analysis: &BenfordAnalysis, title: Option<&str>) -> String {
    let rows: Vec<DigitRow> = analysis.digits().iter().map(DigitRow::from).collect();
    let table = Table::new(rows).to_string();

    match title {
        Some(title) => format!("{}\n{}\n{}", title, "=".repeat(title.len()), table),
        None => table,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(100.0 / 3.0, 30.1, "33.3", "30.1")]
    #[case(0.0, 4.6, "0.0", "4.6")]
    #[case(100.0, 9.7, "100.0", "9.7")]
    #[case(66.66, 17.6, "66.7", "17.6")]
    #[case(12.04, 12.5, "12.0", "12.5")]
    fn row_rounds_to_one_decimal(
        #[case] observed_percent: f64,
        #[case] expected_percent: f64,
        #[case] actual: &str,
        #[case] expected: &str,
    ) {
        let row = DigitRow::from(&DigitComparison {
            digit: 1,
            count: 1,
            observed_percent,
            expected_percent,
        });
        assert_eq!(row.actual, actual);
        assert_eq!(row.expected, expected);
    }

    #[test]
    fn formats_all_digits() {
        let analysis = analyze_benford(&[10.0, 20.0, 30.0]).unwrap();
        let table = format_digit_table(&analysis, Some("Overall"));

        assert!(table.starts_with("Overall\n======="));
        for header in ["Digit", "Actual %", "Expected %", "Count"] {
            assert!(table.contains(header), "missing {header}");
        }
        assert!(table.contains("33.3"));
        assert!(table.contains("4.6"));
        assert!(table.contains("0.0"));

        let untitled = format_digit_table(&analysis, None);
        assert!(!untitled.contains("Overall"));
        assert!(untitled.contains("Digit"));
    }
}
