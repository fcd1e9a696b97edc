//! Builds the report printed by `benford-report`.

use crate::table::format_digit_table;
use bytesize::ByteSize;
use pkgsize_benford::analysis::chi_square::{CRITICAL_VALUE_P01, CRITICAL_VALUE_P05};
use pkgsize_benford::prelude::*;
use serde::Serialize;
use std::borrow::Cow;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur while producing a report
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to read input file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Analysis failed: {0}")]
    Analysis(#[from] BenfordError),

    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

type Result<T> = core::result::Result<T, ReportError>;

/// Everything shown to the user for a single log file.
#[derive(Debug, Serialize)]
pub struct Report {
    /// Number of sizes extracted from the log.
    pub package_count: usize,
    /// Sum of all extracted sizes in KiB.
    pub total_kib: f64,
    pub overall: BenfordAnalysis,
    pub chi_square: ChiSquareTest,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ranges: Option<Vec<RangeAnalysis>>,
}

/// Reads the log at `path`.
///
/// Logs occasionally contain bytes that aren't valid UTF-8; those are replaced
/// rather than failing the whole read.
pub fn load_log(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;
    let text = String::from_utf8_lossy(&bytes);
    if matches!(text, Cow::Owned(_)) {
        warn!(path = %path.display(), "input contains invalid UTF-8, replaced");
    }
    Ok(text.into_owned())
}

/// Extracts sizes from `text` and analyzes them.
///
/// # Errors
///
/// [`BenfordError::EmptyInput`] (wrapped) if the text contains no sizes.
pub fn build_report(text: &str, settings: ExtractorSettings, include_ranges: bool) -> Result<Report> {
    let sizes = SizeExtractor::new(settings).extract(text);
    info!(count = sizes.len(), "extracted package sizes");

    let overall = analyze_benford(&sizes)?;
    let chi_square = chi_square_test(&overall);
    let ranges = if include_ranges {
        Some(analyze_size_ranges(&sizes, &DEFAULT_SIZE_RANGES)?)
    } else {
        None
    };

    Ok(Report {
        package_count: sizes.len(),
        total_kib: sizes.iter().sum(),
        overall,
        chi_square,
        ranges,
    })
}

/// Renders `report` as JSON.
pub fn render_json(report: &Report) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Renders `report` as human readable tables.
pub fn render_text(report: &Report) -> String {
    let total_bytes = (report.total_kib * 1024.0).round() as u64;

    let mut out = format!(
        "Total number of packages: {}\nTotal size: {}\n\n{}\n\n{}\n",
        report.package_count,
        ByteSize::b(total_bytes),
        format_digit_table(&report.overall, Some("Overall Analysis")),
        format_chi_square(&report.chi_square),
    );

    if let Some(ranges) = &report.ranges {
        let sections: Vec<String> = ranges.iter().map(render_range).collect();
        out.push_str(&format!(
            "\nAnalysis by Size Ranges\n{}\n\n{}",
            "=".repeat(23),
            sections.join("\n")
        ));
    }

    out
}

/// Statistic, critical values and verdict of the overall chi-square test.
fn format_chi_square(test: &ChiSquareTest) -> String {
    format!(
        "Chi-square statistic: {:.2}\nCritical values (degrees of freedom = {}):\n  α = 0.05: {:.2}\n  α = 0.01: {:.2}\nResult: {}",
        test.statistic,
        test.degrees_of_freedom,
        CRITICAL_VALUE_P05,
        CRITICAL_VALUE_P01,
        test.verdict.description()
    )
}

fn render_range(range: &RangeAnalysis) -> String {
    let (Some(analysis), Some(chi_square)) = (&range.analysis, &range.chi_square) else {
        return format!("No sizes found in range {}\n", range.range);
    };

    let title = format!("Sizes {} (Total: {})", range.range, analysis.total());
    format!(
        "{}\n\nChi-square statistic: {:.2} (for this range)\nResult: {}\n",
        format_digit_table(analysis, Some(&title)),
        chi_square.statistic,
        chi_square.verdict.description()
    )
}
