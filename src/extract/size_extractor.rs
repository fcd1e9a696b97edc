//! Picks `<number> KiB` / `<number> MiB` tokens out of free-form log text.
//!
//! The number and its unit are captured by the same match, so a value is always
//! paired with the label that directly follows it, never with a later one.
//! Only spaces and tabs may separate the two, so a number ending one line is
//! never paired with a label starting the next.
//!
//! Numbers are plain digit runs with an optional fraction. Thousands separators
//! are not understood: in `1,234.5 KiB` only `234.5` is matched.

use crate::analysis::leading_digit::is_valid_magnitude;
use crate::api::enums::size_unit::SizeUnit;
use crate::api::extractor_settings::ExtractorSettings;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, trace};

/// Number, optional spaces or tabs, unit label.
static SIZE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([0-9]+(?:\.[0-9]+)?)[ \t]*(MiB|KiB)").expect("size pattern is valid")
});

/// Suffix marking a transfer rate rather than a size.
const RATE_SUFFIX: &str = "/s";

/// A size as written in the text, before normalization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeToken {
    /// The numeric part of the token.
    pub value: f64,
    /// The unit label captured together with [`Self::value`].
    pub unit: SizeUnit,
}

impl SizeToken {
    /// The size of this token in KiB.
    pub fn kib(&self) -> f64 {
        self.unit.to_kib(self.value)
    }
}

/// Extracts sizes from log text, normalized to KiB.
#[derive(Debug, Clone, Default)]
pub struct SizeExtractor {
    settings: ExtractorSettings,
}

impl SizeExtractor {
    /// Creates an extractor using the given settings.
    pub fn new(settings: ExtractorSettings) -> Self {
        Self { settings }
    }

    /// Returns every size token in `text` in order of appearance.
    ///
    /// Transfer rates are left out when [`ExtractorSettings::skip_transfer_rates`]
    /// is set. Tokens are not validated; see [`Self::extract`] for that.
    pub fn extract_with_units(&self, text: &str) -> Vec<SizeToken> {
        let mut tokens = Vec::new();
        for captures in SIZE_PATTERN.captures_iter(text) {
            // Both groups are mandatory in the pattern.
            let (Some(whole), Some(number), Some(label)) =
                (captures.get(0), captures.get(1), captures.get(2))
            else {
                continue;
            };

            if self.settings.skip_transfer_rates && text[whole.end()..].starts_with(RATE_SUFFIX)
            {
                trace!(token = whole.as_str(), "skipping transfer rate");
                continue;
            }

            let (Ok(value), Ok(unit)) = (
                number.as_str().parse::<f64>(),
                label.as_str().parse::<SizeUnit>(),
            ) else {
                continue;
            };

            trace!(value, %unit, "matched size token");
            tokens.push(SizeToken { value, unit });
        }

        tokens
    }

    /// Returns the magnitudes (in KiB) of every size token in `text`.
    ///
    /// Tokens that don't normalize to a positive, finite magnitude (`0 KiB`,
    /// or digit runs too long for an `f64`) have no leading digit and are
    /// excluded. An empty result is not an error.
    pub fn extract(&self, text: &str) -> Vec<f64> {
        let tokens = self.extract_with_units(text);
        let matched = tokens.len();

        let sizes: Vec<f64> = tokens
            .iter()
            .map(SizeToken::kib)
            .filter(|&kib| {
                let valid = is_valid_magnitude(kib);
                if !valid {
                    debug!(kib, "excluding size with no leading digit");
                }
                valid
            })
            .collect();

        debug!(matched, kept = sizes.len(), "extracted sizes");
        sizes
    }
}

/// Extracts sizes from `text` in KiB using default [`ExtractorSettings`].
pub fn extract_sizes(text: &str) -> Vec<f64> {
    SizeExtractor::default().extract(text)
}
