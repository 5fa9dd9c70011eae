//! Coverage-badge rewriting for documentation files.
//!
//! A coverage report (Cobertura-style XML) carries a `line-rate` attribute as
//! a decimal fraction; the README carries a shields.io badge of the form
//! `[![Coverage](https://img.shields.io/badge/coverage-NN%25-brightgreen.svg)](...)`.
//! This module extracts the percentage from the report and rewrites the badge
//! image URL, leaving the badge's link target alone. It shares no state or
//! types with the task store.

use std::fmt;

use thiserror::Error;

/// Errors returned while extracting coverage or rewriting the badge.
#[derive(Debug, Error)]
pub enum BadgeError {
    /// The coverage report has no `line-rate` attribute.
    #[error("coverage report has no line-rate attribute")]
    MissingLineRate,

    /// The `line-rate` attribute is not a decimal fraction in `0..=1`.
    #[error("invalid line-rate value: {0:?}")]
    InvalidLineRate(String),

    /// The documentation file contains no coverage badge to rewrite.
    #[error("no coverage badge found in documentation file")]
    BadgeNotFound,

    /// Reading or writing a file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Whole-number coverage percentage in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoveragePercent(u8);

impl CoveragePercent {
    /// Creates a validated percentage.
    ///
    /// # Errors
    ///
    /// Returns [`BadgeError::InvalidLineRate`] when the value exceeds 100.
    pub fn new(value: u8) -> Result<Self, BadgeError> {
        if value > 100 {
            return Err(BadgeError::InvalidLineRate(value.to_string()));
        }
        Ok(Self(value))
    }

    /// Returns the percentage as a number.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Extracts the percentage from a coverage report's first `line-rate`
    /// attribute, truncating to a whole percent (`0.856` becomes 85).
    ///
    /// # Errors
    ///
    /// Returns [`BadgeError::MissingLineRate`] when the attribute is absent
    /// and [`BadgeError::InvalidLineRate`] when its value does not parse as
    /// a decimal fraction in `0..=1`.
    pub fn from_coverage_xml(report: &str) -> Result<Self, BadgeError> {
        let raw = report
            .split("line-rate=\"")
            .nth(1)
            .and_then(|tail| tail.split('"').next())
            .ok_or(BadgeError::MissingLineRate)?;
        Self::from_line_rate(raw)
    }

    /// Parses a decimal fraction such as `0.85` or `1` into a percentage.
    ///
    /// Parsing is integer-only: the fraction is read digit by digit, so the
    /// result truncates rather than rounds, matching how the coverage report
    /// is conventionally summarized.
    fn from_line_rate(raw: &str) -> Result<Self, BadgeError> {
        let invalid = || BadgeError::InvalidLineRate(raw.to_owned());
        let trimmed = raw.trim();
        let mut parts = trimmed.split('.');
        let whole_digits = parts.next().ok_or_else(invalid)?;
        let frac_digits = parts.next().unwrap_or("");
        if parts.next().is_some() || whole_digits.is_empty() {
            return Err(invalid());
        }

        if !frac_digits.chars().all(|ch| ch.is_ascii_digit()) {
            return Err(invalid());
        }

        let whole: u8 = whole_digits.parse().map_err(|_| invalid())?;
        let mut percent = u16::from(whole) * 100;
        let mut frac_iter = frac_digits.chars();
        for weight in [10u16, 1] {
            if let Some(ch) = frac_iter.next() {
                let digit = ch.to_digit(10).ok_or_else(invalid)?;
                percent += u16::try_from(digit).map_err(|_| invalid())? * weight;
            }
        }

        u8::try_from(percent)
            .map_err(|_| invalid())
            .and_then(Self::new)
    }
}

impl fmt::Display for CoveragePercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Markdown prefix of the badge image in the documentation file.
const BADGE_MARKER: &str = "[![Coverage](";

/// Returns the shields.io image URL for a coverage percentage.
#[must_use]
pub fn badge_url(percent: CoveragePercent) -> String {
    format!("https://img.shields.io/badge/coverage-{percent}%25-brightgreen.svg")
}

/// Rewrites the badge image URL in `content` to carry `percent`.
///
/// The badge's link target (the second parenthesized URL) is preserved.
///
/// # Errors
///
/// Returns [`BadgeError::BadgeNotFound`] when `content` has no coverage
/// badge.
pub fn rewrite_badge(content: &str, percent: CoveragePercent) -> Result<String, BadgeError> {
    let marker_start = content.find(BADGE_MARKER).ok_or(BadgeError::BadgeNotFound)?;
    let url_start = marker_start + BADGE_MARKER.len();
    let (head, tail) = content.split_at_checked(url_start).ok_or(BadgeError::BadgeNotFound)?;
    let url_len = tail.find(')').ok_or(BadgeError::BadgeNotFound)?;
    let (_, rest) = tail.split_at_checked(url_len).ok_or(BadgeError::BadgeNotFound)?;

    let mut rewritten = String::with_capacity(content.len());
    rewritten.push_str(head);
    rewritten.push_str(&badge_url(percent));
    rewritten.push_str(rest);
    Ok(rewritten)
}
