//! Reporting periods and fiscal-year tokens.

use crate::error::{Result, StatementError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// One reporting period of a statement: the raw identifier as reported plus
/// its parsed calendar end-date.
///
/// Periods order chronologically by end-date; that ordering is the single
/// source of truth for "most recent" versus "oldest".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodLabel {
    raw: String,
    end_date: NaiveDate,
}

impl PeriodLabel {
    /// Parse a raw period identifier.
    ///
    /// Accepts a bare end-date (`2023-12-31` or `12/31/2023`) or a reported
    /// range (`2023-01-01 to 2023-12-31`, `2023-01-01:2023-12-31`); a range
    /// is keyed by its end-date.
    pub fn parse(raw: &str) -> Result<Self> {
        let fragment = end_fragment(raw);
        let end_date = parse_date(fragment).ok_or_else(|| StatementError::PeriodParse {
            raw: raw.to_string(),
            reason: "expected an end-date like 2023-12-31".to_string(),
        })?;

        Ok(Self {
            raw: raw.to_string(),
            end_date,
        })
    }

    /// Build a period directly from an already-parsed end-date.
    pub fn from_end_date(raw: String, end_date: NaiveDate) -> Self {
        Self { raw, end_date }
    }

    /// The period identifier exactly as reported.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Calendar end-date of the period.
    pub const fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// Fiscal-year token derived from the end-date, e.g. `FY23`.
    pub fn fiscal_token(&self) -> String {
        self.end_date.format("FY%y").to_string()
    }
}

impl Ord for PeriodLabel {
    fn cmp(&self, other: &Self) -> Ordering {
        self.end_date
            .cmp(&other.end_date)
            .then_with(|| self.raw.cmp(&other.raw))
    }
}

impl PartialOrd for PeriodLabel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for PeriodLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// The end-date portion of a raw period value.
fn end_fragment(raw: &str) -> &str {
    let raw = raw.trim();
    if let Some((_, end)) = raw.split_once(" to ") {
        return end.trim();
    }
    if let Some((_, end)) = raw.rsplit_once(':') {
        return end.trim();
    }
    raw
}

fn parse_date(fragment: &str) -> Option<NaiveDate> {
    for format in ["%Y-%m-%d", "%m/%d/%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(fragment, format) {
            return Some(date);
        }
    }
    None
}
