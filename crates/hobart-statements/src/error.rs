//! Error types for statement normalization.

use crate::table::StatementKind;
use thiserror::Error;

/// Result type for statement operations.
pub type Result<T> = std::result::Result<T, StatementError>;

/// Errors that can occur while building or querying statement tables.
#[derive(Debug, Error)]
pub enum StatementError {
    /// A row's value count does not match the table's period count.
    ///
    /// The engine refuses to guess whether the row should be truncated or
    /// padded; the caller must supply a well-formed dump.
    #[error(
        "malformed {kind} statement: row '{label}' has {got} values for {expected} periods"
    )]
    MalformedStatement {
        /// Statement kind being constructed.
        kind: StatementKind,
        /// Label of the offending row.
        label: String,
        /// Number of periods in the table.
        expected: usize,
        /// Number of values the row actually carried.
        got: usize,
    },

    /// Two periods share the same raw identifier.
    #[error("duplicate raw period '{raw}' in {kind} statement")]
    DuplicateRawPeriod {
        /// Statement kind being constructed.
        kind: StatementKind,
        /// The repeated raw period value.
        raw: String,
    },

    /// A raw period identifier could not be parsed into a calendar end-date.
    ///
    /// Chronological order is the single source of truth for recency, so a
    /// period without a date would leave the whole table unorderable.
    #[error("unparseable period '{raw}': {reason}")]
    PeriodParse {
        /// The raw period value as reported.
        raw: String,
        /// What the parser expected.
        reason: String,
    },

    /// A statement dump with no periods at all.
    #[error("empty {kind} statement: no reporting periods")]
    EmptyStatement {
        /// Statement kind being constructed.
        kind: StatementKind,
    },

    /// Presentation frame construction failure.
    #[error("dataframe error: {0}")]
    Frame(#[from] polars::prelude::PolarsError),
}
