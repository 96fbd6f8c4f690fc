//! Chronological alignment of statement periods.
//!
//! Filings of different lengths overlap: a five-year retrieval window can
//! hand back two periods that end in the same fiscal year (a restatement and
//! the original). Alignment sorts periods oldest-first, collapses such
//! duplicates, and rewrites every row's values in lockstep so the table
//! invariant (one value per period) keeps holding.

use crate::period::PeriodLabel;
use crate::table::{LineItem, StatementTable};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Two raw periods collapsed to the same fiscal-year token.
///
/// Non-fatal: processing continues with the period that ends later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicatePeriodWarning {
    /// Fiscal-year token the periods shared.
    pub token: String,
    /// Raw value of the kept period (the later end-date).
    pub kept: String,
    /// Raw value of the dropped period.
    pub dropped: String,
}

impl fmt::Display for DuplicatePeriodWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "periods '{}' and '{}' both map to {}; kept '{}'",
            self.dropped, self.kept, self.token, self.kept
        )
    }
}

/// A statement table in canonical oldest-first order, plus any duplicate
/// periods dropped on the way there.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedStatement {
    /// The reordered, deduplicated copy of the input table.
    pub table: StatementTable,
    /// Duplicate-period collapses observed during alignment.
    pub warnings: Vec<DuplicatePeriodWarning>,
}

/// Align a table's periods chronologically, oldest first.
///
/// Periods mapping to the same fiscal-year token are collapsed to the one
/// with the later raw end-date; each collapse is reported as a
/// [`DuplicatePeriodWarning`] and logged. The input table is never mutated;
/// the result is a filtered, reordered copy. Consumers wanting
/// most-recent-first display should call [`StatementTable::reversed`] on the
/// aligned table rather than re-sorting themselves.
pub fn align(table: &StatementTable) -> AlignedStatement {
    let periods = table.periods();

    let mut order: Vec<usize> = (0..periods.len()).collect();
    order.sort_by(|&a, &b| periods[a].cmp(&periods[b]));

    // Ascending order puts same-token periods next to each other, later
    // end-date second, so each collapse replaces the previously kept index.
    let mut kept: Vec<usize> = Vec::with_capacity(order.len());
    let mut warnings = Vec::new();
    for idx in order {
        let token = periods[idx].fiscal_token();
        match kept.last().copied() {
            Some(prev) if periods[prev].fiscal_token() == token => {
                let warning = DuplicatePeriodWarning {
                    token,
                    kept: periods[idx].raw().to_string(),
                    dropped: periods[prev].raw().to_string(),
                };
                tracing::warn!(%warning, kind = %table.kind(), "collapsed duplicate fiscal period");
                warnings.push(warning);

                let last = kept.len() - 1;
                kept[last] = idx;
            }
            _ => kept.push(idx),
        }
    }

    let aligned_periods: Vec<PeriodLabel> =
        kept.iter().map(|&idx| periods[idx].clone()).collect();
    let aligned_rows: Vec<LineItem> = table
        .rows()
        .iter()
        .map(|row| LineItem {
            concept: row.concept.clone(),
            label: row.label.clone(),
            values: kept.iter().map(|&idx| row.values[idx]).collect(),
        })
        .collect();

    AlignedStatement {
        table: StatementTable::from_parts(table.kind(), aligned_periods, aligned_rows),
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{DumpRow, StatementDump, StatementKind};
    use rstest::rstest;

    fn table_with_periods(periods: &[&str], values: &[Option<f64>]) -> StatementTable {
        let dump = StatementDump {
            periods: periods.iter().map(|p| p.to_string()).collect(),
            rows: vec![DumpRow {
                concept: Some("us-gaap_Revenues".to_string()),
                label: "Total revenue".to_string(),
                values: values.to_vec(),
            }],
        };
        StatementTable::from_dump(StatementKind::Income, &dump).unwrap()
    }

    #[rstest]
    #[case(&["2023-12-31", "2021-12-31", "2022-12-31"], &[Some(3.0), Some(1.0), Some(2.0)])]
    #[case(&["2021-12-31", "2022-12-31", "2023-12-31"], &[Some(1.0), Some(2.0), Some(3.0)])]
    #[case(&["2022-12-31", "2023-12-31", "2021-12-31"], &[Some(2.0), Some(3.0), Some(1.0)])]
    fn test_align_sorts_oldest_first(#[case] periods: &[&str], #[case] values: &[Option<f64>]) {
        let aligned = align(&table_with_periods(periods, values));

        let tokens: Vec<String> = aligned
            .table
            .periods()
            .iter()
            .map(PeriodLabel::fiscal_token)
            .collect();
        assert_eq!(tokens, vec!["FY21", "FY22", "FY23"]);
        assert_eq!(
            aligned.table.rows()[0].values,
            vec![Some(1.0), Some(2.0), Some(3.0)]
        );
        assert!(aligned.warnings.is_empty());

        // strictly ascending end-dates, and reversal is strictly descending
        let dates: Vec<_> = aligned
            .table
            .periods()
            .iter()
            .map(PeriodLabel::end_date)
            .collect();
        assert!(dates.windows(2).all(|w| w[0] < w[1]));
        let reversed = aligned.table.reversed();
        let dates: Vec<_> = reversed.periods().iter().map(PeriodLabel::end_date).collect();
        assert!(dates.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn test_duplicate_token_keeps_later_end_date() {
        // 2023-06-30 and 2023-12-31 both map to FY23; the later survives
        let table = table_with_periods(
            &["2023-06-30", "2022-12-31", "2023-12-31"],
            &[Some(99.0), Some(2.0), Some(3.0)],
        );
        let aligned = align(&table);

        let tokens: Vec<String> = aligned
            .table
            .periods()
            .iter()
            .map(PeriodLabel::fiscal_token)
            .collect();
        assert_eq!(tokens, vec!["FY22", "FY23"]);
        assert_eq!(aligned.table.periods()[1].raw(), "2023-12-31");
        // value arrays shrink in lockstep
        assert_eq!(aligned.table.rows()[0].values, vec![Some(2.0), Some(3.0)]);

        assert_eq!(aligned.warnings.len(), 1);
        let warning = &aligned.warnings[0];
        assert_eq!(warning.token, "FY23");
        assert_eq!(warning.kept, "2023-12-31");
        assert_eq!(warning.dropped, "2023-06-30");

        // the input table is untouched
        assert_eq!(table.periods().len(), 3);
    }

    #[test]
    fn test_triple_collapse_keeps_latest() {
        let table = table_with_periods(
            &["2023-03-31", "2023-06-30", "2023-12-31"],
            &[Some(1.0), Some(2.0), Some(3.0)],
        );
        let aligned = align(&table);

        assert_eq!(aligned.table.periods().len(), 1);
        assert_eq!(aligned.table.periods()[0].raw(), "2023-12-31");
        assert_eq!(aligned.table.rows()[0].values, vec![Some(3.0)]);
        assert_eq!(aligned.warnings.len(), 2);
    }

    #[test]
    fn test_warning_display() {
        let warning = DuplicatePeriodWarning {
            token: "FY23".to_string(),
            kept: "2023-12-31".to_string(),
            dropped: "2023-06-30".to_string(),
        };
        let text = warning.to_string();
        assert!(text.contains("FY23"));
        assert!(text.contains("2023-06-30"));
    }
}
