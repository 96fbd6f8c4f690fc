//! Canonical in-memory representation of one financial statement.

use crate::error::{Result, StatementError};
use crate::period::PeriodLabel;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The three statement categories the engine normalizes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum StatementKind {
    /// Income statement.
    Income,
    /// Balance sheet.
    Balance,
    /// Cash-flow statement.
    CashFlow,
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Income => "income",
            Self::Balance => "balance",
            Self::CashFlow => "cash-flow",
        };
        f.write_str(name)
    }
}

/// One reported line of a financial statement across all periods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Stable machine concept tag (e.g. `us-gaap_NetIncomeLoss`), when reported.
    pub concept: Option<String>,
    /// Human-readable caption as reported; not unique or stable across filings.
    pub label: String,
    /// One entry per period, positionally aligned with the table's periods.
    ///
    /// `None` means "not reported", which is distinct from a reported zero.
    pub values: Vec<Option<f64>>,
}

impl LineItem {
    /// Number of periods with no reported value.
    pub fn missing_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_none()).count()
    }

    /// Value for the last period in the table's ordering, if reported.
    pub fn latest(&self) -> Option<f64> {
        self.values.last().copied().flatten()
    }
}

/// One raw statement row as handed in by the retrieval collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DumpRow {
    /// Machine concept tag, when the filing reported one.
    #[serde(default)]
    pub concept: Option<String>,
    /// Display caption as reported.
    pub label: String,
    /// One entry per raw period, in the dump's period order.
    pub values: Vec<Option<f64>>,
}

/// Collaborator-supplied tabular dump of one statement.
///
/// Values are in the statement's native currency unit, not pre-scaled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatementDump {
    /// Raw period identifiers, one per value column.
    pub periods: Vec<String>,
    /// Statement rows in source order.
    pub rows: Vec<DumpRow>,
}

/// Canonical representation of one financial statement across N periods.
///
/// Immutable after construction: every row's value count equals the period
/// count, and periods are unique by raw value. Built once per filing set and
/// discarded when a new one is loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementTable {
    kind: StatementKind,
    periods: Vec<PeriodLabel>,
    rows: Vec<LineItem>,
}

impl StatementTable {
    /// Build a table from already-parsed periods and rows.
    ///
    /// Fails with [`StatementError::MalformedStatement`] on ragged rows and
    /// [`StatementError::DuplicateRawPeriod`] on repeated period identifiers.
    /// Duplicate `(concept, label)` rows are accepted; restated filings
    /// produce them, and the resolver treats them as ambiguous.
    pub fn new(
        kind: StatementKind,
        periods: Vec<PeriodLabel>,
        rows: Vec<LineItem>,
    ) -> Result<Self> {
        if periods.is_empty() {
            return Err(StatementError::EmptyStatement { kind });
        }

        for (idx, period) in periods.iter().enumerate() {
            if periods[..idx].iter().any(|seen| seen.raw() == period.raw()) {
                return Err(StatementError::DuplicateRawPeriod {
                    kind,
                    raw: period.raw().to_string(),
                });
            }
        }

        for row in &rows {
            if row.values.len() != periods.len() {
                return Err(StatementError::MalformedStatement {
                    kind,
                    label: row.label.clone(),
                    expected: periods.len(),
                    got: row.values.len(),
                });
            }
        }

        Ok(Self {
            kind,
            periods,
            rows,
        })
    }

    /// Build a table from a raw collaborator dump, parsing its periods.
    pub fn from_dump(kind: StatementKind, dump: &StatementDump) -> Result<Self> {
        let periods = dump
            .periods
            .iter()
            .map(|raw| PeriodLabel::parse(raw))
            .collect::<Result<Vec<_>>>()?;

        let rows = dump
            .rows
            .iter()
            .map(|row| LineItem {
                concept: row.concept.clone(),
                label: row.label.clone(),
                values: row.values.clone(),
            })
            .collect();

        Self::new(kind, periods, rows)
    }

    /// Internal constructor for callers that uphold the invariants themselves.
    pub(crate) fn from_parts(
        kind: StatementKind,
        periods: Vec<PeriodLabel>,
        rows: Vec<LineItem>,
    ) -> Self {
        Self {
            kind,
            periods,
            rows,
        }
    }

    /// Which statement this table holds.
    pub const fn kind(&self) -> StatementKind {
        self.kind
    }

    /// Reporting periods shared by all rows, in this table's current order.
    pub fn periods(&self) -> &[PeriodLabel] {
        &self.periods
    }

    /// All rows in source order.
    pub fn rows(&self) -> &[LineItem] {
        &self.rows
    }

    /// Rows matching a predicate, in source order. No implicit sorting.
    pub fn find_rows<P>(&self, predicate: P) -> Vec<&LineItem>
    where
        P: Fn(&LineItem) -> bool,
    {
        self.rows.iter().filter(|row| predicate(row)).collect()
    }

    /// The last period in this table's current order.
    pub fn latest_period(&self) -> Option<&PeriodLabel> {
        self.periods.last()
    }

    /// A most-recent-first copy for presentation.
    ///
    /// Reverses the periods and every row's values in lockstep. The canonical
    /// table stays oldest-first; display code should use this helper instead
    /// of re-implementing the reversal.
    pub fn reversed(&self) -> Self {
        let periods = self.periods.iter().rev().cloned().collect();
        let rows = self
            .rows
            .iter()
            .map(|row| LineItem {
                concept: row.concept.clone(),
                label: row.label.clone(),
                values: row.values.iter().rev().copied().collect(),
            })
            .collect();

        Self::from_parts(self.kind, periods, rows)
    }
}
