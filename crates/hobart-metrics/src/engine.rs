//! Derived audit metric computation across aligned statements.

use crate::request::{AnalysisRequest, ScalarMetric, TrendMetric};
use crate::snapshot::{MetricSnapshot, SeriesPoint};
use crate::value::{MetricValue, MissingReason};
use hobart_statements::{
    AlignedStatement, ConceptCatalog, DuplicatePeriodWarning, StatementKind, StatementTable,
};
use std::collections::BTreeMap;

/// Aligned statement tables for one filing set, keyed by statement kind.
///
/// Accumulates the alignment warnings of every inserted statement so the
/// caller can surface them alongside the computed snapshot.
#[derive(Debug, Default)]
pub struct StatementSet {
    tables: BTreeMap<StatementKind, StatementTable>,
    warnings: Vec<DuplicatePeriodWarning>,
}

impl StatementSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an aligned statement, replacing any previous one of the same kind.
    pub fn insert(&mut self, aligned: AlignedStatement) {
        self.warnings.extend(aligned.warnings);
        self.tables.insert(aligned.table.kind(), aligned.table);
    }

    /// The aligned table for a statement kind, if one was supplied.
    pub fn get(&self, kind: StatementKind) -> Option<&StatementTable> {
        self.tables.get(&kind)
    }

    /// Duplicate-period collapses observed while aligning the set.
    pub fn warnings(&self) -> &[DuplicatePeriodWarning] {
        &self.warnings
    }
}

/// Computes scalar and trend metrics from resolved, aligned statements.
///
/// Holds only the concept catalog; `compute` is a pure function of its
/// inputs, so identical tables and requests always produce identical
/// snapshots. Nothing is cached across tickers.
#[derive(Debug, Default)]
pub struct MetricEngine {
    catalog: ConceptCatalog,
}

impl MetricEngine {
    /// Create an engine with the standard concept catalog.
    pub fn new() -> Self {
        Self {
            catalog: ConceptCatalog::new(),
        }
    }

    /// Compute every requested metric into a snapshot.
    ///
    /// Resolution and computation failures never raise; they land in the
    /// snapshot as reason-coded missing values.
    pub fn compute(&self, statements: &StatementSet, request: &AnalysisRequest) -> MetricSnapshot {
        let mut scalars = BTreeMap::new();
        for metric in &request.scalars {
            scalars.insert(metric.name().to_string(), self.scalar(statements, *metric));
        }

        let mut series = BTreeMap::new();
        for metric in &request.trends {
            series.insert(
                metric.name().to_string(),
                self.trend(statements, *metric, request.trend_divisor, request.trend_periods),
            );
        }

        MetricSnapshot {
            ticker: request.ticker.clone(),
            company_name: request.company_name.clone(),
            series,
            scalars,
        }
    }

    /// Latest-period value of one resolved concept.
    fn latest(
        &self,
        statements: &StatementSet,
        kind: StatementKind,
        concept: &str,
    ) -> MetricValue {
        let Some(table) = statements.get(kind) else {
            return MetricValue::Missing(MissingReason::NoStatement);
        };

        self.catalog
            .resolve(table, concept)
            .map_or(MetricValue::Missing(MissingReason::Unresolved), |row| {
                row.latest().into()
            })
    }

    fn scalar(&self, statements: &StatementSet, metric: ScalarMetric) -> MetricValue {
        let kind = metric.statement();
        match metric {
            ScalarMetric::CurrentRatio => MetricValue::ratio(
                self.latest(statements, kind, "CurrentAssets"),
                self.latest(statements, kind, "CurrentLiabilities"),
            ),
            ScalarMetric::DebtToEquity => MetricValue::ratio(
                self.latest(statements, kind, "LongTermDebt"),
                self.latest(statements, kind, "StockholdersEquity"),
            ),
            ScalarMetric::WorkingCapital => MetricValue::difference(
                self.latest(statements, kind, "CurrentAssets"),
                self.latest(statements, kind, "CurrentLiabilities"),
            ),
            ScalarMetric::LatestRevenue => self.latest(statements, kind, "Revenue"),
            ScalarMetric::LatestNetIncome => self.latest(statements, kind, "NetIncome"),
        }
    }

    /// Trend series over the most recent `max_periods` aligned periods,
    /// oldest first, uniformly scaled.
    fn trend(
        &self,
        statements: &StatementSet,
        metric: TrendMetric,
        divisor: f64,
        max_periods: usize,
    ) -> Vec<SeriesPoint> {
        let Some(table) = statements.get(StatementKind::Income) else {
            return Vec::new();
        };

        let row = self.catalog.resolve(table, metric.concept());
        let periods = table.periods();
        let start = periods.len().saturating_sub(max_periods);

        periods
            .iter()
            .enumerate()
            .skip(start)
            .map(|(idx, period)| {
                let value = row.map_or(
                    MetricValue::Missing(MissingReason::Unresolved),
                    |row| MetricValue::from(row.values[idx]).scaled(divisor),
                );
                SeriesPoint {
                    period: period.fiscal_token(),
                    value,
                }
            })
            .collect()
    }
}
