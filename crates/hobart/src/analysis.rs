//! End-to-end filing analysis: normalize, align, compute, render.

use hobart_metrics::{AnalysisRequest, MetricEngine, MetricSnapshot, StatementSet};
use hobart_output::memo::AuditMemo;
use hobart_output::narrative::{DEFAULT_RISK_EXCERPT_CHARS, excerpt};
use hobart_statements::{
    DuplicatePeriodWarning, Result, StatementDump, StatementKind, StatementTable, align,
};
use serde::{Deserialize, Serialize};

/// Parsed filing data for one ticker, handed in by the retrieval
/// collaborator. The engine itself never fetches anything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilingBundle {
    /// One raw statement dump per statement kind.
    pub statements: Vec<(StatementKind, StatementDump)>,
    /// Item 1A narrative text, when the filing carries one.
    #[serde(default)]
    pub risk_factors: Option<String>,
}

/// Everything produced by one analysis run.
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    /// Computed scalar and trend metrics.
    pub snapshot: MetricSnapshot,
    /// Rendered audit memo bytes.
    pub memo: Vec<u8>,
    /// Duplicate-period collapses observed during alignment.
    pub warnings: Vec<DuplicatePeriodWarning>,
    /// Truncated risk-factor narrative, when the bundle supplied one.
    pub risk_excerpt: Option<String>,
}

/// Request-scoped analysis pipeline over one filing bundle.
///
/// Every call builds wholly new tables and a fresh snapshot; nothing
/// persists between tickers.
#[derive(Debug, Default)]
pub struct Analyzer {
    engine: MetricEngine,
}

impl Analyzer {
    /// Create an analyzer with the standard concept catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the full pipeline: build tables, align periods, compute metrics,
    /// render the memo.
    ///
    /// A malformed statement dump is a hard stop; resolution and computation
    /// gaps flow through the snapshot as reason-coded missing values.
    pub fn analyze(
        &self,
        bundle: &FilingBundle,
        request: &AnalysisRequest,
    ) -> Result<AnalysisReport> {
        let mut statements = StatementSet::new();
        for (kind, dump) in &bundle.statements {
            let table = StatementTable::from_dump(*kind, dump)?;
            statements.insert(align(&table));
        }

        tracing::debug!(
            ticker = %request.ticker,
            statements = bundle.statements.len(),
            "computing metric snapshot"
        );

        let snapshot = self.engine.compute(&statements, request);
        let memo = AuditMemo::from_snapshot(&snapshot).to_bytes();
        let warnings = statements.warnings().to_vec();
        let risk_excerpt = bundle
            .risk_factors
            .as_deref()
            .map(|text| excerpt(text, DEFAULT_RISK_EXCERPT_CHARS));

        Ok(AnalysisReport {
            snapshot,
            memo,
            warnings,
            risk_excerpt,
        })
    }
}
