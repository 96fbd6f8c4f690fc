//! Ordered-fallback resolution of logical metrics to statement rows.
//!
//! Different filings tag the same logical line differently: a concept gets
//! renamed between taxonomy releases, or a row arrives with only a display
//! label and no machine tag at all. A single-lookup strategy silently drops
//! valid data for a meaningful fraction of filings, so resolution walks an
//! ordered fallback chain instead: known concept tags first, canonical
//! labels second, ambiguity settled by data completeness.

use crate::table::{LineItem, StatementTable};
use std::collections::HashMap;

/// Candidate machine tags and canonical labels for one logical metric.
#[derive(Debug)]
struct ConceptEntry {
    tags: &'static [&'static str],
    labels: &'static [&'static str],
}

/// Maps logical metric names ("Revenue", "NetIncome", ...) to the concept
/// tags and display labels that filings actually use for them.
///
/// Tags are stored without their taxonomy prefix; a reported concept like
/// `us-gaap_NetIncomeLoss` or `us-gaap:NetIncomeLoss` matches on its local
/// name. The mapping covers the commonly tagged concepts this engine
/// computes with; anything outside it resolves to `None`.
#[derive(Debug)]
pub struct ConceptCatalog {
    entries: HashMap<&'static str, ConceptEntry>,
}

impl ConceptCatalog {
    /// Create a catalog with the standard mappings.
    pub fn new() -> Self {
        let mut entries = HashMap::new();

        entries.insert(
            "Revenue",
            ConceptEntry {
                tags: &[
                    "Revenues",
                    "RevenueFromContractWithCustomerExcludingAssessedTax",
                    "SalesRevenueNet",
                    "RevenueFromContractWithCustomerIncludingAssessedTax",
                ],
                labels: &["Revenue", "Total revenue", "Net sales"],
            },
        );

        entries.insert(
            "GrossProfit",
            ConceptEntry {
                tags: &["GrossProfit"],
                labels: &["Gross profit", "Gross Profit", "Gross margin"],
            },
        );

        entries.insert(
            "NetIncome",
            ConceptEntry {
                tags: &[
                    "NetIncomeLoss",
                    "ProfitLoss",
                    "NetIncomeLossAvailableToCommonStockholdersBasic",
                ],
                labels: &["Net income", "Net Income", "Net income (loss)"],
            },
        );

        entries.insert(
            "OperatingIncome",
            ConceptEntry {
                tags: &["OperatingIncomeLoss"],
                labels: &["Operating income", "Operating income (loss)"],
            },
        );

        entries.insert(
            "CurrentAssets",
            ConceptEntry {
                tags: &["AssetsCurrent"],
                labels: &["Total current assets", "Current assets"],
            },
        );

        entries.insert(
            "CurrentLiabilities",
            ConceptEntry {
                tags: &["LiabilitiesCurrent"],
                labels: &["Total current liabilities", "Current liabilities"],
            },
        );

        entries.insert(
            "TotalAssets",
            ConceptEntry {
                tags: &["Assets"],
                labels: &["Total assets"],
            },
        );

        entries.insert(
            "TotalLiabilities",
            ConceptEntry {
                tags: &["Liabilities", "LiabilitiesAndStockholdersEquity"],
                labels: &["Total liabilities"],
            },
        );

        entries.insert(
            "StockholdersEquity",
            ConceptEntry {
                tags: &[
                    "StockholdersEquity",
                    "StockholdersEquityIncludingPortionAttributableToNoncontrollingInterest",
                ],
                labels: &["Total stockholders' equity", "Total equity"],
            },
        );

        entries.insert(
            "CashAndEquivalents",
            ConceptEntry {
                tags: &[
                    "CashAndCashEquivalentsAtCarryingValue",
                    "Cash",
                    "CashCashEquivalentsAndShortTermInvestments",
                ],
                labels: &["Cash and cash equivalents"],
            },
        );

        entries.insert(
            "OperatingCashFlow",
            ConceptEntry {
                tags: &[
                    "NetCashProvidedByUsedInOperatingActivities",
                    "CashProvidedByUsedInOperatingActivities",
                ],
                labels: &["Net cash provided by operating activities"],
            },
        );

        entries.insert(
            "LongTermDebt",
            ConceptEntry {
                tags: &[
                    "LongTermDebt",
                    "LongTermDebtNoncurrent",
                    "LongTermDebtAndCapitalLeaseObligations",
                ],
                labels: &["Long-term debt"],
            },
        );

        Self { entries }
    }

    /// Logical metric names this catalog can resolve, sorted.
    pub fn known_metrics(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.entries.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Resolve a logical metric to the best-matching row of a table.
    ///
    /// Ordered fallback, first match wins:
    /// 1. rows whose concept tag matches a known tag for the metric;
    /// 2. rows whose label matches a canonical label;
    /// 3. among multiple matches, the row with the fewest missing entries,
    ///    tie broken by first occurrence in source order;
    /// 4. no match (or unknown metric name): `None`.
    ///
    /// `None` means the metric is absent from this table. Callers must treat
    /// absence explicitly; zero is a valid reported value, never a fallback.
    pub fn resolve<'a>(&self, table: &'a StatementTable, metric: &str) -> Option<&'a LineItem> {
        let entry = self.entries.get(metric)?;

        let by_tag = table.find_rows(|row| {
            row.concept
                .as_deref()
                .is_some_and(|concept| entry.tags.contains(&local_name(concept)))
        });
        if let Some(best) = best_candidate(&by_tag) {
            return Some(best);
        }

        let by_label = table.find_rows(|row| entry.labels.contains(&row.label.as_str()));
        best_candidate(&by_label)
    }
}

impl Default for ConceptCatalog {
    fn default() -> Self {
        Self::new()
    }
}

/// Tag name without its taxonomy prefix (`us-gaap_Assets` -> `Assets`).
fn local_name(concept: &str) -> &str {
    concept
        .rsplit_once(|c: char| c == ':' || c == '_')
        .map_or(concept, |(_, name)| name)
}

/// Fewest missing entries wins; `min_by_key` keeps the first on ties.
fn best_candidate<'a>(rows: &[&'a LineItem]) -> Option<&'a LineItem> {
    rows.iter().copied().min_by_key(|row| row.missing_count())
}
