//! Immutable result of one metric computation run.

use crate::value::MetricValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One labeled entry of a trend series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Fiscal-year token of the period (e.g. `FY23`).
    pub period: String,
    /// Scaled value, or a preserved missing sentinel.
    pub value: MetricValue,
}

/// Computed metrics for one ticker's filing set.
///
/// Constructed fresh per analysis request and passed by value to consumers;
/// series share one canonical oldest-first period ordering. Field-equal
/// snapshots compare equal, which is what makes the engine's determinism
/// testable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSnapshot {
    /// Ticker symbol, as supplied by the caller.
    pub ticker: String,
    /// Company display name, as supplied by the caller.
    pub company_name: String,
    /// Trend series keyed by metric name, oldest period first.
    pub series: BTreeMap<String, Vec<SeriesPoint>>,
    /// Latest-period scalar metrics keyed by metric name.
    pub scalars: BTreeMap<String, MetricValue>,
}

impl MetricSnapshot {
    /// A scalar metric by name.
    pub fn scalar(&self, name: &str) -> Option<MetricValue> {
        self.scalars.get(name).copied()
    }

    /// A trend series by name.
    pub fn series(&self, name: &str) -> Option<&[SeriesPoint]> {
        self.series.get(name).map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::MissingReason;

    #[test]
    fn test_accessors() {
        let mut scalars = BTreeMap::new();
        scalars.insert("CurrentRatio".to_string(), MetricValue::Value(3.0));

        let mut series = BTreeMap::new();
        series.insert(
            "Revenue".to_string(),
            vec![SeriesPoint {
                period: "FY23".to_string(),
                value: MetricValue::Missing(MissingReason::Unresolved),
            }],
        );

        let snapshot = MetricSnapshot {
            ticker: "AAPL".to_string(),
            company_name: "Apple Inc.".to_string(),
            series,
            scalars,
        };

        assert_eq!(snapshot.scalar("CurrentRatio"), Some(MetricValue::Value(3.0)));
        assert_eq!(snapshot.scalar("DebtToEquity"), None);
        assert_eq!(snapshot.series("Revenue").unwrap().len(), 1);
    }
}
