//! Metric definitions and analysis requests.

use hobart_statements::StatementKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How many most-recent periods a trend series covers by default.
pub const DEFAULT_TREND_PERIODS: usize = 5;

/// Display unit of a scalar metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetricUnit {
    /// Unitless ratio.
    Ratio,
    /// Currency amount in the statement's native unit.
    Currency,
}

/// Single-period metrics, computed at the latest aligned period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScalarMetric {
    /// Current assets over current liabilities.
    CurrentRatio,
    /// Long-term debt over stockholders' equity.
    DebtToEquity,
    /// Current assets minus current liabilities.
    WorkingCapital,
    /// Revenue as reported for the latest period.
    LatestRevenue,
    /// Net income as reported for the latest period.
    LatestNetIncome,
}

impl ScalarMetric {
    /// Every scalar metric the engine computes.
    pub const ALL: [Self; 5] = [
        Self::CurrentRatio,
        Self::DebtToEquity,
        Self::WorkingCapital,
        Self::LatestRevenue,
        Self::LatestNetIncome,
    ];

    /// Stable identifier used as the snapshot key.
    pub const fn name(self) -> &'static str {
        match self {
            Self::CurrentRatio => "CurrentRatio",
            Self::DebtToEquity => "DebtToEquity",
            Self::WorkingCapital => "WorkingCapital",
            Self::LatestRevenue => "LatestRevenue",
            Self::LatestNetIncome => "LatestNetIncome",
        }
    }

    /// Human-readable caption for memo lines.
    pub const fn title(self) -> &'static str {
        match self {
            Self::CurrentRatio => "Current Ratio",
            Self::DebtToEquity => "Debt to Equity",
            Self::WorkingCapital => "Working Capital",
            Self::LatestRevenue => "Reported Revenue",
            Self::LatestNetIncome => "Reported Net Income",
        }
    }

    /// Unit the metric is displayed in.
    pub const fn unit(self) -> MetricUnit {
        match self {
            Self::CurrentRatio | Self::DebtToEquity => MetricUnit::Ratio,
            Self::WorkingCapital | Self::LatestRevenue | Self::LatestNetIncome => {
                MetricUnit::Currency
            }
        }
    }

    /// Which statement the metric reads from.
    pub const fn statement(self) -> StatementKind {
        match self {
            Self::CurrentRatio | Self::DebtToEquity | Self::WorkingCapital => {
                StatementKind::Balance
            }
            Self::LatestRevenue | Self::LatestNetIncome => StatementKind::Income,
        }
    }

    /// Look a metric up by its stable identifier.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|metric| metric.name() == name)
    }
}

impl fmt::Display for ScalarMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Multi-period trend metrics, computed on the income statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrendMetric {
    /// Top-line revenue.
    Revenue,
    /// Gross profit.
    GrossProfit,
    /// Net income.
    NetIncome,
}

impl TrendMetric {
    /// Every trend metric the engine computes.
    pub const ALL: [Self; 3] = [Self::Revenue, Self::GrossProfit, Self::NetIncome];

    /// Stable identifier used as the snapshot key.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Revenue => "Revenue",
            Self::GrossProfit => "GrossProfit",
            Self::NetIncome => "NetIncome",
        }
    }

    /// Logical concept name handed to the resolver.
    pub const fn concept(self) -> &'static str {
        // identical to the snapshot key today; kept separate so a metric can
        // be renamed without touching the concept catalog
        self.name()
    }
}

impl fmt::Display for TrendMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Caller-supplied description of one analysis run.
///
/// Identifying strings label the output; the engine never derives them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// Ticker symbol, for labeling only.
    pub ticker: String,
    /// Company display name, for titles.
    pub company_name: String,
    /// Scalar metrics to compute at the latest period.
    pub scalars: Vec<ScalarMetric>,
    /// Trend series to compute across aligned periods.
    pub trends: Vec<TrendMetric>,
    /// Uniform divisor applied to every trend value (e.g. `1e9` for
    /// billions). Non-finite or zero divisors leave values unscaled.
    pub trend_divisor: f64,
    /// Maximum number of most-recent periods per trend series.
    pub trend_periods: usize,
}

impl AnalysisRequest {
    /// Create a request for the full metric set with default scaling.
    pub fn new(ticker: String, company_name: String) -> Self {
        Self {
            ticker,
            company_name,
            scalars: ScalarMetric::ALL.to_vec(),
            trends: TrendMetric::ALL.to_vec(),
            trend_divisor: 1.0,
            trend_periods: DEFAULT_TREND_PERIODS,
        }
    }

    /// Restrict the scalar metrics to compute.
    pub fn with_scalars(mut self, scalars: Vec<ScalarMetric>) -> Self {
        self.scalars = scalars;
        self
    }

    /// Restrict the trend series to compute.
    pub fn with_trends(mut self, trends: Vec<TrendMetric>) -> Self {
        self.trends = trends;
        self
    }

    /// Set the uniform trend divisor.
    pub const fn with_trend_divisor(mut self, divisor: f64) -> Self {
        self.trend_divisor = divisor;
        self
    }

    /// Set the trend window length.
    pub const fn with_trend_periods(mut self, periods: usize) -> Self {
        self.trend_periods = periods;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_lookup_round_trips() {
        for metric in ScalarMetric::ALL {
            assert_eq!(ScalarMetric::from_name(metric.name()), Some(metric));
        }
        assert_eq!(ScalarMetric::from_name("NoSuchMetric"), None);
    }

    #[test]
    fn test_scalar_statements() {
        assert_eq!(
            ScalarMetric::CurrentRatio.statement(),
            StatementKind::Balance
        );
        assert_eq!(
            ScalarMetric::LatestRevenue.statement(),
            StatementKind::Income
        );
    }

    #[test]
    fn test_request_builder() {
        let request = AnalysisRequest::new("AAPL".to_string(), "Apple Inc.".to_string())
            .with_trends(vec![TrendMetric::Revenue])
            .with_trend_divisor(1e9)
            .with_trend_periods(3);

        assert_eq!(request.trends, vec![TrendMetric::Revenue]);
        assert_eq!(request.trend_divisor, 1e9);
        assert_eq!(request.trend_periods, 3);
        assert_eq!(request.scalars.len(), ScalarMetric::ALL.len());
    }
}
