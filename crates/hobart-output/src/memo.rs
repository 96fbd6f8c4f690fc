//! Fixed-layout preliminary audit memo.

use hobart_metrics::{MetricSnapshot, MetricUnit, MetricValue, ScalarMetric};

/// A one-page audit memo assembled from a metrics snapshot.
///
/// Layout is fixed: a title line with the company name, a ticker line, then
/// one line per scalar metric in the snapshot. Currency scalars get thousands
/// separators, ratio scalars two decimals, and missing scalars the literal
/// `N/A`. The line is always present, so an absent figure is visible rather
/// than silently omitted.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditMemo {
    lines: Vec<String>,
}

impl AuditMemo {
    /// Assemble a memo from a snapshot.
    pub fn from_snapshot(snapshot: &MetricSnapshot) -> Self {
        let mut lines = Vec::with_capacity(snapshot.scalars.len() + 3);
        lines.push(format!(
            "PRELIMINARY AUDIT MEMO: {}",
            snapshot.company_name
        ));
        lines.push(format!("Ticker: {}", snapshot.ticker));
        lines.push(String::new());

        for (name, value) in &snapshot.scalars {
            lines.push(format!("{}: {}", title_for(name), format_scalar(name, *value)));
        }

        Self { lines }
    }

    /// The memo as plain text, one line per entry.
    pub fn to_text(&self) -> String {
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }

    /// The memo as opaque document bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.to_text().into_bytes()
    }
}

/// Memo caption for a scalar name; unknown names pass through unchanged.
fn title_for(name: &str) -> &str {
    ScalarMetric::from_name(name).map_or(name, |metric| metric.title())
}

fn format_scalar(name: &str, value: MetricValue) -> String {
    let Some(v) = value.value() else {
        return "N/A".to_string();
    };

    match ScalarMetric::from_name(name).map(ScalarMetric::unit) {
        Some(MetricUnit::Ratio) => format!("{v:.2}"),
        _ => format_currency(v),
    }
}

/// Format a currency amount with thousands separators, e.g. `$1,234,568`.
///
/// Rounds to whole units; negative amounts render as `-$…`.
pub fn format_currency(value: f64) -> String {
    let negative = value < 0.0;
    let digits = format!("{:.0}", value.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}
