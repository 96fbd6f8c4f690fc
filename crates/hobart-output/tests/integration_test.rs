//! Integration tests for memo rendering and snapshot export.

use hobart_metrics::{
    AnalysisRequest, MetricEngine, ScalarMetric, StatementSet, TrendMetric,
};
use hobart_output::{AuditMemo, ExportFormat, export_snapshot};
use hobart_statements::{DumpRow, StatementDump, StatementKind, StatementTable, align};

fn statements() -> StatementSet {
    let income = StatementDump {
        periods: vec!["2022-12-31".to_string(), "2023-12-31".to_string()],
        rows: vec![
            DumpRow {
                concept: Some("us-gaap_Revenues".to_string()),
                label: "Total revenue".to_string(),
                values: vec![Some(1_000_000.0), Some(1_250_000.0)],
            },
            DumpRow {
                concept: Some("us-gaap_NetIncomeLoss".to_string()),
                label: "Net income".to_string(),
                values: vec![Some(90_000.0), Some(120_000.0)],
            },
        ],
    };
    let balance = StatementDump {
        periods: vec!["2023-12-31".to_string()],
        rows: vec![
            DumpRow {
                concept: Some("us-gaap_AssetsCurrent".to_string()),
                label: "Total current assets".to_string(),
                values: vec![Some(0.0)],
            },
            DumpRow {
                concept: Some("us-gaap_LiabilitiesCurrent".to_string()),
                label: "Total current liabilities".to_string(),
                values: vec![Some(500.0)],
            },
        ],
    };

    let mut set = StatementSet::new();
    set.insert(align(
        &StatementTable::from_dump(StatementKind::Income, &income).unwrap(),
    ));
    set.insert(align(
        &StatementTable::from_dump(StatementKind::Balance, &balance).unwrap(),
    ));
    set
}

#[test]
fn test_snapshot_to_memo_and_export() {
    let request = AnalysisRequest::new("TEST".to_string(), "Test Co".to_string())
        .with_scalars(vec![
            ScalarMetric::CurrentRatio,
            ScalarMetric::LatestRevenue,
            ScalarMetric::LatestNetIncome,
        ])
        .with_trends(vec![TrendMetric::Revenue, TrendMetric::NetIncome]);

    let snapshot = MetricEngine::new().compute(&statements(), &request);

    // zero current assets over nonzero liabilities is a valid 0.0 ratio
    assert_eq!(snapshot.scalar("CurrentRatio").unwrap().value(), Some(0.0));

    let memo = AuditMemo::from_snapshot(&snapshot);
    let text = memo.to_text();
    assert!(text.starts_with("PRELIMINARY AUDIT MEMO: Test Co"));
    assert!(text.contains("Ticker: TEST"));
    assert!(text.contains("Reported Revenue: $1,250,000"));
    assert!(text.contains("Reported Net Income: $120,000"));

    let csv = String::from_utf8(export_snapshot(&snapshot, ExportFormat::Csv).unwrap()).unwrap();
    assert!(csv.contains("Revenue,FY22,1000000"));
    assert!(csv.contains("Revenue,FY23,1250000"));
}

#[test]
fn test_memo_shows_na_when_balance_sheet_missing() {
    let income = StatementDump {
        periods: vec!["2023-12-31".to_string()],
        rows: vec![DumpRow {
            concept: Some("us-gaap_Revenues".to_string()),
            label: "Total revenue".to_string(),
            values: vec![Some(500.0)],
        }],
    };
    let mut set = StatementSet::new();
    set.insert(align(
        &StatementTable::from_dump(StatementKind::Income, &income).unwrap(),
    ));

    let request = AnalysisRequest::new("TEST".to_string(), "Test Co".to_string())
        .with_scalars(vec![ScalarMetric::CurrentRatio, ScalarMetric::LatestRevenue]);
    let snapshot = MetricEngine::new().compute(&set, &request);

    let text = AuditMemo::from_snapshot(&snapshot).to_text();
    assert!(text.contains("Current Ratio: N/A"));
    assert!(text.contains("Reported Revenue: $500"));
}
