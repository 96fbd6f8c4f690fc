//! Presentation-ready DataFrame view of a statement table.

use crate::error::Result;
use crate::table::StatementTable;
use polars::prelude::*;

/// Render a statement table as a polars `DataFrame`.
///
/// Columns: `concept` and `label`, then one `f64` column per period named by
/// its fiscal-year token, with unreported entries as nulls. Meant for
/// aligned tables, whose tokens are unique; building a frame from a table
/// with colliding tokens fails with a duplicate-column error. Combine with
/// [`StatementTable::reversed`] for most-recent-first display.
pub fn to_dataframe(table: &StatementTable) -> Result<DataFrame> {
    let concepts: Vec<Option<String>> = table
        .rows()
        .iter()
        .map(|row| row.concept.clone())
        .collect();
    let labels: Vec<String> = table.rows().iter().map(|row| row.label.clone()).collect();

    let mut columns = vec![
        Column::new("concept".into(), concepts),
        Column::new("label".into(), labels),
    ];

    for (idx, period) in table.periods().iter().enumerate() {
        let values: Vec<Option<f64>> = table.rows().iter().map(|row| row.values[idx]).collect();
        columns.push(Column::new(period.fiscal_token().into(), values));
    }

    Ok(DataFrame::new(columns)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::align::align;
    use crate::table::{DumpRow, StatementDump, StatementKind};

    fn sample_table() -> StatementTable {
        let dump = StatementDump {
            periods: vec!["2022-12-31".to_string(), "2023-12-31".to_string()],
            rows: vec![
                DumpRow {
                    concept: Some("us-gaap_Revenues".to_string()),
                    label: "Total revenue".to_string(),
                    values: vec![Some(100.0), Some(120.0)],
                },
                DumpRow {
                    concept: None,
                    label: "Gross profit".to_string(),
                    values: vec![None, Some(45.0)],
                },
            ],
        };
        StatementTable::from_dump(StatementKind::Income, &dump).unwrap()
    }

    #[test]
    fn test_dataframe_shape_and_columns() {
        let aligned = align(&sample_table());
        let frame = to_dataframe(&aligned.table).unwrap();

        assert_eq!(frame.shape(), (2, 4));
        let names: Vec<String> = frame
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect();
        assert_eq!(names, vec!["concept", "label", "FY22", "FY23"]);
    }

    #[test]
    fn test_dataframe_preserves_nulls() {
        let aligned = align(&sample_table());
        let frame = to_dataframe(&aligned.table).unwrap();

        let fy22 = frame
            .column("FY22")
            .unwrap()
            .as_materialized_series()
            .f64()
            .unwrap();
        assert_eq!(fy22.get(0), Some(100.0));
        assert_eq!(fy22.get(1), None);
    }

    #[test]
    fn test_reversed_table_renders_newest_first() {
        let aligned = align(&sample_table());
        let frame = to_dataframe(&aligned.table.reversed()).unwrap();

        let names: Vec<String> = frame
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect();
        assert_eq!(names, vec!["concept", "label", "FY23", "FY22"]);
    }
}
