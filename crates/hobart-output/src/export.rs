//! Snapshot export to CSV and JSON.

use hobart_metrics::{MetricSnapshot, MetricValue};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during export operations.
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV serialization error.
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Export format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Comma-separated values format.
    Csv,

    /// Compact JSON format.
    Json,

    /// Pretty-printed JSON format.
    PrettyJson,
}

impl ExportFormat {
    /// Get the file extension for this format.
    pub const fn extension(&self) -> &str {
        match self {
            Self::Csv => "csv",
            Self::Json | Self::PrettyJson => "json",
        }
    }
}

/// Serialize a snapshot into the requested format.
///
/// CSV output is one `metric,period,value` record per scalar (period
/// `latest`) and per trend series point; missing values serialize as an
/// empty field, keeping absence distinguishable from zero.
pub fn export_snapshot(
    snapshot: &MetricSnapshot,
    format: ExportFormat,
) -> Result<Vec<u8>, ExportError> {
    match format {
        ExportFormat::Csv => snapshot_to_csv(snapshot),
        ExportFormat::Json => Ok(serde_json::to_vec(snapshot)?),
        ExportFormat::PrettyJson => Ok(serde_json::to_vec_pretty(snapshot)?),
    }
}

/// Export a snapshot to a file in the requested format.
pub fn export_snapshot_to_file(
    snapshot: &MetricSnapshot,
    format: ExportFormat,
    path: &Path,
) -> Result<(), ExportError> {
    let bytes = export_snapshot(snapshot, format)?;
    let mut file = File::create(path)?;
    file.write_all(&bytes)?;
    Ok(())
}

fn snapshot_to_csv(snapshot: &MetricSnapshot) -> Result<Vec<u8>, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["metric", "period", "value"])?;

    for (name, value) in &snapshot.scalars {
        let rendered = render_value(*value);
        writer.write_record([name.as_str(), "latest", rendered.as_str()])?;
    }

    for (name, points) in &snapshot.series {
        for point in points {
            let rendered = render_value(point.value);
            writer.write_record([name.as_str(), point.period.as_str(), rendered.as_str()])?;
        }
    }

    writer.flush()?;
    writer
        .into_inner()
        .map_err(|err| ExportError::Io(err.into_error()))
}

fn render_value(value: MetricValue) -> String {
    value.value().map_or_else(String::new, |v| v.to_string())
}
