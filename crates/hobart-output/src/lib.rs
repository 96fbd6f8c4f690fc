#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/hobart/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod export;
pub mod memo;
pub mod narrative;

pub use export::{ExportError, ExportFormat, export_snapshot, export_snapshot_to_file};
pub use memo::{AuditMemo, format_currency};
pub use narrative::{DEFAULT_RISK_EXCERPT_CHARS, excerpt};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
