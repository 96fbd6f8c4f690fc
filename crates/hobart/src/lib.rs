#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/hobart/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod analysis;

// Re-export main types from sub-crates
pub use hobart_metrics as metrics;
pub use hobart_output as output;
pub use hobart_statements as statements;

pub use analysis::{AnalysisReport, Analyzer, FilingBundle};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
