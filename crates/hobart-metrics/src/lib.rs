#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/hobart/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod engine;
pub mod request;
pub mod snapshot;
pub mod value;

pub use engine::{MetricEngine, StatementSet};
pub use request::{
    AnalysisRequest, DEFAULT_TREND_PERIODS, MetricUnit, ScalarMetric, TrendMetric,
};
pub use snapshot::{MetricSnapshot, SeriesPoint};
pub use value::{MetricValue, MissingReason};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
