#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/hobart/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod align;
pub mod error;
pub mod frame;
pub mod period;
pub mod resolve;
pub mod table;

pub use align::{AlignedStatement, DuplicatePeriodWarning, align};
pub use error::{Result, StatementError};
pub use period::PeriodLabel;
pub use resolve::ConceptCatalog;
pub use table::{DumpRow, LineItem, StatementDump, StatementKind, StatementTable};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
