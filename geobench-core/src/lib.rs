#![forbid(unsafe_code)]
//! Geo benchmark report core: the snapshot data model, the per-category
//! metric selection rule, the error taxonomy shared by every stage, and the
//! report configuration.

pub mod config;
pub mod error;
pub mod metric;
pub mod types;

pub use config::{CategoryConfig, LayoutConfig, PageConfig, ReportConfig, DEFAULT_CATEGORIES};
pub use error::{Error, Result};
pub use metric::{select_metric, MetricKind, QPS_CATEGORY};
pub use types::{check_name, format_timestamp, parse_timestamp, Measurement, SeriesId, Snapshot, SnapshotSet, Timestamp};
