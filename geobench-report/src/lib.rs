#![forbid(unsafe_code)]
//! Turns benchmark snapshots into the chart report.
//!
//! Stages run strictly forward: [`aggregate`] selects one metric per
//! measurement, [`build_matrix`] aligns a category's series on a shared time
//! axis, [`render_chart`] serialises the matrix into a chart block, and
//! [`render_page`] wraps the blocks into the document.
//!
//! ```
//! use geobench_core::{parse_timestamp, Measurement, ReportConfig, Snapshot, SnapshotSet};
//! use geobench_report::generate_report;
//!
//! let mut set = SnapshotSet::new();
//! let mut snap = Snapshot::new(parse_timestamp("2020-01-01 00:00:00").unwrap());
//! for c in geobench_core::DEFAULT_CATEGORIES {
//!     snap = snap.with(c, "points", Measurement::new(12.0, 1.5, 100)).unwrap();
//! }
//! set.insert(snap.timestamp, snap);
//!
//! let report = generate_report(&set, &ReportConfig::default()).unwrap();
//! assert_eq!(report.charts.len(), 5);
//! assert!(report.html.contains("2020-01-01 00:00:00,12.00"));
//! ```

pub mod aggregate;
pub mod chart_data;
pub mod matrix;
pub mod page;
pub mod pipeline;
pub mod render;

pub use aggregate::{aggregate, AggregatedSeries, CategorySeries, CategorySummary, SeriesPoints, SeriesSummary};
pub use chart_data::{decode, encode, format_value, DecodedChart, DecodedRow};
pub use matrix::{build_matrix, ChartMatrix, MatrixRow};
pub use page::render_page;
pub use pipeline::{generate_report, render_category, ChartSummary, Report};
pub use render::{render_chart, ChartSpec, LayoutState, Placement};
