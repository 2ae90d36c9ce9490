//! Alignment of a category's series on one time axis.

use crate::aggregate::CategorySeries;
use geobench_core::Timestamp;
use std::collections::BTreeSet;

/// One category laid out on a shared time axis.
///
/// Every row has exactly one slot per entry of `series_names`; `None` marks a
/// series with no measurement at that time, which charts draw as a gap.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartMatrix {
	/// Sorted union of the series' timestamps.
	pub time_axis: Vec<Timestamp>,
	/// Column labels after the date column.
	pub series_names: Vec<String>,
	/// One row per axis entry.
	pub rows: Vec<MatrixRow>,
}

/// One time-axis entry of a [`ChartMatrix`].
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixRow {
	/// Capture time.
	pub timestamp: Timestamp,
	/// One slot per series; `None` is a gap.
	pub values: Vec<Option<f64>>,
}

impl ChartMatrix {
	/// True when there is nothing to chart.
	pub fn is_empty(&self) -> bool { self.rows.is_empty() }

	/// Number of columns in the encoded table, including the date column.
	pub fn column_count(&self) -> usize { self.series_names.len() + 1 }

	/// Values of one series down the time axis.
	pub fn column(&self, series: &str) -> Option<Vec<Option<f64>>> {
		let idx = self.series_names.iter().position(|s| s == series)?;
		Some(self.rows.iter().map(|r| r.values[idx]).collect())
	}
}

/// Build the aligned matrix for one category.
///
/// The axis is the sorted union of all series' timestamps; series keep the
/// order of the input map.
pub fn build_matrix(series: &CategorySeries) -> ChartMatrix {
	let time_axis: Vec<Timestamp> = series
		.values()
		.flat_map(|points| points.keys().copied())
		.collect::<BTreeSet<_>>()
		.into_iter()
		.collect();
	let series_names: Vec<String> = series.keys().cloned().collect();
	let rows = time_axis
		.iter()
		.map(|ts| MatrixRow { timestamp: *ts, values: series.values().map(|points| points.get(ts).copied()).collect() })
		.collect();
	ChartMatrix { time_axis, series_names, rows }
}
