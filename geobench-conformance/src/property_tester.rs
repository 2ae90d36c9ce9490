//! Property checks over rendered report structures.

use geobench_report::{AggregatedSeries, ChartMatrix};
use std::collections::BTreeSet;

/// Errors that can arise from simple property checks.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum PropertyError {
	/// Sequence is not strictly increasing at index `idx` (prev, next).
	#[error("not strictly increasing at {idx}: {prev} -> {next}")]
	NotIncreasing {
		/// Index of `prev`.
		idx: usize,
		/// Debug form of the earlier element.
		prev: String,
		/// Debug form of the later element.
		next: String,
	},
	/// Adjacent differences are not all equal.
	#[error("step {found} at index {idx} differs from {expected}")]
	UnevenStep {
		/// Index of the offending difference.
		idx: usize,
		/// First difference.
		expected: i64,
		/// Difference at `idx`.
		found: i64,
	},
	/// Matrix axis differs from the union of the category's timestamps.
	#[error("time axis has {axis} entries, union of series has {union}")]
	AxisMismatch {
		/// Matrix axis length.
		axis: usize,
		/// Distinct input timestamps.
		union: usize,
	},
	/// A cell disagrees with the aggregated input.
	#[error("row {row}, series '{series}': matrix {found:?}, input {expected:?}")]
	Cell {
		/// Row index.
		row: usize,
		/// Column name.
		series: String,
		/// Matrix value.
		found: Option<f64>,
		/// Aggregated value.
		expected: Option<f64>,
	},
	/// Row length differs from the number of series.
	#[error("row {row} has {found} values for {expected} series")]
	RowWidth {
		/// Row index.
		row: usize,
		/// Values in the row.
		found: usize,
		/// Series in the matrix.
		expected: usize,
	},
	/// Matrix columns are not the input series in first-seen order.
	#[error("matrix series {found:?}, input series {expected:?}")]
	SeriesMismatch {
		/// Input series, first-seen order.
		expected: Vec<String>,
		/// Matrix columns.
		found: Vec<String>,
	},
}

/// Check that a slice is strictly increasing.
/// Returns Ok(()) if all adjacent pairs satisfy a[i] < a[i+1].
pub fn check_strictly_increasing<T: PartialOrd + std::fmt::Debug>(a: &[T]) -> Result<(), PropertyError> {
	for (i, w) in a.windows(2).enumerate() {
		if w[0].partial_cmp(&w[1]) != Some(std::cmp::Ordering::Less) {
			return Err(PropertyError::NotIncreasing { idx: i, prev: format!("{:?}", w[0]), next: format!("{:?}", w[1]) });
		}
	}
	Ok(())
}

/// Check that `a` is an arithmetic sequence with a positive common difference;
/// returns the difference. Sequences shorter than two have none.
pub fn check_arithmetic(a: &[u32]) -> Result<Option<i64>, PropertyError> {
	check_strictly_increasing(a)?;
	let mut steps = a.windows(2).map(|w| i64::from(w[1]) - i64::from(w[0]));
	let Some(expected) = steps.next() else { return Ok(None) };
	for (i, found) in steps.enumerate() {
		if found != expected {
			return Err(PropertyError::UnevenStep { idx: i + 1, expected, found });
		}
	}
	Ok(Some(expected))
}

/// The matrix built for `category` agrees with the aggregated input:
/// the columns are the input series in their order, the axis is the sorted
/// union of timestamps and each cell is present exactly when the series had
/// a value at that time.
pub fn check_matrix_against(agg: &AggregatedSeries, category: &str, m: &ChartMatrix) -> Result<(), PropertyError> {
	let Ok(series) = agg.category(category) else {
		return if m.is_empty() { Ok(()) } else { Err(PropertyError::AxisMismatch { axis: m.time_axis.len(), union: 0 }) };
	};
	if !m.series_names.iter().eq(series.keys()) {
		return Err(PropertyError::SeriesMismatch { expected: series.keys().cloned().collect(), found: m.series_names.clone() });
	}
	let union: BTreeSet<_> = series.values().flat_map(|p| p.keys().copied()).collect();
	if m.time_axis.len() != union.len() || !m.time_axis.iter().eq(union.iter()) {
		return Err(PropertyError::AxisMismatch { axis: m.time_axis.len(), union: union.len() });
	}
	check_strictly_increasing(&m.time_axis)?;
	for (r, row) in m.rows.iter().enumerate() {
		if row.values.len() != m.series_names.len() {
			return Err(PropertyError::RowWidth { row: r, found: row.values.len(), expected: m.series_names.len() });
		}
		for (name, found) in m.series_names.iter().zip(&row.values) {
			let expected = series.get(name).and_then(|p| p.get(&row.timestamp)).copied();
			if *found != expected {
				return Err(PropertyError::Cell { row: r, series: name.clone(), found: *found, expected });
			}
		}
	}
	Ok(())
}
