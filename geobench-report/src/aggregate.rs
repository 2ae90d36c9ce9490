//! Per-category, per-series metric values.

use geobench_core::{format_timestamp, select_metric, Error, Result, SnapshotSet, Timestamp};
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::BTreeMap;

/// Metric value per capture time for one series.
pub type SeriesPoints = BTreeMap<Timestamp, f64>;

/// Series of one category, in first-seen order.
pub type CategorySeries = IndexMap<String, SeriesPoints>;

/// Every observed `(category, series, timestamp) -> metric` value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregatedSeries {
	categories: IndexMap<String, CategorySeries>,
}

impl AggregatedSeries {
	/// Empty collection.
	pub fn new() -> Self { Self::default() }

	/// Record one point. A second value for the same point is refused rather
	/// than silently replacing the first.
	pub fn record(&mut self, category: &str, series: &str, ts: Timestamp, value: f64) -> Result<()> {
		let points = self
			.categories
			.entry(category.to_string())
			.or_default()
			.entry(series.to_string())
			.or_default();
		if let Some(prev) = points.get(&ts) {
			return Err(Error::duplicate(format!(
				"{category}/{series} at {}: {prev} already recorded, refusing {value}",
				format_timestamp(&ts)
			)));
		}
		points.insert(ts, value);
		Ok(())
	}

	/// Series of `category`, or [`Error::Lookup`] if nothing reported it.
	pub fn category(&self, category: &str) -> Result<&CategorySeries> {
		self.categories.get(category).ok_or_else(|| Error::lookup(category))
	}

	/// Categories in first-seen order.
	pub fn categories(&self) -> impl Iterator<Item = (&str, &CategorySeries)> {
		self.categories.iter().map(|(k, v)| (k.as_str(), v))
	}

	/// Number of categories.
	pub fn len(&self) -> usize { self.categories.len() }
	/// True when there is nothing to chart.
	pub fn is_empty(&self) -> bool { self.categories.is_empty() }

	/// Per-series point counts and time range.
	pub fn summary(&self) -> Vec<CategorySummary> {
		self.categories
			.iter()
			.map(|(name, series)| CategorySummary {
				category: name.clone(),
				series: series
					.iter()
					.map(|(s, points)| SeriesSummary {
						name: s.clone(),
						points: points.len(),
						first: points.keys().next().map(format_timestamp),
						last: points.keys().next_back().map(format_timestamp),
					})
					.collect(),
			})
			.collect()
	}
}

/// Summary of one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySummary {
	/// Category name.
	pub category: String,
	/// Series in first-seen order.
	pub series: Vec<SeriesSummary>,
}

/// Summary of one series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesSummary {
	/// Series name.
	pub name: String,
	/// Number of recorded points.
	pub points: usize,
	/// Earliest timestamp, formatted.
	pub first: Option<String>,
	/// Latest timestamp, formatted.
	pub last: Option<String>,
}

/// Apply the metric selection rule to every measurement of every snapshot.
pub fn aggregate(snapshots: &SnapshotSet) -> Result<AggregatedSeries> {
	let mut out = AggregatedSeries::new();
	for (ts, snap) in snapshots {
		for (id, m) in &snap.results {
			let v = select_metric(id, m)?;
			out.record(&id.category, &id.series, *ts, v)?;
		}
	}
	tracing::debug!(snapshots = snapshots.len(), categories = out.len(), "aggregated results");
	Ok(out)
}
