//! Snapshot data model.

use crate::error::{Error, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt};

/// Capture time of a snapshot. Second resolution; sub-second parts are dropped on output.
pub type Timestamp = chrono::NaiveDateTime;

/// Textual timestamp layout used on chart rows (`YYYY-MM-DD HH:MM:SS`).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render `ts` in [`TIMESTAMP_FORMAT`].
pub fn format_timestamp(ts: &Timestamp) -> String { ts.format(TIMESTAMP_FORMAT).to_string() }

/// Parse [`TIMESTAMP_FORMAT`] text; failures are `Encoding` errors.
pub fn parse_timestamp(s: &str) -> Result<Timestamp> {
	Timestamp::parse_from_str(s, TIMESTAMP_FORMAT).map_err(|e| Error::encoding(format!("bad timestamp '{s}': {e}")))
}

/// One benchmark result. Every field may be missing in a payload; which one is
/// required depends on the category (see [`crate::metric::MetricKind`]).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
	/// Queries per second.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub qps: Option<f64>,
	/// Millions of hits per second.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub mhps: Option<f64>,
	/// Hits summed over the run.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub total_hits: Option<u64>,
}

impl Measurement {
	/// Measurement with every field present.
	pub fn new(qps: f64, mhps: f64, total_hits: u64) -> Self {
		Self { qps: Some(qps), mhps: Some(mhps), total_hits: Some(total_hits) }
	}
}

/// `(category, series)` key of a measurement inside a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SeriesId {
	/// Query category, one chart per category.
	pub category: String,
	/// Variant plotted as one line on the category's chart.
	pub series: String,
}

impl SeriesId {
	/// Key from its two names.
	pub fn new(category: impl Into<String>, series: impl Into<String>) -> Self {
		Self { category: category.into(), series: series.into() }
	}
}

impl fmt::Display for SeriesId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}/{}", self.category, self.series) }
}

/// All measurements of one capture event, in the order they were reported.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
	/// Capture time.
	pub timestamp: Timestamp,
	/// Measurements in reported order.
	pub results: IndexMap<SeriesId, Measurement>,
}

impl Snapshot {
	/// Empty snapshot taken at `timestamp`.
	pub fn new(timestamp: Timestamp) -> Self { Self { timestamp, results: IndexMap::new() } }

	/// Add a measurement. A key may appear only once per snapshot, and both
	/// of its names must be usable as chart column labels.
	pub fn insert(&mut self, id: SeriesId, m: Measurement) -> Result<()> {
		check_name("category", &id.category)?;
		check_name("series", &id.series)?;
		if self.results.contains_key(&id) {
			return Err(Error::schema(format!(
				"snapshot {} reports {id} more than once",
				format_timestamp(&self.timestamp)
			)));
		}
		self.results.insert(id, m);
		Ok(())
	}

	/// Builder form of [`Snapshot::insert`].
	pub fn with(mut self, category: &str, series: &str, m: Measurement) -> Result<Self> {
		self.insert(SeriesId::new(category, series), m)?;
		Ok(self)
	}

	/// Number of measurements.
	pub fn len(&self) -> usize { self.results.len() }
	/// True when there is nothing to chart.
	pub fn is_empty(&self) -> bool { self.results.is_empty() }
}

/// Names end up as comma-separated chart columns; separators would shift
/// every following field.
pub fn check_name(field: &str, value: &str) -> Result<()> {
	if value.trim().is_empty() {
		return Err(Error::schema(format!("empty {field} name")));
	}
	if value.contains([',', '\n', '\r']) {
		return Err(Error::schema(format!("{field} name {value:?} contains a separator")));
	}
	Ok(())
}

/// Snapshots keyed by capture time; iteration is chronological.
pub type SnapshotSet = BTreeMap<Timestamp, Snapshot>;
