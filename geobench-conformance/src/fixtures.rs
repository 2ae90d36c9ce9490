//! Compact builders for snapshot inputs.

use chrono::{Duration, NaiveDate};
use geobench_core::{parse_timestamp, Measurement, Result, Snapshot, SnapshotSet, Timestamp};

/// `(category, series, qps, mhps)`; total hits are irrelevant to the report.
pub type Row<'a> = (&'a str, &'a str, f64, f64);

/// Parse a `YYYY-MM-DD HH:MM:SS` literal.
pub fn ts(s: &str) -> Result<Timestamp> { parse_timestamp(s) }

/// `base + secs` seconds, with base 2020-01-01 00:00:00.
pub fn ts_offset(secs: u32) -> Timestamp {
	let base = NaiveDate::from_ymd_opt(2020, 1, 1).and_then(|d| d.and_hms_opt(0, 0, 0)).unwrap_or_default();
	base + Duration::seconds(i64::from(secs))
}

/// One snapshot at `at` holding `rows`.
pub fn snapshot(at: Timestamp, rows: &[Row<'_>]) -> Result<Snapshot> {
	let mut s = Snapshot::new(at);
	for (category, series, qps, mhps) in rows {
		s = s.with(category, series, Measurement::new(*qps, *mhps, 0))?;
	}
	Ok(s)
}

/// Build a set from `(timestamp literal, rows)` pairs.
pub fn snapshot_set(entries: &[(&str, Vec<Row<'_>>)]) -> Result<SnapshotSet> {
	let mut set = SnapshotSet::new();
	for (at, rows) in entries {
		let s = snapshot(ts(at)?, rows)?;
		set.insert(s.timestamp, s);
	}
	Ok(set)
}
