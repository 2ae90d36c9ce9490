//! Versioned on-disk snapshot schema.
//!
//! A payload is decoded as-is and only then validated into a
//! [`Snapshot`]; missing metrics therefore surface as schema errors naming
//! the offending series instead of opaque decode failures.

use crate::error::{Error, Result};
use crate::name::PayloadFormat;
use geobench_core::{select_metric, Measurement, SeriesId, Snapshot, Timestamp};
use serde::{Deserialize, Serialize};

/// Payload schema this build reads and writes.
pub const SCHEMA_VERSION: u32 = 1;

/// On-disk form of a [`Snapshot`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotPayload {
	/// Schema version, [`SCHEMA_VERSION`] when written by this crate.
	pub version: u32,
	/// Measurements in reported order.
	#[serde(default)]
	pub results: Vec<ResultRecord>,
}

/// One measurement with its key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
	/// Category name.
	pub category: String,
	/// Series name.
	pub series: String,
	/// Flattened metric fields.
	#[serde(flatten)]
	pub measurement: Measurement,
}

impl SnapshotPayload {
	/// Payload at the current schema version.
	pub fn new(results: Vec<ResultRecord>) -> Self { Self { version: SCHEMA_VERSION, results } }

	/// Payload holding every measurement of `s`.
	pub fn from_snapshot(s: &Snapshot) -> Self {
		let results = s
			.results
			.iter()
			.map(|(id, m)| ResultRecord { category: id.category.clone(), series: id.series.clone(), measurement: *m })
			.collect();
		Self::new(results)
	}

	/// Decode bytes in `format`.
	pub fn decode(bytes: &[u8], format: PayloadFormat) -> Result<Self> {
		match format {
			PayloadFormat::Cbor => Self::from_cbor(bytes),
			PayloadFormat::Json => Self::from_json(bytes),
		}
	}

	/// Encode in `format`.
	pub fn encode(&self, format: PayloadFormat) -> Result<Vec<u8>> {
		match format {
			PayloadFormat::Cbor => self.to_cbor(),
			PayloadFormat::Json => self.to_json(),
		}
	}

	/// Decode CBOR.
	pub fn from_cbor(bytes: &[u8]) -> Result<Self> { Ok(ciborium::de::from_reader(bytes)?) }

	/// Encode as CBOR.
	pub fn to_cbor(&self) -> Result<Vec<u8>> {
		let mut out = Vec::new();
		ciborium::ser::into_writer(self, &mut out)?;
		Ok(out)
	}

	/// Decode JSON.
	pub fn from_json(bytes: &[u8]) -> Result<Self> { Ok(serde_json::from_slice(bytes)?) }

	/// Pretty-printed JSON.
	pub fn to_json(&self) -> Result<Vec<u8>> { Ok(serde_json::to_vec_pretty(self)?) }

	/// Check the payload against the schema and turn it into a [`Snapshot`].
	pub fn into_snapshot(self, timestamp: Timestamp) -> Result<Snapshot> {
		if self.version != SCHEMA_VERSION {
			return Err(Error::UnsupportedVersion { found: self.version, expected: SCHEMA_VERSION });
		}
		let mut snap = Snapshot::new(timestamp);
		for rec in self.results {
			let id = SeriesId::new(rec.category, rec.series);
			select_metric(&id, &rec.measurement)?;
			snap.insert(id, rec.measurement)?;
		}
		Ok(snap)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use geobench_core::parse_timestamp;

	fn ts() -> Timestamp { parse_timestamp("2020-01-01 00:00:00").unwrap() }

	fn rec(category: &str, series: &str, m: Measurement) -> ResultRecord {
		ResultRecord { category: category.into(), series: series.into(), measurement: m }
	}

	#[test]
	fn cbor_payload_validates_into_snapshot() {
		let p = SnapshotPayload::new(vec![
			rec("distance", "A", Measurement::new(5.0, 1.5, 100)),
			rec("nearest 10", "A", Measurement { qps: Some(10.0), mhps: None, total_hits: None }),
		]);
		let bytes = p.to_cbor().unwrap();
		let snap = SnapshotPayload::from_cbor(&bytes).unwrap().into_snapshot(ts()).unwrap();
		assert_eq!(snap.len(), 2);
		assert_eq!(snap.results[&SeriesId::new("distance", "A")].mhps, Some(1.5));
	}

	#[test]
	fn json_accepts_unknown_fields_and_missing_optionals() {
		let text = br#"{"version":1,"stats":{"index_mb":12.5},"results":[{"category":"box","series":"B","mhps":2.25,"extra":true}]}"#;
		let snap = SnapshotPayload::from_json(text).unwrap().into_snapshot(ts()).unwrap();
		let m = snap.results[&SeriesId::new("box", "B")];
		assert_eq!(m, Measurement { qps: None, mhps: Some(2.25), total_hits: None });
	}

	#[test]
	fn missing_required_metric_is_schema_error() {
		let p = SnapshotPayload::new(vec![rec("nearest 10", "A", Measurement { qps: None, mhps: Some(99.0), total_hits: Some(1) })]);
		let err = p.into_snapshot(ts()).unwrap_err();
		assert!(err.is_schema(), "{err}");
	}

	#[test]
	fn rejects_bad_versions_keys_and_duplicates() {
		let mut p = SnapshotPayload::new(vec![]);
		p.version = 2;
		assert!(matches!(p.into_snapshot(ts()), Err(Error::UnsupportedVersion { found: 2, .. })));

		let p = SnapshotPayload::new(vec![rec("box", "a,b", Measurement::new(1.0, 1.0, 1))]);
		assert!(p.into_snapshot(ts()).unwrap_err().is_schema());

		let p = SnapshotPayload::new(vec![rec("", "a", Measurement::new(1.0, 1.0, 1))]);
		assert!(p.into_snapshot(ts()).unwrap_err().is_schema());

		let p = SnapshotPayload::new(vec![rec("box", "a", Measurement::new(1.0, 1.0, 1)), rec("box", "a", Measurement::new(2.0, 2.0, 2))]);
		assert!(p.into_snapshot(ts()).unwrap_err().is_schema());
	}

	#[test]
	fn from_snapshot_preserves_order() {
		let snap = Snapshot::new(ts())
			.with("sort", "z", Measurement::new(1.0, 1.0, 1)).unwrap()
			.with("box", "a", Measurement::new(2.0, 2.0, 2)).unwrap();
		let p = SnapshotPayload::from_snapshot(&snap);
		let decoded = SnapshotPayload::from_json(&p.to_json().unwrap()).unwrap().into_snapshot(ts()).unwrap();
		assert_eq!(decoded, snap);
	}
}
