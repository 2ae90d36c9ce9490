//! Which measurement field each category plots.

use crate::{
	error::{Error, Result},
	types::{Measurement, SeriesId},
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The only category plotted as queries per second.
pub const QPS_CATEGORY: &str = "nearest 10";

/// Scalar plotted for a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
	/// Queries per second.
	Qps,
	/// Millions of hits per second.
	Mhps,
}

impl MetricKind {
	/// Metric plotted for `category`.
	pub fn for_category(category: &str) -> Self {
		if category == QPS_CATEGORY { Self::Qps } else { Self::Mhps }
	}

	/// The selected field of `m`, if present.
	pub fn select(self, m: &Measurement) -> Option<f64> {
		match self {
			Self::Qps => m.qps,
			Self::Mhps => m.mhps,
		}
	}

	/// Payload field name of the metric.
	pub fn field_name(self) -> &'static str {
		match self {
			Self::Qps => "qps",
			Self::Mhps => "mhps",
		}
	}

	/// Default y-axis label for charts of this metric.
	pub fn axis_label(self) -> &'static str {
		match self {
			Self::Qps => "QPS",
			Self::Mhps => "MHPS",
		}
	}
}

impl fmt::Display for MetricKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.field_name()) }
}

/// Apply the metric selection rule to one measurement.
///
/// Fails with [`Error::Schema`] when the field the category needs is missing
/// or not a finite number.
pub fn select_metric(id: &SeriesId, m: &Measurement) -> Result<f64> {
	let kind = MetricKind::for_category(&id.category);
	let v = kind.select(m).ok_or_else(|| Error::schema(format!("{id}: missing required field '{kind}'")))?;
	if !v.is_finite() {
		return Err(Error::schema(format!("{id}: field '{kind}' is not finite ({v})")));
	}
	Ok(v)
}
