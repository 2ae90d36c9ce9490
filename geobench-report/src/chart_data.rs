//! Text table fed to the chart front end.
//!
//! ```text
//! chart     := header ("\n" row)*
//! header    := "Date" ("," name)*
//! row       := timestamp ("," value?)*      ; one field per header field
//! value     := decimal with two fractional digits
//! timestamp := YYYY-MM-DD HH:MM:SS
//! ```
//!
//! A missing value is an empty field. It is never written as `0.00`.

use crate::matrix::{ChartMatrix, MatrixRow};
use geobench_core::{format_timestamp, parse_timestamp, Error, Result, Timestamp};

/// Label of the leading column.
pub const DATE_COLUMN: &str = "Date";

/// Two fractional digits, rounded.
pub fn format_value(v: f64) -> String { format!("{v:.2}") }

/// `Date` followed by the series names.
pub fn header_line(series_names: &[String]) -> String {
	std::iter::once(DATE_COLUMN).chain(series_names.iter().map(String::as_str)).collect::<Vec<_>>().join(",")
}

/// Timestamp followed by one field per series, empty for gaps.
pub fn row_line(row: &MatrixRow) -> String {
	let mut fields = Vec::with_capacity(row.values.len() + 1);
	fields.push(format_timestamp(&row.timestamp));
	fields.extend(row.values.iter().map(|v| v.map(format_value).unwrap_or_default()));
	fields.join(",")
}

/// Header line followed by one line per matrix row.
pub fn encode(matrix: &ChartMatrix) -> Vec<String> {
	let mut lines = Vec::with_capacity(matrix.rows.len() + 1);
	lines.push(header_line(&matrix.series_names));
	lines.extend(matrix.rows.iter().map(row_line));
	lines
}

/// Parsed form of [`encode`] output. Values are as precise as the text.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedChart {
	/// Names from the header line.
	pub series_names: Vec<String>,
	/// Data rows in order.
	pub rows: Vec<DecodedRow>,
}

/// One parsed data row.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedRow {
	/// Capture time.
	pub timestamp: Timestamp,
	/// Parsed fields; empty ones are `None`.
	pub values: Vec<Option<f64>>,
}

/// Parse chart text, failing with `Encoding` on any grammar violation.
pub fn decode(text: &str) -> Result<DecodedChart> {
	let mut lines = text.lines();
	let header = lines.next().ok_or_else(|| Error::encoding("missing header line"))?;
	let mut names = header.split(',');
	if names.next() != Some(DATE_COLUMN) {
		return Err(Error::encoding(format!("header must start with '{DATE_COLUMN}': {header:?}")));
	}
	let series_names: Vec<String> = names.map(str::to_string).collect();

	let mut rows = Vec::new();
	let mut prev: Option<Timestamp> = None;
	for (n, line) in lines.enumerate() {
		let lineno = n + 2;
		let mut fields = line.split(',');
		let ts = parse_timestamp(fields.next().unwrap_or_default())
			.map_err(|e| Error::encoding(format!("line {lineno}: {e}")))?;
		if prev.is_some_and(|p| p >= ts) {
			return Err(Error::encoding(format!("line {lineno}: timestamps must be strictly increasing")));
		}
		prev = Some(ts);
		let values = fields.map(|f| parse_value(f, lineno)).collect::<Result<Vec<_>>>()?;
		if values.len() != series_names.len() {
			return Err(Error::encoding(format!(
				"line {lineno}: {} values for {} series",
				values.len(),
				series_names.len()
			)));
		}
		rows.push(DecodedRow { timestamp: ts, values });
	}
	Ok(DecodedChart { series_names, rows })
}

fn parse_value(field: &str, lineno: usize) -> Result<Option<f64>> {
	if field.is_empty() {
		return Ok(None);
	}
	let well_formed = field
		.split_once('.')
		.is_some_and(|(int, frac)| {
			let int = int.strip_prefix('-').unwrap_or(int);
			!int.is_empty() && int.bytes().all(|b| b.is_ascii_digit()) && frac.len() == 2 && frac.bytes().all(|b| b.is_ascii_digit())
		});
	if !well_formed {
		return Err(Error::encoding(format!("line {lineno}: malformed value {field:?}")));
	}
	field.parse().map(Some).map_err(|e| Error::encoding(format!("line {lineno}: {e}")))
}
