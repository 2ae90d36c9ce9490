//! Snapshot file names: `YYYY.MM.DD.HH.MM.SS.<ext>`.

use crate::error::{Error, Result};
use chrono::NaiveDate;
use geobench_core::Timestamp;

/// Payload encodings recognised by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadFormat {
	/// `.cbor` files.
	Cbor,
	/// `.json` files.
	Json,
}

impl PayloadFormat {
	/// Format for a file extension, `None` if not a snapshot.
	pub fn from_extension(ext: &str) -> Option<Self> {
		match ext {
			"cbor" => Some(Self::Cbor),
			"json" => Some(Self::Json),
			_ => None,
		}
	}

	/// File extension without the dot.
	pub fn extension(self) -> &'static str {
		match self {
			Self::Cbor => "cbor",
			Self::Json => "json",
		}
	}
}

/// Parse a snapshot file name.
///
/// `Ok(None)` means the extension is not a snapshot format and the file should
/// be skipped; a recognised extension with a malformed stem is an error.
pub fn parse_file_name(name: &str) -> Result<Option<(Timestamp, PayloadFormat)>> {
	let Some((stem, ext)) = name.rsplit_once('.') else { return Ok(None) };
	let Some(format) = PayloadFormat::from_extension(ext) else { return Ok(None) };

	let parts: Vec<&str> = stem.split('.').collect();
	if parts.len() != 6 {
		return Err(Error::invalid_name(name));
	}
	let mut fields = [0u32; 6];
	for (slot, part) in fields.iter_mut().zip(&parts) {
		if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
			return Err(Error::invalid_name(name));
		}
		*slot = part.parse().map_err(|_| Error::invalid_name(name))?;
	}
	let [year, month, day, hour, minute, second] = fields;
	let year = i32::try_from(year).map_err(|_| Error::invalid_name(name))?;
	let ts = NaiveDate::from_ymd_opt(year, month, day)
		.and_then(|d| d.and_hms_opt(hour, minute, second))
		.ok_or_else(|| Error::invalid_name(name))?;
	Ok(Some((ts, format)))
}

/// Canonical file name for a snapshot taken at `ts`.
pub fn file_name(ts: &Timestamp, format: PayloadFormat) -> String {
	format!("{}.{}", ts.format("%Y.%m.%d.%H.%M.%S"), format.extension())
}
