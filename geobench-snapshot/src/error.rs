//! Snapshot loading errors.

use std::path::PathBuf;

/// Result alias for snapshot loading.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Snapshot loading errors.
#[derive(thiserror::Error, Debug)]
pub enum Error {
	/// Validation error from the data model.
	#[error(transparent)]
	Core(#[from] geobench_core::Error),
	/// File system failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Malformed JSON payload.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// Malformed CBOR payload.
	#[error("cbor: {0}")]
	Cbor(#[from] ciborium::de::Error<std::io::Error>),
	/// CBOR encoding failure.
	#[error("cbor-ser: {0}")]
	CborSer(#[from] ciborium::ser::Error<std::io::Error>),
	/// Recognised extension with a malformed timestamp stem.
	#[error("invalid snapshot file name: {0}")]
	InvalidName(String),
	/// Payload written for another schema version.
	#[error("unsupported snapshot schema version {found} (expected {expected})")]
	UnsupportedVersion {
		/// Version in the payload.
		found: u32,
		/// [`crate::SCHEMA_VERSION`].
		expected: u32,
	},
	/// Two files name the same capture time.
	#[error("two snapshot files share timestamp {timestamp}: {first} and {second}")]
	DuplicateTimestamp {
		/// Shared capture time, formatted.
		timestamp: String,
		/// File listed first.
		first: PathBuf,
		/// File listed second.
		second: PathBuf,
	},
	/// Any of the above, tagged with the file it came from.
	#[error("{path}: {source}")]
	File {
		/// Offending file.
		path: PathBuf,
		/// Underlying error.
		#[source]
		source: Box<Error>,
	},
}

impl Error {
	/// Invalid name error for `name`.
	pub fn invalid_name(name: impl Into<String>) -> Self { Self::InvalidName(name.into()) }

	pub(crate) fn in_file(self, path: impl Into<PathBuf>) -> Self {
		Self::File { path: path.into(), source: Box::new(self) }
	}

	/// True when the underlying cause is a schema violation of a payload.
	pub fn is_schema(&self) -> bool {
		match self {
			Self::Core(e) => e.is_schema(),
			Self::UnsupportedVersion { .. } => true,
			Self::File { source, .. } => source.is_schema(),
			_ => false,
		}
	}
}
