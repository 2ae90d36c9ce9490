//! Error taxonomy shared by every report stage.

use thiserror::Error;

/// Result alias used across the workspace.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors shared by every report stage.
#[derive(Debug, Error)]
pub enum Error {
	/// File system failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// JSON encode or decode failure.
	#[error("serde: {0}")]
	Serde(#[from] serde_json::Error),
	/// Invalid or unreadable configuration.
	#[error("config: {0}")]
	Config(String),
	/// A measurement lacks a field its category's metric needs, or a payload is malformed.
	#[error("schema: {0}")]
	Schema(String),
	/// A configured category never appeared in any snapshot.
	#[error("lookup: no results for category '{category}'")]
	Lookup {
		/// Configured category name.
		category: String,
	},
	/// A second value for one `(category, series, timestamp)`.
	#[error("duplicate: {0}")]
	Duplicate(String),
	/// Chart data text that does not follow the header/row grammar.
	#[error("encoding: {0}")]
	Encoding(String),
}

impl Error {
	/// Config error from a message.
	pub fn config(msg: impl Into<String>) -> Self { Self::Config(msg.into()) }
	/// Schema error from a message.
	pub fn schema(msg: impl Into<String>) -> Self { Self::Schema(msg.into()) }
	/// Lookup error for `category`.
	pub fn lookup(category: impl Into<String>) -> Self { Self::Lookup { category: category.into() } }
	/// Duplicate error from a message.
	pub fn duplicate(msg: impl Into<String>) -> Self { Self::Duplicate(msg.into()) }
	/// Encoding error from a message.
	pub fn encoding(msg: impl Into<String>) -> Self { Self::Encoding(msg.into()) }

	/// True for schema violations.
	pub fn is_schema(&self) -> bool { matches!(self, Self::Schema(_)) }
	/// True when a configured category had no data.
	pub fn is_lookup(&self) -> bool { matches!(self, Self::Lookup { .. }) }
}
