#![forbid(unsafe_code)]
//! Logging bootstrap shared by the geobench binaries.
//!
//! `RUST_LOG` wins over the configured level when it is set, so a single run
//! can be made chattier without touching the config file.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

/// Logging setup errors.
#[derive(thiserror::Error, Debug)]
pub enum Error {
	/// The filter or subscriber could not be built.
	#[error("telemetry init failed: {0}")]
	Init(String),
	/// Unknown `--log-format` value.
	#[error("unknown log format: {0}")]
	Format(String),
}
/// Result alias for logging setup.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
	/// Human readable lines.
	#[default]
	Text,
	/// One JSON object per event.
	Json,
}

impl FromStr for LogFormat {
	type Err = Error;
	fn from_str(s: &str) -> Result<Self> {
		match s.trim().to_ascii_lowercase().as_str() {
			"text" => Ok(Self::Text),
			"json" => Ok(Self::Json),
			other => Err(Error::Format(other.to_string())),
		}
	}
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
	/// Filter directive used when `RUST_LOG` is unset.
	pub level: String,
	/// Output format.
	pub format: LogFormat,
}

impl Default for Config {
	fn default() -> Self { Self { level: "info".into(), format: LogFormat::Text } }
}

impl Config {
	/// Settings from a level and format.
	pub fn new(level: impl Into<String>, format: LogFormat) -> Self { Self { level: level.into(), format } }

	fn filter(&self) -> Result<EnvFilter> {
		match std::env::var("RUST_LOG") {
			Ok(v) if !v.trim().is_empty() => EnvFilter::try_new(v).map_err(|e| Error::Init(e.to_string())),
			_ => EnvFilter::try_new(&self.level).map_err(|e| Error::Init(e.to_string())),
		}
	}
}

/// Install the global subscriber. Logs go to stderr so stdout stays usable for
/// command output. Returns `Ok(false)` if a subscriber was already installed.
pub fn init(cfg: &Config) -> Result<bool> {
	let filter = cfg.filter()?;
	let builder = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).with_target(false);
	let installed = match cfg.format {
		LogFormat::Text => builder.try_init().is_ok(),
		LogFormat::Json => builder.json().try_init().is_ok(),
	};
	if installed {
		tracing::debug!(level = %cfg.level, format = ?cfg.format, "logging initialised");
	}
	Ok(installed)
}
