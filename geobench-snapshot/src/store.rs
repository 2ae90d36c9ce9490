//! Snapshot sources: a directory of payload files, or memory.

use crate::error::{Error, Result};
use crate::name::{self, PayloadFormat};
use crate::payload::SnapshotPayload;
use geobench_core::{format_timestamp, Snapshot, SnapshotSet, Timestamp};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Anything that can hand the pipeline every snapshot at once.
pub trait SnapshotSource {
	fn load_all(&self) -> Result<SnapshotSet>;
}

/// A snapshot file found on disk, not yet decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotEntry {
	/// Full path of the file.
	pub path: PathBuf,
	/// Capture time taken from the file name.
	pub timestamp: Timestamp,
	/// Encoding chosen by extension.
	pub format: PayloadFormat,
}

/// One file per capture, named after its capture time.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
	root: PathBuf,
}

impl DirectoryStore {
	/// Store reading from `root`.
	pub fn new(root: impl Into<PathBuf>) -> Self { Self { root: root.into() } }

	/// Directory being read.
	pub fn root(&self) -> &Path { &self.root }

	/// Snapshot files in the directory, ordered by timestamp.
	pub fn entries(&self) -> Result<Vec<SnapshotEntry>> {
		let mut by_time: BTreeMap<Timestamp, SnapshotEntry> = BTreeMap::new();
		let mut names = Vec::new();
		for dirent in fs::read_dir(&self.root)? {
			let dirent = dirent?;
			if !dirent.file_type()?.is_file() { continue; }
			names.push(dirent.file_name());
		}
		names.sort();

		for os_name in names {
			let path = self.root.join(&os_name);
			let Some(file_name) = os_name.to_str() else {
				debug!(path = %path.display(), "skipping non-UTF-8 file name");
				continue;
			};
			let Some((timestamp, format)) = name::parse_file_name(file_name)? else {
				debug!(file = file_name, "skipping non-snapshot file");
				continue;
			};
			if let Some(prev) = by_time.get(&timestamp) {
				return Err(Error::DuplicateTimestamp {
					timestamp: format_timestamp(&timestamp),
					first: prev.path.clone(),
					second: path,
				});
			}
			by_time.insert(timestamp, SnapshotEntry { path, timestamp, format });
		}
		Ok(by_time.into_values().collect())
	}

	/// Decode and validate one listed file.
	pub fn load_entry(&self, entry: &SnapshotEntry) -> Result<Snapshot> {
		let bytes = fs::read(&entry.path).map_err(|e| Error::from(e).in_file(&entry.path))?;
		SnapshotPayload::decode(&bytes, entry.format)
			.and_then(|p| p.into_snapshot(entry.timestamp))
			.map_err(|e| e.in_file(&entry.path))
	}

	/// Write a snapshot under its canonical file name; returns the path written.
	pub fn store(&self, snapshot: &Snapshot, format: PayloadFormat) -> Result<PathBuf> {
		let path = self.root.join(name::file_name(&snapshot.timestamp, format));
		fs::write(&path, SnapshotPayload::from_snapshot(snapshot).encode(format)?)?;
		Ok(path)
	}
}

impl SnapshotSource for DirectoryStore {
	fn load_all(&self) -> Result<SnapshotSet> {
		let mut out = SnapshotSet::new();
		for entry in self.entries()? {
			info!(file = %entry.path.display(), "load results");
			let snap = self.load_entry(&entry)?;
			out.insert(snap.timestamp, snap);
		}
		info!(snapshots = out.len(), root = %self.root.display(), "snapshots loaded");
		Ok(out)
	}
}

/// Snapshots already in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
	snapshots: SnapshotSet,
}

impl MemoryStore {
	/// Empty collection.
	pub fn new() -> Self { Self::default() }

	/// Timestamps are the key; a second snapshot for the same time is rejected.
	pub fn push(&mut self, snapshot: Snapshot) -> Result<()> {
		if let Some(prev) = self.snapshots.get(&snapshot.timestamp) {
			return Err(geobench_core::Error::duplicate(format!(
				"snapshot at {} already present ({} results)",
				format_timestamp(&prev.timestamp),
				prev.len()
			))
			.into());
		}
		self.snapshots.insert(snapshot.timestamp, snapshot);
		Ok(())
	}
}

impl From<SnapshotSet> for MemoryStore {
	fn from(snapshots: SnapshotSet) -> Self { Self { snapshots } }
}

impl SnapshotSource for MemoryStore {
	fn load_all(&self) -> Result<SnapshotSet> { Ok(self.snapshots.clone()) }
}
