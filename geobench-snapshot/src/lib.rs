#![forbid(unsafe_code)]
//! Snapshot loading for the geo benchmark report.
//!
//! ```
//! use geobench_core::{parse_timestamp, Measurement, Snapshot};
//! use geobench_snapshot::{MemoryStore, SnapshotSource};
//!
//! let t = parse_timestamp("2020-01-01 00:00:00").unwrap();
//! let mut store = MemoryStore::new();
//! store.push(Snapshot::new(t).with("distance", "A", Measurement::new(3.0, 1.5, 10)).unwrap()).unwrap();
//! assert_eq!(store.load_all().unwrap().len(), 1);
//! ```

pub mod error;
pub mod name;
pub mod payload;
pub mod store;

pub use error::{Error, Result};
pub use name::{file_name, parse_file_name, PayloadFormat};
pub use payload::{ResultRecord, SnapshotPayload, SCHEMA_VERSION};
pub use store::{DirectoryStore, MemoryStore, SnapshotEntry, SnapshotSource};
