#![forbid(unsafe_code)]
//! Geo benchmark report conformance helpers.
//!
//! Fixture builders and property checks used by the scenario and property
//! tests of this crate. Nothing here touches the file system.
//!
//! # Quick Start
//!
//! ```
//! use geobench_conformance::{check_arithmetic, check_matrix_against, fixtures::snapshot_set};
//! use geobench_report::{aggregate, build_matrix};
//!
//! let set = snapshot_set(&[
//!     ("2020-01-01 00:00:00", vec![("distance", "A", 0.0, 1.5)]),
//!     ("2020-01-01 01:00:00", vec![("distance", "B", 0.0, 2.0)]),
//! ]).unwrap();
//! let agg = aggregate(&set).unwrap();
//! let m = build_matrix(agg.category("distance").unwrap());
//! check_matrix_against(&agg, "distance", &m).unwrap();
//! assert_eq!(check_arithmetic(&[300, 850, 1400]).unwrap(), Some(550));
//! ```

pub mod fixtures;
pub mod property_tester;

pub use property_tester::{check_arithmetic, check_matrix_against, check_strictly_increasing, PropertyError};
