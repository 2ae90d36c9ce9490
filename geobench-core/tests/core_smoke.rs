use geobench_core::{config::ReportConfig, format_timestamp, Measurement, SeriesId, Snapshot, SnapshotSet};
use std::{env, fs};

#[test]
fn config_default_is_valid_and_roundtrip_file() {
	let cfg = ReportConfig::default();
	assert!(cfg.validate().is_ok());
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("geobench.toml");
	cfg.write_to_file(&path).unwrap();
	let s = fs::read_to_string(&path).unwrap();
	assert!(s.contains("log_level"));
	assert!(s.contains("nearest 10"));
	let loaded = ReportConfig::load_from_file(&path).unwrap();
	assert_eq!(cfg, loaded);
}

#[test]
fn config_env_override_and_validation() {
	// Preserve and restore environment variables to avoid leaking state between tests
	let old_log = env::var("GEOBENCH_LOG_LEVEL").ok();

	env::set_var("GEOBENCH_LOG_LEVEL", "DEBUG");
	let cfg = ReportConfig::from_env().unwrap();
	assert_eq!(cfg.log_level, "debug");

	env::set_var("GEOBENCH_LOG_LEVEL", "chatty");
	assert!(ReportConfig::from_env().is_err());

	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("bad.toml");
	fs::write(&path, "log_level='nope'\n").unwrap();
	let err = ReportConfig::load_from_file(&path).unwrap_err();
	assert!(format!("{err}").contains("invalid log_level"));

	fs::write(&path, "log_level = [").unwrap();
	let err = ReportConfig::load_from_file(&path).unwrap_err();
	assert!(format!("{err}").contains("toml parse error"));

	if let Some(v) = old_log { env::set_var("GEOBENCH_LOG_LEVEL", v) } else { env::remove_var("GEOBENCH_LOG_LEVEL") }
}

#[test]
fn config_builder_path() {
	let cfg = ReportConfig::builder()
		.log_level("warn")
		.category("sort")
		.category("box")
		.build()
		.unwrap();
	assert_eq!(cfg.log_level, "warn");
	let names: Vec<_> = cfg.categories.iter().map(|c| c.name.as_str()).collect();
	assert_eq!(names, ["sort", "box"]);
}

#[test]
fn snapshot_set_iterates_chronologically() {
	let t = |s: &str| geobench_core::parse_timestamp(s).unwrap();
	let mut set = SnapshotSet::new();
	for s in ["2020-01-02 00:00:00", "2019-12-31 23:59:59", "2020-01-01 12:00:00"] {
		let snap = Snapshot::new(t(s)).with("box", "A", Measurement::new(1.0, 1.0, 1)).unwrap();
		set.insert(snap.timestamp, snap);
	}
	let order: Vec<_> = set.keys().map(format_timestamp).collect();
	assert_eq!(order, ["2019-12-31 23:59:59", "2020-01-01 12:00:00", "2020-01-02 00:00:00"]);
	assert_eq!(SeriesId::new("box", "A").to_string(), "box/A");
}
