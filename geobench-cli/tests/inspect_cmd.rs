#![forbid(unsafe_code)]

use assert_cmd::prelude::*;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn inspect_summarises_series() {
	let dir = tempdir().unwrap();
	for (name, v) in [("2020.01.01.00.00.00.json", 1.0), ("2020.01.03.00.00.00.json", 3.0)] {
		let body = serde_json::json!({"version": 1, "results": [
			{"category": "box", "series": "points", "qps": v, "mhps": v},
			{"category": "nearest 10", "series": "shapes", "qps": v, "mhps": v},
		]});
		std::fs::write(dir.path().join(name), body.to_string()).unwrap();
	}
	let output = Command::cargo_bin("geobench-cli")
		.unwrap()
		.current_dir(dir.path())
		.env_remove("GEOBENCH_CONFIG")
		.args(["inspect", "--snapshots", "."])
		.output()
		.unwrap();
	assert!(output.status.success());
	let v: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
	assert_eq!(v["snapshots"], 2);
	assert_eq!(v["first"], "2020-01-01 00:00:00");
	assert_eq!(v["last"], "2020-01-03 00:00:00");
	let cats = v["categories"].as_array().unwrap();
	assert_eq!(cats.len(), 2);
	assert_eq!(cats[0]["category"], "box");
	assert_eq!(cats[0]["series"][0]["name"], "points");
	assert_eq!(cats[0]["series"][0]["points"], 2);
	assert_eq!(cats[1]["series"][0]["last"], "2020-01-03 00:00:00");
}

#[test]
fn inspect_empty_directory() {
	let dir = tempdir().unwrap();
	let output = Command::cargo_bin("geobench-cli")
		.unwrap()
		.current_dir(dir.path())
		.env_remove("GEOBENCH_CONFIG")
		.args(["inspect", "--snapshots", "."])
		.output()
		.unwrap();
	assert!(output.status.success());
	let v: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
	assert_eq!(v["snapshots"], 0);
	assert!(v["first"].is_null());
}
