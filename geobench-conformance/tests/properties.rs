use geobench_conformance::{check_arithmetic, check_matrix_against, check_strictly_increasing, fixtures};
use geobench_core::{CategoryConfig, LayoutConfig, Measurement, ReportConfig, Snapshot, SnapshotSet, QPS_CATEGORY};
use geobench_report::{aggregate, build_matrix, decode, encode, format_value, generate_report, render_category, LayoutState};
use proptest::prelude::*;

const CATEGORIES: [&str; 3] = ["distance", QPS_CATEGORY, "box"];
const SERIES: [&str; 4] = ["points", "shapes", "geo3d", "latlon"];

/// (snapshot offset in minutes, category idx, series idx, qps, mhps)
type Cell = (u32, usize, usize, f64, f64);

fn cells() -> impl Strategy<Value = Vec<Cell>> {
	prop::collection::vec((0u32..40, 0usize..CATEGORIES.len(), 0usize..SERIES.len(), 0.0f64..1.0e4, 0.0f64..1.0e3), 0..60)
}

fn build(cells: &[Cell]) -> SnapshotSet {
	let mut set = SnapshotSet::new();
	for (min, c, s, qps, mhps) in cells {
		let at = fixtures::ts_offset(min * 60);
		let snap = set.entry(at).or_insert_with(|| Snapshot::new(at));
		// Later duplicates of a key are dropped; a snapshot reports a key once.
		let _ = snap.insert(geobench_core::SeriesId::new(CATEGORIES[*c], SERIES[*s]), Measurement::new(*qps, *mhps, 1));
	}
	set
}

proptest! {
	#[test]
	fn matrix_matches_input(cells in cells()) {
		let set = build(&cells);
		let agg = aggregate(&set).unwrap();
		for category in CATEGORIES {
			let Ok(series) = agg.category(category) else { continue };
			let m = build_matrix(series);
			prop_assert!(check_matrix_against(&agg, category, &m).is_ok());
			for row in &m.rows {
				prop_assert!(row.values.iter().any(Option::is_some));
			}
		}
	}

	#[test]
	fn metric_follows_category(cells in cells()) {
		let set = build(&cells);
		let agg = aggregate(&set).unwrap();
		for (at, snap) in &set {
			for (id, m) in &snap.results {
				let expected = if id.category == QPS_CATEGORY { m.qps } else { m.mhps };
				let got = agg.category(&id.category).unwrap()[id.series.as_str()].get(at).copied();
				prop_assert_eq!(got, expected);
			}
		}
	}

	#[test]
	fn encoded_rows_decode_in_order(cells in cells()) {
		let set = build(&cells);
		let agg = aggregate(&set).unwrap();
		for (_, series) in agg.categories() {
			let m = build_matrix(series);
			let lines = encode(&m);
			prop_assert_eq!(lines.len(), m.rows.len() + 1);
			let decoded = decode(&lines.join("\n")).unwrap();
			let stamps: Vec<_> = decoded.rows.iter().map(|r| r.timestamp).collect();
			prop_assert!(check_strictly_increasing(&stamps).is_ok());
			for (d, row) in decoded.rows.iter().zip(&m.rows) {
				let want: Vec<_> = row.values.iter().map(|v| v.map(format_value)).collect();
				let got: Vec<_> = d.values.iter().map(|v| v.map(format_value)).collect();
				prop_assert_eq!(got, want);
			}
		}
	}

	#[test]
	fn report_is_deterministic(cells in cells()) {
		let set = build(&cells);
		let cfg = ReportConfig::builder()
			.category(CATEGORIES[0])
			.category(CATEGORIES[1])
			.category(CATEGORIES[2])
			.build()
			.unwrap();
		let first = generate_report(&set, &cfg);
		let second = generate_report(&set.clone(), &cfg);
		match (first, second) {
			(Ok(a), Ok(b)) => prop_assert_eq!(a, b),
			(Err(a), Err(b)) => {
				prop_assert!(a.is_lookup());
				prop_assert_eq!(a.to_string(), b.to_string());
			}
			_ => prop_assert!(false, "runs disagree"),
		}
	}

	#[test]
	fn chart_offsets_are_evenly_spaced(
		start in 0u32..1000,
		step in 1u32..1000,
		charts in 1usize..12,
	) {
		let layout_cfg = LayoutConfig { initial_offset: start, increment: step, ..LayoutConfig::default() };
		let set = fixtures::snapshot_set(&[("2020-01-01 00:00:00", vec![("box", "A", 1.0, 2.0)])]).unwrap();
		let agg = aggregate(&set).unwrap();
		let mut layout = LayoutState::new(&layout_cfg);
		let box_cfg = CategoryConfig::new("box");
		let mut tops = Vec::new();
		for _ in 0..charts {
			let (_, summary) = render_category(&agg, &box_cfg, &mut layout).unwrap();
			tops.push(summary.top);
		}
		prop_assert_eq!(tops[0], start);
		let expected = if charts > 1 { Some(i64::from(step)) } else { None };
		prop_assert_eq!(check_arithmetic(&tops).unwrap(), expected);
		prop_assert_eq!(layout.placements(), tops.as_slice());
	}
}
