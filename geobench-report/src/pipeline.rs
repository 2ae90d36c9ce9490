//! End-to-end report generation.

use crate::{
	aggregate::{aggregate, AggregatedSeries},
	matrix::build_matrix,
	page::render_page,
	render::{render_chart, ChartSpec, LayoutState},
};
use geobench_core::{CategoryConfig, ReportConfig, Result, SnapshotSet};
use serde::Serialize;
use std::{fs, path::Path};
use tracing::info;

/// What was drawn for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartSummary {
	/// Category name.
	pub category: String,
	/// Element id of the chart.
	pub chart_id: String,
	/// Rows in the data table.
	pub rows: usize,
	/// Lines on the chart.
	pub series: usize,
	/// Vertical offset of the chart.
	pub top: u32,
}

/// A fully rendered report. Only produced when every chart rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
	/// Complete document.
	pub html: String,
	/// One entry per chart, in page order.
	pub charts: Vec<ChartSummary>,
}

impl Report {
	/// Write the document next to `path` and rename it into place, so the
	/// destination either holds the previous document or the complete new one.
	pub fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
		let path = path.as_ref();
		let mut tmp = path.as_os_str().to_owned();
		tmp.push(".tmp");
		fs::write(&tmp, &self.html)?;
		if let Err(e) = fs::rename(&tmp, path) {
			let _ = fs::remove_file(&tmp);
			return Err(e.into());
		}
		Ok(())
	}
}

/// Render one configured category from already aggregated series.
pub fn render_category(agg: &AggregatedSeries, category: &CategoryConfig, layout: &mut LayoutState) -> Result<(String, ChartSummary)> {
	let series = agg.category(&category.name)?;
	let matrix = build_matrix(series);
	let spec = ChartSpec::from(category);
	let top = layout.next_offset();
	info!(category = %category.name, rows = matrix.rows.len(), series = matrix.series_names.len(), "write graph");
	let block = render_chart(&matrix, &spec, layout);
	let summary = ChartSummary {
		category: category.name.clone(),
		chart_id: spec.chart_id,
		rows: matrix.rows.len(),
		series: matrix.series_names.len(),
		top,
	};
	Ok((block, summary))
}

/// Snapshots in, complete HTML report out. Charts follow the configured
/// category order; any error aborts before a document exists.
pub fn generate_report(snapshots: &SnapshotSet, config: &ReportConfig) -> Result<Report> {
	config.validate()?;
	let agg = aggregate(snapshots)?;
	let mut layout = LayoutState::new(&config.layout);
	let mut blocks = Vec::with_capacity(config.categories.len());
	let mut charts = Vec::with_capacity(config.categories.len());
	for category in &config.categories {
		let (block, summary) = render_category(&agg, category, &mut layout)?;
		blocks.push(block);
		charts.push(summary);
	}
	Ok(Report { html: render_page(&config.page, &blocks), charts })
}
