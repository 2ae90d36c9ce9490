//! Report configuration: page text, layout and the charted categories.

use crate::error::{Error, Result};
use crate::metric::MetricKind;
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, fs, path::Path};

/// Query categories charted by default, in page order.
pub const DEFAULT_CATEGORIES: [&str; 5] = ["distance", "poly 10", "box", "nearest 10", "sort"];

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ReportConfig {
	/// One of `trace`, `debug`, `info`, `warn`, `error`.
	pub log_level: String,
	/// Static page content.
	pub page: PageConfig,
	/// Chart placement.
	pub layout: LayoutConfig,
	/// Charts in page order.
	pub categories: Vec<CategoryConfig>,
}

impl Default for ReportConfig {
	fn default() -> Self {
		Self {
			log_level: "info".into(),
			page: PageConfig::default(),
			layout: LayoutConfig::default(),
			categories: DEFAULT_CATEGORIES.iter().map(|c| CategoryConfig::new(*c)).collect(),
		}
	}
}

/// Static parts of the HTML document around the charts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PageConfig {
	/// Document `<title>`.
	pub title: String,
	/// Heading above the intro.
	pub heading: String,
	/// Raw HTML paragraphs shown under the heading.
	pub intro: Vec<String>,
	/// Script providing the `Dygraph` constructor.
	pub chart_script: String,
}

impl Default for PageConfig {
	fn default() -> Self {
		Self {
			title: "Lucene Nightly Geo Benchmarks".into(),
			heading: "Lucene Geo benchmarks".into(),
			intro: vec![
				"This test indexes 6.1M points subset exported from the <a href=\"http://openstreetmaps.org\">OpenStreetMaps corpus</a>, including all points inside London, UK, and 2.5% of the remaining points.".into(),
				"Below are the results of the Lucene nightly geo benchmarks based on the <a href=\"https://git-wip-us.apache.org/repos/asf/lucene-solr.git\">master</a> branch as of that point in time.".into(),
				"On each chart, you can click + drag (vertically or horizontally) to zoom in and then shift + drag to move around.".into(),
			],
			chart_script: "dygraph-combined.js".into(),
		}
	}
}

/// Vertical placement of chart blocks, in pixels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LayoutConfig {
	/// Top of the first chart.
	pub initial_offset: u32,
	/// Distance between consecutive chart tops.
	pub increment: u32,
	/// Distance between a chart's top and its legend's top.
	pub labels_offset: u32,
	/// Height of each chart div.
	pub chart_height: u32,
	/// Width of the legend column on the right.
	pub labels_width: u32,
}

impl Default for LayoutConfig {
	fn default() -> Self {
		Self { initial_offset: 300, increment: 550, labels_offset: 30, chart_height: 500, labels_width: 250 }
	}
}

/// One chart on the page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryConfig {
	/// Category as reported in snapshots; also the chart title.
	pub name: String,
	/// y-axis label. When unset it names the plotted metric: `QPS` for
	/// `nearest 10`, `MHPS` otherwise. Pages produced by the older Python
	/// reporter labelled every chart `MHPS`; set
	/// `y_label = "MHPS"` on `nearest 10` to reproduce them.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub y_label: Option<String>,
}

impl CategoryConfig {
	/// Category with the default label.
	pub fn new(name: impl Into<String>) -> Self { Self { name: name.into(), y_label: None } }

	/// Anchor and element id, `search-<name>`.
	pub fn chart_id(&self) -> String { format!("search-{}", self.name) }
	/// Chart title, the category name.
	pub fn title(&self) -> &str { &self.name }
	/// Metric plotted for this category.
	pub fn metric(&self) -> MetricKind { MetricKind::for_category(&self.name) }

	/// Configured label, else the metric's axis label.
	pub fn y_label(&self) -> &str {
		self.y_label.as_deref().unwrap_or_else(|| self.metric().axis_label())
	}
}

impl ReportConfig {
	/// Start a [`ReportConfigBuilder`].
	pub fn builder() -> ReportConfigBuilder { ReportConfigBuilder::default() }

	/// Read and validate a TOML file.
	pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let data = fs::read_to_string(path)?;
		let cfg: Self = toml::from_str(&data).map_err(|e| Error::config(format!("toml parse error: {e}")))?;
		cfg.validate()?;
		tracing::debug!(path = %path.display(), categories = cfg.categories.len(), "loaded report config");
		Ok(cfg)
	}

	/// Defaults with environment overrides applied.
	pub fn from_env() -> Result<Self> {
		let mut cfg = Self::default();
		cfg.apply_env_overrides();
		cfg.validate()?;
		Ok(cfg)
	}

	/// Apply `GEOBENCH_LOG_LEVEL` if set.
	pub fn apply_env_overrides(&mut self) {
		if let Ok(v) = std::env::var("GEOBENCH_LOG_LEVEL") {
			let v = v.trim();
			if !v.is_empty() { self.log_level = v.to_ascii_lowercase(); }
		}
	}

	/// Serialise as pretty TOML.
	pub fn to_toml_string(&self) -> Result<String> {
		toml::to_string_pretty(self).map_err(|e| Error::config(format!("toml encode error: {e}")))
	}

	/// Write [`Self::to_toml_string`] to `path`.
	pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
		fs::write(path, self.to_toml_string()?)?;
		Ok(())
	}

	/// Reject settings that would produce a broken page.
	pub fn validate(&self) -> Result<()> {
		if !LOG_LEVELS.contains(&self.log_level.as_str()) {
			return Err(Error::config(format!("invalid log_level: {}", self.log_level)));
		}
		if self.categories.is_empty() {
			return Err(Error::config("at least one category is required"));
		}
		let mut seen = HashSet::new();
		for c in &self.categories {
			if c.name.trim().is_empty() {
				return Err(Error::config("category name must not be empty"));
			}
			if c.name.contains([',', '\n', '\r']) {
				return Err(Error::config(format!("category name contains a separator: {:?}", c.name)));
			}
			if !seen.insert(c.name.as_str()) {
				return Err(Error::config(format!("duplicate category: {}", c.name)));
			}
		}
		if self.layout.increment == 0 {
			return Err(Error::config("layout.increment must be positive"));
		}
		if self.layout.labels_offset >= self.layout.increment {
			return Err(Error::config("layout.labels_offset must be smaller than layout.increment"));
		}
		// the last chart's legend must still have a distinct u32 offset
		let slots = self.categories.len() as u64 - 1;
		let last = u64::from(self.layout.initial_offset)
			+ u64::from(self.layout.increment) * slots
			+ u64::from(self.layout.labels_offset);
		if last > u64::from(u32::MAX) {
			return Err(Error::config(format!(
				"layout overflows: {} charts starting at {} every {}px",
				self.categories.len(),
				self.layout.initial_offset,
				self.layout.increment
			)));
		}
		Ok(())
	}
}

/// Builder for [`ReportConfig`].
#[derive(Debug, Default)]
pub struct ReportConfigBuilder {
	log_level: Option<String>,
	page: Option<PageConfig>,
	layout: Option<LayoutConfig>,
	categories: Vec<CategoryConfig>,
}

impl ReportConfigBuilder {
	/// Set the log level.
	pub fn log_level(mut self, level: impl Into<String>) -> Self { self.log_level = Some(level.into()); self }
	/// Replace the page content.
	pub fn page(mut self, page: PageConfig) -> Self { self.page = Some(page); self }
	/// Replace the layout.
	pub fn layout(mut self, layout: LayoutConfig) -> Self { self.layout = Some(layout); self }
	/// Append a chart with the default label.
	pub fn category(mut self, name: impl Into<String>) -> Self { self.categories.push(CategoryConfig::new(name)); self }

	/// Append a chart with an explicit y label.
	pub fn category_with_label(mut self, name: impl Into<String>, y_label: impl Into<String>) -> Self {
		self.categories.push(CategoryConfig { name: name.into(), y_label: Some(y_label.into()) });
		self
	}

	/// Unset fields keep their defaults; no categories means the default list.
	pub fn build(self) -> Result<ReportConfig> {
		let mut cfg = ReportConfig::default();
		if let Some(l) = self.log_level { cfg.log_level = l; }
		if let Some(p) = self.page { cfg.page = p; }
		if let Some(l) = self.layout { cfg.layout = l; }
		if !self.categories.is_empty() { cfg.categories = self.categories; }
		cfg.validate()?;
		Ok(cfg)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_is_valid() {
		let cfg = ReportConfig::default();
		cfg.validate().unwrap();
		let names: Vec<_> = cfg.categories.iter().map(|c| c.name.as_str()).collect();
		assert_eq!(names, DEFAULT_CATEGORIES);
	}

	#[test]
	fn category_derived_fields() {
		let c = CategoryConfig::new("nearest 10");
		assert_eq!(c.chart_id(), "search-nearest 10");
		assert_eq!(c.y_label(), "QPS");
		assert_eq!(CategoryConfig::new("box").y_label(), "MHPS");
		let c = CategoryConfig { name: "box".into(), y_label: Some("Mhits/s".into()) };
		assert_eq!(c.y_label(), "Mhits/s");
	}

	#[test]
	fn nearest_label_can_match_legacy_pages() {
		let text = "[[categories]]\nname = \"nearest 10\"\ny_label = \"MHPS\"\n\n[[categories]]\nname = \"box\"\n";
		let cfg: ReportConfig = toml::from_str(text).unwrap();
		cfg.validate().unwrap();
		let labels: Vec<_> = cfg.categories.iter().map(CategoryConfig::y_label).collect();
		assert_eq!(labels, ["MHPS", "MHPS"]);
		assert_eq!(cfg.categories[0].metric(), MetricKind::Qps);
	}

	#[test]
	fn partial_toml_keeps_defaults() {
		let cfg: ReportConfig = toml::from_str("log_level = \"debug\"\n[layout]\nincrement = 600\n").unwrap();
		assert_eq!(cfg.log_level, "debug");
		assert_eq!(cfg.layout.increment, 600);
		assert_eq!(cfg.layout.initial_offset, 300);
		assert_eq!(cfg.categories.len(), 5);
	}

	#[test]
	fn toml_roundtrip() {
		let cfg = ReportConfig::builder().category("box").category_with_label("sort", "M").build().unwrap();
		let text = cfg.to_toml_string().unwrap();
		assert!(text.contains("[[categories]]"));
		let back: ReportConfig = toml::from_str(&text).unwrap();
		assert_eq!(back, cfg);
	}

	#[test]
	fn validation_rejects_bad_values() {
		assert!(ReportConfig::builder().log_level("loud").build().is_err());
		assert!(ReportConfig::builder().category("box").category("box").build().is_err());
		assert!(ReportConfig::builder().category("a,b").build().is_err());
		assert!(ReportConfig::builder().category(" ").build().is_err());
		let layout = LayoutConfig { increment: 0, ..LayoutConfig::default() };
		assert!(ReportConfig::builder().layout(layout).build().is_err());
		let layout = LayoutConfig { increment: 20, labels_offset: 20, ..LayoutConfig::default() };
		assert!(ReportConfig::builder().layout(layout).build().is_err());
		let cfg = ReportConfig { categories: vec![], ..ReportConfig::default() };
		assert!(cfg.validate().is_err());
	}

	#[test]
	fn validation_rejects_layout_overflow() {
		// five charts: last top is initial + 4 * 550, legend 30 below it
		let fits = u32::MAX - 4 * 550 - 30;
		let layout = LayoutConfig { initial_offset: fits, ..LayoutConfig::default() };
		ReportConfig::builder().layout(layout).build().unwrap();
		let layout = LayoutConfig { initial_offset: fits + 1, ..LayoutConfig::default() };
		let err = ReportConfig::builder().layout(layout).build().unwrap_err();
		assert!(err.to_string().contains("layout overflows"), "{err}");
		let layout = LayoutConfig { initial_offset: 0, increment: u32::MAX / 2, labels_offset: 0, ..LayoutConfig::default() };
		assert!(ReportConfig::builder().layout(layout).build().is_err());
		assert!(ReportConfig::builder().layout(layout).category("box").category("sort").build().is_ok());
	}
}
