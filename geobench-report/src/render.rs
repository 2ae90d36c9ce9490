//! Dygraph chart blocks and their vertical layout.

use crate::{chart_data, matrix::ChartMatrix};
use geobench_core::{CategoryConfig, LayoutConfig};

/// Where a chart block lands on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
	/// Top of the chart div.
	pub top: u32,
	/// Top of the legend div.
	pub labels_top: u32,
}

/// Running vertical offset for chart blocks. Owned by whoever renders the
/// page; each rendered chart reserves the next slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutState {
	next_offset: u32,
	cfg: LayoutConfig,
	placed: Vec<u32>,
}

impl LayoutState {
	/// Layout starting at `cfg.initial_offset`.
	pub fn new(cfg: &LayoutConfig) -> Self { Self { next_offset: cfg.initial_offset, cfg: *cfg, placed: Vec::new() } }

	/// Top the next chart will get.
	pub fn next_offset(&self) -> u32 { self.next_offset }

	/// Tops of all reserved slots, in order.
	pub fn placements(&self) -> &[u32] { &self.placed }

	/// Take the next slot. Offsets saturate at `u32::MAX`;
	/// [`ReportConfig::validate`](geobench_core::ReportConfig::validate)
	/// refuses layouts whose configured charts would get there.
	pub fn reserve(&mut self) -> Placement {
		let top = self.next_offset;
		self.next_offset = self.next_offset.saturating_add(self.cfg.increment);
		self.placed.push(top);
		Placement { top, labels_top: top.saturating_add(self.cfg.labels_offset) }
	}

	fn config(&self) -> &LayoutConfig { &self.cfg }
}

impl Default for LayoutState {
	fn default() -> Self { Self::new(&LayoutConfig::default()) }
}

/// Identity and labels of one chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartSpec {
	/// Element id and anchor name.
	pub chart_id: String,
	/// Title text, shown as a link to the chart.
	pub title: String,
	/// y-axis label.
	pub y_label: String,
}

impl ChartSpec {
	/// Spec from its parts.
	pub fn new(chart_id: impl Into<String>, title: impl Into<String>, y_label: impl Into<String>) -> Self {
		Self { chart_id: chart_id.into(), title: title.into(), y_label: y_label.into() }
	}
}

impl From<&CategoryConfig> for ChartSpec {
	fn from(c: &CategoryConfig) -> Self { Self::new(c.chart_id(), c.title(), c.y_label()) }
}

/// Render one chart block and advance `layout` past it.
pub fn render_chart(matrix: &ChartMatrix, spec: &ChartSpec, layout: &mut LayoutState) -> String {
	let place = layout.reserve();
	let cfg = *layout.config();
	let id = escape_html(&spec.chart_id);
	let js_id = escape_js(&spec.chart_id);
	let mut out = String::new();

	out.push_str(&format!(
		"\n<a name=\"{id}\"></a>\n\
		<div id=\"chart_{id}\" style=\"height:{h}px; position: absolute; left: 0px; right: {right}px; top: {top}px\"></div>\n\
		<div id=\"chart_{id}_labels\" style=\"width: {w}px; position: absolute; right: 0px; top: {ltop}px\"></div>",
		h = cfg.chart_height,
		right = cfg.labels_width + 10,
		top = place.top,
		w = cfg.labels_width,
		ltop = place.labels_top,
	));

	out.push_str(&format!(
		"\n  <script type=\"text/javascript\">\n    g = new Dygraph(\n\n      // containing div\n      document.getElementById(\"chart_{js_id}\"),\n  "
	));

	for (i, line) in chart_data::encode(matrix).iter().enumerate() {
		let lead = if i == 0 { "" } else { "+ " };
		out.push_str(&format!("    {lead}\"{}\\n\"\n", escape_js(line)));
	}

	let title = escape_js(&format!("<a href='#{id}'><font size=+2>{}</font></a>", escape_html(&spec.title)));
	out.push_str(&format!(
		",\n{{ \"title\": \"{title}\",\n  \
		\"includeZero\": true,\n  \
		\"xlabel\": \"Date\",\n  \
		\"ylabel\": \"{ylabel}\",\n  \
		\"connectSeparatedPoints\": true,\n  \
		\"hideOverlayOnMouseOut\": false,\n  \
		\"labelsDiv\": \"chart_{js_id}_labels\",\n  \
		\"labelsSeparateLines\": true,\n  \
		\"legend\": \"always\",\n  \
		}}\n  );\n</script>",
		ylabel = escape_js(&spec.y_label),
	));
	out
}

/// Escape text for a double-quoted JavaScript string literal inside a
/// `<script>` element.
pub fn escape_js(s: &str) -> String {
	let mut out = String::with_capacity(s.len());
	for (i, c) in s.char_indices() {
		match c {
			'\\' => out.push_str("\\\\"),
			'"' => out.push_str("\\\""),
			'\n' => out.push_str("\\n"),
			'\r' => out.push_str("\\r"),
			'<' if closes_script(&s[i..]) => out.push_str("<\\"),
			c => out.push(c),
		}
	}
	out
}

fn closes_script(rest: &str) -> bool {
	rest.get(..8).is_some_and(|t| t.eq_ignore_ascii_case("</script"))
}

/// Escape text for HTML content and attribute values.
pub fn escape_html(s: &str) -> String {
	let mut out = String::with_capacity(s.len());
	for c in s.chars() {
		match c {
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			'"' => out.push_str("&quot;"),
			'\'' => out.push_str("&#39;"),
			c => out.push(c),
		}
	}
	out
}
