//! HTML document shell.

use crate::render::escape_html;
use geobench_core::PageConfig;

const STYLE: &str = r#"<style>
  a:hover * {
    text-decoration: underline;
  }
  html *
  {
    text-decoration: none;
    font-family: Helvetica !important;
  }
</style>"#;

/// Wrap rendered chart blocks in the HTML document. Intro paragraphs are
/// inserted verbatim; title and heading are escaped.
pub fn render_page(page: &PageConfig, charts: &[String]) -> String {
	let mut out = String::new();
	out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
	out.push_str("<meta http-equiv=\"content-type\" content=\"text/html; charset=UTF-8\">\n");
	out.push_str(&format!("<title>{}</title>\n", escape_html(&page.title)));
	out.push_str(&format!("<script type=\"text/javascript\" src=\"{}\"></script>\n", escape_html(&page.chart_script)));
	out.push_str(STYLE);
	out.push_str("\n</head>\n<body>\n");
	out.push_str(&format!("<h2>{}</h2>\n", escape_html(&page.heading)));
	for p in &page.intro {
		out.push_str(&format!("<p>{p}</p>\n"));
	}
	for chart in charts {
		out.push_str(chart);
	}
	out.push_str("\n</body>\n</html>\n");
	out
}
