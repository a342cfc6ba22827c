//! Standalone outputs for a built specification: a script snippet and an HTML page.

use crate::{
    foundation::error::{HeatspecError, HeatspecResult},
    spec::ChartSpecification,
};

pub const DEFAULT_ECHARTS_SRC: &str =
    "https://cdn.jsdelivr.net/npm/echarts@5.4.0/dist/echarts.min.js";

const OPTION_ELEMENT_ID: &str = "heatspec-option";
const CHART_ELEMENT_ID: &str = "heatmap";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOpts {
    pub page_title: String,
    /// Where the page loads the charting library from.
    pub echarts_src: String,
}

impl Default for ExportOpts {
    fn default() -> Self {
        Self {
            page_title: "Matrix Heatmap".to_owned(),
            echarts_src: DEFAULT_ECHARTS_SRC.to_owned(),
        }
    }
}

/// JavaScript that declares `option` and renders it into `#heatmap`.
pub fn option_script(spec: &ChartSpecification) -> HeatspecResult<String> {
    let json = escape_script(&spec.to_json_pretty()?);
    Ok(format!(
        "var chartDom = document.getElementById('{CHART_ELEMENT_ID}');\n\
         var myChart = echarts.init(chartDom);\n\
         var option = {json};\n\
         myChart.setOption(option);\n\
         window.addEventListener('resize', function () {{\n    myChart.resize();\n}});\n"
    ))
}

/// A self-contained page embedding the option as a JSON data block.
#[tracing::instrument(skip_all, fields(title = %opts.page_title))]
pub fn html_document(spec: &ChartSpecification, opts: &ExportOpts) -> HeatspecResult<String> {
    let json = escape_script(&spec.to_json_pretty()?);
    let title = escape_html(&opts.page_title);
    let src = escape_html(&opts.echarts_src);
    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<script src="{src}"></script>
<style>
  html, body {{ margin: 0; height: 100%; }}
  #{CHART_ELEMENT_ID} {{ width: 100%; height: 100%; }}
</style>
</head>
<body>
<div id="{CHART_ELEMENT_ID}"></div>
<script type="application/json" id="{OPTION_ELEMENT_ID}">
{json}
</script>
<script>
  var option = JSON.parse(document.getElementById('{OPTION_ELEMENT_ID}').textContent);
  var myChart = echarts.init(document.getElementById('{CHART_ELEMENT_ID}'));
  myChart.setOption(option);
  window.addEventListener('resize', function () {{ myChart.resize(); }});
</script>
</body>
</html>
"#
    ))
}

/// Recover the option JSON embedded by [`html_document`].
pub fn extract_option(html: &str) -> HeatspecResult<serde_json::Value> {
    let marker = format!(r#"id="{OPTION_ELEMENT_ID}">"#);
    let start = html
        .find(&marker)
        .map(|i| i + marker.len())
        .ok_or_else(|| anyhow::anyhow!("no embedded option block found"))?;
    let len = html[start..]
        .find("</script>")
        .ok_or_else(|| anyhow::anyhow!("embedded option block is not terminated"))?;
    serde_json::from_str(html[start..start + len].trim()).map_err(HeatspecError::from)
}

/// Markup characters only occur inside JSON strings, where `\u003c` and friends
/// decode to the same text. With no raw `<` left, nothing in the block can end
/// or re-open a script element.
fn escape_script(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    for ch in json.chars() {
        match ch {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            _ => out.push(ch),
        }
    }
    out
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
