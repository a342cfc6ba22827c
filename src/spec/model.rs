//! Typed shape of the chart option object handed to the renderer.
//!
//! Field names and nesting follow the renderer's option format exactly. Every
//! subsection is a required field, so a specification cannot be constructed with
//! a feature section missing; disabled features carry `show: false` instead.

use crate::foundation::error::HeatspecResult;

use super::fingerprint::{SpecFingerprint, fingerprint_value};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSpecification {
    pub background_color: String,
    pub title: Title,
    pub tooltip: Tooltip,
    pub grid: Grid,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub visual_map: VisualMap,
    /// Horizontal slider first, vertical slider second.
    pub data_zoom: Vec<DataZoom>,
    pub toolbox: Toolbox,
    pub series: Vec<HeatmapSeries>,
    pub animation: bool,
    pub animation_duration: u32,
    pub animation_easing: String,
    pub animation_delay: u32,
    pub animation_duration_update: u32,
    pub animation_easing_update: String,
}

impl ChartSpecification {
    pub fn to_value(&self) -> HeatspecResult<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn to_json(&self) -> HeatspecResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> HeatspecResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn fingerprint(&self) -> HeatspecResult<SpecFingerprint> {
        Ok(fingerprint_value(&self.to_value()?))
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Toggle {
    pub show: bool,
}

impl Toggle {
    pub fn new(show: bool) -> Self {
        Self { show }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Title {
    pub show: bool,
    pub text: String,
    pub left: String,
    pub text_style: TextStyle,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    pub font_size: u32,
    pub font_weight: String,
    pub color: String,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tooltip {
    pub show: bool,
    pub trigger: String,
    pub position: String,
    pub formatter: String,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Grid {
    pub top: String,
    pub left: String,
    pub right: String,
    pub height: String,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    #[serde(rename = "type")]
    pub kind: String,
    pub data: Vec<String>,
    pub position: String,
    pub axis_line: Toggle,
    pub axis_tick: Toggle,
    pub axis_label: AxisLabel,
    pub split_area: Toggle,
    pub split_line: Toggle,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisLabel {
    pub show: bool,
    pub font_size: u32,
    pub color: String,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualMap {
    #[serde(rename = "type")]
    pub kind: String,
    pub min: f64,
    pub max: f64,
    pub calculable: bool,
    pub realtime: bool,
    pub orient: String,
    pub left: String,
    pub bottom: String,
    /// `[high end, low end]`, as the renderer expects.
    pub text: [String; 2],
    pub in_range: InRange,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct InRange {
    pub color: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataZoom {
    #[serde(rename = "type")]
    pub kind: String,
    pub show: bool,
    pub orient: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_axis_index: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_axis_index: Option<u32>,
    pub start: f64,
    pub end: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Toolbox {
    pub show: bool,
    pub feature: ToolboxFeature,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolboxFeature {
    pub save_as_image: Toggle,
    pub restore: Toggle,
    pub data_view: DataView,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataView {
    pub show: bool,
    pub read_only: bool,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapSeries {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// `[column, row, value]` per cell.
    pub data: Vec<(usize, usize, f64)>,
    pub label: SeriesLabel,
    pub item_style: ItemStyle,
    pub emphasis: Emphasis,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesLabel {
    pub show: bool,
    pub font_size: u32,
    pub color: String,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemStyle {
    pub border_width: f64,
    pub border_color: String,
    pub border_radius: f64,
    pub opacity: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Emphasis {
    pub item_style: EmphasisItemStyle,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmphasisItemStyle {
    pub shadow_blur: f64,
    pub shadow_color: String,
}
