use crate::{
    dataset::Dataset,
    foundation::error::{HeatspecError, HeatspecResult},
    snapshot::ConfigSnapshot,
};

use super::{
    model::{
        Axis, AxisLabel, ChartSpecification, DataView, DataZoom, Emphasis, EmphasisItemStyle,
        Grid, HeatmapSeries, InRange, ItemStyle, SeriesLabel, TextStyle, Title, Toggle, Toolbox,
        ToolboxFeature, Tooltip, VisualMap,
    },
    palette::palette,
};

const SERIES_NAME: &str = "Matrix Heatmap";

/// Compile a snapshot and dataset into a complete chart specification.
///
/// Every value is looked up by its field path in `snapshot`; a missing or
/// ill-typed path fails the whole build. No defaults are applied here.
#[tracing::instrument(skip_all, fields(rows = dataset.rows(), cols = dataset.cols()))]
pub fn build_spec(
    snapshot: &ConfigSnapshot,
    dataset: &Dataset,
) -> HeatspecResult<ChartSpecification> {
    dataset.validate()?;
    let s = Lookup(snapshot);

    let spec = ChartSpecification {
        background_color: s.text("backgroundColor")?,
        title: Title {
            show: s.flag("title.show")?,
            text: s.text("title.text")?,
            left: s.text("title.left")?,
            text_style: TextStyle {
                font_size: s.whole("title.textStyle.fontSize")?,
                font_weight: "bold".to_owned(),
                color: s.text("title.textStyle.color")?,
            },
        },
        tooltip: Tooltip {
            show: s.flag("tooltip.show")?,
            trigger: s.text("tooltip.trigger")?,
            position: s.text("tooltip.position")?,
            formatter: s.text("tooltip.formatter")?,
        },
        grid: Grid {
            top: s.percent("grid.top")?,
            left: s.percent("grid.left")?,
            right: s.percent("grid.right")?,
            height: s.percent("grid.height")?,
        },
        x_axis: axis(&s, &dataset.col_labels, s.text("xAxis.position")?)?,
        y_axis: axis(&s, &dataset.row_labels, "left".to_owned())?,
        visual_map: visual_map(&s, dataset)?,
        data_zoom: data_zoom(&s)?,
        toolbox: Toolbox {
            show: s.flag("toolbox.show")?,
            feature: ToolboxFeature {
                save_as_image: Toggle::new(s.flag("toolbox.feature.saveAsImage.show")?),
                restore: Toggle::new(s.flag("toolbox.feature.restore.show")?),
                data_view: DataView {
                    show: s.flag("toolbox.feature.dataView.show")?,
                    read_only: true,
                },
            },
        },
        series: vec![HeatmapSeries {
            name: SERIES_NAME.to_owned(),
            kind: "heatmap".to_owned(),
            data: dataset.cells().collect(),
            label: SeriesLabel {
                show: s.flag("series.label.show")?,
                font_size: s.whole("series.label.fontSize")?,
                color: s.text("series.label.color")?,
            },
            item_style: ItemStyle {
                border_width: s.number("series.itemStyle.borderWidth")?,
                border_color: s.text("series.itemStyle.borderColor")?,
                border_radius: s.number("series.itemStyle.borderRadius")?,
                opacity: s.number("series.itemStyle.opacity")?,
            },
            emphasis: Emphasis {
                item_style: EmphasisItemStyle {
                    shadow_blur: s.number("series.emphasis.itemStyle.shadowBlur")?,
                    shadow_color: s.text("series.emphasis.itemStyle.shadowColor")?,
                },
            },
        }],
        animation: s.flag("animation")?,
        animation_duration: s.whole("animationDuration")?,
        animation_easing: s.text("animationEasing")?,
        animation_delay: s.whole("animationDelay")?,
        animation_duration_update: s.whole("animationDurationUpdate")?,
        animation_easing_update: s.text("animationEasingUpdate")?,
    };

    tracing::debug!(cells = spec.series[0].data.len(), "built chart specification");
    Ok(spec)
}

/// Both axes read the shared `xAxis.*` fields; only labels and position differ.
fn axis(s: &Lookup<'_>, labels: &[String], position: String) -> HeatspecResult<Axis> {
    Ok(Axis {
        kind: "category".to_owned(),
        data: labels.to_vec(),
        position,
        axis_line: Toggle::new(s.flag("xAxis.axisLine.show")?),
        axis_tick: Toggle::new(s.flag("xAxis.axisTick.show")?),
        axis_label: AxisLabel {
            show: s.flag("xAxis.axisLabel.show")?,
            font_size: s.whole("xAxis.axisLabel.fontSize")?,
            color: s.text("xAxis.axisLabel.color")?,
        },
        split_area: Toggle::new(s.flag("xAxis.splitArea.show")?),
        split_line: Toggle::new(s.flag("xAxis.splitLine.show")?),
    })
}

fn visual_map(s: &Lookup<'_>, dataset: &Dataset) -> HeatspecResult<VisualMap> {
    let scheme = s.text("visualMap.inRange.color")?;
    let colors = palette(&scheme).ok_or_else(|| {
        HeatspecError::schema_violation(format!("unknown color scheme \"{scheme}\""))
    })?;
    let [min, max] = dataset.value_range();
    Ok(VisualMap {
        kind: "continuous".to_owned(),
        min,
        max,
        calculable: s.flag("visualMap.calculable")?,
        realtime: s.flag("visualMap.realtime")?,
        orient: s.text("visualMap.orient")?,
        left: s.text("visualMap.left")?,
        bottom: "5%".to_owned(),
        text: [s.text("visualMap.text.high")?, s.text("visualMap.text.low")?],
        in_range: InRange {
            color: colors.iter().map(|c| (*c).to_owned()).collect(),
        },
    })
}

fn data_zoom(s: &Lookup<'_>) -> HeatspecResult<Vec<DataZoom>> {
    let show = s.flag("dataZoom.show")?;
    let a = s.number("dataZoom.start")?;
    let b = s.number("dataZoom.end")?;
    let (start, end) = if a <= b { (a, b) } else { (b, a) };
    Ok(vec![
        DataZoom {
            kind: "slider".to_owned(),
            show,
            orient: "horizontal".to_owned(),
            x_axis_index: Some(0),
            y_axis_index: None,
            start,
            end,
        },
        DataZoom {
            kind: "slider".to_owned(),
            show,
            orient: "vertical".to_owned(),
            x_axis_index: None,
            y_axis_index: Some(0),
            start,
            end,
        },
    ])
}

/// Typed, fail-fast reads from a snapshot.
struct Lookup<'a>(&'a ConfigSnapshot);

impl Lookup<'_> {
    fn flag(&self, path: &str) -> HeatspecResult<bool> {
        self.0.bool(path)
    }

    fn number(&self, path: &str) -> HeatspecResult<f64> {
        self.0.number(path)
    }

    fn text(&self, path: &str) -> HeatspecResult<String> {
        self.0.text(path).map(str::to_owned)
    }

    fn whole(&self, path: &str) -> HeatspecResult<u32> {
        let n = self.0.number(path)?;
        if n.fract() != 0.0 || n < 0.0 || n > f64::from(u32::MAX) {
            return Err(HeatspecError::schema_violation(format!(
                "field '{path}': {n} is not a non-negative integer"
            )));
        }
        Ok(n as u32)
    }

    fn percent(&self, path: &str) -> HeatspecResult<String> {
        Ok(format!("{}%", self.0.number(path)?))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::schema::{ConfigValue, Schema};

    fn dataset() -> Dataset {
        Dataset::new(
            vec!["r0".into(), "r1".into()],
            vec!["c0".into(), "c1".into(), "c2".into()],
            vec![vec![0.0, 0.5, 1.0], vec![1.0, 0.5, 0.0]],
        )
        .unwrap()
    }

    fn without(path: &str) -> ConfigSnapshot {
        let mut values = ConfigSnapshot::defaults(Schema::standard())
            .iter()
            .map(|(k, v)| (k.to_owned(), v.clone()))
            .collect::<BTreeMap<_, _>>();
        values.remove(path);
        ConfigSnapshot::from_raw(values)
    }

    #[test]
    fn missing_path_fails_fast() {
        let err = build_spec(&without("xAxis.axisTick.show"), &dataset()).unwrap_err();
        assert!(matches!(err, HeatspecError::SchemaViolation(_)));
        assert!(err.to_string().contains("xAxis.axisTick.show"));
    }

    #[test]
    fn ill_typed_value_fails_fast() {
        let mut values = ConfigSnapshot::defaults(Schema::standard())
            .iter()
            .map(|(k, v)| (k.to_owned(), v.clone()))
            .collect::<BTreeMap<_, _>>();
        values.insert("animation".to_owned(), ConfigValue::from("yes"));
        let err = build_spec(&ConfigSnapshot::from_raw(values), &dataset()).unwrap_err();
        assert!(matches!(err, HeatspecError::SchemaViolation(_)));
    }

    #[test]
    fn percent_fields_render_as_css() {
        let spec = build_spec(&ConfigSnapshot::defaults(Schema::standard()), &dataset()).unwrap();
        assert_eq!(spec.grid.top, "15%");
        assert_eq!(spec.grid.height, "60%");
    }

    #[test]
    fn zoom_window_is_ordered() {
        let snap = ConfigSnapshot::merged(
            Schema::standard(),
            [
                ("dataZoom.start", ConfigValue::Number(80.0)),
                ("dataZoom.end", ConfigValue::Number(20.0)),
            ],
        )
        .unwrap();
        let spec = build_spec(&snap, &dataset()).unwrap();
        assert_eq!((spec.data_zoom[0].start, spec.data_zoom[0].end), (20.0, 80.0));
    }

    #[test]
    fn axes_share_toggles_but_not_labels() {
        let spec = build_spec(&ConfigSnapshot::defaults(Schema::standard()), &dataset()).unwrap();
        assert_eq!(spec.x_axis.data, vec!["c0", "c1", "c2"]);
        assert_eq!(spec.y_axis.data, vec!["r0", "r1"]);
        assert_eq!(spec.x_axis.position, "top");
        assert_eq!(spec.y_axis.position, "left");
        assert_eq!(spec.x_axis.axis_line, spec.y_axis.axis_line);
        assert_eq!(spec.x_axis.split_area, spec.y_axis.split_area);
    }

    #[test]
    fn series_data_covers_every_cell() {
        let spec = build_spec(&ConfigSnapshot::defaults(Schema::standard()), &dataset()).unwrap();
        assert_eq!(spec.series.len(), 1);
        assert_eq!(spec.series[0].data.len(), 6);
        assert_eq!(spec.series[0].data[5], (2, 1, 0.0));
        assert_eq!((spec.visual_map.min, spec.visual_map.max), (0.0, 1.0));
    }
}
