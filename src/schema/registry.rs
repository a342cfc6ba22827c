use super::{FieldDef, Section};

pub(crate) const EASINGS: &[&str] = &[
    "linear",
    "cubicInOut",
    "quadraticIn",
    "quadraticOut",
    "elasticOut",
];

pub(crate) const PALETTES: &[&str] = &[
    "blue",
    "red",
    "green",
    "rainbow",
    "correlation",
    "random",
    "pattern",
    "imported",
];

const HORIZONTAL_ALIGN: &[&str] = &["left", "center", "right"];

/// Every configurable field, in UI tab order. `xAxis.*` paths drive both axes.
pub(crate) const FIELDS: &[FieldDef] = &[
    // basic
    FieldDef::text("title.text", Section::Basic, "Title", "Matrix Heatmap"),
    FieldDef::boolean("title.show", Section::Basic, "Show title", true),
    FieldDef::choice(
        "title.left",
        Section::Basic,
        "Title alignment",
        HORIZONTAL_ALIGN,
        "center",
    ),
    FieldDef::integer(
        "title.textStyle.fontSize",
        Section::Basic,
        "Title font size",
        10.0,
        48.0,
        18.0,
    ),
    FieldDef::color(
        "title.textStyle.color",
        Section::Basic,
        "Title color",
        "#333333",
    ),
    FieldDef::boolean("series.label.show", Section::Basic, "Show value labels", true),
    FieldDef::integer(
        "series.label.fontSize",
        Section::Basic,
        "Label font size",
        6.0,
        32.0,
        10.0,
    ),
    FieldDef::color("series.label.color", Section::Basic, "Label color", "#333333"),
    // style
    FieldDef::choice(
        "visualMap.inRange.color",
        Section::Style,
        "Color scheme",
        PALETTES,
        "rainbow",
    ),
    FieldDef::boolean(
        "visualMap.calculable",
        Section::Style,
        "Draggable range handles",
        true,
    ),
    FieldDef::choice(
        "visualMap.orient",
        Section::Style,
        "Legend orientation",
        &["horizontal", "vertical"],
        "horizontal",
    ),
    FieldDef::choice(
        "visualMap.left",
        Section::Style,
        "Legend alignment",
        HORIZONTAL_ALIGN,
        "center",
    ),
    FieldDef::text("visualMap.text.high", Section::Style, "High end text", "High"),
    FieldDef::text("visualMap.text.low", Section::Style, "Low end text", "Low"),
    FieldDef::choice(
        "xAxis.position",
        Section::Style,
        "Column label position",
        &["top", "bottom"],
        "top",
    ),
    FieldDef::boolean("xAxis.axisLine.show", Section::Style, "Show axis line", false),
    FieldDef::boolean("xAxis.axisTick.show", Section::Style, "Show axis ticks", false),
    FieldDef::boolean(
        "xAxis.splitArea.show",
        Section::Style,
        "Show grid bands",
        true,
    ),
    FieldDef::boolean(
        "xAxis.splitLine.show",
        Section::Style,
        "Show grid lines",
        false,
    ),
    FieldDef::boolean(
        "xAxis.axisLabel.show",
        Section::Style,
        "Show axis labels",
        true,
    ),
    FieldDef::integer(
        "xAxis.axisLabel.fontSize",
        Section::Style,
        "Axis label font size",
        6.0,
        32.0,
        12.0,
    ),
    FieldDef::color(
        "xAxis.axisLabel.color",
        Section::Style,
        "Axis label color",
        "#666666",
    ),
    FieldDef::number(
        "series.itemStyle.borderWidth",
        Section::Style,
        "Cell border width",
        0.0,
        10.0,
        1.0,
    ),
    FieldDef::color(
        "series.itemStyle.borderColor",
        Section::Style,
        "Cell border color",
        "#ffffff",
    ),
    FieldDef::number(
        "series.itemStyle.borderRadius",
        Section::Style,
        "Cell corner radius",
        0.0,
        20.0,
        2.0,
    ),
    FieldDef::number(
        "series.itemStyle.opacity",
        Section::Style,
        "Cell opacity",
        0.0,
        1.0,
        1.0,
    ),
    FieldDef::number(
        "series.emphasis.itemStyle.shadowBlur",
        Section::Style,
        "Hover shadow blur",
        0.0,
        50.0,
        10.0,
    ),
    FieldDef::color(
        "series.emphasis.itemStyle.shadowColor",
        Section::Style,
        "Hover shadow color",
        "rgba(0, 0, 0, 0.5)",
    ),
    // interaction
    FieldDef::boolean("tooltip.show", Section::Interaction, "Enable tooltip", true),
    FieldDef::choice(
        "tooltip.trigger",
        Section::Interaction,
        "Tooltip trigger",
        &["item", "axis", "none"],
        "item",
    ),
    FieldDef::choice(
        "tooltip.position",
        Section::Interaction,
        "Tooltip position",
        &["top", "bottom", "left", "right", "inside"],
        "top",
    ),
    FieldDef::text(
        "tooltip.formatter",
        Section::Interaction,
        "Tooltip format",
        "{c}",
    ),
    FieldDef::boolean("dataZoom.show", Section::Interaction, "Enable zoom", false),
    FieldDef::number(
        "dataZoom.start",
        Section::Interaction,
        "Zoom start (%)",
        0.0,
        100.0,
        0.0,
    ),
    FieldDef::number(
        "dataZoom.end",
        Section::Interaction,
        "Zoom end (%)",
        0.0,
        100.0,
        100.0,
    ),
    FieldDef::boolean("toolbox.show", Section::Interaction, "Show toolbox", false),
    FieldDef::boolean(
        "toolbox.feature.saveAsImage.show",
        Section::Interaction,
        "Save as image button",
        true,
    ),
    FieldDef::boolean(
        "toolbox.feature.restore.show",
        Section::Interaction,
        "Restore button",
        true,
    ),
    FieldDef::boolean(
        "toolbox.feature.dataView.show",
        Section::Interaction,
        "Data view button",
        false,
    ),
    // animation
    FieldDef::boolean("animation", Section::Animation, "Enable animation", true),
    FieldDef::integer(
        "animationDuration",
        Section::Animation,
        "Duration (ms)",
        100.0,
        5000.0,
        1000.0,
    ),
    FieldDef::choice(
        "animationEasing",
        Section::Animation,
        "Easing",
        EASINGS,
        "cubicInOut",
    ),
    FieldDef::integer(
        "animationDelay",
        Section::Animation,
        "Delay (ms)",
        0.0,
        5000.0,
        0.0,
    ),
    FieldDef::integer(
        "animationDurationUpdate",
        Section::Animation,
        "Update duration (ms)",
        0.0,
        5000.0,
        300.0,
    ),
    FieldDef::choice(
        "animationEasingUpdate",
        Section::Animation,
        "Update easing",
        EASINGS,
        "cubicInOut",
    ),
    // advanced
    FieldDef::percent("grid.top", Section::Advanced, "Grid top", 0.0, 50.0, 15.0),
    FieldDef::percent("grid.left", Section::Advanced, "Grid left", 0.0, 50.0, 10.0),
    FieldDef::percent("grid.right", Section::Advanced, "Grid right", 0.0, 50.0, 10.0),
    FieldDef::percent(
        "grid.height",
        Section::Advanced,
        "Grid height",
        10.0,
        100.0,
        60.0,
    ),
    FieldDef::boolean(
        "visualMap.realtime",
        Section::Advanced,
        "Live legend dragging",
        false,
    ),
    FieldDef::color(
        "backgroundColor",
        Section::Advanced,
        "Background color",
        "transparent",
    ),
];
