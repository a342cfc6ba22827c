//! Named, pre-built configurations.
//!
//! A preset is a table of overrides on top of the schema defaults. Applying one
//! replaces the whole snapshot and writes every field back into the controls,
//! so the next collect run reproduces it exactly. [`reset`] does the same with
//! schema defaults, for one section or all of them.

use crate::{
    collect::ControlSurface,
    foundation::error::HeatspecResult,
    schema::{FieldDefault, Schema, Section},
    snapshot::ConfigSnapshot,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Preset {
    pub name: &'static str,
    pub description: &'static str,
    overrides: &'static [(&'static str, FieldDefault)],
}

/// Layout shared by every built-in preset: legend on the right, bare axes.
const PRESET_LAYOUT: &[(&str, FieldDefault)] = &[
    ("visualMap.orient", FieldDefault::Text("vertical")),
    ("visualMap.left", FieldDefault::Text("right")),
    ("xAxis.axisLine.show", FieldDefault::Bool(false)),
    ("xAxis.axisTick.show", FieldDefault::Bool(false)),
    ("xAxis.splitArea.show", FieldDefault::Bool(false)),
    ("series.itemStyle.borderWidth", FieldDefault::Number(1.0)),
    ("series.itemStyle.borderColor", FieldDefault::Text("#ffffff")),
    ("series.itemStyle.borderRadius", FieldDefault::Number(2.0)),
];

const PRESETS: &[Preset] = &[
    Preset {
        name: "correlation",
        description: "Diverging blue-to-red scale for correlation matrices",
        overrides: &[
            ("visualMap.inRange.color", FieldDefault::Text("correlation")),
            ("visualMap.text.high", FieldDefault::Text("Strong")),
            ("visualMap.text.low", FieldDefault::Text("Weak")),
        ],
    },
    Preset {
        name: "random",
        description: "Perceptual purple-to-yellow scale for unstructured data",
        overrides: &[
            ("visualMap.inRange.color", FieldDefault::Text("random")),
            ("visualMap.text.high", FieldDefault::Text("High")),
            ("visualMap.text.low", FieldDefault::Text("Low")),
        ],
    },
    Preset {
        name: "pattern",
        description: "Plasma scale emphasizing a hot center",
        overrides: &[
            ("visualMap.inRange.color", FieldDefault::Text("pattern")),
            ("visualMap.text.high", FieldDefault::Text("Center")),
            ("visualMap.text.low", FieldDefault::Text("Edge")),
        ],
    },
    Preset {
        name: "imported",
        description: "Categorical high-contrast scale for imported files",
        overrides: &[
            ("visualMap.inRange.color", FieldDefault::Text("imported")),
            ("visualMap.text.high", FieldDefault::Text("Max")),
            ("visualMap.text.low", FieldDefault::Text("Min")),
        ],
    },
];

impl Preset {
    pub fn all() -> &'static [Preset] {
        PRESETS
    }

    pub fn by_name(name: &str) -> Option<&'static Preset> {
        PRESETS.iter().find(|p| p.name == name)
    }

    /// Overrides in application order; later entries win.
    pub fn overrides(&self) -> impl Iterator<Item = (&'static str, FieldDefault)> + '_ {
        PRESET_LAYOUT.iter().chain(self.overrides).copied()
    }

    /// The preset as a total snapshot.
    pub fn snapshot(&self, schema: &Schema) -> HeatspecResult<ConfigSnapshot> {
        ConfigSnapshot::merged(schema, self.overrides().map(|(p, d)| (p, d.to_value())))
    }
}

/// Replace the active configuration with `preset`, writing every declared field
/// through to `controls`. Returns the preset's snapshot.
#[tracing::instrument(skip(schema, controls), fields(preset = preset.name))]
pub fn apply_preset(
    preset: &Preset,
    schema: &Schema,
    controls: &mut dyn ControlSurface,
) -> HeatspecResult<ConfigSnapshot> {
    let snapshot = preset.snapshot(schema)?;
    for (path, value) in snapshot.iter() {
        controls.set(path, value.clone());
    }
    Ok(snapshot)
}

/// Write schema defaults through to `controls`: every field of `section`, or
/// every field when `section` is `None`. Returns how many controls were written.
#[tracing::instrument(skip(schema, controls), fields(section = section.map(Section::as_str)))]
pub fn reset(
    schema: &Schema,
    controls: &mut dyn ControlSurface,
    section: Option<Section>,
) -> usize {
    let mut written = 0;
    for field in schema
        .fields()
        .iter()
        .filter(|f| section.is_none_or(|s| f.section == s))
    {
        controls.set(field.path, field.default_value());
        written += 1;
    }
    tracing::debug!(written, "controls reset to defaults");
    written
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        collect::{Collector, ControlBoard},
        schema::ConfigValue,
    };

    #[test]
    fn every_preset_is_a_valid_total_snapshot() {
        let schema = Schema::standard();
        for preset in Preset::all() {
            let snap = preset.snapshot(schema).unwrap();
            snap.check_total(schema).unwrap();
            assert_eq!(
                snap.text("visualMap.inRange.color").unwrap(),
                preset.name,
                "{}",
                preset.name
            );
        }
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!(Preset::by_name("pattern").unwrap().name, "pattern");
        assert!(Preset::by_name("sepia").is_none());
    }

    #[test]
    fn apply_then_collect_is_identity() {
        let schema = Schema::standard();
        let preset = Preset::by_name("correlation").unwrap();
        let mut board = ControlBoard::new();
        board.bind("xAxis.axisLine.show", true);
        board
            .bind("series.itemStyle.opacity", 0.3)
            .set_enabled("series.itemStyle.opacity", false);

        let applied = apply_preset(preset, schema, &mut board).unwrap();
        let collected = Collector::new(schema).collect(&board);
        assert_eq!(collected.snapshot, applied);
        assert!(collected.warnings.is_empty());
        assert_eq!(board.len(), schema.len());
    }

    #[test]
    fn full_reset_collects_as_defaults() {
        let schema = Schema::standard();
        let mut board = ControlBoard::new();
        apply_preset(Preset::by_name("random").unwrap(), schema, &mut board).unwrap();
        board
            .bind("title.show", false)
            .set_enabled("grid.top", false);

        assert_eq!(reset(schema, &mut board, None), schema.len());
        let collected = Collector::new(schema).collect(&board);
        assert_eq!(collected.snapshot, ConfigSnapshot::defaults(schema));
        assert_eq!(collected.from_controls(), schema.len());
    }

    #[test]
    fn section_reset_leaves_other_sections_alone() {
        let schema = Schema::standard();
        let mut board = ControlBoard::new();
        board
            .bind("animationDuration", 2500)
            .bind("animation", false)
            .bind("title.text", "Kept")
            .bind("series.itemStyle.opacity", 0.4);

        let written = reset(schema, &mut board, Some(Section::Animation));
        assert_eq!(written, schema.section(Section::Animation).count());

        let expected = ConfigSnapshot::merged(
            schema,
            [
                ("title.text", ConfigValue::from("Kept")),
                ("series.itemStyle.opacity", ConfigValue::Number(0.4)),
            ],
        )
        .unwrap();
        assert_eq!(Collector::new(schema).collect(&board).snapshot, expected);
    }
}
