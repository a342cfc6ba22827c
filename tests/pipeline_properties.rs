use heatspec::{
    Collector, ConfigSnapshot, ConfigValue, ControlAccessor, ControlBoard, ControlState, Dataset,
    FieldKind, Preset, Schema, apply_preset, build_spec,
};

fn mix64(mut z: u64) -> u64 {
    // SplitMix64 mixing function.
    z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

fn dataset() -> Dataset {
    Dataset::from_json_str(include_str!("data/correlation.json")).unwrap()
}

/// An in-range value for `kind`, derived from `r`.
fn sample_value(kind: FieldKind, default: ConfigValue, r: u64) -> ConfigValue {
    match kind {
        FieldKind::Bool => ConfigValue::Bool(r & 1 == 1),
        FieldKind::Number {
            min,
            max,
            integer: true,
        } => {
            let span = (max - min) as u64 + 1;
            ConfigValue::Number(min + (r % span) as f64)
        }
        FieldKind::Number { min, max, .. } | FieldKind::Percent { min, max } => {
            let t = (r % 1001) as f64 / 1000.0;
            ConfigValue::Number(min + t * (max - min))
        }
        FieldKind::Enum(domain) => ConfigValue::from(domain[(r as usize) % domain.len()]),
        FieldKind::Text | FieldKind::Color => default,
    }
}

/// A control board with every field randomly bound, disabled, or missing.
fn random_board(schema: &Schema, seed: u64) -> ControlBoard {
    let mut board = ControlBoard::new();
    for (i, field) in schema.fields().iter().enumerate() {
        let r = mix64(seed ^ mix64(i as u64));
        match r % 4 {
            0 => {}
            1 => {
                board
                    .bind(field.path, field.default_value())
                    .set_enabled(field.path, false);
            }
            _ => {
                board.bind(field.path, sample_value(field.kind, field.default_value(), r >> 2));
            }
        }
    }
    board
}

/// Reads through to a board, except the listed paths always fail to read.
struct Flaky<'a> {
    inner: &'a ControlBoard,
    broken: Vec<&'static str>,
}

impl ControlAccessor for Flaky<'_> {
    fn get(&self, path: &str) -> ControlState {
        if self.broken.iter().any(|b| *b == path) {
            return ControlState::Unreadable("widget destroyed".to_owned());
        }
        self.inner.get(path)
    }
}

#[test]
fn collect_is_total_for_any_control_mix() {
    let schema = Schema::standard();
    let collector = Collector::new(schema);
    for seed in 0..64u64 {
        let board = random_board(schema, seed);
        let broken = schema
            .fields()
            .iter()
            .filter(|f| mix64(seed.wrapping_mul(31) ^ f.path.len() as u64) % 7 == 0)
            .map(|f| f.path)
            .collect();
        let collected = collector.collect(&Flaky {
            inner: &board,
            broken,
        });

        assert_eq!(collected.snapshot.len(), schema.len(), "seed {seed}");
        collected.snapshot.check_total(schema).unwrap();
        for field in schema.fields() {
            let value = collected.snapshot.get(field.path).unwrap();
            schema.validate_value(field.path, value).unwrap();
        }
    }
}

#[test]
fn absent_controls_fall_back_to_defaults() {
    let schema = Schema::standard();
    let collected = Collector::new(schema).collect(&ControlBoard::new());
    assert!(collected.warnings.is_empty());
    assert_eq!(collected.from_controls(), 0);
    for field in schema.fields() {
        assert_eq!(
            collected.snapshot.get(field.path).unwrap(),
            &schema.default_for(field.path).unwrap(),
            "{}",
            field.path
        );
    }
}

#[test]
fn show_flags_follow_the_snapshot_exactly() {
    let schema = Schema::standard();
    let collector = Collector::new(schema);
    let ds = dataset();

    let flags = [
        ("xAxis.axisLine.show", "/xAxis/axisLine/show"),
        ("xAxis.axisLine.show", "/yAxis/axisLine/show"),
        ("xAxis.axisTick.show", "/xAxis/axisTick/show"),
        ("xAxis.axisTick.show", "/yAxis/axisTick/show"),
        ("xAxis.splitArea.show", "/xAxis/splitArea/show"),
        ("xAxis.splitLine.show", "/yAxis/splitLine/show"),
        ("xAxis.axisLabel.show", "/yAxis/axisLabel/show"),
        ("title.show", "/title/show"),
        ("tooltip.show", "/tooltip/show"),
        ("series.label.show", "/series/0/label/show"),
        ("dataZoom.show", "/dataZoom/0/show"),
        ("dataZoom.show", "/dataZoom/1/show"),
        ("toolbox.show", "/toolbox/show"),
        ("toolbox.feature.saveAsImage.show", "/toolbox/feature/saveAsImage/show"),
        ("toolbox.feature.restore.show", "/toolbox/feature/restore/show"),
        ("toolbox.feature.dataView.show", "/toolbox/feature/dataView/show"),
        ("visualMap.calculable", "/visualMap/calculable"),
        ("animation", "/animation"),
    ];
    let always_present = [
        "/series/0/itemStyle/borderWidth",
        "/series/0/itemStyle/borderColor",
        "/series/0/itemStyle/borderRadius",
        "/series/0/itemStyle/opacity",
        "/series/0/emphasis/itemStyle/shadowBlur",
        "/animationDuration",
        "/animationEasing",
        "/dataZoom/0/start",
        "/dataZoom/0/end",
        "/tooltip/formatter",
        "/visualMap/inRange/color",
    ];

    for seed in 0..32u64 {
        let snapshot = collector.collect(&random_board(schema, seed)).snapshot;
        let spec = build_spec(&snapshot, &ds).unwrap().to_value().unwrap();
        for (path, pointer) in flags {
            assert_eq!(
                spec.pointer(pointer).and_then(|v| v.as_bool()),
                Some(snapshot.bool(path).unwrap()),
                "seed {seed}: {pointer}"
            );
        }
        for pointer in always_present {
            assert!(spec.pointer(pointer).is_some(), "seed {seed}: {pointer}");
        }
    }
}

#[test]
fn build_is_deterministic() {
    let schema = Schema::standard();
    let ds = dataset();
    for seed in [3u64, 17, 40] {
        let snapshot = Collector::new(schema)
            .collect(&random_board(schema, seed))
            .snapshot;
        let a = build_spec(&snapshot, &ds).unwrap();
        let b = build_spec(&snapshot.clone(), &ds.clone()).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_json().unwrap(), b.to_json().unwrap());
        assert_eq!(a.fingerprint().unwrap(), b.fingerprint().unwrap());
    }
}

#[test]
fn axis_line_toggle_reaches_the_specification() {
    let schema = Schema::standard();
    let collector = Collector::new(schema);
    let ds = dataset();

    let mut board = ControlBoard::new();
    board.bind("xAxis.axisLine.show", true);
    let on = collector.collect(&board).snapshot;
    assert!(on.bool("xAxis.axisLine.show").unwrap());
    assert!(build_spec(&on, &ds).unwrap().x_axis.axis_line.show);

    let off = collector.collect(&ControlBoard::new()).snapshot;
    assert!(!off.bool("xAxis.axisLine.show").unwrap());
    let value = build_spec(&off, &ds).unwrap().to_value().unwrap();
    assert_eq!(value["xAxis"]["axisLine"]["show"], serde_json::json!(false));
}

#[test]
fn border_and_opacity_keep_sibling_defaults() {
    let schema = Schema::standard();
    let mut board = ControlBoard::new();
    board
        .bind("series.itemStyle.borderWidth", 5)
        .bind("series.itemStyle.opacity", 0.8);
    let snapshot = Collector::new(schema).collect(&board).snapshot;
    let value = build_spec(&snapshot, &dataset())
        .unwrap()
        .to_value()
        .unwrap();

    assert_eq!(
        value["series"][0]["itemStyle"],
        serde_json::json!({
            "borderWidth": 5.0,
            "borderColor": "#ffffff",
            "borderRadius": 2.0,
            "opacity": 0.8,
        })
    );
}

#[test]
fn ragged_dataset_produces_no_specification() {
    let err = Dataset::from_json_str(include_str!("data/ragged.json")).unwrap_err();
    assert!(matches!(err, heatspec::HeatspecError::DatasetShape(_)));

    let ragged: Dataset = serde_json::from_str(include_str!("data/ragged.json")).unwrap();
    let snapshot = ConfigSnapshot::defaults(Schema::standard());
    assert!(matches!(
        build_spec(&snapshot, &ragged),
        Err(heatspec::HeatspecError::DatasetShape(_))
    ));
}

#[test]
fn every_preset_is_idempotent_through_the_controls() {
    let schema = Schema::standard();
    for preset in Preset::all() {
        for seed in [0u64, 9] {
            let mut board = random_board(schema, seed);
            let applied = apply_preset(preset, schema, &mut board).unwrap();
            let collected = Collector::new(schema).collect(&board);
            assert_eq!(collected.snapshot, applied, "{} seed {seed}", preset.name);
            assert_eq!(collected.snapshot, preset.snapshot(schema).unwrap());
        }
    }
}
