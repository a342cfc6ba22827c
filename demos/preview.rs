use heatspec::{ControlBoard, Dataset, Preset, PreviewSession, Schema};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let s = include_str!("../tests/data/correlation.json");
    let dataset = Dataset::from_json_str(s)?;
    let mut session = PreviewSession::new(Schema::standard(), dataset)?;
    let mut controls = ControlBoard::new();

    controls.bind("series.itemStyle.borderWidth", 5.0);
    controls.bind("series.itemStyle.opacity", 1.7);
    let spec = session.on_config_event(&controls)?;
    println!("custom: {}", spec.fingerprint()?);
    for w in session.warnings() {
        println!("  warning on {}: {:?}", w.path, w.kind);
    }

    for preset in Preset::all() {
        let spec = session.apply_preset(preset, &mut controls)?;
        println!("{:<12} {}", preset.name, spec.fingerprint()?);
    }

    Ok(())
}
