use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "heatspec", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a chart specification as JSON.
    Build(BuildArgs),
    /// Export a standalone HTML page or script.
    Export(ExportArgs),
    /// Write the full default configuration.
    Defaults(DefaultsArgs),
    /// List built-in presets.
    Presets,
}

#[derive(Parser, Debug)]
struct Inputs {
    /// Dataset JSON (`rowLabels`, `colLabels`, `values`).
    #[arg(long)]
    data: PathBuf,

    /// Flat `{ "path": value }` configuration JSON, merged over the defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Start from a built-in preset instead of the defaults. `--config` is applied on top.
    #[arg(long)]
    preset: Option<String>,
}

#[derive(Parser, Debug)]
struct BuildArgs {
    #[command(flatten)]
    inputs: Inputs,

    /// Output path. Prints to stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct ExportArgs {
    #[command(flatten)]
    inputs: Inputs,

    /// Output path.
    #[arg(long)]
    out: PathBuf,

    #[arg(long, value_enum, default_value_t = ExportFormat::Html)]
    format: ExportFormat,

    /// Page title for HTML output.
    #[arg(long)]
    title: Option<String>,

    /// Script URL the page loads the charting library from.
    #[arg(long)]
    echarts_src: Option<String>,
}

#[derive(Parser, Debug)]
struct DefaultsArgs {
    /// Output path. Prints to stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ExportFormat {
    Html,
    Js,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Build(args) => cmd_build(args),
        Command::Export(args) => cmd_export(args),
        Command::Defaults(args) => cmd_defaults(args),
        Command::Presets => cmd_presets(),
    }
}

fn read_text(path: &Path, what: &str) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("open {what} '{}'", path.display()))
}

fn load_snapshot(inputs: &Inputs) -> anyhow::Result<heatspec::ConfigSnapshot> {
    let schema = heatspec::Schema::standard();
    let base = match &inputs.preset {
        Some(name) => heatspec::Preset::by_name(name)
            .with_context(|| format!("unknown preset '{name}'"))?
            .snapshot(schema)?,
        None => heatspec::ConfigSnapshot::defaults(schema),
    };
    let Some(path) = &inputs.config else {
        return Ok(base);
    };

    let overrides: std::collections::BTreeMap<String, heatspec::ConfigValue> =
        serde_json::from_str(&read_text(path, "config")?)
            .with_context(|| "parse config JSON")?;
    let merged = base
        .iter()
        .map(|(k, v)| (k.to_owned(), v.clone()))
        .chain(overrides)
        .collect();
    heatspec::ConfigSnapshot::from_values(schema, merged)
        .with_context(|| format!("invalid config '{}'", path.display()))
}

fn build(inputs: &Inputs) -> anyhow::Result<heatspec::ChartSpecification> {
    let snapshot = load_snapshot(inputs)?;
    let dataset = heatspec::Dataset::from_json_str(&read_text(&inputs.data, "dataset")?)
        .with_context(|| format!("invalid dataset '{}'", inputs.data.display()))?;
    Ok(heatspec::build_spec(&snapshot, &dataset)?)
}

fn write_out(out: Option<&Path>, contents: &str) -> anyhow::Result<()> {
    let Some(out) = out else {
        println!("{contents}");
        return Ok(());
    };
    if let Some(parent) = out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(out, contents).with_context(|| format!("write '{}'", out.display()))?;
    eprintln!("wrote {}", out.display());
    Ok(())
}

fn cmd_build(args: BuildArgs) -> anyhow::Result<()> {
    let spec = build(&args.inputs)?;
    eprintln!("fingerprint {}", spec.fingerprint()?);
    write_out(args.out.as_deref(), &spec.to_json_pretty()?)
}

fn cmd_export(args: ExportArgs) -> anyhow::Result<()> {
    let spec = build(&args.inputs)?;
    let contents = match args.format {
        ExportFormat::Js => heatspec::option_script(&spec)?,
        ExportFormat::Html => {
            let mut opts = heatspec::ExportOpts::default();
            if let Some(title) = args.title {
                opts.page_title = title;
            }
            if let Some(src) = args.echarts_src {
                opts.echarts_src = src;
            }
            heatspec::html_document(&spec, &opts)?
        }
    };
    write_out(Some(&args.out), &contents)
}

fn cmd_defaults(args: DefaultsArgs) -> anyhow::Result<()> {
    let snapshot = heatspec::ConfigSnapshot::defaults(heatspec::Schema::standard());
    write_out(args.out.as_deref(), &snapshot.to_json_pretty()?)
}

fn cmd_presets() -> anyhow::Result<()> {
    for preset in heatspec::Preset::all() {
        println!("{:<12} {}", preset.name, preset.description);
    }
    Ok(())
}
