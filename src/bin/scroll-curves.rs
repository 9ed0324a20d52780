use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use scroll_curves::{
    Bindings, CssSink, MotionPreference, SceneConfig, SceneEvaluator, SceneFrame, ScrollGeometry,
    StyleSink as _,
};

#[derive(Parser, Debug)]
#[command(name = "scroll-curves", version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print scroll progress for a region geometry.
    Progress(ProgressArgs),
    /// Evaluate a scene at one progress value.
    Sample(SampleArgs),
    /// Evaluate a scene at evenly spaced progress values from 0 to 1.
    Sweep(SweepArgs),
    /// Write a built-in scene config as JSON.
    Preset(PresetArgs),
}

#[derive(Parser, Debug)]
struct ProgressArgs {
    /// Region top relative to the viewport (negative once scrolled past).
    #[arg(long, allow_hyphen_values = true)]
    top: f64,

    /// Region height.
    #[arg(long)]
    height: f64,

    /// Viewport height.
    #[arg(long)]
    viewport: f64,
}

#[derive(Parser, Debug)]
struct SceneArgs {
    /// Scene config JSON. Overrides --preset.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Built-in scene.
    #[arg(long, default_value = "wellness-journey")]
    preset: String,

    /// Bound element count per target as name=count (repeatable). Defaults to one of each.
    #[arg(long = "bind", value_name = "NAME=COUNT")]
    bind: Vec<String>,

    /// Evaluate with the reduced-motion fallback.
    #[arg(long)]
    reduced_motion: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Css)]
    format: OutputFormat,
}

#[derive(Parser, Debug)]
struct SampleArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Progress in [0, 1].
    #[arg(long)]
    progress: f64,
}

#[derive(Parser, Debug)]
struct SweepArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Number of intervals; prints steps + 1 frames.
    #[arg(long, default_value_t = 10)]
    steps: u32,
}

#[derive(Parser, Debug)]
struct PresetArgs {
    /// Preset name.
    #[arg(long, default_value = "wellness-journey")]
    name: String,

    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Css,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Progress(args) => cmd_progress(args),
        Command::Sample(args) => cmd_sample(args),
        Command::Sweep(args) => cmd_sweep(args),
        Command::Preset(args) => cmd_preset(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_scene(args: &SceneArgs) -> anyhow::Result<(SceneConfig, Bindings)> {
    let config = match &args.config {
        Some(path) => read_config(path)?,
        None => SceneConfig::preset(&args.preset)?,
    };

    let bindings = if args.bind.is_empty() {
        Bindings::one_each(&config)
    } else {
        let mut b = Bindings::new();
        for spec in &args.bind {
            let (name, count) = Bindings::parse_pair(spec)?;
            b.set(name, count);
        }
        b
    };
    let unknown = bindings.unknown_targets(&config);
    if !unknown.is_empty() {
        anyhow::bail!(
            "scene '{}' has no target(s): {}",
            config.name,
            unknown.join(", ")
        );
    }
    Ok((config, bindings))
}

fn read_config(path: &Path) -> anyhow::Result<SceneConfig> {
    SceneConfig::from_path(path).with_context(|| format!("load scene config '{}'", path.display()))
}

fn print_frame(frame: &SceneFrame, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Css => {
            let mut sink = CssSink::new();
            sink.apply(frame)?;
            println!("/* progress {:.4} */", frame.progress);
            print!("{}", sink.render());
        }
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string(frame).with_context(|| "serialize frame")?
            );
        }
    }
    Ok(())
}

fn motion(args: &SceneArgs) -> MotionPreference {
    MotionPreference::from_reduced_motion(args.reduced_motion)
}

fn cmd_progress(args: ProgressArgs) -> anyhow::Result<()> {
    let g = ScrollGeometry::new(args.top, args.height, args.viewport);
    println!("{}", g.progress());
    Ok(())
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    if !(0.0..=1.0).contains(&args.progress) {
        anyhow::bail!("--progress must be within [0, 1], got {}", args.progress);
    }
    let (config, bindings) = load_scene(&args.scene)?;
    let frame = SceneEvaluator::eval(&config, &bindings, args.progress, motion(&args.scene));
    print_frame(&frame, args.scene.format)
}

fn cmd_sweep(args: SweepArgs) -> anyhow::Result<()> {
    if args.steps == 0 {
        anyhow::bail!("--steps must be > 0");
    }
    let (config, bindings) = load_scene(&args.scene)?;
    let motion = motion(&args.scene);
    for i in 0..=args.steps {
        let p = f64::from(i) / f64::from(args.steps);
        let frame = SceneEvaluator::eval(&config, &bindings, p, motion);
        print_frame(&frame, args.scene.format)?;
    }
    Ok(())
}

fn cmd_preset(args: PresetArgs) -> anyhow::Result<()> {
    let config = SceneConfig::preset(&args.name)?;
    let json = config.to_json_pretty()?;
    match args.out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(&path, json + "\n")
                .with_context(|| format!("write preset '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
