use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "pingala", version)]
struct Cli {
    /// Log debug spans to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the first rows of the Meru Prastaara.
    Meru(MeruArgs),
    /// Convert an integer into its laghu/guru pattern, step by step.
    Decompose(DecomposeArgs),
    /// Rebuild an integer from a laghu/guru pattern.
    Reconstruct(ReconstructArgs),
    /// Print every pattern of one width in canonical order.
    Prastaara(PrastaaraArgs),
    /// Build a scene timeline and write it as JSON.
    Timeline(TimelineArgs),
    /// Evaluate one frame of a timeline JSON file.
    Snapshot(SnapshotArgs),
}

#[derive(Parser, Debug)]
struct MeruArgs {
    /// Number of rows (>= 1).
    #[arg(long, default_value_t = 7)]
    rows: usize,

    /// Print JSON instead of text.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Parser, Debug)]
struct DecomposeArgs {
    /// Starting integer (>= 1).
    #[arg(long)]
    n: u64,

    /// Print JSON instead of text.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DirectionArg {
    RightToLeft,
    LeftToRight,
}

impl From<DirectionArg> for pingala::Direction {
    fn from(d: DirectionArg) -> Self {
        match d {
            DirectionArg::RightToLeft => Self::RightToLeft,
            DirectionArg::LeftToRight => Self::LeftToRight,
        }
    }
}

#[derive(Parser, Debug)]
struct ReconstructArgs {
    /// Pattern such as "L G L" or "LGL".
    #[arg(long)]
    pattern: String,

    /// Traversal order.
    #[arg(long, value_enum, default_value_t = DirectionArg::RightToLeft)]
    direction: DirectionArg,

    /// Print the accumulator after every symbol.
    #[arg(long, default_value_t = false)]
    trace: bool,
}

#[derive(Parser, Debug)]
struct PrastaaraArgs {
    /// Pattern width (syllables).
    #[arg(long)]
    width: usize,

    /// Print JSON instead of text.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Parser, Debug)]
struct TimelineArgs {
    #[command(subcommand)]
    scene: SceneCommand,

    /// Scene config JSON; defaults apply to missing fields.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output timeline JSON path; stdout when omitted.
    #[arg(long, global = true)]
    out: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum SceneCommand {
    /// Triangle reveal.
    Meru {
        #[arg(long, default_value_t = 7)]
        rows: usize,
    },
    /// Cube pyramid under a drifting camera.
    Pyramid {
        #[arg(long, default_value_t = 5)]
        rows: usize,
    },
    /// Forward conversion of `n`.
    Decompose {
        #[arg(long)]
        n: u64,
    },
    /// Reverse conversion of a pattern.
    Reconstruct {
        #[arg(long)]
        pattern: String,
        #[arg(long, value_enum, default_value_t = DirectionArg::RightToLeft)]
        direction: DirectionArg,
    },
    /// Table built by column doubling.
    Prastaara {
        #[arg(long, default_value_t = 3)]
        width: usize,
    },
    /// Metre pattern crawling on a sine wave.
    Snake {
        #[arg(long, default_value = "L G G")]
        pattern: String,
        #[arg(long, default_value_t = 4)]
        repeats: usize,
    },
}

#[derive(Parser, Debug)]
struct SnapshotArgs {
    /// Input timeline JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Meru(args) => cmd_meru(args),
        Command::Decompose(args) => cmd_decompose(args),
        Command::Reconstruct(args) => cmd_reconstruct(args),
        Command::Prastaara(args) => cmd_prastaara(args),
        Command::Timeline(args) => cmd_timeline(args),
        Command::Snapshot(args) => cmd_snapshot(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn parse_pattern(s: &str) -> anyhow::Result<pingala::WeightSequence> {
    s.parse::<pingala::WeightSequence>()
        .with_context(|| format!("parse pattern '{s}'"))
}

fn cmd_meru(args: MeruArgs) -> anyhow::Result<()> {
    let triangle = pingala::generate(args.rows)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&triangle)?);
        return Ok(());
    }
    for row in triangle.rows() {
        let cells: Vec<String> = row.iter().map(u64::to_string).collect();
        println!("{}", cells.join(" "));
    }
    Ok(())
}

fn cmd_decompose(args: DecomposeArgs) -> anyhow::Result<()> {
    let steps = pingala::decompose(args.n)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&steps)?);
        return Ok(());
    }
    for step in &steps {
        println!(
            "{:>6}  {:<4}  {:<12} = {:<6} {}",
            step.current,
            step.parity.to_string(),
            step.formula(),
            step.next,
            step.symbol
        );
    }
    println!("{}", pingala::WeightSequence::from_steps(&steps));
    Ok(())
}

fn cmd_reconstruct(args: ReconstructArgs) -> anyhow::Result<()> {
    let pattern = parse_pattern(&args.pattern)?;
    let direction = args.direction.into();
    let value = pingala::reconstruct_checked(pattern.symbols(), direction)?;
    if args.trace {
        for step in pingala::reconstruct_trace(pattern.symbols(), direction) {
            println!(
                "#{:<3} {}  {} -> {}",
                step.index, step.symbol, step.before, step.after
            );
        }
    }
    println!("{value}");
    Ok(())
}

fn cmd_prastaara(args: PrastaaraArgs) -> anyhow::Result<()> {
    let table = pingala::Prastaara::build(args.width)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&table)?);
        return Ok(());
    }
    for (i, row) in table.rows().iter().enumerate() {
        println!("{:>5}  {row}", i + 1);
    }
    Ok(())
}

fn load_config(path: Option<&Path>) -> anyhow::Result<pingala::SceneConfig> {
    match path {
        Some(p) => Ok(pingala::SceneConfig::load(p)?),
        None => Ok(pingala::SceneConfig::default()),
    }
}

fn cmd_timeline(args: TimelineArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;
    let kind = match args.scene {
        SceneCommand::Meru { rows } => pingala::SceneKind::Meru { rows },
        SceneCommand::Pyramid { rows } => pingala::SceneKind::Pyramid { rows },
        SceneCommand::Decompose { n } => pingala::SceneKind::Decompose { n },
        SceneCommand::Reconstruct { pattern, direction } => pingala::SceneKind::Reconstruct {
            symbols: parse_pattern(&pattern)?,
            direction: direction.into(),
        },
        SceneCommand::Prastaara { width } => pingala::SceneKind::Prastaara { width },
        SceneCommand::Snake { pattern, repeats } => pingala::SceneKind::Snake {
            pattern: parse_pattern(&pattern)?,
            repeats,
        },
    };

    let timeline = pingala::build_scene(&kind, &config)
        .with_context(|| format!("build scene {kind:?}"))?;
    let json = timeline.to_json_pretty()?;

    let Some(out) = args.out else {
        println!("{json}");
        return Ok(());
    };
    if let Some(parent) = out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&out, json).with_context(|| format!("write timeline '{}'", out.display()))?;

    eprintln!(
        "wrote {} ({} frames, {:.2}s)",
        out.display(),
        timeline.duration.0,
        timeline.duration_secs()
    );
    Ok(())
}

fn cmd_snapshot(args: SnapshotArgs) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(&args.in_path)
        .with_context(|| format!("read timeline '{}'", args.in_path.display()))?;
    let timeline = pingala::Timeline::from_json(&raw)
        .with_context(|| format!("parse timeline '{}'", args.in_path.display()))?;
    let snap = pingala::Evaluator::snapshot(&timeline, pingala::FrameIndex(args.frame))?;
    println!("{}", serde_json::to_string_pretty(&snap)?);
    Ok(())
}
