use std::{
    fs::File,
    io::{BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "promptreel", version)]
struct Cli {
    /// Raise log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List built-in compositions.
    List,
    /// Evaluate a single frame and print its render tree as JSON.
    Frame(FrameArgs),
    /// Evaluate a frame range as JSON lines, one tree per frame.
    Dump(DumpArgs),
    /// Write a composition as JSON.
    Export(ExportArgs),
    /// Print a combined fingerprint over every frame.
    Digest(DigestArgs),
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct Source {
    /// Built-in composition id.
    #[arg(long)]
    comp: Option<String>,

    /// Input composition JSON.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct Threading {
    /// Enable frame-level parallelism.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Evaluation chunk size.
    #[arg(long, default_value_t = 64)]
    chunk_size: usize,
}

impl Threading {
    fn to_eval(&self) -> promptreel::EvalThreading {
        promptreel::EvalThreading {
            parallel: self.parallel,
            chunk_size: self.chunk_size,
            threads: self.threads,
        }
    }
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    source: Source,

    /// Frame index (0-based); frames past the end show the last frame.
    #[arg(long)]
    frame: u64,

    /// Output JSON path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct DumpArgs {
    #[command(flatten)]
    source: Source,

    /// First frame (inclusive).
    #[arg(long, default_value_t = 0)]
    start: u64,

    /// Last frame (exclusive); the composition duration when omitted.
    #[arg(long)]
    end: Option<u64>,

    /// Output JSON lines path.
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    threading: Threading,
}

#[derive(Parser, Debug)]
struct ExportArgs {
    /// Built-in composition id.
    #[arg(long)]
    comp: String,

    /// Output JSON path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct DigestArgs {
    #[command(flatten)]
    source: Source,

    #[command(flatten)]
    threading: Threading,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::List => cmd_list(),
        Command::Frame(args) => cmd_frame(args),
        Command::Dump(args) => cmd_dump(args),
        Command::Export(args) => cmd_export(args),
        Command::Digest(args) => cmd_digest(args),
    }
}

fn init_logging(verbose: u8) {
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

fn load(source: &Source) -> anyhow::Result<promptreel::Composition> {
    match (&source.comp, &source.in_path) {
        (Some(id), _) => {
            let registry = promptreel::Registry::builtin()?;
            Ok(registry.require(id)?.clone())
        }
        (None, Some(path)) => {
            let comp = promptreel::Composition::from_path(path)
                .with_context(|| format!("load composition '{}'", path.display()))?;
            comp.validate()?;
            Ok(comp)
        }
        (None, None) => anyhow::bail!("either --comp or --in is required"),
    }
}

fn create_output(path: &Path) -> anyhow::Result<BufWriter<File>> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let f = File::create(path).with_context(|| format!("create '{}'", path.display()))?;
    Ok(BufWriter::new(f))
}

fn write_json_or_print(json: &str, out: Option<&Path>) -> anyhow::Result<()> {
    match out {
        Some(path) => {
            let mut w = create_output(path)?;
            w.write_all(json.as_bytes())
                .and_then(|()| w.write_all(b"\n"))
                .and_then(|()| w.flush())
                .with_context(|| format!("write '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_list() -> anyhow::Result<()> {
    let registry = promptreel::Registry::builtin()?;
    for comp in registry.iter() {
        let kinds: Vec<&str> = comp.scenes.iter().map(|s| s.content.kind()).collect();
        println!(
            "{:<24} {:>5} frames  {:>3} fps  {}x{}  {}",
            comp.id,
            comp.duration.0,
            comp.fps.as_f64(),
            comp.canvas.width,
            comp.canvas.height,
            kinds.join(",")
        );
    }
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let comp = load(&args.source)?;
    let tree = promptreel::Evaluator::eval_frame(&comp, promptreel::FrameIndex(args.frame))?;
    let json = serde_json::to_string_pretty(&tree).context("serialize render tree")?;
    write_json_or_print(&json, args.out.as_deref())
}

fn cmd_dump(args: DumpArgs) -> anyhow::Result<()> {
    let comp = load(&args.source)?;
    let end = args.end.unwrap_or(comp.duration.0);
    let range = promptreel::FrameRange::new(
        promptreel::FrameIndex(args.start),
        promptreel::FrameIndex(end),
    )?;
    let (trees, stats) =
        promptreel::eval_frames_with_stats(&comp, range, &args.threading.to_eval())?;

    let mut w = create_output(&args.out)?;
    for tree in &trees {
        serde_json::to_writer(&mut w, tree).context("serialize render tree")?;
        w.write_all(b"\n")
            .with_context(|| format!("write '{}'", args.out.display()))?;
    }
    w.flush()
        .with_context(|| format!("write '{}'", args.out.display()))?;

    eprintln!(
        "wrote {} ({} frames, {} unique)",
        args.out.display(),
        stats.frames_total,
        stats.frames_unique
    );
    Ok(())
}

fn cmd_export(args: ExportArgs) -> anyhow::Result<()> {
    let registry = promptreel::Registry::builtin()?;
    let comp = registry.require(&args.comp)?;
    let json = comp.to_json_pretty()?;
    write_json_or_print(&json, args.out.as_deref())
}

fn cmd_digest(args: DigestArgs) -> anyhow::Result<()> {
    let comp = load(&args.source)?;
    let digest =
        promptreel::digest_range(&comp, comp.frame_range(), &args.threading.to_eval())?;
    println!("{digest}  {}", comp.id);
    Ok(())
}
