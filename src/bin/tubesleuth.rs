use std::{
    fs::File,
    io::{BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "tubesleuth", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Assemble a timeline into a render plan.
    Plan(PlanArgs),
    /// Evaluate a single frame of a timeline.
    Frame(FrameArgs),
}

#[derive(Parser, Debug)]
struct PlanArgs {
    /// Input timeline JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output plan JSON path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input timeline JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Plan(args) => cmd_plan(args),
        Command::Frame(args) => cmd_frame(args),
    }
}

fn read_timeline(path: &Path) -> anyhow::Result<tubesleuth::Timeline> {
    let timeline = tubesleuth::Timeline::from_path(path)
        .with_context(|| format!("load timeline '{}'", path.display()))?;
    timeline
        .validate()
        .with_context(|| format!("validate timeline '{}'", path.display()))?;
    Ok(timeline)
}

fn cmd_plan(args: PlanArgs) -> anyhow::Result<()> {
    let timeline = read_timeline(&args.in_path)?;
    let plan = tubesleuth::assemble(&timeline);

    match &args.out {
        Some(out) => {
            if let Some(parent) = out.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create directory '{}'", parent.display()))?;
            }
            let f = File::create(out).with_context(|| format!("create '{}'", out.display()))?;
            let mut w = BufWriter::new(f);
            serde_json::to_writer_pretty(&mut w, &plan).context("serialize plan JSON")?;
            w.flush().with_context(|| format!("write '{}'", out.display()))?;
            tracing::info!(
                out = %out.display(),
                visuals = plan.visuals.len(),
                captions = plan.captions.len(),
                duration_frames = plan.duration_frames,
                "wrote render plan"
            );
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            serde_json::to_writer_pretty(&mut stdout, &plan).context("serialize plan JSON")?;
            writeln!(stdout).context("write stdout")?;
        }
    }
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let timeline = read_timeline(&args.in_path)?;
    let plan = tubesleuth::assemble(&timeline);
    let frame = tubesleuth::Evaluator::eval_frame(&plan, tubesleuth::FrameIndex(args.frame))?;

    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &frame).context("serialize frame JSON")?;
    writeln!(stdout).context("write stdout")?;
    Ok(())
}
