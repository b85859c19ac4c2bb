use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracemark::host::MemoryPaintSurface;

#[derive(Parser, Debug)]
#[command(name = "tracemark", version)]
struct Cli {
    /// Log capture and compare details to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Turn a paint layer PNG into its watermark rendition.
    Watermark(WatermarkArgs),
    /// Capture a reference drawing, then check an attempt against it.
    Check(CheckArgs),
}

#[derive(Parser, Debug)]
struct WatermarkArgs {
    /// Paint layer PNG.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Reference drawing PNG, captured as the watermark.
    #[arg(long)]
    reference: PathBuf,

    /// Attempt PNG compared against the watermark.
    #[arg(long)]
    attempt: PathBuf,

    /// Session options JSON.
    #[arg(long)]
    opts: Option<PathBuf>,

    /// Print the comparison as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Watermark(args) => cmd_watermark(args),
        Command::Check(args) => cmd_check(args),
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
        .init();
}

fn cmd_watermark(args: WatermarkArgs) -> anyhow::Result<ExitCode> {
    let mut paint = tracemark::load_png(&args.in_path)?;
    let template = tracemark::build_watermark(&mut paint);
    tracemark::save_png(template.as_buffer(), &args.out)?;

    eprintln!("wrote {}", args.out.display());
    Ok(ExitCode::SUCCESS)
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<ExitCode> {
    let opts = match &args.opts {
        Some(path) => tracemark::SessionOpts::from_path(path)?,
        None => tracemark::SessionOpts::default(),
    };

    let reference = tracemark::load_png(&args.reference)?;
    let mut session =
        tracemark::PuzzleSession::new(opts).with_paint_surface(MemoryPaintSurface::new(reference));
    session.convert_paint_to_watermark();

    let attempt = tracemark::load_png(&args.attempt)?;
    session.set_paint_surface(Some(Box::new(MemoryPaintSurface::new(attempt))));

    let matched = session
        .is_paint_same_as_watermark()
        .with_context(|| format!("compare '{}'", args.attempt.display()))?;
    let result = session
        .compare_paint_to_watermark()?
        .context("watermark or paint surface missing after capture (bug)")?;
    debug_assert_eq!(matched, result.matched);

    if args.json {
        println!("{}", serde_json::to_string(&result)?);
    } else if result.matched {
        println!("match");
    } else {
        println!("no match ({} mismatched pixels)", result.mismatches);
    }

    Ok(if matched {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
