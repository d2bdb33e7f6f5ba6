//! blurbench - box blur benchmark harness
//!
//! Times the naive O(R²) box blur against the separable sliding-window
//! engine on generated single-channel input.

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use blurbench_ops::Algorithm;

mod commands;

use commands::Pattern;

#[derive(Parser)]
#[command(name = "blurbench")]
#[command(author, version, about = "Box blur benchmark: naive vs sliding-window separable")]
#[command(long_about = "
Generates a single-channel 8-bit plane and blurs it, reporting the time
taken and a preview of the first 100 samples.

Examples:
  blurbench run                                 # 1920x1080, radius 32, box
  blurbench run -a naive -r 4 -w 640 -H 480
  blurbench run -a stack --parallel -j 8
  blurbench compare -r 8 -w 512 -H 512          # all algorithms, diff vs naive
  blurbench compare --skip-naive --json
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v debug, -vv trace; RUST_LOG overrides)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Number of threads for --parallel (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Blur generated input with one algorithm and time it
    #[command(visible_alias = "r")]
    Run(RunArgs),

    /// Run every algorithm on the same input and compare
    #[command(visible_alias = "c")]
    Compare(CompareArgs),
}

/// Input geometry and generator shared by all commands.
#[derive(Args, Debug, Clone)]
struct InputArgs {
    /// Plane width
    #[arg(short, long, default_value = "1920")]
    width: usize,

    /// Plane height
    #[arg(short = 'H', long, default_value = "1080")]
    height: usize,

    /// Blur radius (window is 2R+1 samples per axis)
    #[arg(short, long, default_value = "32")]
    radius: usize,

    /// Input pattern: random, ramp, constant
    #[arg(short, long, value_enum, default_value = "random")]
    pattern: Pattern,

    /// Seed for the random pattern
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Sample value for the constant pattern
    #[arg(long, default_value = "128")]
    value: u8,

    /// Run the sliding-window passes on the rayon pool
    #[arg(long)]
    parallel: bool,
}

#[derive(Args)]
struct RunArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Algorithm: naive, box, stack
    #[arg(short, long, default_value = "box")]
    algorithm: Algorithm,

    /// Skip the input/output previews
    #[arg(long)]
    no_preview: bool,
}

#[derive(Args)]
struct CompareArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Skip the O(R²) naive runs (no reference diffs)
    #[arg(long)]
    skip_naive: bool,

    /// Timed runs per algorithm; the fastest is reported
    #[arg(short = 'n', long, default_value = "1")]
    repeat: usize,

    /// Machine-readable output (JSON)
    #[arg(long)]
    json: bool,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Commands::Run(args) => commands::run::run(args, cli.verbose),
        Commands::Compare(args) => commands::compare::run(args, cli.verbose),
    }
}
