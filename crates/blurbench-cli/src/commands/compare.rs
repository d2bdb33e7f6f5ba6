//! Compare command
//!
//! Runs every algorithm on the same input, reporting the fastest of
//! `--repeat` timings and the largest difference from the direct O(R²)
//! evaluation of the same filter.

use std::time::Duration;

use anyhow::{Context, Result, bail};
use serde::Serialize;
#[allow(unused_imports)]
use tracing::{debug, info, trace};

use blurbench_core::Plane;
use blurbench_ops::{Algorithm, Execution};

use crate::CompareArgs;

/// One line of the comparison report.
#[derive(Debug, Serialize)]
pub struct Entry {
    pub algorithm: String,
    pub millis: f64,
    /// Speedup relative to the naive run, when it was timed.
    pub speedup: Option<f64>,
    /// Max absolute difference from the direct evaluation, when computed.
    pub max_diff: Option<u8>,
}

/// Full comparison report.
#[derive(Debug, Serialize)]
pub struct Report {
    pub width: usize,
    pub height: usize,
    pub radius: usize,
    pub parallel: bool,
    pub entries: Vec<Entry>,
}

pub fn run(args: CompareArgs, verbose: u8) -> Result<()> {
    trace!(input = ?args.input, skip_naive = args.skip_naive, "compare::run");
    if args.repeat == 0 {
        bail!("--repeat must be at least 1");
    }

    let params = args.input.params()?;
    let src = super::generate_input(&args.input, &params)?;
    let radius = params.radius();
    let execution = args.input.execution();

    let algorithms: Vec<Algorithm> = Algorithm::ALL
        .into_iter()
        .filter(|a| !(args.skip_naive && a.is_quadratic()))
        .collect();

    let mut naive: Option<(Plane, Duration)> = None;
    let mut entries = Vec::with_capacity(algorithms.len());

    for algo in algorithms {
        if verbose > 0 && !args.json {
            println!("Running {algo}...");
        }
        let (output, elapsed) = best_of(args.repeat, &src, algo, radius, execution)?;
        info!(algorithm = %algo, elapsed_ms = super::millis(elapsed), "timed");

        let max_diff = match (algo, &naive) {
            (Algorithm::Naive, _) => Some(0),
            (Algorithm::Box, Some((reference, _))) => Some(super::max_abs_diff(&output, reference)),
            (Algorithm::Stack, _) if !args.skip_naive => {
                let reference = algo
                    .apply_reference(&src, radius)
                    .context("Stack reference failed")?;
                Some(super::max_abs_diff(&output, &reference))
            }
            _ => None,
        };
        let speedup = naive
            .as_ref()
            .map(|(_, base)| base.as_secs_f64() / elapsed.as_secs_f64().max(f64::EPSILON));

        entries.push(Entry {
            algorithm: algo.to_string(),
            millis: super::millis(elapsed),
            speedup,
            max_diff,
        });

        if algo == Algorithm::Naive {
            naive = Some((output, elapsed));
        }
    }

    let report = Report {
        width: params.width(),
        height: params.height(),
        radius,
        parallel: execution == Execution::Parallel,
        entries,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn best_of(
    repeat: usize,
    src: &Plane,
    algo: Algorithm,
    radius: usize,
    execution: Execution,
) -> Result<(Plane, Duration)> {
    let (mut output, mut best) = super::timed(|| algo.apply(src, radius, execution))?;
    for _ in 1..repeat {
        let (next, elapsed) = super::timed(|| algo.apply(src, radius, execution))?;
        debug!(algorithm = %algo, elapsed_ms = super::millis(elapsed), "repeat");
        if elapsed < best {
            best = elapsed;
            output = next;
        }
    }
    Ok((output, best))
}

fn print_report(report: &Report) {
    println!(
        "Box blur {}x{} radius {}{}",
        report.width,
        report.height,
        report.radius,
        if report.parallel { " (parallel)" } else { "" }
    );
    println!("  {:<8} {:>12} {:>9} {:>9}", "algo", "time (ms)", "speedup", "max diff");
    for e in &report.entries {
        let speedup = e.speedup.map_or_else(|| "-".to_string(), |s| format!("{s:.1}x"));
        let diff = e.max_diff.map_or_else(|| "-".to_string(), |d| d.to_string());
        println!("  {:<8} {:>12.3} {:>9} {:>9}", e.algorithm, e.millis, speedup, diff);
    }
}
