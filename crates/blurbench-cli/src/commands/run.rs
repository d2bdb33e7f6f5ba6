//! Run command
//!
//! Blurs generated input with one algorithm and reports the elapsed time.

use anyhow::Result;
#[allow(unused_imports)]
use tracing::{debug, info, trace};

use crate::RunArgs;

pub fn run(args: RunArgs, verbose: u8) -> Result<()> {
    let input = &args.input;
    trace!(?input, algorithm = %args.algorithm, "run::run");

    let params = input.params()?;
    let src = super::generate_input(input, &params)?;
    let execution = input.execution();

    if verbose > 0 {
        println!(
            "Applying {} blur (radius={}) to {}x{} {:?} input",
            args.algorithm,
            params.radius(),
            params.width(),
            params.height(),
            input.pattern
        );
    }
    if !args.no_preview {
        println!("{}\n", super::format_preview("Starting array", &src));
    }

    let (output, elapsed) =
        super::timed(|| args.algorithm.apply(&src, params.radius(), execution))?;

    info!(
        algorithm = %args.algorithm,
        ?execution,
        elapsed_ms = super::millis(elapsed),
        "blur finished"
    );

    println!("Time taken: {:?}\n", elapsed);
    if !args.no_preview {
        println!("{}\n", super::format_preview("Output", &output));
    }

    Ok(())
}
