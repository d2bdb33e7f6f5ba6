//! CLI command implementations

pub mod compare;
pub mod run;

use std::fmt::Write as _;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::ValueEnum;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use blurbench_core::{BlurParams, Plane};
use blurbench_ops::{Execution, OpsResult};

use crate::InputArgs;

/// Number of samples shown by [`format_preview`].
pub const PREVIEW_LEN: usize = 100;

/// Generated input patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Pattern {
    /// Uniformly random samples from a seeded generator
    Random,
    /// Left-to-right ramp 0..=255
    Ramp,
    /// Every sample set to `--value`
    Constant,
}

impl InputArgs {
    /// Validated blur configuration for these arguments.
    pub fn params(&self) -> Result<BlurParams> {
        BlurParams::new(self.width, self.height, self.radius).with_context(|| {
            format!(
                "Invalid configuration {}x{} radius {}",
                self.width, self.height, self.radius
            )
        })
    }

    pub fn execution(&self) -> Execution {
        if self.parallel {
            Execution::Parallel
        } else {
            Execution::Serial
        }
    }
}

/// Builds the input plane described by `args`.
pub fn generate_input(args: &InputArgs, params: &BlurParams) -> Result<Plane> {
    let (width, height) = params.dimensions();
    let data: Vec<u8> = match args.pattern {
        Pattern::Random => {
            let mut rng = StdRng::seed_from_u64(args.seed);
            (0..width * height).map(|_| rng.gen_range(0..=u8::MAX)).collect()
        }
        Pattern::Ramp => {
            let denom = (width - 1).max(1);
            (0..height)
                .flat_map(|_| (0..width).map(move |x| (x * 255 / denom) as u8))
                .collect()
        }
        Pattern::Constant => vec![args.value; width * height],
    };
    Plane::from_data(width, height, data).context("Failed to build input plane")
}

/// Runs `f` and measures its wall-clock time.
pub fn timed<T>(f: impl FnOnce() -> OpsResult<T>) -> Result<(T, Duration)> {
    let start = Instant::now();
    let value = f()?;
    Ok((value, start.elapsed()))
}

/// First [`PREVIEW_LEN`] samples, 20 per line, plus the remaining count.
pub fn format_preview(label: &str, plane: &Plane) -> String {
    let data = plane.as_slice();
    let shown = &data[..data.len().min(PREVIEW_LEN)];

    let mut out = format!("{label}: [");
    for (i, v) in shown.iter().enumerate() {
        if i % 20 == 0 {
            out.push_str("\n  ");
        }
        let _ = write!(out, "{v:>3}");
        if i + 1 < shown.len() {
            out.push_str(", ");
        }
    }
    let _ = write!(out, "\n  ... {} more items\n]", data.len() - shown.len());
    out
}

/// Largest absolute per-sample difference between two planes.
pub fn max_abs_diff(a: &Plane, b: &Plane) -> u8 {
    a.as_slice()
        .iter()
        .zip(b.as_slice())
        .map(|(x, y)| x.abs_diff(*y))
        .max()
        .unwrap_or(0)
}

/// Duration in milliseconds with sub-millisecond precision.
pub fn millis(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(pattern: Pattern, width: usize, height: usize) -> InputArgs {
        InputArgs {
            width,
            height,
            radius: 1,
            pattern,
            seed: 7,
            value: 9,
            parallel: false,
        }
    }

    #[test]
    fn test_generate_random_is_seeded() {
        let args = input(Pattern::Random, 16, 8);
        let params = args.params().unwrap();
        let a = generate_input(&args, &params).unwrap();
        let b = generate_input(&args, &params).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.dimensions(), (16, 8));
    }

    #[test]
    fn test_generate_ramp_and_constant() {
        let args = input(Pattern::Ramp, 4, 2);
        let ramp = generate_input(&args, &args.params().unwrap()).unwrap();
        assert_eq!(ramp.as_slice(), &[0, 85, 170, 255, 0, 85, 170, 255]);

        let args = input(Pattern::Constant, 3, 3);
        let flat = generate_input(&args, &args.params().unwrap()).unwrap();
        assert!(flat.as_slice().iter().all(|&v| v == 9));

        let args = input(Pattern::Ramp, 1, 3);
        let column = generate_input(&args, &args.params().unwrap()).unwrap();
        assert_eq!(column.as_slice(), &[0, 0, 0]);
    }

    #[test]
    fn test_params_error_has_context() {
        let args = input(Pattern::Random, 0, 3);
        let err = args.params().unwrap_err();
        assert!(format!("{err:#}").contains("invalid dimensions"));
    }

    #[test]
    fn test_preview_truncates() {
        let plane = Plane::from_data(150, 1, (0..150).map(|i| i as u8).collect()).unwrap();
        let text = format_preview("Output", &plane);
        assert!(text.starts_with("Output: [\n    0,   1,"));
        assert!(text.contains(" 99\n  ... 50 more items\n]"));
        assert_eq!(text.lines().count(), 1 + 5 + 2);
    }

    #[test]
    fn test_preview_short_plane() {
        let plane = Plane::from_data(3, 1, vec![1, 2, 3]).unwrap();
        assert_eq!(format_preview("In", &plane), "In: [\n    1,   2,   3\n  ... 0 more items\n]");
    }

    fn compare_args(repeat: usize) -> crate::CompareArgs {
        crate::CompareArgs {
            input: input(Pattern::Ramp, 12, 6),
            skip_naive: false,
            repeat,
            json: true,
        }
    }

    #[test]
    fn test_compare_rejects_zero_repeat() {
        let err = compare::run(compare_args(0), 0).unwrap_err();
        assert!(err.to_string().contains("--repeat"));
    }

    #[test]
    fn test_compare_runs_small_input() {
        compare::run(compare_args(2), 0).unwrap();
    }

    #[test]
    fn test_max_abs_diff() {
        let a = Plane::from_data(3, 1, vec![10, 200, 5]).unwrap();
        let b = Plane::from_data(3, 1, vec![11, 190, 5]).unwrap();
        assert_eq!(max_abs_diff(&a, &b), 10);
        assert_eq!(max_abs_diff(&a, &a), 0);
    }
}
