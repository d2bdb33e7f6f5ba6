//! Algorithm selection for the benchmark harness.
//!
//! ```rust
//! use blurbench_core::Plane;
//! use blurbench_ops::{Algorithm, Execution};
//!
//! let algo: Algorithm = "box".parse().unwrap();
//! let src = Plane::filled(8, 8, 3).unwrap();
//! let out = algo.apply(&src, 2, Execution::Serial).unwrap();
//! assert_eq!(out, src);
//! ```

use std::fmt;
use std::str::FromStr;

use blurbench_core::{BlurParams, Error, Plane};
#[allow(unused_imports)]
use tracing::{debug, trace};

use crate::engine::{BlurEngine, Execution};
use crate::window::LineKernel;
use crate::{filter, stack, OpsResult};

/// Blur implementations that can be benchmarked against each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Direct O(R²) box average, the reference.
    Naive,
    /// Separable sliding-window box blur.
    Box,
    /// Separable sliding-window stack blur.
    Stack,
}

impl Algorithm {
    /// Every algorithm, reference first.
    pub const ALL: [Algorithm; 3] = [Algorithm::Naive, Algorithm::Box, Algorithm::Stack];

    /// Short lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Naive => "naive",
            Algorithm::Box => "box",
            Algorithm::Stack => "stack",
        }
    }

    /// True for algorithms whose cost grows with the radius.
    pub fn is_quadratic(self) -> bool {
        matches!(self, Algorithm::Naive)
    }

    /// Direct O(R²) evaluation of the same filter, for checking output.
    pub fn apply_reference(self, src: &Plane, radius: usize) -> OpsResult<Plane> {
        match self {
            Algorithm::Naive | Algorithm::Box => filter::box_blur_naive(src, radius),
            Algorithm::Stack => stack::stack_blur_naive(src, radius),
        }
    }

    /// Runs the algorithm on `src`.
    ///
    /// The naive reference always runs serially.
    pub fn apply(self, src: &Plane, radius: usize, execution: Execution) -> OpsResult<Plane> {
        debug!(algorithm = self.name(), radius, ?execution, "apply");
        let params = BlurParams::for_plane(src, radius)?;
        let kernel = match self {
            Algorithm::Naive => return filter::box_blur_naive(src, radius),
            Algorithm::Box => LineKernel::Box,
            Algorithm::Stack => LineKernel::Stack,
        };
        BlurEngine::new(params, kernel)?
            .with_execution(execution)
            .apply(src)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "naive" | "direct" => Ok(Algorithm::Naive),
            "box" | "sliding" => Ok(Algorithm::Box),
            "stack" => Ok(Algorithm::Stack),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}
