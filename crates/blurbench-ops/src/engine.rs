//! Two-pass blur engine with explicitly owned buffers.
//!
//! A [`BlurEngine`] is configured once for a plane shape and radius. It owns
//! the intermediate plane, and with [`Execution::Parallel`] also the
//! transpose scratch of the vertical pass, so repeated runs (benchmark
//! iterations, video frames) allocate nothing:
//!
//! ```text
//! source ──horizontal pass──> intermediate ──vertical pass──> destination
//! (caller, read-only)          (engine)                       (caller)
//! ```
//!
//! The vertical pass starts only after the horizontal pass has written every
//! row of the intermediate plane.
//!
//! # Example
//!
//! ```rust
//! use blurbench_core::{BlurParams, Plane};
//! use blurbench_ops::{BlurEngine, LineKernel};
//!
//! let params = BlurParams::new(64, 48, 5).unwrap();
//! let mut engine = BlurEngine::new(params, LineKernel::Box).unwrap();
//!
//! let src = Plane::filled(64, 48, 12).unwrap();
//! let mut dst = Plane::new(64, 48).unwrap();
//! engine.run(&src, &mut dst).unwrap();
//! assert!(dst.as_slice().iter().all(|&v| v == 12));
//! ```

use blurbench_core::{BlurParams, Plane};
#[allow(unused_imports)]
use tracing::{debug, trace};

use crate::filter::{horizontal_pass, vertical_pass};
use crate::window::LineKernel;
use crate::{OpsError, OpsResult};

/// How the passes are scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Execution {
    /// Single thread, lines in order.
    #[default]
    Serial,
    /// Lines partitioned across the rayon pool.
    Parallel,
}

/// Separable blur with a reusable intermediate buffer.
#[derive(Debug, Clone)]
pub struct BlurEngine {
    params: BlurParams,
    kernel: LineKernel,
    execution: Execution,
    intermediate: Plane,
    /// Transposed and blurred columns, sized on switching to parallel.
    #[cfg(feature = "parallel")]
    scratch: Vec<u8>,
}

impl BlurEngine {
    /// Creates an engine and allocates its intermediate plane.
    pub fn new(params: BlurParams, kernel: LineKernel) -> OpsResult<Self> {
        let intermediate = Plane::new(params.width(), params.height())?;
        Ok(Self {
            params,
            kernel,
            execution: Execution::Serial,
            intermediate,
            #[cfg(feature = "parallel")]
            scratch: Vec::new(),
        })
    }

    /// Sets the execution strategy.
    ///
    /// Switching to [`Execution::Parallel`] allocates the vertical pass
    /// scratch once, here.
    pub fn with_execution(mut self, execution: Execution) -> Self {
        self.execution = execution;
        #[cfg(feature = "parallel")]
        {
            if execution == Execution::Parallel {
                self.scratch.resize(2 * self.intermediate.len(), 0);
            }
        }
        self
    }

    /// Configuration this engine was built for.
    pub fn params(&self) -> &BlurParams {
        &self.params
    }

    /// Line kernel applied by both passes.
    pub fn kernel(&self) -> LineKernel {
        self.kernel
    }

    /// Execution strategy.
    pub fn execution(&self) -> Execution {
        self.execution
    }

    /// Blurs `src` into `dst`.
    ///
    /// # Errors
    ///
    /// [`OpsError::SizeMismatch`] if either plane does not match the
    /// configured dimensions; [`OpsError::Unsupported`] for
    /// [`Execution::Parallel`] when built without the `parallel` feature.
    pub fn run(&mut self, src: &Plane, dst: &mut Plane) -> OpsResult<()> {
        for (name, plane) in [("source", src), ("destination", &*dst)] {
            if plane.dimensions() != self.params.dimensions() {
                return Err(OpsError::SizeMismatch(format!(
                    "{} is {}x{}, engine expects {}x{}",
                    name,
                    plane.width(),
                    plane.height(),
                    self.params.width(),
                    self.params.height()
                )));
            }
        }

        let radius = self.params.radius();
        debug!(
            width = self.params.width(),
            height = self.params.height(),
            radius,
            kernel = ?self.kernel,
            execution = ?self.execution,
            "running blur passes"
        );

        match self.execution {
            Execution::Serial => {
                horizontal_pass(src, &mut self.intermediate, radius, self.kernel)?;
                vertical_pass(&self.intermediate, dst, radius, self.kernel)
            }
            #[cfg(feature = "parallel")]
            Execution::Parallel => {
                crate::parallel::horizontal_pass(src, &mut self.intermediate, radius, self.kernel)?;
                crate::parallel::vertical_pass_in(
                    &self.intermediate,
                    dst,
                    radius,
                    self.kernel,
                    &mut self.scratch,
                );
                Ok(())
            }
            #[cfg(not(feature = "parallel"))]
            Execution::Parallel => Err(OpsError::Unsupported(
                "parallel execution requires the `parallel` feature".into(),
            )),
        }
    }

    /// Blurs `src` into a newly allocated plane.
    pub fn apply(&mut self, src: &Plane) -> OpsResult<Plane> {
        let mut dst = Plane::new(src.width(), src.height())?;
        self.run(src, &mut dst)?;
        Ok(dst)
    }

    /// Intermediate plane left by the last run (the horizontal pass output).
    pub fn intermediate(&self) -> &Plane {
        &self.intermediate
    }
}
