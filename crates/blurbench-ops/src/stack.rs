//! Stack blur.
//!
//! A sliding-window approximation of a Gaussian: each sample at offset `d`
//! from the centre is weighted `R+1-|d|`, so the 1-D kernel is a triangle
//! summing to `(R+1)²`. Like the box blur it is separable and runs in O(1)
//! per sample, keeping an incoming and an outgoing running sum next to the
//! weighted sum.
//!
//! Edges follow the box blur policy: replicated edge samples, constant
//! divisor, whole-line mean once `R` reaches the line length.

use blurbench_core::{BlurParams, Plane};
#[allow(unused_imports)]
use tracing::{debug, trace};

use crate::engine::BlurEngine;
use crate::filter::convolve_direct;
use crate::window::LineKernel;
use crate::OpsResult;

/// Separable sliding-window stack blur.
///
/// # Example
///
/// ```rust
/// use blurbench_core::Plane;
/// use blurbench_ops::stack::stack_blur;
///
/// let src = Plane::from_data(3, 1, vec![0, 100, 200]).unwrap();
/// let out = stack_blur(&src, 1).unwrap();
/// assert_eq!(out.as_slice(), &[25, 100, 175]);
/// ```
pub fn stack_blur(src: &Plane, radius: usize) -> OpsResult<Plane> {
    trace!(width = src.width(), height = src.height(), radius, "stack_blur");
    let params = BlurParams::for_plane(src, radius)?;
    BlurEngine::new(params, LineKernel::Stack)?.apply(src)
}

/// Direct 2-D triangular convolution, the reference for [`stack_blur`].
pub fn stack_blur_naive(src: &Plane, radius: usize) -> OpsResult<Plane> {
    trace!(width = src.width(), height = src.height(), radius, "stack_blur_naive");
    BlurParams::for_plane(src, radius)?;
    convolve_direct(src, radius, LineKernel::Stack)
}
