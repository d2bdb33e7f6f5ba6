//! Parallel blur passes using Rayon.
//!
//! Each worker owns one output line and reads the source plane shared and
//! immutable, so no locking is needed. Rows are contiguous and are split
//! directly; columns are handled by transposing, blurring rows, and
//! transposing back. Output is byte-identical to the serial passes.
//!
//! # Example
//!
//! ```rust
//! use blurbench_core::Plane;
//! use blurbench_ops::parallel;
//!
//! let src = Plane::filled(256, 256, 40).unwrap();
//! let blurred = parallel::box_blur(&src, 5).unwrap();
//! assert_eq!(blurred, blurbench_ops::filter::box_blur(&src, 5).unwrap());
//! ```

use blurbench_core::{BlurParams, Plane};
use rayon::prelude::*;

use crate::engine::{BlurEngine, Execution};
use crate::window::LineKernel;
use crate::{OpsError, OpsResult};

/// Parallel separable box blur.
pub fn box_blur(src: &Plane, radius: usize) -> OpsResult<Plane> {
    blur(src, radius, LineKernel::Box)
}

/// Parallel stack blur.
pub fn stack_blur(src: &Plane, radius: usize) -> OpsResult<Plane> {
    blur(src, radius, LineKernel::Stack)
}

fn blur(src: &Plane, radius: usize, kernel: LineKernel) -> OpsResult<Plane> {
    let params = BlurParams::for_plane(src, radius)?;
    BlurEngine::new(params, kernel)?
        .with_execution(Execution::Parallel)
        .apply(src)
}

/// Parallel horizontal pass: one rayon task per row.
pub fn horizontal_pass(
    src: &Plane,
    dst: &mut Plane,
    radius: usize,
    kernel: LineKernel,
) -> OpsResult<()> {
    check_pass(src, dst, radius)?;
    blur_rows(src.as_slice(), dst.as_mut_slice(), src.width(), radius, kernel);
    Ok(())
}

/// Parallel vertical pass.
///
/// Uses transpose-blur-transpose so that every task writes one contiguous
/// output line. Allocates two plane-sized scratch buffers per call;
/// [`BlurEngine`] keeps them across runs instead.
pub fn vertical_pass(
    src: &Plane,
    dst: &mut Plane,
    radius: usize,
    kernel: LineKernel,
) -> OpsResult<()> {
    check_pass(src, dst, radius)?;
    let mut scratch = vec![0u8; 2 * src.len()];
    vertical_pass_in(src, dst, radius, kernel, &mut scratch);
    Ok(())
}

/// Vertical pass on checked planes with caller-owned scratch.
///
/// `scratch` holds at least `2 * src.len()` samples.
pub(crate) fn vertical_pass_in(
    src: &Plane,
    dst: &mut Plane,
    radius: usize,
    kernel: LineKernel,
    scratch: &mut [u8],
) {
    let (width, height) = src.dimensions();
    let (transposed, blurred) = scratch[..2 * src.len()].split_at_mut(src.len());

    // Columns become rows of length `height`
    transpose_into(src.as_slice(), width, height, transposed);
    blur_rows(transposed, blurred, height, radius, kernel);
    transpose_into(blurred, height, width, dst.as_mut_slice());
}

fn blur_rows(src: &[u8], dst: &mut [u8], width: usize, radius: usize, kernel: LineKernel) {
    dst.par_chunks_mut(width)
        .zip(src.par_chunks(width))
        .for_each(|(out, row)| {
            kernel.apply(width, radius, |i| row[i], |i, v| out[i] = v);
        });
}

/// Transposes a row-major `width`×`height` grid into `dst`.
///
/// Input sample (x, y) is at `y * width + x`; output sample (x, y) is at
/// `x * height + y`.
fn transpose_into(src: &[u8], width: usize, height: usize, dst: &mut [u8]) {
    dst.par_chunks_mut(height)
        .enumerate()
        .for_each(|(x, col)| {
            for (y, out) in col.iter_mut().enumerate() {
                *out = src[y * width + x];
            }
        });
}

fn check_pass(src: &Plane, dst: &Plane, radius: usize) -> OpsResult<()> {
    src.ensure_same_dimensions(dst)
        .map_err(|e| OpsError::SizeMismatch(e.to_string()))?;
    BlurParams::for_plane(src, radius)?;
    Ok(())
}
