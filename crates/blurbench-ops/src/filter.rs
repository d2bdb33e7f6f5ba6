//! Box blur: naive reference and separable sliding-window passes.
//!
//! # Algorithms
//!
//! - [`box_blur_naive`] - direct (2R+1)×(2R+1) average per sample, O(R²)
//! - [`box_blur`] - horizontal pass then vertical pass, O(1) per sample
//!
//! Both use the same edge policy (see [`crate::window`]): out-of-range
//! positions replicate the edge sample and the divisor is constant. The
//! naive version rounds once, the separable version rounds after each pass,
//! so results agree within one unit.
//!
//! # Example
//!
//! ```rust
//! use blurbench_core::Plane;
//! use blurbench_ops::filter::{box_blur, box_blur_naive};
//!
//! let src = Plane::from_data(4, 4, (0..16).map(|v| v * 16).collect()).unwrap();
//! let fast = box_blur(&src, 1).unwrap();
//! let slow = box_blur_naive(&src, 1).unwrap();
//! for (a, b) in fast.as_slice().iter().zip(slow.as_slice()) {
//!     assert!(a.abs_diff(*b) <= 1);
//! }
//! ```

use blurbench_core::{BlurParams, Plane};
#[allow(unused_imports)]
use tracing::{debug, trace};

use crate::engine::BlurEngine;
use crate::window::{rounded_mean, AxisWindow, LineKernel};
use crate::{OpsError, OpsResult};

/// Separable sliding-window box blur.
///
/// Allocates the intermediate and output planes; see [`BlurEngine`] to reuse
/// buffers across runs.
///
/// # Example
///
/// ```rust
/// use blurbench_core::Plane;
/// use blurbench_ops::filter::box_blur;
///
/// let src = Plane::filled(16, 16, 90).unwrap();
/// let out = box_blur(&src, 3).unwrap();
/// assert!(out.as_slice().iter().all(|&v| v == 90));
/// ```
pub fn box_blur(src: &Plane, radius: usize) -> OpsResult<Plane> {
    trace!(width = src.width(), height = src.height(), radius, "box_blur");
    let params = BlurParams::for_plane(src, radius)?;
    BlurEngine::new(params, LineKernel::Box)?.apply(src)
}

/// Direct O(R²) box blur, the reference for [`box_blur`].
///
/// Every output is the rounded mean of the (2R+1)×(2R+1) neighbourhood with
/// edge replication, or of the whole row/column extent along an axis where
/// the radius reaches the plane size.
pub fn box_blur_naive(src: &Plane, radius: usize) -> OpsResult<Plane> {
    trace!(width = src.width(), height = src.height(), radius, "box_blur_naive");
    BlurParams::for_plane(src, radius)?;
    convolve_direct(src, radius, LineKernel::Box)
}

/// Direct 2-D convolution with the outer product of two line kernels.
pub(crate) fn convolve_direct(src: &Plane, radius: usize, kernel: LineKernel) -> OpsResult<Plane> {
    let (width, height) = src.dimensions();
    let data = src.as_slice();
    let wx = AxisWindow::new(width, radius);
    let wy = AxisWindow::new(height, radius);
    let total = wx.total_weight(kernel) * wy.total_weight(kernel);

    let mut dst = vec![0u8; data.len()];
    for y in 0..height {
        for x in 0..width {
            let mut sum = 0u64;
            wy.for_each_tap(y, kernel, |sy, ky| {
                let row = &data[sy * width..(sy + 1) * width];
                wx.for_each_tap(x, kernel, |sx, kx| {
                    sum += ky * kx * row[sx] as u64;
                });
            });
            dst[y * width + x] = rounded_mean(sum, total);
        }
    }

    Ok(Plane::from_data(width, height, dst)?)
}

/// Horizontal pass: blurs every row of `src` into `dst`.
///
/// # Errors
///
/// [`OpsError::SizeMismatch`] if the planes differ in shape;
/// [`OpsError::Config`] if the radius is too wide for the running sum.
pub fn horizontal_pass(
    src: &Plane,
    dst: &mut Plane,
    radius: usize,
    kernel: LineKernel,
) -> OpsResult<()> {
    check_pass(src, dst, radius)?;
    let width = src.width();
    let out = dst.as_mut_slice();

    for (y, row) in src.as_slice().chunks_exact(width).enumerate() {
        let dst_row = &mut out[y * width..(y + 1) * width];
        kernel.apply(width, radius, |i| row[i], |i, v| dst_row[i] = v);
    }
    Ok(())
}

/// Vertical pass: blurs every column of `src` into `dst`.
///
/// # Errors
///
/// [`OpsError::SizeMismatch`] if the planes differ in shape;
/// [`OpsError::Config`] if the radius is too wide for the running sum.
pub fn vertical_pass(
    src: &Plane,
    dst: &mut Plane,
    radius: usize,
    kernel: LineKernel,
) -> OpsResult<()> {
    check_pass(src, dst, radius)?;
    let (width, height) = src.dimensions();
    let data = src.as_slice();
    let out = dst.as_mut_slice();

    for x in 0..width {
        kernel.apply(
            height,
            radius,
            |i| data[i * width + x],
            |i, v| out[i * width + x] = v,
        );
    }
    Ok(())
}

/// Shape match plus the accumulator bound of [`BlurParams::new`].
fn check_pass(src: &Plane, dst: &Plane, radius: usize) -> OpsResult<()> {
    if !src.same_dimensions(dst) {
        return Err(OpsError::SizeMismatch(format!(
            "source is {}x{}, destination is {}x{}",
            src.width(),
            src.height(),
            dst.width(),
            dst.height()
        )));
    }
    BlurParams::for_plane(src, radius)?;
    Ok(())
}
