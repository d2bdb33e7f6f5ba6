//! # blurbench-ops
//!
//! Box blur on single-channel 8-bit planes: a naive O(R²) reference and an
//! O(1)-per-sample separable sliding-window engine.
//!
//! # Modules
//!
//! - [`window`] - 1-D sliding windows, edge policy and rounding
//! - [`filter`] - Box blur passes and the naive reference
//! - [`stack`] - Stack blur (triangular weights) on the same passes
//! - [`engine`] - [`BlurEngine`] owning the intermediate buffer
//! - [`algorithm`] - [`Algorithm`] chooser used by the harness
//! - `parallel` - Rayon passes (feature `parallel`, on by default)
//!
//! # Edge policy
//!
//! Out-of-range window positions replicate the nearest edge sample and the
//! divisor is always `2R+1`. Once the radius reaches a line's length the
//! output along that line is the line mean.
//!
//! # Example
//!
//! ```rust
//! use blurbench_core::Plane;
//! use blurbench_ops::filter::box_blur;
//!
//! let src = Plane::from_data(5, 1, vec![10, 20, 30, 40, 50]).unwrap();
//! let out = box_blur(&src, 1).unwrap();
//! assert_eq!(out.as_slice(), &[13, 20, 30, 40, 47]);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod algorithm;
pub mod engine;
pub mod filter;
pub mod stack;
pub mod window;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use algorithm::Algorithm;
pub use engine::{BlurEngine, Execution};
pub use error::{OpsError, OpsResult};
pub use window::LineKernel;
