//! Error types for blurbench-core.
//!
//! All failures here are configuration errors: they are raised while a
//! [`crate::Plane`] or [`crate::BlurParams`] is being built, never while a
//! blur pass is running.
//!
//! # Usage
//!
//! ```rust
//! use blurbench_core::{Error, Result};
//!
//! fn check(width: usize, height: usize) -> Result<()> {
//!     if width == 0 || height == 0 {
//!         return Err(Error::invalid_dimensions(width, height, "zero-sized plane"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check(0, 4).is_err());
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while configuring planes and blur parameters.
#[derive(Debug, Error)]
pub enum Error {
    /// Width or height is zero, or the sample count overflows `usize`.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
        /// Why the dimensions were rejected
        reason: String,
    },

    /// Two planes that must share a shape do not.
    #[error("dimension mismatch: {a_width}x{a_height} vs {b_width}x{b_height}")]
    DimensionMismatch {
        /// First plane width
        a_width: usize,
        /// First plane height
        a_height: usize,
        /// Second plane width
        b_width: usize,
        /// Second plane height
        b_height: usize,
    },

    /// The worst-case running sum of a window does not fit the accumulator.
    #[error("window of {window} samples can overflow the running sum (max {limit} samples)")]
    AccumulatorOverflow {
        /// Number of samples in the widest window
        window: usize,
        /// Largest window the accumulator supports
        limit: usize,
    },

    /// Algorithm name not recognised.
    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),
}

impl Error {
    /// Creates an [`Error::InvalidDimensions`].
    pub fn invalid_dimensions(width: usize, height: usize, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::DimensionMismatch`] from two `(width, height)` pairs.
    pub fn dimension_mismatch(a: (usize, usize), b: (usize, usize)) -> Self {
        Self::DimensionMismatch {
            a_width: a.0,
            a_height: a.1,
            b_width: b.0,
            b_height: b.1,
        }
    }
}
