//! Blur configuration.
//!
//! [`BlurParams`] carries the width, height and radius of one blur run and
//! is validated once, up front, so that the passes themselves cannot fail.
//!
//! # Window length
//!
//! Along a line of `len` samples the averaging window holds `2R+1` samples
//! while `R < len`. Once the radius reaches the line length the window
//! covers the whole line and holds exactly `len` samples: every output on
//! that line is the line mean.
//!
//! ```rust
//! use blurbench_core::BlurParams;
//!
//! let p = BlurParams::new(1920, 1080, 32).unwrap();
//! assert_eq!(p.window_len(1920), 65);
//! assert_eq!(BlurParams::new(8, 8, 100).unwrap().window_len(8), 8);
//! ```
//!
//! # Accumulator sizing
//!
//! Running sums are `u32`. The widest window may hold at most
//! [`BlurParams::MAX_WINDOW`] samples of value [`MAX_SAMPLE`]; anything
//! wider is rejected here with [`Error::AccumulatorOverflow`].

use crate::plane::sample_count;
use crate::{Error, Plane, Result};

/// Largest sample value.
pub const MAX_SAMPLE: u8 = u8::MAX;

/// Validated blur configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlurParams {
    width: usize,
    height: usize,
    radius: usize,
}

impl BlurParams {
    /// Widest window whose full-intensity sum fits a `u32`.
    pub const MAX_WINDOW: usize = (u32::MAX / MAX_SAMPLE as u32) as usize;

    /// Validates and builds a configuration.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidDimensions`] for a zero dimension or an overflowing
    ///   sample count
    /// - [`Error::AccumulatorOverflow`] when the widest window is larger
    ///   than [`Self::MAX_WINDOW`]
    pub fn new(width: usize, height: usize, radius: usize) -> Result<Self> {
        sample_count(width, height)?;
        let params = Self { width, height, radius };
        let window = params.max_window_len().ok_or(Error::AccumulatorOverflow {
            window: usize::MAX,
            limit: Self::MAX_WINDOW,
        })?;
        if window > Self::MAX_WINDOW {
            return Err(Error::AccumulatorOverflow {
                window,
                limit: Self::MAX_WINDOW,
            });
        }
        Ok(params)
    }

    /// Configuration matching the shape of `plane`.
    pub fn for_plane(plane: &Plane, radius: usize) -> Result<Self> {
        Self::new(plane.width(), plane.height(), radius)
    }

    /// Width in samples.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in samples.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Blur radius.
    #[inline]
    pub fn radius(&self) -> usize {
        self.radius
    }

    /// `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Number of samples averaged along a line of `line_len` samples.
    #[inline]
    pub fn window_len(&self, line_len: usize) -> usize {
        if self.radius < line_len {
            2 * self.radius + 1
        } else {
            line_len
        }
    }

    /// Nominal per-sample weight `1 / (2R+1)` of a full window.
    pub fn multiplier(&self) -> f64 {
        1.0 / (2.0 * self.radius as f64 + 1.0)
    }

    /// True if the radius collapses some axis to a whole-line mean.
    pub fn is_degenerate(&self) -> bool {
        self.radius >= self.width || self.radius >= self.height
    }

    fn max_window_len(&self) -> Option<usize> {
        let axis = |len: usize| {
            if self.radius < len {
                self.radius.checked_mul(2)?.checked_add(1)
            } else {
                Some(len)
            }
        };
        Some(axis(self.width)?.max(axis(self.height)?))
    }
}
