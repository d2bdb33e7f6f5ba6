//! Single-channel sample buffer.
//!
//! A [`Plane`] is the only image type in blurbench: one intensity channel of
//! `u8` samples stored **row-major**, top-to-bottom:
//!
//! ```text
//! index = y * width + x
//!
//! [s00 s01 s02 ... ]  <- row 0
//! [s10 s11 s12 ... ]  <- row 1
//! ```
//!
//! The buffer is owned and sized at construction. The blur engine reads a
//! source plane by reference and writes into separately owned destination
//! planes, so no pass ever reads and writes the same buffer.
//!
//! # Usage
//!
//! ```rust
//! use blurbench_core::Plane;
//!
//! let mut plane = Plane::new(4, 3).unwrap();
//! plane.set(1, 2, 200);
//! assert_eq!(plane.get(1, 2), 200);
//! assert_eq!(plane.row(2), &[0, 200, 0, 0]);
//! ```

use crate::{Error, Result};

/// Owned W×H grid of 8-bit samples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plane {
    data: Vec<u8>,
    width: usize,
    height: usize,
}

impl Plane {
    /// Creates a zero-filled plane.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] for a zero dimension or when
    /// `width * height` overflows.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        Self::filled(width, height, 0)
    }

    /// Creates a plane with every sample set to `value`.
    ///
    /// ```rust
    /// use blurbench_core::Plane;
    ///
    /// let p = Plane::filled(3, 2, 128).unwrap();
    /// assert!(p.as_slice().iter().all(|&v| v == 128));
    /// ```
    pub fn filled(width: usize, height: usize, value: u8) -> Result<Self> {
        let len = sample_count(width, height)?;
        Ok(Self {
            data: vec![value; len],
            width,
            height,
        })
    }

    /// Wraps existing row-major sample data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `data.len() != width * height`.
    pub fn from_data(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        let expected = sample_count(width, height)?;
        if data.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} samples, got {}", expected, data.len()),
            ));
        }
        Ok(Self { data, width, height })
    }

    /// Plane width in samples.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Plane height in samples.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Total number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false: planes have at least one sample.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Sample at column `x`, row `y`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        assert!(x < self.width && y < self.height, "({x}, {y}) out of bounds");
        self.data[y * self.width + x]
    }

    /// Writes the sample at column `x`, row `y`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: u8) {
        assert!(x < self.width && y < self.height, "({x}, {y}) out of bounds");
        self.data[y * self.width + x] = value;
    }

    /// Row `y` as a slice.
    #[inline]
    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.width;
        &self.data[start..start + self.width]
    }

    /// All samples in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Mutable access to all samples in row-major order.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consumes the plane and returns its samples.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// True if both planes have the same width and height.
    #[inline]
    pub fn same_dimensions(&self, other: &Plane) -> bool {
        self.dimensions() == other.dimensions()
    }

    /// Fails with [`Error::DimensionMismatch`] unless shapes match.
    pub fn ensure_same_dimensions(&self, other: &Plane) -> Result<()> {
        if self.same_dimensions(other) {
            Ok(())
        } else {
            Err(Error::dimension_mismatch(self.dimensions(), other.dimensions()))
        }
    }
}

/// Validated `width * height`.
pub(crate) fn sample_count(width: usize, height: usize) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(Error::invalid_dimensions(
            width,
            height,
            "width and height must be > 0",
        ));
    }
    width
        .checked_mul(height)
        .ok_or_else(|| Error::invalid_dimensions(width, height, "sample count overflows usize"))
}
