//! One-dimensional sliding windows.
//!
//! Every blur in this crate is built from a single line operation: given a
//! line of `len` samples (a row, or a column read with a stride) produce
//! `len` averaged samples. The 2-D filters are the same line operation run
//! over all rows and then over all columns.
//!
//! # Edge policy
//!
//! Window positions outside the line reuse the nearest edge sample (edge
//! replication) and the divisor stays constant. With radius `R` and a line
//! `[a b c d e]`, the window for `a` reads `a` R+1 times.
//!
//! When `R >= len` the window covers the whole line and each output is the
//! line mean. This is the only case where the divisor is not `2R+1`.
//!
//! # Rounding
//!
//! Outputs are `round(sum / count)` with ties rounded up, computed exactly
//! in integers by [`rounded_mean`].

/// Shape of the weights inside a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineKernel {
    /// Uniform weights: the box filter.
    #[default]
    Box,
    /// Triangular weights `R+1-|d|`: the stack blur.
    Stack,
}

impl LineKernel {
    /// Runs the sliding window over one line.
    ///
    /// `sample(i)` reads input position `i` (always `< len`) and
    /// `emit(i, v)` receives output position `i`. Each step costs O(1)
    /// regardless of `radius`.
    #[inline]
    pub(crate) fn apply<S, E>(self, len: usize, radius: usize, sample: S, emit: E)
    where
        S: Fn(usize) -> u8,
        E: FnMut(usize, u8),
    {
        if len == 0 {
            return;
        }
        if radius >= len {
            line_mean(len, sample, emit);
            return;
        }
        match self {
            LineKernel::Box => box_line(len, radius, sample, emit),
            LineKernel::Stack => stack_line(len, radius, sample, emit),
        }
    }
}

/// `round(sum / count)`, ties up.
///
/// ```rust
/// use blurbench_ops::window::rounded_mean;
///
/// assert_eq!(rounded_mean(40, 3), 13);
/// assert_eq!(rounded_mean(140, 3), 47);
/// assert_eq!(rounded_mean(5, 2), 3);
/// ```
#[inline]
pub fn rounded_mean(sum: u64, count: u64) -> u8 {
    debug_assert!(count > 0);
    ((2 * sum + count) / (2 * count)) as u8
}

fn line_mean<S, E>(len: usize, sample: S, mut emit: E)
where
    S: Fn(usize) -> u8,
    E: FnMut(usize, u8),
{
    let sum: u64 = (0..len).map(|i| sample(i) as u64).sum();
    let mean = rounded_mean(sum, len as u64);
    for i in 0..len {
        emit(i, mean);
    }
}

fn box_line<S, E>(len: usize, radius: usize, sample: S, mut emit: E)
where
    S: Fn(usize) -> u8,
    E: FnMut(usize, u8),
{
    let last = len - 1;
    let window = (2 * radius + 1) as u64;

    // Positions -R..=0 all read sample 0.
    let first = sample(0) as u32;
    let mut sum = first * (radius as u32 + 1);
    for j in 1..=radius {
        sum += sample(j) as u32;
    }
    emit(0, rounded_mean(sum as u64, window));

    for x in 1..len {
        let leaving = x.saturating_sub(radius + 1);
        let entering = (x + radius).min(last);
        sum = sum + sample(entering) as u32 - sample(leaving) as u32;
        emit(x, rounded_mean(sum as u64, window));
    }
}

fn stack_line<S, E>(len: usize, radius: usize, sample: S, mut emit: E)
where
    S: Fn(usize) -> u8,
    E: FnMut(usize, u8),
{
    let last = len - 1;
    let at = |i: usize| sample(i.min(last)) as u64;
    let r = radius as u64;
    let total = (r + 1) * (r + 1);

    // sum: weighted window. outgoing: samples at offsets -R..=0, whose
    // weight drops on the next step. incoming: offsets 1..=R+1, whose
    // weight rises.
    let first = at(0);
    let mut sum = first * ((r + 1) * (r + 2) / 2);
    for k in 1..=radius {
        sum += (r + 1 - k as u64) * at(k);
    }
    let mut outgoing = first * (r + 1);
    let mut incoming: u64 = (1..=radius + 1).map(&at).sum();

    for x in 0..len {
        emit(x, rounded_mean(sum, total));
        if x == last {
            break;
        }
        sum = sum + incoming - outgoing;
        outgoing = outgoing + at(x + 1) - at(x.saturating_sub(radius));
        incoming = incoming + at(x + radius + 2) - at(x + 1);
    }
}

/// Window along one axis for direct (non-sliding) evaluation.
///
/// Mirrors the policy of [`LineKernel::apply`] tap by tap, so a direct 2-D
/// convolution built from two `AxisWindow`s is the reference for the
/// separable passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AxisWindow {
    /// `2R+1` taps, positions clamped to `0..=last`.
    Clamped { radius: usize, last: usize },
    /// Every position of the line, uniform weight.
    Full { len: usize },
}

impl AxisWindow {
    pub(crate) fn new(len: usize, radius: usize) -> Self {
        if radius < len {
            AxisWindow::Clamped { radius, last: len - 1 }
        } else {
            AxisWindow::Full { len }
        }
    }

    /// Sum of all tap weights.
    pub(crate) fn total_weight(&self, kernel: LineKernel) -> u64 {
        match (*self, kernel) {
            (AxisWindow::Full { len }, _) => len as u64,
            (AxisWindow::Clamped { radius, .. }, LineKernel::Box) => 2 * radius as u64 + 1,
            (AxisWindow::Clamped { radius, .. }, LineKernel::Stack) => {
                (radius as u64 + 1) * (radius as u64 + 1)
            }
        }
    }

    /// Calls `f(position, weight)` for every tap centred on `center`.
    pub(crate) fn for_each_tap(&self, center: usize, kernel: LineKernel, mut f: impl FnMut(usize, u64)) {
        match *self {
            AxisWindow::Full { len } => (0..len).for_each(|i| f(i, 1)),
            AxisWindow::Clamped { radius, last } => {
                for d in 0..=2 * radius {
                    let pos = (center + d).saturating_sub(radius).min(last);
                    let weight = match kernel {
                        LineKernel::Box => 1,
                        LineKernel::Stack => (radius + 1 - d.abs_diff(radius)) as u64,
                    };
                    f(pos, weight);
                }
            }
        }
    }
}
