//! # blurbench-core
//!
//! Core types shared by the blurbench crates.
//!
//! - [`Plane`] - Owned single-channel 8-bit sample grid (row-major)
//! - [`BlurParams`] - Validated width/height/radius configuration
//! - [`Error`] - Configuration and shape errors
//!
//! ## Crate Structure
//!
//! ```text
//! blurbench-core (this crate)
//!    ^
//!    |
//!    +-- blurbench-ops (blur engine)
//!    +-- blurbench-cli (benchmark harness)
//!    +-- blurbench-bench, blurbench-tests
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod params;
pub mod plane;

pub use error::{Error, Result};
pub use params::{BlurParams, MAX_SAMPLE};
pub use plane::Plane;

/// Prelude module for convenient imports.
///
/// ```
/// use blurbench_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::params::BlurParams;
    pub use crate::plane::Plane;
}
