//! Golden hash tests.
//!
//! Outputs for a fixed analytic input are hashed with SHA-256 and compared
//! against reference digests, so any change to the edge policy, rounding
//! or pass order shows up as a hash mismatch.
//!
//! ```bash
//! cargo test --package blurbench-tests golden
//! ```

use sha2::{Digest, Sha256};

use blurbench_core::Plane;

const WIDTH: usize = 37;
const HEIGHT: usize = 23;

/// Deterministic 37x23 test plane: `(x² + 3xy + 11y) mod 256`.
fn golden_input() -> Plane {
    let data = (0..HEIGHT)
        .flat_map(|y| (0..WIDTH).map(move |x| ((x * x + 3 * x * y + 11 * y) % 256) as u8))
        .collect();
    Plane::from_data(WIDTH, HEIGHT, data).unwrap()
}

/// Hex SHA-256 of the raw row-major samples.
fn compute_hash(plane: &Plane) -> String {
    let mut hasher = Sha256::new();
    hasher.update(plane.as_slice());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod blur_tests {
    use super::*;
    use blurbench_ops::{Algorithm, Execution};

    const INPUT_HASH: &str = "a407d9ba50633d72f41b72525867d86b4f74be7c12f0c5231bc3d84a2efdf582";
    const BOX_R4: &str = "0241186995aab0eb279307d30a910bf6b7a3296d8759132e887410f118f24f66";
    const STACK_R4: &str = "159d3a153fbb64d684c51e5a108e61492d5c5b1fb0fc4d6018cbf61fb6f412cb";
    /// Radius 30: clamped along rows, whole-column mean along columns.
    const BOX_R30: &str = "09e8004c39145b5f1c2d06729d75b76eff5b80fcb943002cbdcb1700b69d045d";

    fn check(algo: Algorithm, radius: usize, expected: &str) {
        let src = golden_input();
        for execution in [Execution::Serial, Execution::Parallel] {
            let out = algo.apply(&src, radius, execution).unwrap();
            let hash = compute_hash(&out);
            println!("{algo} r{radius} {execution:?}: {hash}");
            assert_eq!(hash, expected, "{algo} r{radius} {execution:?}");
        }
    }

    #[test]
    fn test_golden_input() {
        assert_eq!(compute_hash(&golden_input()), INPUT_HASH);
    }

    #[test]
    fn test_golden_box_r4() {
        check(Algorithm::Box, 4, BOX_R4);
    }

    #[test]
    fn test_golden_stack_r4() {
        check(Algorithm::Stack, 4, STACK_R4);
    }

    #[test]
    fn test_golden_box_r30() {
        check(Algorithm::Box, 30, BOX_R30);
    }

    #[test]
    fn test_golden_hash_stable() {
        let src = golden_input();
        let a = compute_hash(&Algorithm::Naive.apply(&src, 4, Execution::Serial).unwrap());
        let b = compute_hash(&Algorithm::Naive.apply(&src, 4, Execution::Serial).unwrap());
        assert_eq!(a, b);
    }
}
