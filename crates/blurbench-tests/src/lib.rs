//! Integration tests for blurbench crates.
//!
//! End-to-end checks of the blur properties across `blurbench-core` and
//! `blurbench-ops`: equivalence of the separable passes with the direct
//! convolution, flat fields, degenerate radii and determinism.

#[cfg(test)]
mod golden;

#[cfg(test)]
mod tests {
    use blurbench_core::{BlurParams, Plane};
    use blurbench_ops::filter::{box_blur, box_blur_naive, horizontal_pass, vertical_pass};
    use blurbench_ops::stack::{stack_blur, stack_blur_naive};
    use blurbench_ops::{Algorithm, BlurEngine, Execution, LineKernel};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_plane(width: usize, height: usize, seed: u64) -> Plane {
        let mut rng = StdRng::seed_from_u64(seed);
        let data = (0..width * height).map(|_| rng.gen_range(0..=u8::MAX)).collect();
        Plane::from_data(width, height, data).unwrap()
    }

    fn assert_within_one(a: &Plane, b: &Plane, context: &str) {
        assert_eq!(a.dimensions(), b.dimensions(), "{context}: shape");
        for (i, (x, y)) in a.as_slice().iter().zip(b.as_slice()).enumerate() {
            assert!(x.abs_diff(*y) <= 1, "{context}: sample {i}: {x} vs {y}");
        }
    }

    /// Separable output vs direct convolution over small grids.
    #[test]
    fn test_box_equivalence_square() {
        for seed in 0..4 {
            let src = random_plane(10, 10, seed);
            for radius in [0, 1, 3, 9] {
                let fast = box_blur(&src, radius).unwrap();
                let slow = box_blur_naive(&src, radius).unwrap();
                assert_within_one(&fast, &slow, &format!("seed {seed} r {radius}"));
            }
        }
    }

    #[test]
    fn test_box_equivalence_non_square() {
        let shapes = [(1, 1), (1, 12), (12, 1), (3, 17), (17, 3), (8, 5)];
        for (w, h) in shapes {
            let src = random_plane(w, h, (w * 31 + h) as u64);
            for radius in 0..=12 {
                let fast = box_blur(&src, radius).unwrap();
                let slow = box_blur_naive(&src, radius).unwrap();
                assert_within_one(&fast, &slow, &format!("{w}x{h} r {radius}"));
            }
        }
    }

    #[test]
    fn test_stack_equivalence() {
        for (w, h) in [(10, 10), (6, 13), (13, 2)] {
            let src = random_plane(w, h, 7);
            for radius in [0, 1, 2, 5, 12] {
                let fast = stack_blur(&src, radius).unwrap();
                let slow = stack_blur_naive(&src, radius).unwrap();
                assert_within_one(&fast, &slow, &format!("stack {w}x{h} r {radius}"));
            }
        }
    }

    #[test]
    fn test_radius_zero_identity() {
        let src = random_plane(23, 11, 3);
        for algo in Algorithm::ALL {
            let out = algo.apply(&src, 0, Execution::Serial).unwrap();
            assert_eq!(out, src, "{algo}");
        }
    }

    #[test]
    fn test_radius_zero_idempotent() {
        let src = random_plane(16, 9, 11);
        let once = box_blur(&src, 0).unwrap();
        let twice = box_blur(&once, 0).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_uniform_input() {
        for value in [0u8, 1, 128, 254, 255] {
            let src = Plane::filled(19, 7, value).unwrap();
            for radius in [0, 1, 4, 6, 18, 100] {
                for algo in Algorithm::ALL {
                    let out = algo.apply(&src, radius, Execution::Serial).unwrap();
                    assert!(
                        out.as_slice().iter().all(|&v| v == value),
                        "{algo} value {value} r {radius}"
                    );
                }
            }
        }
    }

    /// R >= line length: every output in the line is the rounded line mean.
    #[test]
    fn test_full_clamp_collapse_row() {
        let src = Plane::from_data(5, 1, vec![10, 20, 30, 40, 55]).unwrap();
        // 155 / 5 = 31
        for radius in [5, 6, 1000] {
            let out = box_blur(&src, radius).unwrap();
            assert_eq!(out.as_slice(), &[31; 5], "r {radius}");
        }
    }

    #[test]
    fn test_full_clamp_collapse_column() {
        let src = Plane::from_data(1, 4, vec![0, 0, 1, 2]).unwrap();
        // 3 / 4 = 0.75 -> 1
        let out = box_blur(&src, 4).unwrap();
        assert_eq!(out.as_slice(), &[1; 4]);
    }

    #[test]
    fn test_full_clamp_collapse_plane() {
        let src = random_plane(6, 4, 5);
        let out = box_blur(&src, 6).unwrap();
        // Each axis collapses to its mean, so the plane is flat.
        let first = out.as_slice()[0];
        assert!(out.as_slice().iter().all(|&v| v == first));
    }

    #[test]
    fn test_horizontal_pass_example() {
        let src = Plane::from_data(5, 1, vec![10, 20, 30, 40, 50]).unwrap();
        let mut dst = Plane::new(5, 1).unwrap();
        horizontal_pass(&src, &mut dst, 1, LineKernel::Box).unwrap();
        assert_eq!(dst.as_slice(), &[13, 20, 30, 40, 47]);
    }

    #[test]
    fn test_vertical_pass_example() {
        let src = Plane::from_data(1, 5, vec![10, 20, 30, 40, 50]).unwrap();
        let mut dst = Plane::new(1, 5).unwrap();
        vertical_pass(&src, &mut dst, 1, LineKernel::Box).unwrap();
        assert_eq!(dst.as_slice(), &[13, 20, 30, 40, 47]);
    }

    /// Passes composed by hand equal the engine.
    #[test]
    fn test_passes_compose_to_box_blur() {
        let src = random_plane(31, 17, 9);
        let mut mid = Plane::new(31, 17).unwrap();
        let mut out = Plane::new(31, 17).unwrap();
        horizontal_pass(&src, &mut mid, 4, LineKernel::Box).unwrap();
        vertical_pass(&mid, &mut out, 4, LineKernel::Box).unwrap();
        assert_eq!(out, box_blur(&src, 4).unwrap());
    }

    #[test]
    fn test_determinism() {
        let src = random_plane(64, 48, 1);
        let mut engine = BlurEngine::new(BlurParams::for_plane(&src, 7).unwrap(), LineKernel::Box).unwrap();
        let first = engine.apply(&src).unwrap();
        for _ in 0..3 {
            assert_eq!(engine.apply(&src).unwrap(), first);
            assert_eq!(box_blur(&src, 7).unwrap(), first);
        }
    }

    #[test]
    fn test_serial_matches_parallel() {
        for (w, h) in [(64, 48), (1, 33), (33, 1), (7, 200)] {
            let src = random_plane(w, h, 2);
            for radius in [0, 1, 5, 40] {
                for algo in [Algorithm::Box, Algorithm::Stack] {
                    let serial = algo.apply(&src, radius, Execution::Serial).unwrap();
                    let parallel = algo.apply(&src, radius, Execution::Parallel).unwrap();
                    assert_eq!(serial, parallel, "{algo} {w}x{h} r {radius}");
                }
            }
        }
    }

    /// Stack blur weights the centre more, so a spike keeps more energy.
    #[test]
    fn test_stack_sharper_than_box() {
        let mut src = Plane::new(9, 9).unwrap();
        src.set(4, 4, 255);
        let boxed = box_blur(&src, 2).unwrap();
        let stacked = stack_blur(&src, 2).unwrap();
        assert!(stacked.get(4, 4) > boxed.get(4, 4));
    }

    #[test]
    fn test_wide_window_rejected() {
        let width = BlurParams::MAX_WINDOW + 2;
        let radius = BlurParams::MAX_WINDOW / 2 + 1;
        assert!(BlurParams::new(width, 1, radius).is_err());
    }
}
