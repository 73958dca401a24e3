//! Sign assignment and fast-sweeping completion.

#![allow(clippy::module_name_repetitions)]

use sdf_types::GridSpec;

/// Termination controls for the sweeping completion.
///
/// Sweeping runs full eight-direction passes until either `max_passes`
/// passes have run or the largest per-node change in a pass drops to
/// `tolerance` or below.
#[derive(Debug, Clone, Copy)]
pub struct SweepParams {
    /// Upper bound on the number of eight-direction passes.
    pub max_passes: usize,
    /// Convergence threshold on the maximum per-node change of a pass.
    pub tolerance: f64,
}

impl Default for SweepParams {
    fn default() -> Self {
        Self {
            max_passes: 2,
            tolerance: 1e-9,
        }
    }
}

/// The eight monotonic sweep orderings, as ascending flags per axis.
/// Opposite directions are paired so information propagates both ways
/// early in a pass.
const SWEEP_ORDERS: [(bool, bool, bool); 8] = [
    (true, true, true),
    (false, false, false),
    (true, true, false),
    (false, false, true),
    (true, false, true),
    (false, true, false),
    (true, false, false),
    (false, true, true),
];

/// Index of the already-visited axis neighbor for the travel direction.
const fn prev(idx: usize, ascending: bool, n: usize) -> Option<usize> {
    if ascending {
        if idx > 0 {
            Some(idx - 1)
        } else {
            None
        }
    } else if idx + 1 < n {
        Some(idx + 1)
    } else {
        None
    }
}

/// Per-node inside/outside signs from crossing counts: −1 where the running
/// parity along the i line is odd, +1 elsewhere.
pub(crate) fn signs_from_crossings(crossings: &[u32], spec: &GridSpec) -> Vec<i8> {
    let mut signs = vec![1_i8; crossings.len()];

    for k in 0..spec.nk {
        for j in 0..spec.nj {
            let mut total = 0_u32;
            for i in 0..spec.ni {
                let idx = spec.node_index(i, j, k);
                total += crossings[idx];
                if total % 2 == 1 {
                    signs[idx] = -1;
                }
            }
        }
    }

    signs
}

/// Propagate distance magnitudes outward from the narrow band.
///
/// Each pass visits every node in all eight monotonic `(±i, ±j, ±k)`
/// orderings; at each node the candidate `neighbor + dx` is taken from the
/// already-visited neighbor along each axis and the minimum kept. Values
/// only ever decrease, so nodes holding exact band distances are never
/// disturbed. Returns the number of passes run.
pub(crate) fn sweep_completion(phi: &mut [f64], spec: &GridSpec, params: &SweepParams) -> usize {
    let (ni, nj, nk) = (spec.ni, spec.nj, spec.nk);
    let dx = spec.dx;
    let mut passes = 0;

    for _ in 0..params.max_passes {
        let mut max_change = 0.0_f64;

        for &(asc_i, asc_j, asc_k) in &SWEEP_ORDERS {
            for sk in 0..nk {
                let k = if asc_k { sk } else { nk - 1 - sk };
                for sj in 0..nj {
                    let j = if asc_j { sj } else { nj - 1 - sj };
                    for si in 0..ni {
                        let i = if asc_i { si } else { ni - 1 - si };
                        let idx = spec.node_index(i, j, k);

                        let mut best = phi[idx];
                        if let Some(p) = prev(i, asc_i, ni) {
                            best = best.min(phi[spec.node_index(p, j, k)] + dx);
                        }
                        if let Some(p) = prev(j, asc_j, nj) {
                            best = best.min(phi[spec.node_index(i, p, k)] + dx);
                        }
                        if let Some(p) = prev(k, asc_k, nk) {
                            best = best.min(phi[spec.node_index(i, j, p)] + dx);
                        }

                        let change = phi[idx] - best;
                        if change > 0.0 {
                            phi[idx] = best;
                            max_change = max_change.max(change);
                        }
                    }
                }
            }
        }

        passes += 1;
        if max_change <= params.tolerance {
            break;
        }
    }

    passes
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use sdf_types::Point3;

    fn line_spec(ni: usize) -> GridSpec {
        let Ok(spec) = GridSpec::new(Point3::origin(), 1.0, ni, 1, 1) else {
            unreachable!("valid spec")
        };
        spec
    }

    #[test]
    fn parity_signs_flip_at_crossings() {
        let spec = line_spec(6);
        // Crossings between nodes 1|2 and 4|5: nodes 2..=4 are inside.
        let mut crossings = vec![0_u32; 6];
        crossings[2] = 1;
        crossings[5] = 1;

        let signs = signs_from_crossings(&crossings, &spec);
        assert_eq!(signs, vec![1, 1, -1, -1, -1, 1]);
    }

    #[test]
    fn double_crossing_cancels() {
        let spec = line_spec(4);
        let mut crossings = vec![0_u32; 4];
        crossings[1] = 2;

        let signs = signs_from_crossings(&crossings, &spec);
        assert_eq!(signs, vec![1, 1, 1, 1]);
    }

    #[test]
    fn completion_fills_from_a_seed() {
        let spec = line_spec(5);
        let sentinel = 100.0;
        let mut phi = vec![sentinel; 5];
        phi[2] = 0.5;

        let passes = sweep_completion(&mut phi, &spec, &SweepParams::default());
        assert!(passes >= 1);
        assert_relative_eq!(phi[0], 2.5, epsilon = 1e-12);
        assert_relative_eq!(phi[1], 1.5, epsilon = 1e-12);
        assert_relative_eq!(phi[2], 0.5, epsilon = 1e-12);
        assert_relative_eq!(phi[3], 1.5, epsilon = 1e-12);
        assert_relative_eq!(phi[4], 2.5, epsilon = 1e-12);
    }

    #[test]
    fn seed_values_never_increase() {
        let spec = line_spec(3);
        let mut phi = vec![10.0, 0.25, 10.0];
        sweep_completion(&mut phi, &spec, &SweepParams::default());
        assert_relative_eq!(phi[1], 0.25, epsilon = 1e-12);
        assert_relative_eq!(phi[0], 1.25, epsilon = 1e-12);
    }

    #[test]
    fn single_node_grid_completes() {
        let spec = line_spec(1);
        let mut phi = vec![3.0];
        let passes = sweep_completion(&mut phi, &spec, &SweepParams::default());
        assert!(passes >= 1);
        assert_relative_eq!(phi[0], 3.0, epsilon = 1e-12);
    }
}
