//! Factor pushing automaton.
//!
//! A ring of integers where, at every time step, each cell gives away its
//! greatest prime factor and receives the greatest prime factor of its left
//! neighbour:
//!
//! ```text
//! x'[i] = x[i] - gpf(x[i]) + gpf(x[(i - 1) mod n])
//! ```
//!
//! Row 0 is an arithmetic sequence. The full run is returned as a
//! [`GridState`] (rows are time steps) with tight value bounds for heatmap
//! rendering.
//!
//! # Example
//!
//! ```
//! use unshape_factor_push::{FactorPush, SimulationParams, ViewSettings};
//!
//! let engine = FactorPush::new();
//! let params = SimulationParams::default().with_count(8).with_max_rows(16);
//! let grid = engine.generate(&params).unwrap();
//!
//! assert_eq!(grid.height(), 16);
//! assert_eq!(grid.width(), 8);
//!
//! // Prime factors only move around the ring, so the row sum is conserved.
//! let sums = grid.row_sums();
//! assert!(sums.iter().all(|&s| s == sums[0]));
//!
//! // Cell labels for a viewer
//! let view = ViewSettings::default();
//! let label = view.label(grid.get(0, 3).unwrap(), engine.cache());
//! assert_eq!(label, "2²");
//! ```

mod engine;
mod error;
mod grid;
mod params;
mod view;

pub use engine::{FactorPush, generate};
pub use error::SimError;
pub use grid::{GridState, row_sum};
pub use params::SimulationParams;
pub use view::{CellInfo, ViewSettings};

// Re-export prime queries for viewers
pub use unshape_primes::{PrimeCache, factorize, gpf, is_prime};

// ============================================================================
// Invariant tests - mathematical properties that must hold
// ============================================================================

#[cfg(all(test, feature = "invariant-tests"))]
mod invariant_tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_row_sum_conserved() {
        for start in -20..40 {
            for step in -3..=5 {
                let grid = generate(&SimulationParams::new(9, start, step, 25)).unwrap();
                let first = grid.row_sums()[0];
                for (t, sum) in grid.row_sums().into_iter().enumerate() {
                    assert_eq!(sum, first, "sum changed at row {t} (start {start}, step {step})");
                }
            }
        }
    }

    #[test]
    fn test_constant_row_is_fixed_point() {
        // Every cell trades an identical factor with its neighbour.
        for v in [-5, 0, 1, 2, 12, 97, 1000] {
            let grid = generate(&SimulationParams::new(6, v, 0, 10)).unwrap();
            for row in grid.rows() {
                assert!(row.iter().all(|&c| c == v), "constant row {v} changed");
            }
        }
    }

    #[test]
    fn test_rows_follow_transition() {
        let engine = FactorPush::new();
        let grid = engine.generate(&SimulationParams::default()).unwrap();
        for pair in grid.rows().windows(2) {
            let n = pair[0].len();
            for i in 0..n {
                let prev = &pair[0];
                let expected = prev[i] - gpf(prev[i]) + gpf(prev[(i + n - 1) % n]);
                assert_eq!(pair[1][i], expected);
            }
        }
    }

    proptest! {
        /// Shape and bounds hold for any small run.
        #[test]
        fn prop_shape_and_bounds(
            count in 1usize..24,
            start in -1_000i64..1_000_000,
            step in -1_000i64..1_000,
            max_rows in 0usize..40,
        ) {
            let grid = generate(&SimulationParams::new(count, start, step, max_rows)).unwrap();
            prop_assert_eq!(grid.height(), max_rows.max(1));
            for row in grid.rows() {
                prop_assert_eq!(row.len(), count);
                for &cell in row {
                    prop_assert!(grid.min_val() <= cell && cell <= grid.max_val());
                }
            }
            let cells: Vec<i64> = grid.rows().iter().flatten().copied().collect();
            prop_assert!(cells.contains(&grid.min_val()));
            prop_assert!(cells.contains(&grid.max_val()));
        }

        /// The invariant sum equals the sum of row 0.
        #[test]
        fn prop_invariant_sum(count in 1usize..16, start in -500i64..100_000, step in -50i64..50) {
            let grid = generate(&SimulationParams::new(count, start, step, 20)).unwrap();
            prop_assert_eq!(grid.invariant_sum(), row_sum(&grid.rows()[0]));
        }

        /// Cached and uncached engines agree.
        #[test]
        fn prop_cache_transparent(count in 1usize..12, start in 1i64..50_000, step in 0i64..100) {
            let params = SimulationParams::new(count, start, step, 15);
            let cached = FactorPush::new();
            let first = cached.generate(&params).unwrap();
            prop_assert_eq!(&first, &cached.generate(&params).unwrap());
            prop_assert_eq!(&first, &FactorPush::uncached().generate(&params).unwrap());
        }
    }
}
