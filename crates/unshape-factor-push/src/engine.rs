//! The factor pushing transition and grid generation.

use crate::{GridState, SimError, SimulationParams};
use std::sync::Arc;
use unshape_primes::PrimeCache;

/// Index of the left neighbour of cell `i` on a ring of `len` cells.
///
/// Cell 0 wraps around to the last cell.
#[inline]
pub(crate) fn left_neighbor(i: usize, len: usize) -> usize {
    debug_assert!(len > 0, "ring must have at least one cell");
    (i + len - 1) % len
}

/// Factor pushing automaton.
///
/// Every step, each cell pushes its own greatest prime factor out and takes
/// in the greatest prime factor of its left neighbour:
///
/// ```text
/// x'[i] = x[i] - gpf(x[i]) + gpf(x[i - 1])
/// ```
///
/// with indices taken around a ring. All cells update simultaneously from
/// the previous row.
///
/// The engine owns a [`PrimeCache`]; share one between engines with
/// [`with_cache`](Self::with_cache) to reuse factor lookups across runs.
///
/// ```
/// use unshape_factor_push::{FactorPush, SimulationParams};
///
/// let engine = FactorPush::new();
/// let grid = engine.generate(&SimulationParams::new(4, 10, 1, 2)).unwrap();
/// assert_eq!(grid.row(1), Some(&[18, 5, 20, 3][..]));
/// ```
#[derive(Debug, Clone)]
pub struct FactorPush {
    cache: Arc<PrimeCache>,
}

impl FactorPush {
    /// Creates an engine with its own empty cache.
    pub fn new() -> Self {
        Self::with_cache(Arc::new(PrimeCache::new()))
    }

    /// Creates an engine that uses `cache` for prime lookups.
    pub fn with_cache(cache: Arc<PrimeCache>) -> Self {
        Self { cache }
    }

    /// Creates an engine that recomputes every prime lookup.
    pub fn uncached() -> Self {
        Self::with_cache(Arc::new(PrimeCache::disabled()))
    }

    /// Returns the engine's cache.
    pub fn cache(&self) -> &Arc<PrimeCache> {
        &self.cache
    }

    /// Greatest prime factor of `n` through the engine's cache.
    pub fn gpf(&self, n: i64) -> i64 {
        self.cache.gpf(n)
    }

    /// Primality of `n` through the engine's cache.
    pub fn is_prime(&self, n: i64) -> bool {
        self.cache.is_prime(n)
    }

    /// Formatted factorization of `n` through the engine's cache.
    pub fn factorize(&self, n: i64) -> String {
        self.cache.factorize(n)
    }

    /// Builds row 0: `start_value + i * step` for each cell `i`.
    pub fn initial_row(params: &SimulationParams) -> Result<Vec<i64>, SimError> {
        if params.count == 0 {
            return Err(SimError::EmptyRow);
        }
        (0..params.count)
            .map(|i| {
                i64::try_from(i)
                    .ok()
                    .and_then(|i| i.checked_mul(params.step))
                    .and_then(|offset| params.start_value.checked_add(offset))
                    .ok_or(SimError::Overflow { row: 0, index: i })
            })
            .collect()
    }

    /// Applies one transition to `prev`.
    ///
    /// Overflow is reported against row 1, the row this step would produce
    /// from a row 0.
    pub fn step_row(&self, prev: &[i64]) -> Result<Vec<i64>, SimError> {
        if prev.is_empty() {
            return Err(SimError::EmptyRow);
        }
        self.transition(prev, 1)
    }

    fn transition(&self, prev: &[i64], row: usize) -> Result<Vec<i64>, SimError> {
        let len = prev.len();
        let mut next = Vec::with_capacity(len);

        for (i, &current) in prev.iter().enumerate() {
            let neighbor = prev[left_neighbor(i, len)];
            // Only the final value has to fit; `i64::MIN - 1` is a valid step.
            let value = current as i128 - self.cache.gpf(current) as i128
                + self.cache.gpf(neighbor) as i128;
            let value =
                i64::try_from(value).map_err(|_| SimError::Overflow { row, index: i })?;
            next.push(value);
        }

        Ok(next)
    }

    /// Generates the full grid for `params`.
    ///
    /// Produces `max(max_rows, 1)` rows of `count` cells. Fails with
    /// [`SimError::EmptyRow`] when `count` is zero and with
    /// [`SimError::Overflow`] when a cell leaves the `i64` range.
    pub fn generate(&self, params: &SimulationParams) -> Result<GridState, SimError> {
        self.generate_with(params, |_| true)
    }

    /// Generates the grid, checking `keep_going` before each new row.
    ///
    /// `keep_going` receives the number of rows completed so far. Returning
    /// `false` stops the run with [`SimError::Cancelled`].
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(count = params.count, max_rows = params.max_rows)
    )]
    pub fn generate_with(
        &self,
        params: &SimulationParams,
        mut keep_going: impl FnMut(usize) -> bool,
    ) -> Result<GridState, SimError> {
        let first = Self::initial_row(params).inspect_err(|err| {
            tracing::warn!(%err, "initial row rejected");
        })?;

        let mut min_val = first.iter().copied().min().unwrap_or(params.start_value);
        let mut max_val = first.iter().copied().max().unwrap_or(params.start_value);

        let total = params.row_count();
        // Huge row counts are allowed when the caller cancels early.
        let mut rows = Vec::with_capacity(total.min(1024));
        rows.push(first);

        while rows.len() < total {
            let completed_rows = rows.len();
            if !keep_going(completed_rows) {
                tracing::warn!(completed_rows, "generation cancelled");
                return Err(SimError::Cancelled { completed_rows });
            }

            let prev = &rows[completed_rows - 1];
            let next = self.transition(prev, completed_rows).inspect_err(|err| {
                tracing::warn!(%err, "transition overflowed");
            })?;

            for &value in &next {
                min_val = min_val.min(value);
                max_val = max_val.max(value);
            }
            rows.push(next);
        }

        let stats = self.cache.stats();
        tracing::debug!(
            rows = rows.len(),
            min_val,
            max_val,
            cache_hits = stats.hits,
            cache_misses = stats.misses,
            "grid generated"
        );

        Ok(GridState::new(rows, min_val, max_val))
    }
}

impl Default for FactorPush {
    fn default() -> Self {
        Self::new()
    }
}

/// Generates the grid for `params` with a fresh engine.
///
/// ```
/// use unshape_factor_push::{SimulationParams, generate};
///
/// let grid = generate(&SimulationParams::new(4, 10, 1, 1)).unwrap();
/// assert_eq!(grid.rows(), &[vec![10, 11, 12, 13]]);
/// assert_eq!((grid.min_val(), grid.max_val()), (10, 13));
/// ```
pub fn generate(params: &SimulationParams) -> Result<GridState, SimError> {
    FactorPush::new().generate(params)
}
