//! Generated grids and row aggregates.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Exact sum of a row.
///
/// Accumulates in `i128`, which cannot overflow for any row that fits in
/// memory.
///
/// ```
/// use unshape_factor_push::row_sum;
///
/// assert_eq!(row_sum(&[10, 11, 12, 13]), 46);
/// assert_eq!(row_sum(&[i64::MAX, i64::MAX]), 2 * i64::MAX as i128);
/// ```
pub fn row_sum(row: &[i64]) -> i128 {
    row.iter().map(|&v| v as i128).sum()
}

/// The result of one simulation run.
///
/// Rows are time steps and columns are cell indices. `min_val` and `max_val`
/// bound every cell and are each attained by at least one cell.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct GridState {
    rows: Vec<Vec<i64>>,
    min_val: i64,
    max_val: i64,
}

impl GridState {
    pub(crate) fn new(rows: Vec<Vec<i64>>, min_val: i64, max_val: i64) -> Self {
        Self {
            rows,
            min_val,
            max_val,
        }
    }

    /// Returns all rows, row 0 first.
    pub fn rows(&self) -> &[Vec<i64>] {
        &self.rows
    }

    /// Returns row `t`, if it exists.
    pub fn row(&self, t: usize) -> Option<&[i64]> {
        self.rows.get(t).map(Vec::as_slice)
    }

    /// Returns the value at row `t`, column `i`.
    pub fn get(&self, t: usize, i: usize) -> Option<i64> {
        self.rows.get(t)?.get(i).copied()
    }

    /// Returns the most recent row.
    pub fn last_row(&self) -> Option<&[i64]> {
        self.rows.last().map(Vec::as_slice)
    }

    /// Number of cells per row.
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Smallest value in the grid.
    pub fn min_val(&self) -> i64 {
        self.min_val
    }

    /// Largest value in the grid.
    pub fn max_val(&self) -> i64 {
        self.max_val
    }

    /// Sum of every row, in row order.
    pub fn row_sums(&self) -> Vec<i128> {
        self.rows.iter().map(|r| row_sum(r)).collect()
    }

    /// Sum of the last row.
    ///
    /// The transition rule moves prime factors around the ring without
    /// creating or destroying any, so this matches the sum of row 0.
    pub fn invariant_sum(&self) -> i128 {
        self.last_row().map_or(0, row_sum)
    }

    /// Position of `value` between the grid bounds, in `[0, 1]` for values
    /// inside them.
    ///
    /// A grid whose cells are all equal has a range of zero; it is treated as
    /// one so every cell maps to `0.0`.
    pub fn heat(&self, value: i64) -> f64 {
        let range = (self.max_val as i128 - self.min_val as i128).max(1);
        (value as i128 - self.min_val as i128) as f64 / range as f64
    }
}
