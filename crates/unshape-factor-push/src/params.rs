//! Simulation parameters.

use crate::{FactorPush, GridState, SimError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for one factor pushing run.
///
/// Row 0 is the arithmetic sequence `start_value, start_value + step, ...`
/// of length `count`; every later row is derived from the one before it.
/// Parameters are plain values: edit a copy and run again rather than
/// mutating a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SimulationParams {
    /// Number of cells per row.
    pub count: usize,
    /// Value of cell 0 in row 0.
    pub start_value: i64,
    /// Difference between neighbouring cells in row 0.
    pub step: i64,
    /// Number of rows (time steps) to produce, including row 0.
    pub max_rows: usize,
}

impl SimulationParams {
    /// Creates parameters from their four components.
    pub fn new(count: usize, start_value: i64, step: i64, max_rows: usize) -> Self {
        Self {
            count,
            start_value,
            step,
            max_rows,
        }
    }

    /// Sets the number of cells per row.
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Sets the first value of row 0.
    pub fn with_start_value(mut self, start_value: i64) -> Self {
        self.start_value = start_value;
        self
    }

    /// Sets the spacing of row 0.
    pub fn with_step(mut self, step: i64) -> Self {
        self.step = step;
        self
    }

    /// Sets the number of rows.
    pub fn with_max_rows(mut self, max_rows: usize) -> Self {
        self.max_rows = max_rows;
        self
    }

    /// Number of rows a run will produce. Row 0 always exists.
    pub fn row_count(&self) -> usize {
        self.max_rows.max(1)
    }

    /// Runs the simulation with a fresh cache.
    pub fn apply(&self) -> Result<GridState, SimError> {
        FactorPush::new().generate(self)
    }
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self::new(20, 1, 1, 30)
    }
}
