//! Simulation error types.

use thiserror::Error;

/// Errors that can occur while generating a factor pushing grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    /// The row has no cells, so there are no bounds to report.
    #[error("row must contain at least one cell")]
    EmptyRow,

    /// A cell value left the `i64` range.
    #[error("integer overflow at row {row}, cell {index}")]
    Overflow {
        /// Row (time step) being produced.
        row: usize,
        /// Cell index within the row.
        index: usize,
    },

    /// The run was stopped by its cancellation check.
    #[error("cancelled after {completed_rows} rows")]
    Cancelled {
        /// Rows fully produced before stopping.
        completed_rows: usize,
    },
}
