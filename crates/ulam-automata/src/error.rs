//! Error types for rule construction and evaluation.

use thiserror::Error;

/// Errors that can occur while building or running an automaton.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AutomatonError {
    /// Radix below 2 has no finite digit expansion.
    #[error("invalid radix {radix}: must be at least 2")]
    InvalidRadix {
        /// The rejected radix.
        radix: u32,
    },

    /// Code does not identify a rule for the given radix and radius.
    #[error("code out of range for radix {radix}, radius {radius}")]
    InvalidCode {
        /// Number of cell states.
        radix: u32,
        /// Neighborhood radius.
        radius: u32,
    },

    /// Lookup index past the last neighborhood of the table.
    #[error("rule index {index} out of range (limit {limit})")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of distinct neighborhoods, `k^(2r+1)`.
        limit: usize,
    },

    /// Radix/radius combination implies a table too large to build.
    #[error("rule space too large for radix {radix}, radius {radius}")]
    ResourceExhausted {
        /// Number of cell states.
        radix: u32,
        /// Neighborhood radius.
        radius: u32,
    },

    /// A cell holds a value outside `0..radix`.
    #[error("cell value {value} out of range for radix {radix}")]
    InvalidCell {
        /// Offending cell value.
        value: u32,
        /// Number of cell states.
        radix: u32,
    },

    /// Row has no cells.
    #[error("row is empty")]
    EmptyRow,

    /// Output buffer does not match the input row.
    #[error("length mismatch: expected {expected} cells, got {got}")]
    LengthMismatch {
        /// Length of the input row.
        expected: usize,
        /// Length of the output buffer.
        got: usize,
    },

    /// Grid rows differ in width.
    #[error("ragged grid: row {row} has width {got}, expected {expected}")]
    RaggedGrid {
        /// Index of the first mismatched row.
        row: usize,
        /// Width of row 0.
        expected: usize,
        /// Width of the mismatched row.
        got: usize,
    },

    /// Grid dimensions exceed [`MAX_CELLS`](crate::MAX_CELLS).
    #[error("grid of {width}x{height} cells is too large")]
    GridTooLarge {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },

    /// Transform requires a square grid.
    #[error("grid is {width}x{height}, expected a square grid")]
    NotSquare {
        /// Grid width.
        width: usize,
        /// Grid height.
        height: usize,
    },

    /// Color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// Digit expansion does not fit the requested length.
    #[error("value needs {needed} digits, only {len} requested")]
    DigitOverflow {
        /// Digits required.
        needed: usize,
        /// Digits requested.
        len: usize,
    },
}

/// Result type for automaton operations.
pub type Result<T> = std::result::Result<T, AutomatonError>;
