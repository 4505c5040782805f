use thiserror::Error;

/// Errors surfaced by the engine.
///
/// Rule parsing and strict-index grid access are the only fallible
/// operations; a failed call never modifies the grid it was given.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Rule text did not match `B<digits>/S<digits>[M|V]`.
    #[error("invalid rule: {0:?}")]
    InvalidRule(String),

    /// Direct-index access outside `[0, height) x [0, width)`.
    ///
    /// Only neighbor lookups wrap; edits and reads take real indices.
    #[error("cell ({row}, {col}) is outside the {width}x{height} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        width: usize,
        height: usize,
    },

    /// Rows passed to [`Grid::from_rows`](crate::Grid::from_rows) must all
    /// have the same width.
    #[error("row {row} has {got} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        got: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
