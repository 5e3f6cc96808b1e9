// error.rs - Errors reported by the universe

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UniverseError {
    /// Width or height was zero, or the cell count does not fit in memory.
    #[error("invalid dimensions {width}x{height}: both must be positive and width*height must fit in usize")]
    InvalidDimensions { width: u32, height: u32 },

    /// A coordinate-taking call was given a cell outside the grid.
    #[error("cell (row {row}, col {col}) is outside the {width}x{height} grid")]
    OutOfBounds {
        row: u32,
        col: u32,
        width: u32,
        height: u32,
    },
}

pub type Result<T> = std::result::Result<T, UniverseError>;
