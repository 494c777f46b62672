//! Error types for board construction and configuration.

use thiserror::Error;

/// Errors raised when a board, scheduler or config is built from bad parameters.
///
/// Lookups that fall outside the grid are not errors; they return `None`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LifeError {
    /// Rows or columns was zero.
    #[error("grid dimensions must be positive, got {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },

    /// Cell pixel size was zero, negative or not finite.
    #[error("cell pixel size must be a positive finite number, got {0}")]
    InvalidCellSize(f32),

    /// Live probability outside `[0, 1]`.
    #[error("live probability must be within [0, 1], got {0}")]
    InvalidProbability(f64),

    /// Speed scale outside `[0, 1]`.
    #[error("speed scale must be within [0, 1], got {0}")]
    InvalidSpeedScale(f32),
}

pub type Result<T> = std::result::Result<T, LifeError>;
