use thiserror::Error;

/// Rejected game configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("cell size must be positive, got {0}")]
    NonPositiveCellSize(i32),
    #[error("board {width}x{height} cannot hold a single cell of size {cell_size}")]
    BoardTooSmall {
        width: i32,
        height: i32,
        cell_size: i32,
    },
    #[error("initial snake length must be at least 1")]
    ZeroInitialLength,
    #[error("growth per apple must be at least 1")]
    ZeroGrowth,
    #[error("apple placement area is empty")]
    EmptyInterior,
    #[error("apple placement cell ({col}, {row}) lies outside the board")]
    InteriorOutsideBoard { col: i32, row: i32 },
}
