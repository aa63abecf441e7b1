use grid_util::point::Point;
use thiserror::Error;

/// Reasons a [Grid](crate::Grid) cannot be built from map rows.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("Start position is out of bounds, provided coordinates were: {0}")]
    StartOutOfBounds(Point),

    #[error("Goal position is out of bounds, provided coordinates were: {0}")]
    GoalOutOfBounds(Point),

    #[error("Start position is blocked, provided coordinates were: {0}")]
    StartBlocked(Point),

    #[error("Goal position is blocked, provided coordinates were: {0}")]
    GoalBlocked(Point),

    /// Grids are square; every row must have as many characters as there are rows.
    #[error("Row {row} has {len} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("Grid dimension {dimension} exceeds the maximum of {max}")]
    TooLarge { dimension: usize, max: usize },
}

impl GridError {
    /// The coordinate that caused the error, if the error concerns one.
    pub fn position(&self) -> Option<Point> {
        match self {
            GridError::StartOutOfBounds(p)
            | GridError::GoalOutOfBounds(p)
            | GridError::StartBlocked(p)
            | GridError::GoalBlocked(p) => Some(*p),
            GridError::RaggedRow { .. } | GridError::TooLarge { .. } => None,
        }
    }
}
