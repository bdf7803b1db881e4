//! Errors raised by the maze layer and configuration loading.
//!
//! Graph operations themselves never fail with an error; they answer
//! `false` or an empty list instead.

use core::fmt;

use crate::Coordinates;

/// The error type for maze construction and wall edits.
#[derive(Debug)]
pub enum MazeError {
    /// A maze needs at least one row and one column.
    InvalidDimensions {
        /// Requested row count.
        rows: i32,
        /// Requested column count.
        cols: i32,
    },
    /// Walls only exist between orthogonally adjacent cells.
    NotAdjacent(Coordinates, Coordinates),
    /// The cell is not a vertex of the maze graph.
    UnknownCell(Coordinates),
    /// Entrances and exits must be boundary cells.
    NotBoundary(Coordinates),
    /// The configuration could not be parsed.
    Config(serde_json::Error),
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { rows, cols } => {
                write!(f, "invalid maze dimensions {rows}x{cols}")
            }
            Self::NotAdjacent(a, b) => write!(f, "cells {a} and {b} are not adjacent"),
            Self::UnknownCell(c) => write!(f, "cell {c} is not part of the maze"),
            Self::NotBoundary(c) => write!(f, "cell {c} is not a boundary cell"),
            Self::Config(_) => f.write_str("invalid maze configuration"),
        }
    }
}

impl std::error::Error for MazeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for MazeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err)
    }
}
