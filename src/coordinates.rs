//! Integer cell coordinates used as graph vertex labels.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A cell position in a maze, addressed by row and column.
///
/// Coordinates are plain values: they are `Copy`, hash stably and compare
/// row-major, so they can key both hash maps and ordered collections.
/// Negative and out-of-grid values are valid; the maze layer uses them for
/// boundary cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinates {
    row: i32,
    col: i32,
}

impl Coordinates {
    /// Creates coordinates for `(row, col)`.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Returns the row.
    pub const fn row(self) -> i32 {
        self.row
    }

    /// Returns the column.
    pub const fn col(self) -> i32 {
        self.col
    }

    /// Returns true if `other` is one step away horizontally or vertically.
    ///
    /// Diagonal cells and the cell itself are not adjacent.
    pub fn is_adjacent(self, other: Self) -> bool {
        let dr = (i64::from(self.row) - i64::from(other.row)).abs();
        let dc = (i64::from(self.col) - i64::from(other.col)).abs();
        dr + dc == 1
    }

    /// Returns the four orthogonal neighbours, in up/down/left/right order.
    pub fn orthogonal(self) -> [Self; 4] {
        [
            Self::new(self.row - 1, self.col),
            Self::new(self.row + 1, self.col),
            Self::new(self.row, self.col - 1),
            Self::new(self.row, self.col + 1),
        ]
    }
}

impl From<(i32, i32)> for Coordinates {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_adjacency_is_orthogonal_only() {
        let c = Coordinates::new(2, 3);
        assert!(c.is_adjacent(Coordinates::new(1, 3)));
        assert!(c.is_adjacent(Coordinates::new(2, 4)));
        assert!(!c.is_adjacent(Coordinates::new(3, 4)));
        assert!(!c.is_adjacent(c));
        assert!(!c.is_adjacent(Coordinates::new(2, 5)));
    }

    #[test]
    fn test_value_semantics() {
        let mut set = HashSet::new();
        set.insert(Coordinates::new(0, 1));
        set.insert(Coordinates::from((0, 1)));
        assert_eq!(set.len(), 1);
        assert!(Coordinates::new(0, 5) < Coordinates::new(1, 0));
    }

    #[test]
    fn test_display_and_serde() {
        let c = Coordinates::new(-1, 4);
        assert_eq!(c.to_string(), "(-1, 4)");

        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#"{"row":-1,"col":4}"#);
        let back: Coordinates = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn test_orthogonal_neighbours_are_adjacent() {
        let c = Coordinates::new(0, 0);
        for n in c.orthogonal() {
            assert!(c.is_adjacent(n), "{n} should be adjacent to {c}");
        }
    }
}
