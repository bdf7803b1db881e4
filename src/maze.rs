//! A rectangular maze laid over any [`Graph`] backend.
//!
//! The grid holds `rows × cols` interior cells addressed from `(0, 0)`.
//! One ring of boundary cells surrounds it, at row `-1`, row `rows`,
//! column `-1` and column `cols`, without the four corners. Entrances and
//! exits are boundary cells.

use std::collections::BTreeSet;

use crate::error::MazeError;
use crate::graph::Graph;
use crate::macros::trace_event;
use crate::Coordinates;

/// A maze grid backed by a graph of cells.
#[derive(Debug, Clone)]
pub struct Maze<G> {
    rows: i32,
    cols: i32,
    graph: G,
    entrances: Vec<Coordinates>,
    exits: Vec<Coordinates>,
}

impl<G: Graph> Maze<G> {
    /// Creates a maze over `graph` without adding any cells.
    ///
    /// Call [`Maze::init_cells`] to populate the grid.
    ///
    /// # Errors
    /// Returns [`MazeError::InvalidDimensions`] unless both dimensions are
    /// positive.
    pub fn new(rows: i32, cols: i32, graph: G) -> Result<Self, MazeError> {
        if rows <= 0 || cols <= 0 {
            return Err(MazeError::InvalidDimensions { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            graph,
            entrances: Vec::new(),
            exits: Vec::new(),
        })
    }

    /// Adds every interior and boundary cell, and an edge between every
    /// pair of orthogonally adjacent cells.
    ///
    /// Interior edges carry `add_wall`; edges to boundary cells are always
    /// walled.
    pub fn init_cells(&mut self, add_wall: bool) {
        let (rows, cols) = (self.rows, self.cols);
        trace_event!(debug, rows, cols, add_wall, "maze: init_cells");

        let interior = (0..rows).flat_map(|r| (0..cols).map(move |c| Coordinates::new(r, c)));
        let boundary = self.boundary_cells();
        self.graph.add_vertices(interior);
        self.graph.add_vertices(boundary);

        for r in 0..rows {
            for c in 0..cols {
                let cell = Coordinates::new(r, c);
                if r + 1 < rows {
                    self.graph.add_edge(cell, Coordinates::new(r + 1, c), add_wall);
                }
                if c + 1 < cols {
                    self.graph.add_edge(cell, Coordinates::new(r, c + 1), add_wall);
                }
            }
        }

        for r in 0..rows {
            self.graph.add_edge(Coordinates::new(r, -1), Coordinates::new(r, 0), true);
            self.graph.add_edge(Coordinates::new(r, cols), Coordinates::new(r, cols - 1), true);
        }
        for c in 0..cols {
            self.graph.add_edge(Coordinates::new(-1, c), Coordinates::new(0, c), true);
            self.graph.add_edge(Coordinates::new(rows, c), Coordinates::new(rows - 1, c), true);
        }
    }

    /// Returns every boundary cell: top, bottom, left, then right side.
    pub fn boundary_cells(&self) -> Vec<Coordinates> {
        let (rows, cols) = (self.rows, self.cols);
        let top = (0..cols).map(|c| Coordinates::new(-1, c));
        let bottom = (0..cols).map(move |c| Coordinates::new(rows, c));
        let left = (0..rows).map(|r| Coordinates::new(r, -1));
        let right = (0..rows).map(move |r| Coordinates::new(r, cols));
        top.chain(bottom).chain(left).chain(right).collect()
    }

    /// Returns true if `cell` lies inside the grid.
    pub fn is_interior(&self, cell: Coordinates) -> bool {
        (0..self.rows).contains(&cell.row()) && (0..self.cols).contains(&cell.col())
    }

    /// Returns true if `cell` is on the boundary ring. Corners are excluded.
    pub fn is_boundary(&self, cell: Coordinates) -> bool {
        let (r, c) = (cell.row(), cell.col());
        let on_row_edge = (r == -1 || r == self.rows) && (0..self.cols).contains(&c);
        let on_col_edge = (c == -1 || c == self.cols) && (0..self.rows).contains(&r);
        on_row_edge || on_col_edge
    }

    /// Puts a wall between two adjacent cells.
    ///
    /// # Errors
    /// Returns [`MazeError::NotAdjacent`] or [`MazeError::UnknownCell`] if
    /// the pair cannot share a wall.
    pub fn add_wall(&mut self, a: Coordinates, b: Coordinates) -> Result<(), MazeError> {
        self.check_pair(a, b)?;
        self.graph.update_wall(a, b, true);
        Ok(())
    }

    /// Removes the wall between two adjacent cells.
    ///
    /// # Errors
    /// Same conditions as [`Maze::add_wall`].
    pub fn remove_wall(&mut self, a: Coordinates, b: Coordinates) -> Result<(), MazeError> {
        self.check_pair(a, b)?;
        self.graph.update_wall(a, b, false);
        Ok(())
    }

    /// Returns true if a wall separates `a` and `b`.
    pub fn has_wall(&self, a: Coordinates, b: Coordinates) -> bool {
        self.graph.get_wall_status(a, b)
    }

    /// Returns the cells `cell` shares an edge with.
    pub fn neighbours(&self, cell: Coordinates) -> Vec<Coordinates> {
        self.graph.neighbours(cell)
    }

    /// Registers a boundary cell as an entrance. Repeats are ignored.
    ///
    /// # Errors
    /// Returns [`MazeError::NotBoundary`] unless `cell` is a boundary cell
    /// present in the graph.
    pub fn add_entrance(&mut self, cell: Coordinates) -> Result<(), MazeError> {
        self.check_boundary(cell)?;
        if !self.entrances.contains(&cell) {
            self.entrances.push(cell);
        }
        Ok(())
    }

    /// Registers a boundary cell as an exit. Repeats are ignored.
    ///
    /// # Errors
    /// Same conditions as [`Maze::add_entrance`].
    pub fn add_exit(&mut self, cell: Coordinates) -> Result<(), MazeError> {
        self.check_boundary(cell)?;
        if !self.exits.contains(&cell) {
            self.exits.push(cell);
        }
        Ok(())
    }

    /// Returns every walled pair of adjacent cells once, smaller cell first,
    /// in sorted order.
    pub fn walls(&self) -> Vec<(Coordinates, Coordinates)> {
        let mut walls = BTreeSet::new();
        for v in self.graph.vertices() {
            for n in self.graph.neighbours(v) {
                if v < n && v.is_adjacent(n) && self.graph.get_wall_status(v, n) {
                    walls.insert((v, n));
                }
            }
        }
        walls.into_iter().collect()
    }

    /// Returns the entrances in registration order.
    pub fn entrances(&self) -> &[Coordinates] {
        &self.entrances
    }

    /// Returns the exits in registration order.
    pub fn exits(&self) -> &[Coordinates] {
        &self.exits
    }

    /// Returns the number of interior rows.
    pub fn row_num(&self) -> i32 {
        self.rows
    }

    /// Returns the number of interior columns.
    pub fn col_num(&self) -> i32 {
        self.cols
    }

    /// Returns the backing graph.
    pub fn graph(&self) -> &G {
        &self.graph
    }

    /// Returns the backing graph mutably.
    pub fn graph_mut(&mut self) -> &mut G {
        &mut self.graph
    }

    /// Consumes the maze and returns the backing graph.
    pub fn into_graph(self) -> G {
        self.graph
    }

    fn check_pair(&self, a: Coordinates, b: Coordinates) -> Result<(), MazeError> {
        if !a.is_adjacent(b) {
            return Err(MazeError::NotAdjacent(a, b));
        }
        for cell in [a, b] {
            if !self.graph.has_vertex(cell) {
                return Err(MazeError::UnknownCell(cell));
            }
        }
        Ok(())
    }

    fn check_boundary(&self, cell: Coordinates) -> Result<(), MazeError> {
        if self.is_boundary(cell) && self.graph.has_vertex(cell) {
            Ok(())
        } else {
            Err(MazeError::NotBoundary(cell))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::AdjMatGraph;

    #[test]
    fn test_boundary_excludes_corners() {
        let maze = Maze::new(2, 3, AdjMatGraph::new()).unwrap();
        assert!(maze.is_boundary(Coordinates::new(-1, 0)));
        assert!(maze.is_boundary(Coordinates::new(1, 3)));
        assert!(!maze.is_boundary(Coordinates::new(-1, -1)));
        assert!(!maze.is_boundary(Coordinates::new(2, 3)));
        assert!(!maze.is_boundary(Coordinates::new(0, 0)));
        assert!(maze.is_interior(Coordinates::new(1, 2)));
        assert!(!maze.is_interior(Coordinates::new(2, 0)));
        assert_eq!(maze.boundary_cells().len(), 10);
    }

    #[test]
    fn test_rejects_empty_grid() {
        assert!(matches!(
            Maze::new(0, 4, AdjMatGraph::new()),
            Err(MazeError::InvalidDimensions { rows: 0, cols: 4 })
        ));
    }
}
