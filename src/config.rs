//! Maze configuration loaded from JSON.
//!
//! ```json
//! {
//!   "rows": 4,
//!   "cols": 5,
//!   "data_structure": "adj_mat",
//!   "add_walls": true,
//!   "entrances": [{ "row": -1, "col": 0 }],
//!   "exits": [{ "row": 4, "col": 4 }]
//! }
//! ```
//!
//! Only `rows` and `cols` are required.

use serde::{Deserialize, Serialize};

use crate::error::MazeError;
use crate::graph::MazeGraph;
use crate::macros::trace_event;
use crate::maze::Maze;
use crate::Coordinates;

/// Which graph encoding backs a maze.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataStructure {
    /// [`AdjListGraph`](crate::AdjListGraph).
    #[default]
    AdjList,
    /// [`AdjMatGraph`](crate::AdjMatGraph).
    AdjMat,
}

/// Everything needed to build an initialised [`Maze`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazeConfig {
    /// Interior row count.
    pub rows: i32,
    /// Interior column count.
    pub cols: i32,
    /// Graph encoding.
    #[serde(default)]
    pub data_structure: DataStructure,
    /// Whether interior edges start walled.
    #[serde(default = "default_add_walls")]
    pub add_walls: bool,
    /// Boundary cells to register as entrances.
    #[serde(default)]
    pub entrances: Vec<Coordinates>,
    /// Boundary cells to register as exits.
    #[serde(default)]
    pub exits: Vec<Coordinates>,
}

fn default_add_walls() -> bool {
    true
}

impl MazeConfig {
    /// Creates a fully walled configuration with no entrances or exits.
    pub fn new(rows: i32, cols: i32, data_structure: DataStructure) -> Self {
        Self {
            rows,
            cols,
            data_structure,
            add_walls: default_add_walls(),
            entrances: Vec::new(),
            exits: Vec::new(),
        }
    }

    /// Parses a configuration from JSON.
    ///
    /// # Errors
    /// Returns [`MazeError::Config`] if the document is malformed.
    pub fn from_json(json: &str) -> Result<Self, MazeError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialises the configuration to pretty-printed JSON.
    ///
    /// # Errors
    /// Returns [`MazeError::Config`] if serialisation fails.
    pub fn to_json(&self) -> Result<String, MazeError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Builds the backend, initialises every cell and registers the
    /// entrances and exits.
    ///
    /// # Errors
    /// Returns [`MazeError::InvalidDimensions`] for an empty grid and
    /// [`MazeError::NotBoundary`] for an entrance or exit off the boundary.
    pub fn build(&self) -> Result<Maze<MazeGraph>, MazeError> {
        trace_event!(debug, rows = self.rows, cols = self.cols, kind = ?self.data_structure, "config: build maze");
        let mut maze = Maze::new(self.rows, self.cols, MazeGraph::new(self.data_structure))?;
        maze.init_cells(self.add_walls);
        for &cell in &self.entrances {
            maze.add_entrance(cell)?;
        }
        for &cell in &self.exits {
            maze.add_exit(cell)?;
        }
        Ok(maze)
    }
}
