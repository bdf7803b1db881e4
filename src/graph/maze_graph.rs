//! Runtime selection between the two graph encodings.

use super::{AdjListGraph, AdjMatGraph, Graph};
use crate::config::DataStructure;
use crate::Coordinates;

/// A graph backend chosen at runtime.
///
/// Every [`Graph`] call is forwarded to the wrapped encoding unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeGraph {
    /// Adjacency-list encoding.
    List(AdjListGraph),
    /// Adjacency-matrix (dictionary of sets) encoding.
    Matrix(AdjMatGraph),
}

impl MazeGraph {
    /// Creates an empty graph of the requested kind.
    pub fn new(kind: DataStructure) -> Self {
        match kind {
            DataStructure::AdjList => Self::List(AdjListGraph::new()),
            DataStructure::AdjMat => Self::Matrix(AdjMatGraph::new()),
        }
    }

    /// Returns which encoding backs this graph.
    pub fn kind(&self) -> DataStructure {
        match self {
            Self::List(_) => DataStructure::AdjList,
            Self::Matrix(_) => DataStructure::AdjMat,
        }
    }

    /// Returns the number of connected vertex pairs.
    pub fn edge_count(&self) -> usize {
        match self {
            Self::List(g) => g.edge_count(),
            Self::Matrix(g) => g.edge_count(),
        }
    }
}

impl From<AdjListGraph> for MazeGraph {
    fn from(graph: AdjListGraph) -> Self {
        Self::List(graph)
    }
}

impl From<AdjMatGraph> for MazeGraph {
    fn from(graph: AdjMatGraph) -> Self {
        Self::Matrix(graph)
    }
}

macro_rules! dispatch {
    ($self:expr, $g:ident => $body:expr) => {
        match $self {
            MazeGraph::List($g) => $body,
            MazeGraph::Matrix($g) => $body,
        }
    };
}

impl Graph for MazeGraph {
    fn add_vertex(&mut self, label: Coordinates) {
        dispatch!(self, g => g.add_vertex(label));
    }

    fn add_edge(&mut self, a: Coordinates, b: Coordinates, add_wall: bool) -> bool {
        dispatch!(self, g => g.add_edge(a, b, add_wall))
    }

    fn update_wall(&mut self, a: Coordinates, b: Coordinates, wall_status: bool) -> bool {
        dispatch!(self, g => g.update_wall(a, b, wall_status))
    }

    fn remove_edge(&mut self, a: Coordinates, b: Coordinates) -> bool {
        dispatch!(self, g => g.remove_edge(a, b))
    }

    fn has_vertex(&self, label: Coordinates) -> bool {
        dispatch!(self, g => g.has_vertex(label))
    }

    fn has_edge(&self, a: Coordinates, b: Coordinates) -> bool {
        dispatch!(self, g => g.has_edge(a, b))
    }

    fn get_wall_status(&self, a: Coordinates, b: Coordinates) -> bool {
        dispatch!(self, g => g.get_wall_status(a, b))
    }

    fn neighbours(&self, label: Coordinates) -> Vec<Coordinates> {
        dispatch!(self, g => g.neighbours(label))
    }

    fn vertex_count(&self) -> usize {
        dispatch!(self, g => g.vertex_count())
    }

    fn vertices(&self) -> Vec<Coordinates> {
        dispatch!(self, g => g.vertices())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_round_trips() {
        for kind in [DataStructure::AdjList, DataStructure::AdjMat] {
            assert_eq!(MazeGraph::new(kind).kind(), kind);
        }
    }

    #[test]
    fn test_backends_diverge_on_open_edges() {
        let a = Coordinates::new(0, 0);
        let b = Coordinates::new(0, 1);
        let mut list = MazeGraph::new(DataStructure::AdjList);
        let mut matrix = MazeGraph::new(DataStructure::AdjMat);

        for g in [&mut list, &mut matrix] {
            g.add_vertices([a, b]);
            assert!(g.add_edge(a, b, false));
            assert!(g.has_edge(a, b));
        }

        // The list encoding cannot express an open edge.
        assert!(list.get_wall_status(a, b));
        assert!(!matrix.get_wall_status(a, b));
    }
}
