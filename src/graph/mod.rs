//! Undirected maze graphs keyed by cell coordinates.
//!
//! Two interchangeable encodings implement the [`Graph`] trait:
//! - [`AdjListGraph`]: vertex → set of neighbours; an edge *is* a wall
//! - [`AdjMatGraph`]: vertex → set of `(neighbour, wall)` pairs; edges and
//!   walls are tracked independently
//!
//! [`MazeGraph`] selects one of the two at runtime.
//!
//! No operation panics on unknown vertices. Missing vertices and missing
//! edges are reported through `false` or an empty neighbour list.

pub mod adj_list;
pub mod adj_mat;
pub mod maze_graph;

pub use adj_list::AdjListGraph;
pub use adj_mat::AdjMatGraph;
pub use maze_graph::MazeGraph;

use crate::Coordinates;

/// The contract shared by every maze graph backend.
///
/// Edges are undirected: every mutation applies to both `(a, b)` and
/// `(b, a)`. Vertices must be added before they can take part in an edge.
pub trait Graph {
    /// Adds a vertex with no neighbours. Adding an existing vertex is a no-op.
    fn add_vertex(&mut self, label: Coordinates);

    /// Adds each vertex in `labels`, in order.
    fn add_vertices<I>(&mut self, labels: I)
    where
        I: IntoIterator<Item = Coordinates>,
        Self: Sized,
    {
        for label in labels {
            self.add_vertex(label);
        }
    }

    /// Connects `a` and `b`, recording `add_wall` where the backend can.
    ///
    /// Returns `false` if either vertex is missing.
    fn add_edge(&mut self, a: Coordinates, b: Coordinates, add_wall: bool) -> bool;

    /// Sets the wall between `a` and `b` to `wall_status`.
    ///
    /// Returns `false` if either vertex is missing.
    fn update_wall(&mut self, a: Coordinates, b: Coordinates, wall_status: bool) -> bool;

    /// Removes the edge between `a` and `b`.
    fn remove_edge(&mut self, a: Coordinates, b: Coordinates) -> bool;

    /// Returns true if `label` is a vertex.
    fn has_vertex(&self, label: Coordinates) -> bool;

    /// Returns true if both vertices exist and are connected.
    fn has_edge(&self, a: Coordinates, b: Coordinates) -> bool;

    /// Returns true if both vertices exist and a wall separates them.
    fn get_wall_status(&self, a: Coordinates, b: Coordinates) -> bool;

    /// Returns the vertices adjacent to `label`, in no particular order.
    ///
    /// Unknown vertices have no neighbours.
    fn neighbours(&self, label: Coordinates) -> Vec<Coordinates>;

    /// Returns the number of vertices.
    fn vertex_count(&self) -> usize;

    /// Returns every vertex, in no particular order.
    fn vertices(&self) -> Vec<Coordinates>;
}
