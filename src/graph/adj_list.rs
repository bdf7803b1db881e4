//! Adjacency-list maze graph.
//!
//! Each vertex maps to the set of vertices it shares an edge with. There is
//! no separate wall attribute: an edge between two cells *means* a wall
//! between them, so [`Graph::has_edge`] and [`Graph::get_wall_status`]
//! answer the same question.

use std::collections::{HashMap, HashSet};

use super::Graph;
use crate::macros::trace_event;
use crate::Coordinates;

/// An undirected graph stored as a map from vertex to neighbour set.
///
/// The symmetry invariant `u ∈ N(v) ⇔ v ∈ N(u)` holds after every
/// operation.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_vertex` | \(O(1)\) expected | Hash map insert |
/// | `add_edge` / `update_wall` | \(O(1)\) expected | Two set inserts or removals |
/// | `remove_edge` | \(O(1)\) expected | Membership check, then two removals |
/// | `has_edge` / `get_wall_status` | \(O(1)\) expected | Single set lookup |
/// | `neighbours` | \(O(\text{degree})\) | Copies the neighbour set |
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjListGraph {
    adjacency: HashMap<Coordinates, HashSet<Coordinates>>,
}

impl AdjListGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with room for `capacity` vertices.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            adjacency: HashMap::with_capacity(capacity),
        }
    }

    /// Returns the number of undirected edges.
    pub fn edge_count(&self) -> usize {
        // Every pair is stored in both sets; count it from its smaller endpoint.
        self.adjacency
            .iter()
            .map(|(v, nbrs)| nbrs.iter().filter(|n| v <= *n).count())
            .sum()
    }

    fn contains_both(&self, a: Coordinates, b: Coordinates) -> bool {
        self.adjacency.contains_key(&a) && self.adjacency.contains_key(&b)
    }

    fn link(&mut self, a: Coordinates, b: Coordinates) {
        if let Some(nbrs) = self.adjacency.get_mut(&a) {
            nbrs.insert(b);
        }
        if let Some(nbrs) = self.adjacency.get_mut(&b) {
            nbrs.insert(a);
        }
    }

    fn unlink(&mut self, a: Coordinates, b: Coordinates) {
        if let Some(nbrs) = self.adjacency.get_mut(&a) {
            nbrs.remove(&b);
        }
        if let Some(nbrs) = self.adjacency.get_mut(&b) {
            nbrs.remove(&a);
        }
    }
}

impl Graph for AdjListGraph {
    fn add_vertex(&mut self, label: Coordinates) {
        self.adjacency.entry(label).or_default();
    }

    /// Connects `a` and `b`.
    ///
    /// `add_wall` is accepted for interface compatibility and ignored: in
    /// this encoding every edge is a wall.
    fn add_edge(&mut self, a: Coordinates, b: Coordinates, _add_wall: bool) -> bool {
        if !self.contains_both(a, b) {
            return false;
        }
        trace_event!(trace, %a, %b, "adj_list: add_edge");
        self.link(a, b);
        true
    }

    /// A wall is an edge: `true` inserts the edge and `false` removes it.
    fn update_wall(&mut self, a: Coordinates, b: Coordinates, wall_status: bool) -> bool {
        if !self.contains_both(a, b) {
            return false;
        }
        trace_event!(trace, %a, %b, wall_status, "adj_list: update_wall");
        if wall_status {
            self.link(a, b);
        } else {
            self.unlink(a, b);
        }
        true
    }

    /// Returns `false` if either vertex is missing or the edge is absent.
    fn remove_edge(&mut self, a: Coordinates, b: Coordinates) -> bool {
        if !self.has_edge(a, b) {
            return false;
        }
        trace_event!(trace, %a, %b, "adj_list: remove_edge");
        self.unlink(a, b);
        true
    }

    fn has_vertex(&self, label: Coordinates) -> bool {
        self.adjacency.contains_key(&label)
    }

    fn has_edge(&self, a: Coordinates, b: Coordinates) -> bool {
        self.contains_both(a, b) && self.adjacency.get(&a).is_some_and(|nbrs| nbrs.contains(&b))
    }

    fn get_wall_status(&self, a: Coordinates, b: Coordinates) -> bool {
        self.has_edge(a, b)
    }

    fn neighbours(&self, label: Coordinates) -> Vec<Coordinates> {
        self.adjacency
            .get(&label)
            .map(|nbrs| nbrs.iter().copied().collect())
            .unwrap_or_default()
    }

    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn vertices(&self) -> Vec<Coordinates> {
        self.adjacency.keys().copied().collect()
    }
}
