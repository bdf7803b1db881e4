//! Adjacency-matrix maze graph, stored sparsely as a dictionary of sets.
//!
//! Row `v` of the matrix is the set of `(neighbour, wall)` entries for `v`.
//! Unlike [`AdjListGraph`](super::AdjListGraph) this encoding can say
//! "connected, no wall": [`Graph::has_edge`] looks for either flag while
//! [`Graph::get_wall_status`] looks only for `wall = true`.
//!
//! [`Graph::add_edge`] inserts the requested flag without discarding the
//! opposite one, so two calls with different flags leave both entries in
//! place. [`Graph::update_wall`] and [`Graph::remove_edge`] collapse that
//! state again.

use std::collections::{HashMap, HashSet};

use super::Graph;
use crate::macros::trace_event;
use crate::Coordinates;

/// One entry of a vertex's row: the neighbour and the wall flag.
type Entry = (Coordinates, bool);

/// An undirected graph whose edges carry a wall flag.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_vertex` | \(O(1)\) expected | Hash map insert |
/// | `add_edge` | \(O(1)\) expected | Two set inserts |
/// | `update_wall` / `remove_edge` | \(O(1)\) expected | Up to four set operations |
/// | `has_edge` / `get_wall_status` | \(O(1)\) expected | One or two set lookups |
/// | `neighbours` | \(O(\text{degree})\) | May repeat a neighbour held under both flags |
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjMatGraph {
    matrix: HashMap<Coordinates, HashSet<Entry>>,
}

impl AdjMatGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with room for `capacity` vertices.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            matrix: HashMap::with_capacity(capacity),
        }
    }

    /// Returns the number of connected vertex pairs, whatever their flags.
    pub fn edge_count(&self) -> usize {
        self.matrix
            .iter()
            .map(|(v, row)| {
                row.iter()
                    .map(|(n, _)| n)
                    .filter(|n| v <= *n)
                    .collect::<HashSet<_>>()
                    .len()
            })
            .sum()
    }

    /// Returns true if `a` holds entries for `b` under both wall flags.
    ///
    /// This is only reachable through repeated [`Graph::add_edge`] calls
    /// with different flags.
    pub fn has_conflicting_walls(&self, a: Coordinates, b: Coordinates) -> bool {
        self.matrix
            .get(&a)
            .is_some_and(|row| row.contains(&(b, true)) && row.contains(&(b, false)))
    }

    fn contains_both(&self, a: Coordinates, b: Coordinates) -> bool {
        self.matrix.contains_key(&a) && self.matrix.contains_key(&b)
    }

    fn insert(&mut self, from: Coordinates, entry: Entry) {
        if let Some(row) = self.matrix.get_mut(&from) {
            row.insert(entry);
        }
    }

    fn discard(&mut self, from: Coordinates, entry: Entry) {
        if let Some(row) = self.matrix.get_mut(&from) {
            row.remove(&entry);
        }
    }
}

impl Graph for AdjMatGraph {
    fn add_vertex(&mut self, label: Coordinates) {
        self.matrix.entry(label).or_default();
    }

    fn add_edge(&mut self, a: Coordinates, b: Coordinates, add_wall: bool) -> bool {
        if !self.contains_both(a, b) {
            return false;
        }
        trace_event!(trace, %a, %b, add_wall, "adj_mat: add_edge");
        self.insert(a, (b, add_wall));
        self.insert(b, (a, add_wall));
        true
    }

    /// Replaces whatever flag the pair holds with `wall_status`, creating the
    /// edge if it was absent.
    fn update_wall(&mut self, a: Coordinates, b: Coordinates, wall_status: bool) -> bool {
        if !self.contains_both(a, b) {
            return false;
        }
        trace_event!(trace, %a, %b, wall_status, "adj_mat: update_wall");
        self.discard(a, (b, !wall_status));
        self.insert(a, (b, wall_status));
        self.discard(b, (a, !wall_status));
        self.insert(b, (a, wall_status));
        true
    }

    /// Drops the pair under both flags.
    ///
    /// Succeeds whenever both vertices exist, even if they were not connected.
    fn remove_edge(&mut self, a: Coordinates, b: Coordinates) -> bool {
        if !self.contains_both(a, b) {
            return false;
        }
        trace_event!(trace, %a, %b, "adj_mat: remove_edge");
        for wall in [false, true] {
            self.discard(a, (b, wall));
            self.discard(b, (a, wall));
        }
        true
    }

    fn has_vertex(&self, label: Coordinates) -> bool {
        self.matrix.contains_key(&label)
    }

    fn has_edge(&self, a: Coordinates, b: Coordinates) -> bool {
        self.contains_both(a, b)
            && self
                .matrix
                .get(&a)
                .is_some_and(|row| row.contains(&(b, true)) || row.contains(&(b, false)))
    }

    /// Absent edges report no wall, the same as an explicit `wall = false`.
    fn get_wall_status(&self, a: Coordinates, b: Coordinates) -> bool {
        self.contains_both(a, b) && self.matrix.get(&a).is_some_and(|row| row.contains(&(b, true)))
    }

    fn neighbours(&self, label: Coordinates) -> Vec<Coordinates> {
        self.matrix
            .get(&label)
            .map(|row| row.iter().map(|&(n, _)| n).collect())
            .unwrap_or_default()
    }

    fn vertex_count(&self) -> usize {
        self.matrix.len()
    }

    fn vertices(&self) -> Vec<Coordinates> {
        self.matrix.keys().copied().collect()
    }
}
