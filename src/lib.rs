//! # `mazegraph` - Maze Connectivity Graphs
//!
//! Two interchangeable undirected graph backends for representing which
//! cells of a maze are connected and whether a wall separates them.
//!
//! ## Backends
//!
//! 1. **Adjacency list** ([`AdjListGraph`]):
//!    - Vertex → set of neighbours
//!    - An edge *is* a wall; there is no open-edge state
//!
//! 2. **Adjacency matrix as sets** ([`AdjMatGraph`]):
//!    - Vertex → set of `(neighbour, wall)` pairs
//!    - Edge existence and wall state are tracked independently
//!
//! Both implement [`Graph`]. Missing vertices and edges are reported as
//! `false` or an empty neighbour list, never as a panic.
//!
//! On top of either backend, [`Maze`] lays out a rectangular grid with a
//! ring of boundary cells, and [`MazeConfig`] builds one from JSON.
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events for graph mutations and maze setup.
//!
//! ## Example
//!
//! ```rust
//! use mazegraph::{AdjMatGraph, Coordinates, Graph};
//!
//! let a = Coordinates::new(0, 0);
//! let b = Coordinates::new(0, 1);
//!
//! let mut graph = AdjMatGraph::new();
//! graph.add_vertices([a, b]);
//! assert!(graph.add_edge(a, b, true));
//! assert!(graph.get_wall_status(b, a));
//!
//! graph.update_wall(a, b, false);
//! assert!(graph.has_edge(a, b));
//! assert!(!graph.get_wall_status(a, b));
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

mod macros;

pub mod config;
pub mod coordinates;
pub mod error;
pub mod graph;
pub mod maze;

pub use config::{DataStructure, MazeConfig};
pub use coordinates::Coordinates;
pub use error::MazeError;
pub use graph::{AdjListGraph, AdjMatGraph, Graph, MazeGraph};
pub use maze::Maze;
