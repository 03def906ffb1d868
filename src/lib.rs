//! Weighted graph search and spanning tree modules.
//!
//! The crate covers three pieces that usually travel together in maze
//! and routing tools:
//! - a [`Graph`] of named vertices and directed weighted edges, with a
//!   per-vertex [`Color`] tag callers can watch to animate progress
//! - shortest-path search, uninformed ([`dijkstra`]) and
//!   heuristic-guided ([`a_star`])
//! - minimum spanning trees via [`kruskal`], backed by a path-compressed
//!   [`DisjointSet`]
//!
//! Searches return an ordered vertex-id [`Path`]; an empty path means
//! the target is unreachable. Heuristics are plain closures injected
//! per call, so no global context is involved.

mod collections;
pub mod disjoint_set;
pub mod errors;
pub mod graph;
pub mod mst;
pub mod search;

pub use disjoint_set::DisjointSet;
pub use errors::GraphError;
pub use graph::{Color, Edge, Graph, Vertex};
pub use mst::kruskal;
pub use search::{Path, a_star::a_star, dijkstra::dijkstra};
