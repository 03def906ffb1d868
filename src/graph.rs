use crate::collections::FxIndexMap;
use crate::errors::GraphError;

use std::cell::Cell;
use num_traits::Float;
use rand::Rng;


/// Per-vertex visualization tag
/// Written by the search algorithms as they run, read by callers that
/// animate search progress. Never consulted for correctness.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Color {
    #[default]
    Uncolored,
    White,
    Gray,
    Yellow, // discovered, sitting on the frontier
    Green,  // finalized, shortest path known
    Red,
}


/// A named vertex, owned by the graph
/// The color lives in a Cell so searches can tag progress through a
/// shared borrow of the graph; single-threaded observation only.
#[derive(Debug)]
pub struct Vertex {
    name: String,
    color: Cell<Color>,
}

impl Vertex {
    fn new(name: String) -> Self {
        Self {
            name,
            color: Cell::new(Color::Uncolored),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> Color {
        self.color.get()
    }

    pub fn set_color(&self, color: Color) {
        self.color.set(color);
    }
}


/// A directed weighted edge between two vertex ids
/// Undirected connections are modeled as two parallel directed edges.
/// A cost of positive infinity marks an impassable edge.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge<C> {
    pub start: usize,
    pub end: usize,
    pub cost: C,
}


/// A weighted directed graph of named vertices
/// Vertex names are unique; each vertex gets a dense id (its insertion
/// index) used by edges, adjacency queries, and returned paths.
#[derive(Debug)]
pub struct Graph<C = f64> {
    vertices: FxIndexMap<String, Vertex>,
    edges: FxIndexMap<(usize, usize), Edge<C>>,
    adjacency: Vec<Vec<usize>>, // outgoing neighbor ids per vertex
}

impl<C: Float> Graph<C> {

    pub fn new() -> Self {
        Self {
            vertices: FxIndexMap::default(),
            edges: FxIndexMap::default(),
            adjacency: Vec::new(),
        }
    }

    /// Add a vertex and return its id
    /// If the name is already present, the existing id is returned.
    pub fn add_vertex(&mut self, name: &str) -> usize {
        if let Some(id) = self.vertices.get_index_of(name) {
            return id;
        }
        let id = self
            .vertices
            .insert_full(name.to_string(), Vertex::new(name.to_string()))
            .0;
        self.adjacency.push(Vec::new());
        id
    }

    /// Look up a vertex id by name
    pub fn vertex_id(&self, name: &str) -> Option<usize> {
        self.vertices.get_index_of(name)
    }

    /// Fetch a vertex by id
    /// Panics on an out-of-range id - that is a caller bug, not a
    /// recoverable condition.
    pub fn vertex(&self, id: usize) -> &Vertex {
        &self.vertices[id]
    }

    /// Name of the vertex with the given id
    pub fn vertex_name(&self, id: usize) -> &str {
        self.vertices[id].name()
    }

    /// Add a directed edge with the default cost of one
    /// Fails if either endpoint name is absent; a missing vertex is
    /// never created implicitly.
    pub fn add_edge(&mut self, start: &str, end: &str) -> Result<(), GraphError> {
        self.add_edge_with_cost(start, end, C::one())
    }

    /// Add a directed edge with an explicit cost
    /// Re-adding an existing edge overwrites its cost.
    pub fn add_edge_with_cost(&mut self, start: &str, end: &str, cost: C) -> Result<(), GraphError> {
        let start_id = self
            .vertex_id(start)
            .ok_or_else(|| GraphError::UnknownVertex(start.to_string()))?;
        let end_id = self
            .vertex_id(end)
            .ok_or_else(|| GraphError::UnknownVertex(end.to_string()))?;

        let edge = Edge { start: start_id, end: end_id, cost };
        if self.edges.insert((start_id, end_id), edge).is_none() {
            self.adjacency[start_id].push(end_id);
        }
        Ok(())
    }

    /// Update the cost of an existing edge
    pub fn set_edge_cost(&mut self, start: &str, end: &str, cost: C) -> Result<(), GraphError> {
        let start_id = self
            .vertex_id(start)
            .ok_or_else(|| GraphError::UnknownVertex(start.to_string()))?;
        let end_id = self
            .vertex_id(end)
            .ok_or_else(|| GraphError::UnknownVertex(end.to_string()))?;

        match self.edges.get_mut(&(start_id, end_id)) {
            Some(edge) => {
                edge.cost = cost;
                Ok(())
            }
            None => Err(GraphError::MissingEdge(format!("{start} -> {end}"))),
        }
    }

    /// The edge start -> end, by name
    pub fn edge(&self, start: &str, end: &str) -> Option<&Edge<C>> {
        let start_id = self.vertex_id(start)?;
        let end_id = self.vertex_id(end)?;
        self.edge_between(start_id, end_id)
    }

    /// The edge a -> b, by id
    pub fn edge_between(&self, a: usize, b: usize) -> Option<&Edge<C>> {
        self.edges.get(&(a, b))
    }

    /// True iff a directed edge start -> end exists
    pub fn contains_edge(&self, start: &str, end: &str) -> bool {
        self.edge(start, end).is_some()
    }

    /// Ids of the vertices reachable via one outgoing edge from v
    pub fn neighbors(&self, v: usize) -> &[usize] {
        &self.adjacency[v]
    }

    /// Enumerate all edges - order is not part of the contract
    pub fn edges(&self) -> impl Iterator<Item = &Edge<C>> {
        self.edges.values()
    }

    /// Enumerate all vertices - order is not part of the contract
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.values()
    }

    /// Remove every edge while keeping the vertices
    /// Used when re-deriving connectivity, e.g. rebuilding a maze from
    /// a spanning tree.
    pub fn clear_edges(&mut self) {
        self.edges.clear();
        for adjacent in &mut self.adjacency {
            adjacent.clear();
        }
    }

    /// Number of vertices
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Set every vertex back to Uncolored, e.g. between animated runs
    pub fn reset_colors(&self) {
        for vertex in self.vertices.values() {
            vertex.set_color(Color::Uncolored);
        }
    }

    /// Total edge cost along a vertex-id sequence
    /// Fails if two consecutive vertices are not connected by an edge.
    pub fn path_cost(&self, path: &[usize]) -> Result<C, GraphError> {
        let mut total = C::zero();
        for pair in path.windows(2) {
            let edge = self.edge_between(pair[0], pair[1]).ok_or_else(|| {
                GraphError::MissingEdge(format!(
                    "{} -> {}",
                    self.vertex_name(pair[0]),
                    self.vertex_name(pair[1])
                ))
            })?;
            total = total + edge.cost;
        }
        Ok(total)
    }

    /// Assign each edge a uniform random integer weight in 1..=edges*1000
    /// The two directions of a parallel (undirected) pair receive the same
    /// weight, so a spanning-tree run over the doubled edges is deterministic
    /// in the costs it sees.
    pub fn randomize_edge_costs<R: Rng>(&mut self, rng: &mut R) {
        let max_weight = (self.edges.len() as u32).max(1) * 1000;
        let pairs: Vec<(usize, usize)> = self.edges.keys().copied().collect();

        for (a, b) in pairs {
            // each undirected pair is drawn once; the mirror edge reuses it
            if a > b && self.edges.contains_key(&(b, a)) {
                continue;
            }
            let weight = rng.random_range(1..=max_weight);
            let cost = C::from(weight).unwrap(); // u32 -> float, cannot fail

            if let Some(edge) = self.edges.get_mut(&(a, b)) {
                edge.cost = cost;
            }
            if let Some(mirror) = self.edges.get_mut(&(b, a)) {
                mirror.cost = cost;
            }
        }
    }
}

impl<C: Float> Default for Graph<C> {
    fn default() -> Self {
        Self::new()
    }
}
