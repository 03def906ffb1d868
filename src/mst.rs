use crate::disjoint_set::DisjointSet;
use crate::graph::{Edge, Graph};

use std::{cmp::Ordering, collections::BinaryHeap};
use num_traits::Float;


/// Build a minimum spanning tree using Kruskal's algorithm
/// https://en.wikipedia.org/wiki/Kruskal%27s_algorithm
/// Greedily accept the cheapest edge whose endpoints are still in
/// different sets, merging the sets as edges are accepted.
///
/// Returns the accepted edges. A connected graph yields exactly
/// len() - 1 of them; a graph with k components yields len() - k (a
/// maximal spanning forest). Disconnection is not an error - callers
/// detect it by comparing the result length against len() - 1.
///
/// Undirected graphs modeled as two parallel directed edges are safe:
/// accepting one direction merges the endpoints, so the mirror edge can
/// never be accepted as a second connection. For deterministic results
/// the caller must give both directions the same cost.
pub fn kruskal<C: Float>(graph: &Graph<C>) -> Vec<Edge<C>> {

    // Every edge into a min-priority queue keyed by cost
    let mut queue: BinaryHeap<EdgeEntry<C>> = graph
        .edges()
        .map(|edge| EdgeEntry { edge: edge.clone() })
        .collect();

    // one singleton set per vertex
    let mut sets = DisjointSet::new(graph.len());

    let mut tree: Vec<Edge<C>> = Vec::new();
    let spanning = graph.len().saturating_sub(1);

    while tree.len() < spanning {
        // queue exhausted early: the graph is disconnected and the
        // forest built so far is maximal
        let Some(EdgeEntry { edge }) = queue.pop() else {
            break;
        };

        let start_root = sets.find(edge.start);
        let end_root = sets.find(edge.end);
        if start_root != end_root {
            sets.union(start_root, end_root);
            tree.push(edge);
        }
    }

    tree
}


/// Priority-queue entry wrapping an edge
/// - reversed ordering so the BinaryHeap pops the cheapest edge first;
///   costs are non-negative and never NaN
#[derive(Debug)]
struct EdgeEntry<C> {
    edge: Edge<C>,
}

impl<C: Float> Ord for EdgeEntry<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .edge
            .cost
            .partial_cmp(&self.edge.cost)
            .unwrap_or(Ordering::Equal)
    }
}
impl<C: Float> PartialOrd for EdgeEntry<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<C: Float> PartialEq for EdgeEntry<C> {
    fn eq(&self, other: &Self) -> bool {
        self.edge.cost == other.edge.cost
    }
}
impl<C: Float> Eq for EdgeEntry<C> {}
