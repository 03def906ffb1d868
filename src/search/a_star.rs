use crate::errors::GraphError;
use crate::graph::{Color, Graph};
use super::trace_path::trace_path;
use super::{Path, Predecessors};

use std::{cmp::Ordering, collections::BinaryHeap};
use num_traits::Float;


/// Identify the shortest path using A* search
/// https://en.wikipedia.org/wiki/A*_search_algorithm
///
/// The heuristic maps (vertex id, target id) to an estimate of the
/// remaining distance and is injected by the caller - whatever world
/// context it needs (coordinates, grid geometry) lives in the closure.
/// Optimality requires the estimate to be admissible: it must never
/// overestimate the true remaining distance. A caller with no context
/// passes |_, _| C::zero(), which reduces A* to Dijkstra.
///
/// The accumulated true cost is tracked separately from the heuristic
/// priority, so the estimate never leaks into the cost carried forward.
///
/// Returns Err only for a malformed request (an unknown vertex name);
/// an unreachable target yields an empty path. Finalized vertices are
/// colored Green and frontier vertices Yellow as the search runs.
pub fn a_star<C, H>(
    graph: &Graph<C>,
    source: &str,
    target: &str,
    heuristic: H,
) -> Result<Path, GraphError>
where
    C: Float,
    H: Fn(usize, usize) -> C,
{
    let source_id = graph
        .vertex_id(source)
        .ok_or_else(|| GraphError::UnknownVertex(source.to_string()))?;
    let target_id = graph
        .vertex_id(target)
        .ok_or_else(|| GraphError::UnknownVertex(target.to_string()))?;

    // Open list - binary heap ordered by estimated total cost, via the
    // reversed Ord on OpenEntry
    let mut open_list: BinaryHeap<OpenEntry<C>> = BinaryHeap::new();

    // Per-vertex (parent, best true cost) records; vertex ids are dense
    // so a flat Vec replaces a map
    let mut best: Predecessors<C> = vec![None; graph.len()];
    best[source_id] = Some((usize::MAX, C::zero()));
    open_list.push(OpenEntry {
        vertex: source_id,
        cost: C::zero(),
        estimated_total: heuristic(source_id, target_id),
    });

    while let Some(OpenEntry { vertex, cost, .. }) = open_list.pop() {

        // fetch current best cost for the vertex
        let (_, c) = best[vertex].expect("queued vertex without a search record");

        // A higher true cost than the recorded best means a cheaper path
        // to this vertex was already processed - the entry is stale
        if cost > c {
            continue;
        }

        // The vertex is finalized: with an admissible heuristic its
        // shortest path is now known
        graph.vertex(vertex).set_color(Color::Green);
        if vertex == target_id {
            return Ok(trace_path(&best, target_id));
        }

        // relax each outgoing edge
        for &successor in graph.neighbors(vertex) {
            let edge = graph
                .edge_between(vertex, successor)
                .expect("adjacency lists a vertex pair with no edge");

            // confirmed cost so far, no heuristic mixed in
            let new_cost = c + edge.cost;

            match best[successor] {
                // the existing path is at least as good, do nothing
                Some((_, existing)) if existing <= new_cost => continue,
                _ => best[successor] = Some((vertex, new_cost)),
            }

            graph.vertex(successor).set_color(Color::Yellow);
            open_list.push(OpenEntry {
                vertex: successor,
                cost: new_cost,
                estimated_total: new_cost + heuristic(successor, target_id),
            });
        }
    }

    // Open list drained without reaching the target: no path exists
    Ok(Vec::new())
}


/// Open-list entry
/// - ordered by estimated_total (true cost + heuristic); the true cost
///   rides along for the stale-entry check at pop time
#[derive(Debug)]
struct OpenEntry<C> {
    vertex: usize,
    cost: C,
    estimated_total: C,
}

// Reversed ordering: BinaryHeap is a max-heap and we pop the smallest
// estimate first. Estimates are non-negative sums and never NaN, so
// partial_cmp falling back to Equal is safe.
impl<C: Float> Ord for OpenEntry<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .estimated_total
            .partial_cmp(&self.estimated_total)
            .unwrap_or(Ordering::Equal)
    }
}
impl<C: Float> PartialOrd for OpenEntry<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<C: Float> PartialEq for OpenEntry<C> {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_total == other.estimated_total
    }
}
impl<C: Float> Eq for OpenEntry<C> {}
