use crate::errors::GraphError;
use crate::graph::{Color, Graph};
use super::trace_path::trace_path;
use super::{Path, Predecessors};

use std::{cmp::Ordering, collections::BinaryHeap};
use num_traits::Float;


/// Identify the shortest path using Dijkstra's Algorithm
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// From the source vertex, expand the cheapest frontier vertex until the
/// target is finalized. Edge costs must be non-negative; positive
/// infinity marks an impassable edge.
///
/// Returns Err only for a malformed request (an unknown vertex name).
/// An unreachable target is a normal outcome and yields an empty path.
///
/// As a side effect, finalized vertices are colored Green and frontier
/// vertices Yellow so an observer can animate progress.
pub fn dijkstra<C>(graph: &Graph<C>, source: &str, target: &str) -> Result<Path, GraphError>
where
    C: Float,
{
    let source_id = graph
        .vertex_id(source)
        .ok_or_else(|| GraphError::UnknownVertex(source.to_string()))?;
    let target_id = graph
        .vertex_id(target)
        .ok_or_else(|| GraphError::UnknownVertex(target.to_string()))?;

    // Frontier - binary heap ordered cheapest-first via the reversed Ord
    // on QueueEntry
    let mut frontier: BinaryHeap<QueueEntry<C>> = BinaryHeap::new();

    // Per-vertex (parent, best cost) records; vertex ids are dense so a
    // flat Vec replaces a map
    let mut best: Predecessors<C> = vec![None; graph.len()];
    best[source_id] = Some((usize::MAX, C::zero()));
    frontier.push(QueueEntry { vertex: source_id, cost: C::zero() });

    while let Some(QueueEntry { vertex, cost }) = frontier.pop() {

        // fetch current best cost for the vertex
        let (_, c) = best[vertex].expect("queued vertex without a search record");

        // A higher cost than the recorded best means a cheaper path to
        // this vertex was already processed - the entry is stale
        if cost > c {
            continue;
        }

        // The vertex is finalized: its shortest path is now known
        graph.vertex(vertex).set_color(Color::Green);
        if vertex == target_id {
            return Ok(trace_path(&best, target_id));
        }

        // relax each outgoing edge
        for &successor in graph.neighbors(vertex) {
            let edge = graph
                .edge_between(vertex, successor)
                .expect("adjacency lists a vertex pair with no edge");
            let new_cost = c + edge.cost;

            match best[successor] {
                // the existing path is at least as good, do nothing
                Some((_, existing)) if existing <= new_cost => continue,
                _ => best[successor] = Some((vertex, new_cost)),
            }

            graph.vertex(successor).set_color(Color::Yellow);
            frontier.push(QueueEntry { vertex: successor, cost: new_cost });
        }
    }

    // Queue drained without reaching the target: no path exists
    Ok(Vec::new())
}


/// Frontier entry
/// - ordering only needs the accumulated cost plus the vertex id it
///   belongs to; all other vertex data stays in the graph
#[derive(Debug)]
struct QueueEntry<C> {
    vertex: usize,
    cost: C,
}

// Reversed ordering: BinaryHeap is a max-heap and we pop cheapest-first.
// Costs are non-negative sums and never NaN, so partial_cmp falling back
// to Equal is safe.
impl<C: Float> Ord for QueueEntry<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.cost.partial_cmp(&self.cost).unwrap_or(Ordering::Equal)
    }
}
impl<C: Float> PartialOrd for QueueEntry<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<C: Float> PartialEq for QueueEntry<C> {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost
    }
}
impl<C: Float> Eq for QueueEntry<C> {}


#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    // Helper to build a graph from (start, end, cost) triples
    fn build_graph(vertices: &[&str], edges: &[(&str, &str, f64)]) -> Graph<f64> {
        let mut graph = Graph::new();
        for name in vertices {
            graph.add_vertex(name);
        }
        for (start, end, cost) in edges {
            graph.add_edge_with_cost(start, end, *cost).unwrap();
        }
        graph
    }

    // Helper to build an undirected graph: every connection doubled with
    // symmetric costs
    fn build_undirected(vertices: &[&str], edges: &[(&str, &str, f64)]) -> Graph<f64> {
        let mut graph = Graph::new();
        for name in vertices {
            graph.add_vertex(name);
        }
        for (start, end, cost) in edges {
            graph.add_edge_with_cost(start, end, *cost).unwrap();
            graph.add_edge_with_cost(end, start, *cost).unwrap();
        }
        graph
    }

    fn path_names<'a>(graph: &'a Graph<f64>, path: &[usize]) -> Vec<&'a str> {
        path.iter().map(|&id| graph.vertex_name(id)).collect()
    }

    // Brute force: enumerate every simple path with a DFS and keep the
    // cheapest cost; ground truth for the randomized cross-check
    fn brute_force_distance(graph: &Graph<f64>, source: usize, target: usize) -> Option<f64> {
        fn walk(
            graph: &Graph<f64>,
            current: usize,
            target: usize,
            cost: f64,
            on_path: &mut Vec<bool>,
            cheapest: &mut Option<f64>,
        ) {
            if current == target {
                if cheapest.is_none_or(|c| cost < c) {
                    *cheapest = Some(cost);
                }
                return;
            }
            for &next in graph.neighbors(current) {
                if on_path[next] {
                    continue;
                }
                let edge_cost = graph.edge_between(current, next).unwrap().cost;
                on_path[next] = true;
                walk(graph, next, target, cost + edge_cost, on_path, cheapest);
                on_path[next] = false;
            }
        }

        let mut on_path = vec![false; graph.len()];
        on_path[source] = true;
        let mut cheapest = None;
        walk(graph, source, target, 0.0, &mut on_path, &mut cheapest);
        cheapest
    }

    #[test]
    fn test_dijkstra_concrete_scenario() {
        // A-B(1), B-C(2), A-C(4), C-D(1): the cheap route to D detours
        // through B rather than taking the direct A-C edge
        let graph = build_undirected(
            &["A", "B", "C", "D"],
            &[
                ("A", "B", 1.0),
                ("B", "C", 2.0),
                ("A", "C", 4.0),
                ("C", "D", 1.0),
            ],
        );

        let path = dijkstra(&graph, "A", "D").unwrap();
        assert_eq!(path_names(&graph, &path), vec!["A", "B", "C", "D"]);
        assert_eq!(graph.path_cost(&path).unwrap(), 4.0);
    }

    #[test]
    fn test_dijkstra_no_path_is_empty() {
        // D sits in its own component
        let graph = build_graph(
            &["A", "B", "C", "D"],
            &[("A", "B", 1.0), ("B", "C", 1.0)],
        );

        let path = dijkstra(&graph, "A", "D").unwrap();
        assert!(path.is_empty());
    }

    #[test]
    fn test_dijkstra_source_equals_target() {
        let graph = build_graph(&["A", "B"], &[("A", "B", 1.0)]);

        let path = dijkstra(&graph, "A", "A").unwrap();
        assert_eq!(path_names(&graph, &path), vec!["A"]);
        assert_eq!(graph.path_cost(&path).unwrap(), 0.0);
    }

    #[test]
    fn test_dijkstra_rejects_unknown_vertex() {
        let graph = build_graph(&["A"], &[]);
        let result = dijkstra(&graph, "A", "ghost");
        assert_eq!(result, Err(GraphError::UnknownVertex("ghost".to_string())));
    }

    #[test]
    fn test_dijkstra_ignores_impassable_edges() {
        // the direct edge is marked impassable, so the detour wins
        let graph = build_graph(
            &["A", "B", "C"],
            &[
                ("A", "C", f64::INFINITY),
                ("A", "B", 1.0),
                ("B", "C", 1.0),
            ],
        );

        let path = dijkstra(&graph, "A", "C").unwrap();
        assert_eq!(path_names(&graph, &path), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_dijkstra_colors_mark_progress() {
        let graph = build_graph(
            &["A", "B", "C", "D", "E"],
            &[
                ("A", "B", 1.0),
                ("A", "C", 10.0),
                ("B", "D", 1.0),
                ("D", "E", 5.0),
            ],
        );

        let path = dijkstra(&graph, "A", "D").unwrap();
        assert_eq!(path_names(&graph, &path), vec!["A", "B", "D"]);

        // everything finalized before the target is Green, discovered but
        // unexpanded vertices are Yellow, untouched vertices keep their tag
        for name in ["A", "B", "D"] {
            let id = graph.vertex_id(name).unwrap();
            assert_eq!(graph.vertex(id).color(), Color::Green, "{name}");
        }
        let c = graph.vertex_id("C").unwrap();
        assert_eq!(graph.vertex(c).color(), Color::Yellow);
        let e = graph.vertex_id("E").unwrap();
        assert_eq!(graph.vertex(e).color(), Color::Uncolored);
    }

    #[test]
    fn test_dijkstra_with_cycle() {
        let graph = build_graph(
            &["A", "B", "C", "D"],
            &[
                ("A", "B", 1.0),
                ("B", "C", 1.0),
                ("C", "A", 1.0),
                ("C", "D", 2.0),
            ],
        );

        let path = dijkstra(&graph, "A", "D").unwrap();
        assert_eq!(path_names(&graph, &path), vec!["A", "B", "C", "D"]);
        assert_eq!(graph.path_cost(&path).unwrap(), 4.0);
    }

    #[test]
    fn test_dijkstra_matches_brute_force_on_random_graphs() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let n = 8;
            let names: Vec<String> = (0..n).map(|i| format!("v{i}")).collect();
            let mut graph: Graph<f64> = Graph::new();
            for name in &names {
                graph.add_vertex(name);
            }
            for a in 0..n {
                for b in 0..n {
                    if a != b && rng.random_range(0..3) == 0 {
                        let cost = rng.random_range(1..=20) as f64;
                        graph.add_edge_with_cost(&names[a], &names[b], cost).unwrap();
                    }
                }
            }

            let path = dijkstra(&graph, "v0", &names[n - 1]).unwrap();
            let source = graph.vertex_id("v0").unwrap();
            let target = graph.vertex_id(&names[n - 1]).unwrap();

            match brute_force_distance(&graph, source, target) {
                Some(distance) => {
                    assert_eq!(graph.path_cost(&path).unwrap(), distance);
                }
                None => assert!(path.is_empty()),
            }
        }
    }
}
