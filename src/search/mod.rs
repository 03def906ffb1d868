
pub mod a_star;
pub mod dijkstra;
mod trace_path;

/// An ordered sequence of vertex ids from source to target, inclusive
/// An empty path means the target was unreachable - that is a normal
/// outcome, not an error.
pub type Path = Vec<usize>;

/// Per-vertex search record, indexed by vertex id
/// The tuple contains (parent_id, cost) where:
/// - parent_id is the finalized predecessor on the best path found so far
/// - cost is the accumulated true edge cost from the source
/// The source's parent_id is usize::MAX to mark the start of the chain.
pub(crate) type Predecessors<C> = Vec<Option<(usize, C)>>;
