use super::{Path, Predecessors};

/// Walk the predecessor chain back from the target and return the
/// ordered path from source to target.
/// Every vertex on the chain was finalized by the search before the
/// target was reached; a missing record means the search state is
/// internally inconsistent, which is a bug worth aborting over.
pub(crate) fn trace_path<C: Copy>(best: &Predecessors<C>, target: usize) -> Path {
    let mut path = Vec::new();
    let mut current = target;

    while current != usize::MAX {
        path.push(current);
        let (parent, _) = best[current].expect("path step without a search record");
        current = parent;
    }

    // The walk runs target -> source, so reverse it
    path.reverse();
    path
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trace_path_walks_back_to_source() {
        // 0 is the source, 3 hangs off 2, 2 off 0, 1 off 0
        let best: Predecessors<f64> = vec![
            Some((usize::MAX, 0.0)),
            Some((0, 1.0)),
            Some((0, 3.0)),
            Some((2, 4.0)),
        ];

        assert_eq!(trace_path(&best, 3), vec![0, 2, 3]);
        assert_eq!(trace_path(&best, 1), vec![0, 1]);
        assert_eq!(trace_path(&best, 0), vec![0]);
    }
}
