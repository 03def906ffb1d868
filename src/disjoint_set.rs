/// Disjoint-set (union-find) over dense indices
/// https://en.wikipedia.org/wiki/Disjoint-set_data_structure
/// Tracks a partition of 0..n into disjoint sets; backs Kruskal's cycle
/// test. Path compression plus union by rank gives the amortized
/// inverse-Ackermann bound per operation.
#[derive(Debug)]
pub struct DisjointSet {
    parent: Vec<usize>, // self-parented = representative
    rank: Vec<u32>,     // upper bound on tree height, per representative
}

impl DisjointSet {

    /// n singleton sets, one per index
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    /// Representative of the set containing x
    /// Iterative compression: walk to the root first, then re-parent
    /// every node on the walked path directly to it. No recursion, so
    /// deep trees cannot blow the stack.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut current = x;
        while current != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }

        root
    }

    /// Merge the sets containing a and b
    /// The lower-rank tree goes under the higher-rank root; on a rank
    /// tie, b's root goes under a's root and a's root gains a rank.
    pub fn union(&mut self, a: usize, b: usize) {
        let a_root = self.find(a);
        let b_root = self.find(b);

        if a_root == b_root {
            return;
        }

        if self.rank[a_root] < self.rank[b_root] {
            self.parent[a_root] = b_root;
        } else if self.rank[a_root] > self.rank[b_root] {
            self.parent[b_root] = a_root;
        } else {
            self.parent[b_root] = a_root;
            self.rank[a_root] += 1;
        }
    }

    /// Number of elements (not sets)
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}
