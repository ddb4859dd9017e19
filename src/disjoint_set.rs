//! Disjoint-set forest (union-find) over node indices.
//!
//! Each set is identified by its representative node. [`DisjointSetForest::find_set`]
//! compresses paths on the way up and [`DisjointSetForest::union`] links by rank.
//! The sets always partition {0, …, n−1}; their count starts at n and only
//! ever decreases.

use std::collections::BTreeSet;

use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct DisjointSetForest {
    parent: Vec<usize>,
    rank: Vec<u8>,
    set_count: usize,
}

impl DisjointSetForest {
    /// n singleton sets {0}, {1}, …, {n−1}.
    pub fn make_sets(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            set_count: n,
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets currently in the forest.
    pub fn set_count(&self) -> usize {
        self.set_count
    }

    /// Identifier of the set containing `u`.
    pub fn find_set(&mut self, mut u: usize) -> usize {
        let mut root = u;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        while self.parent[u] != root {
            let next = self.parent[u];
            self.parent[u] = root;
            u = next;
        }
        root
    }

    /// Merge the sets identified by `a` and `b` and return the identifier of
    /// the merged set.
    ///
    /// Both arguments must be current set identifiers (as returned by
    /// [`find_set`](Self::find_set)) and must differ.
    pub fn union(&mut self, a: usize, b: usize) -> Result<usize> {
        let n = self.len();
        let invalid = |reason: &str| Error::Partition {
            a,
            b,
            reason: reason.to_string(),
        };
        if a >= n || b >= n {
            return Err(invalid("set index out of range"));
        }
        if a == b {
            return Err(invalid("cannot merge a set with itself"));
        }
        if self.parent[a] != a || self.parent[b] != b {
            return Err(invalid("index does not identify a current set"));
        }

        let (root, child) = if self.rank[a] < self.rank[b] { (b, a) } else { (a, b) };
        self.parent[child] = root;
        if self.rank[a] == self.rank[b] {
            self.rank[root] = self.rank[root].saturating_add(1);
        }
        self.set_count -= 1;
        Ok(root)
    }

    /// Current partition, each set ordered, sets ordered by their smallest member.
    pub fn sets(&mut self) -> Vec<BTreeSet<usize>> {
        let n = self.len();
        let mut by_root: Vec<Option<usize>> = vec![None; n];
        let mut sets: Vec<BTreeSet<usize>> = Vec::with_capacity(self.set_count);
        for u in 0..n {
            let root = self.find_set(u);
            let slot = *by_root[root].get_or_insert_with(|| {
                sets.push(BTreeSet::new());
                sets.len() - 1
            });
            sets[slot].insert(u);
        }
        sets
    }
}
