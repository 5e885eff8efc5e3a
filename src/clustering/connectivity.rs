//! Connectivity bookkeeping for merged particles
//!
//! A plain index-based union-find forest over `0..n`: a parent array plus a
//! size array, with path halving on `find` and union by size. Unions are
//! monotonic: once two indices share a class they never separate.

#[derive(Debug, Clone)]
pub struct ConnectivityTracker {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl ConnectivityTracker {
    /// `n` singleton sets
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Canonical representative of `i`'s class
    /// Idempotent and consistent for all members of a class
    pub fn find(&mut self, i: usize) -> usize {
        let mut i = i;
        while self.parent[i] != i {
            // path halving: point i at its grandparent while walking up
            self.parent[i] = self.parent[self.parent[i]];
            i = self.parent[i];
        }
        i
    }

    /// Merge the classes of `a` and `b`
    /// Returns `false` when they were already merged
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return false;
        }
        // union by size: smaller tree under the larger
        let (big, small) = if self.size[ra] >= self.size[rb] {
            (ra, rb)
        } else {
            (rb, ra)
        };
        self.parent[small] = big;
        self.size[big] += self.size[small];
        true
    }

    /// Whether `a` and `b` share a class
    pub fn connected(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }
}
