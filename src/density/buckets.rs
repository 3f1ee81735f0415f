//! Degree-indexed buckets supporting the peeling loop.
//!
//! An array of buckets indexed by degree 0..max_degree, each bucket a
//! swap-remove vector, with a per-vertex position index. This gives O(1)
//! degree-decrement-and-rebucket and O(1) amortized minimum extraction :
//! the minimum cursor only walks each degree level a bounded number of times
//! because a removal lowers neighbour degrees by exactly one.
//!
//! Invariant : every live vertex sits in exactly one bucket, the one equal to
//! its current degree.

/// degree -> vertices mapping for a peeling pass
pub(crate) struct DegreeBuckets {
    /// buckets[d] holds the vertices currently at degree d
    buckets: Vec<Vec<usize>>,
    /// position of each vertex inside its bucket
    position: Vec<usize>,
    /// current degree of each vertex still bucketed
    degree: Vec<usize>,
    /// false once popped
    bucketed: Vec<bool>,
    /// lower bound on the smallest non-empty bucket
    cursor: usize,
    nb_bucketed: usize,
}

impl DegreeBuckets {
    /// builds the buckets from initial degrees (vertex ids are 0..degrees.len())
    pub(crate) fn new(degrees: &[usize]) -> Self {
        let max_degree = degrees.iter().copied().max().unwrap_or(0);
        let mut buckets: Vec<Vec<usize>> = (0..=max_degree).map(|_| Vec::new()).collect();
        let mut position = vec![0usize; degrees.len()];
        for (v, &d) in degrees.iter().enumerate() {
            position[v] = buckets[d].len();
            buckets[d].push(v);
        }
        DegreeBuckets {
            buckets,
            position,
            degree: degrees.to_vec(),
            bucketed: vec![true; degrees.len()],
            cursor: 0,
            nb_bucketed: degrees.len(),
        }
    } // end of new

    /// extracts a vertex of minimal current degree, or None when empty.
    /// Tie-breaking inside a bucket takes the last slot; as insertion order is
    /// deterministic the whole peeling order is reproducible run to run.
    pub(crate) fn pop_min(&mut self) -> Option<usize> {
        if self.nb_bucketed == 0 {
            return None;
        }
        while self.buckets[self.cursor].is_empty() {
            self.cursor += 1;
        }
        let v = self.buckets[self.cursor].pop().unwrap();
        self.bucketed[v] = false;
        self.nb_bucketed -= 1;
        Some(v)
    } // end of pop_min

    /// moves a vertex one bucket down after its degree lost one unit
    pub(crate) fn decrement(&mut self, v: usize) {
        debug_assert!(self.bucketed[v] && self.degree[v] > 0);
        let d = self.degree[v];
        self.swap_remove(v, d);
        self.degree[v] = d - 1;
        self.position[v] = self.buckets[d - 1].len();
        self.buckets[d - 1].push(v);
        // a neighbour of the popped minimum can land one level below the cursor
        if d - 1 < self.cursor {
            self.cursor = d - 1;
        }
    } // end of decrement

    fn swap_remove(&mut self, v: usize, d: usize) {
        let pos = self.position[v];
        let last = self.buckets[d].len() - 1;
        self.buckets[d].swap(pos, last);
        let moved = self.buckets[d][pos];
        self.position[moved] = pos;
        self.buckets[d].pop();
    }
} // end of impl DegreeBuckets

//==========================================================================================================

#[cfg(test)]
mod tests {

    use super::*;

    fn log_init_test() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn pop_in_degree_order() {
        log_init_test();
        let mut buckets = DegreeBuckets::new(&[3, 1, 2, 1]);
        let first = buckets.pop_min().unwrap();
        assert_eq!(buckets.degree[first], 1);
        let second = buckets.pop_min().unwrap();
        assert_eq!(buckets.degree[second], 1);
        assert_eq!(buckets.pop_min(), Some(2));
        assert_eq!(buckets.pop_min(), Some(0));
        assert_eq!(buckets.pop_min(), None);
    }

    #[test]
    fn decrement_rebuckets() {
        log_init_test();
        let mut buckets = DegreeBuckets::new(&[2, 2, 2]);
        buckets.decrement(1);
        buckets.decrement(1);
        // vertex 1 fell to degree 0 and must come out first
        assert_eq!(buckets.pop_min(), Some(1));
    }

    #[test]
    fn cursor_steps_back() {
        log_init_test();
        let mut buckets = DegreeBuckets::new(&[1, 1, 2]);
        let _ = buckets.pop_min(); // cursor now at 1
        buckets.decrement(2); // vertex 2 joins bucket 1
        buckets.decrement(2); // and falls to bucket 0, below the cursor
        assert_eq!(buckets.pop_min(), Some(2));
    }
} // end of mod tests
