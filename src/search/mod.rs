//! Exact branch-and-bound search strategies over the conflict graph.
//! All three explore the same frame tree: at depth `person`, a frame either
//! excludes client `person` or includes it (when it is not conflicted).

use std::sync::Mutex;

use bit_set::BitSet;

use crate::graph::{ConflictGraph, VertexId};

/// sequential depth-first branch & bound
pub mod dfs_bnb;

/// best-first branch & bound guided by a greedy estimate
pub mod best_first;

/// parallel depth-first branch & bound with a bounded worker pool
pub mod parallel_bnb;


/** unit of search-space partition. Frames are created when a parent is split
and consumed exactly once when popped; they are never mutated in place. */
#[derive(Debug, Clone)]
pub struct SearchFrame {
    /// next client index to decide (0..n inclusive)
    pub person: VertexId,
    /// clients chosen so far (always an independent set)
    pub included: Vec<VertexId>,
    /// undecided clients (index >= person) excluded by an included neighbor
    pub conflicts: BitSet,
}

impl SearchFrame {
    /// root of the frame tree: nothing decided, nothing conflicted
    pub fn root() -> Self {
        Self { person: 0, included: Vec::new(), conflicts: BitSet::new() }
    }

    /** splits the frame on `person`: returns the "exclude" child and, when
    `person` is not conflicted, the "include" child (with the neighbors of
    `person` above it marked conflicted). */
    pub fn split(self, graph: &ConflictGraph) -> (SearchFrame, Option<SearchFrame>) {
        let person = self.person;
        let was_conflicted = self.conflicts.contains(person);
        let mut conflicts = self.conflicts;
        conflicts.remove(person); // person is decided now, drop it from bookkeeping
        let exclude = SearchFrame {
            person: person + 1,
            included: self.included.clone(),
            conflicts: conflicts.clone(),
        };
        let include = if was_conflicted { None } else {
            let mut included = self.included;
            included.push(person);
            for u in graph.neighbors_above(person) {
                conflicts.insert(*u);
            }
            Some(SearchFrame { person: person + 1, included, conflicts })
        };
        (exclude, include)
    }
}


/** best independent set found so far. Every mutation is a lock-held
read-compare-replace, so the stored set only ever grows (monotonic) and no
update can be lost, even with concurrent workers. */
#[derive(Debug, Default)]
pub struct Incumbent {
    best: Mutex<Vec<VertexId>>,
}

impl Incumbent {
    /// creates an empty incumbent
    pub fn new() -> Self {
        Self { best: Mutex::new(Vec::new()) }
    }

    /// current incumbent size (the pruning threshold)
    pub fn size(&self) -> usize {
        self.best.lock().unwrap().len()
    }

    /** replaces the incumbent if the candidate is strictly larger;
    returns true and reports progress on improvement */
    pub fn update(&self, candidate: &[VertexId]) -> bool {
        let mut best = self.best.lock().unwrap();
        if candidate.len() > best.len() {
            *best = candidate.to_vec();
            println!("best so far: {}", best.len());
            true
        } else {
            false
        }
    }

    /// clones out the best set found
    pub fn best(&self) -> Vec<VertexId> {
        self.best.lock().unwrap().clone()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use rand::{Rng, SeedableRng};
    use rand::rngs::StdRng;

    use crate::graph::checker;
    use crate::stopping::Cancellation;

    fn path_graph() -> ConflictGraph {
        ConflictGraph::new(vec![vec![1], vec![0,2], vec![1,3], vec![2]])
    }

    #[test]
    fn test_split_root() {
        let g = path_graph();
        let (exclude, include) = SearchFrame::root().split(&g);
        assert_eq!(exclude.person, 1);
        assert!(exclude.included.is_empty());
        assert!(exclude.conflicts.is_empty());
        let include = include.unwrap();
        assert_eq!(include.included, vec![0]);
        assert!(include.conflicts.contains(1)); // neighbor of 0 above it
        assert_eq!(include.conflicts.len(), 1);
    }

    #[test]
    fn test_split_conflicted_person() {
        let g = path_graph();
        let (_, include) = SearchFrame::root().split(&g);
        // person 1 conflicts with included 0: no include child
        let (exclude, include2) = include.unwrap().split(&g);
        assert!(include2.is_none());
        assert_eq!(exclude.person, 2);
        assert_eq!(exclude.included, vec![0]);
        assert!(exclude.conflicts.is_empty()); // 1 was removed on advancement
    }

    #[test]
    fn test_incumbent_monotone() {
        let incumbent = Incumbent::new();
        assert_eq!(incumbent.size(), 0);
        assert!(incumbent.update(&[3]));
        assert!(!incumbent.update(&[5])); // same size: rejected
        assert!(incumbent.update(&[1, 4]));
        assert!(!incumbent.update(&[2]));
        assert_eq!(incumbent.best(), vec![1, 4]);
    }

    /// seeded random graph with edge probability p
    fn random_graph(n: usize, p: f64, seed: u64) -> ConflictGraph {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut adj_list: Vec<Vec<VertexId>> = vec![Vec::new(); n];
        for i in 0..n {
            for j in (i + 1)..n {
                if rng.gen_bool(p) {
                    adj_list[i].push(j);
                    adj_list[j].push(i);
                }
            }
        }
        ConflictGraph::new(adj_list)
    }

    #[test]
    fn test_all_strategies_agree() {
        // uninterrupted, all three strategies must find the true MIS size
        for seed in 0..5 {
            let graph = Arc::new(random_graph(18, 0.3, seed));
            let cancel = Cancellation::new();
            let sol_dfs = dfs_bnb::dfs_bnb(&graph, &cancel);
            let sol_bfs = best_first::best_first(&graph, &cancel);
            let sol_par = parallel_bnb::parallel_bnb(graph.clone(), &cancel, 8);
            assert_eq!(checker(&graph, &sol_dfs), Some(sol_dfs.len()));
            assert_eq!(checker(&graph, &sol_bfs), Some(sol_bfs.len()));
            assert_eq!(checker(&graph, &sol_par), Some(sol_par.len()));
            assert_eq!(sol_dfs.len(), sol_bfs.len());
            assert_eq!(sol_dfs.len(), sol_par.len());
        }
    }
}
