use crate::bound::exact_bound;
use crate::graph::{ConflictGraph, VertexId};
use crate::search::{Incumbent, SearchFrame};
use crate::stopping::Cancellation;

/** depth-first branch & bound over an explicit frame stack (no call-stack
recursion, so the depth is not coupled to the graph size). Exhaustive over
the unpruned tree: without cancellation the result is a true maximum
independent set. On cancellation, returns the best incumbent found so far.

The incumbent is updated at every pop, not only at leaves, which tightens
the anytime guarantee at no cost. Children are gated on their own bound
before being pushed, so hopeless frames never grow the stack. */
pub fn dfs_bnb(graph: &ConflictGraph, cancel: &Cancellation) -> Vec<VertexId> {
    let n = graph.n();
    let incumbent = Incumbent::new();
    let mut stack = vec![SearchFrame::root()];
    while !cancel.is_cancelled() {
        let frame = match stack.pop() {
            None => break,
            Some(f) => f,
        };
        if exact_bound(n, &frame) <= incumbent.size() { continue; }
        incumbent.update(&frame.included);
        if frame.person == n { continue; }
        let (exclude, include) = frame.split(graph);
        // push exclude first so inclusion is explored first
        if exact_bound(n, &exclude) > incumbent.size() {
            stack.push(exclude);
        }
        if let Some(child) = include {
            if exact_bound(n, &child) > incumbent.size() {
                stack.push(child);
            }
        }
    }
    incumbent.best()
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::checker;

    fn complete_graph(n: usize) -> ConflictGraph {
        ConflictGraph::new((0..n).map(|i| (0..n).filter(|j| *j != i).collect()).collect())
    }

    #[test]
    fn test_empty_graph() {
        let g = ConflictGraph::new(vec![]);
        assert!(dfs_bnb(&g, &Cancellation::new()).is_empty());
    }

    #[test]
    fn test_no_edges() {
        let g = ConflictGraph::new(vec![vec![]; 5]);
        let sol = dfs_bnb(&g, &Cancellation::new());
        assert_eq!(sol.len(), 5);
        assert_eq!(checker(&g, &sol), Some(5));
    }

    #[test]
    fn test_complete_graph() {
        let g = complete_graph(6);
        let sol = dfs_bnb(&g, &Cancellation::new());
        assert_eq!(sol.len(), 1);
        assert_eq!(checker(&g, &sol), Some(1));
    }

    #[test]
    fn test_path() {
        let g = ConflictGraph::new(vec![vec![1], vec![0,2], vec![1,3], vec![2]]);
        let sol = dfs_bnb(&g, &Cancellation::new());
        assert_eq!(sol.len(), 2);
        assert_eq!(checker(&g, &sol), Some(2));
    }

    #[test]
    fn test_star() {
        let g = ConflictGraph::new(vec![vec![1,2,3,4], vec![0], vec![0], vec![0], vec![0]]);
        let sol = dfs_bnb(&g, &Cancellation::new());
        assert_eq!(sol.len(), 4);
        assert_eq!(checker(&g, &sol), Some(4));
    }

    #[test]
    fn test_idempotent() {
        let g = ConflictGraph::new(vec![vec![1], vec![0,2], vec![1,3], vec![2]]);
        let a = dfs_bnb(&g, &Cancellation::new());
        let b = dfs_bnb(&g, &Cancellation::new());
        assert_eq!(a, b); // deterministic bound logic
    }

    #[test]
    fn test_pre_cancelled_returns_valid() {
        let g = complete_graph(4);
        let cancel = Cancellation::new();
        cancel.cancel();
        let sol = dfs_bnb(&g, &cancel);
        assert!(checker(&g, &sol).is_some());
    }
}
