use std::cmp::Ordering;
use std::collections::BinaryHeap;

use bit_set::BitSet;

use crate::bound::{greedy_estimate, loose_bound};
use crate::graph::{ConflictGraph, VertexId};
use crate::search::Incumbent;
use crate::stopping::Cancellation;

/** a search frame plus the greedy estimate of what it could reach,
used as the priority of the exploration queue */
#[derive(Debug, Clone, PartialEq, Eq)]
struct EstimatedContext {
    /// next client index to decide
    person: VertexId,
    /// `included.len() + greedy_estimate(potential)`: ordering key only
    estimated_value: usize,
    /// clients chosen so far
    included: Vec<VertexId>,
    /// still-viable clients (neither decided against nor conflicted)
    potential: BitSet,
}

impl Ord for EstimatedContext {
    fn cmp(&self, other: &Self) -> Ordering {
        self.estimated_value.cmp(&other.estimated_value)
    }
}

// `PartialOrd` needs to be implemented as well.
impl PartialOrd for EstimatedContext {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/** branch & bound exploring the most promising frames first: the queue is
ordered by a greedy maximal-independent-set estimate. The estimate never
prunes anything; pruning and the final answer are still governed by the true
incumbent, so the search stays exact unless cancelled. */
pub fn best_first(graph: &ConflictGraph, cancel: &Cancellation) -> Vec<VertexId> {
    let n = graph.n();
    let incumbent = Incumbent::new();
    let mut queue: BinaryHeap<EstimatedContext> = BinaryHeap::new();
    let full: BitSet = (0..n).collect();
    queue.push(EstimatedContext {
        person: 0,
        estimated_value: greedy_estimate(graph, &full),
        included: Vec::new(),
        potential: full,
    });
    while !cancel.is_cancelled() {
        let ctx = match queue.pop() {
            None => break,
            Some(c) => c,
        };
        if loose_bound(ctx.included.len(), &ctx.potential) <= incumbent.size() { continue; }
        incumbent.update(&ctx.included);
        if ctx.person == n { continue; }

        let person = ctx.person;
        let was_potential = ctx.potential.contains(person);
        let mut potential = ctx.potential;
        potential.remove(person);

        // exclude person
        if loose_bound(ctx.included.len(), &potential) > incumbent.size() {
            queue.push(EstimatedContext {
                person: person + 1,
                estimated_value: ctx.included.len() + greedy_estimate(graph, &potential),
                included: ctx.included.clone(),
                potential: potential.clone(),
            });
        }

        if !was_potential { continue; }
        // include person
        let mut included = ctx.included;
        included.push(person);
        for u in graph.neighbors(person) {
            potential.remove(*u);
        }
        if loose_bound(included.len(), &potential) > incumbent.size() {
            queue.push(EstimatedContext {
                person: person + 1,
                estimated_value: included.len() + greedy_estimate(graph, &potential),
                included,
                potential,
            });
        }
    }
    incumbent.best()
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::checker;

    #[test]
    fn test_empty_graph() {
        let g = ConflictGraph::new(vec![]);
        assert!(best_first(&g, &Cancellation::new()).is_empty());
    }

    #[test]
    fn test_no_edges() {
        let g = ConflictGraph::new(vec![vec![]; 5]);
        let sol = best_first(&g, &Cancellation::new());
        assert_eq!(sol.len(), 5);
        assert_eq!(checker(&g, &sol), Some(5));
    }

    #[test]
    fn test_complete_graph() {
        let n = 6;
        let g = ConflictGraph::new(
            (0..n).map(|i| (0..n).filter(|j| *j != i).collect()).collect()
        );
        let sol = best_first(&g, &Cancellation::new());
        assert_eq!(sol.len(), 1);
    }

    #[test]
    fn test_path() {
        let g = ConflictGraph::new(vec![vec![1], vec![0,2], vec![1,3], vec![2]]);
        let sol = best_first(&g, &Cancellation::new());
        assert_eq!(sol.len(), 2);
        assert_eq!(checker(&g, &sol), Some(2));
    }

    #[test]
    fn test_star() {
        let g = ConflictGraph::new(vec![vec![1,2,3,4], vec![0], vec![0], vec![0], vec![0]]);
        let sol = best_first(&g, &Cancellation::new());
        assert_eq!(sol.len(), 4);
        assert_eq!(checker(&g, &sol), Some(4));
    }
}
