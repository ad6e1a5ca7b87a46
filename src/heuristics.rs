use std::cmp::Reverse;

use bit_set::BitSet;
use priority_queue::PriorityQueue;
use rand::Rng;

use crate::graph::{ConflictGraph, VertexId};
use crate::pizza::PizzaInstance;

/** greedy destruction: repeatedly drop the client with the most remaining
conflicts until no conflict is left. */
pub fn remove_most_conflicting(graph: &ConflictGraph) -> Vec<VertexId> {
    let n = graph.n();
    let mut satisfied: BitSet = (0..n).collect();
    // degrees[v]: number of satisfied neighbors of v
    let mut degrees: Vec<usize> = (0..n).map(|v| graph.degree(v)).collect();
    loop {
        let most_conflicting = match satisfied.iter().max_by_key(|v| degrees[*v]) {
            None => break,
            Some(v) => v,
        };
        if degrees[most_conflicting] == 0 { break; }
        satisfied.remove(most_conflicting);
        for u in graph.neighbors(most_conflicting) {
            if satisfied.contains(*u) {
                degrees[*u] -= 1;
            }
        }
    }
    satisfied.iter().collect()
}

/** greedy construction: repeatedly satisfy the client with the fewest
conflicts, discarding its neighbors. */
pub fn add_least_conflicting(graph: &ConflictGraph) -> Vec<VertexId> {
    let n = graph.n();
    let mut potential: BitSet = (0..n).collect();
    let mut res = Vec::new();
    while !potential.is_empty() {
        let least_conflicting = potential.iter().min_by_key(|v| graph.degree(*v)).unwrap();
        res.push(least_conflicting);
        for u in graph.neighbors(least_conflicting) {
            potential.remove(*u);
        }
        potential.remove(least_conflicting);
    }
    res.sort_unstable();
    res
}

/** conflict resolution: while some satisfied pair conflicts, drop one side
of the first conflict found, chosen by a coin flip. */
pub fn random_resolution(graph: &ConflictGraph) -> Vec<VertexId> {
    let mut rng = rand::thread_rng();
    let mut satisfied: BitSet = (0..graph.n()).collect();
    loop {
        let mut conflict = None;
        'scan: for a in satisfied.iter() {
            for b in graph.neighbors(a) {
                if satisfied.contains(*b) {
                    conflict = Some((a, *b));
                    break 'scan;
                }
            }
        }
        match conflict {
            None => break,
            Some((a, b)) => {
                satisfied.remove(if rng.gen_bool(0.5) { a } else { b });
            }
        }
    }
    satisfied.iter().collect()
}

/** conflict resolution: while conflicts remain, drop one uniformly chosen
client among all clients still involved in some conflict. */
pub fn uniform_random_resolution(graph: &ConflictGraph) -> Vec<VertexId> {
    let mut rng = rand::thread_rng();
    let mut satisfied: BitSet = (0..graph.n()).collect();
    loop {
        let conflicting: Vec<VertexId> = satisfied.iter()
            .filter(|a| graph.neighbors(*a).iter().any(|b| satisfied.contains(*b)))
            .collect();
        if conflicting.is_empty() { break; }
        let unlucky = conflicting[rng.gen_range(0..conflicting.len())];
        satisfied.remove(unlucky);
    }
    satisfied.iter().collect()
}

/// greedy construction ordered by a static per-client score (smallest first)
fn greedy_by_score<F: Fn(VertexId) -> usize>(graph: &ConflictGraph, score: F) -> Vec<VertexId> {
    let n = graph.n();
    let mut queue: PriorityQueue<VertexId, Reverse<usize>> = PriorityQueue::new();
    for v in 0..n {
        queue.push(v, Reverse(score(v)));
    }
    let mut potential: BitSet = (0..n).collect();
    let mut res = Vec::new();
    while let Some((v, _)) = queue.pop() {
        if !potential.contains(v) { continue; } // discarded by an earlier pick
        res.push(v);
        potential.remove(v);
        for u in graph.neighbors(v) {
            potential.remove(*u);
        }
    }
    res.sort_unstable();
    res
}

/// satisfy the least fussy clients first (fewest dislikes)
pub fn least_dislikes(inst: &PizzaInstance, graph: &ConflictGraph) -> Vec<VertexId> {
    greedy_by_score(graph, |v| inst.dislikes(v).len())
}

/// satisfy the clients with the fewest stated preferences first
pub fn fewest_preferences(inst: &PizzaInstance, graph: &ConflictGraph) -> Vec<VertexId> {
    greedy_by_score(graph, |v| inst.likes(v).len() + inst.dislikes(v).len())
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::checker;

    fn star_graph() -> ConflictGraph {
        ConflictGraph::new(vec![vec![1,2,3,4], vec![0], vec![0], vec![0], vec![0]])
    }

    #[test]
    fn test_remove_most_conflicting_star() {
        let g = star_graph();
        // the center goes first, leaving all leaves
        assert_eq!(remove_most_conflicting(&g), vec![1,2,3,4]);
    }

    #[test]
    fn test_add_least_conflicting_star() {
        let g = star_graph();
        assert_eq!(add_least_conflicting(&g), vec![1,2,3,4]);
    }

    #[test]
    fn test_random_resolutions_feasible() {
        let g = star_graph();
        for _ in 0..10 {
            assert!(checker(&g, &random_resolution(&g)).is_some());
            assert!(checker(&g, &uniform_random_resolution(&g)).is_some());
        }
    }

    #[test]
    fn test_least_dislikes() {
        let inst = PizzaInstance::from_str(
            "3\n2 cheese peppers\n0\n1 basil\n1 pineapple\n2 mushrooms tomatoes\n1 basil\n"
        );
        let g = inst.conflict_graph();
        let sol = least_dislikes(&inst, &g);
        assert!(checker(&g, &sol).is_some());
        assert_eq!(sol.len(), 2);
        let sol2 = fewest_preferences(&inst, &g);
        assert!(checker(&g, &sol2).is_some());
        assert_eq!(sol2.len(), 2);
    }

    #[test]
    fn test_empty_graph() {
        let g = ConflictGraph::new(vec![]);
        assert!(remove_most_conflicting(&g).is_empty());
        assert!(add_least_conflicting(&g).is_empty());
        assert!(random_resolution(&g).is_empty());
    }
}
