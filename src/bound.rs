use bit_set::BitSet;

use crate::graph::ConflictGraph;
use crate::search::SearchFrame;

/** optimistic upper bound on the independent-set size reachable from a frame:
current choices plus every undecided client not already conflicted. Of the
`n - person` undecided clients, the conflicted ones can never be added; when
`person` itself is already conflicted it is counted back once, since the
split is about to drop it from the conflict bookkeeping.
Never an underestimate, so pruning `bound <= incumbent` is safe. */
pub fn exact_bound(n: usize, frame: &SearchFrame) -> usize {
    frame.included.len() + (n - frame.person) - frame.conflicts.len()
        + usize::from(frame.conflicts.contains(frame.person))
}

/** cheaper, looser bound used by the best-first strategy: everything still
viable could be added. */
pub fn loose_bound(included_len: usize, potential: &BitSet) -> usize {
    included_len + potential.len() + 1
}

/** greedy maximal-independent-set estimate over a set of still-viable
clients: repeatedly satisfy the client with the fewest conflicts restricted
to the potential set, discard it and its neighbors, and count how many
clients were satisfied this way. Fast and not optimal; used only to order
best-first exploration, never to prune. */
pub fn greedy_estimate(graph: &ConflictGraph, potential: &BitSet) -> usize {
    let mut remaining = potential.clone();
    let mut nb_satisfied = 0;
    while !remaining.is_empty() {
        let mut least_conflicts = usize::MAX;
        let mut least_conflicting = 0;
        for person in remaining.iter() {
            // count conflicts inside the potential set, iterating the cheaper side
            let nb_conflicts = if remaining.len() < graph.degree(person) {
                remaining.iter().filter(|u| graph.are_adjacent(person, *u)).count()
            } else {
                graph.neighbors(person).iter().filter(|u| remaining.contains(**u)).count()
            };
            if nb_conflicts < least_conflicts {
                least_conflicts = nb_conflicts;
                least_conflicting = person;
            }
        }
        nb_satisfied += 1;
        for u in graph.neighbors(least_conflicting) {
            remaining.remove(*u);
        }
        remaining.remove(least_conflicting);
    }
    nb_satisfied
}
