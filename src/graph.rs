use bit_set::BitSet;

/** Vertex Id (a vertex is a client index) */
pub type VertexId = usize;

/** models a conflict graph: vertices are clients, an edge means the two
clients cannot be satisfied by the same ingredient set.
Built once, immutable afterwards, shared read-only by every solver. */
#[derive(Debug)]
pub struct ConflictGraph {
    /// nb vertices
    n: usize,
    /// nb edges
    m: usize,
    /// adj_list[i]: sorted list of vertices adjacent to i
    adj_list: Vec<Vec<VertexId>>,
    /// adj_matrix[i]: bitset of the neighbors of i
    adj_matrix: Vec<BitSet>,
}

impl ConflictGraph {

    /** constructor using an adjacency list.
    requires a symmetric adjacency without self-loops (checked in debug). */
    pub fn new(adj_list: Vec<Vec<VertexId>>) -> Self {
        let n = adj_list.len();
        let mut sorted_adj = adj_list;
        for l in sorted_adj.iter_mut() {
            l.sort_unstable();
            l.dedup();
        }
        // compute nb edges
        let mut m = 0;
        for e in &sorted_adj { // at the end: m = ∑ d(v)
            m += e.len();
        }
        m /= 2; // m = (∑ d(v)) / 2
        // build the adjacency matrix
        let mut adj_matrix = vec![BitSet::default(); n];
        for (a, row) in adj_matrix.iter_mut().enumerate() {
            for b in &sorted_adj[a] {
                debug_assert!(*b != a, "self-loop on vertex {}", a);
                debug_assert!(*b < n, "out of range neighbor {} of {}", b, a);
                row.insert(*b);
            }
        }
        #[cfg(debug_assertions)]
        for (a, row) in adj_matrix.iter().enumerate() {
            for b in row.iter() {
                debug_assert!(adj_matrix[b].contains(a), "asymmetric edge ({},{})", a, b);
            }
        }
        Self { n, m, adj_list: sorted_adj, adj_matrix }
    }

    /// number of vertices
    pub fn n(&self) -> usize { self.n }

    /// number of edges
    pub fn m(&self) -> usize { self.m }

    /// sorted list of vertices adjacent to vertex i
    pub fn neighbors(&self, i: VertexId) -> &[VertexId] {
        &self.adj_list[i]
    }

    /// degree of vertex i
    pub fn degree(&self, i: VertexId) -> usize { self.adj_list[i].len() }

    /// neighbors of v with an index strictly larger than v
    pub fn neighbors_above(&self, v: VertexId) -> &[VertexId] {
        let adj = &self.adj_list[v];
        let start = adj.partition_point(|u| *u <= v);
        &adj[start..]
    }

    /// returns if a and b are adjacent (O(1) through the adjacency matrix)
    pub fn are_adjacent(&self, a: VertexId, b: VertexId) -> bool {
        self.adj_matrix[a].contains(b)
    }

    /// bitset of the neighbors of v
    pub fn neighbor_set(&self, v: VertexId) -> &BitSet {
        &self.adj_matrix[v]
    }

    /// print statistics of the graph
    pub fn display_statistics(&self) {
        println!("\t{} \t vertices", self.n());
        println!("\t{} \t edges", self.m());
        if self.n() > 0 {
            let degrees: Vec<usize> = (0..self.n()).map(|i| self.degree(i)).collect();
            println!("\t{} \t min degree", degrees.iter().min().unwrap());
            println!("\t{} \t max degree", degrees.iter().max().unwrap());
        }
    }
}

/**
returns None if the solution is not an independent set (or repeats a vertex)
returns the number of satisfied clients if it is feasible
*/
pub fn checker(graph: &ConflictGraph, sol: &[VertexId]) -> Option<usize> {
    // check that no vertex is repeated
    let mut visited = BitSet::new();
    for v in sol {
        if visited.contains(*v) {
            return None; // already added
        }
        visited.insert(*v);
    }
    // check conflicts
    for v1 in sol {
        for v2 in sol {
            if graph.are_adjacent(*v1, *v2) { return None }
        }
    }
    Some(sol.len())
}
