//! Exact Maximum Independent Set solvers for the "one pizza" client
//! satisfaction problem: each client likes some ingredients and dislikes
//! others; two clients conflict if one's liked ingredient is the other's
//! disliked ingredient. A feasible client subset is an independent set of the
//! conflict graph, so satisfying the most clients is a MIS search.

// #![warn(clippy::all, clippy::pedantic)]
// useful additional warnings if docs are missing, or crates imported but unused, etc.
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unsafe_code)]
#![warn(unused_extern_crates)]
#![warn(variant_size_differences)]

// not sure if already by default in clippy
#![warn(clippy::similar_names)]
#![warn(clippy::shadow_unrelated)]
#![warn(clippy::shadow_same)]
#![warn(clippy::shadow_reuse)]


/// client preference instance (likes/dislikes), parsing and solution output
pub mod pizza;

/// conflict graph data model and solution checker
pub mod graph;

/// bounding functions and the greedy ordering estimate
pub mod bound;

/// cooperative cancellation flag polled by every solver loop
pub mod stopping;

/// greedy construction heuristics (fast, approximate)
pub mod heuristics;

/// helper and utility methods for executables
pub mod util;

/// exact branch-and-bound search strategies
pub mod search;
