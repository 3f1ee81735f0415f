//! This module is devoted to densest subgraph extraction for undirected graphs.
//!
//! Density of a vertex subset S is |E(S)|/|S|, the number of induced edges over
//! the subset size. Algorithms implemented (or reimplemented) are:
//!
//! - Goldberg _Finding a maximum density subgraph_ Technical Report UCB/CSD-84-171 [1984](https://digitalassets.lib.berkeley.edu/techreports/ucb/text/CSD-84-171.pdf).
//!   The exact solver : a parametric reduction to minimum cut driven by a binary search
//!   over the density threshold.
//!
//! - Charikar _Greedy approximation algorithms for finding dense components in a graph_
//!   APPROX [2000](https://link.springer.com/chapter/10.1007/3-540-44436-X_10).
//!   A 1/2-approximation by minimum-degree peeling, and the degree pruning rule behind
//!   the size-constrained (at most k vertices) variant.
//!
//! All entry points leave the caller's graph untouched : destructive phases run on an
//! owned working copy.

/// the density oracle
pub mod measure;
pub use measure::density;

/// owned mutable working copy of a graph
pub(crate) mod working;
pub use working::check_graph;

/// degree indexed buckets supporting O(1) peeling
pub(crate) mod buckets;

/// peeling 1/2-approximation
pub mod charikar;
pub use charikar::densest_subgraph_peeling;

/// exact solver via parametric max-flow
pub mod goldberg;
pub use goldberg::{build_parametric_network, densest_subgraph, densest_subgraph_with};

/// densest subgraph on at most k vertices
pub mod atmostk;
pub use atmostk::densest_at_most_k_subgraph;
