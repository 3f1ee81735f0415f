//! To ease access to most frequently used items
//!

pub use crate::io::csv::*;

pub use crate::density::{
    check_graph, densest_at_most_k_subgraph, densest_subgraph, densest_subgraph_peeling,
    densest_subgraph_with, density,
};

pub use crate::flow::{Dinic, FlowNetwork, MinCut, MinCutSolver};

pub use crate::error::{DensestError, Result};

pub use crate::gens::*;

pub use crate::tools::degrees::*;
