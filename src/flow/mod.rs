//! max-flow / min-cut primitives.
//!
//! The solver is a pluggable collaborator behind the [MinCutSolver] trait, so the
//! binary-search driver of [crate::density::goldberg] never depends on a specific
//! max-flow algorithm. The default implementation is [Dinic]; any algorithm
//! satisfying max-flow / min-cut duality exactly can be substituted.

pub mod dinic;
pub use dinic::Dinic;

use crate::error::Result;

/// numerical zero for residual capacities
pub(crate) const FLOW_EPSILON: f64 = 1.0e-10;

/// a directed capacitated arc. Arcs are stored in pairs : arc 2i is the forward
/// arc, arc 2i+1 its residual companion, so the companion of arc e is e ^ 1.
#[derive(Copy, Clone, Debug)]
pub(crate) struct FlowArc {
    pub(crate) to: usize,
    pub(crate) cap: f64,
}

/// A directed network with f64 arc capacities in forward-star representation.
/// Instances are cheap and ephemeral : the exact solver rebuilds one per
/// binary-search iteration.
#[derive(Clone, Debug)]
pub struct FlowNetwork {
    /// per node, indexes into arcs
    pub(crate) adjacency: Vec<Vec<usize>>,
    pub(crate) arcs: Vec<FlowArc>,
}

impl FlowNetwork {
    /// allocates a network on nb_nodes nodes and no arc
    pub fn new(nb_nodes: usize) -> Self {
        FlowNetwork {
            adjacency: (0..nb_nodes).map(|_| Vec::new()).collect(),
            arcs: Vec::new(),
        }
    }

    /// number of nodes (sources and sinks included)
    pub fn get_nb_nodes(&self) -> usize {
        self.adjacency.len()
    }

    /// number of directed arcs, residual companions included
    pub fn get_nb_arcs(&self) -> usize {
        self.arcs.len()
    }

    /// adds a directed arc from -> to with given capacity (and its residual companion at capacity 0)
    pub fn add_arc(&mut self, from: usize, to: usize, cap: f64) {
        self.push_pair(from, to, cap, 0.);
    }

    /// adds an arc pair carrying the same capacity in both directions,
    /// as needed for the undirected edges of the parametric reduction
    pub fn add_symmetric_arc(&mut self, from: usize, to: usize, cap: f64) {
        self.push_pair(from, to, cap, cap);
    }

    fn push_pair(&mut self, from: usize, to: usize, cap_forward: f64, cap_backward: f64) {
        let e = self.arcs.len();
        self.arcs.push(FlowArc {
            to,
            cap: cap_forward,
        });
        self.arcs.push(FlowArc {
            to: from,
            cap: cap_backward,
        });
        self.adjacency[from].push(e);
        self.adjacency[to].push(e + 1);
    } // end of push_pair

    /// total capacity of the arcs leaving the given node set.
    /// Used by the exact solver to cross-check the value a solver reports
    /// against the partition it reports.
    pub fn cut_capacity(&self, source_side: &[usize]) -> f64 {
        let mut inside = vec![false; self.get_nb_nodes()];
        for &v in source_side {
            inside[v] = true;
        }
        let mut capacity = 0.;
        for &v in source_side {
            for &e in &self.adjacency[v] {
                if !inside[self.arcs[e].to] {
                    capacity += self.arcs[e].cap;
                }
            }
        }
        capacity
    } // end of cut_capacity
} // end of impl FlowNetwork

/// a minimum cut : the source side of the partition and the cut value
/// (equal to the maximum flow by duality)
#[derive(Clone, Debug)]
pub struct MinCut {
    /// nodes on the source side, sorted by increasing id, source included
    pub source_side: Vec<usize>,
    /// total capacity crossing the cut
    pub value: f64,
}

/// The max-flow / min-cut collaborator consumed by the exact densest subgraph
/// solver. Implementations must be deterministic and satisfy duality exactly
/// (up to floating rounding) : the driver rejects inconsistent answers.
pub trait MinCutSolver {
    /// computes a minimum source/sink cut of the network
    fn min_cut(&self, network: &FlowNetwork, source: usize, sink: usize) -> Result<MinCut>;
}
