//! Exact densest subgraph via Goldberg's parametric max-flow reduction.
//!
//! For a density threshold λ, the auxiliary network H(λ) has a node per vertex
//! plus a source s and a sink t, arcs s→v of capacity degree(v), arcs v→t of
//! capacity 2λ and, for each undirected edge {u,v}, unit arcs in both
//! directions. The trivial cut {s} has capacity 2|E|, and for a subset S the
//! cut placing S on the source side costs 2|E| - 2(|E(S)| - λ|S|) : a subset
//! of density above λ exists iff the minimum s-t cut is strictly cheaper than
//! 2|E|, and the source side of such a cut is then a non-empty witness.
//! A binary search over λ down to the 1/(n(n-1)) precision floor, the smallest
//! gap between two distinct density values on n vertices, yields the optimum.

use cpu_time::ProcessTime;
use std::time::SystemTime;

use log::*;

use petgraph::graph::{Graph, IndexType, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Undirected;

use super::measure::density;
use super::working::check_graph;
use crate::error::{DensestError, Result};
use crate::flow::{Dinic, FlowNetwork, MinCutSolver};
use crate::tools::degrees::get_max_degree;

/// absolute tolerance granted to floating min-cut values, scaled by the cut bound
const CUT_EPSILON: f64 = 1.0e-9;

/// builds the auxiliary network H(lambda) of the parametric reduction.
/// Nodes 0..n are the graph vertices, node n the source, node n+1 the sink.
/// Rejects a negative or non-finite threshold.
pub fn build_parametric_network<N, E, Ix>(
    graph: &Graph<N, E, Undirected, Ix>,
    lambda: f64,
) -> Result<FlowNetwork>
where
    Ix: IndexType,
{
    if !lambda.is_finite() || lambda < 0. {
        return Err(DensestError::InvalidArgument(format!(
            "density threshold must be finite and non negative, got {lambda}"
        )));
    }
    let nb_nodes = graph.node_count();
    let source = nb_nodes;
    let sink = nb_nodes + 1;
    let mut network = FlowNetwork::new(nb_nodes + 2);
    for v in 0..nb_nodes {
        let degree = graph.neighbors(NodeIndex::new(v)).count();
        network.add_arc(source, v, degree as f64);
        network.add_arc(v, sink, 2. * lambda);
    }
    for edge in graph.edge_references() {
        network.add_symmetric_arc(edge.source().index(), edge.target().index(), 1.);
    }
    Ok(network)
} // end of build_parametric_network

/// computes the exact densest subgraph with the default [Dinic] solver.
///
/// Returns the optimal vertex set (sorted by increasing rank) and its density.
/// A graph without edges returns the whole vertex set at density 0.
pub fn densest_subgraph<N, E, Ix>(graph: &Graph<N, E, Undirected, Ix>) -> Result<(Vec<usize>, f64)>
where
    Ix: IndexType,
{
    densest_subgraph_with(graph, &Dinic)
} // end of densest_subgraph

/// same as [densest_subgraph] with an injected min-cut solver.
pub fn densest_subgraph_with<N, E, Ix, S>(
    graph: &Graph<N, E, Undirected, Ix>,
    solver: &S,
) -> Result<(Vec<usize>, f64)>
where
    Ix: IndexType,
    S: MinCutSolver,
{
    //
    check_graph(graph)?;
    //
    let cpu_start = ProcessTime::now();
    let sys_start = SystemTime::now();
    //
    let nb_nodes = graph.node_count();
    let nb_edges = graph.edge_count();
    if nb_edges == 0 {
        // zero-edge convention : whole vertex set at density 0
        return Ok(((0..nb_nodes).collect(), 0.));
    }
    let source = nb_nodes;
    let sink = nb_nodes + 1;
    // density can never exceed half the maximal degree
    let mut low = 0.;
    let mut high = get_max_degree(graph) as f64 / 2.;
    // two distinct densities on n vertices differ by at least 1/(n(n-1))
    let precision = 1. / (nb_nodes as f64 * (nb_nodes as f64 - 1.));
    let cut_bound = 2. * nb_edges as f64;
    let tolerance = CUT_EPSILON * (1. + cut_bound);
    //
    let mut best: Vec<usize> = (0..nb_nodes).collect();
    let mut nb_iterations = 0usize;
    while high - low >= precision {
        nb_iterations += 1;
        let mid = (low + high) / 2.;
        let network = build_parametric_network(graph, mid)?;
        let cut = solver.min_cut(&network, source, sink)?;
        // never accept a cut value the solver cannot certify
        let recomputed = network.cut_capacity(&cut.source_side);
        if (recomputed - cut.value).abs() > tolerance {
            return Err(DensestError::SolverFailure(format!(
                "cut value {:.6e} disagrees with partition capacity {:.6e}",
                cut.value, recomputed
            )));
        }
        debug!(
            "lambda {:.6e} cut value {:.6e} bound {:.6e}",
            mid, cut.value, cut_bound
        );
        // the trivial cut {s} always has capacity 2m, so a feasible threshold
        // shows up as a strictly cheaper cut together with a non-empty witness
        let subset: Vec<usize> = cut
            .source_side
            .iter()
            .copied()
            .filter(|&v| v < nb_nodes)
            .collect();
        if cut.value < cut_bound - tolerance && !subset.is_empty() {
            // witness of density > mid
            low = mid;
            best = subset;
        } else {
            high = mid;
        }
    }
    best.sort_unstable();
    let best_density = density(graph, &best);
    //
    info!(
        "densest_subgraph: density {:.3e}, subset size {}, {} flow calls, sys time(ms) {:.3e} cpu time(ms) {:.3e}",
        best_density,
        best.len(),
        nb_iterations,
        sys_start.elapsed().unwrap().as_millis(),
        cpu_start.elapsed().as_millis()
    );
    //
    Ok((best, best_density))
} // end of densest_subgraph_with

//==========================================================================================================

// end of mod tests
