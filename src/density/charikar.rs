//! Minimum-degree peeling : Charikar's 1/2-approximation of the densest subgraph.
//!
//! Vertices are removed one by one, always a vertex of currently minimal degree,
//! and the densest of the n intermediate vertex sets is returned. The returned
//! density is at least half the optimum.

use cpu_time::ProcessTime;
use std::time::SystemTime;

use log::*;

use petgraph::graph::{Graph, IndexType};
use petgraph::Undirected;

use super::buckets::DegreeBuckets;
use super::working::{check_graph, WorkingGraph};
use crate::error::Result;

/// computes a 1/2-approximation of the densest subgraph by degree peeling.
///
/// Returns the best vertex set seen along the peeling order (sorted by
/// increasing rank) and its density. Deterministic : two calls on clones of the
/// same graph return the same subset. A graph without edges returns the whole
/// vertex set at density 0.
pub fn densest_subgraph_peeling<N, E, Ix>(
    graph: &Graph<N, E, Undirected, Ix>,
) -> Result<(Vec<usize>, f64)>
where
    Ix: IndexType,
{
    //
    check_graph(graph)?;
    //
    let cpu_start = ProcessTime::now();
    let sys_start = SystemTime::now();
    //
    let mut working = WorkingGraph::from_graph(graph);
    let nb_nodes = working.get_nb_nodes();
    if nb_nodes == 0 {
        return Ok((Vec::new(), 0.));
    }
    let mut buckets = DegreeBuckets::new(&working.get_degrees());
    //
    let mut best_density = working.get_nb_edges() as f64 / nb_nodes as f64;
    let mut best_step = 0usize;
    let mut order = Vec::<usize>::with_capacity(nb_nodes);
    //
    while working.get_nb_alive() > 0 {
        let current = working.get_nb_edges() as f64 / working.get_nb_alive() as f64;
        if current > best_density {
            best_density = current;
            best_step = order.len();
        }
        let Some(v) = buckets.pop_min() else {
            break;
        };
        for u in working.remove_vertex(v) {
            buckets.decrement(u);
        }
        order.push(v);
    }
    // the active set at the best step is the suffix of the removal order
    let mut best: Vec<usize> = order[best_step..].to_vec();
    best.sort_unstable();
    //
    info!(
        "densest_subgraph_peeling: density {:.3e}, subset size {}, sys time(ms) {:.3e} cpu time(ms) {:.3e}",
        best_density,
        best.len(),
        sys_start.elapsed().unwrap().as_millis(),
        cpu_start.elapsed().as_millis()
    );
    //
    Ok((best, best_density))
} // end of densest_subgraph_peeling

//==========================================================================================================

// end of mod tests
