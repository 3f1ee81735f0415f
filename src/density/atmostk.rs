//! Densest subgraph on at most k vertices.
//!
//! The problem is NP-hard, so the solver combines two pruning passes with a
//! bounded brute force :
//! 1. a peeling pass gives a candidate lower bound d' : the best density seen
//!    while at most k vertices remain;
//! 2. every vertex whose current degree is positive but below d' is removed,
//!    down to a fixed point. Such a vertex cannot belong to an optimal set of
//!    size at most k : dropping it from any containing set only raises density
//!    (Charikar's argument), so the optimum survives the pruning;
//! 3. all subsets of size 1..=k of the surviving positive-degree vertices are
//!    enumerated, measuring density against the original graph.
//!
//! The enumeration is exponential in the survivor count; the pruning is a
//! heuristic making it small in practice, there is no polynomial bound.

use cpu_time::ProcessTime;
use std::time::SystemTime;

use log::*;

use petgraph::graph::{Graph, IndexType};
use petgraph::Undirected;

use super::buckets::DegreeBuckets;
use super::goldberg::densest_subgraph;
use super::measure::density;
use super::working::{check_graph, WorkingGraph};
use crate::error::{DensestError, Result};

/// computes the densest subgraph among subsets of at most k vertices.
///
/// k = 0 is rejected; k >= n delegates to the unconstrained exact solver.
/// When no vertex of positive degree survives the pruning (in particular for
/// graphs without edges) the empty set is returned at density 0.
pub fn densest_at_most_k_subgraph<N, E, Ix>(
    graph: &Graph<N, E, Undirected, Ix>,
    k: usize,
) -> Result<(Vec<usize>, f64)>
where
    Ix: IndexType,
{
    if k == 0 {
        return Err(DensestError::InvalidArgument(
            "k must be at least 1".to_string(),
        ));
    }
    check_graph(graph)?;
    let nb_nodes = graph.node_count();
    if k >= nb_nodes {
        return densest_subgraph(graph);
    }
    //
    let cpu_start = ProcessTime::now();
    let sys_start = SystemTime::now();
    //
    let lower_bound = peeling_lower_bound(graph, k);
    debug!("at-most-{} peeling lower bound : {:.3e}", k, lower_bound);
    //
    // threshold pruning to a fixed point
    let mut working = WorkingGraph::from_graph(graph);
    let mut pruned = true;
    while pruned {
        pruned = false;
        for v in 0..nb_nodes {
            if working.is_alive(v)
                && working.get_degree(v) > 0
                && (working.get_degree(v) as f64) < lower_bound
            {
                working.remove_vertex(v);
                pruned = true;
            }
        }
    }
    let candidates: Vec<usize> = (0..nb_nodes)
        .filter(|&v| working.is_alive(v) && working.get_degree(v) > 0)
        .collect();
    info!(
        "at-most-{} pruning kept {} candidates out of {}",
        k,
        candidates.len(),
        nb_nodes
    );
    if candidates.is_empty() {
        return Ok((Vec::new(), 0.));
    }
    //
    // brute force over the shrunken candidate set, scored on the original graph
    let mut best_subset = Vec::<usize>::new();
    let mut best_density = 0.;
    let mut chosen = Vec::<usize>::new();
    for size in 1..=k.min(candidates.len()) {
        enumerate_subsets(&candidates, size, 0, &mut chosen, &mut |subset| {
            let d = density(graph, subset);
            if d > best_density {
                best_density = d;
                best_subset = subset.to_vec();
            }
        });
    }
    best_subset.sort_unstable();
    //
    info!(
        "densest_at_most_k_subgraph: k {}, density {:.3e}, subset size {}, sys time(ms) {:.3e} cpu time(ms) {:.3e}",
        k,
        best_density,
        best_subset.len(),
        sys_start.elapsed().unwrap().as_millis(),
        cpu_start.elapsed().as_millis()
    );
    //
    Ok((best_subset, best_density))
} // end of densest_at_most_k_subgraph

/// peels a working copy, recording the best density among the steps where at
/// most k vertices remain. That density is achievable by a set of size <= k,
/// hence a valid lower bound for the pruning.
fn peeling_lower_bound<N, E, Ix>(graph: &Graph<N, E, Undirected, Ix>, k: usize) -> f64
where
    Ix: IndexType,
{
    let mut working = WorkingGraph::from_graph(graph);
    let mut buckets = DegreeBuckets::new(&working.get_degrees());
    let mut bound = 0.;
    while working.get_nb_alive() > 0 {
        if working.get_nb_alive() <= k {
            let current = working.get_nb_edges() as f64 / working.get_nb_alive() as f64;
            if current > bound {
                bound = current;
            }
        }
        let Some(v) = buckets.pop_min() else {
            break;
        };
        for u in working.remove_vertex(v) {
            buckets.decrement(u);
        }
    }
    bound
} // end of peeling_lower_bound

/// calls f on every subset of the given size, in lexicographic order over candidates
fn enumerate_subsets<F>(
    candidates: &[usize],
    size: usize,
    from: usize,
    chosen: &mut Vec<usize>,
    f: &mut F,
) where
    F: FnMut(&[usize]),
{
    if chosen.len() == size {
        f(chosen);
        return;
    }
    let missing = size - chosen.len();
    // enough candidates must remain to complete the subset
    for i in from..=candidates.len() - missing {
        chosen.push(candidates[i]);
        enumerate_subsets(candidates, size, i + 1, chosen, f);
        chosen.pop();
    }
} // end of enumerate_subsets

//==========================================================================================================

#[cfg(test)]
mod tests {

    use super::*;
    use crate::gens::gnp;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    fn log_init_test() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn graph_from_edges(nb_nodes: u32, edges: &[(u32, u32)]) -> Graph<u32, f64, Undirected> {
        let mut graph = Graph::new_undirected();
        let nodes: Vec<_> = (0..nb_nodes).map(|i| graph.add_node(i)).collect();
        for &(u, v) in edges {
            graph.add_edge(nodes[u as usize], nodes[v as usize], 1.);
        }
        graph
    }

    /// reference answer by enumerating every subset of size <= k
    fn brute_force_at_most_k(graph: &Graph<u32, f64, Undirected>, k: usize) -> f64 {
        let nb_nodes = graph.node_count();
        let mut best = 0.;
        for mask in 1u32..(1 << nb_nodes) {
            if (mask.count_ones() as usize) > k {
                continue;
            }
            let subset: Vec<usize> = (0..nb_nodes).filter(|&v| mask & (1 << v) != 0).collect();
            let d = density(graph, &subset);
            if d > best {
                best = d;
            }
        }
        best
    } // end of brute_force_at_most_k

    #[test]
    fn at_most_k_rejects_zero() {
        log_init_test();
        let graph = graph_from_edges(2, &[(0, 1)]);
        assert!(matches!(
            densest_at_most_k_subgraph(&graph, 0),
            Err(DensestError::InvalidArgument(_))
        ));
    }

    #[test]
    fn at_most_k_star() {
        log_init_test();
        // star on 5 vertices, k = 2 : a hub-leaf pair at density 1/2
        let graph = graph_from_edges(5, &[(0, 1), (0, 2), (0, 3), (0, 4)]);
        let (subset, d) = densest_at_most_k_subgraph(&graph, 2).unwrap();
        assert!((d - 0.5).abs() < 1.0e-12);
        assert_eq!(subset.len(), 2);
        assert!(subset.contains(&0), "the hub must be selected");
    }

    #[test]
    fn at_most_k_delegates_when_unconstrained() {
        log_init_test();
        let graph = graph_from_edges(4, &[(0, 1), (0, 2), (1, 2), (0, 3), (1, 3)]);
        let (_, unconstrained) = densest_subgraph(&graph).unwrap();
        let (_, d) = densest_at_most_k_subgraph(&graph, 4).unwrap();
        assert_eq!(d, unconstrained);
        let (_, d) = densest_at_most_k_subgraph(&graph, 100).unwrap();
        assert_eq!(d, unconstrained);
    }

    #[test]
    fn at_most_k_no_edges() {
        log_init_test();
        let graph = graph_from_edges(5, &[]);
        let (subset, d) = densest_at_most_k_subgraph(&graph, 2).unwrap();
        assert!(subset.is_empty());
        assert_eq!(d, 0.);
    }

    #[test]
    fn at_most_k_triangle_in_path() {
        log_init_test();
        // path 3-4-5 attached to a triangle 0-1-2 : for k = 3 the triangle wins
        let graph = graph_from_edges(6, &[(0, 1), (1, 2), (0, 2), (2, 3), (3, 4), (4, 5)]);
        let (subset, d) = densest_at_most_k_subgraph(&graph, 3).unwrap();
        assert_eq!(subset, vec![0, 1, 2]);
        assert!((d - 1.).abs() < 1.0e-12);
    }

    #[test]
    fn at_most_k_matches_brute_force_on_small_graphs() {
        log_init_test();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        for nb_nodes in [6usize, 8, 10] {
            let small = gnp(nb_nodes, 0.4, &mut rng);
            for k in 1..=nb_nodes {
                let expected = brute_force_at_most_k(&small, k);
                let (_, d) = densest_at_most_k_subgraph(&small, k).unwrap();
                assert!(
                    (d - expected).abs() < 1.0e-9,
                    "n {nb_nodes} k {k} : got {d}, expected {expected}"
                );
            }
        }
    } // end of at_most_k_matches_brute_force_on_small_graphs
} // end of mod tests
