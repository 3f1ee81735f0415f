//! random graph generators, used by tests and the demo binary.
//!
//! Graphs are petgraph undirected graphs with node ranks as node weights and
//! unit edge weights. Generation is deterministic given the caller's rng.

use log::*;

use petgraph::graph::{Graph, NodeIndex};
use petgraph::Undirected;

use rand::Rng;

/// Erdos-Renyi G(n,p) : each of the n(n-1)/2 possible edges is drawn
/// independently with probability p. No self loop, no parallel edge.
pub fn gnp<R: Rng>(nb_nodes: usize, proba: f64, rng: &mut R) -> Graph<u32, f64, Undirected> {
    assert!((0. ..=1.).contains(&proba), "proba must be in [0,1]");
    let expected = (proba * (nb_nodes * nb_nodes.saturating_sub(1)) as f64 / 2.) as usize;
    let mut graph = Graph::with_capacity(nb_nodes, expected);
    let nodes: Vec<NodeIndex> = (0..nb_nodes).map(|i| graph.add_node(i as u32)).collect();
    for i in 0..nb_nodes {
        for j in i + 1..nb_nodes {
            if rng.gen_bool(proba) {
                graph.add_edge(nodes[i], nodes[j], 1.);
            }
        }
    }
    debug!(
        "gnp generated {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    graph
} // end of gnp

/// a G(n,p) background with a clique planted on the first clique_size vertices.
/// Useful to build graphs whose densest subgraph is known in advance.
pub fn planted_clique<R: Rng>(
    nb_nodes: usize,
    proba: f64,
    clique_size: usize,
    rng: &mut R,
) -> Graph<u32, f64, Undirected> {
    assert!(clique_size <= nb_nodes);
    let mut graph = gnp(nb_nodes, proba, rng);
    for i in 0..clique_size {
        for j in i + 1..clique_size {
            let (u, v) = (NodeIndex::new(i), NodeIndex::new(j));
            if graph.find_edge(u, v).is_none() {
                graph.add_edge(u, v, 1.);
            }
        }
    }
    graph
} // end of planted_clique

//==========================================================================================================

#[cfg(test)]
mod tests {

    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    fn log_init_test() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn gnp_extreme_probas() {
        log_init_test();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
        let empty = gnp(10, 0., &mut rng);
        assert_eq!(empty.edge_count(), 0);
        let complete = gnp(10, 1., &mut rng);
        assert_eq!(complete.edge_count(), 45);
    }

    #[test]
    fn planted_clique_is_complete() {
        log_init_test();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(2);
        let graph = planted_clique(20, 0.1, 6, &mut rng);
        for i in 0..6 {
            for j in i + 1..6 {
                assert!(graph
                    .find_edge(NodeIndex::new(i), NodeIndex::new(j))
                    .is_some());
            }
        }
        // planting must not duplicate background edges
        assert!(crate::density::check_graph(&graph).is_ok());
    }
} // end of mod tests
