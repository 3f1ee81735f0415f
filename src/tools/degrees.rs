//! compute degrees of an undirected petgraph graph
//!
//! The graph representation relies on petgraph. Degrees are taken as the number
//! of neighbours, so the input must be free of self loops and parallel edges
//! (see [crate::density::check_graph]).

use petgraph::graph::{Graph, IndexType, NodeIndex};
use petgraph::Undirected;

/// returns the vector of degrees, indexed by node rank
pub fn get_degrees<N, E, Ix>(graph: &Graph<N, E, Undirected, Ix>) -> Vec<usize>
where
    Ix: IndexType,
{
    let nb_nodes = graph.node_count();
    (0..nb_nodes)
        .map(|rank| graph.neighbors(NodeIndex::new(rank)).count())
        .collect()
} // end of get_degrees

/// returns the maximal degree of the graph, 0 for an empty graph
pub fn get_max_degree<N, E, Ix>(graph: &Graph<N, E, Undirected, Ix>) -> usize
where
    Ix: IndexType,
{
    get_degrees(graph).into_iter().max().unwrap_or(0)
} // end of get_max_degree

//==========================================================================================================

#[cfg(test)]
mod tests {

    use super::*;

    fn log_init_test() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn degrees_star() {
        log_init_test();
        // star on 5 nodes, hub is node 0
        let mut graph = Graph::<u32, f64, Undirected>::new_undirected();
        let nodes: Vec<_> = (0..5u32).map(|i| graph.add_node(i)).collect();
        for leaf in 1..5 {
            graph.add_edge(nodes[0], nodes[leaf], 1.);
        }
        let degrees = get_degrees(&graph);
        assert_eq!(degrees, vec![4, 1, 1, 1, 1]);
        assert_eq!(get_max_degree(&graph), 4);
    } // end of degrees_star

    #[test]
    fn degrees_empty() {
        log_init_test();
        let graph = Graph::<u32, f64, Undirected>::new_undirected();
        assert!(get_degrees(&graph).is_empty());
        assert_eq!(get_max_degree(&graph), 0);
    }
} // end of mod tests
